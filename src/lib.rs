//! European option pricing with the Black-Scholes-Merton model.
//!
//! The pricing engine in [`models`] is a pure function of a
//! [`types::PricingRequest`]: it returns call and put prices, the five
//! standard Greeks for the requested side, and a moneyness classification,
//! or an [`errors::EngineError`] when the request cannot be priced.
//!
//! ```
//! use bs_options::models;
//! use bs_options::types::{OptionSide, PricingRequest};
//!
//! let req = PricingRequest::new(100.0, 100.0, 0.25, 0.02, 0.20, OptionSide::Call);
//! let res = models::price(&req).unwrap();
//! assert!(res.call_price > 0.0);
//! ```
//!
//! The [`cli`] module holds the terminal front end (interactive prompts,
//! demo scenarios and report rendering) used by the binary.

pub mod cli;
pub mod config;
pub mod errors;
pub mod models;
pub mod types;
