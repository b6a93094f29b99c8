pub mod black_scholes;
pub mod moneyness;

use crate::errors::EngineResult;
use crate::types::{PricingRequest, PricingResult};

/// All pricing models implement this trait.
/// price() must be a pure function: deterministic output from inputs only.
/// Send + Sync so one instance can be shared across threads.
pub trait OptionPricer: Send + Sync {
    fn name(&self) -> &'static str;

    /// Price the request or report why it was not attempted.
    /// Never panics and never returns a placeholder zero on bad input.
    fn price(&self, request: &PricingRequest) -> EngineResult<PricingResult>;
}

/// Convenience entry point using the closed-form Black-Scholes model.
pub fn price(request: &PricingRequest) -> EngineResult<PricingResult> {
    black_scholes::BlackScholes::new().price(request)
}
