use crate::errors::{finite, EngineError, EngineResult};
use std::str::FromStr;

// ── Option side ──

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OptionSide {
    Call,
    Put,
}

impl std::fmt::Display for OptionSide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Call => write!(f, "call"),
            Self::Put => write!(f, "put"),
        }
    }
}

/// Strict parser. The lenient default-to-call behavior lives in `cli::input`.
impl FromStr for OptionSide {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "call" => Ok(Self::Call),
            "put" => Ok(Self::Put),
            other => Err(EngineError::Parse(format!("unknown option side: {other:?}"))),
        }
    }
}

// ── Pricing request (immutable input tuple) ──

#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct PricingRequest {
    pub spot: f64,
    pub strike: f64,
    /// Years until expiration
    pub time_to_expiry: f64,
    /// Continuously compounded, may be zero or negative
    pub risk_free_rate: f64,
    /// Annualized
    pub volatility: f64,
    pub side: OptionSide,
}

impl PricingRequest {
    pub fn new(
        spot: f64,
        strike: f64,
        time_to_expiry: f64,
        risk_free_rate: f64,
        volatility: f64,
        side: OptionSide,
    ) -> Self {
        Self {
            spot,
            strike,
            time_to_expiry,
            risk_free_rate,
            volatility,
            side,
        }
    }

    /// Checks the fields the closed-form model divides by or takes logs of.
    /// The rate is deliberately left alone.
    pub fn validate(&self) -> Result<(), EngineError> {
        let checks = [
            ("spot", self.spot),
            ("strike", self.strike),
            ("time_to_expiry", self.time_to_expiry),
            ("volatility", self.volatility),
        ];
        for (field, value) in checks {
            if !value.is_finite() || value <= 0.0 {
                return Err(EngineError::InvalidInput { field, value });
            }
        }
        Ok(())
    }
}

// ── Precomputed model parameters (stack, no alloc) ──

#[derive(Debug, Clone, Copy)]
pub struct PricingParams {
    pub spot: f64,
    pub strike: f64,
    pub ttl_years: f64,
    pub rate: f64,
    pub sigma: f64,
    // Precomputed
    pub sqrt_t: f64,
    pub sigma_sqrt_t: f64,
    /// e^(-rT)
    pub discount: f64,
    pub d1: f64,
    pub d2: f64,
}

impl PricingParams {
    /// Caller must have validated the request. Intermediates are still
    /// checked: an overflowed sigma^2 would push d1 and d2 to the same
    /// infinity and price a finite but wrong result.
    #[inline]
    pub fn new(req: &PricingRequest) -> EngineResult<Self> {
        let ln_s_k = finite((req.spot / req.strike).ln(), "ln(S/K)")?;
        let sqrt_t = req.time_to_expiry.sqrt();
        let sigma_sqrt_t = finite(req.volatility * sqrt_t, "sigma*sqrt(T)")?;
        let half_sigma_sq = finite(0.5 * req.volatility * req.volatility, "sigma^2/2")?;
        let discount = finite((-req.risk_free_rate * req.time_to_expiry).exp(), "discount factor")?;
        let drift = finite(
            ln_s_k + (req.risk_free_rate + half_sigma_sq) * req.time_to_expiry,
            "d1 numerator",
        )?;
        let d1 = finite(drift / sigma_sqrt_t, "d1")?;
        let d2 = finite(d1 - sigma_sqrt_t, "d2")?;
        Ok(Self {
            spot: req.spot,
            strike: req.strike,
            ttl_years: req.time_to_expiry,
            rate: req.risk_free_rate,
            sigma: req.volatility,
            sqrt_t,
            sigma_sqrt_t,
            discount,
            d1,
            d2,
        })
    }
}

// ── Greeks ──

#[derive(Debug, Clone, Copy, PartialEq, Default, serde::Serialize)]
pub struct Greeks {
    pub delta: f64,
    pub gamma: f64,
    /// Price units per year
    pub theta: f64,
    /// Raw dV/dσ, not scaled per 1% move
    pub vega: f64,
    /// Raw dV/dr, not scaled per 1% move
    pub rho: f64,
}

impl Greeks {
    /// Display-only conversion of annual theta.
    #[inline]
    pub fn theta_per_day(&self, days_per_year: f64) -> f64 {
        self.theta / days_per_year
    }
}

// ── Moneyness ──

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Moneyness {
    InTheMoney,
    AtTheMoney,
    OutOfTheMoney,
}

impl Moneyness {
    #[inline]
    pub fn short_code(&self) -> &'static str {
        match self {
            Self::InTheMoney => "ITM",
            Self::AtTheMoney => "ATM",
            Self::OutOfTheMoney => "OTM",
        }
    }
}

impl std::fmt::Display for Moneyness {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InTheMoney => write!(f, "In-the-Money"),
            Self::AtTheMoney => write!(f, "At-the-Money"),
            Self::OutOfTheMoney => write!(f, "Out-of-the-Money"),
        }
    }
}

// ── Pricing result ──

#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct PricingResult {
    pub side: OptionSide,
    pub call_price: f64,
    pub put_price: f64,
    /// Price of `side`
    pub selected_price: f64,
    pub greeks: Greeks,
    pub intrinsic_value: f64,
    pub time_value: f64,
    pub moneyness: Moneyness,
    pub description: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> PricingRequest {
        PricingRequest::new(100.0, 100.0, 0.25, 0.02, 0.20, OptionSide::Call)
    }

    #[test]
    fn test_side_parsing_is_strict() {
        assert_eq!(" PUT ".parse::<OptionSide>().unwrap(), OptionSide::Put);
        assert_eq!("Call".parse::<OptionSide>().unwrap(), OptionSide::Call);
        assert!("c".parse::<OptionSide>().is_err());
        assert!("p".parse::<OptionSide>().is_err());
        assert!("straddle".parse::<OptionSide>().is_err());
    }

    #[test]
    fn test_validate_rejects_each_field() {
        let cases = [
            ("spot", PricingRequest { spot: 0.0, ..request() }),
            ("strike", PricingRequest { strike: -5.0, ..request() }),
            ("time_to_expiry", PricingRequest { time_to_expiry: 0.0, ..request() }),
            ("volatility", PricingRequest { volatility: 0.0, ..request() }),
            ("spot", PricingRequest { spot: f64::NAN, ..request() }),
            ("volatility", PricingRequest { volatility: f64::INFINITY, ..request() }),
        ];
        for (expected, req) in cases {
            match req.validate() {
                Err(EngineError::InvalidInput { field, .. }) => assert_eq!(field, expected),
                other => panic!("expected InvalidInput for {expected}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_validate_accepts_negative_rate() {
        let req = PricingRequest { risk_free_rate: -0.01, ..request() };
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_precomputed_d1_d2() {
        let p = PricingParams::new(&request()).unwrap();
        // ln(1) = 0, (0.02 + 0.02) * 0.25 / (0.2 * 0.5) = 0.1
        assert!((p.d1 - 0.1).abs() < 1e-12, "d1={}", p.d1);
        assert!(p.d2.abs() < 1e-12, "d2={}", p.d2);
        assert!((p.discount - (-0.005f64).exp()).abs() < 1e-15);
    }

    #[test]
    fn test_overflowed_intermediates_are_reported() {
        let huge_vol = PricingRequest { volatility: 1e155, ..request() };
        assert_eq!(
            PricingParams::new(&huge_vol).unwrap_err(),
            EngineError::NumericOverflow("sigma^2/2")
        );

        let nan_rate = PricingRequest { risk_free_rate: f64::NAN, ..request() };
        assert_eq!(
            PricingParams::new(&nan_rate).unwrap_err(),
            EngineError::NumericOverflow("discount factor")
        );

        // Large but representable volatility still prices
        let big_vol = PricingRequest { volatility: 1e150, ..request() };
        let p = PricingParams::new(&big_vol).unwrap();
        assert!(p.d1 > 0.0 && p.d2 < 0.0, "d1={} d2={}", p.d1, p.d2);
    }

    #[test]
    fn test_theta_per_day() {
        let g = Greeks { theta: -36.5, ..Greeks::default() };
        assert!((g.theta_per_day(365.0) + 0.1).abs() < 1e-12);
    }
}
