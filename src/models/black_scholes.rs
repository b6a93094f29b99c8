use crate::errors::{finite, EngineResult};
use crate::models::moneyness;
use crate::models::OptionPricer;
use crate::types::{Greeks, OptionSide, PricingParams, PricingRequest, PricingResult};
use statrs::distribution::{Continuous, ContinuousCDF, Normal};

/// Black-Scholes-Merton pricing for European options.
///
/// d1 = (ln(S/K) + (r + sigma^2/2)*T) / (sigma * sqrt(T))
/// d2 = d1 - sigma * sqrt(T)
///
/// call = S*Phi(d1) - K*e^(-rT)*Phi(d2)
/// put  = K*e^(-rT)*Phi(-d2) - S*Phi(-d1)
///
/// Continuous compounding, no dividends, no early exercise.
pub struct BlackScholes {
    /// Standard normal distribution (created once, reused)
    normal: Normal,
}

impl BlackScholes {
    pub fn new() -> Self {
        Self {
            normal: Normal::standard(),
        }
    }

    #[inline]
    fn cdf(&self, x: f64) -> f64 {
        self.normal.cdf(x)
    }

    #[inline]
    fn pdf(&self, x: f64) -> f64 {
        self.normal.pdf(x)
    }

    /// Raw (unfloored) call and put prices.
    #[inline]
    fn prices(&self, p: &PricingParams) -> (f64, f64) {
        let call = p.spot * self.cdf(p.d1) - p.strike * p.discount * self.cdf(p.d2);
        let put = p.strike * p.discount * self.cdf(-p.d2) - p.spot * self.cdf(-p.d1);
        (call, put)
    }

    /// Closed-form Greeks for one side. Theta is per year, vega and rho are
    /// unscaled derivatives.
    pub fn greeks(&self, p: &PricingParams, side: OptionSide) -> Greeks {
        let pdf_d1 = self.pdf(p.d1);
        let nd1 = self.cdf(p.d1);

        let gamma = pdf_d1 / (p.spot * p.sigma_sqrt_t);
        let vega = p.spot * p.sqrt_t * pdf_d1;
        let decay = -p.spot * pdf_d1 * p.sigma / (2.0 * p.sqrt_t);

        match side {
            OptionSide::Call => {
                let nd2 = self.cdf(p.d2);
                Greeks {
                    delta: nd1,
                    gamma,
                    theta: decay - p.rate * p.strike * p.discount * nd2,
                    vega,
                    rho: p.strike * p.ttl_years * p.discount * nd2,
                }
            }
            OptionSide::Put => {
                let n_neg_d2 = self.cdf(-p.d2);
                Greeks {
                    delta: nd1 - 1.0,
                    gamma,
                    theta: decay + p.rate * p.strike * p.discount * n_neg_d2,
                    vega,
                    rho: -p.strike * p.ttl_years * p.discount * n_neg_d2,
                }
            }
        }
    }
}

impl Default for BlackScholes {
    fn default() -> Self {
        Self::new()
    }
}

impl OptionPricer for BlackScholes {
    #[inline]
    fn name(&self) -> &'static str {
        "Black-Scholes"
    }

    fn price(&self, request: &PricingRequest) -> EngineResult<PricingResult> {
        if let Err(e) = request.validate() {
            tracing::warn!(error = %e, "pricing request rejected");
            return Err(e);
        }

        let params = match PricingParams::new(request) {
            Ok(p) => p,
            Err(e) => {
                tracing::warn!(error = %e, "pricing intermediates overflowed");
                return Err(e);
            }
        };
        let (raw_call, raw_put) = self.prices(&params);

        // Floor after the finiteness check: NaN.max(0.0) would hide an overflow.
        let call_price = finite(raw_call, "call price")?.max(0.0);
        let put_price = finite(raw_put, "put price")?.max(0.0);

        let greeks = self.greeks(&params, request.side);
        finite(greeks.delta, "delta")?;
        finite(greeks.gamma, "gamma")?;
        finite(greeks.theta, "theta")?;
        finite(greeks.vega, "vega")?;
        finite(greeks.rho, "rho")?;

        let selected_price = match request.side {
            OptionSide::Call => call_price,
            OptionSide::Put => put_price,
        };

        let info = moneyness::classify(request.spot, request.strike, request.side);
        let time_value = selected_price - info.intrinsic_value;

        tracing::debug!(
            model = self.name(),
            spot = request.spot,
            strike = request.strike,
            ttl_years = request.time_to_expiry,
            rate = request.risk_free_rate,
            sigma = request.volatility,
            side = %request.side,
            price = selected_price,
            "option priced"
        );

        Ok(PricingResult {
            side: request.side,
            call_price,
            put_price,
            selected_price,
            greeks,
            intrinsic_value: info.intrinsic_value,
            time_value,
            moneyness: info.moneyness,
            description: info.description,
        })
    }
}
