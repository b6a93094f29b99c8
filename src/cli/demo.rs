use crate::cli::report;
use crate::config::AppConfig;
use crate::errors::EngineResult;
use crate::models::OptionPricer;
use crate::types::{OptionSide, PricingRequest};
use std::io::Write;
use std::time::Duration;

/// Preset contracts covering each moneyness case and a long-dated option.
pub const SCENARIOS: [(&str, PricingRequest); 5] = [
    (
        "At-the-Money Call Option",
        PricingRequest {
            spot: 100.0,
            strike: 100.0,
            time_to_expiry: 0.25,
            risk_free_rate: 0.02,
            volatility: 0.20,
            side: OptionSide::Call,
        },
    ),
    (
        "In-the-Money Put Option",
        PricingRequest {
            spot: 90.0,
            strike: 100.0,
            time_to_expiry: 0.5,
            risk_free_rate: 0.03,
            volatility: 0.25,
            side: OptionSide::Put,
        },
    ),
    (
        "Out-of-the-Money Call Option",
        PricingRequest {
            spot: 100.0,
            strike: 110.0,
            time_to_expiry: 0.1,
            risk_free_rate: 0.01,
            volatility: 0.30,
            side: OptionSide::Call,
        },
    ),
    (
        "Deep In-the-Money Call Option",
        PricingRequest {
            spot: 120.0,
            strike: 100.0,
            time_to_expiry: 0.1,
            risk_free_rate: 0.05,
            volatility: 0.15,
            side: OptionSide::Call,
        },
    ),
    (
        "Long-Term Option",
        PricingRequest {
            spot: 100.0,
            strike: 100.0,
            time_to_expiry: 2.0,
            risk_free_rate: 0.04,
            volatility: 0.18,
            side: OptionSide::Call,
        },
    ),
];

/// Price and print every preset. Pauses only between the first examples
/// so the opening results can be read before the rest scroll past.
pub fn run<W: Write>(out: &mut W, config: &AppConfig, pricer: &dyn OptionPricer) -> EngineResult<()> {
    writeln!(out)?;
    writeln!(out, "DEMO MODE - Running preset examples ({})", pricer.name())?;
    writeln!(out, "{}", report::rule('=', report::RULE_NARROW))?;

    for (i, (title, request)) in SCENARIOS.iter().enumerate() {
        writeln!(out)?;
        writeln!(out, "EXAMPLE {}: {title}", i + 1)?;
        writeln!(out, "{}", report::rule('-', 50))?;
        writeln!(out, "{}", report::describe_request(request))?;

        let result = pricer.price(request)?;
        let rendered = report::render(config.output_format, request, &result, config.theta_days)?;
        write!(out, "{rendered}")?;
        out.flush()?;

        if i < 2 && config.demo_pause_ms > 0 {
            std::thread::sleep(Duration::from_millis(config.demo_pause_ms));
        }
    }

    writeln!(out)?;
    writeln!(out, "Demo completed! All calculations working correctly.")?;
    writeln!(out, "Try interactive mode to test your own parameters!")?;
    tracing::info!(examples = SCENARIOS.len(), "demo finished");
    Ok(())
}
