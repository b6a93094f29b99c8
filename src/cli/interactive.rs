use crate::cli::input::{self, SideChoice};
use crate::cli::report;
use crate::config::AppConfig;
use crate::errors::{EngineError, EngineResult};
use crate::models::OptionPricer;
use crate::types::PricingRequest;
use chrono::Utc;
use std::io::{BufRead, Write};

/// What happened when collecting one set of parameters.
enum Collected {
    Request(PricingRequest),
    /// Bad input already reported to the user; prompt again
    Retry,
    Eof,
}

fn collect<R: BufRead, W: Write>(reader: &mut R, out: &mut W) -> EngineResult<Collected> {
    macro_rules! ask {
        ($label:expr) => {
            match input::prompt(reader, out, $label)? {
                Some(line) => line,
                None => return Ok(Collected::Eof),
            }
        };
    }

    // Parse right after reading so a typo restarts the set immediately
    macro_rules! ask_number {
        ($label:expr, $parse:expr) => {{
            let line = ask!($label);
            let parse = $parse;
            match parse(line.as_str()) {
                Ok(value) => value,
                Err(e) => {
                    tracing::debug!(error = %e, "unparseable input");
                    writeln!(out, "Invalid input. Please enter numeric values.")?;
                    return Ok(Collected::Retry);
                }
            }
        }};
    }

    let spot = ask_number!("Spot Price ($): ", |s: &str| input::parse_number(s, "spot"));
    let strike = ask_number!("Strike Price ($): ", |s: &str| input::parse_number(s, "strike"));
    let ttl = ask_number!("Time to Expiry (years or YYYY-MM-DD): ", |s: &str| {
        input::parse_expiry(s, Utc::now())
    });
    let rate = ask_number!("Risk-free Rate (%): ", |s: &str| {
        input::parse_percent(s, "risk-free rate")
    });
    let vol = ask_number!("Volatility (%): ", |s: &str| input::parse_percent(s, "volatility"));
    let side = ask!("Option Type (call/put): ");

    let choice = input::parse_side(&side);
    if choice == SideChoice::Defaulted {
        writeln!(out, "Invalid option type. Using 'call'.")?;
    }

    if spot <= 0.0 || strike <= 0.0 || ttl <= 0.0 || vol <= 0.0 {
        writeln!(out, "Invalid parameters. All values must be positive.")?;
        return Ok(Collected::Retry);
    }

    Ok(Collected::Request(PricingRequest::new(
        spot,
        strike,
        ttl,
        rate,
        vol,
        choice.side(),
    )))
}

/// Prompt, price and report until the user declines or input ends.
pub fn run<R: BufRead, W: Write>(
    reader: &mut R,
    out: &mut W,
    config: &AppConfig,
    pricer: &dyn OptionPricer,
) -> EngineResult<()> {
    let mut priced = 0u64;

    loop {
        writeln!(out)?;
        writeln!(out, "ENTER OPTION PARAMETERS")?;
        writeln!(out, "{}", report::rule('-', 50))?;

        let request = match collect(reader, out)? {
            Collected::Request(r) => r,
            Collected::Retry => continue,
            Collected::Eof => break,
        };

        match pricer.price(&request) {
            Ok(result) => {
                priced += 1;
                let rendered =
                    report::render(config.output_format, &request, &result, config.theta_days)?;
                write!(out, "{rendered}")?;
                writeln!(out)?;
            }
            Err(e) if e.is_input_error() || matches!(e, EngineError::NumericOverflow(_)) => {
                writeln!(out, "Error: {e}")?;
                continue;
            }
            Err(e) => return Err(e),
        }

        match input::prompt(reader, out, "Calculate another option? (y/n): ")? {
            Some(answer) if matches!(answer.to_ascii_lowercase().as_str(), "y" | "yes") => {}
            _ => break,
        }
    }

    tracing::info!(priced, "interactive session finished");
    Ok(())
}
