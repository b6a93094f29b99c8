use crate::errors::{EngineError, EngineResult};
use crate::types::OptionSide;
use chrono::{DateTime, NaiveDate, Utc};
use std::io::{BufRead, Write};

const SECONDS_PER_YEAR: f64 = 365.25 * 24.0 * 3600.0;

/// Outcome of lenient side parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SideChoice {
    Parsed(OptionSide),
    /// Input was not recognized and the call side was substituted
    Defaulted,
}

impl SideChoice {
    #[inline]
    pub fn side(&self) -> OptionSide {
        match self {
            Self::Parsed(side) => *side,
            Self::Defaulted => OptionSide::Call,
        }
    }
}

/// CLI-layer normalization: anything that is not a call or put becomes a call.
pub fn parse_side(input: &str) -> SideChoice {
    match input.parse::<OptionSide>() {
        Ok(side) => SideChoice::Parsed(side),
        Err(_) => {
            tracing::warn!(input = input.trim(), "unrecognized option side, defaulting to call");
            SideChoice::Defaulted
        }
    }
}

/// Parse a number, tolerating currency symbols, percent signs and thousands separators.
pub fn parse_number(input: &str, field: &str) -> EngineResult<f64> {
    let cleaned: String = input
        .chars()
        .filter(|c| !matches!(c, '$' | '%' | ',') && !c.is_whitespace())
        .collect();
    cleaned
        .parse::<f64>()
        .map_err(|e| EngineError::Parse(format!("{field}: {e} ({:?})", input.trim())))
}

/// Percent input ("5" or "5%") to a decimal fraction.
#[inline]
pub fn parse_percent(input: &str, field: &str) -> EngineResult<f64> {
    Ok(parse_number(input, field)? / 100.0)
}

/// Time to expiry as either a year fraction or an expiry date.
///
/// Dates are `YYYY-MM-DD` (midnight UTC) or RFC 3339 timestamps and are
/// measured from `now` in 365.25-day years. A past date gives a
/// non-positive value, left for the engine to reject.
pub fn parse_expiry(input: &str, now: DateTime<Utc>) -> EngineResult<f64> {
    let trimmed = input.trim();
    if let Ok(years) = parse_number(trimmed, "time to expiry") {
        return Ok(years);
    }

    let expiry = DateTime::parse_from_rfc3339(trimmed)
        .map(|dt| dt.with_timezone(&Utc))
        .ok()
        .or_else(|| {
            NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
                .map(|dt| dt.and_utc())
        })
        .ok_or_else(|| {
            EngineError::Parse(format!(
                "time to expiry: expected years or a date, got {trimmed:?}"
            ))
        })?;

    let years = (expiry - now).num_seconds() as f64 / SECONDS_PER_YEAR;
    tracing::debug!(expiry = %expiry, years, "expiry date converted");
    Ok(years)
}

/// Print a prompt and read one trimmed line. `None` on end of input.
pub fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    label: &str,
) -> EngineResult<Option<String>> {
    write!(out, "{label}")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
