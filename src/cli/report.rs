use crate::config::OutputFormat;
use crate::errors::EngineResult;
use crate::types::{OptionSide, PricingRequest, PricingResult};
use std::fmt::Write as _;

pub const RULE_WIDE: usize = 80;
pub const RULE_NARROW: usize = 60;

#[inline]
pub fn rule(ch: char, width: usize) -> String {
    std::iter::repeat(ch).take(width).collect()
}

/// Serialized form of one priced contract.
#[derive(Debug, serde::Serialize)]
struct JsonReport<'a> {
    request: &'a PricingRequest,
    result: &'a PricingResult,
    daily_theta: f64,
}

pub fn header() -> String {
    let mut s = String::new();
    let _ = writeln!(s, "{}", rule('=', RULE_WIDE));
    let _ = writeln!(s, "OPTIONS PRICE CALCULATOR");
    let _ = writeln!(s, "{}", rule('=', RULE_WIDE));
    let _ = writeln!(s, "European options pricing using the Black-Scholes model");
    let _ = writeln!(s, "with Greeks analysis and risk metrics");
    let _ = writeln!(s, "{}", rule('=', RULE_WIDE));
    s
}

/// One-line summary of the inputs, rates shown as percentages.
pub fn describe_request(req: &PricingRequest) -> String {
    format!(
        "Spot: ${}, Strike: ${}, Time: {} years, Rate: {}%, Vol: {}%",
        req.spot,
        req.strike,
        req.time_to_expiry,
        round_pct(req.risk_free_rate),
        round_pct(req.volatility),
    )
}

/// Percent with float noise removed (0.07 * 100 = 7.000000000000001).
#[inline]
fn round_pct(fraction: f64) -> f64 {
    (fraction * 100.0 * 1e8).round() / 1e8
}

pub fn render_text(req: &PricingRequest, res: &PricingResult, theta_days: f64) -> String {
    let side_title = match res.side {
        OptionSide::Call => "Call",
        OptionSide::Put => "Put",
    };
    let g = &res.greeks;

    let mut s = String::new();
    let _ = writeln!(s);
    let _ = writeln!(s, "CALCULATION RESULTS");
    let _ = writeln!(s, "{}", rule('=', RULE_NARROW));

    let _ = writeln!(s, "OPTION PRICES:");
    let _ = writeln!(s, "   Call Option Price: ${:.4}", res.call_price);
    let _ = writeln!(s, "   Put Option Price:  ${:.4}", res.put_price);
    let _ = writeln!(s, "   Selected {side_title} Price: ${:.4}", res.selected_price);

    let _ = writeln!(s);
    let _ = writeln!(s, "GREEKS (Risk Measures):");
    let _ = writeln!(s, "   Delta: {:>8.4} (Price sensitivity to stock price)", g.delta);
    let _ = writeln!(s, "   Gamma: {:>8.6} (Delta sensitivity to stock price)", g.gamma);
    let _ = writeln!(s, "   Theta: {:>8.4} (Price sensitivity to time, per year)", g.theta);
    let _ = writeln!(s, "   Vega:  {:>8.4} (Price sensitivity to volatility, per 1.00)", g.vega);
    let _ = writeln!(s, "   Rho:   {:>8.4} (Price sensitivity to interest rate, per 1.00)", g.rho);

    let _ = writeln!(s);
    let _ = writeln!(s, "RISK ANALYSIS:");
    let _ = writeln!(s, "   Moneyness: {} ({})", res.moneyness, res.moneyness.short_code());
    let _ = writeln!(s, "   Description: {}", res.description);
    let _ = writeln!(s, "   Intrinsic Value: ${:.4}", res.intrinsic_value);
    let _ = writeln!(s, "   Time Value: ${:.4}", res.time_value);
    let _ = writeln!(s, "   Daily Theta: ${:.4}", g.theta_per_day(theta_days));
    let _ = writeln!(s, "   Inputs: {}", describe_request(req));

    s
}

pub fn render_json(req: &PricingRequest, res: &PricingResult, theta_days: f64) -> EngineResult<String> {
    let report = JsonReport {
        request: req,
        result: res,
        daily_theta: res.greeks.theta_per_day(theta_days),
    };
    Ok(serde_json::to_string_pretty(&report)?)
}

pub fn render(
    format: OutputFormat,
    req: &PricingRequest,
    res: &PricingResult,
    theta_days: f64,
) -> EngineResult<String> {
    match format {
        OutputFormat::Text => Ok(render_text(req, res, theta_days)),
        OutputFormat::Json => render_json(req, res, theta_days).map(|mut s| {
            s.push('\n');
            s
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models;

    fn priced(side: OptionSide) -> (PricingRequest, PricingResult) {
        let req = PricingRequest::new(90.0, 100.0, 0.5, 0.03, 0.25, side);
        let res = models::price(&req).unwrap();
        (req, res)
    }

    #[test]
    fn test_text_report_sections() {
        let (req, res) = priced(OptionSide::Put);
        let text = render_text(&req, &res, 365.0);
        assert!(text.contains("Put Option Price:  $11.7401"), "{text}");
        assert!(text.contains("Selected Put Price: $11.7401"), "{text}");
        assert!(text.contains("Moneyness: In-the-Money (ITM)"));
        assert!(text.contains("Description: $10.00 intrinsic value"));
        assert!(text.contains("Intrinsic Value: $10.0000"));
        assert!(text.contains("Rate: 3%, Vol: 25%"), "{text}");
    }

    #[test]
    fn test_daily_theta_uses_day_count() {
        let (req, res) = priced(OptionSide::Call);
        let t365 = render_text(&req, &res, 365.0);
        let expected = format!("Daily Theta: ${:.4}", res.greeks.theta / 365.0);
        assert!(t365.contains(&expected), "{t365}");
        let t252 = render_text(&req, &res, 252.0);
        let expected = format!("Daily Theta: ${:.4}", res.greeks.theta / 252.0);
        assert!(t252.contains(&expected), "{t252}");
    }

    #[test]
    fn test_json_report_shape() {
        let (req, res) = priced(OptionSide::Call);
        let json = render(OutputFormat::Json, &req, &res, 365.0).unwrap();
        let v: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(v["request"]["side"], "call");
        assert_eq!(v["result"]["moneyness"], "out_of_the_money");
        assert_eq!(v["result"]["description"], "No intrinsic value");
        assert!(v["result"]["greeks"]["gamma"].as_f64().unwrap() > 0.0);
        let daily = v["daily_theta"].as_f64().unwrap();
        assert!((daily - res.greeks.theta / 365.0).abs() < 1e-12);
    }

    #[test]
    fn test_header_and_rule() {
        assert_eq!(rule('-', 5), "-----");
        assert!(header().contains("OPTIONS PRICE CALCULATOR"));
    }
}
