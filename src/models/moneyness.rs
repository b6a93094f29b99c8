use crate::types::{Moneyness, OptionSide};

/// Moneyness of a contract, the exercise-now value, and a short description.
#[derive(Debug, Clone, PartialEq)]
pub struct MoneynessInfo {
    pub moneyness: Moneyness,
    pub intrinsic_value: f64,
    pub description: String,
}

/// Classify from spot vs strike only. Exact equality is ATM; no tolerance band.
pub fn classify(spot: f64, strike: f64, side: OptionSide) -> MoneynessInfo {
    let intrinsic_value = match side {
        OptionSide::Call => (spot - strike).max(0.0),
        OptionSide::Put => (strike - spot).max(0.0),
    };

    let moneyness = if spot == strike {
        Moneyness::AtTheMoney
    } else if intrinsic_value > 0.0 {
        Moneyness::InTheMoney
    } else {
        Moneyness::OutOfTheMoney
    };

    let description = match moneyness {
        Moneyness::InTheMoney => format!("${intrinsic_value:.2} intrinsic value"),
        Moneyness::AtTheMoney => "Break-even point".to_string(),
        Moneyness::OutOfTheMoney => "No intrinsic value".to_string(),
    };

    MoneynessInfo {
        moneyness,
        intrinsic_value,
        description,
    }
}
