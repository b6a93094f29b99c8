/// Domain-specific error types for the options calculator.
/// The pricing engine only ever returns `InvalidInput` or `NumericOverflow`;
/// the remaining variants belong to the CLI and configuration layers.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EngineError {
    #[error("invalid input: {field} must be a positive finite number, got {value}")]
    InvalidInput { field: &'static str, value: f64 },

    #[error("numeric overflow while computing {0}")]
    NumericOverflow(&'static str),

    #[error("parse error: {0}")]
    Parse(String),

    #[error("config error: {0}")]
    Config(String),

    #[error("io error: {0}")]
    Io(String),
}

impl EngineError {
    /// True for failures caused by the request itself rather than the environment.
    #[inline]
    pub fn is_input_error(&self) -> bool {
        matches!(self, EngineError::InvalidInput { .. } | EngineError::Parse(_))
    }
}

impl From<serde_json::Error> for EngineError {
    fn from(e: serde_json::Error) -> Self {
        EngineError::Parse(e.to_string())
    }
}

impl From<std::io::Error> for EngineError {
    fn from(e: std::io::Error) -> Self {
        EngineError::Io(e.to_string())
    }
}

pub type EngineResult<T> = Result<T, EngineError>;

/// Non-finite value means a term blew up. The risk-free rate is never
/// validated, so a NaN or infinite rate also lands here, reported against
/// the first quantity it poisons (usually the discount factor).
#[inline]
pub fn finite(value: f64, what: &'static str) -> EngineResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(EngineError::NumericOverflow(what))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_message_names_field() {
        let e = EngineError::InvalidInput { field: "spot", value: 0.0 };
        assert_eq!(e.to_string(), "invalid input: spot must be a positive finite number, got 0");
        assert!(e.is_input_error());
    }

    #[test]
    fn test_finite_guard() {
        assert_eq!(finite(1.5, "x"), Ok(1.5));
        assert_eq!(finite(f64::INFINITY, "x"), Err(EngineError::NumericOverflow("x")));
        assert_eq!(finite(f64::NAN, "y"), Err(EngineError::NumericOverflow("y")));
    }

    #[test]
    fn test_io_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed");
        let e: EngineError = io.into();
        assert!(matches!(e, EngineError::Io(_)));
        assert!(!e.is_input_error());
    }
}
