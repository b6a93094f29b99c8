use crate::errors::{EngineError, EngineResult};
use std::str::FromStr;

/// How the binary starts when no mode argument is given.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunMode {
    Menu,
    Interactive,
    Demo,
}

impl FromStr for RunMode {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "menu" => Ok(Self::Menu),
            "interactive" | "1" => Ok(Self::Interactive),
            "demo" | "2" => Ok(Self::Demo),
            other => Err(EngineError::Parse(format!("unknown mode: {other}"))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(EngineError::Parse(format!("unknown output format: {other}"))),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub mode: RunMode,
    pub output_format: OutputFormat,
    pub demo_pause_ms: u64,
    /// Day count used to turn annual theta into a per-day figure for display
    pub theta_days: f64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            mode: RunMode::Menu,
            output_format: OutputFormat::Text,
            demo_pause_ms: 1500,
            theta_days: 365.0,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> EngineResult<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup so tests never touch
    /// the process environment.
    pub fn from_lookup<F>(lookup: F) -> EngineResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var_or = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let mode = var_or("CALC_MODE", "menu")
            .parse::<RunMode>()
            .map_err(|e| EngineError::Config(format!("CALC_MODE: {e}")))?;

        let output_format = var_or("OUTPUT_FORMAT", "text")
            .parse::<OutputFormat>()
            .map_err(|e| EngineError::Config(format!("OUTPUT_FORMAT: {e}")))?;

        let demo_pause_ms = var_or("DEMO_PAUSE_MS", "1500")
            .parse::<u64>()
            .map_err(|e| EngineError::Config(format!("DEMO_PAUSE_MS: {e}")))?;

        let theta_days = var_or("THETA_DAYS", "365")
            .parse::<f64>()
            .map_err(|e| EngineError::Config(format!("THETA_DAYS: {e}")))?;

        if !theta_days.is_finite() || theta_days <= 0.0 {
            return Err(EngineError::Config(format!(
                "THETA_DAYS: must be positive, got {theta_days}"
            )));
        }

        Ok(Self {
            mode,
            output_format,
            demo_pause_ms,
            theta_days,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let cfg = AppConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(cfg.mode, RunMode::Menu);
        assert_eq!(cfg.output_format, OutputFormat::Text);
        assert_eq!(cfg.demo_pause_ms, 1500);
        assert_eq!(cfg.theta_days, 365.0);
    }

    #[test]
    fn test_overrides() {
        let cfg = AppConfig::from_lookup(lookup_from(&[
            ("CALC_MODE", "Demo"),
            ("OUTPUT_FORMAT", "JSON"),
            ("DEMO_PAUSE_MS", "0"),
            ("THETA_DAYS", "252"),
        ]))
        .unwrap();
        assert_eq!(cfg.mode, RunMode::Demo);
        assert_eq!(cfg.output_format, OutputFormat::Json);
        assert_eq!(cfg.demo_pause_ms, 0);
        assert_eq!(cfg.theta_days, 252.0);
    }

    #[test]
    fn test_bad_values_are_config_errors() {
        let err = AppConfig::from_lookup(lookup_from(&[("DEMO_PAUSE_MS", "soon")])).unwrap_err();
        assert!(matches!(err, EngineError::Config(ref m) if m.starts_with("DEMO_PAUSE_MS")));

        let err = AppConfig::from_lookup(lookup_from(&[("THETA_DAYS", "0")])).unwrap_err();
        assert!(matches!(err, EngineError::Config(_)));

        let err = AppConfig::from_lookup(lookup_from(&[("CALC_MODE", "batch")])).unwrap_err();
        assert!(matches!(err, EngineError::Config(_)));
    }
}
