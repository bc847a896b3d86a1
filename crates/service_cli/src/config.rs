//! CLI configuration management.
//!
//! Handles loading of `gyesan.toml` with environment variable override
//! support. A missing default file yields the built-in defaults.
//!
//! ```toml
//! log_level = "info"
//! output_format = "table"
//! currency = "USD"
//! jeonse_base_rate_percent = 3.5
//!
//! [exchange_rates]
//! USD = 1380.5
//! JPY = 9.2
//! ```

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use calc_core::types::{Currency, CurrencyError, ExchangeRateTable};
use serde::Deserialize;

use crate::output::OutputFormat;

/// Default configuration file, relative to the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "gyesan.toml";

/// CLI configuration
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct CliConfig {
    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Output format when `--format` is not given
    #[serde(default)]
    pub output_format: OutputFormat,

    /// Foreign currency used by `transfer` when `--currency` is not given
    #[serde(default = "default_currency")]
    pub currency: String,

    /// Central-bank base rate for the jeonse statutory cap
    pub jeonse_base_rate_percent: Option<f64>,

    /// Currency code → KRW per unit, overriding the built-in table
    #[serde(default)]
    pub exchange_rates: BTreeMap<String, f64>,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_currency() -> String {
    "USD".to_string()
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            output_format: OutputFormat::default(),
            currency: default_currency(),
            jeonse_base_rate_percent: None,
            exchange_rates: BTreeMap::new(),
        }
    }
}

impl CliConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::Io(format!("{}: {}", path.display(), e)))?;

        toml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Load configuration from the default path or return the defaults
    pub fn load_or_default() -> Self {
        let config_path = PathBuf::from(DEFAULT_CONFIG_PATH);
        if !config_path.exists() {
            return Self::default();
        }
        Self::load(&config_path).unwrap_or_else(|e| {
            tracing::warn!(error = %e, "ignoring unreadable {}", DEFAULT_CONFIG_PATH);
            Self::default()
        })
    }

    /// An explicit path must load; otherwise fall back to the default path.
    pub fn resolve(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::load_or_default()),
        }
    }

    /// Apply `GYESAN_*` environment variable overrides
    ///
    /// # Errors
    /// [`ConfigError::Validation`] naming every variable whose value cannot
    /// be used.
    pub fn with_env_override(self) -> Result<Self, ConfigError> {
        self.with_overrides_from(|key| std::env::var(key).ok())
    }

    fn with_overrides_from(
        mut self,
        var: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let mut errors = Vec::new();

        if let Some(log_level) = var("GYESAN_LOG_LEVEL") {
            self.log_level = log_level;
        }

        if let Some(format) = var("GYESAN_OUTPUT_FORMAT") {
            match format.trim().to_lowercase().as_str() {
                "table" => self.output_format = OutputFormat::Table,
                "json" => self.output_format = OutputFormat::Json,
                _ => errors.push(format!(
                    "GYESAN_OUTPUT_FORMAT '{}' must be table or json",
                    format
                )),
            }
        }

        if let Some(base_rate) = var("GYESAN_BASE_RATE") {
            match base_rate.trim().parse() {
                Ok(rate) => self.jeonse_base_rate_percent = Some(rate),
                Err(_) => errors.push(format!(
                    "GYESAN_BASE_RATE '{}' is not a number",
                    base_rate
                )),
            }
        }

        if errors.is_empty() {
            Ok(self)
        } else {
            Err(ConfigError::Validation(errors))
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut errors = Vec::new();

        let valid_log_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_log_levels.contains(&self.log_level.to_lowercase().as_str()) {
            errors.push(format!(
                "Invalid log_level '{}'. Valid values: {:?}",
                self.log_level, valid_log_levels
            ));
        }

        match self.currency.parse::<Currency>() {
            Ok(Currency::KRW) => {
                errors.push("currency must be a foreign currency, not KRW".to_string())
            }
            Ok(_) => {}
            Err(e) => errors.push(format!("Invalid currency: {}", e)),
        }

        if let Some(rate) = self.jeonse_base_rate_percent {
            if !(0.0..=20.0).contains(&rate) {
                errors.push(format!("jeonse_base_rate_percent {} is outside 0-20", rate));
            }
        }

        for (code, rate) in &self.exchange_rates {
            if code.parse::<Currency>().is_err() {
                errors.push(format!("Unknown currency '{}' in exchange_rates", code));
            }
            if !(rate.is_finite() && *rate > 0.0) {
                errors.push(format!("exchange_rates.{} must be greater than 0", code));
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Validation(errors))
        }
    }

    /// Exchange-rate table: built-in fallback plus the configured overrides.
    pub fn exchange_rate_table(&self) -> Result<ExchangeRateTable, ConfigError> {
        ExchangeRateTable::from_pairs(
            self.exchange_rates
                .iter()
                .map(|(code, rate)| (code.as_str(), *rate)),
        )
        .map_err(|e| ConfigError::Validation(vec![e.to_string()]))
    }

    /// Default foreign currency for transfers.
    pub fn default_currency(&self) -> Result<Currency, ConfigError> {
        self.currency
            .parse()
            .map_err(|e: CurrencyError| ConfigError::Validation(vec![e.to_string()]))
    }
}

/// Configuration error type
#[derive(Debug, Clone)]
pub enum ConfigError {
    /// IO error reading config file
    Io(String),
    /// Parse error in config file
    Parse(String),
    /// Validation error
    Validation(Vec<String>),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(msg) => write!(f, "IO error: {}", msg),
            Self::Parse(msg) => write!(f, "Parse error: {}", msg),
            Self::Validation(errors) => write!(f, "Validation errors: {}", errors.join("; ")),
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;
    use calc_core::types::ExchangeRateSource;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = CliConfig::default();
        assert_eq!(config.log_level, "info");
        assert_eq!(config.output_format, OutputFormat::Table);
        assert_eq!(config.default_currency().unwrap(), Currency::USD);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
log_level = "debug"
output_format = "json"
currency = "JPY"
jeonse_base_rate_percent = 3.5

[exchange_rates]
USD = 1400.0
"#
        )
        .unwrap();

        let config = CliConfig::load(file.path()).unwrap();
        assert_eq!(config.output_format, OutputFormat::Json);
        assert_eq!(config.default_currency().unwrap(), Currency::JPY);
        assert_eq!(config.jeonse_base_rate_percent, Some(3.5));
        let table = config.exchange_rate_table().unwrap();
        assert_eq!(table.krw_per_unit(Currency::USD).unwrap(), 1_400.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let result = CliConfig::resolve(Some(Path::new("/nonexistent/gyesan.toml")));
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }

    #[test]
    fn test_unknown_field_is_a_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "colour = \"red\"").unwrap();
        assert!(matches!(CliConfig::load(file.path()), Err(ConfigError::Parse(_))));
    }

    fn vars<'a>(pairs: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<String> + 'a {
        move |key: &str| {
            pairs
                .iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| v.to_string())
        }
    }

    #[test]
    fn test_env_override() {
        let config = CliConfig::default()
            .with_overrides_from(vars(&[
                ("GYESAN_BASE_RATE", " 2.75 "),
                ("GYESAN_OUTPUT_FORMAT", "JSON"),
                ("GYESAN_LOG_LEVEL", "debug"),
            ]))
            .unwrap();
        assert_eq!(config.jeonse_base_rate_percent, Some(2.75));
        assert_eq!(config.output_format, OutputFormat::Json);
        assert_eq!(config.log_level, "debug");

        let untouched = CliConfig::default().with_overrides_from(vars(&[])).unwrap();
        assert_eq!(untouched, CliConfig::default());
    }

    #[test]
    fn test_invalid_env_values_are_reported() {
        let result = CliConfig::default().with_overrides_from(vars(&[
            ("GYESAN_BASE_RATE", "three"),
            ("GYESAN_OUTPUT_FORMAT", "yaml"),
        ]));
        match result {
            Err(ConfigError::Validation(errors)) => {
                assert_eq!(errors.len(), 2, "{:?}", errors);
                assert!(errors.iter().any(|e| e.contains("GYESAN_BASE_RATE")));
                assert!(errors.iter().any(|e| e.contains("GYESAN_OUTPUT_FORMAT")));
            }
            other => panic!("Expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_collects_every_error() {
        let mut config = CliConfig::default();
        config.log_level = "loud".to_string();
        config.currency = "KRW".to_string();
        config.jeonse_base_rate_percent = Some(-1.0);
        config.exchange_rates.insert("USD".to_string(), 0.0);
        config.exchange_rates.insert("XYZ".to_string(), 10.0);

        match config.validate() {
            Err(ConfigError::Validation(errors)) => {
                assert_eq!(errors.len(), 5, "{:?}", errors);
                assert!(errors.iter().any(|e| e.contains("log_level")));
                assert!(errors.iter().any(|e| e.contains("KRW")));
            }
            other => panic!("Expected validation error, got {:?}", other),
        }
    }
}
