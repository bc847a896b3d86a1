//! Error types for the gyesan CLI.

use calc_core::types::CalcError;
use thiserror::Error;

use crate::config::ConfigError;

/// CLI error type
#[derive(Debug, Error)]
pub enum CliError {
    /// A calculator rejected its input
    #[error(transparent)]
    Calc(#[from] CalcError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Argument combination the calculators cannot express
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// JSON rendering failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl CliError {
    /// Create an invalid argument error
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }
}

/// Result alias for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calc_error_is_transparent() {
        let err: CliError = CalcError::MissingField("principal").into();
        assert_eq!(err.to_string(), "principal is required");
    }

    #[test]
    fn test_config_error_display() {
        let err: CliError = ConfigError::Validation(vec!["bad rate".to_string()]).into();
        assert!(err.to_string().contains("bad rate"));
    }
}
