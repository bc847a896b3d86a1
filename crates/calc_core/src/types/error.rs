//! Error types for structured error handling.
//!
//! This module provides:
//! - `CalcError`: Validation and computation errors raised by every calculator
//! - `DateError`: Errors from date construction and parsing
//! - `CurrencyError`: Errors from currency parsing and rate lookups

use std::fmt;
use thiserror::Error;

/// Categorised calculation errors.
///
/// Every calculator validates its input record before running a formula.
/// A failed check returns one of these variants and no partial result.
///
/// # Variants
/// - `MissingField`: A required field was not supplied
/// - `InvalidInput`: A field has a value the formula cannot accept
/// - `NonPositive`: A field that must be strictly positive is not
/// - `Negative`: A field that must be non-negative is negative
/// - `DomainViolation`: Inputs are individually valid but inconsistent
/// - `Parse`: A numeric string could not be parsed
/// - `UnknownUnit`: A unit name or symbol is not in any conversion table
/// - `IncompatibleUnits`: Conversion between units of different families
///
/// # Examples
/// ```
/// use calc_core::types::CalcError;
///
/// let err = CalcError::NonPositive { field: "height", value: 0.0 };
/// assert_eq!(format!("{}", err), "height must be greater than 0 (got 0)");
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CalcError {
    /// A required field was not supplied.
    #[error("{0} is required")]
    MissingField(&'static str),

    /// A field has a value the formula cannot accept.
    #[error("Invalid {field}: {reason}")]
    InvalidInput {
        /// Name of the offending field
        field: &'static str,
        /// Human-readable reason
        reason: String,
    },

    /// A field that must be strictly positive is zero or negative.
    #[error("{field} must be greater than 0 (got {value})")]
    NonPositive {
        /// Name of the offending field
        field: &'static str,
        /// Value received
        value: f64,
    },

    /// A field that must be non-negative is negative.
    #[error("{field} must not be negative (got {value})")]
    Negative {
        /// Name of the offending field
        field: &'static str,
        /// Value received
        value: f64,
    },

    /// Inputs are individually valid but violate a domain invariant.
    #[error("{0}")]
    DomainViolation(String),

    /// A numeric string could not be parsed.
    #[error("Parse error: {0}")]
    Parse(String),

    /// A unit name or symbol is not known.
    #[error("Unknown unit: {0}")]
    UnknownUnit(String),

    /// Conversion between units of different families.
    #[error("Cannot convert {from} to {to}: units belong to different families")]
    IncompatibleUnits {
        /// Source unit symbol
        from: String,
        /// Target unit symbol
        to: String,
    },

    /// Date construction or parsing failed.
    #[error(transparent)]
    Date(#[from] DateError),

    /// Currency parsing or rate lookup failed.
    #[error(transparent)]
    Currency(#[from] CurrencyError),
}

impl CalcError {
    /// Create an invalid input error
    pub fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            field,
            reason: reason.into(),
        }
    }

    /// Create a domain violation error
    pub fn domain(msg: impl Into<String>) -> Self {
        Self::DomainViolation(msg.into())
    }
}

/// Date-related errors.
///
/// # Variants
/// - `InvalidDate`: Invalid date components (e.g., February 30th)
/// - `ParseError`: Failed to parse date string
///
/// # Examples
/// ```
/// use calc_core::types::DateError;
///
/// let err = DateError::InvalidDate { year: 2024, month: 2, day: 30 };
/// assert_eq!(format!("{}", err), "Invalid date: 2024-2-30");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateError {
    /// Invalid date components (e.g., February 30th).
    InvalidDate {
        /// Year component
        year: i32,
        /// Month component (1-12)
        month: u32,
        /// Day component (1-31)
        day: u32,
    },

    /// Failed to parse date or datetime string.
    ParseError(String),
}

impl fmt::Display for DateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DateError::InvalidDate { year, month, day } => {
                write!(f, "Invalid date: {}-{}-{}", year, month, day)
            }
            DateError::ParseError(msg) => write!(f, "Date parse error: {}", msg),
        }
    }
}

impl std::error::Error for DateError {}

/// Currency-related errors.
///
/// # Variants
/// - `UnknownCurrency`: Unknown currency code
/// - `MissingRate`: No exchange rate for the currency
/// - `InvalidRate`: Exchange rate is not positive
///
/// # Examples
/// ```
/// use calc_core::types::CurrencyError;
///
/// let err = CurrencyError::UnknownCurrency("XYZ".to_string());
/// assert_eq!(format!("{}", err), "Unknown currency: XYZ");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum CurrencyError {
    /// Unknown currency code.
    UnknownCurrency(String),

    /// No exchange rate available for the currency.
    MissingRate(String),

    /// Exchange rate is not positive.
    InvalidRate {
        /// Currency code
        code: String,
        /// Rate received
        rate: f64,
    },
}

impl fmt::Display for CurrencyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CurrencyError::UnknownCurrency(code) => write!(f, "Unknown currency: {}", code),
            CurrencyError::MissingRate(code) => write!(f, "No exchange rate for {}", code),
            CurrencyError::InvalidRate { code, rate } => {
                write!(f, "Invalid exchange rate for {}: {} (must be positive)", code, rate)
            }
        }
    }
}

impl std::error::Error for CurrencyError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calc_error_display() {
        let err = CalcError::MissingField("weight");
        assert_eq!(err.to_string(), "weight is required");

        let err = CalcError::invalid("grade", "unknown letter 'Z'");
        assert_eq!(err.to_string(), "Invalid grade: unknown letter 'Z'");

        let err = CalcError::Negative {
            field: "salvage value",
            value: -1.0,
        };
        assert!(err.to_string().contains("must not be negative"));
    }

    #[test]
    fn test_incompatible_units_display() {
        let err = CalcError::IncompatibleUnits {
            from: "m".to_string(),
            to: "kg".to_string(),
        };
        assert!(err.to_string().contains("Cannot convert m to kg"));
    }

    #[test]
    fn test_date_error_converts() {
        let err: CalcError = DateError::ParseError("bad".to_string()).into();
        assert_eq!(err.to_string(), "Date parse error: bad");
    }

    #[test]
    fn test_currency_error_converts() {
        let err: CalcError = CurrencyError::MissingRate("THB".to_string()).into();
        assert_eq!(err.to_string(), "No exchange rate for THB");
    }
}
