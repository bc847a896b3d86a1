//! Core value, time and currency types.
//!
//! This module provides:
//! - `error`: Structured error types for calculations, dates and currencies
//! - `number`: Formatted numeric input (canonical value, derived display)
//! - `money`: Won rounding and display helpers
//! - `validate`: Field validation helpers
//! - `time`: Date, LocalDateTime, DayCount and duration breakdown
//! - `currency`: ISO 4217 codes and the static exchange-rate table
//!
//! # Re-exports
//!
//! Commonly used types are re-exported at this module level.

pub mod currency;
pub mod error;
pub mod money;
pub mod number;
pub mod time;
pub mod validate;

pub use currency::{Currency, ExchangeRateSource, ExchangeRateTable};
pub use error::{CalcError, CurrencyError, DateError};
pub use number::FormattedNumber;
pub use time::{Date, DayCount, DurationBreakdown, LocalDateTime};
