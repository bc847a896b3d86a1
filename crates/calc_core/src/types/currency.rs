//! Currency types and the static exchange-rate table.
//!
//! This module provides ISO 4217 currency codes with display metadata and
//! an immutable table of KRW-per-unit exchange rates. The built-in table is
//! the fallback used when no live quote is available; callers may override
//! individual rates (for example from a configuration file).
//!
//! # Examples
//!
//! ```
//! use calc_core::types::currency::{Currency, ExchangeRateSource, ExchangeRateTable};
//!
//! let usd = Currency::USD;
//! assert_eq!(usd.code(), "USD");
//! assert_eq!(usd.decimal_places(), 2);
//!
//! let table = ExchangeRateTable::fallback();
//! assert_eq!(table.krw_per_unit(Currency::KRW).unwrap(), 1.0);
//! ```

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use super::error::CurrencyError;

/// ISO 4217 currency codes with decimal precision metadata.
///
/// Covers the currencies offered by Korean retail banks for outbound
/// remittances.
///
/// # Examples
///
/// ```
/// use calc_core::types::currency::Currency;
///
/// assert_eq!(Currency::JPY.decimal_places(), 0);
///
/// // Parse from string (case-insensitive)
/// let eur: Currency = "eur".parse().unwrap();
/// assert_eq!(eur, Currency::EUR);
/// ```
#[non_exhaustive]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Currency {
    /// South Korean Won
    KRW,
    /// United States Dollar
    USD,
    /// Euro
    EUR,
    /// Japanese Yen
    JPY,
    /// British Pound Sterling
    GBP,
    /// Chinese Yuan Renminbi
    CNY,
    /// Swiss Franc
    CHF,
    /// Australian Dollar
    AUD,
    /// Canadian Dollar
    CAD,
    /// Hong Kong Dollar
    HKD,
    /// Singapore Dollar
    SGD,
}

impl Currency {
    /// All supported currencies, KRW first.
    pub const ALL: [Currency; 11] = [
        Currency::KRW,
        Currency::USD,
        Currency::EUR,
        Currency::JPY,
        Currency::GBP,
        Currency::CNY,
        Currency::CHF,
        Currency::AUD,
        Currency::CAD,
        Currency::HKD,
        Currency::SGD,
    ];

    /// Returns the ISO 4217 three-letter currency code.
    pub fn code(&self) -> &'static str {
        match self {
            Currency::KRW => "KRW",
            Currency::USD => "USD",
            Currency::EUR => "EUR",
            Currency::JPY => "JPY",
            Currency::GBP => "GBP",
            Currency::CNY => "CNY",
            Currency::CHF => "CHF",
            Currency::AUD => "AUD",
            Currency::CAD => "CAD",
            Currency::HKD => "HKD",
            Currency::SGD => "SGD",
        }
    }

    /// Returns the standard number of decimal places for this currency.
    ///
    /// # Examples
    ///
    /// ```
    /// use calc_core::types::currency::Currency;
    ///
    /// assert_eq!(Currency::KRW.decimal_places(), 0);
    /// assert_eq!(Currency::USD.decimal_places(), 2);
    /// ```
    pub fn decimal_places(&self) -> u8 {
        match self {
            Currency::KRW | Currency::JPY => 0,
            _ => 2,
        }
    }

    /// Korean display name.
    pub fn korean_name(&self) -> &'static str {
        match self {
            Currency::KRW => "원",
            Currency::USD => "미국 달러",
            Currency::EUR => "유로",
            Currency::JPY => "일본 엔",
            Currency::GBP => "영국 파운드",
            Currency::CNY => "중국 위안",
            Currency::CHF => "스위스 프랑",
            Currency::AUD => "호주 달러",
            Currency::CAD => "캐나다 달러",
            Currency::HKD => "홍콩 달러",
            Currency::SGD => "싱가포르 달러",
        }
    }

    /// Built-in fallback rate in KRW per one unit of the currency.
    fn fallback_rate(&self) -> f64 {
        match self {
            Currency::KRW => 1.0,
            Currency::USD => 1_350.0,
            Currency::EUR => 1_470.0,
            Currency::JPY => 9.0,
            Currency::GBP => 1_710.0,
            Currency::CNY => 187.0,
            Currency::CHF => 1_530.0,
            Currency::AUD => 890.0,
            Currency::CAD => 990.0,
            Currency::HKD => 173.0,
            Currency::SGD => 1_000.0,
        }
    }
}

impl FromStr for Currency {
    type Err = CurrencyError;

    /// Parses ISO 4217 currency code (case-insensitive).
    ///
    /// # Examples
    ///
    /// ```
    /// use calc_core::types::currency::Currency;
    ///
    /// let usd: Currency = "USD".parse().unwrap();
    /// assert_eq!(usd, Currency::USD);
    ///
    /// let result: Result<Currency, _> = "XYZ".parse();
    /// assert!(result.is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, CurrencyError> {
        let upper = s.trim().to_uppercase();
        Currency::ALL
            .iter()
            .copied()
            .find(|c| c.code() == upper)
            .ok_or_else(|| CurrencyError::UnknownCurrency(s.to_string()))
    }
}

impl fmt::Display for Currency {
    /// Formats as ISO 4217 code.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Source of KRW-per-unit exchange rates.
///
/// Live quote fetching is not part of this library; the only
/// implementation is the static [`ExchangeRateTable`].
pub trait ExchangeRateSource {
    /// KRW paid for one unit of `currency`.
    fn krw_per_unit(&self, currency: Currency) -> Result<f64, CurrencyError>;

    /// Converts `amount` between two currencies through KRW.
    fn convert(&self, amount: f64, from: Currency, to: Currency) -> Result<f64, CurrencyError> {
        if from == to {
            return Ok(amount);
        }
        Ok(amount * self.krw_per_unit(from)? / self.krw_per_unit(to)?)
    }
}

/// Immutable KRW-per-unit rate table.
///
/// Constructed from the built-in fallback values, optionally overridden
/// per currency. Overrides must be strictly positive.
///
/// # Examples
///
/// ```
/// use calc_core::types::currency::{Currency, ExchangeRateSource, ExchangeRateTable};
///
/// let table = ExchangeRateTable::fallback()
///     .with_override(Currency::USD, 1_400.0)
///     .unwrap();
/// assert_eq!(table.krw_per_unit(Currency::USD).unwrap(), 1_400.0);
/// let usd = table.convert(2_800.0, Currency::KRW, Currency::USD).unwrap();
/// assert!((usd - 2.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExchangeRateTable {
    overrides: BTreeMap<Currency, f64>,
}

impl ExchangeRateTable {
    /// Table using only the built-in fallback rates.
    pub fn fallback() -> Self {
        Self {
            overrides: BTreeMap::new(),
        }
    }

    /// Returns a copy with `currency` priced at `krw_per_unit`.
    pub fn with_override(mut self, currency: Currency, krw_per_unit: f64) -> Result<Self, CurrencyError> {
        if !(krw_per_unit > 0.0 && krw_per_unit.is_finite()) {
            return Err(CurrencyError::InvalidRate {
                code: currency.code().to_string(),
                rate: krw_per_unit,
            });
        }
        if currency != Currency::KRW {
            self.overrides.insert(currency, krw_per_unit);
        }
        Ok(self)
    }

    /// Builds a table from code → rate pairs, e.g. a config section.
    pub fn from_pairs<'a, I>(pairs: I) -> Result<Self, CurrencyError>
    where
        I: IntoIterator<Item = (&'a str, f64)>,
    {
        pairs
            .into_iter()
            .try_fold(Self::fallback(), |table, (code, rate)| {
                let currency: Currency = code.parse()?;
                table.with_override(currency, rate)
            })
    }

    /// Whether `currency` is priced from an override rather than the fallback.
    pub fn is_overridden(&self, currency: Currency) -> bool {
        self.overrides.contains_key(&currency)
    }
}

impl Default for ExchangeRateTable {
    fn default() -> Self {
        Self::fallback()
    }
}

impl ExchangeRateSource for ExchangeRateTable {
    fn krw_per_unit(&self, currency: Currency) -> Result<f64, CurrencyError> {
        match self.overrides.get(&currency) {
            Some(rate) => Ok(*rate),
            None => {
                if currency != Currency::KRW {
                    tracing::debug!(currency = %currency, "using built-in fallback rate");
                }
                Ok(currency.fallback_rate())
            }
        }
    }
}
