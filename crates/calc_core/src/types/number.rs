//! Formatted numeric input.
//!
//! Form fields show amounts with thousands separators while the formulas
//! need a plain number. [`FormattedNumber`] keeps only the canonical value
//! and derives the display string on demand.

use std::fmt;
use std::str::FromStr;

use super::error::CalcError;

/// Suffixes accepted (and ignored) after a number, e.g. `"1,000원"`.
const UNIT_SUFFIXES: [&str; 6] = ["원", "%", "kg", "cm", "㎡", "m"];

/// Numeric value with derived thousands-separated display.
///
/// # Examples
///
/// ```
/// use calc_core::types::FormattedNumber;
///
/// let n = FormattedNumber::parse("1,234,567").unwrap();
/// assert_eq!(n.value(), 1_234_567.0);
/// assert_eq!(n.to_string(), "1,234,567");
///
/// let rate = FormattedNumber::parse(" 3.5% ").unwrap();
/// assert_eq!(rate.value(), 3.5);
/// assert_eq!(rate.with_decimals(2), "3.50");
/// ```
#[derive(Copy, Clone, Debug, PartialEq, PartialOrd, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct FormattedNumber(f64);

impl FormattedNumber {
    /// Wraps a canonical value.
    pub fn new(value: f64) -> Self {
        Self(value)
    }

    /// Parses user input: separators, surrounding whitespace and a
    /// trailing unit suffix are ignored. Empty input is a missing field.
    pub fn parse(input: &str) -> Result<Self, CalcError> {
        let mut s = input.trim();
        for suffix in UNIT_SUFFIXES {
            if let Some(stripped) = s.strip_suffix(suffix) {
                s = stripped.trim_end();
                break;
            }
        }
        let cleaned: String = s.chars().filter(|c| *c != ',' && *c != '_').collect();
        if cleaned.is_empty() {
            return Err(CalcError::Parse("empty value".to_string()));
        }
        let value: f64 = cleaned
            .parse()
            .map_err(|_| CalcError::Parse(format!("'{}' is not a number", input.trim())))?;
        if !value.is_finite() {
            return Err(CalcError::Parse(format!("'{}' is not a finite number", input.trim())));
        }
        Ok(Self(value))
    }

    /// Canonical value used by formulas.
    #[inline]
    pub fn value(&self) -> f64 {
        self.0
    }

    /// Display string with a fixed number of decimals.
    pub fn with_decimals(&self, decimals: usize) -> String {
        group_thousands(self.0, decimals)
    }
}

impl From<f64> for FormattedNumber {
    fn from(value: f64) -> Self {
        Self(value)
    }
}

impl FromStr for FormattedNumber {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for FormattedNumber {
    /// Integers print without decimals; fractions keep up to two places.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let decimals = if self.0.fract() == 0.0 { 0 } else { 2 };
        let mut s = group_thousands(self.0, decimals);
        if decimals > 0 {
            while s.ends_with('0') {
                s.pop();
            }
            if s.ends_with('.') {
                s.pop();
            }
        }
        f.write_str(&s)
    }
}

/// Formats `value` rounded to `decimals` places with `,` every three digits.
///
/// # Examples
///
/// ```
/// use calc_core::types::number::group_thousands;
///
/// assert_eq!(group_thousands(1_347_134.42, 0), "1,347,134");
/// assert_eq!(group_thousands(-9_876.5, 1), "-9,876.5");
/// assert_eq!(group_thousands(999.0, 0), "999");
/// ```
pub fn group_thousands(value: f64, decimals: usize) -> String {
    let formatted = format!("{:.*}", decimals, value.abs());
    let (int_part, frac_part) = match formatted.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (formatted.as_str(), None),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3 + 4);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if let Some(frac) = frac_part {
        grouped.push('.');
        grouped.push_str(frac);
    }

    let is_zero = grouped.chars().all(|c| matches!(c, '0' | ',' | '.'));
    if value < 0.0 && !is_zero {
        grouped.insert(0, '-');
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_and_grouped() {
        assert_eq!(FormattedNumber::parse("300000000").unwrap().value(), 300_000_000.0);
        assert_eq!(FormattedNumber::parse("300,000,000").unwrap().value(), 300_000_000.0);
        assert_eq!(FormattedNumber::parse("1_000").unwrap().value(), 1_000.0);
        assert_eq!(FormattedNumber::parse("-2,500.75").unwrap().value(), -2_500.75);
    }

    #[test]
    fn test_parse_suffixes() {
        assert_eq!(FormattedNumber::parse("50,000원").unwrap().value(), 50_000.0);
        assert_eq!(FormattedNumber::parse("170cm").unwrap().value(), 170.0);
        assert_eq!(FormattedNumber::parse("84.9 ㎡").unwrap().value(), 84.9);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(matches!(FormattedNumber::parse(""), Err(CalcError::Parse(_))));
        assert!(matches!(FormattedNumber::parse("  원"), Err(CalcError::Parse(_))));
        assert!(matches!(FormattedNumber::parse("12a"), Err(CalcError::Parse(_))));
        assert!(matches!(FormattedNumber::parse("inf"), Err(CalcError::Parse(_))));
    }

    #[test]
    fn test_display_trims_trailing_zeros() {
        assert_eq!(FormattedNumber::new(1_500_000.0).to_string(), "1,500,000");
        assert_eq!(FormattedNumber::new(1234.5).to_string(), "1,234.5");
        assert_eq!(FormattedNumber::new(0.25).to_string(), "0.25");
    }

    #[test]
    fn test_group_thousands_edges() {
        assert_eq!(group_thousands(0.0, 0), "0");
        assert_eq!(group_thousands(-0.001, 2), "0.00");
        assert_eq!(group_thousands(100.0, 0), "100");
        assert_eq!(group_thousands(1000.0, 0), "1,000");
        assert_eq!(group_thousands(123_456_789.0, 0), "123,456,789");
        assert_eq!(group_thousands(999.996, 2), "1,000.00");
    }
}
