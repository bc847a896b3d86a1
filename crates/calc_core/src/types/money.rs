//! Won amounts: rounding rules and display.
//!
//! Korean tax notices truncate below one won (and some items below ten
//! won); loan schedules round to the nearest won.

use super::number::group_thousands;

/// Rounds to the nearest whole won (half away from zero).
#[inline]
pub fn round_won(amount: f64) -> f64 {
    amount.round()
}

/// Truncates toward zero to a multiple of `unit` (e.g. 10 for 10-won units).
///
/// # Examples
///
/// ```
/// use calc_core::types::money::floor_to;
///
/// assert_eq!(floor_to(12_345.9, 1.0), 12_345.0);
/// assert_eq!(floor_to(12_345.9, 10.0), 12_340.0);
/// assert_eq!(floor_to(-12_345.9, 10.0), -12_340.0);
/// ```
#[inline]
pub fn floor_to(amount: f64, unit: f64) -> f64 {
    if unit <= 0.0 {
        return amount;
    }
    let units = amount / unit;
    let nearest = units.round();
    // products like 0.07 × price land a hair below an exact multiple
    if (units - nearest).abs() < 1e-9 {
        return nearest * unit;
    }
    units.trunc() * unit
}

/// Formats a won amount rounded to whole won, e.g. `1,347,134원`.
///
/// # Examples
///
/// ```
/// use calc_core::types::money::format_krw;
///
/// assert_eq!(format_krw(1_347_134.42), "1,347,134원");
/// assert_eq!(format_krw(0.0), "0원");
/// ```
pub fn format_krw(amount: f64) -> String {
    format!("{}원", group_thousands(round_won(amount), 0))
}

/// Formats a ratio as a percentage with `decimals` places, e.g. `0.035` → `3.50%`.
pub fn format_percent(ratio: f64, decimals: usize) -> String {
    format!("{:.*}%", decimals, ratio * 100.0)
}

/// Formats a won amount in the 만원 (ten-thousand won) unit used in listings.
///
/// # Examples
///
/// ```
/// use calc_core::types::money::format_manwon;
///
/// assert_eq!(format_manwon(350_000_000.0), "35,000만원");
/// ```
pub fn format_manwon(amount: f64) -> String {
    format!("{}만원", group_thousands(amount / 10_000.0, 0))
}
