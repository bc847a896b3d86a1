//! Field validation helpers shared by every calculator.

use super::error::CalcError;

/// Requires `value > 0` (and finite).
///
/// # Examples
///
/// ```
/// use calc_core::types::validate::ensure_positive;
///
/// assert_eq!(ensure_positive("weight", 65.0).unwrap(), 65.0);
/// assert!(ensure_positive("weight", 0.0).is_err());
/// ```
pub fn ensure_positive(field: &'static str, value: f64) -> Result<f64, CalcError> {
    if !value.is_finite() {
        return Err(CalcError::invalid(field, "must be a finite number"));
    }
    if value <= 0.0 {
        return Err(CalcError::NonPositive { field, value });
    }
    Ok(value)
}

/// Requires `value >= 0` (and finite).
pub fn ensure_non_negative(field: &'static str, value: f64) -> Result<f64, CalcError> {
    if !value.is_finite() {
        return Err(CalcError::invalid(field, "must be a finite number"));
    }
    if value < 0.0 {
        return Err(CalcError::Negative { field, value });
    }
    Ok(value)
}

/// Requires a percentage in `[0, max]`; returns it as a ratio (`3.5` → `0.035`).
pub fn ensure_percent(field: &'static str, percent: f64, max: f64) -> Result<f64, CalcError> {
    ensure_non_negative(field, percent)?;
    if percent > max {
        return Err(CalcError::invalid(field, format!("{}% exceeds {}%", percent, max)));
    }
    Ok(percent / 100.0)
}

/// Requires an optional field to be present.
pub fn require<T>(field: &'static str, value: Option<T>) -> Result<T, CalcError> {
    value.ok_or(CalcError::MissingField(field))
}
