//! Simple (non-compounding) interest over a day-count period.

use crate::types::{Date, DayCount};

/// Simple interest `principal × annual_rate × year_fraction(start, end)`.
///
/// Returns 0 when `end` is on or before `start`.
///
/// # Examples
///
/// ```
/// use calc_core::math::interest::simple_interest;
/// use calc_core::types::{Date, DayCount};
///
/// let start = Date::from_ymd(2024, 1, 1).unwrap();
/// let end = Date::from_ymd(2025, 1, 1).unwrap();
///
/// // 2024 is a leap year: 366 / 365
/// let interest = simple_interest(36_500_000.0, 0.05, start, end, DayCount::Actual365);
/// assert!((interest - 1_830_000.0).abs() < 1e-6);
/// ```
pub fn simple_interest(
    principal: f64,
    annual_rate: f64,
    start: Date,
    end: Date,
    day_count: DayCount,
) -> f64 {
    if end <= start {
        return 0.0;
    }
    principal * annual_rate * day_count.year_fraction(start, end)
}

/// Whole days strictly after `start` up to and including `end`; 0 if `end <= start`.
pub fn accrual_days(start: Date, end: Date) -> i64 {
    (end - start).max(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn d(y: i32, m: u32, day: u32) -> Date {
        Date::from_ymd(y, m, day).unwrap()
    }

    #[test]
    fn test_actual_360() {
        let interest = simple_interest(36_000_000.0, 0.05, d(2024, 3, 1), d(2024, 3, 31), DayCount::Actual360);
        assert_relative_eq!(interest, 150_000.0, epsilon = 1e-6);
    }

    #[test]
    fn test_no_interest_when_end_not_after_start() {
        assert_eq!(simple_interest(1e6, 0.1, d(2024, 5, 1), d(2024, 5, 1), DayCount::Actual365), 0.0);
        assert_eq!(simple_interest(1e6, 0.1, d(2024, 5, 2), d(2024, 5, 1), DayCount::Actual365), 0.0);
        assert_eq!(accrual_days(d(2024, 5, 2), d(2024, 5, 1)), 0);
    }

    #[test]
    fn test_accrual_days() {
        assert_eq!(accrual_days(d(2024, 2, 1), d(2024, 3, 1)), 29);
    }
}
