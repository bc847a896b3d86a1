//! Date types and day count conventions for interest accrual.
//!
//! This module provides:
//! - `Date`: Type-safe date wrapper around chrono::NaiveDate
//! - `LocalDateTime`: Wall-clock date and time without a zone
//! - `DayCount`: Day count conventions for simple daily-rate accrual
//! - `DurationBreakdown`: Days/hours/minutes between two instants
//!
//! # Examples
//!
//! ```
//! use calc_core::types::time::{Date, DayCount};
//!
//! let start = Date::from_ymd(2024, 1, 1).unwrap();
//! let end = Date::from_ymd(2024, 7, 1).unwrap();
//!
//! let yf = DayCount::Actual365.year_fraction(start, end);
//! assert!((yf - 0.4986).abs() < 0.001);
//! ```

use chrono::{Datelike, Local, NaiveDate, NaiveDateTime};
use std::fmt;
use std::ops::Sub;
use std::str::FromStr;

use super::error::DateError;

/// Type-safe date wrapper around chrono::NaiveDate.
///
/// # Examples
///
/// ```
/// use calc_core::types::time::Date;
///
/// let date = Date::from_ymd(2024, 6, 15).unwrap();
/// assert_eq!(date.year(), 2024);
///
/// // Parse from ISO 8601 string
/// let parsed: Date = "2024-06-15".parse().unwrap();
/// assert_eq!(date, parsed);
///
/// // Days between dates
/// let start = Date::from_ymd(2024, 1, 1).unwrap();
/// let end = Date::from_ymd(2024, 1, 11).unwrap();
/// assert_eq!(end - start, 10);
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Date(NaiveDate);

impl Date {
    /// Creates a Date from year, month, and day components.
    ///
    /// # Returns
    /// `Ok(Date)` if the date is valid, `Err(DateError::InvalidDate)` otherwise.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Self, DateError> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Date)
            .ok_or(DateError::InvalidDate { year, month, day })
    }

    /// Returns today's date based on local system time.
    pub fn today() -> Self {
        Date(Local::now().date_naive())
    }

    /// Parses a date from `YYYY-MM-DD` (also accepts `YYYY.MM.DD`).
    ///
    /// # Examples
    ///
    /// ```
    /// use calc_core::types::time::Date;
    ///
    /// assert_eq!(Date::parse("2024.03.02").unwrap(), Date::parse("2024-03-02").unwrap());
    /// assert!(Date::parse("not-a-date").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, DateError> {
        let trimmed = s.trim();
        NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
            .or_else(|_| NaiveDate::parse_from_str(trimmed, "%Y.%m.%d"))
            .map(Date)
            .map_err(|e| DateError::ParseError(format!("'{}': {}", s, e)))
    }

    /// Returns the underlying NaiveDate.
    pub fn into_inner(self) -> NaiveDate {
        self.0
    }

    /// Returns the year component.
    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// Returns the month component (1-12).
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    /// Returns the day component (1-31).
    pub fn day(&self) -> u32 {
        self.0.day()
    }
}

impl Sub for Date {
    type Output = i64;

    /// Number of days between two dates; positive if `self` is later.
    fn sub(self, other: Self) -> i64 {
        (self.0 - other.0).num_days()
    }
}

impl FromStr for Date {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, DateError> {
        Date::parse(s)
    }
}

impl fmt::Display for Date {
    /// Formats the date as ISO 8601 (YYYY-MM-DD).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

/// Wall-clock date and time, not attached to any zone.
///
/// Accepts `YYYY-MM-DD HH:MM`, `YYYY-MM-DDTHH:MM` and the same with seconds.
///
/// # Examples
///
/// ```
/// use calc_core::types::time::LocalDateTime;
///
/// let t: LocalDateTime = "2024-03-01 09:30".parse().unwrap();
/// assert_eq!(t.to_string(), "2024-03-01 09:30");
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct LocalDateTime(NaiveDateTime);

impl LocalDateTime {
    const FORMATS: [&'static str; 4] = [
        "%Y-%m-%d %H:%M",
        "%Y-%m-%dT%H:%M",
        "%Y-%m-%d %H:%M:%S",
        "%Y-%m-%dT%H:%M:%S",
    ];

    /// Wraps a chrono NaiveDateTime.
    pub fn new(inner: NaiveDateTime) -> Self {
        Self(inner)
    }

    /// Parses one of the accepted formats.
    pub fn parse(s: &str) -> Result<Self, DateError> {
        let trimmed = s.trim();
        Self::FORMATS
            .iter()
            .find_map(|fmt| NaiveDateTime::parse_from_str(trimmed, fmt).ok())
            .map(LocalDateTime)
            .ok_or_else(|| DateError::ParseError(format!("'{}': expected YYYY-MM-DD HH:MM", s)))
    }

    /// Returns the underlying NaiveDateTime.
    pub fn into_inner(self) -> NaiveDateTime {
        self.0
    }

    /// Shifts the wall-clock time by a signed number of minutes.
    pub fn shifted_minutes(self, minutes: i64) -> Self {
        Self(self.0 + chrono::Duration::minutes(minutes))
    }
}

impl FromStr for LocalDateTime {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, DateError> {
        LocalDateTime::parse(s)
    }
}

impl fmt::Display for LocalDateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d %H:%M"))
    }
}

/// Elapsed time split into whole days, hours and minutes.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DurationBreakdown {
    /// Total elapsed minutes (negative when end precedes start)
    pub total_minutes: i64,
    /// Whole days
    pub days: i64,
    /// Remaining hours (0-23)
    pub hours: i64,
    /// Remaining minutes (0-59)
    pub minutes: i64,
}

impl DurationBreakdown {
    /// Breaks down the span from `start` to `end`.
    ///
    /// Components carry the sign of the total so that a reversed span
    /// reads as e.g. `-1 day -2 hours`.
    ///
    /// # Examples
    ///
    /// ```
    /// use calc_core::types::time::{DurationBreakdown, LocalDateTime};
    ///
    /// let start: LocalDateTime = "2024-01-01 08:00".parse().unwrap();
    /// let end: LocalDateTime = "2024-01-02 10:15".parse().unwrap();
    /// let d = DurationBreakdown::between(start, end);
    /// assert_eq!((d.days, d.hours, d.minutes), (1, 2, 15));
    /// ```
    pub fn between(start: LocalDateTime, end: LocalDateTime) -> Self {
        let total_minutes = (end.0 - start.0).num_minutes();
        Self {
            total_minutes,
            days: total_minutes / (24 * 60),
            hours: (total_minutes % (24 * 60)) / 60,
            minutes: total_minutes % 60,
        }
    }

    /// Total elapsed hours as a fraction.
    pub fn total_hours(&self) -> f64 {
        self.total_minutes as f64 / 60.0
    }
}

/// Day count convention for simple daily-rate accrual.
///
/// # Variants
/// - `Actual365`: actual days / 365 (Korean bank lending standard)
/// - `Actual360`: actual days / 360
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DayCount {
    /// Actual/365 Fixed
    #[default]
    Actual365,
    /// Actual/360
    Actual360,
}

impl DayCount {
    /// Returns the standard convention name.
    pub fn name(&self) -> &'static str {
        match self {
            DayCount::Actual365 => "ACT/365",
            DayCount::Actual360 => "ACT/360",
        }
    }

    /// Days in the year basis.
    pub fn basis(&self) -> f64 {
        match self {
            DayCount::Actual365 => 365.0,
            DayCount::Actual360 => 360.0,
        }
    }

    /// Year fraction from `start` to `end`; negative if reversed.
    pub fn year_fraction(&self, start: Date, end: Date) -> f64 {
        (end - start) as f64 / self.basis()
    }
}

impl FromStr for DayCount {
    type Err = String;

    /// Parses a convention name (case-insensitive): "ACT/365", "A365", "ACT/360", ...
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().replace(['/', ' '], "").as_str() {
            "ACT365" | "ACTUAL365" | "A365" | "365" => Ok(DayCount::Actual365),
            "ACT360" | "ACTUAL360" | "A360" | "360" => Ok(DayCount::Actual360),
            _ => Err(format!("Unknown day count convention: {}", s)),
        }
    }
}

impl fmt::Display for DayCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(feature = "serde")]
mod serde_impl {
    use super::DayCount;
    use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
    use std::str::FromStr;

    impl Serialize for DayCount {
        fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            serializer.serialize_str(self.name())
        }
    }

    impl<'de> Deserialize<'de> for DayCount {
        fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where
            D: Deserializer<'de>,
        {
            let s = String::deserialize(deserializer)?;
            DayCount::from_str(&s).map_err(de::Error::custom)
        }
    }
}
