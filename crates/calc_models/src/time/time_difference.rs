//! World time difference (세계 시차) and elapsed duration.
//!
//! Cities carry a fixed standard UTC offset in minutes. Daylight saving
//! time is not applied.
//!
//! # Examples
//!
//! ```
//! use calc_core::traits::Calculate;
//! use calc_models::time::TimeDifferenceInput;
//!
//! let input = TimeDifferenceInput::new("서울", "London", "2024-03-01 09:00".parse().unwrap());
//! let result = input.calculate().unwrap();
//! assert_eq!(result.converted.to_string(), "2024-03-01 00:00");
//! assert_eq!(result.offset_difference_hours, -9.0);
//! ```

use calc_core::traits::Calculate;
use calc_core::types::{CalcError, DurationBreakdown, LocalDateTime};

/// A city and its standard UTC offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct City {
    /// Korean name
    pub name: &'static str,
    /// English name
    pub english_name: &'static str,
    /// Standard offset from UTC in minutes
    pub utc_offset_minutes: i32,
}

impl City {
    /// Offset formatted as `UTC+05:30`.
    pub fn offset_label(&self) -> String {
        let sign = if self.utc_offset_minutes < 0 { '-' } else { '+' };
        let abs = self.utc_offset_minutes.abs();
        format!("UTC{}{:02}:{:02}", sign, abs / 60, abs % 60)
    }
}

const fn city(name: &'static str, english_name: &'static str, utc_offset_minutes: i32) -> City {
    City {
        name,
        english_name,
        utc_offset_minutes,
    }
}

/// Supported cities.
pub static CITIES: [City; 24] = [
    city("서울", "Seoul", 540),
    city("도쿄", "Tokyo", 540),
    city("베이징", "Beijing", 480),
    city("홍콩", "Hong Kong", 480),
    city("싱가포르", "Singapore", 480),
    city("방콕", "Bangkok", 420),
    city("하노이", "Hanoi", 420),
    city("뉴델리", "New Delhi", 330),
    city("카트만두", "Kathmandu", 345),
    city("두바이", "Dubai", 240),
    city("모스크바", "Moscow", 180),
    city("런던", "London", 0),
    city("파리", "Paris", 60),
    city("베를린", "Berlin", 60),
    city("로마", "Rome", 60),
    city("뉴욕", "New York", -300),
    city("시카고", "Chicago", -360),
    city("덴버", "Denver", -420),
    city("로스앤젤레스", "Los Angeles", -480),
    city("밴쿠버", "Vancouver", -480),
    city("호놀룰루", "Honolulu", -600),
    city("시드니", "Sydney", 600),
    city("오클랜드", "Auckland", 720),
    city("상파울루", "Sao Paulo", -180),
];

/// Finds a city by Korean or English name (case-insensitive; spaces and
/// hyphens ignored).
pub fn find_city(name: &str) -> Result<&'static City, CalcError> {
    let key = normalize(name);
    CITIES
        .iter()
        .find(|c| normalize(c.name) == key || normalize(c.english_name) == key)
        .ok_or_else(|| {
            CalcError::invalid("city", format!("'{}' is not a supported city", name.trim()))
        })
}

fn normalize(s: &str) -> String {
    s.chars()
        .filter(|c| !c.is_whitespace() && *c != '-' && *c != '_')
        .flat_map(char::to_lowercase)
        .collect()
}

/// Wall-clock time in one city to convert into another.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TimeDifferenceInput {
    /// Source city name
    pub from_city: String,
    /// Target city name
    pub to_city: String,
    /// Local time in the source city
    pub datetime: LocalDateTime,
}

impl TimeDifferenceInput {
    /// Creates an input record.
    pub fn new(
        from_city: impl Into<String>,
        to_city: impl Into<String>,
        datetime: LocalDateTime,
    ) -> Self {
        Self {
            from_city: from_city.into(),
            to_city: to_city.into(),
            datetime,
        }
    }
}

/// Converted time and offsets.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TimeDifferenceResult {
    /// Source city
    pub from: City,
    /// Target city
    pub to: City,
    /// Local time in the source city
    pub source: LocalDateTime,
    /// Same instant in the target city
    pub converted: LocalDateTime,
    /// Target offset minus source offset, in hours
    pub offset_difference_hours: f64,
    /// Calendar days the target date is ahead (+) or behind (−)
    pub day_shift: i64,
}

impl Calculate for TimeDifferenceInput {
    type Output = TimeDifferenceResult;

    fn calculate(&self) -> Result<TimeDifferenceResult, CalcError> {
        let from = *find_city(&self.from_city)?;
        let to = *find_city(&self.to_city)?;

        let difference_minutes = to.utc_offset_minutes - from.utc_offset_minutes;
        let converted = self.datetime.shifted_minutes(i64::from(difference_minutes));
        let day_shift =
            (converted.into_inner().date() - self.datetime.into_inner().date()).num_days();

        Ok(TimeDifferenceResult {
            from,
            to,
            source: self.datetime,
            converted,
            offset_difference_hours: f64::from(difference_minutes) / 60.0,
            day_shift,
        })
    }
}

/// The same instant in every supported city, source city first.
pub fn world_clock(
    city_name: &str,
    datetime: LocalDateTime,
) -> Result<Vec<(&'static City, LocalDateTime)>, CalcError> {
    let source = find_city(city_name)?;
    let mut rows = vec![(source, datetime)];
    rows.extend(CITIES.iter().filter(|c| c.name != source.name).map(|c| {
        let shift = c.utc_offset_minutes - source.utc_offset_minutes;
        (c, datetime.shifted_minutes(i64::from(shift)))
    }));
    Ok(rows)
}

/// Two wall-clock times in the same zone.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DurationInput {
    /// Start
    pub start: LocalDateTime,
    /// End (not before `start`)
    pub end: LocalDateTime,
}

impl DurationInput {
    /// Creates an input record.
    pub fn new(start: LocalDateTime, end: LocalDateTime) -> Self {
        Self { start, end }
    }
}

impl Calculate for DurationInput {
    type Output = DurationBreakdown;

    fn calculate(&self) -> Result<DurationBreakdown, CalcError> {
        if self.end < self.start {
            return Err(CalcError::domain(format!(
                "end ({}) is before start ({})",
                self.end, self.start
            )));
        }
        Ok(DurationBreakdown::between(self.start, self.end))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(s: &str) -> LocalDateTime {
        s.parse().unwrap()
    }

    #[test]
    fn test_seoul_to_new_york_crosses_date() {
        let result = TimeDifferenceInput::new("Seoul", "new york", at("2024-01-01 10:00"))
            .calculate()
            .unwrap();
        assert_eq!(result.converted, at("2023-12-31 20:00"));
        assert_eq!(result.offset_difference_hours, -14.0);
        assert_eq!(result.day_shift, -1);
    }

    #[test]
    fn test_half_and_quarter_hour_offsets() {
        let result = TimeDifferenceInput::new("서울", "뉴델리", at("2024-05-05 12:00"))
            .calculate()
            .unwrap();
        assert_eq!(result.converted, at("2024-05-05 08:30"));
        assert_eq!(result.offset_difference_hours, -3.5);
        assert_eq!(result.day_shift, 0);

        let result = TimeDifferenceInput::new("London", "Kathmandu", at("2024-05-05 20:00"))
            .calculate()
            .unwrap();
        assert_eq!(result.converted, at("2024-05-06 01:45"));
        assert_eq!(result.day_shift, 1);
    }

    #[test]
    fn test_same_city_is_identity() {
        let t = at("2024-02-29 23:59");
        let result = TimeDifferenceInput::new("Tokyo", "도쿄", t).calculate().unwrap();
        assert_eq!(result.converted, t);
        assert_eq!(result.offset_difference_hours, 0.0);
    }

    #[test]
    fn test_unknown_city() {
        let err = TimeDifferenceInput::new("Atlantis", "Seoul", at("2024-01-01 00:00"))
            .calculate()
            .unwrap_err();
        assert!(matches!(err, CalcError::InvalidInput { field: "city", .. }));
    }

    #[test]
    fn test_find_city_normalizes() {
        assert_eq!(find_city("los-angeles").unwrap().utc_offset_minutes, -480);
        assert_eq!(find_city("HONG KONG").unwrap().name, "홍콩");
        assert_eq!(find_city("상파울루").unwrap().offset_label(), "UTC-03:00");
        assert_eq!(find_city("New Delhi").unwrap().offset_label(), "UTC+05:30");
    }

    #[test]
    fn test_world_clock_lists_every_city_once() {
        let rows = world_clock("서울", at("2024-01-01 09:00")).unwrap();
        assert_eq!(rows.len(), CITIES.len());
        assert_eq!(rows[0].0.name, "서울");
        let london = rows.iter().find(|(c, _)| c.english_name == "London").unwrap();
        assert_eq!(london.1, at("2024-01-01 00:00"));
    }

    #[test]
    fn test_duration() {
        let d = DurationInput::new(at("2024-01-01 08:00"), at("2024-01-03 09:30"))
            .calculate()
            .unwrap();
        assert_eq!((d.days, d.hours, d.minutes), (2, 1, 30));
        assert_eq!(d.total_minutes, 2 * 24 * 60 + 90);

        let reversed = DurationInput::new(at("2024-01-02 00:00"), at("2024-01-01 00:00"));
        assert!(matches!(reversed.calculate(), Err(CalcError::DomainViolation(_))));
    }
}
