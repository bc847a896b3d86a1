//! Unit conversion within a unit family.
//!
//! Linear families convert as `value × from.scale / to.scale`. Temperature
//! goes through Celsius: the source reading is mapped to °C with its
//! scale and offset, then projected into the target unit. Currency units
//! are built from an [`ExchangeRateTable`] (scale = KRW per unit).
//!
//! # Examples
//!
//! ```
//! use calc_core::units::UnitConverter;
//!
//! let converter = UnitConverter::default();
//! let inches = converter.convert(2.54, "cm", "in").unwrap();
//! assert!((inches - 1.0).abs() < 1e-12);
//!
//! let f = converter.convert(100.0, "°C", "°F").unwrap();
//! assert!((f - 212.0).abs() < 1e-9);
//!
//! assert!(converter.convert(1.0, "kg", "m").is_err());
//! ```

mod table;

use std::fmt;
use std::str::FromStr;

use crate::types::currency::{Currency, ExchangeRateSource, ExchangeRateTable};
use crate::types::CalcError;

/// Lowest physically meaningful temperature in Celsius.
pub const ABSOLUTE_ZERO_CELSIUS: f64 = -273.15;

/// Group of mutually convertible units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum UnitFamily {
    /// 길이
    Length,
    /// 무게
    Weight,
    /// 넓이
    Area,
    /// 부피
    Volume,
    /// 시간
    Time,
    /// 속도
    Speed,
    /// 데이터
    DataSize,
    /// 온도
    Temperature,
    /// 통화
    Currency,
}

impl UnitFamily {
    /// Every family, in menu order.
    pub const ALL: [UnitFamily; 9] = [
        UnitFamily::Length,
        UnitFamily::Weight,
        UnitFamily::Area,
        UnitFamily::Volume,
        UnitFamily::Time,
        UnitFamily::Speed,
        UnitFamily::DataSize,
        UnitFamily::Temperature,
        UnitFamily::Currency,
    ];

    /// Korean label.
    pub fn korean_name(&self) -> &'static str {
        match self {
            UnitFamily::Length => "길이",
            UnitFamily::Weight => "무게",
            UnitFamily::Area => "넓이",
            UnitFamily::Volume => "부피",
            UnitFamily::Time => "시간",
            UnitFamily::Speed => "속도",
            UnitFamily::DataSize => "데이터",
            UnitFamily::Temperature => "온도",
            UnitFamily::Currency => "통화",
        }
    }

    /// Kebab-case identifier.
    pub fn name(&self) -> &'static str {
        match self {
            UnitFamily::Length => "length",
            UnitFamily::Weight => "weight",
            UnitFamily::Area => "area",
            UnitFamily::Volume => "volume",
            UnitFamily::Time => "time",
            UnitFamily::Speed => "speed",
            UnitFamily::DataSize => "data-size",
            UnitFamily::Temperature => "temperature",
            UnitFamily::Currency => "currency",
        }
    }

    /// Whether conversion is a pure scale ratio.
    pub fn is_linear(&self) -> bool {
        !matches!(self, UnitFamily::Temperature)
    }

    fn static_units(&self) -> &'static [Unit] {
        match self {
            UnitFamily::Length => table::LENGTH,
            UnitFamily::Weight => table::WEIGHT,
            UnitFamily::Area => table::AREA,
            UnitFamily::Volume => table::VOLUME,
            UnitFamily::Time => table::TIME,
            UnitFamily::Speed => table::SPEED,
            UnitFamily::DataSize => table::DATA_SIZE,
            UnitFamily::Temperature => table::TEMPERATURE,
            UnitFamily::Currency => &[],
        }
    }
}

impl fmt::Display for UnitFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for UnitFamily {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_lowercase();
        UnitFamily::ALL
            .into_iter()
            .find(|family| family.name() == needle || family.korean_name() == needle)
            .ok_or_else(|| CalcError::invalid("unit family", format!("unknown family '{}'", s.trim())))
    }
}

/// A unit of measure.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Unit {
    /// Family the unit belongs to
    pub family: UnitFamily,
    /// Korean display name
    pub name: &'static str,
    /// Canonical symbol
    pub symbol: &'static str,
    /// Other accepted spellings
    pub aliases: &'static [&'static str],
    /// Size of one unit in the family base unit
    pub scale: f64,
    /// Additive term (temperature only)
    pub offset: f64,
}

impl Unit {
    fn currency(currency: Currency, krw_per_unit: f64) -> Self {
        Unit {
            family: UnitFamily::Currency,
            name: currency.korean_name(),
            symbol: currency.code(),
            aliases: &[],
            scale: krw_per_unit,
            offset: 0.0,
        }
    }

    fn matches_exact(&self, s: &str) -> bool {
        self.symbol == s || self.name == s || self.aliases.contains(&s)
    }

    fn matches_ignore_case(&self, s: &str) -> bool {
        self.symbol.eq_ignore_ascii_case(s)
            || self.name.eq_ignore_ascii_case(s)
            || self.aliases.iter().any(|a| a.eq_ignore_ascii_case(s))
    }

    fn to_base(&self, value: f64) -> f64 {
        value * self.scale + self.offset
    }

    fn from_base(&self, base: f64) -> f64 {
        (base - self.offset) / self.scale
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.symbol, self.name)
    }
}

/// Finds a unit in the static tables: exact spelling first, then ASCII
/// case-insensitive. One-letter names are case-sensitive (`b` is a bit,
/// `B` a byte). Currency units are not included.
pub fn find_static_unit(name: &str) -> Option<&'static Unit> {
    let name = name.trim();
    let all = || UnitFamily::ALL.into_iter().flat_map(|f| f.static_units().iter());
    let exact = all().find(|u| u.matches_exact(name));
    if exact.is_some() || name.chars().count() < 2 {
        return exact;
    }
    all().find(|u| u.matches_ignore_case(name))
}

/// Converts between two resolved units.
///
/// # Errors
/// [`CalcError::IncompatibleUnits`] across families; a non-finite value or
/// a temperature below absolute zero is rejected.
pub fn convert_between(value: f64, from: &Unit, to: &Unit) -> Result<f64, CalcError> {
    if !value.is_finite() {
        return Err(CalcError::invalid("value", "must be a finite number"));
    }
    if from.family != to.family {
        return Err(CalcError::IncompatibleUnits {
            from: from.symbol.to_string(),
            to: to.symbol.to_string(),
        });
    }
    if from.family.is_linear() {
        return Ok(value * from.scale / to.scale);
    }

    let celsius = from.to_base(value);
    if celsius < ABSOLUTE_ZERO_CELSIUS - 1e-9 {
        return Err(CalcError::domain(format!(
            "{}{} is below absolute zero",
            value, from.symbol
        )));
    }
    Ok(to.from_base(celsius))
}

/// Converter over the static tables plus currency units priced from an
/// exchange-rate table.
#[derive(Debug, Clone, Default)]
pub struct UnitConverter {
    rates: ExchangeRateTable,
}

impl UnitConverter {
    /// Creates a converter whose currency family uses `rates`.
    pub fn new(rates: ExchangeRateTable) -> Self {
        Self { rates }
    }

    /// Exchange rates used for the currency family.
    pub fn rates(&self) -> &ExchangeRateTable {
        &self.rates
    }

    /// Resolves a unit by symbol, name or alias; currency codes resolve last.
    ///
    /// # Errors
    /// [`CalcError::UnknownUnit`] when nothing matches.
    pub fn lookup(&self, name: &str) -> Result<Unit, CalcError> {
        if let Some(unit) = find_static_unit(name) {
            return Ok(*unit);
        }
        let currency: Currency = name
            .parse()
            .map_err(|_| CalcError::UnknownUnit(name.trim().to_string()))?;
        let rate = self.rates.krw_per_unit(currency)?;
        Ok(Unit::currency(currency, rate))
    }

    /// Units of `family` in table order.
    pub fn units(&self, family: UnitFamily) -> Result<Vec<Unit>, CalcError> {
        match family {
            UnitFamily::Currency => Currency::ALL
                .into_iter()
                .map(|c| Ok(Unit::currency(c, self.rates.krw_per_unit(c)?)))
                .collect(),
            other => Ok(other.static_units().to_vec()),
        }
    }

    /// Converts `value` from one unit to another of the same family.
    pub fn convert(&self, value: f64, from: &str, to: &str) -> Result<f64, CalcError> {
        let from = self.lookup(from)?;
        let to = self.lookup(to)?;
        convert_between(value, &from, &to)
    }

    /// `value` expressed in every unit of the source unit's family.
    pub fn convert_all(&self, value: f64, from: &str) -> Result<Vec<(Unit, f64)>, CalcError> {
        let from = self.lookup(from)?;
        self.units(from.family)?
            .into_iter()
            .map(|to| convert_between(value, &from, &to).map(|v| (to, v)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_linear_families() {
        let c = UnitConverter::default();
        assert_relative_eq!(c.convert(1.0, "km", "m").unwrap(), 1_000.0);
        assert_relative_eq!(c.convert(1.0, "lb", "kg").unwrap(), 0.453_592_37);
        assert_relative_eq!(c.convert(1.0, "h", "min").unwrap(), 60.0);
        assert_relative_eq!(c.convert(36.0, "km/h", "m/s").unwrap(), 10.0, epsilon = 1e-12);
        assert_relative_eq!(c.convert(1.0, "GB", "MB").unwrap(), 1_024.0);
        assert_relative_eq!(c.convert(1.0, "L", "mL").unwrap(), 1_000.0);
    }

    #[test]
    fn test_pyeong() {
        let c = UnitConverter::default();
        assert_relative_eq!(c.convert(1.0, "평", "㎡").unwrap(), 3.305_785_123_966_942, epsilon = 1e-12);
        assert_relative_eq!(c.convert(84.0, "㎡", "평").unwrap(), 25.41, epsilon = 1e-9);
    }

    #[test]
    fn test_temperature() {
        let c = UnitConverter::default();
        assert_relative_eq!(c.convert(32.0, "F", "C").unwrap(), 0.0, epsilon = 1e-12);
        assert_relative_eq!(c.convert(0.0, "K", "°C").unwrap(), -273.15, epsilon = 1e-12);
        assert_relative_eq!(c.convert(-40.0, "°C", "°F").unwrap(), -40.0, epsilon = 1e-12);
        assert_relative_eq!(c.convert(300.0, "K", "F").unwrap(), 80.33, epsilon = 1e-9);
    }

    #[test]
    fn test_below_absolute_zero_rejected() {
        let c = UnitConverter::default();
        assert!(matches!(c.convert(-300.0, "°C", "K"), Err(CalcError::DomainViolation(_))));
        assert!(c.convert(-1.0, "K", "°C").is_err());
    }

    #[test]
    fn test_lookup_case_insensitive_and_aliases() {
        let c = UnitConverter::default();
        assert_eq!(c.lookup("Meter").unwrap().symbol, "m");
        assert_eq!(c.lookup("gb").unwrap().symbol, "GB");
        assert_eq!(c.lookup(" 평 ").unwrap().family, UnitFamily::Area);
        assert_eq!(c.lookup("ml").unwrap().symbol, "mL");
    }

    #[test]
    fn test_one_letter_symbols_are_case_sensitive() {
        assert_eq!(find_static_unit("b").unwrap().symbol, "bit");
        assert_eq!(find_static_unit("B").unwrap().symbol, "B");
        assert_eq!(find_static_unit("K").unwrap().family, UnitFamily::Temperature);
        assert!(find_static_unit("k").is_none());
        assert_eq!(find_static_unit("kB").unwrap().symbol, "KB");

        let c = UnitConverter::default();
        assert_relative_eq!(c.convert(8.0, "b", "B").unwrap(), 1.0);
    }

    #[test]
    fn test_unknown_and_incompatible() {
        let c = UnitConverter::default();
        assert!(matches!(c.lookup("parsec"), Err(CalcError::UnknownUnit(_))));
        assert!(matches!(
            c.convert(1.0, "kg", "km"),
            Err(CalcError::IncompatibleUnits { .. })
        ));
        assert!(c.convert(f64::NAN, "kg", "g").is_err());
    }

    #[test]
    fn test_currency_family() {
        let rates = ExchangeRateTable::fallback()
            .with_override(Currency::USD, 1_400.0)
            .unwrap();
        let c = UnitConverter::new(rates);
        assert_relative_eq!(c.convert(2.0, "usd", "KRW").unwrap(), 2_800.0);
        assert_eq!(c.lookup("usd").unwrap().family, UnitFamily::Currency);
        assert_eq!(c.units(UnitFamily::Currency).unwrap().len(), Currency::ALL.len());
    }

    #[test]
    fn test_convert_all_covers_family() {
        let c = UnitConverter::default();
        let rows = c.convert_all(1.0, "m").unwrap();
        assert_eq!(rows.len(), UnitFamily::Length.static_units().len());
        let (unit, cm) = rows.iter().find(|(u, _)| u.symbol == "cm").unwrap();
        assert_eq!(unit.family, UnitFamily::Length);
        assert_relative_eq!(*cm, 100.0);
    }

    #[test]
    fn test_family_parse() {
        assert_eq!("온도".parse::<UnitFamily>().unwrap(), UnitFamily::Temperature);
        assert_eq!("Data-Size".parse::<UnitFamily>().unwrap(), UnitFamily::DataSize);
        assert!("energy".parse::<UnitFamily>().is_err());
    }

    #[test]
    fn test_symbols_unique_within_tables() {
        let all: Vec<&Unit> = UnitFamily::ALL
            .into_iter()
            .flat_map(|f| f.static_units().iter())
            .collect();
        for (i, a) in all.iter().enumerate() {
            for b in &all[i + 1..] {
                assert_ne!(a.symbol, b.symbol);
            }
        }
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        fn linear_pair() -> impl Strategy<Value = (Unit, Unit)> {
            let linear: Vec<UnitFamily> = UnitFamily::ALL
                .into_iter()
                .filter(|f| f.is_linear() && *f != UnitFamily::Currency)
                .collect();
            proptest::sample::select(linear).prop_flat_map(|family| {
                let units = family.static_units().to_vec();
                (
                    proptest::sample::select(units.clone()),
                    proptest::sample::select(units),
                )
            })
        }

        proptest! {
            #![proptest_config(ProptestConfig::with_cases(500))]

            #[test]
            fn test_linear_round_trip((from, to) in linear_pair(), value in -1e6f64..1e6) {
                let there = convert_between(value, &from, &to).unwrap();
                let back = convert_between(there, &to, &from).unwrap();
                prop_assert!((back - value).abs() <= 1e-9 * value.abs().max(1.0));
            }

            #[test]
            fn test_temperature_round_trip(celsius in -273.0f64..5_000.0) {
                let c = UnitConverter::default();
                let f = c.convert(celsius, "°C", "°F").unwrap();
                let back = c.convert(f, "°F", "°C").unwrap();
                prop_assert!((back - celsius).abs() < 1e-9);
            }
        }
    }
}
