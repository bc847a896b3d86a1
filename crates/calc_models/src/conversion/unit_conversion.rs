//! Unit conversion (단위 변환).
//!
//! With a target unit the result holds that single conversion; without
//! one it lists the value in every unit of the source unit's family.
//!
//! # Examples
//!
//! ```
//! use calc_core::traits::Calculate;
//! use calc_models::conversion::UnitConversionInput;
//!
//! let result = UnitConversionInput::new(84.0, "m2").to("평").calculate().unwrap();
//! assert!((result.conversions[0].value - 25.41).abs() < 1e-9);
//! ```

use calc_core::traits::Calculate;
use calc_core::types::{CalcError, ExchangeRateTable};
use calc_core::units::{Unit, UnitConverter, UnitFamily};

/// Value, source unit and optional target unit.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UnitConversionInput {
    /// Value in the source unit
    pub value: f64,
    /// Source unit symbol or name
    pub from: String,
    /// Target unit; `None` converts to every unit of the family
    pub to: Option<String>,
    /// Rates for currency units
    pub rates: ExchangeRateTable,
}

impl UnitConversionInput {
    /// Converts into every unit of the family, with fallback rates.
    pub fn new(value: f64, from: impl Into<String>) -> Self {
        Self {
            value,
            from: from.into(),
            to: None,
            rates: ExchangeRateTable::fallback(),
        }
    }

    /// Restricts the result to one target unit.
    pub fn to(mut self, unit: impl Into<String>) -> Self {
        self.to = Some(unit.into());
        self
    }

    /// Uses `rates` for currency units.
    pub fn with_rates(mut self, rates: ExchangeRateTable) -> Self {
        self.rates = rates;
        self
    }
}

/// The value in one target unit.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Conversion {
    /// Target unit
    pub unit: Unit,
    /// Converted value
    pub value: f64,
}

/// Resolved source unit and conversions.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct UnitConversionResult {
    /// Family of both units
    pub family: UnitFamily,
    /// Source unit
    pub from: Unit,
    /// Value in the source unit
    pub value: f64,
    /// Converted values, in table order
    pub conversions: Vec<Conversion>,
}

impl Calculate for UnitConversionInput {
    type Output = UnitConversionResult;

    fn calculate(&self) -> Result<UnitConversionResult, CalcError> {
        let converter = UnitConverter::new(self.rates.clone());
        let from = converter.lookup(&self.from)?;

        let conversions = match &self.to {
            Some(to) => {
                let target = converter.lookup(to)?;
                let value = calc_core::units::convert_between(self.value, &from, &target)?;
                vec![Conversion { unit: target, value }]
            }
            None => converter
                .convert_all(self.value, &self.from)?
                .into_iter()
                .map(|(unit, value)| Conversion { unit, value })
                .collect(),
        };

        Ok(UnitConversionResult {
            family: from.family,
            from,
            value: self.value,
            conversions,
        })
    }
}
