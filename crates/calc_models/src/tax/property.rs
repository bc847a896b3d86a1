//! Annual property tax on housing (재산세).
//!
//! Tax base = official price × fair-market ratio (60%; a single home uses
//! 43%, 44% or 45% by price band). A single home priced at or below 900M
//! uses the special rate table. Urban area tax is 0.14% of the base and
//! local education tax is 20% of the property tax. Each item is truncated
//! to 10 won.

use calc_core::math::BracketEvaluation;
use calc_core::traits::Calculate;
use calc_core::types::money::floor_to;
use calc_core::types::validate::ensure_positive;
use calc_core::types::CalcError;

use super::tables;

/// Fair-market ratio for anything but a single home.
pub const STANDARD_FAIR_MARKET_RATIO: f64 = 0.60;
/// Highest price that still gets the single-home special rates.
pub const SINGLE_HOME_SPECIAL_LIMIT: f64 = 900_000_000.0;
/// Urban area tax rate on the base (도시지역분).
pub const URBAN_AREA_TAX_RATE: f64 = 0.0014;
/// Local education tax as a share of property tax.
pub const LOCAL_EDUCATION_TAX_RATE: f64 = 0.20;

/// Fair-market ratio for a single home by official price.
pub fn single_home_fair_market_ratio(official_price: f64) -> f64 {
    if official_price <= 300_000_000.0 {
        0.43
    } else if official_price <= 600_000_000.0 {
        0.44
    } else {
        0.45
    }
}

/// Official price and ownership.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PropertyTaxInput {
    /// Official publicly announced price (공시가격)
    pub official_price: f64,
    /// Whether this is the household's only home
    pub single_home: bool,
    /// Whether the property lies in an urban area
    pub urban_area: bool,
}

impl PropertyTaxInput {
    /// An urban property.
    pub fn new(official_price: f64, single_home: bool) -> Self {
        Self {
            official_price,
            single_home,
            urban_area: true,
        }
    }
}

/// Base and each tax item.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PropertyTaxResult {
    /// Fair-market ratio applied
    pub fair_market_ratio: f64,
    /// Tax base
    pub tax_base: f64,
    /// Whether the single-home special rates were used
    pub special_rates: bool,
    /// Property tax
    pub property_tax: f64,
    /// Urban area tax
    pub urban_area_tax: f64,
    /// Local education tax
    pub local_education_tax: f64,
    /// Sum of all items
    pub total: f64,
    /// Property tax breakdown
    pub breakdown: BracketEvaluation,
}

impl Calculate for PropertyTaxInput {
    type Output = PropertyTaxResult;

    fn calculate(&self) -> Result<PropertyTaxResult, CalcError> {
        let price = ensure_positive("official price", self.official_price)?;

        let fair_market_ratio = if self.single_home {
            single_home_fair_market_ratio(price)
        } else {
            STANDARD_FAIR_MARKET_RATIO
        };
        let tax_base = price * fair_market_ratio;
        let special_rates = self.single_home && price <= SINGLE_HOME_SPECIAL_LIMIT;

        let breakdown = tables::property_tax(special_rates)?.evaluate(tax_base);
        let property_tax = floor_to(breakdown.total, 10.0);
        let urban_area_tax = if self.urban_area {
            floor_to(tax_base * URBAN_AREA_TAX_RATE, 10.0)
        } else {
            0.0
        };
        let local_education_tax = floor_to(property_tax * LOCAL_EDUCATION_TAX_RATE, 10.0);

        Ok(PropertyTaxResult {
            fair_market_ratio,
            tax_base,
            special_rates,
            property_tax,
            urban_area_tax,
            local_education_tax,
            total: property_tax + urban_area_tax + local_education_tax,
            breakdown,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_single_home_special_rates() {
        let result = PropertyTaxInput::new(500_000_000.0, true).calculate().unwrap();
        assert_eq!(result.fair_market_ratio, 0.44);
        assert_relative_eq!(result.tax_base, 220_000_000.0, epsilon = 1e-6);
        assert!(result.special_rates);
        assert_eq!(result.property_tax, 260_000.0);
        assert_eq!(result.urban_area_tax, 308_000.0);
        assert_eq!(result.local_education_tax, 52_000.0);
        assert_eq!(result.total, 620_000.0);
    }

    #[test]
    fn test_multi_home_standard_rates() {
        let result = PropertyTaxInput::new(500_000_000.0, false).calculate().unwrap();
        assert_relative_eq!(result.tax_base, 300_000_000.0, epsilon = 1e-6);
        assert!(!result.special_rates);
        assert_eq!(result.property_tax, 570_000.0);
        assert_eq!(result.urban_area_tax, 420_000.0);
        assert_eq!(result.local_education_tax, 114_000.0);
    }

    #[test]
    fn test_expensive_single_home_uses_standard_rates() {
        let result = PropertyTaxInput::new(1_000_000_000.0, true).calculate().unwrap();
        assert_eq!(result.fair_market_ratio, 0.45);
        assert!(!result.special_rates);
        // base 450M: 570,000 + 150M × 0.4%
        assert_eq!(result.property_tax, 1_170_000.0);
    }

    #[test]
    fn test_non_urban_area() {
        let mut input = PropertyTaxInput::new(200_000_000.0, false);
        input.urban_area = false;
        assert_eq!(input.calculate().unwrap().urban_area_tax, 0.0);
        input.official_price = 0.0;
        assert!(input.calculate().is_err());
    }
}
