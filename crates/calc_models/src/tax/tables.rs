//! Statutory rate tables.
//!
//! Each table is an ordered list of `(upper bound, rate)` steps, the last
//! one unbounded. Constructors return the validated
//! [`BracketTable`] with the quick-calculation deductions filled in.

use calc_core::math::BracketTable;
use calc_core::types::CalcError;

/// Comprehensive income tax.
pub const INCOME_TAX_STEPS: &[(Option<f64>, f64)] = &[
    (Some(12_000_000.0), 0.06),
    (Some(46_000_000.0), 0.15),
    (Some(88_000_000.0), 0.24),
    (Some(150_000_000.0), 0.35),
    (Some(300_000_000.0), 0.38),
    (Some(500_000_000.0), 0.40),
    (Some(1_000_000_000.0), 0.42),
    (None, 0.45),
];

/// Earned income deduction (근로소득공제) as a marginal schedule on gross salary.
pub const EARNED_INCOME_DEDUCTION_STEPS: &[(Option<f64>, f64)] = &[
    (Some(5_000_000.0), 0.70),
    (Some(15_000_000.0), 0.40),
    (Some(45_000_000.0), 0.15),
    (Some(100_000_000.0), 0.05),
    (None, 0.02),
];

/// Cap on the earned income deduction.
pub const EARNED_INCOME_DEDUCTION_CAP: f64 = 20_000_000.0;

/// Inheritance and gift tax.
pub const ESTATE_TAX_STEPS: &[(Option<f64>, f64)] = &[
    (Some(100_000_000.0), 0.10),
    (Some(500_000_000.0), 0.20),
    (Some(1_000_000_000.0), 0.30),
    (Some(3_000_000_000.0), 0.40),
    (None, 0.50),
];

/// Property tax on housing.
pub const PROPERTY_TAX_STEPS: &[(Option<f64>, f64)] = &[
    (Some(60_000_000.0), 0.001),
    (Some(150_000_000.0), 0.0015),
    (Some(300_000_000.0), 0.0025),
    (None, 0.004),
];

/// Special property tax rates for a single home priced at or below 900M.
pub const SINGLE_HOME_PROPERTY_TAX_STEPS: &[(Option<f64>, f64)] = &[
    (Some(60_000_000.0), 0.0005),
    (Some(150_000_000.0), 0.001),
    (Some(300_000_000.0), 0.002),
    (None, 0.0035),
];

/// Income tax table.
pub fn income_tax() -> Result<BracketTable, CalcError> {
    BracketTable::progressive(INCOME_TAX_STEPS)
}

/// Earned income deduction table (uncapped).
pub fn earned_income_deduction() -> Result<BracketTable, CalcError> {
    BracketTable::progressive(EARNED_INCOME_DEDUCTION_STEPS)
}

/// Inheritance and gift tax table.
pub fn estate_tax() -> Result<BracketTable, CalcError> {
    BracketTable::progressive(ESTATE_TAX_STEPS)
}

/// Standard or single-home property tax table.
pub fn property_tax(single_home_special: bool) -> Result<BracketTable, CalcError> {
    if single_home_special {
        BracketTable::progressive(SINGLE_HOME_PROPERTY_TAX_STEPS)
    } else {
        BracketTable::progressive(PROPERTY_TAX_STEPS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_income_tax_quick_deductions() {
        let table = income_tax().unwrap();
        let deductions: Vec<f64> = table
            .brackets()
            .iter()
            .map(|b| b.deduction.unwrap())
            .collect();
        let expected = [
            0.0,
            1_080_000.0,
            5_220_000.0,
            14_900_000.0,
            19_400_000.0,
            25_400_000.0,
            35_400_000.0,
            65_400_000.0,
        ];
        for (got, want) in deductions.iter().zip(expected) {
            assert_relative_eq!(*got, want, epsilon = 1e-3);
        }
    }

    #[test]
    fn test_estate_tax_quick_deductions() {
        let table = estate_tax().unwrap();
        let deductions: Vec<f64> = table
            .brackets()
            .iter()
            .map(|b| b.deduction.unwrap())
            .collect();
        let expected = [0.0, 10_000_000.0, 60_000_000.0, 160_000_000.0, 460_000_000.0];
        for (got, want) in deductions.iter().zip(expected) {
            assert_relative_eq!(*got, want, epsilon = 1e-3);
        }
    }

    #[test]
    fn test_earned_income_deduction_schedule() {
        let table = earned_income_deduction().unwrap();
        assert_relative_eq!(table.tax(5_000_000.0), 3_500_000.0, epsilon = 1e-6);
        assert_relative_eq!(table.tax(15_000_000.0), 7_500_000.0, epsilon = 1e-6);
        assert_relative_eq!(table.tax(45_000_000.0), 12_000_000.0, epsilon = 1e-6);
        assert_relative_eq!(table.tax(100_000_000.0), 14_750_000.0, epsilon = 1e-6);
    }

    #[test]
    fn test_property_tables() {
        let standard = property_tax(false).unwrap();
        assert_relative_eq!(standard.tax(150_000_000.0), 195_000.0, epsilon = 1e-6);
        assert_relative_eq!(standard.tax(300_000_000.0), 570_000.0, epsilon = 1e-6);
        let special = property_tax(true).unwrap();
        assert_relative_eq!(special.tax(300_000_000.0), 420_000.0, epsilon = 1e-6);
    }
}
