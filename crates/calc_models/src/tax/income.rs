//! Income tax (종합소득세 / 근로소득세).
//!
//! Two bases are supported:
//!
//! - [`IncomeBasis::TaxableIncome`]: the amount is already the tax base
//!   (과세표준) and goes straight to the rate table.
//! - [`IncomeBasis::GrossSalary`]: the amount is annual gross salary. The
//!   earned income deduction (capped at 20M), a personal deduction of
//!   1.5M per person and any extra deductions are subtracted first; the
//!   earned income tax credit and the standard credit are applied after.
//!
//! Local income tax is 10% of the determined national tax.
//!
//! # Examples
//!
//! ```
//! use calc_core::traits::Calculate;
//! use calc_models::tax::IncomeTaxInput;
//!
//! let result = IncomeTaxInput::taxable(50_000_000.0).calculate().unwrap();
//! assert_eq!(result.calculated_tax, 6_780_000.0);
//! assert_eq!(result.local_income_tax, 678_000.0);
//! ```

use calc_core::math::BracketEvaluation;
use calc_core::traits::Calculate;
use calc_core::types::money::round_won;
use calc_core::types::validate::{ensure_non_negative, ensure_positive};
use calc_core::types::CalcError;

use super::tables;

/// Personal deduction per person (기본공제).
pub const PERSONAL_DEDUCTION: f64 = 1_500_000.0;
/// Standard tax credit for salary earners (표준세액공제).
pub const STANDARD_TAX_CREDIT: f64 = 130_000.0;
/// Local income tax as a share of national income tax.
pub const LOCAL_INCOME_TAX_RATE: f64 = 0.10;

/// What the input amount represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum IncomeBasis {
    /// Tax base after all deductions
    #[default]
    TaxableIncome,
    /// Annual gross salary before deductions
    GrossSalary,
}

/// Income and deductions.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IncomeTaxInput {
    /// Amount interpreted per `basis`
    pub income: f64,
    /// Interpretation of `income`
    pub basis: IncomeBasis,
    /// Persons eligible for the personal deduction, including the taxpayer
    pub persons: u32,
    /// Further income deductions (insurance premiums, card spending, ...)
    pub other_deductions: f64,
}

impl IncomeTaxInput {
    /// Tax base given directly.
    pub fn taxable(income: f64) -> Self {
        Self {
            income,
            basis: IncomeBasis::TaxableIncome,
            persons: 1,
            other_deductions: 0.0,
        }
    }

    /// Gross salary with `persons` covered by the personal deduction.
    pub fn salary(gross_salary: f64, persons: u32) -> Self {
        Self {
            income: gross_salary,
            basis: IncomeBasis::GrossSalary,
            persons,
            other_deductions: 0.0,
        }
    }
}

/// Deductions, tax and credits.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IncomeTaxResult {
    /// Gross salary in salary mode
    pub gross_salary: Option<f64>,
    /// Earned income deduction (salary mode)
    pub earned_income_deduction: f64,
    /// Personal deduction (salary mode)
    pub personal_deduction: f64,
    /// Other deductions applied (salary mode)
    pub other_deductions: f64,
    /// Tax base
    pub taxable_income: f64,
    /// Tax from the rate table (산출세액)
    pub calculated_tax: f64,
    /// Earned income tax credit plus standard credit (salary mode)
    pub tax_credit: f64,
    /// National tax after credits (결정세액)
    pub determined_tax: f64,
    /// Local income tax
    pub local_income_tax: f64,
    /// National plus local tax
    pub total_tax: f64,
    /// Rate of the bracket the base falls in
    pub marginal_rate: f64,
    /// Total tax over gross salary (or over the base)
    pub effective_rate: f64,
    /// Per-bracket breakdown
    pub breakdown: BracketEvaluation,
}

/// Earned income tax credit (근로소득세액공제) for a calculated tax and salary.
pub fn earned_income_tax_credit(calculated_tax: f64, gross_salary: f64) -> f64 {
    let raw = if calculated_tax <= 1_300_000.0 {
        calculated_tax * 0.55
    } else {
        715_000.0 + (calculated_tax - 1_300_000.0) * 0.30
    };
    let cap = if gross_salary <= 33_000_000.0 {
        740_000.0
    } else if gross_salary <= 70_000_000.0 {
        (740_000.0 - (gross_salary - 33_000_000.0) * 0.008).max(660_000.0)
    } else if gross_salary <= 120_000_000.0 {
        (660_000.0 - (gross_salary - 70_000_000.0) * 0.5).max(500_000.0)
    } else {
        (500_000.0 - (gross_salary - 120_000_000.0) * 0.5).max(200_000.0)
    };
    raw.min(cap).min(calculated_tax)
}

impl Calculate for IncomeTaxInput {
    type Output = IncomeTaxResult;

    fn calculate(&self) -> Result<IncomeTaxResult, CalcError> {
        let income = ensure_non_negative("income", self.income)?;
        let other_deductions = ensure_non_negative("other deductions", self.other_deductions)?;

        let (gross_salary, earned, personal, other, taxable) = match self.basis {
            IncomeBasis::TaxableIncome => (None, 0.0, 0.0, 0.0, income),
            IncomeBasis::GrossSalary => {
                ensure_positive("gross salary", income)?;
                if self.persons == 0 {
                    return Err(CalcError::invalid("persons", "must include the taxpayer (at least 1)"));
                }
                let earned = round_won(
                    tables::earned_income_deduction()?
                        .tax(income)
                        .min(tables::EARNED_INCOME_DEDUCTION_CAP),
                );
                let personal = PERSONAL_DEDUCTION * self.persons as f64;
                let taxable = (income - earned - personal - other_deductions).max(0.0);
                (Some(income), earned, personal, other_deductions, taxable)
            }
        };

        let breakdown = tables::income_tax()?.evaluate(taxable);
        let calculated_tax = round_won(breakdown.total);

        let tax_credit = match gross_salary {
            Some(salary) => {
                let credit = earned_income_tax_credit(calculated_tax, salary) + STANDARD_TAX_CREDIT;
                round_won(credit.min(calculated_tax))
            }
            None => 0.0,
        };
        let determined_tax = (calculated_tax - tax_credit).max(0.0);
        let local_income_tax = round_won(determined_tax * LOCAL_INCOME_TAX_RATE);
        let total_tax = determined_tax + local_income_tax;

        let denominator = gross_salary.unwrap_or(taxable);
        let effective_rate = if denominator > 0.0 {
            total_tax / denominator
        } else {
            0.0
        };

        Ok(IncomeTaxResult {
            gross_salary,
            earned_income_deduction: earned,
            personal_deduction: personal,
            other_deductions: other,
            taxable_income: taxable,
            calculated_tax,
            tax_credit,
            determined_tax,
            local_income_tax,
            total_tax,
            marginal_rate: breakdown.marginal_rate,
            effective_rate,
            breakdown,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_reference_taxable_income() {
        let result = IncomeTaxInput::taxable(50_000_000.0).calculate().unwrap();
        assert_eq!(result.calculated_tax, 6_780_000.0);
        let taxed: Vec<f64> = result.breakdown.lines.iter().map(|l| l.taxed_amount).collect();
        assert_eq!(taxed, vec![12_000_000.0, 34_000_000.0, 4_000_000.0]);
        assert_eq!(result.marginal_rate, 0.24);
        assert_eq!(result.tax_credit, 0.0);
        assert_eq!(result.total_tax, 6_780_000.0 + 678_000.0);
    }

    #[test]
    fn test_boundary_tie_is_lower_bracket() {
        let result = IncomeTaxInput::taxable(46_000_000.0).calculate().unwrap();
        assert_eq!(result.marginal_rate, 0.15);
        assert_eq!(result.calculated_tax, 720_000.0 + 5_100_000.0);
    }

    #[test]
    fn test_salary_mode() {
        let result = IncomeTaxInput::salary(50_000_000.0, 1).calculate().unwrap();
        assert_eq!(result.earned_income_deduction, 12_250_000.0);
        assert_eq!(result.personal_deduction, 1_500_000.0);
        assert_eq!(result.taxable_income, 36_250_000.0);
        assert_eq!(result.calculated_tax, 4_357_500.0);
        // credit capped at 660,000 for a 50M salary, plus the standard 130,000
        assert_eq!(result.tax_credit, 790_000.0);
        assert_eq!(result.determined_tax, 3_567_500.0);
        assert_eq!(result.local_income_tax, 356_750.0);
        assert_relative_eq!(result.effective_rate, 3_924_250.0 / 50_000_000.0);
    }

    #[test]
    fn test_earned_income_deduction_cap() {
        let result = IncomeTaxInput::salary(500_000_000.0, 1).calculate().unwrap();
        assert_eq!(result.earned_income_deduction, 20_000_000.0);
    }

    #[test]
    fn test_low_salary_owes_nothing() {
        let result = IncomeTaxInput::salary(10_000_000.0, 2).calculate().unwrap();
        assert_eq!(result.taxable_income, 1_500_000.0);
        assert_eq!(result.calculated_tax, 90_000.0);
        assert_eq!(result.tax_credit, 90_000.0);
        assert_eq!(result.total_tax, 0.0);
        assert_eq!(result.effective_rate, 0.0);
    }

    #[test]
    fn test_credit_caps_by_salary() {
        assert_relative_eq!(earned_income_tax_credit(1_000_000.0, 30_000_000.0), 550_000.0);
        assert_relative_eq!(earned_income_tax_credit(5_000_000.0, 30_000_000.0), 740_000.0);
        assert_relative_eq!(earned_income_tax_credit(20_000_000.0, 200_000_000.0), 200_000.0);
        assert_relative_eq!(earned_income_tax_credit(100_000.0, 200_000_000.0), 55_000.0);
    }

    #[test]
    fn test_validation() {
        assert!(IncomeTaxInput::taxable(-1.0).calculate().is_err());
        assert!(IncomeTaxInput::salary(50_000_000.0, 0).calculate().is_err());
        let mut input = IncomeTaxInput::salary(50_000_000.0, 1);
        input.other_deductions = -5.0;
        assert!(input.calculate().is_err());
    }
}
