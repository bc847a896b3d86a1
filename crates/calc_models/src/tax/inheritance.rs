//! Inheritance tax (상속세).
//!
//! Tax base = estate − debts − funeral deduction − lump-sum deduction −
//! spouse deduction. Funeral expenses are deductible between 5M and 10M
//! regardless of the actual amount; the lump-sum deduction is 500M; a
//! surviving spouse deducts the amount actually inherited, at least 500M
//! and at most 3B. The estate rate table applies to the base and a 3%
//! credit is given for filing on time.

use calc_core::math::BracketEvaluation;
use calc_core::traits::Calculate;
use calc_core::types::money::floor_to;
use calc_core::types::validate::ensure_non_negative;
use calc_core::types::CalcError;

use super::{tables, FILING_CREDIT_RATE};

/// Minimum funeral expense deduction.
pub const FUNERAL_DEDUCTION_MIN: f64 = 5_000_000.0;
/// Maximum funeral expense deduction.
pub const FUNERAL_DEDUCTION_MAX: f64 = 10_000_000.0;
/// Lump-sum deduction (일괄공제).
pub const LUMP_SUM_DEDUCTION: f64 = 500_000_000.0;
/// Minimum spouse deduction.
pub const SPOUSE_DEDUCTION_MIN: f64 = 500_000_000.0;
/// Maximum spouse deduction.
pub const SPOUSE_DEDUCTION_MAX: f64 = 3_000_000_000.0;

/// Estate, liabilities and family situation.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InheritanceTaxInput {
    /// Gross estate value
    pub estate_value: f64,
    /// Debts of the deceased
    pub debts: f64,
    /// Actual funeral expenses
    pub funeral_expenses: f64,
    /// Whether a spouse survives
    pub has_spouse: bool,
    /// Amount the spouse actually inherits
    pub spouse_share: f64,
    /// Whether the return is filed on time
    pub filed_on_time: bool,
}

impl InheritanceTaxInput {
    /// Estate without debts or spouse, filed on time.
    pub fn new(estate_value: f64) -> Self {
        Self {
            estate_value,
            debts: 0.0,
            funeral_expenses: 0.0,
            has_spouse: false,
            spouse_share: 0.0,
            filed_on_time: true,
        }
    }
}

/// Deductions and tax.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InheritanceTaxResult {
    /// Estate less debts and funeral deduction
    pub net_estate: f64,
    /// Funeral deduction applied
    pub funeral_deduction: f64,
    /// Lump-sum deduction applied
    pub lump_sum_deduction: f64,
    /// Spouse deduction applied
    pub spouse_deduction: f64,
    /// Sum of lump-sum and spouse deductions
    pub total_deductions: f64,
    /// Tax base (과세표준)
    pub tax_base: f64,
    /// Tax from the rate table (산출세액)
    pub calculated_tax: f64,
    /// On-time filing credit
    pub filing_credit: f64,
    /// Tax payable
    pub payable_tax: f64,
    /// Per-bracket breakdown
    pub breakdown: BracketEvaluation,
}

impl Calculate for InheritanceTaxInput {
    type Output = InheritanceTaxResult;

    fn calculate(&self) -> Result<InheritanceTaxResult, CalcError> {
        let estate = ensure_non_negative("estate value", self.estate_value)?;
        let debts = ensure_non_negative("debts", self.debts)?;
        let funeral = ensure_non_negative("funeral expenses", self.funeral_expenses)?;
        let spouse_share = ensure_non_negative("spouse share", self.spouse_share)?;

        let funeral_deduction = funeral.clamp(FUNERAL_DEDUCTION_MIN, FUNERAL_DEDUCTION_MAX);
        let net_estate = (estate - debts - funeral_deduction).max(0.0);

        let spouse_deduction = if self.has_spouse {
            spouse_share.clamp(SPOUSE_DEDUCTION_MIN, SPOUSE_DEDUCTION_MAX)
        } else {
            0.0
        };
        let total_deductions = LUMP_SUM_DEDUCTION + spouse_deduction;
        let tax_base = floor_to((net_estate - total_deductions).max(0.0), 1_000.0);

        let breakdown = tables::estate_tax()?.evaluate(tax_base);
        let calculated_tax = floor_to(breakdown.total, 1.0);
        let filing_credit = if self.filed_on_time {
            floor_to(calculated_tax * FILING_CREDIT_RATE, 1.0)
        } else {
            0.0
        };

        Ok(InheritanceTaxResult {
            net_estate,
            funeral_deduction,
            lump_sum_deduction: LUMP_SUM_DEDUCTION,
            spouse_deduction,
            total_deductions,
            tax_base,
            calculated_tax,
            filing_credit,
            payable_tax: calculated_tax - filing_credit,
            breakdown,
        })
    }
}
