//! Calculation engines shared by the calculators.
//!
//! - `brackets`: progressive tax bracket evaluation with per-bracket breakdown
//! - `amortization`: loan repayment schedules (annuity, equal principal, balloon)
//! - `depreciation`: yearly depreciation schedules
//! - `interest`: simple day-count interest

pub mod amortization;
pub mod brackets;
pub mod depreciation;
pub mod interest;

pub use amortization::{AmortizationRow, AmortizationSchedule, RepaymentMethod, MAX_PERIODS};
pub use brackets::{BracketEvaluation, BracketLine, BracketTable, TaxBracket};
pub use depreciation::{
    DepreciationMethod, DepreciationRow, DepreciationSchedule, MAX_USEFUL_LIFE_YEARS,
};
pub use interest::simple_interest;
