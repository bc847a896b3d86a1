//! Loan calculators.
//!
//! - [`mortgage`]: home loan schedule with an optional grace period
//! - [`car_loan`]: vehicle financing including acquisition tax
//! - [`interim_interest`]: interest on pre-sale interim installments

pub mod car_loan;
pub mod interim_interest;
pub mod mortgage;

pub use car_loan::{CarLoanInput, CarLoanResult, MAX_TERM_MONTHS};
pub use interim_interest::{Installment, InterimInterestInput, InterimInterestResult};
pub use mortgage::{MortgageInput, MortgageResult, MAX_TERM_YEARS};

use calc_core::types::validate::ensure_percent;
use calc_core::types::CalcError;

/// Highest annual rate accepted by the loan calculators (percent).
pub const MAX_ANNUAL_RATE_PERCENT: f64 = 100.0;

/// Validates an annual percentage and returns the monthly rate as a ratio.
pub(crate) fn monthly_rate(annual_rate_percent: f64) -> Result<f64, CalcError> {
    Ok(ensure_percent("interest rate", annual_rate_percent, MAX_ANNUAL_RATE_PERCENT)? / 12.0)
}
