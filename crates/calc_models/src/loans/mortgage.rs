//! Mortgage (주택담보대출) repayment.
//!
//! # Examples
//!
//! ```
//! use calc_core::math::RepaymentMethod;
//! use calc_core::traits::Calculate;
//! use calc_models::loans::MortgageInput;
//!
//! let input = MortgageInput::new(300_000_000.0, 3.5, 30, RepaymentMethod::EqualPayment);
//! let result = input.calculate().unwrap();
//!
//! assert_eq!(result.months, 360);
//! assert!((result.monthly_payment - 1_347_134.0).abs() < 1.0);
//! ```

use calc_core::math::{AmortizationSchedule, RepaymentMethod, MAX_PERIODS};
use calc_core::traits::Calculate;
use calc_core::types::validate::ensure_positive;
use calc_core::types::CalcError;

use super::monthly_rate;

/// Longest mortgage term in years.
pub const MAX_TERM_YEARS: u32 = MAX_PERIODS / 12;

/// Loan amount, rate, term and repayment method.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MortgageInput {
    /// Loan principal (KRW)
    pub principal: f64,
    /// Annual interest rate in percent
    pub annual_rate_percent: f64,
    /// Term in years
    pub term_years: u32,
    /// Repayment method
    pub method: RepaymentMethod,
    /// Leading interest-only years (거치기간)
    pub grace_years: u32,
}

impl MortgageInput {
    /// Creates an input without a grace period.
    pub fn new(
        principal: f64,
        annual_rate_percent: f64,
        term_years: u32,
        method: RepaymentMethod,
    ) -> Self {
        Self {
            principal,
            annual_rate_percent,
            term_years,
            method,
            grace_years: 0,
        }
    }

    /// Sets the grace period.
    pub fn with_grace_years(mut self, grace_years: u32) -> Self {
        self.grace_years = grace_years;
        self
    }
}

/// Monthly schedule and totals.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MortgageResult {
    /// Number of monthly payments
    pub months: u32,
    /// Monthly rate as a ratio
    pub monthly_rate: f64,
    /// Payment of the first amortizing month
    pub monthly_payment: f64,
    /// Monthly payment during the grace period (0 without one)
    pub grace_payment: f64,
    /// Largest monthly payment
    pub max_payment: f64,
    /// Sum of all payments
    pub total_payment: f64,
    /// Sum of all interest
    pub total_interest: f64,
    /// Full schedule
    pub schedule: AmortizationSchedule,
}

impl Calculate for MortgageInput {
    type Output = MortgageResult;

    fn calculate(&self) -> Result<MortgageResult, CalcError> {
        ensure_positive("principal", self.principal)?;
        let rate = monthly_rate(self.annual_rate_percent)?;
        if self.term_years == 0 {
            return Err(CalcError::NonPositive {
                field: "term",
                value: 0.0,
            });
        }
        if self.term_years > MAX_TERM_YEARS {
            return Err(CalcError::invalid(
                "term",
                format!(
                    "{} years exceeds the maximum of {} years",
                    self.term_years, MAX_TERM_YEARS
                ),
            ));
        }
        if self.grace_years >= self.term_years {
            return Err(CalcError::domain(format!(
                "grace period ({} years) must be shorter than the term ({} years)",
                self.grace_years, self.term_years
            )));
        }

        let months = self.term_years * 12;
        let grace_months = self.grace_years * 12;
        let schedule = AmortizationSchedule::generate_with_grace(
            self.principal,
            rate,
            months,
            grace_months,
            self.method,
        )?;

        let grace_payment = if self.grace_years > 0 {
            schedule.first_payment()
        } else {
            0.0
        };

        Ok(MortgageResult {
            months,
            monthly_rate: rate,
            monthly_payment: schedule.first_amortizing_payment(),
            grace_payment,
            max_payment: schedule.max_payment(),
            total_payment: schedule.total_payment(),
            total_interest: schedule.total_interest(),
            schedule,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    #[test]
    fn test_reference_mortgage() {
        let result = MortgageInput::new(300_000_000.0, 3.5, 30, RepaymentMethod::EqualPayment)
            .calculate()
            .unwrap();
        assert_relative_eq!(result.monthly_rate, 0.035 / 12.0);
        assert_abs_diff_eq!(result.monthly_payment, 1_347_134.0, epsilon = 1.0);
        assert_abs_diff_eq!(
            result.total_interest,
            result.monthly_payment * 360.0 - 300_000_000.0,
            epsilon = 1.0
        );
        assert_eq!(result.grace_payment, 0.0);
    }

    #[test]
    fn test_grace_years() {
        let result = MortgageInput::new(120_000_000.0, 4.8, 10, RepaymentMethod::EqualPrincipal)
            .with_grace_years(2)
            .calculate()
            .unwrap();
        assert_relative_eq!(result.grace_payment, 480_000.0, epsilon = 1e-6);
        // 96 amortizing months
        assert_relative_eq!(
            result.monthly_payment,
            120_000_000.0 / 96.0 + 480_000.0,
            epsilon = 1e-6
        );
        assert_eq!(result.schedule.rows().len(), 120);
    }

    #[test]
    fn test_validation() {
        let base = MortgageInput::new(100_000_000.0, 4.0, 20, RepaymentMethod::EqualPayment);
        assert!(MortgageInput { principal: 0.0, ..base }.calculate().is_err());
        assert!(MortgageInput { term_years: 0, ..base }.calculate().is_err());
        assert!(MortgageInput { annual_rate_percent: -1.0, ..base }.calculate().is_err());
        assert!(matches!(
            base.with_grace_years(20).calculate(),
            Err(CalcError::DomainViolation(_))
        ));
    }

    #[test]
    fn test_term_limit() {
        let method = RepaymentMethod::EqualPayment;
        assert!(matches!(
            MortgageInput::new(1e8, 3.0, 400_000_000, method).calculate(),
            Err(CalcError::InvalidInput { field: "term", .. })
        ));
        assert!(MortgageInput::new(1e8, 3.0, u32::MAX, method).calculate().is_err());
        assert!(MortgageInput::new(1e8, 3.0, MAX_TERM_YEARS + 1, method)
            .calculate()
            .is_err());

        let longest = MortgageInput::new(1e8, 3.0, MAX_TERM_YEARS, method)
            .with_grace_years(MAX_TERM_YEARS - 1)
            .calculate()
            .unwrap();
        assert_eq!(longest.months, 600);
        assert!(longest.monthly_payment.is_finite());
        assert!(longest.total_interest.is_finite());
        assert!(longest.schedule.rows().iter().all(|r| r.payment.is_finite()));
    }
}
