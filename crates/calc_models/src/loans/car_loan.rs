//! Car loan (자동차 할부).
//!
//! The loan is the vehicle price less the down payment. Passenger-car
//! acquisition tax (7% of the price, truncated to 10 won) is either paid
//! up front or added to the financed amount.

use calc_core::math::{AmortizationSchedule, RepaymentMethod};
use calc_core::traits::Calculate;
use calc_core::types::money::floor_to;
use calc_core::types::validate::{ensure_non_negative, ensure_positive};
use calc_core::types::CalcError;

use super::monthly_rate;

/// Acquisition tax rate for passenger cars.
pub const ACQUISITION_TAX_RATE: f64 = 0.07;

/// Longest installment plan in months.
pub const MAX_TERM_MONTHS: u32 = 120;

/// Vehicle, down payment and financing terms.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CarLoanInput {
    /// Vehicle price (KRW)
    pub vehicle_price: f64,
    /// Cash paid up front toward the price
    pub down_payment: f64,
    /// Whether acquisition tax is computed at all
    pub include_acquisition_tax: bool,
    /// Whether acquisition tax is financed rather than paid up front
    pub finance_acquisition_tax: bool,
    /// Annual interest rate in percent
    pub annual_rate_percent: f64,
    /// Term in months
    pub term_months: u32,
    /// Repayment method
    pub method: RepaymentMethod,
}

impl CarLoanInput {
    /// Creates an input with acquisition tax computed and paid up front.
    pub fn new(vehicle_price: f64, down_payment: f64, annual_rate_percent: f64, term_months: u32) -> Self {
        Self {
            vehicle_price,
            down_payment,
            include_acquisition_tax: true,
            finance_acquisition_tax: false,
            annual_rate_percent,
            term_months,
            method: RepaymentMethod::EqualPayment,
        }
    }
}

/// Financing breakdown and schedule.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CarLoanResult {
    /// Acquisition tax (0 when excluded)
    pub acquisition_tax: f64,
    /// Financed amount
    pub loan_amount: f64,
    /// Cash due at purchase (down payment, plus tax if not financed)
    pub upfront_cash: f64,
    /// First monthly payment
    pub monthly_payment: f64,
    /// Sum of all interest
    pub total_interest: f64,
    /// Price + tax + interest
    pub total_cost: f64,
    /// Monthly schedule
    pub schedule: AmortizationSchedule,
}

impl Calculate for CarLoanInput {
    type Output = CarLoanResult;

    fn calculate(&self) -> Result<CarLoanResult, CalcError> {
        let price = ensure_positive("vehicle price", self.vehicle_price)?;
        let down = ensure_non_negative("down payment", self.down_payment)?;
        if down >= price {
            return Err(CalcError::domain(format!(
                "down payment ({}) must be less than the vehicle price ({})",
                down, price
            )));
        }
        let rate = monthly_rate(self.annual_rate_percent)?;
        if self.term_months == 0 {
            return Err(CalcError::NonPositive {
                field: "term",
                value: 0.0,
            });
        }
        if self.term_months > MAX_TERM_MONTHS {
            return Err(CalcError::invalid(
                "term",
                format!(
                    "{} months exceeds the maximum of {} months",
                    self.term_months, MAX_TERM_MONTHS
                ),
            ));
        }

        let acquisition_tax = if self.include_acquisition_tax {
            floor_to(price * ACQUISITION_TAX_RATE, 10.0)
        } else {
            0.0
        };
        let financed_tax = if self.finance_acquisition_tax {
            acquisition_tax
        } else {
            0.0
        };
        let loan_amount = price - down + financed_tax;
        let upfront_cash = down + (acquisition_tax - financed_tax);

        let schedule =
            AmortizationSchedule::generate(loan_amount, rate, self.term_months, self.method)?;
        let total_interest = schedule.total_interest();

        Ok(CarLoanResult {
            acquisition_tax,
            loan_amount,
            upfront_cash,
            monthly_payment: schedule.first_payment(),
            total_interest,
            total_cost: price + acquisition_tax + total_interest,
            schedule,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_tax_paid_up_front() {
        let result = CarLoanInput::new(35_000_000.0, 5_000_000.0, 5.0, 60)
            .calculate()
            .unwrap();
        assert_eq!(result.acquisition_tax, 2_450_000.0);
        assert_eq!(result.loan_amount, 30_000_000.0);
        assert_eq!(result.upfront_cash, 7_450_000.0);
        assert_relative_eq!(result.monthly_payment, 566_137.0, epsilon = 1.0);
    }

    #[test]
    fn test_tax_financed() {
        let mut input = CarLoanInput::new(35_000_000.0, 5_000_000.0, 0.0, 48);
        input.finance_acquisition_tax = true;
        let result = input.calculate().unwrap();
        assert_eq!(result.loan_amount, 32_450_000.0);
        assert_eq!(result.upfront_cash, 5_000_000.0);
        assert_eq!(result.total_interest, 0.0);
        assert_relative_eq!(result.total_cost, 37_450_000.0);
    }

    #[test]
    fn test_without_tax() {
        let mut input = CarLoanInput::new(20_000_000.0, 0.0, 4.0, 36);
        input.include_acquisition_tax = false;
        let result = input.calculate().unwrap();
        assert_eq!(result.acquisition_tax, 0.0);
        assert_eq!(result.loan_amount, 20_000_000.0);
    }

    #[test]
    fn test_down_payment_must_be_below_price() {
        let err = CarLoanInput::new(20_000_000.0, 20_000_000.0, 4.0, 36)
            .calculate()
            .unwrap_err();
        assert!(matches!(err, CalcError::DomainViolation(_)));
        assert!(CarLoanInput::new(20_000_000.0, 1.0, 4.0, 0).calculate().is_err());
    }

    #[test]
    fn test_term_limit() {
        assert!(MAX_TERM_MONTHS <= calc_core::math::MAX_PERIODS);
        let err = CarLoanInput::new(30_000_000.0, 0.0, 5.0, 200_000)
            .calculate()
            .unwrap_err();
        assert!(matches!(err, CalcError::InvalidInput { field: "term", .. }));
        assert!(CarLoanInput::new(30_000_000.0, 0.0, 5.0, MAX_TERM_MONTHS + 1)
            .calculate()
            .is_err());

        let longest = CarLoanInput::new(30_000_000.0, 0.0, 5.0, MAX_TERM_MONTHS)
            .calculate()
            .unwrap();
        assert_eq!(longest.schedule.rows().len(), 120);
        assert!(longest.schedule.rows().iter().all(|r| r.payment.is_finite()));
    }
}
