//! Interim payment interest (중도금 이자).
//!
//! Pre-sale apartments are paid in installments financed by an interim
//! loan whose interest accrues from each installment date until the
//! move-in date. Each installment accrues simple daily interest
//! `amount × rate × days / 365`; installments dated on or after move-in
//! accrue nothing.

use calc_core::math::interest::{accrual_days, simple_interest};
use calc_core::traits::Calculate;
use calc_core::types::money::floor_to;
use calc_core::types::validate::{ensure_percent, ensure_positive};
use calc_core::types::{CalcError, Date, DayCount};

/// One interim installment.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Installment {
    /// Label such as "1차"
    pub label: String,
    /// Payment date
    pub date: Date,
    /// Amount paid (KRW)
    pub amount: f64,
}

impl Installment {
    /// Creates an installment.
    pub fn new(label: impl Into<String>, date: Date, amount: f64) -> Self {
        Self {
            label: label.into(),
            date,
            amount,
        }
    }
}

/// Installments, move-in date and loan rate.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InterimInterestInput {
    /// Installments in any order
    pub installments: Vec<Installment>,
    /// Move-in (balance payment) date
    pub move_in_date: Date,
    /// Annual interest rate in percent
    pub annual_rate_percent: f64,
    /// Day-count basis
    pub day_count: DayCount,
}

/// Interest accrued by one installment.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InstallmentInterest {
    /// Installment label
    pub label: String,
    /// Payment date
    pub date: Date,
    /// Amount paid
    pub amount: f64,
    /// Days until move-in (0 if on or after)
    pub days: i64,
    /// Interest accrued, truncated to whole won
    pub interest: f64,
}

/// Per-installment interest and totals.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InterimInterestResult {
    /// Rows sorted by date
    pub rows: Vec<InstallmentInterest>,
    /// Sum of installment amounts
    pub total_principal: f64,
    /// Sum of interest
    pub total_interest: f64,
}

impl Calculate for InterimInterestInput {
    type Output = InterimInterestResult;

    fn calculate(&self) -> Result<InterimInterestResult, CalcError> {
        if self.installments.is_empty() {
            return Err(CalcError::MissingField("installments"));
        }
        let rate = ensure_percent("interest rate", self.annual_rate_percent, 100.0)?;

        let mut rows = self
            .installments
            .iter()
            .map(|inst| {
                let amount = ensure_positive("installment amount", inst.amount)?;
                let interest =
                    simple_interest(amount, rate, inst.date, self.move_in_date, self.day_count);
                Ok(InstallmentInterest {
                    label: inst.label.clone(),
                    date: inst.date,
                    amount,
                    days: accrual_days(inst.date, self.move_in_date),
                    interest: floor_to(interest, 1.0),
                })
            })
            .collect::<Result<Vec<_>, CalcError>>()?;
        rows.sort_by_key(|row| row.date);

        Ok(InterimInterestResult {
            total_principal: rows.iter().map(|r| r.amount).sum(),
            total_interest: rows.iter().map(|r| r.interest).sum(),
            rows,
        })
    }
}
