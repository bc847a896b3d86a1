//! Loan amortization schedules.
//!
//! [`AmortizationSchedule::generate`] produces one row per period under a
//! [`RepaymentMethod`]:
//!
//! - `EqualPayment`: annuity `P·r(1+r)^n / ((1+r)^n − 1)`, or `P/n` at zero rate
//! - `EqualPrincipal`: fixed `P/n` principal plus interest on the declining balance
//! - `InterestOnlyBalloon`: interest only, full principal in the final period
//!
//! A grace period (leading interest-only periods) can precede any method.
//! The final period absorbs floating-point residue so the principal
//! portions sum to the original principal and the balance ends at zero.
//!
//! # Examples
//!
//! ```
//! use calc_core::math::amortization::{AmortizationSchedule, RepaymentMethod};
//!
//! let schedule = AmortizationSchedule::generate(
//!     300_000_000.0,
//!     0.035 / 12.0,
//!     360,
//!     RepaymentMethod::EqualPayment,
//! )
//! .unwrap();
//!
//! assert_eq!(schedule.rows().len(), 360);
//! assert!((schedule.first_payment() - 1_347_134.0).abs() < 1.0);
//! assert_eq!(schedule.rows().last().unwrap().balance, 0.0);
//! ```

use std::fmt;
use std::str::FromStr;

use crate::types::validate::{ensure_non_negative, ensure_positive};
use crate::types::CalcError;

/// Repayment policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum RepaymentMethod {
    /// Equal total payment every period (원리금균등)
    #[default]
    EqualPayment,
    /// Equal principal every period (원금균등)
    EqualPrincipal,
    /// Interest only, principal at maturity (만기일시)
    InterestOnlyBalloon,
}

impl RepaymentMethod {
    /// Korean product name.
    pub fn korean_name(&self) -> &'static str {
        match self {
            RepaymentMethod::EqualPayment => "원리금균등상환",
            RepaymentMethod::EqualPrincipal => "원금균등상환",
            RepaymentMethod::InterestOnlyBalloon => "만기일시상환",
        }
    }

    /// Kebab-case identifier used on the command line.
    pub fn name(&self) -> &'static str {
        match self {
            RepaymentMethod::EqualPayment => "equal-payment",
            RepaymentMethod::EqualPrincipal => "equal-principal",
            RepaymentMethod::InterestOnlyBalloon => "balloon",
        }
    }
}

impl fmt::Display for RepaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.korean_name())
    }
}

impl FromStr for RepaymentMethod {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "equal-payment" | "annuity" | "원리금균등" | "원리금균등상환" => {
                Ok(RepaymentMethod::EqualPayment)
            }
            "equal-principal" | "원금균등" | "원금균등상환" => Ok(RepaymentMethod::EqualPrincipal),
            "balloon" | "bullet" | "interest-only" | "만기일시" | "만기일시상환" => {
                Ok(RepaymentMethod::InterestOnlyBalloon)
            }
            other => Err(CalcError::invalid(
                "repayment method",
                format!("'{}' (expected equal-payment, equal-principal or balloon)", other),
            )),
        }
    }
}

/// One scheduled period.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AmortizationRow {
    /// 1-based period number
    pub period: u32,
    /// Total paid this period
    pub payment: f64,
    /// Principal portion
    pub principal: f64,
    /// Interest portion
    pub interest: f64,
    /// Balance remaining after this period
    pub balance: f64,
}

/// Longest schedule accepted: 50 years of monthly periods.
pub const MAX_PERIODS: u32 = 600;

/// Standard annuity payment; `principal / periods` when the rate is zero.
///
/// # Errors
/// Returns [`CalcError::DomainViolation`] when `(1 + r)^n` is not a
/// finite number.
///
/// # Examples
///
/// ```
/// use calc_core::math::amortization::annuity_payment;
///
/// assert_eq!(annuity_payment(1_200.0, 0.0, 12).unwrap(), 100.0);
/// assert!((annuity_payment(10_000.0, 0.01, 12).unwrap() - 888.49).abs() < 0.01);
/// assert!(annuity_payment(1.0, 0.5, 100_000).is_err());
/// ```
pub fn annuity_payment(
    principal: f64,
    periodic_rate: f64,
    periods: u32,
) -> Result<f64, CalcError> {
    if periods == 0 {
        return Ok(principal);
    }
    if periodic_rate == 0.0 {
        return Ok(principal / periods as f64);
    }
    let exponent = i32::try_from(periods).unwrap_or(i32::MAX);
    let growth = (1.0 + periodic_rate).powi(exponent);
    let payment = principal * periodic_rate * growth / (growth - 1.0);
    if !growth.is_finite() || !payment.is_finite() {
        return Err(CalcError::domain(format!(
            "annuity factor overflows at {} periods and a {} periodic rate",
            periods, periodic_rate
        )));
    }
    Ok(payment)
}

/// Per-period schedule for a loan.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AmortizationSchedule {
    method: RepaymentMethod,
    principal: f64,
    periodic_rate: f64,
    grace_periods: u32,
    rows: Vec<AmortizationRow>,
}

impl AmortizationSchedule {
    /// Generates a schedule without a grace period.
    ///
    /// # Errors
    /// `principal` must be positive, `periodic_rate` non-negative and
    /// `periods` between 1 and [`MAX_PERIODS`].
    pub fn generate(
        principal: f64,
        periodic_rate: f64,
        periods: u32,
        method: RepaymentMethod,
    ) -> Result<Self, CalcError> {
        Self::generate_with_grace(principal, periodic_rate, periods, 0, method)
    }

    /// Generates a schedule whose first `grace_periods` periods pay
    /// interest only; `method` applies to the remaining periods.
    ///
    /// # Errors
    /// As [`generate`](Self::generate), and `grace_periods` must be less
    /// than `periods`.
    pub fn generate_with_grace(
        principal: f64,
        periodic_rate: f64,
        periods: u32,
        grace_periods: u32,
        method: RepaymentMethod,
    ) -> Result<Self, CalcError> {
        ensure_positive("principal", principal)?;
        ensure_non_negative("interest rate", periodic_rate)?;
        if periods == 0 {
            return Err(CalcError::NonPositive {
                field: "term",
                value: 0.0,
            });
        }
        if periods > MAX_PERIODS {
            return Err(CalcError::invalid(
                "term",
                format!("{} periods exceeds the maximum of {}", periods, MAX_PERIODS),
            ));
        }
        if grace_periods >= periods {
            return Err(CalcError::domain(format!(
                "grace period ({} periods) must be shorter than the term ({} periods)",
                grace_periods, periods
            )));
        }

        let mut rows = Vec::with_capacity(periods as usize);
        let mut balance = principal;

        for period in 1..=grace_periods {
            let interest = balance * periodic_rate;
            rows.push(AmortizationRow {
                period,
                payment: interest,
                principal: 0.0,
                interest,
                balance,
            });
        }

        let amortizing = periods - grace_periods;
        let level_payment = match method {
            RepaymentMethod::EqualPayment => {
                annuity_payment(principal, periodic_rate, amortizing)?
            }
            _ => 0.0,
        };
        let level_principal = principal / amortizing as f64;

        for k in 1..=amortizing {
            let is_last = k == amortizing;
            let interest = balance * periodic_rate;
            let scheduled = match method {
                RepaymentMethod::EqualPayment => level_payment - interest,
                RepaymentMethod::EqualPrincipal => level_principal,
                RepaymentMethod::InterestOnlyBalloon => 0.0,
            };
            let principal_part = if is_last {
                balance
            } else {
                scheduled.clamp(0.0, balance)
            };
            balance = if is_last { 0.0 } else { (balance - principal_part).max(0.0) };

            rows.push(AmortizationRow {
                period: grace_periods + k,
                payment: principal_part + interest,
                principal: principal_part,
                interest,
                balance,
            });
        }

        Ok(Self {
            method,
            principal,
            periodic_rate,
            grace_periods,
            rows,
        })
    }

    /// Repayment method used.
    pub fn method(&self) -> RepaymentMethod {
        self.method
    }

    /// Original principal.
    pub fn principal(&self) -> f64 {
        self.principal
    }

    /// Periodic (e.g. monthly) rate.
    pub fn periodic_rate(&self) -> f64 {
        self.periodic_rate
    }

    /// Number of leading interest-only periods.
    pub fn grace_periods(&self) -> u32 {
        self.grace_periods
    }

    /// Scheduled rows in period order.
    pub fn rows(&self) -> &[AmortizationRow] {
        &self.rows
    }

    /// Sum of all payments.
    pub fn total_payment(&self) -> f64 {
        self.rows.iter().map(|r| r.payment).sum()
    }

    /// Sum of all interest portions.
    pub fn total_interest(&self) -> f64 {
        self.rows.iter().map(|r| r.interest).sum()
    }

    /// Sum of all principal portions (equals the original principal).
    pub fn total_principal(&self) -> f64 {
        self.rows.iter().map(|r| r.principal).sum()
    }

    /// Payment of the first period.
    pub fn first_payment(&self) -> f64 {
        self.rows.first().map_or(0.0, |r| r.payment)
    }

    /// Payment of the first amortizing period (after any grace period).
    pub fn first_amortizing_payment(&self) -> f64 {
        self.rows
            .get(self.grace_periods as usize)
            .map_or(0.0, |r| r.payment)
    }

    /// Payment of the final period.
    pub fn last_payment(&self) -> f64 {
        self.rows.last().map_or(0.0, |r| r.payment)
    }

    /// Largest single payment.
    pub fn max_payment(&self) -> f64 {
        self.rows.iter().map(|r| r.payment).fold(0.0, f64::max)
    }
}
