//! Yearly depreciation schedules.
//!
//! Supported methods:
//! - Straight-line: `(cost − salvage) / life` every year
//! - Double-declining balance: `2 / life` applied to the current book value
//! - Sum-of-years digits: weight `(life − year + 1) / (life(life+1)/2)` on
//!   the depreciable base
//! - Fixed rate (정률법): `1 − (salvage / cost)^(1/life)` applied to the
//!   current book value
//!
//! Every method depreciates exactly `cost − salvage` in total and never
//! takes the book value below salvage. The declining methods depreciate
//! the whole remainder in the final year.

use std::fmt;
use std::str::FromStr;

use crate::types::validate::{ensure_non_negative, ensure_positive};
use crate::types::CalcError;

/// Depreciation method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum DepreciationMethod {
    /// 정액법
    #[default]
    StraightLine,
    /// 이중체감법
    DoubleDecliningBalance,
    /// 연수합계법
    SumOfYearsDigits,
    /// 정률법
    FixedRate,
}

impl DepreciationMethod {
    /// All methods in display order.
    pub const ALL: [DepreciationMethod; 4] = [
        DepreciationMethod::StraightLine,
        DepreciationMethod::DoubleDecliningBalance,
        DepreciationMethod::SumOfYearsDigits,
        DepreciationMethod::FixedRate,
    ];

    /// Korean accounting name.
    pub fn korean_name(&self) -> &'static str {
        match self {
            DepreciationMethod::StraightLine => "정액법",
            DepreciationMethod::DoubleDecliningBalance => "이중체감법",
            DepreciationMethod::SumOfYearsDigits => "연수합계법",
            DepreciationMethod::FixedRate => "정률법",
        }
    }
}

impl fmt::Display for DepreciationMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.korean_name())
    }
}

impl FromStr for DepreciationMethod {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "straight-line" | "straight" | "sl" | "정액법" => Ok(DepreciationMethod::StraightLine),
            "double-declining" | "ddb" | "declining" | "이중체감법" => {
                Ok(DepreciationMethod::DoubleDecliningBalance)
            }
            "sum-of-years" | "syd" | "연수합계법" => Ok(DepreciationMethod::SumOfYearsDigits),
            "fixed-rate" | "fixed" | "정률법" => Ok(DepreciationMethod::FixedRate),
            other => Err(CalcError::invalid(
                "depreciation method",
                format!(
                    "'{}' (expected straight-line, double-declining, sum-of-years or fixed-rate)",
                    other
                ),
            )),
        }
    }
}

/// One year of the schedule.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DepreciationRow {
    /// 1-based year index
    pub year: u32,
    /// Expense recognised this year
    pub depreciation: f64,
    /// Accumulated depreciation at year end
    pub accumulated: f64,
    /// Book value at year end
    pub book_value: f64,
}

/// Longest useful life accepted, in years.
pub const MAX_USEFUL_LIFE_YEARS: u32 = 100;

/// Full schedule over the useful life.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DepreciationSchedule {
    method: DepreciationMethod,
    cost: f64,
    salvage: f64,
    life_years: u32,
    rate: Option<f64>,
    rows: Vec<DepreciationRow>,
}

impl DepreciationSchedule {
    /// Builds the schedule.
    ///
    /// # Errors
    /// - `cost` must be positive and strictly greater than `salvage`
    /// - `salvage` must not be negative
    /// - `life_years` must be at least 1
    /// - [`DepreciationMethod::FixedRate`] additionally needs `salvage > 0`
    ///
    /// # Examples
    ///
    /// ```
    /// use calc_core::math::depreciation::{DepreciationMethod, DepreciationSchedule};
    ///
    /// let s = DepreciationSchedule::generate(
    ///     10_000_000.0,
    ///     1_000_000.0,
    ///     5,
    ///     DepreciationMethod::SumOfYearsDigits,
    /// )
    /// .unwrap();
    ///
    /// assert!((s.rows()[0].depreciation - 3_000_000.0).abs() < 1e-6);
    /// assert!((s.total_depreciation() - 9_000_000.0).abs() < 1e-6);
    /// ```
    pub fn generate(
        cost: f64,
        salvage: f64,
        life_years: u32,
        method: DepreciationMethod,
    ) -> Result<Self, CalcError> {
        ensure_positive("acquisition cost", cost)?;
        ensure_non_negative("salvage value", salvage)?;
        if cost <= salvage {
            return Err(CalcError::domain(format!(
                "acquisition cost ({}) must be greater than salvage value ({})",
                cost, salvage
            )));
        }
        if life_years == 0 {
            return Err(CalcError::NonPositive {
                field: "useful life",
                value: 0.0,
            });
        }
        if life_years > MAX_USEFUL_LIFE_YEARS {
            return Err(CalcError::invalid(
                "useful life",
                format!(
                    "{} years exceeds the maximum of {} years",
                    life_years, MAX_USEFUL_LIFE_YEARS
                ),
            ));
        }

        let life = life_years as f64;
        let base = cost - salvage;
        let rate = match method {
            DepreciationMethod::StraightLine => None,
            DepreciationMethod::DoubleDecliningBalance => Some((2.0 / life).min(1.0)),
            DepreciationMethod::SumOfYearsDigits => None,
            DepreciationMethod::FixedRate => {
                if salvage <= 0.0 {
                    return Err(CalcError::domain(
                        "fixed-rate depreciation requires a salvage value greater than 0",
                    ));
                }
                Some(1.0 - (salvage / cost).powf(1.0 / life))
            }
        };
        let digits_total = life * (life + 1.0) / 2.0;

        let mut rows = Vec::with_capacity(life_years as usize);
        let mut accumulated = 0.0;
        let mut book = cost;

        for year in 1..=life_years {
            let remaining = (book - salvage).max(0.0);
            let expense = if year == life_years {
                remaining
            } else {
                let scheduled = match method {
                    DepreciationMethod::StraightLine => base / life,
                    DepreciationMethod::SumOfYearsDigits => {
                        base * (life - year as f64 + 1.0) / digits_total
                    }
                    DepreciationMethod::DoubleDecliningBalance | DepreciationMethod::FixedRate => {
                        book * rate.unwrap_or(0.0)
                    }
                };
                scheduled.clamp(0.0, remaining)
            };

            accumulated += expense;
            book = if year == life_years { salvage } else { cost - accumulated };

            rows.push(DepreciationRow {
                year,
                depreciation: expense,
                accumulated,
                book_value: book.max(salvage),
            });
        }

        Ok(Self {
            method,
            cost,
            salvage,
            life_years,
            rate,
            rows,
        })
    }

    /// Method used.
    pub fn method(&self) -> DepreciationMethod {
        self.method
    }

    /// Acquisition cost.
    pub fn cost(&self) -> f64 {
        self.cost
    }

    /// Salvage value.
    pub fn salvage(&self) -> f64 {
        self.salvage
    }

    /// Useful life in years.
    pub fn life_years(&self) -> u32 {
        self.life_years
    }

    /// Declining rate for DDB and fixed-rate; `None` for the base-weighted methods.
    pub fn rate(&self) -> Option<f64> {
        self.rate
    }

    /// Rows in year order.
    pub fn rows(&self) -> &[DepreciationRow] {
        &self.rows
    }

    /// Sum of yearly depreciation (equals `cost − salvage`).
    pub fn total_depreciation(&self) -> f64 {
        self.rows.iter().map(|r| r.depreciation).sum()
    }
}
