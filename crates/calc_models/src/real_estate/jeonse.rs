//! Jeonse ↔ monthly rent conversion (전월세 전환).
//!
//! With conversion rate `r` (annual):
//!
//! - jeonse → monthly: `rent = (jeonse − deposit) × r / 12`
//! - monthly → jeonse: `jeonse = deposit + rent × 12 / r`
//! - implied rate: `r = rent × 12 / (jeonse − deposit)`
//!
//! When the central-bank base rate is known, the statutory cap
//! (lower of 10% and base rate + 2%p) is reported and rates above it
//! are flagged.
//!
//! # Examples
//!
//! ```
//! use calc_core::traits::Calculate;
//! use calc_models::real_estate::{JeonseInput, JeonseMode};
//!
//! let input = JeonseInput::new(JeonseMode::ToMonthly {
//!     jeonse_deposit: 300_000_000.0,
//!     deposit: 100_000_000.0,
//!     rate_percent: 4.5,
//! });
//! let result = input.calculate().unwrap();
//! assert_eq!(result.monthly_rent, 750_000.0);
//! ```

use calc_core::traits::Calculate;
use calc_core::types::money::round_won;
use calc_core::types::validate::{ensure_non_negative, ensure_percent, ensure_positive};
use calc_core::types::CalcError;

/// Spread over the base rate allowed by the Housing Lease Protection Act.
pub const STATUTORY_SPREAD_PERCENT: f64 = 2.0;
/// Absolute statutory ceiling.
pub const STATUTORY_CEILING_PERCENT: f64 = 10.0;

/// Statutory conversion cap for a base rate, in percent.
pub fn statutory_cap_percent(base_rate_percent: f64) -> f64 {
    (base_rate_percent + STATUTORY_SPREAD_PERCENT).min(STATUTORY_CEILING_PERCENT)
}

/// Direction of the conversion.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum JeonseMode {
    /// Jeonse deposit → monthly rent for a smaller deposit
    ToMonthly {
        /// Full jeonse deposit
        jeonse_deposit: f64,
        /// Deposit kept under the monthly lease
        deposit: f64,
        /// Annual conversion rate in percent
        rate_percent: f64,
    },
    /// Deposit + monthly rent → equivalent jeonse deposit
    ToJeonse {
        /// Monthly lease deposit
        deposit: f64,
        /// Monthly rent
        monthly_rent: f64,
        /// Annual conversion rate in percent
        rate_percent: f64,
    },
    /// Conversion rate implied by both leases
    ImpliedRate {
        /// Full jeonse deposit
        jeonse_deposit: f64,
        /// Monthly lease deposit
        deposit: f64,
        /// Monthly rent
        monthly_rent: f64,
    },
}

/// Conversion mode and optional base rate.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct JeonseInput {
    /// What to solve for
    pub mode: JeonseMode,
    /// Central-bank base rate in percent, for the statutory cap
    pub base_rate_percent: Option<f64>,
}

impl JeonseInput {
    /// Creates an input without a base rate.
    pub fn new(mode: JeonseMode) -> Self {
        Self {
            mode,
            base_rate_percent: None,
        }
    }

    /// Sets the base rate used for the statutory cap.
    pub fn with_base_rate(mut self, base_rate_percent: f64) -> Self {
        self.base_rate_percent = Some(base_rate_percent);
        self
    }
}

/// Both leases and the rate linking them.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct JeonseResult {
    /// Full jeonse deposit
    pub jeonse_deposit: f64,
    /// Monthly lease deposit
    pub deposit: f64,
    /// Monthly rent
    pub monthly_rent: f64,
    /// Annual conversion rate in percent
    pub rate_percent: f64,
    /// Statutory cap in percent, when the base rate is known
    pub statutory_cap_percent: Option<f64>,
    /// Whether the rate exceeds the statutory cap
    pub exceeds_cap: bool,
}

fn ensure_deposit_below_jeonse(jeonse: f64, deposit: f64) -> Result<(), CalcError> {
    if deposit >= jeonse {
        return Err(CalcError::domain(format!(
            "deposit ({}) must be less than the jeonse deposit ({})",
            deposit, jeonse
        )));
    }
    Ok(())
}

impl Calculate for JeonseInput {
    type Output = JeonseResult;

    fn calculate(&self) -> Result<JeonseResult, CalcError> {
        let (jeonse_deposit, deposit, monthly_rent, rate_percent) = match self.mode {
            JeonseMode::ToMonthly {
                jeonse_deposit,
                deposit,
                rate_percent,
            } => {
                let jeonse = ensure_positive("jeonse deposit", jeonse_deposit)?;
                let deposit = ensure_non_negative("deposit", deposit)?;
                ensure_deposit_below_jeonse(jeonse, deposit)?;
                let rate = ensure_percent("conversion rate", rate_percent, 100.0)?;
                ensure_positive("conversion rate", rate)?;
                let rent = round_won((jeonse - deposit) * rate / 12.0);
                (jeonse, deposit, rent, rate_percent)
            }
            JeonseMode::ToJeonse {
                deposit,
                monthly_rent,
                rate_percent,
            } => {
                let deposit = ensure_non_negative("deposit", deposit)?;
                let rent = ensure_positive("monthly rent", monthly_rent)?;
                let rate = ensure_percent("conversion rate", rate_percent, 100.0)?;
                ensure_positive("conversion rate", rate)?;
                let jeonse = round_won(deposit + rent * 12.0 / rate);
                (jeonse, deposit, rent, rate_percent)
            }
            JeonseMode::ImpliedRate {
                jeonse_deposit,
                deposit,
                monthly_rent,
            } => {
                let jeonse = ensure_positive("jeonse deposit", jeonse_deposit)?;
                let deposit = ensure_non_negative("deposit", deposit)?;
                ensure_deposit_below_jeonse(jeonse, deposit)?;
                let rent = ensure_positive("monthly rent", monthly_rent)?;
                let rate_percent = rent * 12.0 / (jeonse - deposit) * 100.0;
                (jeonse, deposit, rent, rate_percent)
            }
        };

        let statutory_cap_percent = self
            .base_rate_percent
            .map(|base| ensure_non_negative("base rate", base).map(statutory_cap_percent))
            .transpose()?;
        let exceeds_cap = statutory_cap_percent.is_some_and(|cap| rate_percent > cap + 1e-9);

        Ok(JeonseResult {
            jeonse_deposit,
            deposit,
            monthly_rent,
            rate_percent,
            statutory_cap_percent,
            exceeds_cap,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_to_monthly() {
        let result = JeonseInput::new(JeonseMode::ToMonthly {
            jeonse_deposit: 300_000_000.0,
            deposit: 100_000_000.0,
            rate_percent: 4.5,
        })
        .calculate()
        .unwrap();
        assert_eq!(result.monthly_rent, 750_000.0);
        assert_eq!(result.statutory_cap_percent, None);
        assert!(!result.exceeds_cap);
    }

    #[test]
    fn test_to_jeonse() {
        let result = JeonseInput::new(JeonseMode::ToJeonse {
            deposit: 50_000_000.0,
            monthly_rent: 1_000_000.0,
            rate_percent: 6.0,
        })
        .calculate()
        .unwrap();
        assert_eq!(result.jeonse_deposit, 250_000_000.0);
    }

    #[test]
    fn test_implied_rate_and_cap() {
        let result = JeonseInput::new(JeonseMode::ImpliedRate {
            jeonse_deposit: 300_000_000.0,
            deposit: 100_000_000.0,
            monthly_rent: 1_000_000.0,
        })
        .with_base_rate(3.5)
        .calculate()
        .unwrap();
        assert_relative_eq!(result.rate_percent, 6.0, epsilon = 1e-12);
        assert_eq!(result.statutory_cap_percent, Some(5.5));
        assert!(result.exceeds_cap);
    }

    #[test]
    fn test_cap_ceiling() {
        assert_eq!(statutory_cap_percent(9.0), 10.0);
        assert_eq!(statutory_cap_percent(2.5), 4.5);
    }

    #[test]
    fn test_round_trip_between_modes() {
        let monthly = JeonseInput::new(JeonseMode::ToMonthly {
            jeonse_deposit: 400_000_000.0,
            deposit: 160_000_000.0,
            rate_percent: 5.0,
        })
        .calculate()
        .unwrap();
        let back = JeonseInput::new(JeonseMode::ToJeonse {
            deposit: monthly.deposit,
            monthly_rent: monthly.monthly_rent,
            rate_percent: 5.0,
        })
        .calculate()
        .unwrap();
        assert_eq!(back.jeonse_deposit, 400_000_000.0);
    }

    #[test]
    fn test_validation() {
        let err = JeonseInput::new(JeonseMode::ToMonthly {
            jeonse_deposit: 100_000_000.0,
            deposit: 100_000_000.0,
            rate_percent: 4.0,
        })
        .calculate()
        .unwrap_err();
        assert!(matches!(err, CalcError::DomainViolation(_)));

        assert!(JeonseInput::new(JeonseMode::ToJeonse {
            deposit: 0.0,
            monthly_rent: 500_000.0,
            rate_percent: 0.0,
        })
        .calculate()
        .is_err());
    }
}
