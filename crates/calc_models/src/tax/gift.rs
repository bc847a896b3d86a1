//! Gift tax (증여세).
//!
//! Tax base = this gift + gifts from the same donor in the prior 10
//! years − relationship deduction. The estate rate table applies, then
//! the generation-skipping surcharge (30%, or 40% for a minor receiving
//! more than 2B), less tax already paid on the prior gifts and the 3%
//! on-time filing credit.

use std::fmt;
use std::str::FromStr;

use calc_core::math::BracketEvaluation;
use calc_core::traits::Calculate;
use calc_core::types::money::floor_to;
use calc_core::types::validate::{ensure_non_negative, ensure_positive};
use calc_core::types::CalcError;

use super::{tables, FILING_CREDIT_RATE};

/// Generation-skipping surcharge rate.
pub const GENERATION_SKIP_SURCHARGE: f64 = 0.30;
/// Surcharge for a minor receiving more than [`GENERATION_SKIP_MINOR_THRESHOLD`].
pub const GENERATION_SKIP_SURCHARGE_MINOR: f64 = 0.40;
/// Gift amount above which a minor pays the higher surcharge.
pub const GENERATION_SKIP_MINOR_THRESHOLD: f64 = 2_000_000_000.0;

/// Donor's relationship to the recipient.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Relationship {
    /// Spouse
    Spouse,
    /// Parent or grandparent giving to a child or grandchild
    LinealAscendant,
    /// Child or grandchild giving to a parent or grandparent
    LinealDescendant,
    /// Other relative (within 6th-degree blood, 4th-degree by marriage)
    OtherRelative,
    /// No family relationship
    Other,
}

impl Relationship {
    /// 10-year deduction (증여재산공제).
    pub fn deduction(&self, recipient_is_minor: bool) -> f64 {
        match self {
            Relationship::Spouse => 600_000_000.0,
            Relationship::LinealAscendant if recipient_is_minor => 20_000_000.0,
            Relationship::LinealAscendant => 50_000_000.0,
            Relationship::LinealDescendant => 50_000_000.0,
            Relationship::OtherRelative => 10_000_000.0,
            Relationship::Other => 0.0,
        }
    }

    /// Korean description.
    pub fn korean_name(&self) -> &'static str {
        match self {
            Relationship::Spouse => "배우자",
            Relationship::LinealAscendant => "직계존속 → 직계비속",
            Relationship::LinealDescendant => "직계비속 → 직계존속",
            Relationship::OtherRelative => "기타친족",
            Relationship::Other => "기타",
        }
    }
}

impl fmt::Display for Relationship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.korean_name())
    }
}

impl FromStr for Relationship {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "spouse" | "배우자" => Ok(Relationship::Spouse),
            "parent" | "ascendant" | "직계존속" => Ok(Relationship::LinealAscendant),
            "child" | "descendant" | "직계비속" => Ok(Relationship::LinealDescendant),
            "relative" | "기타친족" => Ok(Relationship::OtherRelative),
            "other" | "기타" => Ok(Relationship::Other),
            other => Err(CalcError::invalid(
                "relationship",
                format!("'{}' (expected spouse, parent, child, relative or other)", other),
            )),
        }
    }
}

/// Gift and donor history.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GiftTaxInput {
    /// This gift
    pub gift_amount: f64,
    /// Gifts from the same donor in the prior 10 years
    pub prior_gifts: f64,
    /// Gift tax already paid on `prior_gifts`
    pub prior_tax_paid: f64,
    /// Donor relationship
    pub relationship: Relationship,
    /// Whether the recipient is under 19
    pub recipient_is_minor: bool,
    /// Grandparent to grandchild, skipping the parent
    pub generation_skipping: bool,
    /// Whether the return is filed on time
    pub filed_on_time: bool,
}

impl GiftTaxInput {
    /// A first gift filed on time.
    pub fn new(gift_amount: f64, relationship: Relationship) -> Self {
        Self {
            gift_amount,
            prior_gifts: 0.0,
            prior_tax_paid: 0.0,
            relationship,
            recipient_is_minor: false,
            generation_skipping: false,
            filed_on_time: true,
        }
    }
}

/// Deduction, tax, surcharge and credits.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GiftTaxResult {
    /// This gift plus prior gifts
    pub aggregated_gifts: f64,
    /// Relationship deduction
    pub deduction: f64,
    /// Tax base (과세표준)
    pub tax_base: f64,
    /// Tax from the rate table (산출세액)
    pub calculated_tax: f64,
    /// Generation-skipping surcharge
    pub surcharge: f64,
    /// Prior tax credited
    pub prior_tax_credit: f64,
    /// On-time filing credit
    pub filing_credit: f64,
    /// Tax payable
    pub payable_tax: f64,
    /// Per-bracket breakdown
    pub breakdown: BracketEvaluation,
}

impl Calculate for GiftTaxInput {
    type Output = GiftTaxResult;

    fn calculate(&self) -> Result<GiftTaxResult, CalcError> {
        let gift = ensure_positive("gift amount", self.gift_amount)?;
        let prior = ensure_non_negative("prior gifts", self.prior_gifts)?;
        let prior_tax = ensure_non_negative("prior tax paid", self.prior_tax_paid)?;
        if self.generation_skipping && self.relationship != Relationship::LinealAscendant {
            return Err(CalcError::domain(
                "generation-skipping applies only to gifts from a lineal ascendant",
            ));
        }

        let aggregated_gifts = gift + prior;
        let deduction = self.relationship.deduction(self.recipient_is_minor);
        let tax_base = floor_to((aggregated_gifts - deduction).max(0.0), 1_000.0);

        let breakdown = tables::estate_tax()?.evaluate(tax_base);
        let calculated_tax = floor_to(breakdown.total, 1.0);

        let surcharge_rate = if !self.generation_skipping {
            0.0
        } else if self.recipient_is_minor && gift > GENERATION_SKIP_MINOR_THRESHOLD {
            GENERATION_SKIP_SURCHARGE_MINOR
        } else {
            GENERATION_SKIP_SURCHARGE
        };
        let surcharge = floor_to(calculated_tax * surcharge_rate, 1.0);

        let gross = calculated_tax + surcharge;
        let prior_tax_credit = prior_tax.min(gross);
        let after_prior = gross - prior_tax_credit;
        let filing_credit = if self.filed_on_time {
            floor_to(after_prior * FILING_CREDIT_RATE, 1.0)
        } else {
            0.0
        };

        Ok(GiftTaxResult {
            aggregated_gifts,
            deduction,
            tax_base,
            calculated_tax,
            surcharge,
            prior_tax_credit,
            filing_credit,
            payable_tax: after_prior - filing_credit,
            breakdown,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parent_to_adult_child() {
        let result = GiftTaxInput::new(300_000_000.0, Relationship::LinealAscendant)
            .calculate()
            .unwrap();
        assert_eq!(result.deduction, 50_000_000.0);
        assert_eq!(result.tax_base, 250_000_000.0);
        assert_eq!(result.calculated_tax, 40_000_000.0);
        assert_eq!(result.filing_credit, 1_200_000.0);
        assert_eq!(result.payable_tax, 38_800_000.0);
    }

    #[test]
    fn test_spouse_within_deduction() {
        let result = GiftTaxInput::new(600_000_000.0, Relationship::Spouse)
            .calculate()
            .unwrap();
        assert_eq!(result.tax_base, 0.0);
        assert_eq!(result.payable_tax, 0.0);
    }

    #[test]
    fn test_prior_gifts_aggregate_and_credit() {
        let mut input = GiftTaxInput::new(100_000_000.0, Relationship::LinealAscendant);
        input.prior_gifts = 100_000_000.0;
        input.prior_tax_paid = 4_850_000.0;
        let result = input.calculate().unwrap();
        assert_eq!(result.tax_base, 150_000_000.0);
        // 150M × 20% − 10M
        assert_eq!(result.calculated_tax, 20_000_000.0);
        assert_eq!(result.prior_tax_credit, 4_850_000.0);
        assert_eq!(result.filing_credit, 454_500.0);
        assert_eq!(result.payable_tax, 14_695_500.0);
    }

    #[test]
    fn test_generation_skipping_minor_over_threshold() {
        let mut input = GiftTaxInput::new(3_000_000_000.0, Relationship::LinealAscendant);
        input.recipient_is_minor = true;
        input.generation_skipping = true;
        let result = input.calculate().unwrap();
        assert_eq!(result.deduction, 20_000_000.0);
        assert_eq!(result.calculated_tax, 1_032_000_000.0);
        assert_eq!(result.surcharge, 412_800_000.0);
    }

    #[test]
    fn test_generation_skipping_standard_surcharge() {
        let mut input = GiftTaxInput::new(100_000_000.0, Relationship::LinealAscendant);
        input.generation_skipping = true;
        let result = input.calculate().unwrap();
        assert_eq!(result.calculated_tax, 5_000_000.0);
        assert_eq!(result.surcharge, 1_500_000.0);
    }

    #[test]
    fn test_generation_skipping_requires_ascendant() {
        let mut input = GiftTaxInput::new(100_000_000.0, Relationship::Spouse);
        input.generation_skipping = true;
        assert!(matches!(input.calculate(), Err(CalcError::DomainViolation(_))));
    }

    #[test]
    fn test_relationship_parse() {
        assert_eq!("배우자".parse::<Relationship>().unwrap(), Relationship::Spouse);
        assert_eq!("Parent".parse::<Relationship>().unwrap(), Relationship::LinealAscendant);
        assert!("friend".parse::<Relationship>().is_err());
    }
}
