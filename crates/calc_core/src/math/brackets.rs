//! Progressive bracket evaluation.
//!
//! A [`BracketTable`] is an ordered, contiguous list of [`TaxBracket`]s that
//! starts at zero and ends with an unbounded bracket. Evaluating an amount
//! taxes each slice `[lower, min(upper, amount)]` at its bracket's rate and
//! sums the slices.
//!
//! An amount exactly equal to a bracket's upper bound belongs to that
//! bracket, not the next one.
//!
//! # Examples
//!
//! ```
//! use calc_core::math::brackets::BracketTable;
//!
//! let table = BracketTable::progressive(&[
//!     (Some(12_000_000.0), 0.06),
//!     (Some(46_000_000.0), 0.15),
//!     (None, 0.24),
//! ])
//! .unwrap();
//!
//! let eval = table.evaluate(50_000_000.0);
//! // 12M × 6% + 34M × 15% + 4M × 24%
//! assert!((eval.total - 6_780_000.0).abs() < 1e-6);
//! assert_eq!(eval.marginal_rate, 0.24);
//! ```

use crate::types::CalcError;

/// A single rate bracket.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TaxBracket {
    /// Inclusive-exclusive lower bound (amounts above it are taxed here)
    pub lower: f64,
    /// Upper bound, `None` for the final unbounded bracket
    pub upper: Option<f64>,
    /// Marginal rate as a ratio (0.15 for 15%)
    pub rate: f64,
    /// Cumulative deduction for the `amount × rate − deduction` shortcut
    pub deduction: Option<f64>,
}

impl TaxBracket {
    /// Creates a bracket without a pre-computed deduction.
    pub const fn new(lower: f64, upper: Option<f64>, rate: f64) -> Self {
        Self {
            lower,
            upper,
            rate,
            deduction: None,
        }
    }

    /// Sets the pre-computed cumulative deduction.
    pub const fn with_deduction(mut self, deduction: f64) -> Self {
        self.deduction = Some(deduction);
        self
    }

    /// Upper bound with the open end treated as infinity.
    #[inline]
    pub fn upper_or_inf(&self) -> f64 {
        self.upper.unwrap_or(f64::INFINITY)
    }

    /// Whether `amount` falls in `(lower, upper]`.
    #[inline]
    pub fn contains(&self, amount: f64) -> bool {
        amount > self.lower && amount <= self.upper_or_inf()
    }
}

/// Tax accrued in one bracket.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BracketLine {
    /// Bracket lower bound
    pub lower: f64,
    /// Bracket upper bound (`None` if unbounded)
    pub upper: Option<f64>,
    /// Portion of the amount that falls in this bracket
    pub taxed_amount: f64,
    /// Bracket rate
    pub rate: f64,
    /// `taxed_amount × rate`
    pub tax: f64,
}

/// Result of evaluating an amount against a table.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BracketEvaluation {
    /// Amount evaluated (negative inputs are treated as zero)
    pub amount: f64,
    /// Sum of tax over all brackets
    pub total: f64,
    /// Rate of the bracket the amount falls in
    pub marginal_rate: f64,
    /// Per-bracket breakdown, only brackets that accrued tax
    pub lines: Vec<BracketLine>,
}

impl BracketEvaluation {
    /// Average rate `total / amount` (0 for a zero amount).
    pub fn effective_rate(&self) -> f64 {
        if self.amount > 0.0 {
            self.total / self.amount
        } else {
            0.0
        }
    }
}

/// Ordered, contiguous, non-overlapping brackets covering `[0, ∞)`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BracketTable {
    brackets: Vec<TaxBracket>,
}

impl BracketTable {
    /// Validates and wraps a list of brackets.
    ///
    /// # Errors
    /// Returns `CalcError::DomainViolation` if the list is empty, does not
    /// start at 0, has gaps/overlaps, has a bounded final bracket, an
    /// unbounded bracket before the end, or a rate outside `[0, 1]`.
    pub fn new(brackets: Vec<TaxBracket>) -> Result<Self, CalcError> {
        let first = brackets
            .first()
            .ok_or_else(|| CalcError::domain("bracket table is empty"))?;
        if first.lower != 0.0 {
            return Err(CalcError::domain(format!(
                "first bracket must start at 0 (starts at {})",
                first.lower
            )));
        }

        let last_index = brackets.len() - 1;
        for (i, bracket) in brackets.iter().enumerate() {
            if !(0.0..=1.0).contains(&bracket.rate) {
                return Err(CalcError::domain(format!(
                    "bracket {} has rate {} outside [0, 1]",
                    i, bracket.rate
                )));
            }
            match bracket.upper {
                None if i != last_index => {
                    return Err(CalcError::domain(format!(
                        "bracket {} is unbounded but is not the last bracket",
                        i
                    )));
                }
                Some(_) if i == last_index => {
                    return Err(CalcError::domain("last bracket must be unbounded"));
                }
                Some(upper) if upper <= bracket.lower => {
                    return Err(CalcError::domain(format!(
                        "bracket {} upper bound {} is not above lower bound {}",
                        i, upper, bracket.lower
                    )));
                }
                _ => {}
            }
            if let Some(next) = brackets.get(i + 1) {
                if Some(next.lower) != bracket.upper {
                    return Err(CalcError::domain(format!(
                        "bracket {} starts at {} but previous bracket ends at {:?}",
                        i + 1,
                        next.lower,
                        bracket.upper
                    )));
                }
            }
        }

        Ok(Self { brackets })
    }

    /// Builds a table from ascending `(upper, rate)` pairs and fills in the
    /// cumulative deductions.
    ///
    /// The last pair must have `upper = None`.
    pub fn progressive(steps: &[(Option<f64>, f64)]) -> Result<Self, CalcError> {
        let mut brackets = Vec::with_capacity(steps.len());
        let mut lower = 0.0;
        let mut tax_at_lower = 0.0;
        for &(upper, rate) in steps {
            let deduction = lower * rate - tax_at_lower;
            brackets.push(TaxBracket::new(lower, upper, rate).with_deduction(deduction));
            if let Some(upper) = upper {
                tax_at_lower += (upper - lower) * rate;
                lower = upper;
            }
        }
        Self::new(brackets)
    }

    /// The validated brackets, ascending.
    pub fn brackets(&self) -> &[TaxBracket] {
        &self.brackets
    }

    /// Bracket containing `amount` (boundary ties go to the lower bracket).
    pub fn bracket_for(&self, amount: f64) -> &TaxBracket {
        self.brackets
            .iter()
            .find(|b| b.contains(amount))
            .unwrap_or(&self.brackets[0])
    }

    /// Evaluates `amount` bracket by bracket.
    pub fn evaluate(&self, amount: f64) -> BracketEvaluation {
        let amount = if amount.is_finite() { amount.max(0.0) } else { 0.0 };

        let lines: Vec<BracketLine> = self
            .brackets
            .iter()
            .take_while(|b| amount > b.lower)
            .map(|b| {
                let taxed_amount = amount.min(b.upper_or_inf()) - b.lower;
                BracketLine {
                    lower: b.lower,
                    upper: b.upper,
                    taxed_amount,
                    rate: b.rate,
                    tax: taxed_amount * b.rate,
                }
            })
            .collect();

        BracketEvaluation {
            amount,
            total: lines.iter().map(|l| l.tax).sum(),
            marginal_rate: self.bracket_for(amount).rate,
            lines,
        }
    }

    /// Total tax only.
    #[inline]
    pub fn tax(&self, amount: f64) -> f64 {
        self.evaluate(amount).total
    }

    /// `amount × rate − deduction` using the containing bracket's
    /// pre-computed deduction, or `None` if that bracket has none.
    pub fn quick_tax(&self, amount: f64) -> Option<f64> {
        let amount = amount.max(0.0);
        let bracket = self.bracket_for(amount);
        bracket.deduction.map(|d| (amount * bracket.rate - d).max(0.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn income_table() -> BracketTable {
        BracketTable::progressive(&[
            (Some(12_000_000.0), 0.06),
            (Some(46_000_000.0), 0.15),
            (Some(88_000_000.0), 0.24),
            (Some(150_000_000.0), 0.35),
            (Some(300_000_000.0), 0.38),
            (Some(500_000_000.0), 0.40),
            (Some(1_000_000_000.0), 0.42),
            (None, 0.45),
        ])
        .unwrap()
    }

    #[test]
    fn test_progressive_fills_known_deductions() {
        let table = income_table();
        let deductions: Vec<f64> = table
            .brackets()
            .iter()
            .map(|b| b.deduction.unwrap())
            .collect();
        let expected = [
            0.0,
            1_080_000.0,
            5_220_000.0,
            14_900_000.0,
            19_400_000.0,
            25_400_000.0,
            35_400_000.0,
            65_400_000.0,
        ];
        for (got, want) in deductions.iter().zip(expected.iter()) {
            assert_relative_eq!(*got, *want, epsilon = 1e-6);
        }
    }

    #[test]
    fn test_fifty_million_breakdown() {
        let eval = income_table().evaluate(50_000_000.0);
        assert_eq!(eval.lines.len(), 3);
        assert_relative_eq!(eval.lines[0].tax, 720_000.0, epsilon = 1e-6);
        assert_relative_eq!(eval.lines[1].taxed_amount, 34_000_000.0, epsilon = 1e-6);
        assert_relative_eq!(eval.lines[1].tax, 5_100_000.0, epsilon = 1e-6);
        assert_relative_eq!(eval.lines[2].taxed_amount, 4_000_000.0, epsilon = 1e-6);
        assert_relative_eq!(eval.lines[2].tax, 960_000.0, epsilon = 1e-6);
        assert_relative_eq!(eval.total, 6_780_000.0, epsilon = 1e-6);
    }

    #[test]
    fn test_boundary_belongs_to_lower_bracket() {
        let table = income_table();
        let eval = table.evaluate(46_000_000.0);
        assert_eq!(eval.marginal_rate, 0.15);
        assert_eq!(eval.lines.len(), 2);
        assert_relative_eq!(eval.total, 720_000.0 + 5_100_000.0, epsilon = 1e-6);
    }

    #[test]
    fn test_zero_and_negative_amounts() {
        let table = income_table();
        for amount in [0.0, -5.0, f64::NAN] {
            let eval = table.evaluate(amount);
            assert_eq!(eval.total, 0.0);
            assert!(eval.lines.is_empty());
            assert_eq!(eval.marginal_rate, 0.06);
            assert_eq!(eval.effective_rate(), 0.0);
        }
    }

    #[test]
    fn test_quick_tax_none_without_deduction() {
        let table = BracketTable::new(vec![
            TaxBracket::new(0.0, Some(100.0), 0.1),
            TaxBracket::new(100.0, None, 0.2),
        ])
        .unwrap();
        assert_eq!(table.quick_tax(150.0), None);
        assert_relative_eq!(table.tax(150.0), 20.0);
    }

    #[test]
    fn test_rejects_gap() {
        let result = BracketTable::new(vec![
            TaxBracket::new(0.0, Some(100.0), 0.1),
            TaxBracket::new(120.0, None, 0.2),
        ]);
        assert!(matches!(result, Err(CalcError::DomainViolation(_))));
    }

    #[test]
    fn test_rejects_bounded_tail_and_early_open_end() {
        assert!(BracketTable::new(vec![TaxBracket::new(0.0, Some(100.0), 0.1)]).is_err());
        assert!(BracketTable::new(vec![
            TaxBracket::new(0.0, None, 0.1),
            TaxBracket::new(100.0, None, 0.2),
        ])
        .is_err());
        assert!(BracketTable::new(vec![]).is_err());
        assert!(BracketTable::new(vec![TaxBracket::new(5.0, None, 0.1)]).is_err());
        assert!(BracketTable::new(vec![TaxBracket::new(0.0, None, 1.5)]).is_err());
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig::with_cases(500))]

            #[test]
            fn test_tax_non_decreasing(a in 0.0f64..2e9, b in 0.0f64..2e9) {
                let table = income_table();
                let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
                prop_assert!(table.tax(lo) <= table.tax(hi) + 1e-6);
            }

            #[test]
            fn test_tax_continuous(a in 0.0f64..2e9) {
                let table = income_table();
                let delta = 1.0;
                // the steepest marginal rate bounds the jump
                prop_assert!((table.tax(a + delta) - table.tax(a)).abs() <= 0.45 * delta + 1e-6);
            }

            #[test]
            fn test_quick_tax_agrees(a in 0.0f64..2e9) {
                let table = income_table();
                let quick = table.quick_tax(a).unwrap();
                prop_assert!((quick - table.tax(a)).abs() < 1e-3);
            }

            #[test]
            fn test_lines_sum_to_amount(a in 0.0f64..2e9) {
                let eval = income_table().evaluate(a);
                let covered: f64 = eval.lines.iter().map(|l| l.taxed_amount).sum();
                prop_assert!((covered - a).abs() < 1e-3);
            }
        }
    }
}
