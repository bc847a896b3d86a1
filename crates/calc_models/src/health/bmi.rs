//! Body mass index.
//!
//! BMI = weight (kg) / height (m)², reported to two decimals and classified
//! on the Korean obesity scale (Korean Society for the Study of Obesity):
//!
//! | BMI | Category |
//! |---|---|
//! | < 18.5 | 저체중 |
//! | 18.5 – 23 | 정상체중 |
//! | 23 – 25 | 과체중 |
//! | 25 – 30 | 비만 |
//! | ≥ 30 | 고도비만 |
//!
//! # Examples
//!
//! ```
//! use calc_core::traits::Calculate;
//! use calc_models::health::{BmiCategory, BmiInput};
//!
//! let result = BmiInput::new(170.0, 65.0).calculate().unwrap();
//! assert_eq!(result.bmi, 22.49);
//! assert_eq!(result.category, BmiCategory::Normal);
//! assert_eq!(result.category.korean_name(), "정상체중");
//! ```

use std::fmt;

use calc_core::traits::Calculate;
use calc_core::types::validate::ensure_positive;
use calc_core::types::CalcError;

/// Lower bound of the normal range.
pub const NORMAL_MIN: f64 = 18.5;
/// Upper bound (exclusive) of the normal range.
pub const NORMAL_MAX: f64 = 23.0;

/// Korean obesity scale category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BmiCategory {
    /// 저체중
    Underweight,
    /// 정상체중
    Normal,
    /// 과체중
    Overweight,
    /// 비만
    Obese,
    /// 고도비만
    SeverelyObese,
}

impl BmiCategory {
    /// Classifies a BMI value.
    pub fn from_bmi(bmi: f64) -> Self {
        if bmi < NORMAL_MIN {
            BmiCategory::Underweight
        } else if bmi < NORMAL_MAX {
            BmiCategory::Normal
        } else if bmi < 25.0 {
            BmiCategory::Overweight
        } else if bmi < 30.0 {
            BmiCategory::Obese
        } else {
            BmiCategory::SeverelyObese
        }
    }

    /// Korean label.
    pub fn korean_name(&self) -> &'static str {
        match self {
            BmiCategory::Underweight => "저체중",
            BmiCategory::Normal => "정상체중",
            BmiCategory::Overweight => "과체중",
            BmiCategory::Obese => "비만",
            BmiCategory::SeverelyObese => "고도비만",
        }
    }
}

impl fmt::Display for BmiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.korean_name())
    }
}

/// Height and weight.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BmiInput {
    /// Height in centimetres
    pub height_cm: f64,
    /// Weight in kilograms
    pub weight_kg: f64,
}

impl BmiInput {
    /// Creates an input record.
    pub fn new(height_cm: f64, weight_kg: f64) -> Self {
        Self {
            height_cm,
            weight_kg,
        }
    }
}

/// BMI with category and the normal weight range for the height.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BmiResult {
    /// BMI rounded to two decimals
    pub bmi: f64,
    /// Category of the rounded BMI
    pub category: BmiCategory,
    /// Lightest weight in the normal range (kg)
    pub normal_weight_min: f64,
    /// Heaviest weight in the normal range (kg)
    pub normal_weight_max: f64,
    /// Signed change needed to reach the normal range; 0 when inside it
    pub weight_to_normal: f64,
}

impl Calculate for BmiInput {
    type Output = BmiResult;

    fn calculate(&self) -> Result<BmiResult, CalcError> {
        let height_cm = ensure_positive("height", self.height_cm)?;
        let weight_kg = ensure_positive("weight", self.weight_kg)?;

        let height_m = height_cm / 100.0;
        let height_sq = height_m * height_m;
        let bmi = (weight_kg / height_sq * 100.0).round() / 100.0;

        let normal_weight_min = NORMAL_MIN * height_sq;
        let normal_weight_max = NORMAL_MAX * height_sq;
        let weight_to_normal = if weight_kg < normal_weight_min {
            normal_weight_min - weight_kg
        } else if weight_kg >= normal_weight_max {
            normal_weight_max - weight_kg
        } else {
            0.0
        };

        Ok(BmiResult {
            bmi,
            category: BmiCategory::from_bmi(bmi),
            normal_weight_min,
            normal_weight_max,
            weight_to_normal,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_reference_example() {
        let result = BmiInput::new(170.0, 65.0).calculate().unwrap();
        assert_eq!(result.bmi, 22.49);
        assert_eq!(result.category, BmiCategory::Normal);
        assert_eq!(result.weight_to_normal, 0.0);
        assert_relative_eq!(result.normal_weight_min, 53.465, epsilon = 1e-9);
        assert_relative_eq!(result.normal_weight_max, 66.47, epsilon = 1e-9);
    }

    #[test]
    fn test_category_boundaries() {
        assert_eq!(BmiCategory::from_bmi(18.49), BmiCategory::Underweight);
        assert_eq!(BmiCategory::from_bmi(18.5), BmiCategory::Normal);
        assert_eq!(BmiCategory::from_bmi(23.0), BmiCategory::Overweight);
        assert_eq!(BmiCategory::from_bmi(25.0), BmiCategory::Obese);
        assert_eq!(BmiCategory::from_bmi(30.0), BmiCategory::SeverelyObese);
    }

    #[test]
    fn test_overweight_needs_loss() {
        let result = BmiInput::new(160.0, 70.0).calculate().unwrap();
        assert_eq!(result.category, BmiCategory::Obese);
        assert!(result.weight_to_normal < 0.0);
        assert_relative_eq!(70.0 + result.weight_to_normal, 23.0 * 1.6 * 1.6, epsilon = 1e-9);
    }

    #[test]
    fn test_rejects_missing_or_zero() {
        assert!(matches!(
            BmiInput::new(0.0, 65.0).calculate(),
            Err(CalcError::NonPositive { field: "height", .. })
        ));
        assert!(matches!(
            BmiInput::new(170.0, -1.0).calculate(),
            Err(CalcError::NonPositive { field: "weight", .. })
        ));
        assert!(BmiInput::new(f64::NAN, 65.0).calculate().is_err());
    }
}
