//! Daily calorie needs.
//!
//! Basal metabolic rate uses the revised Harris-Benedict equations:
//!
//! - male: `66.47 + 13.75·w + 5.003·h − 6.755·a`
//! - female: `655.1 + 9.563·w + 1.850·h − 4.676·a`
//!
//! with weight in kg, height in cm and age in years. Total daily energy
//! expenditure (TDEE) is BMR times the activity factor. Goal targets shift
//! TDEE by 500 kcal; the macronutrient split is 50 / 20 / 30 percent of
//! TDEE for carbohydrate / protein / fat.

use std::fmt;
use std::str::FromStr;

use calc_core::traits::Calculate;
use calc_core::types::validate::ensure_positive;
use calc_core::types::CalcError;

/// Daily surplus or deficit applied for weight goals (kcal).
pub const GOAL_ADJUSTMENT_KCAL: f64 = 500.0;

const CARB_SHARE: f64 = 0.50;
const PROTEIN_SHARE: f64 = 0.20;
const FAT_SHARE: f64 = 0.30;
const KCAL_PER_G_CARB: f64 = 4.0;
const KCAL_PER_G_PROTEIN: f64 = 4.0;
const KCAL_PER_G_FAT: f64 = 9.0;

/// Biological sex for the BMR equation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Sex {
    /// 남성
    Male,
    /// 여성
    Female,
}

impl FromStr for Sex {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "male" | "m" | "남" | "남성" => Ok(Sex::Male),
            "female" | "f" | "여" | "여성" => Ok(Sex::Female),
            other => Err(CalcError::invalid("sex", format!("'{}' (expected male or female)", other))),
        }
    }
}

/// Activity level and its multiplier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ActivityLevel {
    /// Little or no exercise
    #[default]
    Sedentary,
    /// Exercise 1-3 days a week
    Light,
    /// Exercise 3-5 days a week
    Moderate,
    /// Exercise 6-7 days a week
    Active,
    /// Hard daily exercise or a physical job
    VeryActive,
}

impl ActivityLevel {
    /// TDEE multiplier.
    pub fn factor(&self) -> f64 {
        match self {
            ActivityLevel::Sedentary => 1.2,
            ActivityLevel::Light => 1.375,
            ActivityLevel::Moderate => 1.55,
            ActivityLevel::Active => 1.725,
            ActivityLevel::VeryActive => 1.9,
        }
    }

    /// Korean description.
    pub fn korean_name(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "거의 운동 안 함",
            ActivityLevel::Light => "가벼운 활동 (주 1~3회)",
            ActivityLevel::Moderate => "보통 활동 (주 3~5회)",
            ActivityLevel::Active => "많은 활동 (주 6~7회)",
            ActivityLevel::VeryActive => "매우 많은 활동",
        }
    }
}

impl FromStr for ActivityLevel {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "sedentary" | "1" => Ok(ActivityLevel::Sedentary),
            "light" | "2" => Ok(ActivityLevel::Light),
            "moderate" | "3" => Ok(ActivityLevel::Moderate),
            "active" | "4" => Ok(ActivityLevel::Active),
            "very-active" | "very_active" | "5" => Ok(ActivityLevel::VeryActive),
            other => Err(CalcError::invalid(
                "activity level",
                format!("'{}' (expected sedentary, light, moderate, active or very-active)", other),
            )),
        }
    }
}

/// Weight goal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Goal {
    /// 감량
    Lose,
    /// 유지
    Maintain,
    /// 증량
    Gain,
}

impl Goal {
    /// All goals in display order.
    pub const ALL: [Goal; 3] = [Goal::Lose, Goal::Maintain, Goal::Gain];

    fn adjustment(&self) -> f64 {
        match self {
            Goal::Lose => -GOAL_ADJUSTMENT_KCAL,
            Goal::Maintain => 0.0,
            Goal::Gain => GOAL_ADJUSTMENT_KCAL,
        }
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Goal::Lose => "감량",
            Goal::Maintain => "유지",
            Goal::Gain => "증량",
        };
        f.write_str(label)
    }
}

/// Person and activity level.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CalorieInput {
    /// Sex for the BMR equation
    pub sex: Sex,
    /// Age in years
    pub age_years: f64,
    /// Height in centimetres
    pub height_cm: f64,
    /// Weight in kilograms
    pub weight_kg: f64,
    /// Activity level
    pub activity: ActivityLevel,
}

/// Daily intake target for a goal.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GoalTarget {
    /// Goal
    pub goal: Goal,
    /// Daily kcal
    pub kcal: f64,
}

/// Grams per day of each macronutrient at maintenance.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MacroSplit {
    /// Carbohydrate (g)
    pub carbohydrate_g: f64,
    /// Protein (g)
    pub protein_g: f64,
    /// Fat (g)
    pub fat_g: f64,
}

/// BMR, TDEE, goal targets and macro split.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CalorieResult {
    /// Basal metabolic rate (kcal/day)
    pub bmr: f64,
    /// Activity factor applied
    pub activity_factor: f64,
    /// Total daily energy expenditure (kcal/day)
    pub tdee: f64,
    /// Targets for each goal
    pub goals: Vec<GoalTarget>,
    /// Macronutrients at maintenance
    pub macros: MacroSplit,
}

impl CalorieInput {
    /// Harris-Benedict BMR for validated inputs.
    fn bmr(&self, weight: f64, height: f64, age: f64) -> f64 {
        match self.sex {
            Sex::Male => 66.47 + 13.75 * weight + 5.003 * height - 6.755 * age,
            Sex::Female => 655.1 + 9.563 * weight + 1.850 * height - 4.676 * age,
        }
    }
}

impl Calculate for CalorieInput {
    type Output = CalorieResult;

    fn calculate(&self) -> Result<CalorieResult, CalcError> {
        let age = ensure_positive("age", self.age_years)?;
        let height = ensure_positive("height", self.height_cm)?;
        let weight = ensure_positive("weight", self.weight_kg)?;

        let bmr = self.bmr(weight, height, age);
        if bmr <= 0.0 {
            return Err(CalcError::domain(format!(
                "inputs give a non-positive BMR ({:.1} kcal)",
                bmr
            )));
        }
        let activity_factor = self.activity.factor();
        let tdee = bmr * activity_factor;

        let goals = Goal::ALL
            .into_iter()
            .map(|goal| GoalTarget {
                goal,
                kcal: (tdee + goal.adjustment()).max(0.0),
            })
            .collect();

        let macros = MacroSplit {
            carbohydrate_g: tdee * CARB_SHARE / KCAL_PER_G_CARB,
            protein_g: tdee * PROTEIN_SHARE / KCAL_PER_G_PROTEIN,
            fat_g: tdee * FAT_SHARE / KCAL_PER_G_FAT,
        };

        Ok(CalorieResult {
            bmr,
            activity_factor,
            tdee,
            goals,
            macros,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn input(sex: Sex, activity: ActivityLevel) -> CalorieInput {
        CalorieInput {
            sex,
            age_years: 30.0,
            height_cm: 175.0,
            weight_kg: 70.0,
            activity,
        }
    }

    #[test]
    fn test_male_bmr_and_tdee() {
        let result = input(Sex::Male, ActivityLevel::Moderate).calculate().unwrap();
        // 66.47 + 962.5 + 875.525 − 202.65
        assert_relative_eq!(result.bmr, 1_701.845, epsilon = 1e-9);
        assert_relative_eq!(result.tdee, 1_701.845 * 1.55, epsilon = 1e-9);
    }

    #[test]
    fn test_female_bmr() {
        let result = input(Sex::Female, ActivityLevel::Sedentary).calculate().unwrap();
        // 655.1 + 669.41 + 323.75 − 140.28
        assert_relative_eq!(result.bmr, 1_507.98, epsilon = 1e-9);
        assert_relative_eq!(result.tdee, 1_507.98 * 1.2, epsilon = 1e-9);
    }

    #[test]
    fn test_goals_and_macros() {
        let result = input(Sex::Male, ActivityLevel::Light).calculate().unwrap();
        let tdee = result.tdee;
        assert_eq!(result.goals.len(), 3);
        assert_relative_eq!(result.goals[0].kcal, tdee - 500.0);
        assert_relative_eq!(result.goals[1].kcal, tdee);
        assert_relative_eq!(result.goals[2].kcal, tdee + 500.0);

        let m = result.macros;
        let kcal = m.carbohydrate_g * 4.0 + m.protein_g * 4.0 + m.fat_g * 9.0;
        assert_relative_eq!(kcal, tdee, epsilon = 1e-9);
    }

    #[test]
    fn test_validation() {
        let mut bad = input(Sex::Male, ActivityLevel::Light);
        bad.age_years = 0.0;
        assert!(matches!(bad.calculate(), Err(CalcError::NonPositive { field: "age", .. })));
    }

    #[test]
    fn test_parse_choices() {
        assert_eq!("여성".parse::<Sex>().unwrap(), Sex::Female);
        assert_eq!("very-active".parse::<ActivityLevel>().unwrap(), ActivityLevel::VeryActive);
        assert_eq!("3".parse::<ActivityLevel>().unwrap(), ActivityLevel::Moderate);
        assert!("couch".parse::<ActivityLevel>().is_err());
    }
}
