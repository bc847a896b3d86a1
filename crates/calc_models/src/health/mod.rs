//! Health calculators.
//!
//! - [`bmi`]: body mass index with the Korean obesity scale
//! - [`calorie`]: Harris-Benedict BMR, daily energy expenditure and goals

pub mod bmi;
pub mod calorie;

pub use bmi::{BmiCategory, BmiInput, BmiResult};
pub use calorie::{ActivityLevel, CalorieInput, CalorieResult, Goal, Sex};
