//! BMI and calorie commands

use calc_core::traits::Calculate;
use calc_models::health::{ActivityLevel, BmiInput, CalorieInput, Sex};
use tracing::{debug, info};

use super::quantity;
use crate::output::{Report, Table};
use crate::Result;

/// Run the bmi command
pub fn bmi(height_cm: f64, weight_kg: f64) -> Result<Report> {
    info!("Calculating BMI...");
    let input = BmiInput::new(height_cm, weight_kg);
    debug!(?input);
    let result = input.calculate()?;

    let mut report = Report::new("체질량지수 (BMI)", &result)?
        .field("BMI", format!("{:.2}", result.bmi))
        .field("판정", result.category.korean_name())
        .field(
            "정상 체중 범위",
            format!(
                "{} ~ {}",
                quantity(result.normal_weight_min, 1, "kg"),
                quantity(result.normal_weight_max, 1, "kg")
            ),
        );
    if result.weight_to_normal != 0.0 {
        let label = if result.weight_to_normal > 0.0 {
            "정상까지 증량"
        } else {
            "정상까지 감량"
        };
        report = report.field(label, quantity(result.weight_to_normal.abs(), 1, "kg"));
    }
    Ok(report)
}

/// Run the calorie command
pub fn calorie(
    sex: Sex,
    age_years: f64,
    height_cm: f64,
    weight_kg: f64,
    activity: ActivityLevel,
) -> Result<Report> {
    info!("Calculating daily calories...");
    let input = CalorieInput {
        sex,
        age_years,
        height_cm,
        weight_kg,
        activity,
    };
    debug!(?input);
    let result = input.calculate()?;

    let mut goals = Table::new(["목표", "일일 섭취량"]);
    for target in &result.goals {
        goals.push([target.goal.to_string(), quantity(target.kcal, 0, "kcal")]);
    }

    Ok(Report::new("일일 칼로리", &result)?
        .field("기초대사량", quantity(result.bmr, 0, "kcal"))
        .field("활동 수준", activity.korean_name())
        .field("활동 계수", format!("{}", result.activity_factor))
        .field("유지 칼로리", quantity(result.tdee, 0, "kcal"))
        .field("탄수화물", quantity(result.macros.carbohydrate_g, 0, "g"))
        .field("단백질", quantity(result.macros.protein_g, 0, "g"))
        .field("지방", quantity(result.macros.fat_g, 0, "g"))
        .with_table(goals))
}
