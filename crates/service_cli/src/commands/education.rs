//! Grade point average command

use calc_core::traits::Calculate;
use calc_models::education::{Course, GradeInput, GradeScale};
use tracing::{debug, info};

use super::quantity;
use crate::output::{Report, Table};
use crate::Result;

/// Run the grade command
pub fn grade(courses: &[Course], scale: GradeScale) -> Result<Report> {
    info!("Calculating GPA over {} courses...", courses.len());
    let input = GradeInput::new(courses.to_vec(), scale);
    debug!(?input);
    let result = input.calculate()?;

    let mut table = Table::new(["과목", "학점", "성적", "평점", "전공"]);
    for course in courses {
        let points = course
            .grade
            .points(scale)?
            .map_or_else(|| "-".to_string(), |p| format!("{:.1}", p));
        table.push([
            course.name.clone(),
            quantity(course.credits, 1, ""),
            course.grade.to_string(),
            points,
            if course.major { "○" } else { "" }.to_string(),
        ]);
    }

    let mut report = Report::new("학점 계산", &result)?
        .field("평점 기준", format!("{} 만점", scale))
        .field("평균 평점", format!("{:.2} / {:.1}", result.gpa, scale.max_points()));
    if let Some(major) = result.major_gpa {
        report = report.field("전공 평점", format!("{:.2}", major));
    }
    Ok(report
        .field("백분위 환산", format!("{:.2}점", result.percent_score))
        .field("신청 학점", quantity(result.attempted_credits, 1, ""))
        .field("취득 학점", quantity(result.earned_credits, 1, ""))
        .field("P/NP 학점", quantity(result.pass_fail_credits, 1, ""))
        .with_table(table))
}
