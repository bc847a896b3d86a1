//! Grade point average (학점 계산).
//!
//! GPA = Σ(points × credits) / Σ credits over graded courses. F counts
//! toward the GPA credits with zero points; P/NP courses are excluded from
//! the GPA, and a P still counts toward earned credits.
//!
//! # Examples
//!
//! ```
//! use calc_core::traits::Calculate;
//! use calc_models::education::{Course, GradeInput, GradeScale, LetterGrade};
//!
//! let input = GradeInput::new(
//!     vec![
//!         Course::new("미적분학", 3.0, LetterGrade::APlus),
//!         Course::new("일반물리", 3.0, LetterGrade::B),
//!         Course::new("채플", 1.0, LetterGrade::Pass),
//!     ],
//!     GradeScale::Scale45,
//! );
//! let result = input.calculate().unwrap();
//! assert_eq!(result.gpa, 3.75);
//! assert_eq!(result.earned_credits, 7.0);
//! ```

use std::fmt;
use std::str::FromStr;

use calc_core::traits::Calculate;
use calc_core::types::validate::ensure_positive;
use calc_core::types::CalcError;

/// Maximum grade point of the scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GradeScale {
    /// 4.5 scale (no minus grades)
    #[default]
    Scale45,
    /// 4.3 scale
    Scale43,
    /// 4.0 scale
    Scale40,
}

impl GradeScale {
    /// Highest attainable points.
    pub fn max_points(&self) -> f64 {
        match self {
            GradeScale::Scale45 => 4.5,
            GradeScale::Scale43 => 4.3,
            GradeScale::Scale40 => 4.0,
        }
    }
}

impl fmt::Display for GradeScale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}", self.max_points())
    }
}

impl FromStr for GradeScale {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "4.5" | "45" => Ok(GradeScale::Scale45),
            "4.3" | "43" => Ok(GradeScale::Scale43),
            "4.0" | "4" | "40" => Ok(GradeScale::Scale40),
            other => Err(CalcError::invalid(
                "grade scale",
                format!("'{}' (expected 4.5, 4.3 or 4.0)", other),
            )),
        }
    }
}

/// Letter grade as printed on a transcript.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LetterGrade {
    /// A+
    APlus,
    /// A0 / A
    A,
    /// A-
    AMinus,
    /// B+
    BPlus,
    /// B0 / B
    B,
    /// B-
    BMinus,
    /// C+
    CPlus,
    /// C0 / C
    C,
    /// C-
    CMinus,
    /// D+
    DPlus,
    /// D0 / D
    D,
    /// D-
    DMinus,
    /// F
    F,
    /// Pass
    Pass,
    /// Non-pass
    NonPass,
}

impl LetterGrade {
    /// Whether this is a pass/non-pass mark.
    pub fn is_pass_fail(&self) -> bool {
        matches!(self, LetterGrade::Pass | LetterGrade::NonPass)
    }

    /// Whether the course's credits are earned.
    pub fn is_earned(&self) -> bool {
        !matches!(self, LetterGrade::F | LetterGrade::NonPass)
    }

    fn is_minus(&self) -> bool {
        matches!(
            self,
            LetterGrade::AMinus | LetterGrade::BMinus | LetterGrade::CMinus | LetterGrade::DMinus
        )
    }

    /// Grade points on `scale`; `None` for P/NP.
    ///
    /// # Errors
    /// Minus grades do not exist on the 4.5 scale.
    pub fn points(&self, scale: GradeScale) -> Result<Option<f64>, CalcError> {
        if self.is_pass_fail() {
            return Ok(None);
        }
        if scale == GradeScale::Scale45 && self.is_minus() {
            return Err(CalcError::invalid(
                "grade",
                format!("{} is not used on the 4.5 scale", self),
            ));
        }
        let points = match (scale, self) {
            (GradeScale::Scale45, LetterGrade::APlus) => 4.5,
            (GradeScale::Scale45, LetterGrade::BPlus) => 3.5,
            (GradeScale::Scale45, LetterGrade::CPlus) => 2.5,
            (GradeScale::Scale45, LetterGrade::DPlus) => 1.5,
            (GradeScale::Scale43, LetterGrade::APlus) => 4.3,
            (GradeScale::Scale40, LetterGrade::APlus) => 4.0,
            (_, LetterGrade::A) => 4.0,
            (_, LetterGrade::AMinus) => 3.7,
            (_, LetterGrade::BPlus) => 3.3,
            (_, LetterGrade::B) => 3.0,
            (_, LetterGrade::BMinus) => 2.7,
            (_, LetterGrade::CPlus) => 2.3,
            (_, LetterGrade::C) => 2.0,
            (_, LetterGrade::CMinus) => 1.7,
            (_, LetterGrade::DPlus) => 1.3,
            (_, LetterGrade::D) => 1.0,
            (_, LetterGrade::DMinus) => 0.7,
            _ => 0.0,
        };
        Ok(Some(points))
    }
}

impl fmt::Display for LetterGrade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            LetterGrade::APlus => "A+",
            LetterGrade::A => "A0",
            LetterGrade::AMinus => "A-",
            LetterGrade::BPlus => "B+",
            LetterGrade::B => "B0",
            LetterGrade::BMinus => "B-",
            LetterGrade::CPlus => "C+",
            LetterGrade::C => "C0",
            LetterGrade::CMinus => "C-",
            LetterGrade::DPlus => "D+",
            LetterGrade::D => "D0",
            LetterGrade::DMinus => "D-",
            LetterGrade::F => "F",
            LetterGrade::Pass => "P",
            LetterGrade::NonPass => "NP",
        };
        f.write_str(s)
    }
}

impl FromStr for LetterGrade {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "A+" => Ok(LetterGrade::APlus),
            "A0" | "A" => Ok(LetterGrade::A),
            "A-" => Ok(LetterGrade::AMinus),
            "B+" => Ok(LetterGrade::BPlus),
            "B0" | "B" => Ok(LetterGrade::B),
            "B-" => Ok(LetterGrade::BMinus),
            "C+" => Ok(LetterGrade::CPlus),
            "C0" | "C" => Ok(LetterGrade::C),
            "C-" => Ok(LetterGrade::CMinus),
            "D+" => Ok(LetterGrade::DPlus),
            "D0" | "D" => Ok(LetterGrade::D),
            "D-" => Ok(LetterGrade::DMinus),
            "F" => Ok(LetterGrade::F),
            "P" | "PASS" => Ok(LetterGrade::Pass),
            "NP" | "N" | "FAIL" => Ok(LetterGrade::NonPass),
            other => Err(CalcError::invalid("grade", format!("'{}' is not a letter grade", other))),
        }
    }
}

/// One course on the transcript.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Course {
    /// Course name
    pub name: String,
    /// Credit hours
    pub credits: f64,
    /// Grade received
    pub grade: LetterGrade,
    /// Whether the course counts toward the major GPA
    pub major: bool,
}

impl Course {
    /// A non-major course.
    pub fn new(name: impl Into<String>, credits: f64, grade: LetterGrade) -> Self {
        Self {
            name: name.into(),
            credits,
            grade,
            major: false,
        }
    }

    /// Marks the course as a major course.
    pub fn major(mut self) -> Self {
        self.major = true;
        self
    }
}

impl FromStr for Course {
    type Err = CalcError;

    /// Parses `name:credits:grade[:major]`, e.g. `자료구조:3:A+:major`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(':').map(str::trim).collect();
        let (name, credits, grade, major) = match parts.as_slice() {
            [name, credits, grade] => (*name, *credits, *grade, false),
            [name, credits, grade, flag] if flag.eq_ignore_ascii_case("major") || *flag == "전공" => {
                (*name, *credits, *grade, true)
            }
            _ => {
                return Err(CalcError::Parse(format!(
                    "'{}': expected name:credits:grade[:major]",
                    s
                )))
            }
        };
        let credits: f64 = credits
            .parse()
            .map_err(|_| CalcError::Parse(format!("'{}' is not a credit count", credits)))?;
        Ok(Course {
            name: name.to_string(),
            credits,
            grade: grade.parse()?,
            major,
        })
    }
}

/// Transcript and scale.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GradeInput {
    /// Courses taken
    pub courses: Vec<Course>,
    /// Grading scale
    pub scale: GradeScale,
}

impl GradeInput {
    /// Creates an input record.
    pub fn new(courses: Vec<Course>, scale: GradeScale) -> Self {
        Self { courses, scale }
    }
}

/// GPA and credit totals.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GradeResult {
    /// Grading scale
    pub scale: GradeScale,
    /// Overall GPA, two decimals
    pub gpa: f64,
    /// GPA over major courses, when any are graded
    pub major_gpa: Option<f64>,
    /// GPA as a share of the scale maximum, in points out of 100
    pub percent_score: f64,
    /// Credits included in the GPA (F included)
    pub gpa_credits: f64,
    /// Credits earned (F and NP excluded, P included)
    pub earned_credits: f64,
    /// Credits taken pass/non-pass
    pub pass_fail_credits: f64,
    /// Total credits attempted
    pub attempted_credits: f64,
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

impl Calculate for GradeInput {
    type Output = GradeResult;

    fn calculate(&self) -> Result<GradeResult, CalcError> {
        if self.courses.is_empty() {
            return Err(CalcError::MissingField("courses"));
        }

        let mut weighted = 0.0;
        let mut gpa_credits = 0.0;
        let mut major_weighted = 0.0;
        let mut major_credits = 0.0;
        let mut earned_credits = 0.0;
        let mut pass_fail_credits = 0.0;
        let mut attempted_credits = 0.0;

        for course in &self.courses {
            let credits = ensure_positive("credits", course.credits)?;
            attempted_credits += credits;
            if course.grade.is_earned() {
                earned_credits += credits;
            }
            match course.grade.points(self.scale)? {
                Some(points) => {
                    weighted += points * credits;
                    gpa_credits += credits;
                    if course.major {
                        major_weighted += points * credits;
                        major_credits += credits;
                    }
                }
                None => pass_fail_credits += credits,
            }
        }

        if gpa_credits == 0.0 {
            return Err(CalcError::domain("at least one graded course is required"));
        }

        let gpa = round2(weighted / gpa_credits);
        let major_gpa = (major_credits > 0.0).then(|| round2(major_weighted / major_credits));

        Ok(GradeResult {
            scale: self.scale,
            gpa,
            major_gpa,
            percent_score: round2(gpa / self.scale.max_points() * 100.0),
            gpa_credits,
            earned_credits,
            pass_fail_credits,
            attempted_credits,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_f_counts_and_pass_excluded() {
        let input = GradeInput::new(
            vec![
                Course::new("Algorithms", 3.0, LetterGrade::A),
                Course::new("Statistics", 3.0, LetterGrade::F),
                Course::new("Seminar", 2.0, LetterGrade::Pass),
                Course::new("Volunteering", 1.0, LetterGrade::NonPass),
            ],
            GradeScale::Scale45,
        );
        let result = input.calculate().unwrap();
        assert_eq!(result.gpa, 2.0);
        assert_eq!(result.gpa_credits, 6.0);
        assert_eq!(result.earned_credits, 5.0);
        assert_eq!(result.pass_fail_credits, 3.0);
        assert_eq!(result.attempted_credits, 9.0);
        assert_eq!(result.major_gpa, None);
    }

    #[test]
    fn test_major_gpa() {
        let input = GradeInput::new(
            vec![
                Course::new("Data Structures", 3.0, LetterGrade::APlus).major(),
                Course::new("Operating Systems", 3.0, LetterGrade::BPlus).major(),
                Course::new("Writing", 2.0, LetterGrade::C),
            ],
            GradeScale::Scale45,
        );
        let result = input.calculate().unwrap();
        assert_eq!(result.major_gpa, Some(4.0));
        // (13.5 + 10.5 + 4) / 8
        assert_eq!(result.gpa, 3.5);
        assert_eq!(result.percent_score, 77.78);
    }

    #[test]
    fn test_scale_43_minus_grades() {
        let input = GradeInput::new(
            vec![
                Course::new("Physics", 3.0, LetterGrade::APlus),
                Course::new("Chemistry", 3.0, LetterGrade::AMinus),
            ],
            GradeScale::Scale43,
        );
        assert_eq!(input.calculate().unwrap().gpa, 4.0);
    }

    #[test]
    fn test_scale_40_caps_a_plus() {
        assert_eq!(LetterGrade::APlus.points(GradeScale::Scale40).unwrap(), Some(4.0));
        assert_eq!(LetterGrade::DMinus.points(GradeScale::Scale40).unwrap(), Some(0.7));
    }

    #[test]
    fn test_minus_rejected_on_45_scale() {
        let input = GradeInput::new(
            vec![Course::new("Physics", 3.0, LetterGrade::BMinus)],
            GradeScale::Scale45,
        );
        assert!(matches!(input.calculate(), Err(CalcError::InvalidInput { .. })));
    }

    #[test]
    fn test_requires_graded_course() {
        let empty = GradeInput::new(Vec::new(), GradeScale::Scale45);
        assert_eq!(empty.calculate(), Err(CalcError::MissingField("courses")));

        let pass_only = GradeInput::new(
            vec![Course::new("Chapel", 1.0, LetterGrade::Pass)],
            GradeScale::Scale45,
        );
        assert!(matches!(pass_only.calculate(), Err(CalcError::DomainViolation(_))));
    }

    #[test]
    fn test_zero_credits_rejected() {
        let input = GradeInput::new(
            vec![Course::new("Lab", 0.0, LetterGrade::A)],
            GradeScale::Scale45,
        );
        assert!(matches!(input.calculate(), Err(CalcError::NonPositive { .. })));
    }

    #[test]
    fn test_parse_course() {
        let course: Course = "자료구조:3:A+:major".parse().unwrap();
        assert_eq!(course.name, "자료구조");
        assert_eq!(course.credits, 3.0);
        assert_eq!(course.grade, LetterGrade::APlus);
        assert!(course.major);

        let plain: Course = "English:2:b0".parse().unwrap();
        assert_eq!(plain.grade, LetterGrade::B);
        assert!(!plain.major);

        assert!("English:two:B".parse::<Course>().is_err());
        assert!("English".parse::<Course>().is_err());
        assert!("English:2:Z".parse::<Course>().is_err());
    }
}
