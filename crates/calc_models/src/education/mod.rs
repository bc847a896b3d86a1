//! Education calculators.

pub mod grade;

pub use grade::{Course, GradeInput, GradeResult, GradeScale, LetterGrade};
