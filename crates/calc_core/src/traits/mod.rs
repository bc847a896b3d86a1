//! Core traits shared by every calculator.
//!
//! - [`Calculate`]: input record → result record
//!
//! Categorical choices (repayment method, depreciation method, unit family)
//! are enums dispatched with `match`; no trait objects are involved.

pub mod calculate;

pub use calculate::Calculate;
