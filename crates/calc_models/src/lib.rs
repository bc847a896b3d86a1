//! # Calc Models (L2: Calculators)
//!
//! One module per household calculator. Every calculator is an input
//! record implementing [`calc_core::traits::Calculate`] and a result
//! record; nothing is cached between calls.
//!
//! | Module | Calculators |
//! |---|---|
//! | [`health`] | BMI, daily calories |
//! | [`loans`] | mortgage, car loan, interim payment interest |
//! | [`tax`] | income, inheritance, gift and property tax |
//! | [`real_estate`] | jeonse/monthly rent conversion, registration cost |
//! | [`fx`] | international transfer fees |
//! | [`business`] | asset depreciation, scaffolding estimate |
//! | [`education`] | grade point average |
//! | [`time`] | world time difference, elapsed duration |
//! | [`conversion`] | unit conversion |
//!
//! ## Design Principles
//!
//! - **Validate first**: every field is checked before any formula runs
//! - **Enum-based choices**: methods, categories and relationships are
//!   enums parsed from Korean or English names
//! - **Static tables**: rate tables and fee schedules are immutable data
//!
//! ## Example
//!
//! ```
//! use calc_core::traits::Calculate;
//! use calc_models::tax::IncomeTaxInput;
//!
//! let result = IncomeTaxInput::taxable(50_000_000.0).calculate().unwrap();
//! assert_eq!(result.calculated_tax, 6_780_000.0);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod business;
pub mod conversion;
pub mod education;
pub mod fx;
pub mod health;
pub mod loans;
pub mod real_estate;
pub mod tax;
pub mod time;
