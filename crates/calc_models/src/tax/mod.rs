//! Korean tax calculators.
//!
//! - [`income`]: comprehensive income tax (종합소득세) with an optional
//!   salary mode
//! - [`inheritance`]: inheritance tax (상속세)
//! - [`gift`]: gift tax (증여세)
//! - [`property`]: annual property tax on housing (재산세)
//!
//! Rate tables live in [`tables`] as immutable data; the progressive
//! evaluation is `calc_core::math::brackets`.

pub mod gift;
pub mod income;
pub mod inheritance;
pub mod property;
pub mod tables;

pub use gift::{GiftTaxInput, GiftTaxResult, Relationship};
pub use income::{IncomeBasis, IncomeTaxInput, IncomeTaxResult};
pub use inheritance::{InheritanceTaxInput, InheritanceTaxResult};
pub use property::{PropertyTaxInput, PropertyTaxResult};

/// Credit for filing an inheritance or gift tax return on time.
pub const FILING_CREDIT_RATE: f64 = 0.03;
