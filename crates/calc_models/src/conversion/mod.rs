//! Unit conversion calculator.

pub mod unit_conversion;

pub use unit_conversion::{Conversion, UnitConversionInput, UnitConversionResult};
