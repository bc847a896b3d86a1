//! Real-estate calculators.
//!
//! - [`jeonse`]: jeonse ↔ monthly rent conversion (전월세 전환)
//! - [`registration`]: acquisition taxes and costs of registering a purchase

pub mod jeonse;
pub mod registration;

pub use jeonse::{JeonseInput, JeonseMode, JeonseResult};
pub use registration::{PropertyKind, Region, RegistrationInput, RegistrationResult};
