//! Foreign exchange calculators.
//!
//! - [`transfer`]: outbound international remittance cost by bank

pub mod transfer;

pub use transfer::{Bank, BankFeeSchedule, TransferInput, TransferResult};
