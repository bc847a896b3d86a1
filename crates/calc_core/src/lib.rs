//! # calc_core: Foundation for the household calculators
//!
//! ## Layer 1 (Foundation) Role
//!
//! calc_core is the bottom layer of the workspace, providing:
//! - Progressive tax bracket evaluation (`math::brackets`)
//! - Loan amortization schedules with optional grace periods (`math::amortization`)
//! - Depreciation schedules (`math::depreciation`)
//! - Simple day-count interest (`math::interest`)
//! - Unit conversion tables and the converter (`units`)
//! - The `Calculate` contract every calculator implements (`traits`)
//! - Time types: `Date`, `LocalDateTime`, `DayCount` (`types::time`)
//! - Currency types and the static exchange-rate table (`types::currency`)
//! - Formatted numeric input and won display helpers (`types::number`, `types::money`)
//! - Error types: `CalcError`, `DateError`, `CurrencyError` (`types::error`)
//!
//! ## Minimal Dependencies
//!
//! Layer 1 has no dependencies on other workspace crates:
//! - chrono: Date arithmetic
//! - thiserror: Error derivation
//! - tracing: Debug events when falling back to built-in rates
//! - serde: Serialisation support (optional)
//!
//! ## Usage Examples
//!
//! ```rust
//! use calc_core::math::{AmortizationSchedule, BracketTable, RepaymentMethod};
//! use calc_core::types::{money::format_krw, Currency, FormattedNumber};
//!
//! // Input with thousands separators
//! let principal = FormattedNumber::parse("300,000,000").unwrap().value();
//!
//! // 30-year annuity at 3.5%
//! let schedule = AmortizationSchedule::generate(
//!     principal,
//!     0.035 / 12.0,
//!     360,
//!     RepaymentMethod::EqualPayment,
//! )
//! .unwrap();
//! assert_eq!(format_krw(schedule.first_payment()), "1,347,134원");
//!
//! // Progressive tax
//! let table = BracketTable::progressive(&[(Some(12_000_000.0), 0.06), (None, 0.15)]).unwrap();
//! assert!((table.tax(20_000_000.0) - 1_920_000.0).abs() < 1e-6);
//!
//! // Currency information
//! assert_eq!(Currency::USD.code(), "USD");
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialisation for inputs, schedules and value types

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod math;
pub mod traits;
pub mod types;
pub mod units;
