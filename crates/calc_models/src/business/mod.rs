//! Business calculators.
//!
//! - [`depreciation`]: fixed-asset depreciation by calendar year
//! - [`scaffolding`]: scaffolding installation and rental estimate

pub mod depreciation;
pub mod scaffolding;

pub use depreciation::{
    compare_first_year, AssetDepreciationInput, AssetDepreciationResult, AssetDepreciationRow,
};
pub use scaffolding::{ScaffoldType, ScaffoldingInput, ScaffoldingResult};
