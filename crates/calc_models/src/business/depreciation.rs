//! Fixed-asset depreciation (감가상각).
//!
//! Wraps [`DepreciationSchedule`] with an asset name and acquisition year
//! so each row carries the calendar year it belongs to. The first row is
//! the acquisition year.
//!
//! # Examples
//!
//! ```
//! use calc_core::math::DepreciationMethod;
//! use calc_core::traits::Calculate;
//! use calc_models::business::AssetDepreciationInput;
//!
//! let input = AssetDepreciationInput::new(
//!     "업무용 차량",
//!     30_000_000.0,
//!     3_000_000.0,
//!     5,
//!     DepreciationMethod::StraightLine,
//!     2024,
//! );
//! let result = input.calculate().unwrap();
//! assert_eq!(result.rows[0].calendar_year, 2024);
//! assert_eq!(result.rows[4].calendar_year, 2028);
//! assert_eq!(result.rows[0].depreciation, 5_400_000.0);
//! ```

use calc_core::math::{DepreciationMethod, DepreciationSchedule};
use calc_core::traits::Calculate;
use calc_core::types::CalcError;

/// Asset and depreciation parameters.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AssetDepreciationInput {
    /// Asset description
    pub asset_name: String,
    /// Acquisition cost
    pub acquisition_cost: f64,
    /// Residual value at the end of the useful life
    pub salvage_value: f64,
    /// Useful life in years
    pub useful_life_years: u32,
    /// Depreciation method
    pub method: DepreciationMethod,
    /// Calendar year of acquisition
    pub acquisition_year: i32,
}

impl AssetDepreciationInput {
    /// Creates an input record.
    pub fn new(
        asset_name: impl Into<String>,
        acquisition_cost: f64,
        salvage_value: f64,
        useful_life_years: u32,
        method: DepreciationMethod,
        acquisition_year: i32,
    ) -> Self {
        Self {
            asset_name: asset_name.into(),
            acquisition_cost,
            salvage_value,
            useful_life_years,
            method,
            acquisition_year,
        }
    }
}

/// One calendar year of the schedule.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AssetDepreciationRow {
    /// Calendar year
    pub calendar_year: i32,
    /// Expense for the year
    pub depreciation: f64,
    /// Accumulated depreciation at year end
    pub accumulated: f64,
    /// Book value at year end
    pub book_value: f64,
}

/// Schedule labelled by calendar year.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AssetDepreciationResult {
    /// Asset description
    pub asset_name: String,
    /// Method used
    pub method: DepreciationMethod,
    /// Depreciable amount (cost − salvage)
    pub depreciable_amount: f64,
    /// Declining-balance rate, for the declining methods
    pub rate: Option<f64>,
    /// Yearly rows
    pub rows: Vec<AssetDepreciationRow>,
    /// Sum of all yearly expenses
    pub total_depreciation: f64,
}

impl Calculate for AssetDepreciationInput {
    type Output = AssetDepreciationResult;

    fn calculate(&self) -> Result<AssetDepreciationResult, CalcError> {
        if self.asset_name.trim().is_empty() {
            return Err(CalcError::MissingField("asset name"));
        }
        if !(1..=9999).contains(&self.acquisition_year) {
            return Err(CalcError::invalid(
                "acquisition year",
                format!("{} is outside 1..=9999", self.acquisition_year),
            ));
        }
        let schedule = DepreciationSchedule::generate(
            self.acquisition_cost,
            self.salvage_value,
            self.useful_life_years,
            self.method,
        )?;

        let rows = schedule
            .rows()
            .iter()
            .map(|row| AssetDepreciationRow {
                calendar_year: self.acquisition_year + row.year as i32 - 1,
                depreciation: row.depreciation,
                accumulated: row.accumulated,
                book_value: row.book_value,
            })
            .collect();

        Ok(AssetDepreciationResult {
            asset_name: self.asset_name.trim().to_string(),
            method: self.method,
            depreciable_amount: self.acquisition_cost - self.salvage_value,
            rate: schedule.rate(),
            rows,
            total_depreciation: schedule.total_depreciation(),
        })
    }
}

/// First-year expense under every method, for side-by-side comparison.
pub fn compare_first_year(
    acquisition_cost: f64,
    salvage_value: f64,
    useful_life_years: u32,
) -> Result<Vec<(DepreciationMethod, f64)>, CalcError> {
    DepreciationMethod::ALL
        .iter()
        .filter(|method| **method != DepreciationMethod::FixedRate || salvage_value > 0.0)
        .map(|&method| {
            let schedule = DepreciationSchedule::generate(
                acquisition_cost,
                salvage_value,
                useful_life_years,
                method,
            )?;
            let first = schedule.rows().first().map_or(0.0, |row| row.depreciation);
            Ok((method, first))
        })
        .collect()
}
