//! Time calculators.
//!
//! - [`time_difference`]: city-to-city time conversion and elapsed duration

pub mod time_difference;

pub use time_difference::{
    find_city, world_clock, City, DurationInput, TimeDifferenceInput, TimeDifferenceResult, CITIES,
};
