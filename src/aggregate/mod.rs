//! Usage aggregation.
//!
//! Every transform is a pure function over an explicit slice of filtered
//! rows and returns an owned summary table. Empty input yields empty tables
//! and zero totals.

pub mod category;
pub mod hourly;
pub mod monthly;
pub mod totals;
pub mod types;
pub mod utility;

#[cfg(test)]
pub(crate) mod test_support;

pub use category::{seasonal_summary, weatherly_summary};
pub use hourly::hourly_summary;
pub use monthly::{monthly_summary, peak_month};
pub use totals::{
    holiday_summary, peak_year, ride_totals, workingday_summary, yearly_summary,
};
