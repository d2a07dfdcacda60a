//! Summary tables produced by the aggregation transforms.

use chrono::NaiveDate;
use serde::Serialize;

use crate::model::{Season, Weather};

/// Running sums of the three ride counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RideTotals {
    pub total_rides: u64,
    pub casual_rides: u64,
    pub registered_rides: u64,
}

impl RideTotals {
    pub fn add(&mut self, casual: u64, registered: u64, count: u64) {
        self.casual_rides += casual;
        self.registered_rides += registered;
        self.total_rides += count;
    }
}

/// Which rider population a long-form row counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum RideType {
    #[serde(rename = "casual_rides")]
    Casual,
    #[serde(rename = "registered_rides")]
    Registered,
}

/// Ride sums for one calendar month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthlySummary {
    #[serde(skip)]
    pub month_start: NaiveDate,
    pub yearmonth: String,
    pub casual_rides: u64,
    pub registered_rides: u64,
    pub total_rides: u64,
}

/// Long-form seasonal row: one per (season, ride type).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SeasonalSummary {
    pub season: Season,
    pub type_of_rides: RideType,
    pub count_rides: u64,
}

/// Long-form weather row: one per (weather, ride type).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeatherlySummary {
    pub weather: Weather,
    pub type_of_rides: RideType,
    pub count_rides: u64,
}

/// Ride sums for one hour of the day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HourlySummary {
    pub hour: u8,
    pub casual_rides: u64,
    pub registered_rides: u64,
    pub total_rides: u64,
}

/// Total rides for one year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct YearlySummary {
    pub year: i32,
    pub total_rides: u64,
}

/// Total rides on days where a boolean flag (holiday, working day) has a given value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayTypeSummary {
    pub flag: bool,
    pub total_rides: u64,
}
