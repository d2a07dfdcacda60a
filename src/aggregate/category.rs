//! Seasonal and weather summaries, reshaped to long form so one grouped bar
//! chart can split casual and registered rides per category.

use std::collections::BTreeMap;

use crate::aggregate::types::{RideTotals, RideType, SeasonalSummary, WeatherlySummary};
use crate::aggregate::utility::group_totals;
use crate::model::DayRecord;

/// Sums per season and melts into (season, ride type) rows in season order.
pub fn seasonal_summary(rows: &[DayRecord]) -> Vec<SeasonalSummary> {
    melt(group_totals(rows, |row| row.season), |season, type_of_rides, count_rides| {
        SeasonalSummary {
            season,
            type_of_rides,
            count_rides,
        }
    })
}

/// Sums per weather situation and melts into (weather, ride type) rows in
/// severity order.
pub fn weatherly_summary(rows: &[DayRecord]) -> Vec<WeatherlySummary> {
    melt(group_totals(rows, |row| row.weather), |weather, type_of_rides, count_rides| {
        WeatherlySummary {
            weather,
            type_of_rides,
            count_rides,
        }
    })
}

/// Emits casual then registered for each present category. `total_rides`
/// is dropped; categories with no rows never appear.
fn melt<K, T, F>(groups: BTreeMap<K, RideTotals>, make_row: F) -> Vec<T>
where
    F: Fn(K, RideType, u64) -> T,
    K: Copy,
{
    groups
        .into_iter()
        .flat_map(|(category, totals)| {
            [
                make_row(category, RideType::Casual, totals.casual_rides),
                make_row(category, RideType::Registered, totals.registered_rides),
            ]
        })
        .collect()
}
