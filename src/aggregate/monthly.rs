use chrono::{Datelike, Days};

use crate::aggregate::types::MonthlySummary;
use crate::aggregate::utility::{first_max_by_key, group_totals};
use crate::model::DayRecord;

/// Groups daily rows by calendar month in chronological order.
///
/// Months are labelled `%b-%y` (e.g. `Jan-23`). A month only partly covered
/// by the rows is summed over the rows present.
pub fn monthly_summary(rows: &[DayRecord]) -> Vec<MonthlySummary> {
    group_totals(rows, |row| row.date - Days::new(u64::from(row.date.day0())))
        .into_iter()
        .map(|(month_start, totals)| MonthlySummary {
            month_start,
            yearmonth: month_start.format("%b-%y").to_string(),
            casual_rides: totals.casual_rides,
            registered_rides: totals.registered_rides,
            total_rides: totals.total_rides,
        })
        .collect()
}

/// The month with the most rides; the earliest one wins a tie.
pub fn peak_month(months: &[MonthlySummary]) -> Option<&MonthlySummary> {
    first_max_by_key(months, |month| month.total_rides)
}
