use crate::aggregate::types::{DayTypeSummary, RideTotals, YearlySummary};
use crate::aggregate::utility::{first_max_by_key, group_totals};
use crate::model::DayRecord;

/// Total, casual and registered rides over the daily rows.
pub fn ride_totals(rows: &[DayRecord]) -> RideTotals {
    let mut totals = RideTotals::default();
    for row in rows {
        totals.add(row.casual, row.registered, row.count);
    }
    totals
}

pub fn yearly_summary(rows: &[DayRecord]) -> Vec<YearlySummary> {
    group_totals(rows, |row| row.year)
        .into_iter()
        .map(|(year, totals)| YearlySummary {
            year,
            total_rides: totals.total_rides,
        })
        .collect()
}

/// The year with the most rides; the earliest one wins a tie.
pub fn peak_year(years: &[YearlySummary]) -> Option<&YearlySummary> {
    first_max_by_key(years, |year| year.total_rides)
}

/// Rides on non-holidays vs. holidays.
pub fn holiday_summary(rows: &[DayRecord]) -> Vec<DayTypeSummary> {
    day_type_summary(rows, |row| row.holiday)
}

/// Rides on non-working days vs. working days.
pub fn workingday_summary(rows: &[DayRecord]) -> Vec<DayTypeSummary> {
    day_type_summary(rows, |row| row.workingday)
}

fn day_type_summary<F>(rows: &[DayRecord], flag: F) -> Vec<DayTypeSummary>
where
    F: Fn(&DayRecord) -> bool,
{
    group_totals(rows, flag)
        .into_iter()
        .map(|(flag, totals)| DayTypeSummary {
            flag,
            total_rides: totals.total_rides,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregate::test_support::{date, day};

    #[test]
    fn test_ride_totals() {
        let rows = vec![day(date(2011, 1, 1), 10, 20), day(date(2011, 1, 2), 5, 5)];
        let totals = ride_totals(&rows);

        assert_eq!(totals.total_rides, 40);
        assert_eq!(totals.casual_rides, 15);
        assert_eq!(totals.registered_rides, 25);
    }

    #[test]
    fn test_ride_totals_empty_is_zero() {
        assert_eq!(ride_totals(&[]), RideTotals::default());
    }

    #[test]
    fn test_yearly_summary_and_peak_year() {
        let rows = vec![
            day(date(2012, 5, 1), 100, 100),
            day(date(2011, 5, 1), 10, 10),
            day(date(2012, 6, 1), 1, 1),
        ];
        let years = yearly_summary(&rows);

        assert_eq!(
            years,
            vec![
                YearlySummary {
                    year: 2011,
                    total_rides: 20,
                },
                YearlySummary {
                    year: 2012,
                    total_rides: 202,
                },
            ]
        );
        assert_eq!(peak_year(&years).unwrap().year, 2012);
    }

    #[test]
    fn test_peak_year_tie_prefers_earliest() {
        let rows = vec![day(date(2011, 1, 1), 5, 5), day(date(2012, 1, 1), 5, 5)];
        let years = yearly_summary(&rows);
        assert_eq!(peak_year(&years).unwrap().year, 2011);
    }

    #[test]
    fn test_day_type_summaries() {
        let mut holiday = day(date(2011, 7, 4), 30, 10);
        holiday.holiday = true;
        holiday.workingday = false;
        let mut weekend = day(date(2011, 7, 2), 20, 20);
        weekend.workingday = false;
        let weekday = day(date(2011, 7, 5), 5, 50);
        let rows = vec![holiday, weekend, weekday];

        assert_eq!(
            holiday_summary(&rows),
            vec![
                DayTypeSummary {
                    flag: false,
                    total_rides: 95,
                },
                DayTypeSummary {
                    flag: true,
                    total_rides: 40,
                },
            ]
        );
        assert_eq!(
            workingday_summary(&rows),
            vec![
                DayTypeSummary {
                    flag: false,
                    total_rides: 80,
                },
                DayTypeSummary {
                    flag: true,
                    total_rides: 55,
                },
            ]
        );
    }
}
