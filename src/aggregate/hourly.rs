use std::collections::BTreeMap;

use crate::aggregate::types::{HourlySummary, RideTotals};
use crate::model::HourRecord;

/// Sums hourly rows per hour of day, ascending by hour. Stays wide.
pub fn hourly_summary(rows: &[HourRecord]) -> Vec<HourlySummary> {
    let mut hours: BTreeMap<u8, RideTotals> = BTreeMap::new();
    for row in rows {
        hours
            .entry(row.hour)
            .or_default()
            .add(row.casual, row.registered, row.count);
    }

    hours
        .into_iter()
        .map(|(hour, totals)| HourlySummary {
            hour,
            casual_rides: totals.casual_rides,
            registered_rides: totals.registered_rides,
            total_rides: totals.total_rides,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregate::test_support::{date, hour};

    #[test]
    fn test_hours_sum_across_days() {
        let rows = vec![
            hour(date(2011, 1, 1), 17, 10, 90),
            hour(date(2011, 1, 1), 8, 2, 50),
            hour(date(2011, 1, 2), 17, 5, 45),
        ];
        let summary = hourly_summary(&rows);

        assert_eq!(
            summary,
            vec![
                HourlySummary {
                    hour: 8,
                    casual_rides: 2,
                    registered_rides: 50,
                    total_rides: 52,
                },
                HourlySummary {
                    hour: 17,
                    casual_rides: 15,
                    registered_rides: 135,
                    total_rides: 150,
                },
            ]
        );
    }

    #[test]
    fn test_full_day_yields_24_rows() {
        let rows: Vec<_> = (0..24).rev().map(|h| hour(date(2012, 7, 4), h, 1, 1)).collect();
        let summary = hourly_summary(&rows);

        assert_eq!(summary.len(), 24);
        assert!(summary.windows(2).all(|w| w[0].hour < w[1].hour));
    }

    #[test]
    fn test_empty_input() {
        assert!(hourly_summary(&[]).is_empty());
    }
}
