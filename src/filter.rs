use chrono::NaiveDate;
use serde::Serialize;
use std::fmt;

use crate::model::Dated;

/// An inclusive calendar date range `[start, end]`.
///
/// A range whose start lies after its end is valid and simply matches
/// nothing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// The smallest range covering every row, or `None` for an empty dataset.
    pub fn spanning<R: Dated>(rows: &[R]) -> Option<Self> {
        let start = rows.iter().map(Dated::date).min()?;
        let end = rows.iter().map(Dated::date).max()?;
        Some(Self { start, end })
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    pub fn is_empty(&self) -> bool {
        self.start > self.end
    }

    /// Fills in whichever bound is missing from `default`.
    pub fn with_bounds(default: Self, start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        Self {
            start: start.unwrap_or(default.start),
            end: end.unwrap_or(default.end),
        }
    }

    /// Returns the rows dated within the range, keeping their input order.
    pub fn filter<R: Dated + Clone>(&self, rows: &[R]) -> Vec<R> {
        if self.is_empty() {
            return Vec::new();
        }
        rows.iter()
            .filter(|row| self.contains(row.date()))
            .cloned()
            .collect()
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..={}", self.start, self.end)
    }
}
