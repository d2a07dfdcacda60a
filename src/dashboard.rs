//! One filtered view of both datasets with every derived table.

use serde::Serialize;
use std::collections::HashMap;
use tracing::debug;

use crate::aggregate::types::{
    DayTypeSummary, HourlySummary, MonthlySummary, RideTotals, SeasonalSummary,
    WeatherlySummary, YearlySummary,
};
use crate::aggregate::{
    holiday_summary, hourly_summary, monthly_summary, peak_month, peak_year, ride_totals,
    seasonal_summary, weatherly_summary, workingday_summary, yearly_summary,
};
use crate::config::SourceConfig;
use crate::filter::DateRange;
use crate::loader::{DatasetError, load_day_records, load_hour_records};
use crate::model::{DayRecord, HourRecord};

/// The daily and hourly datasets as loaded, before any filtering.
#[derive(Debug, Clone, Default)]
pub struct Datasets {
    pub days: Vec<DayRecord>,
    pub hours: Vec<HourRecord>,
}

impl Datasets {
    pub async fn load(config: &SourceConfig) -> Result<Self, DatasetError> {
        let days = load_day_records(&config.day_source).await?;
        let hours = load_hour_records(&config.hour_source).await?;
        debug!(days = days.len(), hours = hours.len(), "Datasets loaded");
        Ok(Self { days, hours })
    }

    /// The default filter: first to last day of the daily dataset.
    pub fn full_range(&self) -> Option<DateRange> {
        DateRange::spanning(&self.days)
    }
}

/// Everything the dashboard shows for one date range.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardView {
    pub range: DateRange,
    pub totals: RideTotals,
    pub peak_month: Option<MonthlySummary>,
    pub peak_year: Option<YearlySummary>,
    pub monthly: Vec<MonthlySummary>,
    pub seasonal: Vec<SeasonalSummary>,
    pub weatherly: Vec<WeatherlySummary>,
    pub hourly: Vec<HourlySummary>,
    pub yearly: Vec<YearlySummary>,
    pub holiday: Vec<DayTypeSummary>,
    pub workingday: Vec<DayTypeSummary>,
    #[serde(skip)]
    pub days: Vec<DayRecord>,
    #[serde(skip)]
    pub hours: Vec<HourRecord>,
}

impl DashboardView {
    /// Filters both datasets with the same range and derives every table.
    pub fn build(data: &Datasets, range: DateRange) -> Self {
        let days = range.filter(&data.days);
        let hours = range.filter(&data.hours);
        debug!(%range, days = days.len(), hours = hours.len(), "Building view");

        let monthly = monthly_summary(&days);
        let yearly = yearly_summary(&days);

        Self {
            range,
            totals: ride_totals(&days),
            peak_month: peak_month(&monthly).cloned(),
            peak_year: peak_year(&yearly).cloned(),
            seasonal: seasonal_summary(&days),
            weatherly: weatherly_summary(&days),
            hourly: hourly_summary(&hours),
            holiday: holiday_summary(&days),
            workingday: workingday_summary(&days),
            monthly,
            yearly,
            days,
            hours,
        }
    }

    /// JSON form of the view; the filtered raw rows are only included on request.
    pub fn to_json(&self, include_rows: bool) -> serde_json::Result<serde_json::Value> {
        let mut value = serde_json::to_value(self)?;
        if include_rows {
            if let serde_json::Value::Object(map) = &mut value {
                map.insert("days".to_string(), serde_json::to_value(&self.days)?);
                map.insert("hours".to_string(), serde_json::to_value(&self.hours)?);
            }
        }
        Ok(value)
    }
}

/// Owns the datasets and memoizes views by range.
pub struct Dashboard {
    data: Datasets,
    views: HashMap<DateRange, DashboardView>,
}

impl Dashboard {
    pub fn new(data: Datasets) -> Self {
        Self {
            data,
            views: HashMap::new(),
        }
    }

    pub fn datasets(&self) -> &Datasets {
        &self.data
    }

    pub fn view(&mut self, range: DateRange) -> &DashboardView {
        self.views
            .entry(range)
            .or_insert_with(|| DashboardView::build(&self.data, range))
    }

    pub fn cached_views(&self) -> usize {
        self.views.len()
    }
}
