//! Output formatting and persistence for dashboard views.
//!
//! Supports pretty-printing, JSON serialization, and CSV export of every
//! summary table.

use anyhow::Result;
use serde::Serialize;
use tracing::{debug, info};

use crate::dashboard::DashboardView;
use csv::WriterBuilder;
use std::fs::File;
use std::path::{Path, PathBuf};

/// Logs a view using Rust's debug pretty-print format.
pub fn print_pretty(view: &DashboardView) {
    debug!("{:#?}", view);
}

/// Logs a view as pretty-printed JSON.
pub fn print_json(view: &DashboardView, include_rows: bool) -> Result<()> {
    info!("{}", serde_json::to_string_pretty(&view.to_json(include_rows)?)?);
    Ok(())
}

/// Logs the headline numbers and each table one row per line.
pub fn print_summary(view: &DashboardView) {
    info!(
        range = %view.range,
        total_rides = view.totals.total_rides,
        casual_rides = view.totals.casual_rides,
        registered_rides = view.totals.registered_rides,
        "Ride totals"
    );
    match &view.peak_month {
        Some(month) => info!(yearmonth = %month.yearmonth, total_rides = month.total_rides, "Peak month"),
        None => info!("No rides in range"),
    }
    if let Some(year) = &view.peak_year {
        info!(year = year.year, total_rides = year.total_rides, "Peak year");
    }

    for m in &view.monthly {
        info!(
            yearmonth = %m.yearmonth,
            casual_rides = m.casual_rides,
            registered_rides = m.registered_rides,
            total_rides = m.total_rides,
            "Monthly"
        );
    }
    for s in &view.seasonal {
        info!(season = %s.season, type_of_rides = ?s.type_of_rides, count_rides = s.count_rides, "Seasonal");
    }
    for w in &view.weatherly {
        info!(weather = %w.weather, type_of_rides = ?w.type_of_rides, count_rides = w.count_rides, "Weather");
    }
    for h in &view.hourly {
        info!(
            hour = h.hour,
            casual_rides = h.casual_rides,
            registered_rides = h.registered_rides,
            total_rides = h.total_rides,
            "Hourly"
        );
    }
}

/// Writes `rows` to a CSV file at `path` with a header row, replacing any
/// existing file.
pub fn write_table<T: Serialize>(path: &Path, rows: &[T]) -> Result<()> {
    debug!(path = %path.display(), rows = rows.len(), "Writing CSV table");

    let file = File::create(path)?;
    let mut writer = WriterBuilder::new().has_headers(true).from_writer(file);

    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;

    Ok(())
}

/// Writes every summary table of `view` into `dir`, creating it if needed.
/// Returns the paths written.
pub fn export_view(dir: &Path, view: &DashboardView) -> Result<Vec<PathBuf>> {
    std::fs::create_dir_all(dir)?;

    let mut written = Vec::new();

    macro_rules! export {
        ($name:expr, $rows:expr) => {
            let path = dir.join($name);
            write_table(&path, $rows)?;
            written.push(path);
        };
    }

    export!("monthly.csv", &view.monthly);
    export!("seasonal.csv", &view.seasonal);
    export!("weatherly.csv", &view.weatherly);
    export!("hourly.csv", &view.hourly);
    export!("yearly.csv", &view.yearly);
    export!("holiday.csv", &view.holiday);
    export!("workingday.csv", &view.workingday);

    info!(dir = %dir.display(), tables = written.len(), "Summary tables exported");
    Ok(written)
}
