//! CLI entry point for the bike-share usage dashboard.
//!
//! Loads the daily and hourly datasets, applies a date range, and prints or
//! exports the derived summary tables.

use anyhow::{Context, Result};
use bikeshare_dashboard::{
    config::SourceConfig,
    dashboard::{Dashboard, Datasets},
    filter::DateRange,
    model::parse_date,
    output::{export_view, print_json, print_pretty, print_summary},
};
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

#[derive(Parser)]
#[command(name = "bikeshare_dashboard")]
#[command(about = "Summarize daily and hourly bike-share usage", long_about = None)]
struct Cli {
    /// JSON file with `day_source` / `hour_source` keys
    #[arg(long, global = true)]
    config: Option<String>,

    /// Daily dataset path or URL (overrides config and environment)
    #[arg(long, global = true)]
    day_source: Option<String>,

    /// Hourly dataset path or URL (overrides config and environment)
    #[arg(long, global = true)]
    hour_source: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct RangeArgs {
    /// First day to include (YYYY-MM-DD), defaults to the first day in the data
    #[arg(long, value_parser = parse_day)]
    start: Option<NaiveDate>,

    /// Last day to include (YYYY-MM-DD), defaults to the last day in the data
    #[arg(long, value_parser = parse_day)]
    end: Option<NaiveDate>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print totals, peak month and every summary table for a date range
    Summary {
        #[command(flatten)]
        range: RangeArgs,

        /// Emit the view as JSON instead of one log line per row
        #[arg(long, default_value_t = false)]
        json: bool,

        /// Include the filtered raw rows in the JSON output
        #[arg(long, default_value_t = false)]
        include_rows: bool,
    },
    /// Write every summary table as CSV into a directory
    Export {
        #[command(flatten)]
        range: RangeArgs,

        /// Directory to write the CSV tables to
        #[arg(short, long, default_value = "summaries")]
        output_dir: PathBuf,
    },
    /// Show the first and last day of the daily dataset
    Range,
}

fn parse_day(raw: &str) -> Result<NaiveDate, String> {
    parse_date(raw).map_err(|e| format!("expected YYYY-MM-DD: {e}"))
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    // Logging setup: colored stderr + JSON rolling log file
    let log_file_path = std::env::var("LOG_FILE_PATH")
        .unwrap_or_else(|_| "logs/bikeshare_dashboard.log".to_string());
    let log_dir = Path::new(&log_file_path)
        .parent()
        .unwrap_or(Path::new("logs"));
    let log_file_name = Path::new(&log_file_path)
        .file_name()
        .unwrap_or(OsStr::new("bikeshare_dashboard.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, _file_guard) = tracing_appender::non_blocking(file_appender);

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive("info".parse().unwrap()));

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(EnvFilter::from_env("RUST_LOG_JSON").add_directive("debug".parse().unwrap()));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    let cli = Cli::parse();

    let mut sources = SourceConfig::from_env();
    if let Some(path) = &cli.config {
        sources = sources.merge_file(path)?;
    }
    let sources = sources.with_overrides(cli.day_source, cli.hour_source);
    info!(day = %sources.day_source, hour = %sources.hour_source, "Loading datasets");

    let data = Datasets::load(&sources)
        .await
        .context("Failed to load bike-share datasets")?;
    let mut dashboard = Dashboard::new(data);

    match cli.command {
        Commands::Summary {
            range,
            json,
            include_rows,
        } => {
            let range = resolve_range(&dashboard, &range);
            let view = dashboard.view(range);
            if json {
                print_json(view, include_rows)?;
            } else {
                print_pretty(view);
                print_summary(view);
            }
        }
        Commands::Export { range, output_dir } => {
            let range = resolve_range(&dashboard, &range);
            let view = dashboard.view(range);
            export_view(&output_dir, view)?;
        }
        Commands::Range => match dashboard.datasets().full_range() {
            Some(range) => info!(start = %range.start, end = %range.end, "Daily dataset range"),
            None => warn!("Daily dataset is empty"),
        },
    }

    Ok(())
}

/// Fills missing bounds from the daily dataset's own first and last day.
fn resolve_range(dashboard: &Dashboard, args: &RangeArgs) -> DateRange {
    let default = dashboard.datasets().full_range().unwrap_or_else(|| {
        // Empty dataset: every range filters to nothing.
        let day = args.start.or(args.end).unwrap_or_default();
        DateRange::new(day, day)
    });
    let range = DateRange::with_bounds(default, args.start, args.end);
    if range.is_empty() {
        warn!(%range, "Start date is after end date, summaries will be empty");
    }
    range
}
