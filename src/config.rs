//! Dataset source configuration.
//!
//! Resolution order, later entries winning: built-in defaults, the
//! `BIKESHARE_DAY_SOURCE` / `BIKESHARE_HOUR_SOURCE` environment variables,
//! an optional JSON file, then explicit overrides from the command line.
//!
//! ```json
//! {
//!   "day_source": "data/day.csv",
//!   "hour_source": "https://example.org/hour.csv.gz"
//! }
//! ```

use anyhow::{Context, Result};
use serde::Deserialize;

pub const DEFAULT_DAY_SOURCE: &str =
    "https://raw.githubusercontent.com/ZabrilaAmrina/dashboard/main/cleaned_bikeshare_day.csv";
pub const DEFAULT_HOUR_SOURCE: &str =
    "https://raw.githubusercontent.com/ZabrilaAmrina/dashboard/main/cleaned_bikeshare_hour.csv";

pub const DAY_SOURCE_VAR: &str = "BIKESHARE_DAY_SOURCE";
pub const HOUR_SOURCE_VAR: &str = "BIKESHARE_HOUR_SOURCE";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceConfig {
    pub day_source: String,
    pub hour_source: String,
}

/// Keys accepted in the JSON config file; absent keys leave the current value.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct SourceFile {
    day_source: Option<String>,
    hour_source: Option<String>,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            day_source: DEFAULT_DAY_SOURCE.to_string(),
            hour_source: DEFAULT_HOUR_SOURCE.to_string(),
        }
    }
}

impl SourceConfig {
    /// Defaults overlaid with the process environment.
    pub fn from_env() -> Self {
        Self::default().with_lookup(|key| std::env::var(key).ok())
    }

    fn with_lookup<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(day) = lookup(DAY_SOURCE_VAR).filter(|v| !v.trim().is_empty()) {
            self.day_source = day;
        }
        if let Some(hour) = lookup(HOUR_SOURCE_VAR).filter(|v| !v.trim().is_empty()) {
            self.hour_source = hour;
        }
        self
    }

    /// Overlays the keys present in the JSON file at `path`.
    pub fn merge_file(self, path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {path}"))?;
        self.merge_json(&content)
            .with_context(|| format!("Invalid config file {path}"))
    }

    fn merge_json(mut self, content: &str) -> Result<Self> {
        let file: SourceFile = serde_json::from_str(content)?;
        if let Some(day) = file.day_source {
            self.day_source = day;
        }
        if let Some(hour) = file.hour_source {
            self.hour_source = hour;
        }
        Ok(self)
    }

    pub fn with_overrides(mut self, day: Option<String>, hour: Option<String>) -> Self {
        if let Some(day) = day {
            self.day_source = day;
        }
        if let Some(hour) = hour {
            self.hour_source = hour;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::env;
    use std::fs;

    #[test]
    fn test_defaults_point_at_published_csvs() {
        let config = SourceConfig::default();
        assert!(config.day_source.ends_with("cleaned_bikeshare_day.csv"));
        assert!(config.hour_source.ends_with("cleaned_bikeshare_hour.csv"));
    }

    #[test]
    fn test_lookup_overrides_defaults_and_skips_blank() {
        let vars: HashMap<&str, &str> =
            HashMap::from([(DAY_SOURCE_VAR, "local/day.csv"), (HOUR_SOURCE_VAR, "  ")]);
        let config =
            SourceConfig::default().with_lookup(|key| vars.get(key).map(|v| v.to_string()));

        assert_eq!(config.day_source, "local/day.csv");
        assert_eq!(config.hour_source, DEFAULT_HOUR_SOURCE);
    }

    #[test]
    fn test_merge_json_partial() {
        let config = SourceConfig::default()
            .merge_json(r#"{ "hour_source": "hour.csv.gz" }"#)
            .unwrap();

        assert_eq!(config.day_source, DEFAULT_DAY_SOURCE);
        assert_eq!(config.hour_source, "hour.csv.gz");
    }

    #[test]
    fn test_merge_json_rejects_unknown_keys() {
        assert!(
            SourceConfig::default()
                .merge_json(r#"{ "dayly_source": "x" }"#)
                .is_err()
        );
    }

    #[test]
    fn test_merge_file_and_overrides() {
        let path = format!("{}/bikeshare_dashboard_config.json", env::temp_dir().display());
        fs::write(&path, r#"{ "day_source": "from_file.csv" }"#).unwrap();

        let config = SourceConfig::default()
            .merge_file(&path)
            .unwrap()
            .with_overrides(None, Some("from_flag.csv".to_string()));

        assert_eq!(config.day_source, "from_file.csv");
        assert_eq!(config.hour_source, "from_flag.csv");

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_merge_missing_file_fails() {
        let path = format!("{}/bikeshare_dashboard_no_config.json", env::temp_dir().display());
        let _ = fs::remove_file(&path);
        assert!(SourceConfig::default().merge_file(&path).is_err());
    }
}
