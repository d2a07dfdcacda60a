//! Typed usage records read from the daily and hourly datasets.

use chrono::NaiveDate;
use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A category value that did not match any known season or weather label.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind} {value:?}")]
pub struct UnknownCategory {
    kind: &'static str,
    value: String,
}

/// Meteorological season of a usage day.
///
/// The variant order is the display order of every seasonal table.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(try_from = "String", into = "&'static str")]
pub enum Season {
    Spring,
    Summer,
    Fall,
    Winter,
}

impl Season {
    pub const ALL: [Season; 4] = [Season::Spring, Season::Summer, Season::Fall, Season::Winter];

    pub fn label(self) -> &'static str {
        match self {
            Season::Spring => "Spring",
            Season::Summer => "Summer",
            Season::Fall => "Fall",
            Season::Winter => "Winter",
        }
    }
}

impl FromStr for Season {
    type Err = UnknownCategory;

    /// Accepts the display label in any case, or the numeric code (1-4)
    /// used by the raw UCI export.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Some(season) = category_code(trimmed).and_then(|i| Season::ALL.get(i).copied()) {
            return Ok(season);
        }
        Season::ALL
            .into_iter()
            .find(|season| season.label().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| UnknownCategory {
                kind: "season",
                value: s.to_string(),
            })
    }
}

/// Weather situation of a usage day, ordered from mildest to most severe.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(try_from = "String", into = "&'static str")]
pub enum Weather {
    ClearPartlyCloudy,
    MistyCloudy,
    LightSnowRain,
    SevereWeather,
}

impl Weather {
    pub const ALL: [Weather; 4] = [
        Weather::ClearPartlyCloudy,
        Weather::MistyCloudy,
        Weather::LightSnowRain,
        Weather::SevereWeather,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Weather::ClearPartlyCloudy => "Clear/Partly Cloudy",
            Weather::MistyCloudy => "Misty/Cloudy",
            Weather::LightSnowRain => "Light Snow/Rain",
            Weather::SevereWeather => "Severe Weather",
        }
    }
}

impl FromStr for Weather {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Some(weather) = category_code(trimmed).and_then(|i| Weather::ALL.get(i).copied()) {
            return Ok(weather);
        }
        Weather::ALL
            .into_iter()
            .find(|weather| weather.label().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| UnknownCategory {
                kind: "weather",
                value: s.to_string(),
            })
    }
}

/// Maps a 1-based numeric category code to an index into `ALL`.
fn category_code(raw: &str) -> Option<usize> {
    raw.parse::<usize>().ok()?.checked_sub(1)
}

macro_rules! category_conversions {
    ($ty:ty) => {
        impl TryFrom<String> for $ty {
            type Error = UnknownCategory;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                value.parse()
            }
        }

        impl From<$ty> for &'static str {
            fn from(value: $ty) -> Self {
                value.label()
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.label())
            }
        }
    };
}

category_conversions!(Season);
category_conversions!(Weather);

/// Rows that carry a calendar date and can therefore be range-filtered.
pub trait Dated {
    fn date(&self) -> NaiveDate;
}

/// One row of the daily dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayRecord {
    #[serde(deserialize_with = "deserialize_date")]
    pub date: NaiveDate,
    pub season: Season,
    pub weather: Weather,
    #[serde(deserialize_with = "deserialize_flag")]
    pub holiday: bool,
    #[serde(deserialize_with = "deserialize_flag")]
    pub workingday: bool,
    pub year: i32,
    pub casual: u64,
    pub registered: u64,
    pub count: u64,
}

/// One row of the hourly dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HourRecord {
    #[serde(deserialize_with = "deserialize_date")]
    pub date: NaiveDate,
    pub hour: u8,
    pub casual: u64,
    pub registered: u64,
    pub count: u64,
}

impl Dated for DayRecord {
    fn date(&self) -> NaiveDate {
        self.date
    }
}

impl Dated for HourRecord {
    fn date(&self) -> NaiveDate {
        self.date
    }
}

impl DayRecord {
    /// Checks the constraints serde cannot express.
    pub fn validate(&self) -> Result<(), String> {
        check_count(self.casual, self.registered, self.count)
    }
}

impl HourRecord {
    pub fn validate(&self) -> Result<(), String> {
        if self.hour > 23 {
            return Err(format!("hour {} is outside 0-23", self.hour));
        }
        check_count(self.casual, self.registered, self.count)
    }
}

fn check_count(casual: u64, registered: u64, count: u64) -> Result<(), String> {
    if casual.checked_add(registered) == Some(count) {
        Ok(())
    } else {
        Err(format!(
            "count {count} does not equal casual {casual} + registered {registered}"
        ))
    }
}

/// Parses a `YYYY-MM-DD` date, ignoring any trailing time component.
pub fn parse_date(raw: &str) -> Result<NaiveDate, chrono::ParseError> {
    let day = raw.trim().split([' ', 'T']).next().unwrap_or_default();
    NaiveDate::parse_from_str(day, "%Y-%m-%d")
}

/// Parses a boolean day flag written as `0/1`, `true/false` or `yes/no`.
pub fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" => Some(true),
        "0" | "false" | "no" => Some(false),
        _ => None,
    }
}

fn deserialize_date<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_date(&raw).map_err(|e| de::Error::custom(format!("invalid date {raw:?}: {e}")))
}

fn deserialize_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_flag(&raw).ok_or_else(|| de::Error::custom(format!("invalid flag {raw:?}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_season_order_is_calendar_order() {
        let mut seasons = vec![Season::Winter, Season::Fall, Season::Spring, Season::Summer];
        seasons.sort();
        assert_eq!(seasons, Season::ALL.to_vec());
    }

    #[test]
    fn test_weather_order_is_severity_order() {
        assert!(Weather::ClearPartlyCloudy < Weather::MistyCloudy);
        assert!(Weather::MistyCloudy < Weather::LightSnowRain);
        assert!(Weather::LightSnowRain < Weather::SevereWeather);
    }

    #[test]
    fn test_parse_season_labels_and_codes() {
        assert_eq!("summer".parse::<Season>().unwrap(), Season::Summer);
        assert_eq!(" Fall ".parse::<Season>().unwrap(), Season::Fall);
        assert_eq!("4".parse::<Season>().unwrap(), Season::Winter);
        assert!("0".parse::<Season>().is_err());
        assert!("Autumn".parse::<Season>().is_err());
    }

    #[test]
    fn test_parse_weather_labels_and_codes() {
        assert_eq!(
            "Misty/Cloudy".parse::<Weather>().unwrap(),
            Weather::MistyCloudy
        );
        assert_eq!("1".parse::<Weather>().unwrap(), Weather::ClearPartlyCloudy);
        assert_eq!(
            "severe weather".parse::<Weather>().unwrap(),
            Weather::SevereWeather
        );
        assert!("Sunny".parse::<Weather>().is_err());
    }

    #[test]
    fn test_parse_date_ignores_time() {
        let expected = NaiveDate::from_ymd_opt(2011, 1, 1).unwrap();
        assert_eq!(parse_date("2011-01-01").unwrap(), expected);
        assert_eq!(parse_date("2011-01-01 00:00:00").unwrap(), expected);
        assert_eq!(parse_date("2011-01-01T06:00:00").unwrap(), expected);
        assert!(parse_date("01/01/2011").is_err());
        assert!(parse_date("").is_err());
    }

    #[test]
    fn test_parse_flag() {
        assert_eq!(parse_flag("1"), Some(true));
        assert_eq!(parse_flag("False"), Some(false));
        assert_eq!(parse_flag("yes"), Some(true));
        assert_eq!(parse_flag("maybe"), None);
    }

    #[test]
    fn test_validate_count_invariant() {
        let mut record = HourRecord {
            date: NaiveDate::from_ymd_opt(2012, 6, 1).unwrap(),
            hour: 8,
            casual: 3,
            registered: 7,
            count: 10,
        };
        assert!(record.validate().is_ok());

        record.count = 11;
        assert!(record.validate().is_err());

        record.count = 10;
        record.hour = 24;
        assert!(record.validate().is_err());
    }

    #[test]
    fn test_category_serializes_as_label() {
        assert_eq!(
            serde_json::to_string(&Weather::LightSnowRain).unwrap(),
            "\"Light Snow/Rain\""
        );
        assert_eq!(serde_json::to_string(&Season::Fall).unwrap(), "\"Fall\"");
    }
}
