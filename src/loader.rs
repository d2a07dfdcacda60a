//! Dataset loading: source retrieval and CSV parsing into typed records.

use csv::{ReaderBuilder, StringRecord, Trim};
use flate2::read::GzDecoder;
use serde::de::DeserializeOwned;
use std::io::Read;
use tracing::debug;

use crate::fetch::{BasicClient, fetch_bytes};
use crate::model::{DayRecord, HourRecord};

/// Failures while turning a source into records. An empty dataset is not
/// an error.
#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    #[error("failed to load {origin}: {reason}")]
    Load { origin: String, reason: String },

    #[error("malformed row at line {line} of {origin}: {reason}")]
    Parse {
        origin: String,
        line: u64,
        reason: String,
    },
}

impl DatasetError {
    fn load(origin: &str, reason: impl std::fmt::Display) -> Self {
        DatasetError::Load {
            origin: origin.to_string(),
            reason: reason.to_string(),
        }
    }

    fn parse(origin: &str, line: u64, reason: impl std::fmt::Display) -> Self {
        DatasetError::Parse {
            origin: origin.to_string(),
            line,
            reason: reason.to_string(),
        }
    }
}

/// A CSV row type with constraints checked after deserialization.
pub trait Record: DeserializeOwned {
    fn check(&self) -> Result<(), String>;
}

impl Record for DayRecord {
    fn check(&self) -> Result<(), String> {
        self.validate()
    }
}

impl Record for HourRecord {
    fn check(&self) -> Result<(), String> {
        self.validate()
    }
}

pub async fn load_day_records(source: &str) -> Result<Vec<DayRecord>, DatasetError> {
    load_records(source).await
}

pub async fn load_hour_records(source: &str) -> Result<Vec<HourRecord>, DatasetError> {
    load_records(source).await
}

/// Reads and parses a whole source.
#[tracing::instrument(skip_all, fields(source = %source))]
pub async fn load_records<T: Record>(source: &str) -> Result<Vec<T>, DatasetError> {
    let bytes = read_source(source).await?;
    let rows = parse_records(&bytes, source)?;
    debug!(rows = rows.len(), "Dataset parsed");
    Ok(rows)
}

/// Loads raw bytes from an `http(s)` URL or a local path, gunzipping
/// sources that end in `.gz`.
pub async fn read_source(source: &str) -> Result<Vec<u8>, DatasetError> {
    let bytes = if source.starts_with("http://") || source.starts_with("https://") {
        let client = BasicClient::new().map_err(|e| DatasetError::load(source, e))?;
        fetch_bytes(&client, source)
            .await
            .map_err(|e| DatasetError::load(source, format!("{e:#}")))?
    } else {
        std::fs::read(source).map_err(|e| DatasetError::load(source, e))?
    };
    debug!(bytes = bytes.len(), "Source bytes read");

    if source.ends_with(".gz") {
        let mut decoded = Vec::new();
        GzDecoder::new(bytes.as_slice())
            .read_to_end(&mut decoded)
            .map_err(|e| DatasetError::load(source, format!("gzip: {e}")))?;
        return Ok(decoded);
    }
    Ok(bytes)
}

/// Parses CSV bytes with a header row into records. Columns are matched by
/// header name and extra columns are ignored.
pub fn parse_records<T: Record>(bytes: &[u8], origin: &str) -> Result<Vec<T>, DatasetError> {
    let mut rdr = ReaderBuilder::new().trim(Trim::All).from_reader(bytes);
    let headers = rdr
        .headers()
        .map_err(|e| DatasetError::parse(origin, 1, e))?
        .clone();

    let mut rows = Vec::new();
    let mut record = StringRecord::new();
    loop {
        match rdr.read_record(&mut record) {
            Ok(true) => {}
            Ok(false) => break,
            Err(e) => {
                let line = e.position().map(|p| p.line()).unwrap_or_default();
                return Err(DatasetError::parse(origin, line, e));
            }
        }
        let line = record.position().map(|p| p.line()).unwrap_or_default();

        let row: T = record
            .deserialize(Some(&headers))
            .map_err(|e| DatasetError::parse(origin, line, e))?;
        row.check()
            .map_err(|reason| DatasetError::parse(origin, line, reason))?;
        rows.push(row);
    }

    Ok(rows)
}
