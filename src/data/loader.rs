use std::fs::File;
use std::io::{self, BufReader};
use std::path::Path;

use chrono::NaiveDateTime;
use serde::Deserialize;
use thiserror::Error;

use super::model::{City, Trip, TripTable};

// ---------------------------------------------------------------------------
// LoadError – everything that can go wrong at the loader boundary
// ---------------------------------------------------------------------------

/// Failure to read or parse a city's dataset. Caught by the orchestrator,
/// which reports it and returns to the restart prompt.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("could not open {path}: {source}")]
    Open {
        path: String,
        #[source]
        source: io::Error,
    },
    #[error("malformed CSV data: {0}")]
    Csv(#[from] csv::Error),
    #[error("row {row}: invalid {field} timestamp '{value}'")]
    Timestamp {
        row: usize,
        field: &'static str,
        value: String,
    },
    #[error("row {row}: negative trip duration {value}")]
    NegativeDuration { row: usize, value: f64 },
}

// ---------------------------------------------------------------------------
// Raw CSV row
// ---------------------------------------------------------------------------

/// One CSV record as it appears on disk. Header names follow the published
/// exports; Washington lacks the Gender and Birth Year columns entirely, so
/// those deserialize to `None` there. Blank cells also become `None`.
#[derive(Debug, Deserialize)]
struct RawTrip {
    #[serde(rename = "Start Time")]
    start_time: String,
    #[serde(rename = "End Time")]
    end_time: String,
    /// Stored as a float in some exports ("321.0").
    #[serde(rename = "Trip Duration")]
    trip_duration: f64,
    #[serde(rename = "Start Station")]
    start_station: String,
    #[serde(rename = "End Station")]
    end_station: String,
    #[serde(rename = "User Type", default)]
    user_type: Option<String>,
    #[serde(rename = "Gender", default)]
    gender: Option<String>,
    #[serde(rename = "Birth Year", default)]
    birth_year: Option<f64>,
}

impl RawTrip {
    fn into_trip(self, row: usize) -> Result<Trip, LoadError> {
        let start_time = parse_timestamp(&self.start_time, row, "start")?;
        let end_time = parse_timestamp(&self.end_time, row, "end")?;
        if self.trip_duration < 0.0 {
            return Err(LoadError::NegativeDuration {
                row,
                value: self.trip_duration,
            });
        }
        Ok(Trip::new(
            start_time,
            end_time,
            self.trip_duration as u32,
            self.start_station,
            self.end_station,
            self.user_type,
            self.gender,
            self.birth_year.map(|y| y as i32),
        ))
    }
}

/// Timestamp layouts seen in the exports. Seconds are usually present.
const TIMESTAMP_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%d %H:%M"];

fn parse_timestamp(
    value: &str,
    row: usize,
    field: &'static str,
) -> Result<NaiveDateTime, LoadError> {
    TIMESTAMP_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(value.trim(), fmt).ok())
        .ok_or_else(|| LoadError::Timestamp {
            row,
            field,
            value: value.to_string(),
        })
}

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Load the full (unfiltered) trip table for a city.
pub fn load_city(city: City, data_dir: &Path) -> Result<TripTable, LoadError> {
    let path = data_dir.join(city.data_file());
    let file = File::open(&path).map_err(|source| LoadError::Open {
        path: path.display().to_string(),
        source,
    })?;
    let table = read_trips(BufReader::new(file))?;
    log::info!("loaded {} trips for {}", table.len(), city.name());
    Ok(table)
}

/// Parse trip records from any CSV source. Rows keep their file order; the
/// derived month/weekday/hour columns are computed here, once.
pub fn read_trips<R: io::Read>(reader: R) -> Result<TripTable, LoadError> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut trips = Vec::new();
    for (index, record) in csv_reader.deserialize::<RawTrip>().enumerate() {
        // 1-based data row for error messages.
        let row = index + 1;
        trips.push(record?.into_trip(row)?);
    }
    Ok(TripTable::new(trips))
}
