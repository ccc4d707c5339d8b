use std::fmt;

use crate::data::model::TripTable;

const SECONDS_PER_DAY: f64 = 86_400.0;
const SECONDS_PER_MINUTE: f64 = 60.0;

/// Total and mean trip duration over the filtered table.
#[derive(Debug, PartialEq)]
pub struct TripDurationStats {
    pub total_days: f64,
    /// NaN for an empty table: the empty-mean (0/0) is reported as-is rather
    /// than special-cased.
    pub mean_minutes: f64,
}

pub fn compute(table: &TripTable) -> TripDurationStats {
    let total_secs: f64 = table.trips.iter().map(|t| f64::from(t.duration_secs)).sum();
    let mean_secs = total_secs / table.len() as f64;
    TripDurationStats {
        total_days: total_secs / SECONDS_PER_DAY,
        mean_minutes: mean_secs / SECONDS_PER_MINUTE,
    }
}

impl fmt::Display for TripDurationStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Total travel time: {} Days", self.total_days)?;
        writeln!(f, "Mean travel time: {} minutes", self.mean_minutes)
    }
}
