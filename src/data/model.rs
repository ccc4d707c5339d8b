use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDateTime, Timelike, Weekday};

// ---------------------------------------------------------------------------
// City – the three known datasets
// ---------------------------------------------------------------------------

/// One of the three cities with published trip data.
///
/// The city → file mapping is a fixed contract, not auto-detected: Chicago and
/// New York City carry gender and birth-year columns, Washington does not.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum City {
    Chicago,
    NewYorkCity,
    Washington,
}

impl City {
    /// File backing this city's dataset, relative to the data directory.
    pub fn data_file(self) -> &'static str {
        match self {
            City::Chicago => "chicago.csv",
            City::NewYorkCity => "new_york_city.csv",
            City::Washington => "washington.csv",
        }
    }

    /// Display name.
    pub fn name(self) -> &'static str {
        match self {
            City::Chicago => "Chicago",
            City::NewYorkCity => "New York City",
            City::Washington => "Washington",
        }
    }

    /// Whether the dataset carries gender and birth-year columns.
    pub fn has_demographics(self) -> bool {
        !matches!(self, City::Washington)
    }
}

impl FromStr for City {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "chicago" => Ok(City::Chicago),
            "new york city" => Ok(City::NewYorkCity),
            "washington" => Ok(City::Washington),
            other => Err(format!("unknown city: {other}")),
        }
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ---------------------------------------------------------------------------
// Month – calendar month with its 1-based ordinal
// ---------------------------------------------------------------------------

/// Calendar month used for filtering and reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Month {
    January,
    February,
    March,
    April,
    May,
    June,
    July,
    August,
    September,
    October,
    November,
    December,
}

impl Month {
    pub const ALL: [Month; 12] = [
        Month::January,
        Month::February,
        Month::March,
        Month::April,
        Month::May,
        Month::June,
        Month::July,
        Month::August,
        Month::September,
        Month::October,
        Month::November,
        Month::December,
    ];

    /// 1-based calendar ordinal (January = 1 … December = 12).
    pub fn ordinal(self) -> u32 {
        self as u32 + 1
    }

    /// Month for a 1-based ordinal as derived from a timestamp.
    pub fn from_ordinal(ordinal: u32) -> Option<Month> {
        Month::ALL.get(ordinal.checked_sub(1)? as usize).copied()
    }

    pub fn name(self) -> &'static str {
        match self {
            Month::January => "January",
            Month::February => "February",
            Month::March => "March",
            Month::April => "April",
            Month::May => "May",
            Month::June => "June",
            Month::July => "July",
            Month::August => "August",
            Month::September => "September",
            Month::October => "October",
            Month::November => "November",
            Month::December => "December",
        }
    }
}

impl FromStr for Month {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_lowercase();
        Month::ALL
            .iter()
            .find(|m| m.name().to_lowercase() == needle)
            .copied()
            .ok_or_else(|| format!("unknown month: {s}"))
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Capitalized full weekday name ("Monday" … "Sunday").
pub fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

// ---------------------------------------------------------------------------
// Trip – one row of the dataset
// ---------------------------------------------------------------------------

/// A single recorded trip, with calendar fields derived once at construction
/// from the start timestamp and never mutated afterwards.
#[derive(Debug, Clone)]
pub struct Trip {
    pub start_time: NaiveDateTime,
    pub end_time: NaiveDateTime,
    /// Trip length in seconds.
    pub duration_secs: u32,
    pub start_station: String,
    pub end_station: String,
    /// Missing in some rows; blank CSV cells are treated as absent.
    pub user_type: Option<String>,
    /// Only present for Chicago and New York City.
    pub gender: Option<String>,
    /// Only present for Chicago and New York City.
    pub birth_year: Option<i32>,

    // Derived columns.
    pub month: u32,
    pub weekday: Weekday,
    pub hour: u32,
}

impl Trip {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        start_time: NaiveDateTime,
        end_time: NaiveDateTime,
        duration_secs: u32,
        start_station: String,
        end_station: String,
        user_type: Option<String>,
        gender: Option<String>,
        birth_year: Option<i32>,
    ) -> Self {
        Trip {
            month: start_time.month(),
            weekday: start_time.weekday(),
            hour: start_time.hour(),
            start_time,
            end_time,
            duration_secs,
            start_station,
            end_station,
            user_type,
            gender,
            birth_year,
        }
    }
}

impl fmt::Display for Trip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} -> {}  {:>5}s  {} to {}  [{}]",
            self.start_time,
            self.end_time,
            self.duration_secs,
            self.start_station,
            self.end_station,
            self.user_type.as_deref().unwrap_or("unknown"),
        )
    }
}

// ---------------------------------------------------------------------------
// TripTable – the working row set
// ---------------------------------------------------------------------------

/// The in-memory trip table shared by every statistic computation.
#[derive(Debug, Clone, Default)]
pub struct TripTable {
    pub trips: Vec<Trip>,
}

impl TripTable {
    pub fn new(trips: Vec<Trip>) -> Self {
        TripTable { trips }
    }

    /// Number of trips.
    pub fn len(&self) -> usize {
        self.trips.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.trips.is_empty()
    }
}
