use std::fmt;

use crate::data::model::TripTable;

/// Most popular start station, end station, and start→end combination.
#[derive(Debug, PartialEq, Eq)]
pub struct StationStats {
    pub start_station: Option<String>,
    pub end_station: Option<String>,
    /// Grouping key is the two station names joined by a single space.
    pub trip: Option<String>,
}

pub fn compute(table: &TripTable) -> StationStats {
    StationStats {
        start_station: super::mode(table.trips.iter().map(|t| t.start_station.as_str()))
            .map(str::to_owned),
        end_station: super::mode(table.trips.iter().map(|t| t.end_station.as_str()))
            .map(str::to_owned),
        trip: super::mode(
            table
                .trips
                .iter()
                .map(|t| format!("{} {}", t.start_station, t.end_station)),
        ),
    }
}

impl fmt::Display for StationStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "The most commonly used start station is: {}",
            self.start_station.as_deref().unwrap_or("n/a")
        )?;
        writeln!(
            f,
            "The most commonly used end station is: {}",
            self.end_station.as_deref().unwrap_or("n/a")
        )?;
        writeln!(
            f,
            "The most popular combined trip is: {}",
            self.trip.as_deref().unwrap_or("n/a")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::Trip;
    use chrono::NaiveDateTime;

    fn trip(start_station: &str, end_station: &str) -> Trip {
        let start_time = NaiveDateTime::parse_from_str(
            "2017-06-05 08:00:00",
            "%Y-%m-%d %H:%M:%S",
        )
        .unwrap();
        Trip::new(
            start_time,
            start_time,
            60,
            start_station.to_string(),
            end_station.to_string(),
            None,
            None,
            None,
        )
    }

    #[test]
    fn picks_the_most_frequent_stations_and_pair() {
        let table = TripTable::new(vec![
            trip("Canal St", "State St"),
            trip("Canal St", "State St"),
            trip("State St", "Canal St"),
        ]);
        let stats = compute(&table);
        assert_eq!(stats.start_station.as_deref(), Some("Canal St"));
        assert_eq!(stats.end_station.as_deref(), Some("State St"));
        assert_eq!(stats.trip.as_deref(), Some("Canal St State St"));
    }

    #[test]
    fn station_ties_resolve_to_the_first_in_load_order() {
        let table = TripTable::new(vec![trip("B", "X"), trip("A", "X"), trip("B", "Y"), trip("A", "Y")]);
        let stats = compute(&table);
        assert_eq!(stats.start_station.as_deref(), Some("B"));
    }
}
