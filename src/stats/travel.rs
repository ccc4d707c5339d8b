use std::fmt;

use chrono::Weekday;

use crate::data::model::{weekday_name, Month, TripTable};

/// Most frequent travel times: month, weekday and start hour.
#[derive(Debug, PartialEq, Eq)]
pub struct TravelTimeStats {
    pub month: Option<u32>,
    pub weekday: Option<Weekday>,
    pub hour: Option<u32>,
}

pub fn compute(table: &TripTable) -> TravelTimeStats {
    TravelTimeStats {
        month: super::mode(table.trips.iter().map(|t| t.month)),
        weekday: super::mode(table.trips.iter().map(|t| t.weekday)),
        hour: super::mode(table.trips.iter().map(|t| t.hour)),
    }
}

impl fmt::Display for TravelTimeStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.month.and_then(Month::from_ordinal) {
            Some(month) => writeln!(f, "Most frequently traveled month: {month}")?,
            None => writeln!(f, "Most frequently traveled month: n/a")?,
        }
        match self.weekday {
            Some(day) => writeln!(
                f,
                "Most frequently traveled day of the week: {}",
                weekday_name(day)
            )?,
            None => writeln!(f, "Most frequently traveled day of the week: n/a")?,
        }
        match self.hour {
            Some(hour) => writeln!(f, "Most common start hour: {hour}"),
            None => writeln!(f, "Most common start hour: n/a"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::Trip;
    use chrono::NaiveDateTime;

    fn trip(start: &str) -> Trip {
        let start_time =
            NaiveDateTime::parse_from_str(start, "%Y-%m-%d %H:%M:%S").unwrap();
        Trip::new(
            start_time,
            start_time,
            60,
            "A".to_string(),
            "B".to_string(),
            None,
            None,
            None,
        )
    }

    #[test]
    fn picks_the_most_frequent_month_day_and_hour() {
        let table = TripTable::new(vec![
            trip("2017-06-05 08:00:00"), // June, Monday, 8
            trip("2017-06-12 08:30:00"), // June, Monday, 8
            trip("2017-01-03 17:00:00"), // January, Tuesday, 17
        ]);
        let stats = compute(&table);
        assert_eq!(stats.month, Some(6));
        assert_eq!(stats.weekday, Some(Weekday::Mon));
        assert_eq!(stats.hour, Some(8));

        let report = stats.to_string();
        assert!(report.contains("month: June"));
        assert!(report.contains("day of the week: Monday"));
        assert!(report.contains("start hour: 8"));
    }

    #[test]
    fn empty_table_reports_no_values() {
        let stats = compute(&TripTable::default());
        assert_eq!(stats.month, None);
        assert!(stats.to_string().contains("n/a"));
    }
}
