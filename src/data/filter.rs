use crate::filters::Filters;

use super::model::TripTable;

/// Narrow a freshly loaded table to the selected month and day.
///
/// Filtering only removes rows; the surviving trips keep their load order and
/// column values untouched.
pub fn apply_filters(table: TripTable, filters: &Filters) -> TripTable {
    let mut trips = table.trips;

    if let Some(month) = filters.month {
        trips.retain(|t| t.month == month.ordinal());
        log::debug!("{} trips after {} filter", trips.len(), month);
    }
    if let Some(day) = filters.day {
        trips.retain(|t| t.weekday == day);
        log::debug!("{} trips after day filter", trips.len());
    }

    TripTable::new(trips)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::{City, Month, Trip, TripTable};
    use chrono::{NaiveDateTime, Weekday};

    fn trip(start: &str) -> Trip {
        let start_time =
            NaiveDateTime::parse_from_str(start, "%Y-%m-%d %H:%M:%S").unwrap();
        Trip::new(
            start_time,
            start_time + chrono::Duration::minutes(10),
            600,
            "A".to_string(),
            "B".to_string(),
            Some("Subscriber".to_string()),
            None,
            None,
        )
    }

    fn sample_table() -> TripTable {
        TripTable::new(vec![
            trip("2017-01-02 08:00:00"), // January, Monday
            trip("2017-01-03 09:00:00"), // January, Tuesday
            trip("2017-06-05 10:00:00"), // June, Monday
            trip("2017-06-06 11:00:00"), // June, Tuesday
        ])
    }

    fn filters(month: Option<Month>, day: Option<Weekday>) -> Filters {
        Filters {
            city: City::Chicago,
            month,
            day,
        }
    }

    #[test]
    fn month_filter_selects_by_calendar_ordinal() {
        let filtered = apply_filters(sample_table(), &filters(Some(Month::June), None));
        assert_eq!(filtered.len(), 2);
        assert!(filtered.trips.iter().all(|t| t.month == 6));
    }

    #[test]
    fn day_filter_selects_by_weekday() {
        let filtered = apply_filters(sample_table(), &filters(None, Some(Weekday::Mon)));
        assert_eq!(filtered.len(), 2);
        assert!(filtered.trips.iter().all(|t| t.weekday == Weekday::Mon));
    }

    #[test]
    fn narrowing_is_monotonically_non_increasing() {
        let all = apply_filters(sample_table(), &filters(None, None));
        let by_month = apply_filters(sample_table(), &filters(Some(Month::January), None));
        let by_both = apply_filters(
            sample_table(),
            &filters(Some(Month::January), Some(Weekday::Mon)),
        );
        assert!(by_month.len() <= all.len());
        assert!(by_both.len() <= by_month.len());
        assert_eq!(by_both.len(), 1);
    }

    #[test]
    fn unmatched_filters_leave_an_empty_table() {
        let filtered = apply_filters(sample_table(), &filters(Some(Month::December), None));
        assert!(filtered.is_empty());
    }

    #[test]
    fn surviving_rows_keep_their_load_order() {
        let filtered = apply_filters(sample_table(), &filters(None, Some(Weekday::Tue)));
        let hours: Vec<u32> = filtered.trips.iter().map(|t| t.hour).collect();
        assert_eq!(hours, vec![9, 11]);
    }
}
