use std::fmt;

use crate::data::model::{City, TripTable};

/// Trip counts per user type, plus demographics where the city records them.
#[derive(Debug, PartialEq, Eq)]
pub struct UserStats {
    /// Descending by count, first-seen order on ties; missing values excluded.
    pub user_types: Vec<(String, usize)>,
    /// `None` for Washington, which publishes no demographic columns.
    pub demographics: Option<DemographicStats>,
}

#[derive(Debug, PartialEq, Eq)]
pub struct DemographicStats {
    pub genders: Vec<(String, usize)>,
    pub earliest_birth_year: Option<i32>,
    pub most_recent_birth_year: Option<i32>,
    pub most_common_birth_year: Option<i32>,
}

/// Compute user statistics. The originally selected city is passed in
/// explicitly and gates the demographic section.
pub fn compute(table: &TripTable, city: City) -> UserStats {
    let user_types = super::value_counts(
        table.trips.iter().filter_map(|t| t.user_type.as_deref()),
    )
    .into_iter()
    .map(|(value, count)| (value.to_string(), count))
    .collect();

    let demographics = city.has_demographics().then(|| {
        let birth_years = || table.trips.iter().filter_map(|t| t.birth_year);
        DemographicStats {
            genders: super::value_counts(
                table.trips.iter().filter_map(|t| t.gender.as_deref()),
            )
            .into_iter()
            .map(|(value, count)| (value.to_string(), count))
            .collect(),
            earliest_birth_year: birth_years().min(),
            most_recent_birth_year: birth_years().max(),
            most_common_birth_year: super::mode(birth_years()),
        }
    });

    UserStats {
        user_types,
        demographics,
    }
}

impl fmt::Display for UserStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Here are the counts of various user types:")?;
        for (user_type, count) in &self.user_types {
            writeln!(f, "  {user_type}: {count}")?;
        }

        if let Some(demographics) = &self.demographics {
            writeln!(f, "Here are the counts of users by gender:")?;
            for (gender, count) in &demographics.genders {
                writeln!(f, "  {gender}: {count}")?;
            }
            if let Some(year) = demographics.earliest_birth_year {
                writeln!(f, "The earliest birth year is: {year}")?;
            }
            if let Some(year) = demographics.most_recent_birth_year {
                writeln!(f, "The most recent birth year is: {year}")?;
            }
            if let Some(year) = demographics.most_common_birth_year {
                writeln!(f, "The most common birth year is: {year}")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::Trip;
    use chrono::NaiveDateTime;

    fn trip(user_type: Option<&str>, gender: Option<&str>, birth_year: Option<i32>) -> Trip {
        let start_time = NaiveDateTime::parse_from_str(
            "2017-06-05 08:00:00",
            "%Y-%m-%d %H:%M:%S",
        )
        .unwrap();
        Trip::new(
            start_time,
            start_time,
            60,
            "A".to_string(),
            "B".to_string(),
            user_type.map(str::to_owned),
            gender.map(str::to_owned),
            birth_year,
        )
    }

    fn sample_table() -> TripTable {
        TripTable::new(vec![
            trip(Some("Subscriber"), Some("Male"), Some(1992)),
            trip(Some("Subscriber"), Some("Female"), Some(1985)),
            trip(Some("Customer"), None, None),
            trip(None, Some("Male"), Some(1992)),
        ])
    }

    #[test]
    fn user_type_breakdown_excludes_missing_values() {
        let stats = compute(&sample_table(), City::Chicago);
        assert_eq!(
            stats.user_types,
            vec![("Subscriber".to_string(), 2), ("Customer".to_string(), 1)]
        );
    }

    #[test]
    fn demographics_are_computed_for_chicago() {
        let stats = compute(&sample_table(), City::Chicago);
        let demographics = stats.demographics.expect("chicago has demographics");
        assert_eq!(
            demographics.genders,
            vec![("Male".to_string(), 2), ("Female".to_string(), 1)]
        );
        assert_eq!(demographics.earliest_birth_year, Some(1985));
        assert_eq!(demographics.most_recent_birth_year, Some(1992));
        assert_eq!(demographics.most_common_birth_year, Some(1992));
    }

    #[test]
    fn washington_report_carries_no_demographics() {
        let stats = compute(&sample_table(), City::Washington);
        assert!(stats.demographics.is_none());
        let report = stats.to_string();
        assert!(!report.contains("gender"));
        assert!(!report.contains("birth year"));
    }
}
