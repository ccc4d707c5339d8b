//! Writes small synthetic city datasets (`chicago.csv`, `new_york_city.csv`,
//! `washington.csv`) into the working directory so the explorer can be tried
//! without the published exports. Deterministic: the same files every run.

use anyhow::{Context, Result};
use chrono::{Duration, NaiveDate};

const TRIPS_PER_CITY: usize = 400;

const STATIONS: [&str; 8] = [
    "Canal St & Taylor St",
    "State St & Harrison St",
    "Clinton St & Madison St",
    "Columbus Dr & Randolph St",
    "Lake Shore Dr & Monroe St",
    "Wells St & Concord Ln",
    "Michigan Ave & Oak St",
    "Franklin St & Jackson Blvd",
];

const USER_TYPES: [&str; 2] = ["Subscriber", "Customer"];
const GENDERS: [&str; 2] = ["Male", "Female"];

/// Minimal deterministic PRNG (64-bit LCG, Knuth constants).
struct SimpleRng(u64);

impl SimpleRng {
    fn new(seed: u64) -> Self {
        SimpleRng(seed)
    }

    fn next_u64(&mut self) -> u64 {
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.0
    }

    /// Uniform value in `0..bound`.
    fn below(&mut self, bound: u64) -> u64 {
        (self.next_u64() >> 16) % bound
    }
}

fn write_city(file_name: &str, seed: u64, with_demographics: bool) -> Result<()> {
    let mut writer = csv::Writer::from_path(file_name)
        .with_context(|| format!("creating {file_name}"))?;

    if with_demographics {
        writer.write_record([
            "",
            "Start Time",
            "End Time",
            "Trip Duration",
            "Start Station",
            "End Station",
            "User Type",
            "Gender",
            "Birth Year",
        ])?;
    } else {
        writer.write_record([
            "",
            "Start Time",
            "End Time",
            "Trip Duration",
            "Start Station",
            "End Station",
            "User Type",
        ])?;
    }

    let mut rng = SimpleRng::new(seed);
    let base = NaiveDate::from_ymd_opt(2017, 1, 1)
        .expect("valid date")
        .and_hms_opt(0, 0, 0)
        .expect("valid time");

    for index in 0..TRIPS_PER_CITY {
        // Trips spread across January–June 2017.
        let start = base
            + Duration::days(rng.below(181) as i64)
            + Duration::seconds(rng.below(86_400) as i64);
        let duration_secs = 60 + rng.below(3_540);
        let end = start + Duration::seconds(duration_secs as i64);

        let start_station = STATIONS[rng.below(STATIONS.len() as u64) as usize];
        let end_station = STATIONS[rng.below(STATIONS.len() as u64) as usize];
        let user_type = USER_TYPES[rng.below(USER_TYPES.len() as u64) as usize];

        let index_field = index.to_string();
        let start_field = start.format("%Y-%m-%d %H:%M:%S").to_string();
        let end_field = end.format("%Y-%m-%d %H:%M:%S").to_string();
        let duration_field = duration_secs.to_string();

        if with_demographics {
            // Roughly one row in ten has no demographic data.
            let missing = rng.below(10) == 0;
            let gender = if missing {
                String::new()
            } else {
                GENDERS[rng.below(GENDERS.len() as u64) as usize].to_string()
            };
            let birth_year = if missing {
                String::new()
            } else {
                format!("{}.0", 1950 + rng.below(50))
            };
            writer.write_record([
                index_field.as_str(),
                start_field.as_str(),
                end_field.as_str(),
                duration_field.as_str(),
                start_station,
                end_station,
                user_type,
                gender.as_str(),
                birth_year.as_str(),
            ])?;
        } else {
            writer.write_record([
                index_field.as_str(),
                start_field.as_str(),
                end_field.as_str(),
                duration_field.as_str(),
                start_station,
                end_station,
                user_type,
            ])?;
        }
    }

    writer.flush()?;
    println!("Wrote {TRIPS_PER_CITY} trips to {file_name}");
    Ok(())
}

fn main() -> Result<()> {
    write_city("chicago.csv", 17, true)?;
    write_city("new_york_city.csv", 29, true)?;
    write_city("washington.csv", 43, false)?;
    Ok(())
}
