use std::io::{BufRead, Write};
use std::path::Path;
use std::time::Instant;

use anyhow::Result;

use crate::data::filter::apply_filters;
use crate::data::loader;
use crate::data::model::{City, TripTable};
use crate::filters::{self, RULE};
use crate::prompt;
use crate::stats::{duration, station, travel, user};
use crate::view;

// ---------------------------------------------------------------------------
// Outer restart loop
// ---------------------------------------------------------------------------

/// Run the interactive explorer until the operator declines to restart.
///
/// Each round owns its data exclusively: the table is loaded fresh after
/// filter selection and dropped when the round ends.
pub fn run<R: BufRead, W: Write>(input: &mut R, out: &mut W, data_dir: &Path) -> Result<()> {
    loop {
        let filters = filters::select_filters(input, out)?;

        match loader::load_city(filters.city, data_dir) {
            Ok(table) => {
                let table = apply_filters(table, &filters);
                report_statistics(out, &table, filters.city)?;
                view::browse(input, out, &table)?;
            }
            Err(err) => {
                log::error!("loading {}: {err}", filters.city.name());
                writeln!(
                    out,
                    "Couldn't load the data for {}. The following error occurred: {err}",
                    filters.city.name()
                )?;
            }
        }

        let again = prompt::ask(input, out, "Would you like to restart? Enter yes or no.")?;
        if again != "yes" {
            return Ok(());
        }
    }
}

// ---------------------------------------------------------------------------
// Timed statistic sections
// ---------------------------------------------------------------------------

fn report_statistics<W: Write>(out: &mut W, table: &TripTable, city: City) -> Result<()> {
    timed_section(out, "Calculating The Most Frequent Times of Travel...", |w| {
        write!(w, "{}", travel::compute(table))
    })?;
    timed_section(out, "Calculating The Most Popular Stations and Trip...", |w| {
        write!(w, "{}", station::compute(table))
    })?;
    timed_section(out, "Calculating Trip Duration...", |w| {
        write!(w, "{}", duration::compute(table))
    })?;
    timed_section(out, "Calculating User Stats...", |w| {
        write!(w, "{}", user::compute(table, city))
    })?;
    Ok(())
}

/// Print a section heading, run the report body, and append the elapsed
/// wall-clock time and a rule line.
fn timed_section<W, F>(out: &mut W, heading: &str, body: F) -> Result<()>
where
    W: Write,
    F: FnOnce(&mut W) -> std::io::Result<()>,
{
    writeln!(out, "\n{heading}\n")?;
    let started = Instant::now();
    body(&mut *out)?;
    writeln!(out, "\nThis took {:.4} seconds.", started.elapsed().as_secs_f64())?;
    writeln!(out, "{RULE}")?;
    Ok(())
}
