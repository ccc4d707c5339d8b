use std::io::{BufRead, Write};

use anyhow::Result;

use crate::data::model::TripTable;
use crate::prompt;

/// Rows shown per acceptance.
const PAGE_SIZE: usize = 5;

/// Paginated raw-row viewer.
///
/// An explicit offset walks the table in steps of [`PAGE_SIZE`]; "yes" prints
/// the next page and advances, "no" exits, anything else re-prompts without
/// advancing. Short final pages print whatever rows remain.
pub fn browse<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    table: &TripTable,
) -> Result<()> {
    let mut offset = 0;
    loop {
        let more = prompt::ask_yes_no(
            input,
            out,
            "Would you like to view individual trip data? Type 'yes' or 'no'.",
            "I'm sorry I didn't catch that. Please enter 'yes' or 'no'.",
        )?;
        if !more {
            return Ok(());
        }

        let start = offset.min(table.len());
        let end = (offset + PAGE_SIZE).min(table.len());
        if start == table.len() {
            writeln!(out, "No more trips to show.")?;
        }
        for trip in &table.trips[start..end] {
            writeln!(out, "{trip}")?;
        }
        offset += PAGE_SIZE;
    }
}
