use std::io::{BufRead, Write};

use anyhow::Result;
use chrono::Weekday;

use crate::data::model::{City, Month};
use crate::prompt;

/// Separator printed between interactive sections.
pub const RULE: &str = "----------------------------------------";

// ---------------------------------------------------------------------------
// Filters – the validated selection triple
// ---------------------------------------------------------------------------

/// City plus optional month/day narrowing, produced by [`select_filters`] and
/// consumed once per session by the loader.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Filters {
    pub city: City,
    /// `None` means "all" (no month filter).
    pub month: Option<Month>,
    /// `None` means "all" (no day filter).
    pub day: Option<Weekday>,
}

pub fn parse_day(s: &str) -> Option<Weekday> {
    match s {
        "monday" => Some(Weekday::Mon),
        "tuesday" => Some(Weekday::Tue),
        "wednesday" => Some(Weekday::Wed),
        "thursday" => Some(Weekday::Thu),
        "friday" => Some(Weekday::Fri),
        "saturday" => Some(Weekday::Sat),
        "sunday" => Some(Weekday::Sun),
        _ => None,
    }
}

// ---------------------------------------------------------------------------
// Interactive selection
// ---------------------------------------------------------------------------

/// Prompt for city, month and day in sequence, re-prompting until each answer
/// is valid, and echo every accepted choice.
pub fn select_filters<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> Result<Filters> {
    writeln!(out, "Hello! Let's explore some US bikeshare data!")?;

    let city = prompt::ask_until(
        input,
        out,
        "Which city would you like to explore? New York City, Chicago or Washington?",
        "Sorry, the available cities are New York City, Chicago and Washington. Please try again.",
        |answer| answer.parse::<City>().ok(),
    )?;
    writeln!(out, "Your city of choice was: {city}")?;

    let month = prompt::ask_until(
        input,
        out,
        "Would you like to filter by month? Enter a month name (January through December), \
         or 'all' for no month filter.",
        "Sorry, please enter a month name such as January, February or June, or 'all'.",
        |answer| {
            if answer == "all" {
                Some(None)
            } else {
                answer.parse::<Month>().ok().map(Some)
            }
        },
    )?;
    match month {
        Some(month) => writeln!(out, "Your month of choice was: {month}")?,
        None => writeln!(out, "No month filter selected.")?,
    }

    let day = prompt::ask_until(
        input,
        out,
        "Would you like to filter by day? Enter Sunday, Monday, Tuesday, Wednesday, Thursday, \
         Friday or Saturday, or 'all' for no day filter.",
        "Sorry, please enter a weekday name such as Monday or Saturday, or 'all'.",
        |answer| {
            if answer == "all" {
                Some(None)
            } else {
                parse_day(answer).map(Some)
            }
        },
    )?;
    match day {
        Some(day) => writeln!(
            out,
            "Your day of choice was: {}",
            crate::data::model::weekday_name(day)
        )?,
        None => writeln!(out, "No day filter selected.")?,
    }

    writeln!(out, "{RULE}")?;
    Ok(Filters { city, month, day })
}
