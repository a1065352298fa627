//! Interactive collection of the filter selection.

use crate::errors::{AppError, AppResult};
use crate::models::filter::{parse_day_choice, parse_month_choice};
use crate::models::{City, FilterMode, Selection};
use crate::ui::Console;
use std::io::{BufRead, Write};

const MODE_PROMPT: &str = "Would you like to filter by month, day, both or without filter: ";
const CITY_PROMPT: &str = "Please type the name of the city (chicago, new york city, washington): ";
const MONTH_PROMPT: &str = "Please type the month (january, february, ... , june) or type all: ";
const DAY_PROMPT: &str = "Please type the day (monday, tuesday, ... sunday) or type all: ";

/// Ask until `parse` accepts the lowercased answer.
fn ask_until<R, W, T, F>(
    console: &mut Console<R, W>,
    prompt: &str,
    invalid: &str,
    parse: F,
) -> AppResult<T>
where
    R: BufRead,
    W: Write,
    F: Fn(&str) -> Option<T>,
{
    loop {
        let answer = console.ask(prompt)?.ok_or(AppError::InputClosed)?;
        if let Some(value) = parse(&answer.to_lowercase()) {
            return Ok(value);
        }
        console.warning(invalid)?;
    }
}

/// Collect filter mode, city, and month/day as the mode requires.
pub fn get_filters<R: BufRead, W: Write>(console: &mut Console<R, W>) -> AppResult<Selection> {
    console.line("Hello! Let's explore some US bikeshare data!")?;

    let mode = ask_until(
        console,
        MODE_PROMPT,
        "please type a valid filter",
        FilterMode::from_input,
    )?;
    let city = ask_until(
        console,
        CITY_PROMPT,
        "please type a valid city name",
        City::from_input,
    )?;

    let month = if mode.filters_month() {
        ask_until(
            console,
            MONTH_PROMPT,
            "please type a valid month",
            parse_month_choice,
        )?
    } else {
        None
    };

    let day = if mode.filters_day() {
        ask_until(console, DAY_PROMPT, "please type a valid day", parse_day_choice)?
    } else {
        None
    };

    console.separator()?;
    Ok(Selection::new(city, mode, month, day))
}
