//! Printing of the four report sections. Each section runs under its own
//! `SectionTimer` and ends with the elapsed time and a separator.

use super::console::Console;
use super::messages::header;
use crate::core::tally::Peak;
use crate::core::timer::SectionTimer;
use crate::core::{duration_stats, station_stats, time_stats, user_stats};
use crate::data::TripTable;
use crate::errors::AppResult;
use crate::models::FilterMode;
use crate::utils::date::weekday_name;
use crate::utils::formatting::{NO_DATA, hour_label, mins2readable, minutes_or_no_data};
use std::io::{BufRead, Write};

fn title<R: BufRead, W: Write>(console: &mut Console<R, W>, text: &str) -> AppResult<()> {
    console.line(format!("\n{}\n", header(text)))
}

fn finish<R: BufRead, W: Write>(console: &mut Console<R, W>, timer: &SectionTimer) -> AppResult<()> {
    console.line(format!(
        "\nThis took {} seconds.",
        timer.elapsed().as_secs_f64()
    ))?;
    console.separator()
}

fn value_or_no_data<K>(peak: &Peak<K>, label: impl Fn(&K) -> String) -> String {
    peak.as_ref()
        .map(|(k, _)| label(k))
        .unwrap_or_else(|| NO_DATA.to_string())
}

fn with_count<K>(peak: &Peak<K>, label: impl Fn(&K) -> String) -> String {
    peak.as_ref()
        .map(|(k, n)| format!("{}, with count of: {n}", label(k)))
        .unwrap_or_else(|| NO_DATA.to_string())
}

/// Most frequent month, weekday and start hour.
pub fn print_time_stats<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    table: &TripTable,
    mode: FilterMode,
) -> AppResult<()> {
    title(console, "Calculating The Most Frequent Times of Travel...")?;
    let timer = SectionTimer::start("time_stats");

    let stats = time_stats::compute(table, mode);

    if let Some(month) = &stats.month {
        console.line(format!(
            "The most common month is: {}",
            value_or_no_data(month, |m| m.name().to_string())
        ))?;
    }
    if let Some(day) = &stats.day {
        console.line(format!(
            "The most common day is: {}",
            value_or_no_data(day, |d| weekday_name(*d).to_string())
        ))?;
    }
    console.line(format!(
        "The most common hour is: {}",
        value_or_no_data(&stats.hour, |h| hour_label(*h))
    ))?;

    finish(console, &timer)
}

/// Most popular stations and trip.
pub fn print_station_stats<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    table: &TripTable,
) -> AppResult<()> {
    title(console, "Calculating The Most Popular Stations and Trip...")?;
    let timer = SectionTimer::start("station_stats");

    let stats = station_stats::compute(table);

    console.line(format!(
        "The most commonly used start station is: {}",
        with_count(&stats.start, String::clone)
    ))?;
    console.line(format!(
        "The most commonly used end station is: {}",
        with_count(&stats.end, String::clone)
    ))?;
    console.line(format!(
        "The most frequent combination is: {}",
        with_count(&stats.trip, |(s, e)| format!("{s} -> {e}"))
    ))?;

    finish(console, &timer)
}

/// Total and mean trip duration.
pub fn print_duration_stats<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    table: &TripTable,
) -> AppResult<()> {
    title(console, "Calculating Trip Duration...")?;
    let timer = SectionTimer::start("duration_stats");

    let stats = duration_stats::compute(table);

    console.line(format!(
        "The total travel time in minutes is: {:.2} ({})",
        stats.total_minutes,
        mins2readable(stats.total_minutes)
    ))?;
    console.line(format!(
        "The mean travel time in minutes is: {}",
        minutes_or_no_data(stats.mean_minutes)
    ))?;

    finish(console, &timer)
}

/// User types, and for cities that record them, gender and birth years.
pub fn print_user_stats<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    table: &TripTable,
) -> AppResult<()> {
    title(console, "Calculating User Stats...")?;
    let timer = SectionTimer::start("user_stats");

    let stats = user_stats::compute(table)?;

    if stats.user_types.is_empty() {
        console.line(format!("User types: {NO_DATA}"))?;
    }
    for (kind, count) in &stats.user_types {
        console.line(format!("The user type ({kind}) has count of {count}"))?;
    }

    if let Some(demo) = &stats.demographics {
        match &demo.genders {
            Some([(g1, n1), (g2, n2)]) => console.line(format!(
                "The ({g1}) gender has count of {n1}, while ({g2}) gender has count of {n2}"
            ))?,
            None => console.line(format!("Gender: {NO_DATA}"))?,
        }

        match &demo.birth_years {
            Some(years) => {
                console.line(format!(
                    "The earliest year of birth is ({}). And the most recent year of birth is ({}).",
                    years.earliest, years.latest
                ))?;
                console.line(format!(
                    "And the most common year of birth is ({})",
                    years.most_common
                ))?;
            }
            None => console.line(format!("Year of birth: {NO_DATA}"))?,
        }
    }

    finish(console, &timer)
}
