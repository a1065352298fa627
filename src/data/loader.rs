//! CSV → TripTable loading and selection filtering.

use super::columns::{self, Columns};
use super::table::TripTable;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::{City, Selection, Trip};
use crate::utils::date::parse_start_time;
use csv::{ReaderBuilder, StringRecord};
use std::fs::File;
use std::io::Read;

/// Load the city selected by `selection` and narrow it by month/day.
pub fn load_data(cfg: &Config, selection: &Selection) -> AppResult<TripTable> {
    let table = load_city(cfg, selection.city)?;
    let filtered = table.apply(selection);

    tracing::debug!(
        selection = %selection.describe(),
        total = table.len(),
        kept = filtered.len(),
        "filters applied"
    );

    Ok(filtered)
}

/// Read the whole file configured for `city`.
pub fn load_city(cfg: &Config, city: City) -> AppResult<TripTable> {
    let path = cfg.city_path(city);
    let file = File::open(&path).map_err(|e| {
        tracing::warn!(path = %path.display(), error = %e, "city file unavailable");
        AppError::DataUnavailable {
            city: city.as_str().to_string(),
            path: path.clone(),
        }
    })?;

    let table = read_trips(city, file, &path.display().to_string())?;
    tracing::debug!(path = %path.display(), rows = table.len(), "city file loaded");
    Ok(table)
}

/// Parse trips for `city` from any CSV source. `source` names the input in
/// error messages.
pub fn read_trips<R: Read>(city: City, reader: R, source: &str) -> AppResult<TripTable> {
    let mut rdr = ReaderBuilder::new().has_headers(true).from_reader(reader);

    let headers = rdr.headers()?.clone();
    let cols = Columns::resolve(&headers, city.has_demographics(), source)?;

    let mut trips = Vec::new();
    for (row, result) in rdr.records().enumerate() {
        let record = result?;
        trips.push(parse_trip(&record, row, &cols, source)?);
    }

    Ok(TripTable::new(
        city,
        headers.iter().map(str::to_string).collect(),
        trips,
    ))
}

fn parse_trip(record: &StringRecord, row: usize, cols: &Columns, source: &str) -> AppResult<Trip> {
    let line = record.position().map(|p| p.line()).unwrap_or(row as u64 + 2);
    let malformed = |what: String| AppError::MalformedDataset(format!("{source}, line {line}: {what}"));

    let field = |idx: usize| record.get(idx).unwrap_or("").trim();
    let optional = |idx: Option<usize>| {
        idx.map(field)
            .filter(|v| !v.is_empty())
            .map(str::to_string)
    };

    let id = match cols.id {
        Some(idx) => field(idx)
            .parse::<u64>()
            .map_err(|_| malformed(format!("invalid row id '{}'", field(idx))))?,
        None => row as u64,
    };

    let raw_start = field(cols.start_time);
    let start_time = parse_start_time(raw_start).ok_or_else(|| {
        malformed(format!("invalid {} '{raw_start}'", columns::START_TIME))
    })?;

    let duration_secs = match optional(Some(cols.duration)) {
        Some(raw) => Some(
            raw.parse::<f64>()
                .ok()
                .filter(|d| d.is_finite())
                .ok_or_else(|| malformed(format!("invalid {} '{raw}'", columns::TRIP_DURATION)))?,
        ),
        None => None,
    };

    let birth_year = match optional(cols.birth_year) {
        Some(raw) => Some(parse_birth_year(&raw).ok_or_else(|| {
            malformed(format!("invalid {} '{raw}'", columns::BIRTH_YEAR))
        })?),
        None => None,
    };

    Ok(Trip {
        row,
        id,
        start_time,
        duration_secs,
        start_station: optional(Some(cols.start_station)),
        end_station: optional(Some(cols.end_station)),
        user_type: optional(Some(cols.user_type)),
        gender: optional(cols.gender),
        birth_year,
        fields: record.iter().map(str::to_string).collect(),
    })
}

/// Plausible range for a rider's birth year.
const BIRTH_YEAR_RANGE: std::ops::RangeInclusive<f64> = 1000.0..=9999.0;

/// Birth years are stored as floats (`1985.0`) in the source files.
fn parse_birth_year(raw: &str) -> Option<i32> {
    let value = raw.parse::<f64>().ok()?;
    if value.fract() == 0.0 && BIRTH_YEAR_RANGE.contains(&value) {
        Some(value as i32)
    } else {
        None
    }
}
