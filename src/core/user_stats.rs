use super::tally::{distinct_ids_by, first_max};
use crate::data::TripTable;
use crate::errors::{AppError, AppResult};

#[derive(Debug, Clone, PartialEq)]
pub struct UserStats {
    /// Distinct riders per user type, ascending by type.
    pub user_types: Vec<(String, usize)>,
    /// `None` for cities without demographic columns.
    pub demographics: Option<Demographics>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Demographics {
    /// The two gender categories with their counts; `None` on an empty table.
    pub genders: Option<[(String, usize); 2]>,
    pub birth_years: Option<BirthYears>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BirthYears {
    pub earliest: i32,
    pub latest: i32,
    pub most_common: i32,
    pub most_common_count: usize,
}

pub fn compute(table: &TripTable) -> AppResult<UserStats> {
    let trips = table.trips();

    let user_types = distinct_ids_by(trips, |t| t.user_type.as_deref())
        .into_iter()
        .map(|(k, n)| (k.to_string(), n))
        .collect();

    let demographics = if table.city().has_demographics() {
        Some(Demographics {
            genders: gender_pair(table)?,
            birth_years: birth_years(table),
        })
    } else {
        None
    };

    Ok(UserStats {
        user_types,
        demographics,
    })
}

/// Gender counts are reported as exactly two categories; any other shape is
/// a dataset problem.
fn gender_pair(table: &TripTable) -> AppResult<Option<[(String, usize); 2]>> {
    if table.is_empty() {
        return Ok(None);
    }

    let groups: Vec<(String, usize)> = distinct_ids_by(table.trips(), |t| t.gender.as_deref())
        .into_iter()
        .map(|(k, n)| (k.to_string(), n))
        .collect();

    match <[(String, usize); 2]>::try_from(groups) {
        Ok(pair) => Ok(Some(pair)),
        Err(groups) => {
            let names: Vec<&str> = groups.iter().map(|(g, _)| g.as_str()).collect();
            Err(AppError::MalformedDataset(format!(
                "expected 2 gender categories in {} data, found {}: [{}]",
                table.city().as_str(),
                groups.len(),
                names.join(", ")
            )))
        }
    }
}

fn birth_years(table: &TripTable) -> Option<BirthYears> {
    let trips = table.trips();
    let years = trips.iter().filter_map(|t| t.birth_year);

    let earliest = years.clone().min()?;
    let latest = years.max()?;
    let (most_common, most_common_count) = first_max(distinct_ids_by(trips, |t| t.birth_year))?;

    Some(BirthYears {
        earliest,
        latest,
        most_common,
        most_common_count,
    })
}
