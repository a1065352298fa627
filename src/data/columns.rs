//! Header → column index resolution for city files.

use crate::errors::{AppError, AppResult};
use csv::StringRecord;

pub const START_TIME: &str = "Start Time";
pub const TRIP_DURATION: &str = "Trip Duration";
pub const START_STATION: &str = "Start Station";
pub const END_STATION: &str = "End Station";
pub const USER_TYPE: &str = "User Type";
pub const GENDER: &str = "Gender";
pub const BIRTH_YEAR: &str = "Birth Year";

/// Header names accepted for the leading row identifier column.
const ID_HEADERS: [&str; 3] = ["", "Unnamed: 0", "id"];

#[derive(Debug, Clone)]
pub struct Columns {
    pub id: Option<usize>,
    pub start_time: usize,
    pub duration: usize,
    pub start_station: usize,
    pub end_station: usize,
    pub user_type: usize,
    pub gender: Option<usize>,
    pub birth_year: Option<usize>,
}

fn position(headers: &StringRecord, name: &str) -> Option<usize> {
    headers.iter().position(|h| h.trim() == name)
}

fn require(headers: &StringRecord, name: &str, source: &str) -> AppResult<usize> {
    position(headers, name).ok_or_else(|| {
        AppError::MalformedDataset(format!("{source}: missing required column '{name}'"))
    })
}

impl Columns {
    /// Resolve every column the reports read. `demographics` makes
    /// `Gender` and `Birth Year` mandatory.
    pub fn resolve(headers: &StringRecord, demographics: bool, source: &str) -> AppResult<Self> {
        let id = headers
            .get(0)
            .filter(|h| ID_HEADERS.contains(&h.trim()))
            .map(|_| 0);

        let (gender, birth_year) = if demographics {
            (
                Some(require(headers, GENDER, source)?),
                Some(require(headers, BIRTH_YEAR, source)?),
            )
        } else {
            (None, None)
        };

        Ok(Self {
            id,
            start_time: require(headers, START_TIME, source)?,
            duration: require(headers, TRIP_DURATION, source)?,
            start_station: require(headers, START_STATION, source)?,
            end_station: require(headers, END_STATION, source)?,
            user_type: require(headers, USER_TYPE, source)?,
            gender,
            birth_year,
        })
    }
}
