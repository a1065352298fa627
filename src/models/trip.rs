use crate::models::month::Month;
use chrono::{Datelike, NaiveDateTime, Timelike, Weekday};

/// One rental, as read from a city file.
#[derive(Debug, Clone)]
pub struct Trip {
    pub row: usize,      // ⇔ position in the source file (0-based, header excluded)
    pub id: u64,         // ⇔ unnamed first column, or `row` when absent
    pub start_time: NaiveDateTime,
    pub duration_secs: Option<f64>,
    pub start_station: Option<String>,
    pub end_station: Option<String>,
    pub user_type: Option<String>,
    pub gender: Option<String>,
    pub birth_year: Option<i32>,
    pub fields: Vec<String>, // ⇔ every source column, verbatim
}

impl Trip {
    pub fn month_number(&self) -> u32 {
        self.start_time.month()
    }

    pub fn month(&self) -> Option<Month> {
        Month::from_number(self.month_number())
    }

    pub fn weekday(&self) -> Weekday {
        self.start_time.weekday()
    }

    pub fn hour(&self) -> u32 {
        self.start_time.hour()
    }
}
