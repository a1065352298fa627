use super::{city::City, month::Month};
use crate::utils::date::{weekday_from_input, weekday_name};
use chrono::Weekday;

/// Which derived columns the user narrows the dataset by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterMode {
    Month,
    Day,
    Both,
    None,
}

impl FilterMode {
    pub fn from_input(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "month" => Some(Self::Month),
            "day" => Some(Self::Day),
            "both" => Some(Self::Both),
            "none" | "without" | "without filter" => Some(Self::None),
            _ => None,
        }
    }

    pub fn filters_month(&self) -> bool {
        matches!(self, FilterMode::Month | FilterMode::Both)
    }

    pub fn filters_day(&self) -> bool {
        matches!(self, FilterMode::Day | FilterMode::Both)
    }
}

/// `all` → `Some(None)`, a supported month → `Some(Some(m))`.
pub fn parse_month_choice(s: &str) -> Option<Option<Month>> {
    if s.trim().eq_ignore_ascii_case("all") {
        Some(None)
    } else {
        Month::from_input(s).map(Some)
    }
}

/// `all` → `Some(None)`, a weekday name → `Some(Some(d))`.
pub fn parse_day_choice(s: &str) -> Option<Option<Weekday>> {
    if s.trim().eq_ignore_ascii_case("all") {
        Some(None)
    } else {
        weekday_from_input(s).map(Some)
    }
}

/// Validated answers of one prompt round.
///
/// `month` is `None` ("all") unless the mode filters by month, and the same
/// holds for `day`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    pub city: City,
    pub mode: FilterMode,
    pub month: Option<Month>,
    pub day: Option<Weekday>,
}

impl Selection {
    pub fn new(city: City, mode: FilterMode, month: Option<Month>, day: Option<Weekday>) -> Self {
        Self {
            city,
            mode,
            month: month.filter(|_| mode.filters_month()),
            day: day.filter(|_| mode.filters_day()),
        }
    }

    pub fn describe(&self) -> String {
        format!(
            "city={}, month={}, day={}",
            self.city.as_str(),
            self.month.map(|m| m.name()).unwrap_or("all"),
            self.day.map(weekday_name).unwrap_or("all"),
        )
    }
}
