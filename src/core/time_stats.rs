use super::tally::{Peak, count_over, first_max};
use crate::data::TripTable;
use crate::models::{FilterMode, Month};
use crate::utils::date::WEEKDAYS;
use chrono::Weekday;

/// Busiest month, weekday and start hour.
///
/// `month` and `day` are `None` when the filter mode already pins them.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeStats {
    pub month: Option<Peak<Month>>,
    pub day: Option<Peak<Weekday>>,
    pub hour: Peak<u32>,
}

pub fn compute(table: &TripTable, mode: FilterMode) -> TimeStats {
    let trips = table.trips();

    let month = (!mode.filters_month())
        .then(|| first_max(count_over(trips, &Month::ALL, |t| t.month())));

    let day = (!mode.filters_day())
        .then(|| first_max(count_over(trips, &WEEKDAYS, |t| Some(t.weekday()))));

    let hours: Vec<u32> = (0..24).collect();
    let hour = first_max(count_over(trips, &hours[..], |t| Some(t.hour())));

    TimeStats { month, day, hour }
}
