use super::tally::{Peak, mode_by};
use crate::data::TripTable;

/// Most used start station, end station and start → end combination,
/// counted as distinct row ids. Blank station cells form no group.
#[derive(Debug, Clone, PartialEq)]
pub struct StationStats {
    pub start: Peak<String>,
    pub end: Peak<String>,
    pub trip: Peak<(String, String)>,
}

pub fn compute(table: &TripTable) -> StationStats {
    let trips = table.trips();

    let start = mode_by(trips, |t| t.start_station.as_deref());
    let end = mode_by(trips, |t| t.end_station.as_deref());
    let trip = mode_by(trips, |t| {
        t.start_station.as_deref().zip(t.end_station.as_deref())
    });

    StationStats {
        start: start.map(|(s, n)| (s.to_string(), n)),
        end: end.map(|(s, n)| (s.to_string(), n)),
        trip: trip.map(|((s, e), n)| ((s.to_string(), e.to_string()), n)),
    }
}
