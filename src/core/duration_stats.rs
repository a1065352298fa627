use crate::data::TripTable;

#[derive(Debug, Clone, PartialEq)]
pub struct DurationStats {
    /// Trips with a recorded duration; blank cells are left out.
    pub trips: usize,
    pub total_minutes: f64,
    /// `None` when no trip has a duration.
    pub mean_minutes: Option<f64>,
}

pub fn compute(table: &TripTable) -> DurationStats {
    let durations: Vec<f64> = table.trips().iter().filter_map(|t| t.duration_secs).collect();
    let trips = durations.len();
    let total_minutes = durations.iter().sum::<f64>() / 60.0;

    DurationStats {
        trips,
        total_minutes,
        mean_minutes: (trips > 0).then(|| total_minutes / trips as f64),
    }
}
