use crate::models::{City, Month, Selection, Trip};
use chrono::Weekday;

/// In-memory, read-only set of trips for one city.
///
/// Filtering never mutates: it returns a new table sharing the headers.
#[derive(Debug, Clone)]
pub struct TripTable {
    city: City,
    headers: Vec<String>,
    trips: Vec<Trip>,
}

impl TripTable {
    pub fn new(city: City, headers: Vec<String>, trips: Vec<Trip>) -> Self {
        Self {
            city,
            headers,
            trips,
        }
    }

    pub fn city(&self) -> City {
        self.city
    }

    /// Source column names, in file order.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn trips(&self) -> &[Trip] {
        &self.trips
    }

    pub fn len(&self) -> usize {
        self.trips.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trips.is_empty()
    }

    /// Keep trips started in `month` and on `day`; `None` means "all".
    pub fn filter(&self, month: Option<Month>, day: Option<Weekday>) -> TripTable {
        let trips = self
            .trips
            .iter()
            .filter(|t| month.is_none_or(|m| t.month_number() == m.number()))
            .filter(|t| day.is_none_or(|d| t.weekday() == d))
            .cloned()
            .collect();

        TripTable::new(self.city, self.headers.clone(), trips)
    }

    pub fn apply(&self, selection: &Selection) -> TripTable {
        self.filter(selection.month, selection.day)
    }

    /// Rows `offset .. offset + size`, empty once past the end.
    pub fn page(&self, offset: usize, size: usize) -> &[Trip] {
        let start = offset.min(self.trips.len());
        let end = offset.saturating_add(size).min(self.trips.len());
        &self.trips[start..end]
    }
}
