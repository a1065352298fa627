pub mod columns;
pub mod loader;
pub mod table;

pub use loader::{load_city, load_data, read_trips};
pub use table::TripTable;
