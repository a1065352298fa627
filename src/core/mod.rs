//! Report computations over a filtered trip table. Nothing here prints.

pub mod duration_stats;
pub mod station_stats;
pub mod tally;
pub mod time_stats;
pub mod timer;
pub mod user_stats;
