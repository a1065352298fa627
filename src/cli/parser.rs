use clap::Parser;
use std::path::PathBuf;

/// Command-line interface definition for bikeshare.
/// Everything else is asked interactively.
#[derive(Parser, Debug)]
#[command(
    name = "bikeshare",
    version = env!("CARGO_PKG_VERSION"),
    about = "Explore US bikeshare data interactively: busiest times, stations, trip durations and riders",
    long_about = None
)]
pub struct Cli {
    /// Directory holding chicago.csv, new_york_city.csv and washington.csv
    #[arg(long = "data-dir", value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// YAML configuration file (city file names, page size, separator)
    #[arg(long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Print debug diagnostics on stderr
    #[arg(long, short = 'v')]
    pub verbose: bool,
}
