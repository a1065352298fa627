//! bikeshare library root.
//! Exposes the CLI parser, the interactive session, and the data/report
//! modules it is built from.

pub mod cli;
pub mod config;
pub mod core;
pub mod data;
pub mod errors;
pub mod logging;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::Cli;
use config::Config;
use errors::AppResult;
use std::io;
use ui::Console;

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    // 1️⃣ parse CLI
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);

    // 2️⃣ load config once, then apply the command-line override
    let mut cfg = Config::load(cli.config.as_deref())?;
    if let Some(dir) = &cli.data_dir {
        cfg.data_dir = dir.clone();
    }
    tracing::debug!(data_dir = %cfg.data_dir.display(), page_size = cfg.page_size, "configuration ready");

    // 3️⃣ interactive session on stdin/stdout
    let stdin = io::stdin();
    let mut console = Console::new(stdin.lock(), io::stdout()).with_separator(cfg.separator());
    cli::session::run_session(&mut console, &cfg)
}
