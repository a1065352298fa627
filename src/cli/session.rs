use super::prompts::get_filters;
use super::raw_view::view_raw_data;
use crate::config::Config;
use crate::data::load_data;
use crate::errors::{AppError, AppResult};
use crate::models::Selection;
use crate::ui::Console;
use crate::ui::report::{
    print_duration_stats, print_station_stats, print_time_stats, print_user_stats,
};
use std::io::{BufRead, Write};

const RESTART_PROMPT: &str = "\nWould you like to restart? Enter yes or no.\n";

/// One full pass: load, four reports, raw rows.
pub fn run_iteration<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    cfg: &Config,
    selection: &Selection,
) -> AppResult<()> {
    let table = load_data(cfg, selection)?;
    console.success(format!(
        "{} trips selected for {}",
        table.len(),
        selection.describe()
    ))?;

    print_time_stats(console, &table, selection.mode)?;
    print_station_stats(console, &table)?;
    print_duration_stats(console, &table)?;
    print_user_stats(console, &table)?;
    view_raw_data(console, &table, cfg.page_size)?;
    Ok(())
}

/// Prompt → report → restart loop. Dataset errors end only the current
/// iteration; closed input ends the session normally.
pub fn run_session<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    cfg: &Config,
) -> AppResult<()> {
    loop {
        let selection = match get_filters(console) {
            Ok(s) => s,
            Err(AppError::InputClosed) => break,
            Err(e) => return Err(e),
        };

        match run_iteration(console, cfg, &selection) {
            Ok(()) => {}
            Err(e) if e.is_dataset_error() => {
                tracing::warn!(selection = %selection.describe(), error = %e, "iteration aborted");
                console.error(&e)?;
            }
            Err(e) => return Err(e),
        }

        if !console.confirm(RESTART_PROMPT)? {
            break;
        }
    }

    console.info("Goodbye!")?;
    Ok(())
}
