//! Formatting utilities used by the report output.

use unicode_width::UnicodeWidthStr;

/// Placeholder printed where a statistic has no value.
pub const NO_DATA: &str = "no data";

/// Left-align `s` in `width` terminal cells.
pub fn pad_right(s: &str, width: usize) -> String {
    let pad = width.saturating_sub(s.width());
    format!("{s}{}", " ".repeat(pad))
}

/// 2 decimal places, or `NO_DATA`.
pub fn minutes_or_no_data(value: Option<f64>) -> String {
    value
        .map(|m| format!("{m:.2}"))
        .unwrap_or_else(|| NO_DATA.to_string())
}

/// Minutes as `1d 02h 25m`; the day part is omitted below 24 hours.
pub fn mins2readable(mins: f64) -> String {
    let total = mins.round() as i64;
    let sign = if total < 0 { "-" } else { "" };
    let abs_m = total.abs();

    let days = abs_m / (24 * 60);
    let hours = (abs_m / 60) % 24;
    let minutes = abs_m % 60;

    if days > 0 {
        format!("{sign}{days}d {hours:02}h {minutes:02}m")
    } else {
        format!("{sign}{hours:02}h {minutes:02}m")
    }
}

/// `9 (09:00-09:59)` label for the busiest start hour.
pub fn hour_label(hour: u32) -> String {
    format!("{hour} ({hour:02}:00-{hour:02}:59)")
}
