use ansi_term::{Colour, Style};
use std::fmt;

/// Icons
const ICON_INFO: &str = "ℹ️";
const ICON_OK: &str = "✅";
const ICON_WARN: &str = "⚠️";
const ICON_ERR: &str = "❌";

fn styled<T: fmt::Display>(colour: Colour, icon: &str, msg: T) -> String {
    format!("{} {}", Style::new().bold().fg(colour).paint(icon), msg)
}

pub fn info_line<T: fmt::Display>(msg: T) -> String {
    styled(Colour::Blue, ICON_INFO, msg)
}

pub fn success_line<T: fmt::Display>(msg: T) -> String {
    styled(Colour::Green, ICON_OK, msg)
}

pub fn warning_line<T: fmt::Display>(msg: T) -> String {
    styled(Colour::Yellow, ICON_WARN, msg)
}

pub fn error_line<T: fmt::Display>(msg: T) -> String {
    styled(Colour::Red, ICON_ERR, msg)
}

pub fn error<T: fmt::Display>(msg: T) {
    eprintln!("{}", error_line(msg));
}

/// Formatted section header
pub fn header<T: fmt::Display>(msg: T) -> String {
    Style::new().bold().fg(Colour::Blue).paint(msg.to_string()).to_string()
}
