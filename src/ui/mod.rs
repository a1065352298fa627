pub mod console;
pub mod messages;
pub mod report;

pub use console::Console;
