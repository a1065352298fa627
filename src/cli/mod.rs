pub mod parser;
pub mod prompts;
pub mod raw_view;
pub mod session;
