//! Command layer of the assistant.
//!
//! Turns lines of user input into directory operations and renders the
//! results as text. All errors are converted to messages here.

pub mod dispatcher;
pub mod format;
pub mod parser;

pub use dispatcher::{error_message, Assistant, Reply};
pub use parser::{parse_input, Command};
