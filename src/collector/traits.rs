//! Core console trait and error types.

use thiserror::Error;

/// Errors that can occur while talking to the console.
#[derive(Debug, Error)]
pub enum ConsoleError {
    /// Underlying I/O failure on the input or output stream.
    #[error("console i/o error: {0}")]
    Io(#[from] std::io::Error),
}

/// One blocking request/response exchange with the user.
///
/// The collection loop never touches stdin/stdout directly; it talks to
/// a `Console`, so tests can inject a scripted source of lines.
///
/// # Error Handling Philosophy
///
/// A `Console` only fails on **infrastructure errors** (broken pipe, closed
/// terminal). Malformed user input is not a console error: it comes back as
/// a normal line for the caller to parse and retry on. End of input is also
/// not an error; `prompt` reports it as `Ok(None)`.
pub trait Console {
    /// Display `text` and block until one line of input arrives.
    ///
    /// Returns the line with surrounding whitespace trimmed, or `None`
    /// when the input stream has ended.
    fn prompt(&mut self, text: &str) -> Result<Option<String>, ConsoleError>;

    /// Write one line of feedback to the user.
    fn say(&mut self, text: &str) -> Result<(), ConsoleError>;
}
