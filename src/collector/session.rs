//! Sentinel-driven record collection session.

use thiserror::Error;

use crate::roster::{Roster, StudentRecord};

use super::traits::{Console, ConsoleError};

/// Retry message shown when an entry is rejected.
const RETRY_MESSAGE: &str = "Invalid number. Try again.";

/// A rejected record entry.
///
/// Raised when the age or marks text cannot be converted to its numeric
/// type. Always recoverable: the session reports it and re-prompts, and
/// the rejected entry never reaches the roster.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    /// Age text did not parse as a non-negative integer.
    #[error("invalid age: {0:?}")]
    Age(String),

    /// Marks text did not parse as a finite number.
    #[error("invalid marks: {0:?}")]
    Marks(String),
}

/// Errors that end a session.
///
/// Only infrastructure failures end a session; rejected entries are
/// handled inside the loop as [`ParseError`] retries.
#[derive(Debug, Error)]
pub enum SessionError {
    /// Console I/O failure.
    #[error("console error: {0}")]
    Console(#[from] ConsoleError),
}

/// Interactive collection of student records until a sentinel is seen.
///
/// The loop requests a name, age and marks per record, appends on success,
/// and re-prompts the whole entry on a [`ParseError`]. Two exit paths are
/// supported: entering the sentinel as the name (checked before age/marks
/// are requested), and entering the sentinel as the continuation choice
/// after a successful add. End of input on any prompt also ends the
/// session, keeping the records gathered so far.
#[derive(Debug)]
pub struct CollectSession {
    sentinel: i64,
    roster: Roster,
}

impl CollectSession {
    /// Create a session that stops on `sentinel`.
    pub fn new(sentinel: i64) -> Self {
        Self {
            sentinel,
            roster: Roster::new(),
        }
    }

    /// The sentinel value this session stops on.
    pub fn sentinel(&self) -> i64 {
        self.sentinel
    }

    /// Parse one entry and append it to the roster.
    ///
    /// `age_text` must parse as a non-negative integer and `marks_text` as
    /// a finite number. On failure nothing is appended; the rejected entry
    /// is discarded entirely rather than partially stored.
    pub fn add_record(
        &mut self,
        name: impl Into<String>,
        age_text: &str,
        marks_text: &str,
    ) -> Result<StudentRecord, ParseError> {
        let age: u32 = age_text
            .trim()
            .parse()
            .map_err(|_| ParseError::Age(age_text.to_string()))?;

        let marks: f64 = marks_text
            .trim()
            .parse()
            .map_err(|_| ParseError::Marks(marks_text.to_string()))?;
        // "nan"/"inf" parse as f64 but would break the total order on marks
        if !marks.is_finite() {
            return Err(ParseError::Marks(marks_text.to_string()));
        }

        let record = StudentRecord::new(name, age, marks);
        self.roster.push(record.clone());
        Ok(record)
    }

    /// Run the collection loop over `console` and return the roster.
    pub fn collect<C: Console>(mut self, console: &mut C) -> Result<Roster, SessionError> {
        let stop_word = self.sentinel.to_string();
        let name_prompt = format!("Name ({} to stop): ", self.sentinel);
        let choice_prompt = format!("Choice ({} to stop): ", self.sentinel);

        loop {
            let Some(name) = console.prompt(&name_prompt)? else {
                tracing::debug!("input ended, closing session");
                break;
            };
            if name == stop_word {
                tracing::debug!("sentinel name received, closing session");
                break;
            }

            let Some(age_text) = console.prompt("Age: ")? else {
                break;
            };
            let Some(marks_text) = console.prompt("Marks: ")? else {
                break;
            };

            match self.add_record(name, &age_text, &marks_text) {
                Ok(record) => {
                    tracing::debug!(name = %record.name, marks = record.marks, "Record added");
                    console.say("Added.")?;
                }
                Err(e) => {
                    tracing::warn!(error = %e, "Entry rejected");
                    console.say(RETRY_MESSAGE)?;
                    continue;
                }
            }

            let Some(choice) = console.prompt(&choice_prompt)? else {
                break;
            };
            match choice.parse::<i64>() {
                Ok(c) if c == self.sentinel => {
                    tracing::debug!("sentinel choice received, closing session");
                    break;
                }
                Ok(_) => {}
                // A malformed choice is not the sentinel; keep collecting
                Err(_) => {
                    tracing::debug!(input = %choice, "Continuation choice was not a number");
                }
            }
        }

        tracing::info!(records = self.roster.len(), "Collection finished");
        Ok(self.roster)
    }
}
