//! Standard input/output console.

use std::io::{BufRead, Write};

use super::traits::{Console, ConsoleError};

/// [`Console`] over the process's stdin and stdout.
///
/// Prompts are written without a trailing newline and flushed before the
/// read, so the cursor waits on the same line as the prompt.
#[derive(Debug, Default)]
pub struct StdioConsole;

impl StdioConsole {
    /// Create a new stdio console.
    pub fn new() -> Self {
        Self
    }
}

impl Console for StdioConsole {
    fn prompt(&mut self, text: &str) -> Result<Option<String>, ConsoleError> {
        let mut stdout = std::io::stdout().lock();
        write!(stdout, "{text}")?;
        stdout.flush()?;

        let mut line = String::new();
        let bytes = std::io::stdin().lock().read_line(&mut line)?;
        if bytes == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn say(&mut self, text: &str) -> Result<(), ConsoleError> {
        let mut stdout = std::io::stdout().lock();
        writeln!(stdout, "{text}")?;
        Ok(())
    }
}
