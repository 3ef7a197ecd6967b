//! Markbook - Interactive Marks Collection
//!
//! This crate collects student records (name, age, marks) from an
//! interactive console until a sentinel value is entered, then reports the
//! maximum and minimum marks together with *every* record tied at each
//! extremum. It can be used as a library, or run as a standalone binary
//! with the `markbook` executable.
//!
//! # Architecture
//!
//! - **Collector**: sentinel-driven collection loop over a pluggable console
//! - **Roster**: insertion-ordered, append-only record collection
//! - **Report**: tie-inclusive extrema with text and JSON renderings
//! - **Config**: YAML configuration with validation and defaults
//!
//! # Example
//!
//! ```rust,no_run
//! use markbook::{CollectSession, StdioConsole, summarize};
//!
//! fn main() -> anyhow::Result<()> {
//!     let mut console = StdioConsole::new();
//!     let roster = CollectSession::new(-1).collect(&mut console)?;
//!     println!("{}", summarize(&roster));
//!     Ok(())
//! }
//! ```

pub mod collector;
pub mod config;
pub mod report;
pub mod roster;

pub use collector::{CollectSession, Console, ConsoleError, ParseError, SessionError, StdioConsole};
pub use config::{AppConfig, ConfigError};
pub use report::{Extremum, Report, ReportFormat, Summary, summarize};
pub use roster::{Roster, StudentRecord};
