//! Collector Layer
//!
//! Interactive record collection behind a pluggable console seam:
//!
//! - [`Console`]: one blocking prompt/response exchange with the user
//! - [`StdioConsole`]: stdin/stdout implementation
//! - [`CollectSession`]: sentinel-driven collection loop
//!
//! # Example
//!
//! ```rust,no_run
//! use markbook::{CollectSession, StdioConsole};
//!
//! # fn main() -> anyhow::Result<()> {
//! let mut console = StdioConsole::new();
//! let roster = CollectSession::new(-1).collect(&mut console)?;
//! println!("collected {} records", roster.len());
//! # Ok(())
//! # }
//! ```

mod session;
mod stdio;
mod traits;

pub use session::{CollectSession, ParseError, SessionError};
pub use stdio::StdioConsole;
pub use traits::{Console, ConsoleError};
