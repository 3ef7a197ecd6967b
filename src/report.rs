//! Report Layer
//!
//! Aggregate extrema over a collected roster:
//!
//! - [`summarize`]: compute max/min marks with every tied record
//! - [`Report`]: "no data" or a [`Summary`], with text and JSON renderings
//! - [`ReportFormat`]: output format selection

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

use crate::roster::{Roster, StudentRecord};

/// Report rendering format.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, EnumString, Display, AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum ReportFormat {
    /// Human-readable text to stdout.
    Text,
    /// Pretty-printed JSON to stdout.
    Json,
}

/// One extremum value and every record tied at it.
///
/// Extrema are multi-valued over ties: `holders` contains all records
/// whose marks equal `marks`, in insertion order, never just the first
/// match.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Extremum {
    /// The extremal marks value.
    pub marks: f64,
    /// All records sharing that value, in insertion order.
    pub holders: Vec<StudentRecord>,
}

impl Extremum {
    fn over(records: &[StudentRecord], marks: f64) -> Self {
        // Exact comparison is intended: marks are finite by construction
        // and holders must share the extremum bit-for-bit.
        let holders = records.iter().filter(|r| r.marks == marks).cloned().collect();
        Self { marks, holders }
    }
}

/// Aggregate summary of a non-empty roster.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    /// Number of records collected.
    pub total: usize,
    /// Maximum marks and its tied holders.
    pub max: Extremum,
    /// Minimum marks and its tied holders.
    pub min: Extremum,
}

/// Result of summarizing a roster.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum Report {
    /// No records were entered.
    Empty,
    /// Extrema over at least one record.
    Summary(Summary),
}

impl Report {
    /// Pretty-printed JSON rendering.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Compute max/min marks over a roster, keeping every tied record.
///
/// Pure over its input: summarizing the same roster twice yields
/// identical reports. An empty roster yields [`Report::Empty`], not an
/// error.
pub fn summarize(roster: &Roster) -> Report {
    let records = roster.records();
    if records.is_empty() {
        return Report::Empty;
    }

    let max = records
        .iter()
        .map(|r| r.marks)
        .fold(f64::NEG_INFINITY, f64::max);
    let min = records.iter().map(|r| r.marks).fold(f64::INFINITY, f64::min);

    Report::Summary(Summary {
        total: records.len(),
        max: Extremum::over(records, max),
        min: Extremum::over(records, min),
    })
}

impl std::fmt::Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "No students entered."),
            Self::Summary(summary) => {
                writeln!(f, "=== Results ===")?;
                writeln!(
                    f,
                    "Max marks: {} | Students: [{}]",
                    summary.max.marks,
                    join(&summary.max.holders)
                )?;
                write!(
                    f,
                    "Min marks: {} | Students: [{}]",
                    summary.min.marks,
                    join(&summary.min.holders)
                )
            }
        }
    }
}

fn join(holders: &[StudentRecord]) -> String {
    holders
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
