//! Core record value type.

use serde::{Deserialize, Serialize};

/// A single student record.
///
/// Records are immutable once created: the collection loop builds one from
/// validated input and appends it, and the reporting phase only reads.
/// `age` is non-negative by construction and `marks` is kept finite by
/// entry validation, so marks comparisons are total.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentRecord {
    /// Student name, taken verbatim from input (trimmed).
    pub name: String,
    /// Age in years.
    pub age: u32,
    /// Marks as a floating-point score.
    pub marks: f64,
}

impl StudentRecord {
    /// Create a new record.
    pub fn new(name: impl Into<String>, age: u32, marks: f64) -> Self {
        Self {
            name: name.into(),
            age,
            marks,
        }
    }
}

impl std::fmt::Display for StudentRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} (age {}, marks {})", self.name, self.age, self.marks)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_new() {
        let record = StudentRecord::new("Alice", 20, 90.0);
        assert_eq!(record.name, "Alice");
        assert_eq!(record.age, 20);
        assert_eq!(record.marks, 90.0);
    }

    #[test]
    fn test_record_display() {
        let record = StudentRecord::new("Bob", 22, 75.5);
        assert_eq!(record.to_string(), "Bob (age 22, marks 75.5)");
    }

    #[test]
    fn test_record_json_round_trip() {
        let record = StudentRecord::new("Carol", 21, 88.25);
        let json = serde_json::to_string(&record).unwrap();
        let back: StudentRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }
}
