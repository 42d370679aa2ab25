//! Record types for generated datasets
//!
//! These are the shapes written to the intermediate JSON artifacts and sent
//! as import parameters. Serde serializes struct fields in declaration order,
//! which gives the artifacts their stable field ordering.

use serde::{Deserialize, Serialize};

/// A generated primary-subject record (player, case).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubjectRecord {
    /// Name template plus a sequential numeric suffix, unique within one run
    pub name: String,
    /// Categorical attribute (role, age group), drawn from the profile vocabulary
    pub category: String,
    /// Associated secondary-subject names (teams, drugs); may repeat
    pub groups: Vec<String>,
}

/// A generated occurrence record (match, adverse-event report).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OccurrenceRecord {
    /// Sequential identifier, unique within one run
    pub id: u64,
    /// ISO calendar date (`%Y-%m-%d`) within the profile's date window
    pub date: String,
    /// Location drawn from the profile vocabulary
    pub location: String,
    /// Exactly two secondary-subject names, chosen independently
    pub participants: Vec<String>,
}

/// Output of one generation run: two ordered record sequences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dataset {
    pub subjects: Vec<SubjectRecord>,
    pub occurrences: Vec<OccurrenceRecord>,
}

impl Dataset {
    /// Whether the run produced no records at all
    pub fn is_empty(&self) -> bool {
        self.subjects.is_empty() && self.occurrences.is_empty()
    }
}
