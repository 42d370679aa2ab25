//! Bulk import of generated records
//!
//! Import goes through the database's own query facility: one `UNWIND $rows`
//! query per entity class, with the records carried as a query parameter.
//! The batch either fully succeeds under the server's transaction semantics
//! or the caller sees the server's error; there is no partial-success report.

use async_trait::async_trait;
use graphseed::record::{OccurrenceRecord, SubjectRecord};
use tracing::debug;

use crate::client::GraphClient;
use crate::error::{GraphClientError, GraphClientResult};
use crate::models::Params;

/// What repeated imports do with records that already exist.
///
/// Duplicate handling is deliberately an explicit caller choice: the external
/// service's own behavior on duplicates is not assumed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DuplicatePolicy {
    /// `CREATE` every row; a rerun with the same identifiers produces
    /// duplicate nodes, exactly as the server would natively behave
    Create,
    /// `MERGE` on the record identifier; a rerun updates in place
    Merge,
}

/// Extension trait adding bulk import to any [`GraphClient`].
#[async_trait]
pub trait ImportClient: GraphClient {
    /// Import subject records as `:<label>` nodes. Returns the number of
    /// rows submitted.
    async fn import_subjects(
        &self,
        label: &str,
        records: &[SubjectRecord],
        policy: DuplicatePolicy,
    ) -> GraphClientResult<u64> {
        let cypher = subject_import_query(validate_label(label)?, policy);
        self.run_import(&cypher, serde_json::to_value(records)?).await?;
        debug!(label, rows = records.len(), "imported subject records");
        Ok(records.len() as u64)
    }

    /// Import occurrence records as `:<label>` nodes. Returns the number of
    /// rows submitted.
    async fn import_occurrences(
        &self,
        label: &str,
        records: &[OccurrenceRecord],
        policy: DuplicatePolicy,
    ) -> GraphClientResult<u64> {
        let cypher = occurrence_import_query(validate_label(label)?, policy);
        self.run_import(&cypher, serde_json::to_value(records)?).await?;
        debug!(label, rows = records.len(), "imported occurrence records");
        Ok(records.len() as u64)
    }

    #[doc(hidden)]
    async fn run_import(&self, cypher: &str, rows: serde_json::Value) -> GraphClientResult<()> {
        let mut params = Params::new();
        params.insert("rows".to_string(), rows);
        self.query(cypher, &params).await?;
        Ok(())
    }
}

#[async_trait]
impl<T: GraphClient + ?Sized> ImportClient for T {}

// Labels cannot be parameterized in the query language, so the label is the
// one piece spliced into the query text. Restrict it to identifier characters.
fn validate_label(label: &str) -> GraphClientResult<&str> {
    let valid = !label.is_empty()
        && label.chars().next().is_some_and(|c| c.is_ascii_alphabetic())
        && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '_');
    if valid {
        Ok(label)
    } else {
        Err(GraphClientError::QueryError(format!(
            "invalid node label: {:?}",
            label
        )))
    }
}

fn subject_import_query(label: &str, policy: DuplicatePolicy) -> String {
    match policy {
        DuplicatePolicy::Create => format!(
            "UNWIND $rows AS row \
             CREATE (s:{label} {{name: row.name, category: row.category, groups: row.groups}})"
        ),
        DuplicatePolicy::Merge => format!(
            "UNWIND $rows AS row \
             MERGE (s:{label} {{name: row.name}}) \
             SET s.category = row.category, s.groups = row.groups"
        ),
    }
}

fn occurrence_import_query(label: &str, policy: DuplicatePolicy) -> String {
    match policy {
        DuplicatePolicy::Create => format!(
            "UNWIND $rows AS row \
             CREATE (o:{label} {{id: row.id, date: row.date, location: row.location, \
             participants: row.participants}})"
        ),
        DuplicatePolicy::Merge => format!(
            "UNWIND $rows AS row \
             MERGE (o:{label} {{id: row.id}}) \
             SET o.date = row.date, o.location = row.location, \
             o.participants = row.participants"
        ),
    }
}
