//! Data models for the Graphseed SDK
//!
//! These types mirror the server's API response structures.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Named query parameters, substituted server-side.
pub type Params = serde_json::Map<String, serde_json::Value>;

/// Result of executing a query: the declared output aliases and the full
/// result set, collected in order before returning.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryResult {
    /// Output aliases declared by the query's RETURN clause
    pub columns: Vec<String>,
    /// Tabular result rows, one entry per column
    pub records: Vec<Vec<serde_json::Value>>,
}

impl QueryResult {
    /// Number of result records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the result is empty
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Rows as ordered alias-to-value mappings, following column order.
    /// Rows shorter than the column list are padded with nulls.
    pub fn row_maps(&self) -> Vec<IndexMap<String, serde_json::Value>> {
        self.records
            .iter()
            .map(|row| {
                self.columns
                    .iter()
                    .enumerate()
                    .map(|(i, column)| {
                        let value = row.get(i).cloned().unwrap_or(serde_json::Value::Null);
                        (column.clone(), value)
                    })
                    .collect()
            })
            .collect()
    }
}

/// Server status information
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerStatus {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Server version
    pub version: String,
}
