//! GraphClient trait — the query interface to the external database

use async_trait::async_trait;

use crate::error::GraphClientResult;
use crate::models::{Params, QueryResult, ServerStatus};

/// Client interface to a Cypher graph database.
///
/// Each call is a single short-lived request/response; the full result set is
/// collected before returning. Parameters are substituted server-side, never
/// interpolated into the query string.
#[async_trait]
pub trait GraphClient: Send + Sync {
    /// Execute a read-write query with named parameters
    async fn query(&self, cypher: &str, params: &Params) -> GraphClientResult<QueryResult>;

    /// Execute a read-only query with named parameters
    async fn query_readonly(&self, cypher: &str, params: &Params)
        -> GraphClientResult<QueryResult>;

    /// Get server status
    async fn status(&self) -> GraphClientResult<ServerStatus>;

    /// Ping the server
    async fn ping(&self) -> GraphClientResult<String>;
}
