//! RemoteClient — HTTP client for a running graph database server
//!
//! Talks to the server's `/api/query` and `/api/status` endpoints with HTTP
//! basic auth. The handle is acquired with [`RemoteClient::connect`], which
//! fails fast on an unreachable address, and released exactly once whether
//! the caller goes through [`RemoteClient::close`] or lets the handle drop.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use crate::client::GraphClient;
use crate::config::ConnectionConfig;
use crate::error::{GraphClientError, GraphClientResult};
use crate::models::{Params, QueryResult, ServerStatus};

/// Network client for the external graph database.
#[derive(Debug)]
pub struct RemoteClient {
    base_url: String,
    username: String,
    password: String,
    http: Client,
    released: Arc<AtomicBool>,
}

impl RemoteClient {
    /// Connect to the server described by `config` and verify it with a
    /// status round-trip. An unreachable address or rejected credentials
    /// fail here, before any query is issued.
    pub async fn connect(config: &ConnectionConfig) -> GraphClientResult<Self> {
        let mut builder = Client::builder();
        if let Some(secs) = config.connect_timeout_secs {
            builder = builder.connect_timeout(Duration::from_secs(secs));
        }
        let client = Self {
            base_url: config.address.trim_end_matches('/').to_string(),
            username: config.username.clone(),
            password: config.password.clone(),
            http: builder.build()?,
            released: Arc::new(AtomicBool::new(false)),
        };
        client.fetch_status().await?;
        debug!(address = %client.base_url, "connected to graph database");
        Ok(client)
    }

    /// Release the connection handle. Dropping the handle releases it too;
    /// either way the release happens exactly once.
    pub fn close(self) {}

    /// Execute a POST request to /api/query. Placeholder values travel in
    /// the request body and are substituted server-side.
    async fn post_query(
        &self,
        cypher: &str,
        params: &Params,
        readonly: bool,
    ) -> GraphClientResult<QueryResult> {
        let url = format!("{}/api/query", self.base_url);
        let body = serde_json::json!({
            "query": cypher,
            "params": params,
            "readonly": readonly,
        });

        let response = self
            .http
            .post(&url)
            .basic_auth(&self.username, Some(&self.password))
            .json(&body)
            .send()
            .await?;

        if response.status().is_success() {
            let result: QueryResult = response.json().await?;
            Ok(result)
        } else {
            let error_body: serde_json::Value = response
                .json()
                .await
                .unwrap_or_else(|_| serde_json::json!({"error": "Unknown error"}));
            let msg = error_body
                .get("error")
                .and_then(|v| v.as_str())
                .unwrap_or("Unknown error")
                .to_string();
            Err(GraphClientError::QueryError(msg))
        }
    }

    async fn fetch_status(&self) -> GraphClientResult<ServerStatus> {
        let url = format!("{}/api/status", self.base_url);
        let response = self
            .http
            .get(&url)
            .basic_auth(&self.username, Some(&self.password))
            .send()
            .await?;

        if response.status().is_success() {
            let status: ServerStatus = response.json().await?;
            Ok(status)
        } else {
            Err(GraphClientError::ConnectionError(format!(
                "Status endpoint returned {}",
                response.status()
            )))
        }
    }

    // True only for the call that performed the release.
    fn release(&self) -> bool {
        !self.released.swap(true, Ordering::SeqCst)
    }
}

impl Drop for RemoteClient {
    fn drop(&mut self) {
        if self.release() {
            debug!(address = %self.base_url, "connection released");
        }
    }
}

#[async_trait]
impl GraphClient for RemoteClient {
    async fn query(&self, cypher: &str, params: &Params) -> GraphClientResult<QueryResult> {
        self.post_query(cypher, params, false).await
    }

    async fn query_readonly(
        &self,
        cypher: &str,
        params: &Params,
    ) -> GraphClientResult<QueryResult> {
        self.post_query(cypher, params, true).await
    }

    async fn status(&self) -> GraphClientResult<ServerStatus> {
        self.fetch_status().await
    }

    async fn ping(&self) -> GraphClientResult<String> {
        let status = self.fetch_status().await?;
        if status.status == "healthy" {
            Ok("PONG".to_string())
        } else {
            Err(GraphClientError::ConnectionError(format!(
                "Server unhealthy: {}",
                status.status
            )))
        }
    }
}
