//! Graphseed SDK — client library for an external Cypher graph database
//!
//! Provides [`RemoteClient`], an HTTP client for a running graph database
//! server, behind the [`GraphClient`] trait. Queries are parameterized:
//! placeholder values travel in the request body and are substituted
//! server-side, never spliced into the query string.
//!
//! Extension trait:
//! - **[`ImportClient`]** — bulk import of generated records through the
//!   database's own query facility, with an explicit [`DuplicatePolicy`]
//!
//! # Quick Start
//!
//! ```no_run
//! use graphseed_sdk::{ConnectionConfig, GraphClient, Params, RemoteClient};
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = ConnectionConfig::new("http://localhost:8080", "admin", "secret");
//!     let client = RemoteClient::connect(&config).await.unwrap();
//!
//!     let mut params = Params::new();
//!     params.insert("role".to_string(), "Bowler".into());
//!     let result = client
//!         .query_readonly("MATCH (p:Player {role: $role}) RETURN p.name", &params)
//!         .await
//!         .unwrap();
//!     println!("Found {} records", result.len());
//!
//!     client.close();
//! }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod import;
pub mod models;
pub mod remote;

pub use client::GraphClient;
pub use config::ConnectionConfig;
pub use error::{GraphClientError, GraphClientResult};
pub use import::{DuplicatePolicy, ImportClient};
pub use models::{Params, QueryResult, ServerStatus};
pub use remote::RemoteClient;
