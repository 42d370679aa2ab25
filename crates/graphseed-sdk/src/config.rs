//! Connection configuration
//!
//! Credentials are opaque pass-through: the SDK never inspects or transforms
//! them, and the `Debug` impl redacts the password so it cannot leak into
//! logs.

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{GraphClientError, GraphClientResult};

/// Where and how to reach the graph database server.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectionConfig {
    /// Base HTTP address, e.g. "http://localhost:8080"
    pub address: String,
    pub username: String,
    pub password: String,
    /// Connect timeout in seconds; the HTTP client's default applies when
    /// unset. Request timeouts are not configured here.
    #[serde(default)]
    pub connect_timeout_secs: Option<u64>,
}

impl ConnectionConfig {
    pub fn new(address: &str, username: &str, password: &str) -> Self {
        Self {
            address: address.to_string(),
            username: username.to_string(),
            password: password.to_string(),
            connect_timeout_secs: None,
        }
    }

    /// Load a config from a YAML file with keys
    /// {address, username, password, connect_timeout_secs?}.
    pub fn from_yaml_file(path: &Path) -> GraphClientResult<Self> {
        let text = std::fs::read_to_string(path)?;
        serde_yaml::from_str(&text)
            .map_err(|e| GraphClientError::ConfigError(format!("{}: {}", path.display(), e)))
    }
}

impl fmt::Debug for ConnectionConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConnectionConfig")
            .field("address", &self.address)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("connect_timeout_secs", &self.connect_timeout_secs)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loads_yaml_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("conn.yaml");
        std::fs::write(
            &path,
            "address: http://localhost:8080\nusername: admin\npassword: secret\nconnect_timeout_secs: 5\n",
        )
        .unwrap();

        let config = ConnectionConfig::from_yaml_file(&path).unwrap();
        assert_eq!(config.address, "http://localhost:8080");
        assert_eq!(config.username, "admin");
        assert_eq!(config.password, "secret");
        assert_eq!(config.connect_timeout_secs, Some(5));
    }

    #[test]
    fn timeout_defaults_to_none() {
        let config: ConnectionConfig =
            serde_yaml::from_str("address: http://h:1\nusername: u\npassword: p\n").unwrap();
        assert_eq!(config.connect_timeout_secs, None);
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = ConnectionConfig::from_yaml_file(Path::new("/nonexistent/conn.yaml")).unwrap_err();
        assert!(matches!(err, GraphClientError::IoError(_)));
    }

    #[test]
    fn debug_redacts_password() {
        let config = ConnectionConfig::new("http://h:1", "u", "hunter2");
        let rendered = format!("{:?}", config);
        assert!(!rendered.contains("hunter2"));
        assert!(rendered.contains("<redacted>"));
    }
}
