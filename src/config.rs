//! Stringvault configuration management

use crate::strings::StringStore;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main stringvault configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// HTTP server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Storage configuration
    #[serde(default)]
    pub storage: StorageConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to
    pub host: String,

    /// Port to listen on
    pub port: u16,

    /// Allowed CORS origins; empty means any origin
    #[serde(default)]
    pub cors_origins: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
            cors_origins: Vec::new(),
        }
    }
}

/// Storage configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Path of the JSON snapshot file
    pub path: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            path: StringStore::default_path(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_round_trips_through_toml() {
        let config = ServiceConfig::default();
        let toml = toml::to_string_pretty(&config).unwrap();
        let parsed: ServiceConfig = toml::from_str(&toml).unwrap();
        assert_eq!(parsed.server.host, config.server.host);
        assert_eq!(parsed.server.port, config.server.port);
        assert_eq!(parsed.storage.path, config.storage.path);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let parsed: ServiceConfig = toml::from_str(
            r#"
            [server]
            host = "0.0.0.0"
            port = 8080
            "#,
        )
        .unwrap();
        assert_eq!(parsed.server.host, "0.0.0.0");
        assert_eq!(parsed.server.port, 8080);
        assert!(parsed.server.cors_origins.is_empty());
        assert_eq!(parsed.storage.path, StringStore::default_path());
    }

    #[test]
    fn test_empty_config_is_all_defaults() {
        let parsed: ServiceConfig = toml::from_str("").unwrap();
        assert_eq!(parsed.server.port, 3000);
    }
}
