//! Service configuration.
//!
//! Supports loading configuration from:
//! 1. Config file (TOML or JSON)
//! 2. Environment variables
//!
//! Environment variables take precedence over config file values.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Main service configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Server configuration
    pub server: ServerConfig,
    /// CORS configuration
    pub cors: CorsConfig,
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Server port (default: 4000)
    pub port: u16,
    /// Bind address (default: "0.0.0.0")
    pub bind: String,
}

/// CORS configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CorsConfig {
    /// Allowed origins
    pub allowed_origins: Vec<String>,
    /// Allow credentials (default: true)
    pub allow_credentials: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            cors: CorsConfig::default(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 4000,
            bind: "0.0.0.0".to_string(),
        }
    }
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: vec![
                "http://localhost:3000".to_string(),
                "http://localhost:8080".to_string(),
            ],
            allow_credentials: true,
        }
    }
}

impl AppConfig {
    /// Load configuration from file and environment variables.
    /// Environment variables override file values.
    pub fn load() -> anyhow::Result<Self> {
        let mut config = Self::default();

        if let Ok(config_path) = std::env::var("DATAINDEX_CONFIG") {
            config = Self::from_file(&config_path)?;
            tracing::info!("Loaded configuration from: {}", config_path);
        }

        config.apply_env_overrides();

        Ok(config)
    }

    /// Load configuration from a file (supports TOML and JSON)
    pub fn from_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;

        let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("");
        let config: AppConfig = match extension {
            "toml" => toml::from_str(&content)?,
            "json" => serde_json::from_str(&content)?,
            _ => {
                if content.trim().starts_with('{') {
                    serde_json::from_str(&content)?
                } else {
                    toml::from_str(&content)?
                }
            }
        };

        Ok(config)
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var("DATAINDEX_PORT") {
            if let Ok(port) = val.parse() {
                self.server.port = port;
            }
        }
        if let Ok(val) = std::env::var("DATAINDEX_BIND") {
            self.server.bind = val;
        }

        if let Ok(val) = std::env::var("CORS_ALLOWED_ORIGINS") {
            self.cors.allowed_origins = val.split(',').map(|s| s.trim().to_string()).collect();
        }
        if let Ok(val) = std::env::var("CORS_ALLOW_CREDENTIALS") {
            self.cors.allow_credentials = val.parse().unwrap_or(true);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.server.port, 4000);
        assert_eq!(config.server.bind, "0.0.0.0");
        assert!(config.cors.allow_credentials);
    }

    #[test]
    fn test_toml_parsing() {
        let toml_content = r#"
[server]
port = 9090

[cors]
allowed_origins = ["http://console.example.com"]
"#;
        let config: AppConfig = toml::from_str(toml_content).unwrap();
        assert_eq!(config.server.port, 9090);
        assert_eq!(config.cors.allowed_origins, vec!["http://console.example.com"]);
        // Defaults should still be applied for missing fields
        assert_eq!(config.server.bind, "0.0.0.0");
        assert!(config.cors.allow_credentials);
    }
}
