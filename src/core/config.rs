//! Configuration management for the MCP server.
//!
//! Configuration comes from environment variables (optionally via a `.env`
//! file). The Folk API key is the one required value: without it the server
//! refuses to start.

use serde::{Deserialize, Serialize};

use super::error::{Error, Result};

/// Main configuration structure for the MCP server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// Folk API credentials.
    pub credentials: CredentialsConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,
}

/// Configuration for the Folk API credential.
#[derive(Clone, Serialize, Deserialize)]
pub struct CredentialsConfig {
    /// Folk API bearer token, read once at startup and never mutated.
    pub folk_api_key: String,
}

/// Custom Debug implementation to redact the credential from logs.
impl std::fmt::Debug for CredentialsConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialsConfig")
            .field("folk_api_key", &"[REDACTED]")
            .finish()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "folk-mcp-server".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
            },
            credentials: CredentialsConfig {
                folk_api_key: String::new(),
            },
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// `FOLK_API_KEY` is required; everything else falls back to defaults.
    /// Optional overrides: `MCP_SERVER_NAME`, `MCP_LOG_LEVEL`.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let folk_api_key = std::env::var("FOLK_API_KEY")
            .map_err(|_| Error::config("FOLK_API_KEY environment variable is required"))?;

        let mut config = Self {
            credentials: CredentialsConfig { folk_api_key },
            ..Self::default()
        };

        if let Ok(name) = std::env::var("MCP_SERVER_NAME") {
            config.server.name = name;
        }

        if let Ok(level) = std::env::var("MCP_LOG_LEVEL") {
            config.logging.level = level;
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Mutex to ensure env var tests run serially
    static ENV_TEST_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn test_from_env_requires_api_key() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::remove_var("FOLK_API_KEY");
        }
        let result = Config::from_env();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("FOLK_API_KEY"));
    }

    #[test]
    fn test_from_env_reads_api_key() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("FOLK_API_KEY", "test_key_12345");
        }
        let config = Config::from_env().unwrap();
        assert_eq!(config.credentials.folk_api_key, "test_key_12345");
        unsafe {
            std::env::remove_var("FOLK_API_KEY");
        }
    }

    #[test]
    fn test_credentials_redacted_in_debug() {
        let creds = CredentialsConfig {
            folk_api_key: "super_secret_key".to_string(),
        };
        let debug_str = format!("{creds:?}");
        assert!(debug_str.contains("REDACTED"));
        assert!(!debug_str.contains("super_secret_key"));
    }

    #[test]
    fn test_default_logging_level() {
        let config = Config::default();
        assert_eq!(config.logging.level, "info");
    }
}
