//! Application configuration loaded from environment variables.

use std::env;
use std::path::PathBuf;

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server port
    pub port: u16,
    /// Path to the JSON document holding all journeys
    pub data_file: PathBuf,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Every setting has a default, so a bare environment works for local
    /// development.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        let port = match env::var("PORT") {
            Ok(raw) => raw.parse().map_err(|_| ConfigError::InvalidPort(raw))?,
            Err(_) => 3001,
        };

        Ok(Self {
            port,
            data_file: env::var("DATA_FILE")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("data.json")),
        })
    }

    /// Default config for testing only.
    pub fn test_default() -> Self {
        Self {
            port: 3001,
            data_file: PathBuf::from("test-data.json"),
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("PORT is not a valid port number: {0}")]
    InvalidPort(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    // Single test: env vars are process-global, so the default and
    // invalid-port cases must not run on parallel threads.
    #[test]
    fn test_config_from_env() {
        env::remove_var("PORT");
        env::remove_var("DATA_FILE");

        let config = Config::from_env().expect("Config should load");
        assert_eq!(config.port, 3001);
        assert_eq!(config.data_file, PathBuf::from("data.json"));

        env::set_var("PORT", "not-a-port");
        let err = Config::from_env().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidPort(_)));
        env::remove_var("PORT");
    }
}
