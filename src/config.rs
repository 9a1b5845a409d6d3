//! Configuration management
//!
//! All settings come from the environment with documented defaults; the
//! resulting [`Config`] is built once at startup and injected into the
//! components that need it.

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::Error;
use crate::Result;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Upstream search endpoint URL
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Timeout for upstream requests, in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: f64,

    /// Host the tool server binds to
    #[serde(default = "default_host")]
    pub host: String,

    /// Port the tool server binds to
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_endpoint() -> String {
    "https://qsc-dev.quasiris.de/api/v1/search/demo/trendware".to_string()
}

fn default_timeout_secs() -> f64 {
    10.0
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            timeout_secs: default_timeout_secs(),
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Config {
    /// Build a configuration from environment variables.
    ///
    /// Recognized variables: `REPO_SERVER_URL`, `REPO_REQUEST_TIMEOUT`,
    /// `REPO_BIND_HOST`, `REPO_BIND_PORT`. Unset variables fall back to the
    /// defaults; unparsable numeric values are logged and ignored.
    pub fn from_env() -> Self {
        let mut config = Config::default();

        if let Ok(url) = std::env::var("REPO_SERVER_URL") {
            let url = url.trim();
            if !url.is_empty() {
                config.endpoint = url.to_string();
            }
        }

        if let Ok(raw) = std::env::var("REPO_REQUEST_TIMEOUT") {
            match raw.trim().parse::<f64>() {
                Ok(secs) if secs > 0.0 => config.timeout_secs = secs,
                _ => tracing::warn!("Ignoring invalid REPO_REQUEST_TIMEOUT: {:?}", raw),
            }
        }

        if let Ok(host) = std::env::var("REPO_BIND_HOST") {
            let host = host.trim();
            if !host.is_empty() {
                config.host = host.to_string();
            }
        }

        if let Ok(raw) = std::env::var("REPO_BIND_PORT") {
            match raw.trim().parse::<u16>() {
                Ok(port) => config.port = port,
                Err(_) => tracing::warn!("Ignoring invalid REPO_BIND_PORT: {:?}", raw),
            }
        }

        config
    }

    /// Validate the configuration, returning it for chaining.
    pub fn validate(self) -> Result<Self> {
        Url::parse(&self.endpoint)
            .map_err(|e| Error::Config(format!("Invalid endpoint URL {:?}: {}", self.endpoint, e)))?;

        if self.timeout_secs <= 0.0 {
            return Err(Error::Config(format!(
                "Timeout must be positive, got {}",
                self.timeout_secs
            )));
        }

        Ok(self)
    }

    /// Bind address for the tool server.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(
            config.endpoint,
            "https://qsc-dev.quasiris.de/api/v1/search/demo/trendware"
        );
        assert_eq!(config.timeout_secs, 10.0);
        assert_eq!(config.bind_addr(), "0.0.0.0:8080");
    }

    #[test]
    fn test_config_serialization() {
        let config = Config::default();
        let json = serde_json::to_string(&config).unwrap();
        let parsed: Config = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.endpoint, config.endpoint);
        assert_eq!(parsed.port, config.port);
    }

    #[test]
    fn test_validate_accepts_default() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_endpoint() {
        let config = Config {
            endpoint: "not a url".to_string(),
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_zero_timeout() {
        let config = Config {
            timeout_secs: 0.0,
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }
}
