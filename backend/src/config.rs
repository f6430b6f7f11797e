//! Service configuration.
//!
//! Values come from the environment (a `.env` file is loaded if present) and
//! can be overridden by command-line flags of `coverreg serve`.
//!
//! | Variable                 | Default | Meaning                                   |
//! |--------------------------|---------|-------------------------------------------|
//! | `COVERREG_PORT`          | `3000`  | Listening port                            |
//! | `COVERREG_LATENCY_MS`    | `1200`  | Artificial delay of each stub endpoint    |
//! | `COVERREG_METADATA_URL`  | unset   | Upstream metadata service (fixture if unset) |

use std::env;
use std::time::Duration;

use crate::error::{ConfigError, ConfigResult};

/// Default listening port.
pub const DEFAULT_PORT: u16 = 3000;

/// Default simulated latency of the stub endpoints, in milliseconds.
pub const DEFAULT_LATENCY_MS: u64 = 1200;

const PORT_VAR: &str = "COVERREG_PORT";
const LATENCY_VAR: &str = "COVERREG_LATENCY_MS";
const METADATA_URL_VAR: &str = "COVERREG_METADATA_URL";

/// Runtime configuration of the HTTP service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Port to listen on
    pub port: u16,
    /// Delay applied before answering each stub request
    pub latency: Duration,
    /// Base URL of an upstream metadata service
    pub metadata_url: Option<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            latency: Duration::from_millis(DEFAULT_LATENCY_MS),
            metadata_url: None,
        }
    }
}

impl ServerConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> ConfigResult<Self> {
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Read configuration through an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> ConfigResult<Self> {
        let mut config = Self::default();

        if let Some(value) = lookup(PORT_VAR) {
            config.port = value.trim().parse().map_err(|_| ConfigError::InvalidValue {
                key: PORT_VAR,
                value: value.clone(),
            })?;
        }

        if let Some(value) = lookup(LATENCY_VAR) {
            let millis: u64 = value.trim().parse().map_err(|_| ConfigError::InvalidValue {
                key: LATENCY_VAR,
                value: value.clone(),
            })?;
            config.latency = Duration::from_millis(millis);
        }

        config.metadata_url = lookup(METADATA_URL_VAR)
            .map(|v| v.trim().trim_end_matches('/').to_string())
            .filter(|v| !v.is_empty());

        Ok(config)
    }

    /// Apply command-line overrides on top of the environment.
    pub fn with_overrides(
        mut self,
        port: Option<u16>,
        latency_ms: Option<u64>,
        metadata_url: Option<String>,
    ) -> Self {
        if let Some(port) = port {
            self.port = port;
        }
        if let Some(ms) = latency_ms {
            self.latency = Duration::from_millis(ms);
        }
        if let Some(url) = metadata_url {
            self.metadata_url = Some(url.trim_end_matches('/').to_string());
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_environment_is_empty() {
        let config = ServerConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config, ServerConfig::default());
        assert_eq!(config.latency, Duration::from_millis(1200));
    }

    #[test]
    fn test_reads_all_variables() {
        let config = ServerConfig::from_lookup(lookup_from(&[
            ("COVERREG_PORT", "8080"),
            ("COVERREG_LATENCY_MS", "0"),
            ("COVERREG_METADATA_URL", "http://metadata.local/"),
        ]))
        .unwrap();

        assert_eq!(config.port, 8080);
        assert_eq!(config.latency, Duration::ZERO);
        assert_eq!(config.metadata_url.as_deref(), Some("http://metadata.local"));
    }

    #[test]
    fn test_rejects_unparsable_port() {
        let err = ServerConfig::from_lookup(lookup_from(&[("COVERREG_PORT", "eighty")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { key: "COVERREG_PORT", .. }));
    }

    #[test]
    fn test_blank_metadata_url_means_fixture() {
        let config = ServerConfig::from_lookup(lookup_from(&[("COVERREG_METADATA_URL", "  ")])).unwrap();
        assert!(config.metadata_url.is_none());
    }

    #[test]
    fn test_overrides_win() {
        let config = ServerConfig::default().with_overrides(Some(4000), Some(5), None);
        assert_eq!(config.port, 4000);
        assert_eq!(config.latency, Duration::from_millis(5));
        assert!(config.metadata_url.is_none());
    }
}
