use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const DEFAULT_SCORING_URL: &str = "http://localhost:5000/score";
pub const DEFAULT_LOGGING_URL: &str = "http://localhost:5000/log";
pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;

/// Remote endpoint settings.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct EndpointConfig {
    pub url: String,
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

impl EndpointConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

fn default_timeout_ms() -> u64 {
    DEFAULT_TIMEOUT_MS
}

fn default_scoring() -> EndpointConfig {
    EndpointConfig::new(DEFAULT_SCORING_URL)
}

fn default_logging() -> EndpointConfig {
    EndpointConfig::new(DEFAULT_LOGGING_URL)
}

/// Root of `config.toml`.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    #[serde(default = "default_scoring")]
    pub scoring: EndpointConfig,
    #[serde(default = "default_logging")]
    pub logging: EndpointConfig,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            scoring: default_scoring(),
            logging: default_logging(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: ServiceConfig = toml::from_str(
            r#"
            [scoring]
            url = "https://scoring.example.org/api/score"
            "#,
        )
        .unwrap();

        assert_eq!(config.scoring.url, "https://scoring.example.org/api/score");
        assert_eq!(config.scoring.timeout_ms, DEFAULT_TIMEOUT_MS);
        assert_eq!(config.logging, EndpointConfig::new(DEFAULT_LOGGING_URL));
    }

    #[test]
    fn test_empty_toml_is_default() {
        let config: ServiceConfig = toml::from_str("").unwrap();
        assert_eq!(config, ServiceConfig::default());
        assert_eq!(config.scoring.timeout(), Duration::from_secs(10));
    }
}
