//! Configuration service implementation.
//!
//! This module provides a ConfigService that loads the service endpoints
//! from the configuration file (~/.config/phenoselect/config.toml) and then
//! applies environment overrides.
//!
//! Priority: environment variables > config.toml > built-in defaults

use crate::paths::PhenoPaths;
use phenoselect_core::config::ServiceConfig;
use phenoselect_core::error::{PhenoError, Result};
use std::fs;
use std::path::{Path, PathBuf};

pub const ENV_SCORING_URL: &str = "PHENOSELECT_SCORING_URL";
pub const ENV_LOGGING_URL: &str = "PHENOSELECT_LOGGING_URL";
pub const ENV_TIMEOUT_MS: &str = "PHENOSELECT_TIMEOUT_MS";

/// Loads `ServiceConfig` from a TOML file plus environment overrides.
#[derive(Debug, Clone)]
pub struct ConfigService {
    path: PathBuf,
}

impl ConfigService {
    /// Creates a service reading the platform default config file.
    pub fn new_default() -> Result<Self> {
        let path = PhenoPaths::config_file().map_err(|e| PhenoError::config(e.to_string()))?;
        Ok(Self::with_path(path))
    }

    /// Creates a service reading an explicit config file.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the configuration using the process environment for overrides.
    pub fn load(&self) -> Result<ServiceConfig> {
        self.load_with_env(|key| std::env::var(key).ok())
    }

    /// Loads the configuration using `lookup` to resolve environment overrides.
    pub fn load_with_env<F>(&self, lookup: F) -> Result<ServiceConfig>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = self.load_file()?;
        apply_env_overrides(&mut config, lookup)?;

        tracing::debug!(
            "[ConfigService] scoring={} logging={} timeout_ms={}/{}",
            config.scoring.url,
            config.logging.url,
            config.scoring.timeout_ms,
            config.logging.timeout_ms
        );

        Ok(config)
    }

    /// Reads the config file alone.
    ///
    /// A missing or blank file yields the defaults; a malformed one is an error.
    pub fn load_file(&self) -> Result<ServiceConfig> {
        if !self.path.exists() {
            tracing::debug!(
                "[ConfigService] {} not found, using defaults",
                self.path.display()
            );
            return Ok(ServiceConfig::default());
        }

        let content = fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(ServiceConfig::default());
        }

        toml::from_str(&content).map_err(|e| {
            PhenoError::config(format!(
                "Failed to parse configuration file at {}: {}",
                self.path.display(),
                e
            ))
        })
    }
}

fn apply_env_overrides<F>(config: &mut ServiceConfig, lookup: F) -> Result<()>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(url) = lookup(ENV_SCORING_URL) {
        config.scoring.url = url;
    }
    if let Some(url) = lookup(ENV_LOGGING_URL) {
        config.logging.url = url;
    }
    if let Some(raw) = lookup(ENV_TIMEOUT_MS) {
        let timeout_ms: u64 = raw.trim().parse().map_err(|_| {
            PhenoError::config(format!("{} must be a number of milliseconds, got '{}'", ENV_TIMEOUT_MS, raw))
        })?;
        config.scoring.timeout_ms = timeout_ms;
        config.logging.timeout_ms = timeout_ms;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use phenoselect_core::config::{DEFAULT_LOGGING_URL, DEFAULT_SCORING_URL, DEFAULT_TIMEOUT_MS};
    use std::collections::HashMap;
    use tempfile::TempDir;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let service = ConfigService::with_path(temp_dir.path().join("config.toml"));

        let config = service.load_with_env(no_env).expect("Should load defaults");
        assert_eq!(config, ServiceConfig::default());
        assert_eq!(config.scoring.url, DEFAULT_SCORING_URL);
        assert_eq!(config.logging.url, DEFAULT_LOGGING_URL);
    }

    #[test]
    fn test_blank_file_yields_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(&path, "\n   \n").unwrap();

        let config = ConfigService::with_path(path).load_with_env(no_env).unwrap();
        assert_eq!(config, ServiceConfig::default());
    }

    #[test]
    fn test_file_values_are_used() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(
            &path,
            r#"
[scoring]
url = "https://score.example.org/v1"
timeout_ms = 2500

[logging]
url = "https://log.example.org/v1"
"#,
        )
        .unwrap();

        let config = ConfigService::with_path(path).load_with_env(no_env).unwrap();
        assert_eq!(config.scoring.url, "https://score.example.org/v1");
        assert_eq!(config.scoring.timeout_ms, 2500);
        assert_eq!(config.logging.url, "https://log.example.org/v1");
        assert_eq!(config.logging.timeout_ms, DEFAULT_TIMEOUT_MS);
    }

    #[test]
    fn test_malformed_file_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(&path, "[scoring\nurl = ").unwrap();

        let err = ConfigService::with_path(path).load_with_env(no_env).unwrap_err();
        assert!(err.is_config());
    }

    #[test]
    fn test_unreadable_file_is_io_error() {
        let temp_dir = TempDir::new().unwrap();
        // A directory exists but cannot be read as a file
        let service = ConfigService::with_path(temp_dir.path());

        let err = service.load_with_env(no_env).unwrap_err();
        assert!(matches!(err, PhenoError::Io { .. }), "got {err:?}");
    }

    #[test]
    fn test_env_overrides_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(&path, "[scoring]\nurl = \"https://from-file\"\n").unwrap();

        let env: HashMap<&str, &str> = HashMap::from([
            (ENV_SCORING_URL, "https://from-env/score"),
            (ENV_TIMEOUT_MS, "750"),
        ]);
        let config = ConfigService::with_path(path)
            .load_with_env(|key| env.get(key).map(|v| v.to_string()))
            .unwrap();

        assert_eq!(config.scoring.url, "https://from-env/score");
        assert_eq!(config.logging.url, DEFAULT_LOGGING_URL);
        assert_eq!(config.scoring.timeout_ms, 750);
        assert_eq!(config.logging.timeout_ms, 750);
    }

    #[test]
    fn test_bad_timeout_env_is_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let service = ConfigService::with_path(temp_dir.path().join("config.toml"));

        let err = service
            .load_with_env(|key| (key == ENV_TIMEOUT_MS).then(|| "soon".to_string()))
            .unwrap_err();
        assert!(err.is_config());
        assert!(err.to_string().contains("soon"));
    }
}
