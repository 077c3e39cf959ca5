//! `AppConfig` struct and TOML loading.

use std::path::Path;

use anyhow::{Context, Result, bail};
use serde::Deserialize;
use url::Url;

/// Environment variable that overrides `[omdb] api_key`.
pub const API_KEY_ENV: &str = "OMDB_API_KEY";

/// Top-level application configuration.
#[derive(Debug, Deserialize, Default, PartialEq, Eq)]
pub struct AppConfig {
    /// Provider access settings.
    #[serde(default)]
    pub omdb: OmdbConfig,
    /// Notification feed settings.
    #[serde(default)]
    pub notifications: NotificationsConfig,
}

/// OMDb access configuration.
#[derive(Debug, Deserialize, Default, PartialEq, Eq)]
pub struct OmdbConfig {
    /// API access key.
    #[serde(default)]
    pub api_key: Option<String>,
    /// Base URL override (defaults to the public endpoint).
    #[serde(default)]
    pub base_url: Option<String>,
}

/// Notification feed configuration.
#[derive(Debug, Deserialize, Default, PartialEq, Eq)]
pub struct NotificationsConfig {
    /// Seed for category assignment.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl AppConfig {
    /// Loads config from a TOML file. Returns default if file does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "config file not found, using defaults");
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        toml::from_str(&content).with_context(|| format!("failed to parse {}", path.display()))
    }

    /// Picks the API key: a non-blank `env_value` wins over the file.
    ///
    /// # Errors
    ///
    /// Returns an error if neither source provides a non-blank key.
    pub fn resolve_api_key(&self, env_value: Option<String>) -> Result<String> {
        let from_env = env_value.filter(|v| !v.trim().is_empty());
        let from_file = self
            .omdb
            .api_key
            .as_ref()
            .filter(|v| !v.trim().is_empty())
            .cloned();

        match from_env.or(from_file) {
            Some(key) => Ok(String::from(key.trim())),
            None => bail!("{API_KEY_ENV} environment variable or [omdb] api_key in config is required"),
        }
    }

    /// Parses the base URL override, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured value is not a valid URL.
    pub fn base_url(&self) -> Result<Option<Url>> {
        self.omdb
            .base_url
            .as_deref()
            .map(|raw| {
                Url::parse(raw).with_context(|| format!("invalid [omdb] base_url: {raw}"))
            })
            .transpose()
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn test_default_config() {
        // Arrange & Act
        let config = AppConfig::default();

        // Assert
        assert!(config.omdb.api_key.is_none());
        assert!(config.notifications.seed.is_none());
    }

    #[test]
    fn test_parse_full_config() {
        // Arrange
        let toml_str = r#"
            [omdb]
            api_key = "abc123"
            base_url = "http://localhost:9000/"

            [notifications]
            seed = 7
        "#;

        // Act
        let config: AppConfig = toml::from_str(toml_str).unwrap();

        // Assert
        assert_eq!(config.omdb.api_key.as_deref(), Some("abc123"));
        assert_eq!(
            config.base_url().unwrap().unwrap().as_str(),
            "http://localhost:9000/"
        );
        assert_eq!(config.notifications.seed, Some(7));
    }

    #[test]
    fn test_load_nonexistent_returns_default() {
        // Arrange
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.toml");

        // Act
        let config = AppConfig::load(&path).unwrap();

        // Assert
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_load_partial_config() {
        // Arrange
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "").unwrap();

        // Act
        let config = AppConfig::load(&path).unwrap();

        // Assert
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_load_invalid_toml_fails() {
        // Arrange
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[omdb\napi_key = ").unwrap();

        // Act
        let result = AppConfig::load(&path);

        // Assert
        assert!(result.is_err());
    }

    #[test]
    fn test_env_key_wins_over_file() {
        // Arrange
        let config: AppConfig = toml::from_str("[omdb]\napi_key = \"from-file\"").unwrap();

        // Act
        let key = config
            .resolve_api_key(Some(String::from("from-env")))
            .unwrap();

        // Assert
        assert_eq!(key, "from-env");
    }

    #[test]
    fn test_blank_env_key_falls_back_to_file() {
        // Arrange
        let config: AppConfig = toml::from_str("[omdb]\napi_key = \"from-file\"").unwrap();

        // Act
        let key = config.resolve_api_key(Some(String::from("  "))).unwrap();

        // Assert
        assert_eq!(key, "from-file");
    }

    #[test]
    fn test_missing_key_is_error() {
        // Arrange
        let config = AppConfig::default();

        // Act
        let result = config.resolve_api_key(None);

        // Assert
        assert!(result.unwrap_err().to_string().contains(API_KEY_ENV));
    }

    #[test]
    fn test_invalid_base_url_is_error() {
        // Arrange
        let config: AppConfig = toml::from_str("[omdb]\nbase_url = \"not a url\"").unwrap();

        // Act & Assert
        assert!(config.base_url().is_err());
    }
}
