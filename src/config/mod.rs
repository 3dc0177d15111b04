use crate::global;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Environment variable that overrides `generation.api_key`.
pub const API_KEY_ENV: &str = "GROQ_APIKEY";

pub const DEFAULT_ENDPOINT: &str = "https://api.groq.com/openai/v1";
pub const DEFAULT_MODEL: &str = "gemma2-9b-it";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub generation: GenerationConfig,
    pub export: ExportConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    /// Base URL of an OpenAI-compatible API, without the `/chat/completions` suffix
    pub endpoint: String,
    pub model: String,
    pub api_key: Option<String>,
    pub timeout_seconds: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Explicit path to wkhtmltopdf. Looked up on PATH when unset.
    pub wkhtmltopdf_path: Option<String>,
    pub timeout_seconds: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 5000,
        }
    }
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            model: DEFAULT_MODEL.to_string(),
            api_key: None,
            timeout_seconds: 120,
        }
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            wkhtmltopdf_path: None,
            timeout_seconds: 60,
        }
    }
}

impl Config {
    /// Load the config from the default location, creating it on first run.
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;
        if !config_path.exists() {
            info!(
                "Config file not found, creating default at {:?}",
                config_path
            );
            let config = Self::default();
            config.save_to(&config_path)?;
            return Ok(config.with_env_overrides());
        }

        Self::load_from(&config_path)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).context("Failed to read config file")?;

        let config: Self = toml::from_str(&content).context("Failed to parse config file")?;

        info!("Loaded config from {:?}", path);
        Ok(config.with_env_overrides())
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;

        std::fs::write(path, content).context("Failed to write config file")?;

        Ok(())
    }

    /// Apply environment overrides on top of file values.
    pub fn with_env_overrides(self) -> Self {
        let env_key = std::env::var(API_KEY_ENV).ok();
        self.with_api_key_override(env_key)
    }

    fn with_api_key_override(mut self, key: Option<String>) -> Self {
        if let Some(key) = key.filter(|k| !k.trim().is_empty()) {
            debug!("Using API key from {}", API_KEY_ENV);
            self.generation.api_key = Some(key.trim().to_string());
        }
        self
    }

    /// Copy of the config that is safe to print.
    pub fn redacted(&self) -> Self {
        let mut config = self.clone();
        if config.generation.api_key.is_some() {
            config.generation.api_key = Some("********".to_string());
        }
        config
    }

    fn config_path() -> Result<PathBuf> {
        global::config_file()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 5000);
        assert_eq!(config.generation.model, "gemma2-9b-it");
        assert_eq!(config.generation.endpoint, DEFAULT_ENDPOINT);
        assert!(config.generation.api_key.is_none());
        assert!(config.export.wkhtmltopdf_path.is_none());
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let config: Config = toml::from_str("[server]\nport = 8080\n").unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.generation.timeout_seconds, 120);
        assert_eq!(config.export.timeout_seconds, 60);
    }

    #[test]
    fn test_api_key_override() {
        let config = Config::default().with_api_key_override(Some(" gsk_test ".to_string()));
        assert_eq!(config.generation.api_key.as_deref(), Some("gsk_test"));
    }

    #[test]
    fn test_blank_api_key_override_is_ignored() {
        let mut config = Config::default();
        config.generation.api_key = Some("from-file".to_string());
        let config = config.with_api_key_override(Some("   ".to_string()));
        assert_eq!(config.generation.api_key.as_deref(), Some("from-file"));
    }

    #[test]
    fn test_redacted_hides_key() {
        let mut config = Config::default();
        config.generation.api_key = Some("secret".to_string());
        let redacted = config.redacted();
        assert_eq!(redacted.generation.api_key.as_deref(), Some("********"));
        assert_eq!(config.generation.api_key.as_deref(), Some("secret"));
    }

    #[test]
    fn test_save_and_load_from() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.server.port = 9123;
        config.export.wkhtmltopdf_path = Some("/opt/bin/wkhtmltopdf".to_string());
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.server.port, 9123);
        assert_eq!(
            loaded.export.wkhtmltopdf_path.as_deref(),
            Some("/opt/bin/wkhtmltopdf")
        );
    }

    #[test]
    fn test_load_from_rejects_invalid_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "server = [").unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
    }
}
