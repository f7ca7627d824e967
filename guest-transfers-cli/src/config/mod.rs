//! Configuration loading
//!
//! Values are resolved in this order, later sources winning:
//! built-in defaults, the TOML config file, environment variables
//! (`.env` is honoured), and finally command-line flags.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Directory name used under the platform config/data directories
pub const APP_DIR: &str = "guest-transfers";
pub const CONFIG_FILE: &str = "config.toml";

pub const ENV_DATA_DIR: &str = "GUEST_TRANSFERS_DATA_DIR";
pub const ENV_MESSAGING_HOST: &str = "GUEST_TRANSFERS_MESSAGING_HOST";

/// Effective settings for a run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Where the guest snapshot lives
    pub data_dir: PathBuf,
    /// Host of the messaging web client the deep link points at
    pub messaging_host: String,
    /// Phones with fewer digits are marked `no-whatsapp`
    pub min_phone_digits: usize,
    pub company_name: String,
    pub company_website: String,
    /// Open links in the browser; when false they are only printed
    pub open_links: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            messaging_host: "web.whatsapp.com".to_string(),
            min_phone_digits: 10,
            company_name: "Egypt Travelist".to_string(),
            company_website: "www.egypttravelist.com".to_string(),
            open_links: true,
        }
    }
}

/// Platform data directory, falling back to the working directory
pub fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR)
}

/// Platform config file location, if the platform has a config directory
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILE))
}

impl Config {
    /// Load defaults, the config file and environment overrides
    ///
    /// An explicitly given `path` must exist; the default location is
    /// optional.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        if let Err(e) = dotenvy::dotenv() {
            if !e.not_found() {
                log::warn!("Ignoring unreadable .env file: {}", e);
            }
        }

        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => match default_config_path() {
                Some(path) if path.exists() => Self::from_file(&path)?,
                _ => {
                    log::debug!("No config file found, using defaults");
                    Self::default()
                }
            },
        };

        config.apply_env(|key| std::env::var(key).ok());
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        log::debug!("Loaded config from {}", path.display());
        Self::from_toml_str(&content)
            .with_context(|| format!("Invalid config file: {}", path.display()))
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse TOML")
    }

    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize config")
    }

    /// Apply environment overrides through a lookup function
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(dir) = lookup(ENV_DATA_DIR).filter(|v| !v.is_empty()) {
            self.data_dir = PathBuf::from(dir);
        }
        if let Some(host) = lookup(ENV_MESSAGING_HOST).filter(|v| !v.is_empty()) {
            self.messaging_host = host;
        }
    }

    pub fn with_data_dir(mut self, dir: PathBuf) -> Self {
        self.data_dir = dir;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.messaging_host, "web.whatsapp.com");
        assert_eq!(config.min_phone_digits, 10);
        assert!(config.open_links);
        assert!(config.data_dir.ends_with(APP_DIR));
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = Config::from_toml_str(
            r#"
            company_name = "Nile Shuttles"
            min_phone_digits = 11
            "#,
        )
        .unwrap();
        assert_eq!(config.company_name, "Nile Shuttles");
        assert_eq!(config.min_phone_digits, 11);
        assert_eq!(config.messaging_host, "web.whatsapp.com");
    }

    #[test]
    fn test_invalid_toml() {
        assert!(Config::from_toml_str("min_phone_digits = \"ten\"").is_err());
    }

    #[test]
    fn test_env_overrides() {
        let vars: HashMap<&str, &str> = [
            (ENV_DATA_DIR, "/tmp/guests"),
            (ENV_MESSAGING_HOST, "api.whatsapp.com"),
        ]
        .into_iter()
        .collect();

        let mut config = Config::default();
        config.apply_env(|key| vars.get(key).map(|v| v.to_string()));

        assert_eq!(config.data_dir, PathBuf::from("/tmp/guests"));
        assert_eq!(config.messaging_host, "api.whatsapp.com");
    }

    #[test]
    fn test_empty_env_values_are_ignored() {
        let mut config = Config::default();
        config.apply_env(|_| Some(String::new()));
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_toml_round_trip() {
        let config = Config::default().with_data_dir(PathBuf::from("/srv/guests"));
        let text = config.to_toml_string().unwrap();
        assert_eq!(Config::from_toml_str(&text).unwrap(), config);
    }

    #[test]
    fn test_missing_explicit_file() {
        assert!(Config::from_file(Path::new("/definitely/not/config.toml")).is_err());
    }
}
