use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};

use crate::provider::open_meteo;

/// Top-level configuration stored on disk.
///
/// Both fields are endpoint overrides; when absent the public Open-Meteo
/// services are used. Example TOML:
///
/// ```toml
/// geocoding_url = "http://localhost:8080/v1/search"
/// forecast_url = "http://localhost:8080/v1/forecast"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    pub geocoding_url: Option<String>,
    pub forecast_url: Option<String>,
}

impl Config {
    /// Effective geocoding endpoint: the override, or the public service.
    pub fn geocoding_url(&self) -> &str {
        self.geocoding_url.as_deref().unwrap_or(open_meteo::GEOCODING_URL)
    }

    /// Effective forecast endpoint: the override, or the public service.
    pub fn forecast_url(&self) -> &str {
        self.forecast_url.as_deref().unwrap_or(open_meteo::FORECAST_URL)
    }

    /// Load config from disk, or return an empty default if it doesn't exist yet.
    pub fn load() -> Result<Self> {
        let path = Self::config_file_path()?;
        if !path.exists() {
            // First run: no config file, return empty.
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let cfg: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(cfg)
    }

    /// Save config to disk, creating parent directories as needed.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_file_path()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let toml =
            toml::to_string_pretty(self).context("Failed to serialize configuration to TOML")?;

        fs::write(&path, toml)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "skycast", "skycast-cli")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }
}
