//! Global configuration at ~/.config/gather/config.toml

use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::Deserialize;

static DEFAULT_SERVER_URL: &str = "http://localhost:3000";

fn default_server_url() -> String {
    DEFAULT_SERVER_URL.to_string()
}

/// Global configuration.
///
/// Session data (token, profile) lives in session.toml instead.
#[derive(Deserialize, Clone)]
pub struct GlobalConfig {
    #[serde(default = "default_server_url")]
    pub server_url: String,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        GlobalConfig {
            server_url: default_server_url(),
        }
    }
}

impl GlobalConfig {
    pub fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?
            .join("gather");

        Ok(config_dir.join("config.toml"))
    }

    /// Load the config, falling back to defaults when the file is absent.
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;

        if !path.exists() {
            return Ok(GlobalConfig::default());
        }

        let contents = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;

        let config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config from {}", path.display()))?;

        Ok(config)
    }
}
