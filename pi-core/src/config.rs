use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::backend::DEFAULT_ENDPOINT;

/// Environment variable overriding the backend endpoint.
pub const ENDPOINT_ENV: &str = "PI_BACKEND_URL";

/// Optional settings stored on disk.
///
/// Example TOML:
/// ```toml
/// endpoint = "https://pi-backend-api.herokuapp.com/pi"
/// output_path = "/data/pi/outputs.csv"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    pub endpoint: Option<String>,
    pub output_path: Option<PathBuf>,
}

impl Config {
    /// Load config from the platform config directory, or return an empty
    /// default if it doesn't exist yet.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_file_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let cfg: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(cfg)
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "pi-predictions", "pi-cli")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }

    /// Endpoint to query: flag, then environment, then file, then built-in.
    pub fn resolve_endpoint(&self, flag: Option<String>, env: Option<String>) -> String {
        flag.or(env)
            .or_else(|| self.endpoint.clone())
            .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string())
    }

    /// Ledger path: flag, then file. `None` leaves the built-in default.
    pub fn resolve_output_path(&self, flag: Option<PathBuf>) -> Option<PathBuf> {
        flag.or_else(|| self.output_path.clone())
    }
}
