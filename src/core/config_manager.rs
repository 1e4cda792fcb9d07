// src/core/config_manager.rs
//! Client configuration: flags over environment over config file over defaults

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::info;

pub const DEFAULT_API_URL: &str = "http://127.0.0.1:5000";
pub const DEFAULT_CONFIG_FILE: &str = "jobscreen.yaml";

pub const API_URL_ENV: &str = "JOB_SCREENING_API_URL";
pub const TIMEOUT_ENV: &str = "JOB_SCREENING_TIMEOUT_SECS";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
    /// `None` leaves the transport default in place
    pub timeout_seconds: Option<u64>,
}

#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    api_url: Option<String>,
    timeout_seconds: Option<u64>,
}

/// Values given on the command line; each one overrides everything else
#[derive(Debug, Default, Clone)]
pub struct ConfigOverrides {
    pub api_url: Option<String>,
    pub timeout_seconds: Option<u64>,
    pub config_path: Option<PathBuf>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            timeout_seconds: None,
        }
    }
}

impl ClientConfig {
    pub fn load(overrides: &ConfigOverrides) -> Result<Self> {
        let file = match &overrides.config_path {
            Some(path) => Self::read_file(path)?,
            None => {
                let default_path = Path::new(DEFAULT_CONFIG_FILE);
                if default_path.exists() {
                    Self::read_file(default_path)?
                } else {
                    ConfigFile::default()
                }
            }
        };

        let env_url = std::env::var(API_URL_ENV).ok();
        let env_timeout = match std::env::var(TIMEOUT_ENV) {
            Ok(raw) => Some(
                raw.parse::<u64>()
                    .with_context(|| format!("{} must be a number of seconds", TIMEOUT_ENV))?,
            ),
            Err(_) => None,
        };

        let config = Self::resolve(overrides, env_url, env_timeout, file);
        info!("Backend URL: {}", config.base_url);
        Ok(config)
    }

    fn read_file(path: &Path) -> Result<ConfigFile> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))
    }

    fn resolve(
        overrides: &ConfigOverrides,
        env_url: Option<String>,
        env_timeout: Option<u64>,
        file: ConfigFile,
    ) -> Self {
        let base_url = overrides
            .api_url
            .clone()
            .or(env_url)
            .or(file.api_url)
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout_seconds: overrides
                .timeout_seconds
                .or(env_timeout)
                .or(file.timeout_seconds),
        }
    }
}
