//! Console configuration
//!
//! The API base URL is resolved once at startup (flag or `AUTOSUPPORT_API_URL`,
//! then the config file, then [`DEFAULT_API_URL`]) and is read-only afterwards.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Default API base URL
pub const DEFAULT_API_URL: &str = "http://localhost:8000/api/v1";

/// Default request timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Environment variable selecting the API base URL
pub const API_URL_ENV: &str = "AUTOSUPPORT_API_URL";

/// Settings for the API client
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: String,
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl ClientConfig {
    /// Merge an explicit URL (flag or env) over the file settings
    pub fn resolve(api_url: Option<String>, file: &FileConfig) -> Self {
        let base_url = api_url
            .or_else(|| file.api_url.clone())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());
        let timeout = file
            .timeout_secs
            .map(Duration::from_secs)
            .unwrap_or(DEFAULT_TIMEOUT);
        Self { base_url: base_url.trim_end_matches('/').to_string(), timeout }
    }
}

/// Persisted CLI settings, `~/.autosupport/config.toml`
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileConfig {
    pub api_url: Option<String>,
    pub timeout_secs: Option<u64>,
    pub default_format: Option<String>,
}

impl FileConfig {
    pub fn load(profile: Option<&str>) -> Result<Self> {
        Self::load_from(&Self::config_path(profile)?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = fs::read_to_string(path)?;
            toml::from_str(&content).map_err(|e| Error::Config(e.to_string()))
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self, profile: Option<&str>) -> Result<PathBuf> {
        let path = Self::config_path(profile)?;
        self.save_to(&path)?;
        Ok(path)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self).map_err(|e| Error::Config(e.to_string()))?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Set a key by name, as used by `config set`
    pub fn set(&mut self, key: &str, value: String) -> Result<()> {
        match key {
            "api_url" => self.api_url = Some(value),
            "timeout_secs" => {
                let secs = value
                    .parse()
                    .map_err(|_| Error::Config(format!("timeout_secs must be a number, got {}", value)))?;
                self.timeout_secs = Some(secs);
            }
            "default_format" => self.default_format = Some(value),
            _ => return Err(Error::Config(format!("Unknown config key: {}", key))),
        }
        Ok(())
    }

    pub fn get(&self, key: &str) -> Result<Option<String>> {
        match key {
            "api_url" => Ok(self.api_url.clone()),
            "timeout_secs" => Ok(self.timeout_secs.map(|s| s.to_string())),
            "default_format" => Ok(self.default_format.clone()),
            _ => Err(Error::Config(format!("Unknown config key: {}", key))),
        }
    }

    pub fn config_path(profile: Option<&str>) -> Result<PathBuf> {
        let home = dirs::home_dir().ok_or_else(|| Error::Config("Cannot find home directory".into()))?;
        let filename = match profile {
            Some(p) => format!("config.{}.toml", p),
            None => "config.toml".to_string(),
        };
        Ok(home.join(".autosupport").join(filename))
    }
}
