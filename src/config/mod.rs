use crate::errors::{AppError, AppResult};
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

const APP_DIR: &str = ".productivity-tracker";
const CONFIG_FILE: &str = "deep-work.conf";
const DATABASE_FILE: &str = "deep-work.db";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_database")]
    pub database: String,
    /// Cosmetic pause after a successful save, in milliseconds.
    #[serde(default = "default_save_pause_ms")]
    pub save_pause_ms: u64,
}

fn default_database() -> String {
    format!("~/{}/{}", APP_DIR, DATABASE_FILE)
}

fn default_save_pause_ms() -> u64 {
    800
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: default_database(),
            save_pause_ms: default_save_pause_ms(),
        }
    }
}

impl Config {
    /// `~/.productivity-tracker`
    pub fn config_dir() -> AppResult<PathBuf> {
        dirs::home_dir()
            .map(|home| home.join(APP_DIR))
            .ok_or(AppError::NoHomeDir)
    }

    /// Return the full path of the config file
    pub fn config_file() -> AppResult<PathBuf> {
        Ok(Self::config_dir()?.join(CONFIG_FILE))
    }

    /// Load configuration from the standard location, or defaults if absent.
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file()?)
    }

    pub fn load_from(path: &std::path::Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .map_err(|e| AppError::Config(format!("{}: {}", path.display(), e)))?;

        // An empty file is a valid "all defaults" configuration.
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        Ok(serde_yaml::from_str(&content)?)
    }

    /// Database path with `~/` expanded.
    pub fn database_path(&self) -> PathBuf {
        expand_tilde(&self.database)
    }
}
