use crate::errors::{AppError, AppResult};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::PathBuf;

/// Minimum level a report line must reach to be emitted.
/// Replaces the usual process-wide logger setup: the level travels
/// inside the config object instead of global state.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    #[default]
    Info,
    Warning,
    Error,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_warning_threshold")]
    pub warning_threshold_seconds: i64,
    #[serde(default = "default_error_threshold")]
    pub error_threshold_seconds: i64,
    #[serde(default)]
    pub min_level: LogLevel,
}

fn default_warning_threshold() -> i64 {
    300
}
fn default_error_threshold() -> i64 {
    600
}

impl Default for Config {
    fn default() -> Self {
        Self {
            warning_threshold_seconds: default_warning_threshold(),
            error_threshold_seconds: default_error_threshold(),
            min_level: LogLevel::default(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("jobreport")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".jobreport")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("jobreport.conf")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();

        if path.exists() {
            let content = fs::read_to_string(&path)?;
            serde_yaml::from_str(&content)
                .map_err(|e| AppError::Config(format!("{}: {e}", path.display())))
        } else {
            Ok(Self::default())
        }
    }

    /// Threshold expressed in whole minutes, for the report message text.
    pub fn warning_threshold_minutes(&self) -> i64 {
        self.warning_threshold_seconds / 60
    }

    pub fn error_threshold_minutes(&self) -> i64 {
        self.error_threshold_seconds / 60
    }
}
