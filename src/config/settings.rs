//! Application settings and configuration management

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Application settings
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Settings {
    /// Auto-hide delay for the control surface in milliseconds (0 disables auto-hide)
    #[serde(default = "default_show_timeout_ms")]
    pub show_timeout_ms: u64,
    /// Simulated media duration for the demo player, in milliseconds
    #[serde(default = "default_media_duration_ms")]
    pub media_duration_ms: i64,
}

fn default_show_timeout_ms() -> u64 {
    3000
}

fn default_media_duration_ms() -> i64 {
    200_000
}

/// Error types for configuration operations
#[derive(Debug)]
pub enum ConfigError {
    IoError(io::Error),
    ParseError(String),
    ValidationError(String),
}

impl From<io::Error> for ConfigError {
    fn from(err: io::Error) -> Self {
        ConfigError::IoError(err)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::ParseError(err.to_string())
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::IoError(e) => write!(f, "I/O error: {}", e),
            ConfigError::ParseError(s) => write!(f, "Parse error: {}", s),
            ConfigError::ValidationError(s) => write!(f, "Validation error: {}", s),
        }
    }
}

impl Error for ConfigError {}

impl Settings {
    /// Create default settings
    pub fn default() -> Self {
        Settings {
            show_timeout_ms: default_show_timeout_ms(),
            media_duration_ms: default_media_duration_ms(),
        }
    }

    /// Load settings from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        let settings: Settings = serde_json::from_str(&content)?;
        Ok(settings)
    }

    /// Save settings to a file
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = serde_json::to_string_pretty(&self)?;

        // Create parent directories if they don't exist
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(path, content)?;
        Ok(())
    }

    /// Get the default config file path
    pub fn default_path() -> PathBuf {
        let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        home.join(".config").join("mediactl").join("config.json")
    }

    /// Validate settings
    pub fn validate(&self) -> Result<(), ConfigError> {
        // Check that the auto-hide delay leaves time to interact
        if self.show_timeout_ms > 0 && self.show_timeout_ms < 500 {
            return Err(ConfigError::ValidationError(
                "Auto-hide timeout must be 0 or at least 500 ms".to_string(),
            ));
        }

        if self.media_duration_ms <= 0 {
            return Err(ConfigError::ValidationError(
                "Media duration must be positive".to_string(),
            ));
        }

        Ok(())
    }
}
