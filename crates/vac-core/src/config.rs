//! Configuration management for vac-templates

use crate::error::{Result, VacError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Render settings
    pub render: RenderConfig,
    /// Comment settings
    pub comments: CommentConfig,
}

impl Config {
    /// Default configuration file location
    pub fn default_path() -> PathBuf {
        directories::ProjectDirs::from("com", "vac-templates", "vac-templates")
            .map(|dirs| dirs.config_dir().join("config.toml"))
            .unwrap_or_else(|| {
                dirs::home_dir()
                    .unwrap_or_else(|| PathBuf::from("."))
                    .join(".vac-templates")
                    .join("config.toml")
            })
    }

    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| VacError::Io(e).with_context(format!("Failed to read {}", path.display())))?;
        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        debug!("Loaded configuration from {:?}", path);
        Ok(config)
    }

    /// Load configuration, falling back to defaults when the file does not exist
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            debug!("No configuration at {:?}, using defaults", path);
            Ok(Self::default())
        }
    }

    /// Save configuration as TOML, creating parent directories
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Check values that deserialize fine but are unusable
    pub fn validate(&self) -> Result<()> {
        if self.render.default_height.trim().is_empty() {
            return Err(VacError::Config(
                "render.default_height cannot be empty".to_string(),
            ));
        }
        if self.comments.max_body_length == 0 {
            return Err(VacError::Config(
                "comments.max_body_length must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

/// Render-related configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// CSS height used for the comment list when the caller gives none
    pub default_height: String,
    /// Fail on placeholders without a value instead of rendering them empty
    pub strict: bool,
    /// Trim leading and trailing whitespace from rendered output
    pub trim_output: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            default_height: "auto".to_string(),
            strict: false,
            trim_output: false,
        }
    }
}

/// Comment-related configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CommentConfig {
    /// Maximum comment body length
    pub max_body_length: usize,
}

impl Default for CommentConfig {
    fn default() -> Self {
        Self {
            max_body_length: crate::comment::validator::MAX_BODY_LENGTH,
        }
    }
}
