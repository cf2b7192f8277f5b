//! App configuration (`surftrak.toml`)
//!
//! Every section and field is optional:
//!
//! ```toml
//! [animation]
//! target_fps = 60
//!
//! [home]
//! message_rotation_ms = 5000
//! weekly_goal = 50
//!
//! [layout]
//! screen_width = 390
//! screen_height = 844
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::error::{AppError, Result};

/// Default config file name, looked up in the working directory
pub const CONFIG_FILE: &str = "surftrak.toml";

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct AppConfig {
    #[serde(default)]
    pub animation: AnimationConfig,
    #[serde(default)]
    pub home: HomeConfig,
    #[serde(default)]
    pub layout: LayoutConfig,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct AnimationConfig {
    /// Frame rate the preview clock simulates
    #[serde(default = "default_target_fps")]
    pub target_fps: u32,
}

fn default_target_fps() -> u32 {
    60
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            target_fps: default_target_fps(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct HomeConfig {
    /// Period of the goal card's motivational message rotation
    #[serde(default = "default_rotation_ms")]
    pub message_rotation_ms: u64,
    /// Waves per week the goal card tracks against
    #[serde(default = "default_weekly_goal")]
    pub weekly_goal: u32,
}

fn default_rotation_ms() -> u64 {
    5000
}

fn default_weekly_goal() -> u32 {
    50
}

impl Default for HomeConfig {
    fn default() -> Self {
        Self {
            message_rotation_ms: default_rotation_ms(),
            weekly_goal: default_weekly_goal(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct LayoutConfig {
    #[serde(default = "default_width")]
    pub screen_width: f32,
    #[serde(default = "default_height")]
    pub screen_height: f32,
}

fn default_width() -> f32 {
    390.0
}

fn default_height() -> f32 {
    844.0
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            screen_width: default_width(),
            screen_height: default_height(),
        }
    }
}

impl AppConfig {
    /// Parse a config from TOML text
    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Load `path`, falling back to defaults when the file doesn't exist
    pub fn load(path: &Path) -> Result<Self> {
        match fs::read_to_string(path) {
            Ok(content) => {
                let config = Self::from_toml(&content)?;
                tracing::debug!(path = %path.display(), "loaded config");
                Ok(config)
            }
            Err(err) if err.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no config file, using defaults");
                Ok(Self::default())
            }
            Err(source) => Err(AppError::ConfigRead {
                path: path.display().to_string(),
                source,
            }),
        }
    }

    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}
