//! Error types for surftrak_app

use thiserror::Error;

/// Errors that can occur in the SurfTrak app shell
#[derive(Error, Debug)]
pub enum AppError {
    /// Failed to read a configuration file
    #[error("failed to read config {path}: {source}")]
    ConfigRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Configuration file is not valid TOML for `AppConfig`
    #[error("failed to parse config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// Configuration could not be written back out
    #[error("failed to serialize config: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),

    /// Layout computation failed
    #[error("layout failed: {0}")]
    Layout(String),

    /// A screen name that no tab registers
    #[error("unknown screen: {0}")]
    UnknownScreen(String),

    /// Record-level failure from the data layer
    #[error(transparent)]
    Core(#[from] surftrak_core::CoreError),
}

/// Result type for surftrak_app operations
pub type Result<T> = std::result::Result<T, AppError>;
