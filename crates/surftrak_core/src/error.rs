//! Error types for surftrak_core

use thiserror::Error;

/// Errors raised while building or validating core records
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoreError {
    /// A record ends before it starts
    #[error("{record} {id}: end time precedes start time")]
    InvertedTimeRange { record: &'static str, id: String },

    /// Speeds violate `max >= average >= 0`
    #[error("{record} {id}: invalid speeds (average {average}, max {max})")]
    InvalidSpeed {
        record: &'static str,
        id: String,
        average: f32,
        max: f32,
    },

    /// A calendar date or time of day that does not exist
    #[error("invalid timestamp: {0}")]
    InvalidTimestamp(String),
}

/// Result type for surftrak_core operations
pub type Result<T> = std::result::Result<T, CoreError>;
