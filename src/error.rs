//! Custom error types for roadmap-rs
//!
//! User-friendly error messages for the CLI, config and terminal layers.
//! The roadmap view itself has no failure paths.

use thiserror::Error;

/// Main error type for the roadmap-rs application
#[derive(Error, Debug)]
pub enum RoadmapError {
    /// Category key given on the command line does not exist
    #[error("Unknown category '{key}'.\n\n  → Available categories: {available}\n  → Run 'roadmap list' to see all tabs.")]
    UnknownCategory {
        /// The key that was requested
        key: String,
        /// Comma separated list of valid keys
        available: String,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error
    #[error("File operation failed: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("Failed to encode JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML serialization/deserialization error
    #[error("Configuration file is invalid: {0}\n\n  → Run 'roadmap config path' to locate it.")]
    Toml(String),

    /// Terminal/TUI error
    #[error("Terminal error: {0}\n\n  → Try resizing your terminal or restarting it.")]
    Terminal(String),

    /// Invalid input from user
    #[error("{0}")]
    InvalidInput(String),
}

impl From<toml::de::Error> for RoadmapError {
    fn from(err: toml::de::Error) -> Self {
        RoadmapError::Toml(err.to_string())
    }
}

impl From<toml::ser::Error> for RoadmapError {
    fn from(err: toml::ser::Error) -> Self {
        RoadmapError::Toml(err.to_string())
    }
}

/// Result type alias using RoadmapError
pub type Result<T> = std::result::Result<T, RoadmapError>;
