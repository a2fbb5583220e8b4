//! Error types for the terminal front end.

use std::path::PathBuf;

/// Errors raised while loading config, setting up logging or driving the terminal
#[derive(Debug, thiserror::Error)]
pub enum TerminalError {
    /// Terminal or filesystem I/O failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A config file was found but holds invalid values
    #[error("Invalid configuration in {path}: {message}")]
    Config {
        /// File the values came from (or `<defaults>`)
        path: PathBuf,
        /// What is wrong
        message: String,
    },

    /// A config file could not be parsed as TOML
    #[error("Failed to parse config file: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// The config could not be rendered as TOML
    #[error("Failed to serialize config: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),

    /// The tracing subscriber could not be installed
    #[error("Logging error: {0}")]
    Logging(String),
}

/// Result alias for the terminal crate
pub type Result<T> = std::result::Result<T, TerminalError>;
