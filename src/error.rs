//! Error types for the dual-mode user interface layer.

use thiserror::Error;

/// Configuration errors: raised while a user interface is being described.
/// These are fatal at construction time and intended to surface during development.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Short flag '-{flag}' for parameter '{name}' is already used")]
    DuplicateShortFlag { flag: char, name: String },

    #[error("Long flag '--{flag}' for parameter '{name}' is already used")]
    DuplicateLongFlag { flag: String, name: String },

    #[error("Flag parameter '{0}' must declare a short or long flag")]
    UnflaggedFlagParameter(String),

    #[error("A user interface needs at least one mode with parameters")]
    EmptyModeSet,

    #[error("Unknown mode: {0}")]
    UnknownMode(String),

    #[error("Invalid log format: {0} (must be 'json' or 'text')")]
    InvalidLogFormat(String),

    #[error("Invalid log directive: {0}")]
    InvalidLogDirective(String),
}

/// Runtime errors for either interface surface.
#[derive(Debug, Error)]
pub enum UiError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Argument parsing failed: {0}")]
    Parse(#[from] clap::Error),

    #[error("Interactive surface disconnected before signaling an outcome")]
    Disconnected,
}
