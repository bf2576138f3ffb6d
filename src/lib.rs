//! Artifact Miner - terminal demo wizard
//!
//! A TUI walkthrough that pretends to turn a zipped set of projects into a
//! resume: landing animation, privacy consent, archive picker, project list,
//! a simulated analysis run and the generated resume. Everything shown comes
//! from an embedded mock catalog.

pub mod anim;
pub mod app;
pub mod config;
pub mod logging;
pub mod models;
pub mod util;

use thiserror::Error;

/// Common error type for the application shell
#[derive(Debug, Error)]
pub enum MinerError {
    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// Configuration validation or parsing error
    #[error("Configuration error: {0}")]
    Config(String),
    /// Embedded mock catalog could not be loaded
    #[error("Catalog error: {0}")]
    Catalog(String),
    /// TUI rendering or interaction error
    #[error("TUI error: {0}")]
    Tui(String),
    /// Log file or subscriber setup failed
    #[error("Logging error: {0}")]
    Logging(String),
}

impl From<serde_json::Error> for MinerError {
    fn from(err: serde_json::Error) -> Self {
        MinerError::Catalog(format!("JSON parsing error: {}", err))
    }
}

impl From<toml::de::Error> for MinerError {
    fn from(err: toml::de::Error) -> Self {
        MinerError::Config(format!("TOML parsing error: {}", err))
    }
}

impl From<toml::ser::Error> for MinerError {
    fn from(err: toml::ser::Error) -> Self {
        MinerError::Config(format!("TOML serialization error: {}", err))
    }
}

/// Result type alias for Artifact Miner operations
pub type Result<T> = std::result::Result<T, MinerError>;

/// Error handling utilities
pub mod error {
    use super::MinerError;

    /// Convert error to user-friendly message with suggestions
    pub fn user_friendly_message(error: &MinerError) -> String {
        match error {
            MinerError::Io(_) => {
                "Terminal I/O failed. Make sure you are running in an interactive terminal."
                    .to_string()
            }
            MinerError::Config(msg) => {
                format!("Configuration error: {}. Check your settings file.", msg)
            }
            MinerError::Catalog(_) => {
                "The built-in demo data could not be loaded. This build is broken.".to_string()
            }
            MinerError::Logging(_) => {
                "Could not open the log file. Check permissions on your data directory."
                    .to_string()
            }
            MinerError::Tui(_) => error.to_string(),
        }
    }
}

// Common types and constants
pub const APP_NAME: &str = "artifact-miner";
pub const CONFIG_FILE: &str = "artifact-miner.toml";
pub const LOG_FILE: &str = "artifact-miner.log";
pub const APP_TITLE: &str = "ARTIFACT MINER";
