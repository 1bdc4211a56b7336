//! # Search Facade
//!
//! Configuration, dependency wiring and command dispatch for the
//! `search-facade` binary.

pub mod cli;
pub mod config;
pub mod logging;

pub use cli::{Cli, Command, Reply};
pub use config::{Dependencies, Settings};

use thiserror::Error;

/// Errors that can occur during start-up or while writing output.
///
/// Operation failures are not listed here; they are reported as envelopes.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Search engine error.
    #[error("Search error: {0}")]
    SearchError(#[from] search_facade_repository::SearchError),

    /// IO error.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Output serialization error.
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

impl AppError {
    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::ConfigError(msg.into())
    }
}
