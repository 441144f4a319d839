//! Top-level error type for the command-line entry point.

use std::io;

use thiserror::Error;

use crate::config::ConfigError;

/// Failures that abort a dashboard run.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration could not be loaded or failed validation.
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// Several validation errors at once.
    #[error("{} configuration errors", .0.len())]
    Invalid(Vec<ConfigError>),
    /// Export or server I/O failed.
    #[error("{context}: {source}")]
    Io {
        context: String,
        #[source]
        source: io::Error,
    },
}

impl Error {
    /// Wraps an I/O error with a short description of what was attempted.
    pub fn io(context: impl Into<String>, source: io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }
}
