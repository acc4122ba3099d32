//! # Configuration Error Types
//!
//! Everything that can go wrong while loading a trail config.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading or validating a [`crate::TrailConfig`].
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("failed to read config {path}: {source}")]
    Io {
        /// File that was being read.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// The config file is not valid TOML for this schema.
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    /// A palette entry is not `#rrggbb` / `#rrggbbaa`.
    #[error("invalid color: {0:?}")]
    InvalidColor(String),

    /// The palette has no entries.
    #[error("palette must contain at least one color")]
    EmptyPalette,

    /// A value is out of its allowed range.
    #[error("invalid value for {field}: {reason}")]
    Invalid {
        /// Dotted path of the offending field.
        field: &'static str,
        /// What is wrong with it.
        reason: String,
    },
}

impl ConfigError {
    /// Shorthand for [`ConfigError::Invalid`].
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::Invalid {
            field,
            reason: reason.into(),
        }
    }
}

/// Result type for config operations.
pub type ConfigResult<T> = Result<T, ConfigError>;
