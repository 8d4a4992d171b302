//! Error types for catalog loading, configuration, and center estimation.
//!
//! | Variant | Raised by |
//! |---------|-----------|
//! | [`Io`](GlobularError::Io) | [`load_catalog`](crate::catalog::load_catalog), [`SurveyConfig::from_json_file`](crate::config::SurveyConfig) |
//! | [`Parse`](GlobularError::Parse) | [`parse_line`](crate::catalog::parse_line), [`parse_catalog`](crate::catalog::parse_catalog) |
//! | [`EmptySelection`](GlobularError::EmptySelection) | [`estimate_center`](crate::center::estimate_center) |
//! | [`InvalidConfig`](GlobularError::InvalidConfig) | [`SurveyConfig::validate`](crate::config::SurveyConfig::validate) |
//! | [`ConfigFormat`](GlobularError::ConfigFormat) | JSON config loading (`serde` feature) |
//!
//! None of these are retried; the `gcp` binary reports the chain and exits.

use std::path::PathBuf;
use thiserror::Error;

pub type GlobularResult<T> = Result<T, GlobularError>;

#[derive(Debug, Error)]
pub enum GlobularError {
    #[error("Cannot read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// `line` is 1-based; 0 means the input was a single line parsed on its own.
    #[error("Malformed catalog line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("No clusters inside the center window ({window})")]
    EmptySelection { window: String },

    #[error("Invalid survey configuration: {message}")]
    InvalidConfig { message: String },

    #[error("Malformed configuration file: {message}")]
    ConfigFormat { message: String },
}

impl GlobularError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse {
            line: 0,
            message: message.into(),
        }
    }

    pub fn empty_selection(window: impl Into<String>) -> Self {
        Self::EmptySelection {
            window: window.into(),
        }
    }

    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    pub fn config_format(message: impl Into<String>) -> Self {
        Self::ConfigFormat {
            message: message.into(),
        }
    }

    /// Attaches a 1-based line number to a [`Parse`](Self::Parse) error.
    /// Other variants pass through unchanged.
    pub fn at_line(self, line: usize) -> Self {
        match self {
            Self::Parse { message, .. } => Self::Parse { line, message },
            other => other,
        }
    }
}
