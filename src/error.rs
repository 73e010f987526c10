//! Unified error types for toque.
//!
//! Two of these are hard failures that always propagate: `InvalidParameter`
//! (a malformed numeric input reached the quantile solver, which indicates a
//! logic defect) and `UnknownVenue` (a rating event references a venue that
//! was never seeded, which indicates the ratings log is inconsistent).
//! Invalid *submissions* are not errors at all; the service drops them with
//! a warning and re-serves the current tier assignment.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// The main error type for toque operations.
#[derive(Error, Debug)]
pub enum ToqueError {
    /// Malformed numeric input to the quantile solver.
    #[error("invalid parameter: {message}")]
    InvalidParameter { message: String },

    /// A rating event referenced a venue with no initial rating.
    #[error("unknown venue: {venue}")]
    UnknownVenue { venue: String },

    /// I/O errors from the ratings log.
    #[error("storage error at {path}: {source}")]
    Storage {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Record or output (de)serialization errors.
    #[error("serialization error: {message}")]
    Serde { message: String },

    /// Configuration loading or validation errors.
    #[error("config error: {message}")]
    Config { message: String },
}

/// A specialized Result type for toque operations.
pub type Result<T> = std::result::Result<T, ToqueError>;

impl ToqueError {
    /// Create an invalid parameter error.
    pub fn invalid_parameter(message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            message: message.into(),
        }
    }

    /// Create an unknown venue error.
    pub fn unknown_venue(venue: impl Into<String>) -> Self {
        Self::UnknownVenue {
            venue: venue.into(),
        }
    }

    /// Create a storage error from an I/O error.
    pub fn storage(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Storage {
            path: path.into(),
            source,
        }
    }

    /// Create a serialization error.
    pub fn serde(message: impl Into<String>) -> Self {
        Self::Serde {
            message: message.into(),
        }
    }

    /// Create a config error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }
}

impl From<io::Error> for ToqueError {
    fn from(err: io::Error) -> Self {
        Self::Storage {
            path: PathBuf::new(),
            source: err,
        }
    }
}

impl From<serde_json::Error> for ToqueError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serde {
            message: err.to_string(),
        }
    }
}
