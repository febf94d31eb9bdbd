//! Error types for hoarder configuration resolution and driver selection.

use std::num::ParseIntError;
use std::path::PathBuf;
use thiserror::Error;

/// Failure to coerce a setting's text into its declared type.
#[derive(Debug, Error)]
pub enum CoercionError {
    #[error("not a base-10 integer: {0}")]
    Integer(#[from] ParseIntError),

    #[error("not a boolean: {0:?}")]
    Boolean(String),
}

/// Errors returned by [`crate::config::resolve`].
///
/// An absent source is not represented here: it silently yields the defaults.
#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("configuration source {path} unreadable: {source}")]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("configuration source {path} malformed: {source}")]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("invalid value for setting `{name}`: {source}")]
    InvalidValue {
        name: &'static str,
        value: String,
        #[source]
        source: CoercionError,
    },
}

impl ResolveError {
    /// Name of the offending setting, for value errors.
    pub fn setting(&self) -> Option<&'static str> {
        match self {
            ResolveError::InvalidValue { name, .. } => Some(*name),
            _ => None,
        }
    }
}

/// Driver selection errors
#[derive(Debug, Error)]
pub enum DriverError {
    #[error("no storage driver registered for backend {0:?}")]
    UnknownBackend(String),

    #[error("storage driver {backend:?} failed to initialize: {message}")]
    Init { backend: String, message: String },

    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),
}
