//! Hoarder: runtime configuration for the hoarder storage service
//!
//! Resolves built-in defaults and an optional YAML override file into a
//! validated [`config::Config`] snapshot, builds the process logger from it,
//! and defines the storage driver boundary selected by the resolved backend.

pub mod cli;
pub mod config;
pub mod driver;
pub mod error;
pub mod logging;

pub use config::{resolve, Config, Resolved};
pub use error::{CoercionError, DriverError, ResolveError};
