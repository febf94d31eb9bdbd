//! Storage Driver capability
//!
//! The resolved configuration only names a backend. The storage subsystem
//! registers a factory per backend name and asks the registry to build the
//! driver after resolution; no driver is implemented in this crate.

use crate::config::Config;
use crate::error::DriverError;
use std::collections::BTreeMap;
use std::io::Read;
use std::time::SystemTime;
use tracing::info;

/// Metadata for one stored blob.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataInfo {
    pub name: String,
    pub size: u64,
    pub modified: SystemTime,
}

/// Storage backend interface
pub trait Driver: Send + Sync {
    /// List every stored blob.
    fn list(&self) -> Result<Vec<DataInfo>, DriverError>;

    /// Open a blob for reading.
    fn read(&self, key: &str) -> Result<Box<dyn Read + Send>, DriverError>;

    /// Metadata for one blob.
    fn stat(&self, key: &str) -> Result<DataInfo, DriverError>;

    /// Store `data` under `key`, replacing any existing blob.
    fn write(&self, key: &str, data: &mut dyn Read) -> Result<(), DriverError>;

    fn remove(&self, key: &str) -> Result<(), DriverError>;
}

/// Builds a driver from the resolved configuration.
pub type DriverFactory = Box<dyn Fn(&Config) -> Result<Box<dyn Driver>, DriverError> + Send + Sync>;

/// Backend name to driver factory.
#[derive(Default)]
pub struct DriverRegistry {
    factories: BTreeMap<String, DriverFactory>,
}

impl DriverRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `factory` under `backend`, replacing any earlier registration.
    pub fn register<F>(&mut self, backend: impl Into<String>, factory: F) -> &mut Self
    where
        F: Fn(&Config) -> Result<Box<dyn Driver>, DriverError> + Send + Sync + 'static,
    {
        self.factories.insert(backend.into(), Box::new(factory));
        self
    }

    pub fn contains(&self, backend: &str) -> bool {
        self.factories.contains_key(backend)
    }

    /// Registered backend names, sorted.
    pub fn backends(&self) -> impl Iterator<Item = &str> {
        self.factories.keys().map(String::as_str)
    }

    /// Build the driver named by `config.backend()`.
    pub fn select(&self, config: &Config) -> Result<Box<dyn Driver>, DriverError> {
        let factory = self
            .factories
            .get(config.backend())
            .ok_or_else(|| DriverError::UnknownBackend(config.backend().to_string()))?;
        let driver = factory(config)?;
        info!(backend = %config.backend(), "Storage driver selected");
        Ok(driver)
    }
}

impl std::fmt::Debug for DriverRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DriverRegistry")
            .field("backends", &self.factories.keys().collect::<Vec<_>>())
            .finish()
    }
}
