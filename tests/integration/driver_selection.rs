//! Driver selection from resolved configuration

use super::test_utils::write_config;
use hoarder::config::load;
use hoarder::driver::{DataInfo, Driver, DriverRegistry};
use hoarder::DriverError;
use std::io::Read;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

struct NullDriver;

impl Driver for NullDriver {
    fn list(&self) -> Result<Vec<DataInfo>, DriverError> {
        Ok(Vec::new())
    }

    fn read(&self, key: &str) -> Result<Box<dyn Read + Send>, DriverError> {
        Err(DriverError::Io(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            key.to_string(),
        )))
    }

    fn stat(&self, key: &str) -> Result<DataInfo, DriverError> {
        Err(DriverError::Io(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            key.to_string(),
        )))
    }

    fn write(&self, _key: &str, _data: &mut dyn Read) -> Result<(), DriverError> {
        Ok(())
    }

    fn remove(&self, _key: &str) -> Result<(), DriverError> {
        Ok(())
    }
}

#[test]
fn test_registry_builds_driver_named_by_backend() {
    let (_dir, path) = write_config("backend: s3\n");
    let config = load(&path).unwrap();

    let s3_builds = Arc::new(AtomicUsize::new(0));
    let fs_builds = Arc::new(AtomicUsize::new(0));

    let mut registry = DriverRegistry::new();
    {
        let s3_builds = Arc::clone(&s3_builds);
        registry.register("s3", move |_| {
            s3_builds.fetch_add(1, Ordering::SeqCst);
            Ok(Box::new(NullDriver) as Box<dyn Driver>)
        });
    }
    {
        let fs_builds = Arc::clone(&fs_builds);
        registry.register("filesystem", move |_| {
            fs_builds.fetch_add(1, Ordering::SeqCst);
            Ok(Box::new(NullDriver) as Box<dyn Driver>)
        });
    }

    let driver = registry.select(&config).unwrap();
    assert!(driver.list().unwrap().is_empty());
    assert_eq!(s3_builds.load(Ordering::SeqCst), 1);
    assert_eq!(fs_builds.load(Ordering::SeqCst), 0);
}

#[test]
fn test_unregistered_backend_is_reported() {
    let (_dir, path) = write_config("backend: tape\n");
    let config = load(&path).unwrap();

    let registry = DriverRegistry::new();
    let err = registry.select(&config).err().unwrap();
    assert!(err.to_string().contains("tape"));
}
