//! Shared test utilities for integration tests

use std::path::PathBuf;
use tempfile::TempDir;

/// Write `contents` to a fresh config file and return its directory (keep it alive) and path.
pub fn write_config(contents: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.yml");
    std::fs::write(&path, contents).unwrap();
    (temp_dir, path)
}
