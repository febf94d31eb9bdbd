//! Per-user default config file: $XDG_CONFIG_HOME/hoarder/config.yml (platform equivalent elsewhere).

use directories::ProjectDirs;
use std::path::PathBuf;
use tracing::debug;

pub const CONFIG_FILE_NAME: &str = "config.yml";

/// Path to the per-user config file, whether or not it exists.
pub fn global_config_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", "hoarder").map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
}

/// Per-user config file to use when no path was given explicitly.
///
/// Only returned when the file exists, so that a missing default never turns
/// into an unreadable-source error.
pub fn default_config_path() -> Option<PathBuf> {
    let path = global_config_path()?;
    if path.is_file() {
        Some(path)
    } else {
        debug!(
            config_path = %path.display(),
            "No per-user configuration file; using built-in defaults"
        );
        None
    }
}
