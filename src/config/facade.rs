//! Resolution entry point: defaults, optional override file, then the logger.

use crate::config::merge::merge_policy::apply_overrides;
use crate::config::sources::override_file::{self, OverrideDocument};
use crate::config::Config;
use crate::error::ResolveError;
use crate::logging::Logger;
use std::path::Path;
use tracing::{debug, info};

/// Outcome of a successful [`resolve`]: the settings snapshot and the logger built from it.
#[derive(Debug, Clone)]
pub struct Resolved {
    pub config: Config,
    pub log: Logger,
}

/// Resolve hoarder's runtime configuration.
///
/// A path that cannot be made absolute (e.g. an empty one) means there is no
/// override source and the defaults are used. Otherwise the file must be
/// readable and hold a flat YAML mapping, and every recognized value must
/// coerce to its setting's type; the first failure is returned.
///
/// The logger is built from the final `log_level` and installed as the global
/// subscriber. Only the first successful install in a process takes effect.
pub fn resolve<P: AsRef<Path>>(path: P) -> Result<Resolved, ResolveError> {
    let config = load(path.as_ref())?;

    let log = Logger::new(config.log_level());
    if !log.install() {
        debug!("Global logger already installed; keeping existing subscriber");
    }
    info!(
        backend = %config.backend(),
        addr = %config.addr(),
        insecure = config.insecure(),
        "Configuration resolved"
    );

    Ok(Resolved { config, log })
}

/// Merge the override file at `path` into the defaults, without touching the logger.
pub fn load(path: &Path) -> Result<Config, ResolveError> {
    let mut config = Config::default();

    let Some(source) = override_file::locate(path) else {
        return Ok(config);
    };

    let bytes = override_file::read(&source).map_err(|e| ResolveError::Unreadable {
        path: source.clone(),
        source: e,
    })?;
    let document = OverrideDocument::from_bytes(&bytes).map_err(|e| ResolveError::Malformed {
        path: source.clone(),
        source: e,
    })?;

    apply_overrides(&mut config, &document)?;
    Ok(config)
}
