//! Configuration System
//!
//! Resolves hoarder's runtime settings in layers: built-in defaults, then an
//! optional YAML override file, then derived values and the process logger.
//! The result is an immutable [`Config`] snapshot handed to every subsystem
//! that needs it.

use serde::Serialize;
use std::fmt;
use std::time::Duration;

mod facade;
pub(crate) mod merge;
pub(crate) mod sources;

pub use facade::{load, resolve, Resolved};
pub use merge::settings_table::{lookup, Setting, SettingKind, SETTINGS};
pub use sources::global_file::default_config_path;
pub use sources::override_file::OverrideDocument;

pub const DEFAULT_BACKEND: &str = "filesystem";
pub const DEFAULT_GC_INTERVAL: i64 = 0;
pub const DEFAULT_GC_AMOUNT: i64 = 0;
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_INSECURE: bool = false;
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_PORT: &str = ":7410";
pub const DEFAULT_TOKEN: &str = "TOKEN";

/// Crate version reported by the binary.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Resolved runtime settings.
///
/// Built once by [`resolve`] and read-only afterwards.
#[derive(Clone, PartialEq, Eq)]
pub struct Config {
    pub(crate) backend: String,
    pub(crate) gc_interval: i64,
    pub(crate) gc_amount: i64,
    pub(crate) host: String,
    pub(crate) insecure: bool,
    pub(crate) log_level: String,
    pub(crate) port: String,
    pub(crate) token: String,
    // Fixed from the defaults; overrides of host/port leave it untouched.
    addr: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            backend: DEFAULT_BACKEND.to_string(),
            gc_interval: DEFAULT_GC_INTERVAL,
            gc_amount: DEFAULT_GC_AMOUNT,
            host: DEFAULT_HOST.to_string(),
            insecure: DEFAULT_INSECURE,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            port: DEFAULT_PORT.to_string(),
            token: DEFAULT_TOKEN.to_string(),
            addr: format!("{}{}", DEFAULT_HOST, DEFAULT_PORT),
        }
    }
}

impl Config {
    /// Name of the storage driver the storage subsystem should build.
    pub fn backend(&self) -> &str {
        &self.backend
    }

    /// Seconds between garbage-collection passes.
    pub fn gc_interval(&self) -> i64 {
        self.gc_interval
    }

    /// Amount of storage reclaimed per garbage-collection pass.
    pub fn gc_amount(&self) -> i64 {
        self.gc_amount
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn insecure(&self) -> bool {
        self.insecure
    }

    pub fn log_level(&self) -> &str {
        &self.log_level
    }

    /// Bind port, separator included (e.g. `":7410"`).
    pub fn port(&self) -> &str {
        &self.port
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    /// Listen address composed from the *default* host and port.
    ///
    /// This value is fixed before overrides are applied, so a `host` or
    /// `port` override does not show up here. Consumers that want the
    /// overridden pair should join [`Config::host`] and [`Config::port`].
    pub fn addr(&self) -> &str {
        &self.addr
    }

    /// Interval between GC passes, or `None` when GC is disabled (`gc_interval <= 0`).
    pub fn gc_period(&self) -> Option<Duration> {
        u64::try_from(self.gc_interval)
            .ok()
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs)
    }

    /// Printable view of the settings with the token hidden.
    pub fn redacted(&self) -> RedactedConfig<'_> {
        RedactedConfig {
            backend: &self.backend,
            gc_interval: self.gc_interval,
            gc_amount: self.gc_amount,
            host: &self.host,
            insecure: self.insecure,
            log_level: &self.log_level,
            port: &self.port,
            token: REDACTED,
            addr: &self.addr,
        }
    }
}

const REDACTED: &str = "<redacted>";

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("backend", &self.backend)
            .field("gc_interval", &self.gc_interval)
            .field("gc_amount", &self.gc_amount)
            .field("host", &self.host)
            .field("insecure", &self.insecure)
            .field("log_level", &self.log_level)
            .field("port", &self.port)
            .field("token", &REDACTED)
            .field("addr", &self.addr)
            .finish()
    }
}

/// Serializable settings view used for display; never carries the token.
#[derive(Debug, Clone, Serialize)]
pub struct RedactedConfig<'a> {
    pub backend: &'a str,
    pub gc_interval: i64,
    pub gc_amount: i64,
    pub host: &'a str,
    pub insecure: bool,
    pub log_level: &'a str,
    pub port: &'a str,
    pub token: &'a str,
    pub addr: &'a str,
}

impl RedactedConfig<'_> {
    /// Setting name and display value pairs, in table order, followed by `addr`.
    pub fn rows(&self) -> Vec<(&'static str, String)> {
        vec![
            ("backend", self.backend.to_string()),
            ("gc_interval", self.gc_interval.to_string()),
            ("gc_amount", self.gc_amount.to_string()),
            ("host", self.host.to_string()),
            ("insecure", self.insecure.to_string()),
            ("log_level", self.log_level.to_string()),
            ("port", self.port.to_string()),
            ("token", self.token.to_string()),
            ("addr", self.addr.to_string()),
        ]
    }
}
