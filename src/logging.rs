//! Logging System
//!
//! Builds the process-wide `tracing` subscriber from the resolved `log_level`.
//! Every text line carries the `[hoarder]` prefix so log consumers can pick
//! hoarder's output out of a shared stream.

use tracing::{Event, Subscriber};
use tracing_subscriber::fmt::format::{Format, Full, Writer};
use tracing_subscriber::fmt::time::ChronoUtc;
use tracing_subscriber::fmt::{FmtContext, FormatEvent, FormatFields};
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

/// Prefix attached to every log line.
pub const LOG_PREFIX: &str = "[hoarder]";

/// Environment variable holding an `EnvFilter` directive that overrides the resolved level.
pub const LOG_ENV_VAR: &str = "HOARDER_LOG";

/// Minimum severity the logger emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
    Fatal,
    Off,
}

impl LogLevel {
    /// Parse a level name, ignoring case.
    pub fn parse(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "trace" => Some(LogLevel::Trace),
            "debug" => Some(LogLevel::Debug),
            "info" => Some(LogLevel::Info),
            "warn" | "warning" => Some(LogLevel::Warn),
            "error" => Some(LogLevel::Error),
            "fatal" => Some(LogLevel::Fatal),
            "off" => Some(LogLevel::Off),
            _ => None,
        }
    }

    /// `EnvFilter` directive for this level. `tracing` has no fatal level, so it maps to error.
    pub fn directive(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error | LogLevel::Fatal => "error",
            LogLevel::Off => "off",
        }
    }
}

/// Handle to the process logger, built from the final `log_level`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Logger {
    level: LogLevel,
    requested: String,
    prefix: &'static str,
}

impl Logger {
    /// Build a logger for the level named by `log_level`.
    ///
    /// Unrecognized names fall back to [`LogLevel::Trace`] so nothing is hidden.
    pub fn new(log_level: &str) -> Self {
        Self {
            level: LogLevel::parse(log_level).unwrap_or(LogLevel::Trace),
            requested: log_level.to_string(),
            prefix: LOG_PREFIX,
        }
    }

    pub fn level(&self) -> LogLevel {
        self.level
    }

    /// The level name as it appeared in the configuration.
    pub fn requested(&self) -> &str {
        &self.requested
    }

    pub fn prefix(&self) -> &'static str {
        self.prefix
    }

    /// Whether the configured level name was recognized.
    pub fn is_recognized(&self) -> bool {
        LogLevel::parse(&self.requested).is_some()
    }

    /// Install this logger as the global `tracing` subscriber.
    ///
    /// Returns `false` when a global subscriber was already set; the existing
    /// one stays in place.
    pub fn install(&self) -> bool {
        let installed = Registry::default()
            .with(self.env_filter())
            .with(
                fmt::layer()
                    .event_format(PrefixedFormat::new(self.prefix, text_format()))
                    .with_writer(std::io::stderr),
            )
            .try_init()
            .is_ok();

        if installed && !self.is_recognized() {
            tracing::warn!(
                log_level = %self.requested,
                "Unrecognized log level; logging everything"
            );
        }
        installed
    }

    /// Filter from `HOARDER_LOG` when set and valid, otherwise from the configured level.
    pub fn env_filter(&self) -> EnvFilter {
        EnvFilter::try_from_env(LOG_ENV_VAR)
            .unwrap_or_else(|_| EnvFilter::new(self.level.directive()))
    }
}

fn text_format() -> Format<Full, ChronoUtc> {
    fmt::format()
        .with_target(true)
        .with_timer(ChronoUtc::rfc_3339())
}

/// Event formatter that writes a fixed prefix before delegating to `inner`.
pub struct PrefixedFormat<E> {
    prefix: &'static str,
    inner: E,
}

impl<E> PrefixedFormat<E> {
    pub fn new(prefix: &'static str, inner: E) -> Self {
        Self { prefix, inner }
    }
}

impl<S, N, E> FormatEvent<S, N> for PrefixedFormat<E>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
    E: FormatEvent<S, N>,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> std::fmt::Result {
        write!(writer, "{} ", self.prefix)?;
        self.inner.format_event(ctx, writer, event)
    }
}
