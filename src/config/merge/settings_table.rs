//! Recognized settings: name, declared kind, and the setter that coerces text into place.

use crate::config::Config;
use crate::error::CoercionError;

/// Declared type of a setting's value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingKind {
    String,
    Integer,
    Boolean,
}

/// One recognized setting.
#[derive(Clone, Copy)]
pub struct Setting {
    pub name: &'static str,
    pub kind: SettingKind,
    apply: fn(&mut Config, &str) -> Result<(), CoercionError>,
}

impl Setting {
    /// Coerce `raw` to this setting's kind and store it in `config`.
    ///
    /// `config` is left untouched when coercion fails.
    pub fn apply(&self, config: &mut Config, raw: &str) -> Result<(), CoercionError> {
        (self.apply)(config, raw)
    }
}

impl std::fmt::Debug for Setting {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Setting")
            .field("name", &self.name)
            .field("kind", &self.kind)
            .finish()
    }
}

/// Every setting an override document may name.
pub const SETTINGS: &[Setting] = &[
    Setting {
        name: "backend",
        kind: SettingKind::String,
        apply: |c, v| {
            c.backend = v.to_string();
            Ok(())
        },
    },
    Setting {
        name: "gc_interval",
        kind: SettingKind::Integer,
        apply: |c, v| {
            c.gc_interval = parse_integer(v)?;
            Ok(())
        },
    },
    Setting {
        name: "gc_amount",
        kind: SettingKind::Integer,
        apply: |c, v| {
            c.gc_amount = parse_integer(v)?;
            Ok(())
        },
    },
    Setting {
        name: "host",
        kind: SettingKind::String,
        apply: |c, v| {
            c.host = v.to_string();
            Ok(())
        },
    },
    Setting {
        name: "insecure",
        kind: SettingKind::Boolean,
        apply: |c, v| {
            c.insecure = parse_bool(v)?;
            Ok(())
        },
    },
    Setting {
        name: "log_level",
        kind: SettingKind::String,
        apply: |c, v| {
            c.log_level = v.to_string();
            Ok(())
        },
    },
    Setting {
        name: "port",
        kind: SettingKind::String,
        apply: |c, v| {
            c.port = v.to_string();
            Ok(())
        },
    },
    Setting {
        name: "token",
        kind: SettingKind::String,
        apply: |c, v| {
            c.token = v.to_string();
            Ok(())
        },
    },
];

/// Find a recognized setting by its exact (snake_case) name.
pub fn lookup(name: &str) -> Option<&'static Setting> {
    SETTINGS.iter().find(|s| s.name == name)
}

/// Base-10 integer with an optional leading sign.
pub fn parse_integer(raw: &str) -> Result<i64, CoercionError> {
    Ok(raw.parse::<i64>()?)
}

/// Permissive boolean syntax.
pub fn parse_bool(raw: &str) -> Result<bool, CoercionError> {
    match raw {
        "1" | "t" | "T" | "true" | "TRUE" | "True" => Ok(true),
        "0" | "f" | "F" | "false" | "FALSE" | "False" => Ok(false),
        _ => Err(CoercionError::Boolean(raw.to_string())),
    }
}
