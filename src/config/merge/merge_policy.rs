//! Merge rules: defaults first, then overrides in document order, stopping at the first bad value.

use crate::config::merge::settings_table::lookup;
use crate::config::sources::override_file::OverrideDocument;
use crate::config::Config;
use crate::error::ResolveError;
use tracing::debug;

/// Apply every recognized entry of `document` to `config`.
///
/// Unknown keys are skipped. On the first value that fails coercion the
/// error is returned and no later entry is applied; entries before it stay
/// applied.
pub fn apply_overrides(config: &mut Config, document: &OverrideDocument) -> Result<(), ResolveError> {
    for (key, value) in document.entries() {
        let Some(setting) = lookup(key) else {
            debug!(key = %key, "Ignoring unrecognized configuration key");
            continue;
        };

        setting
            .apply(config, value)
            .map_err(|source| ResolveError::InvalidValue {
                name: setting.name,
                value: value.clone(),
                source,
            })?;

        if setting.name == "token" {
            debug!(setting = setting.name, "Applied override");
        } else {
            debug!(setting = setting.name, value = %value, "Applied override");
        }
    }

    Ok(())
}
