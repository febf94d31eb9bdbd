//! Override merging: the settings table and the fail-fast merge pass.

pub mod merge_policy;
pub mod settings_table;
