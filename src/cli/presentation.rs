//! CLI presentation: text and json formatters for resolved configuration.

mod config;

pub use config::{format_check_summary, format_config_json, format_config_text};
