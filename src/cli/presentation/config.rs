//! Config command presentation: settings table, JSON view, and check summary.

use crate::config::{Config, VERSION};
use comfy_table::presets::UTF8_BORDERS_ONLY;
use comfy_table::Table;
use std::path::Path;

pub fn format_config_text(config: &Config) -> String {
    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    table.set_header(vec!["Setting", "Value"]);
    for (name, value) in config.redacted().rows() {
        table.add_row(vec![name.to_string(), value]);
    }
    table.to_string()
}

pub fn format_config_json(config: &Config) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&config.redacted())
}

pub fn format_check_summary(config: &Config, source: Option<&Path>) -> String {
    let source = source
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "built-in defaults".to_string());
    let mut output = format!("hoarder {}: configuration OK\n", VERSION);
    output.push_str(&format!("  source:  {}\n", source));
    output.push_str(&format!("  backend: {}\n", config.backend()));
    output.push_str(&format!("  addr:    {}\n", config.addr()));
    match config.gc_period() {
        Some(period) => output.push_str(&format!(
            "  gc:      every {}s, {} per pass\n",
            period.as_secs(),
            config.gc_amount()
        )),
        None => output.push_str("  gc:      disabled\n"),
    }
    output
}
