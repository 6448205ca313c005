//! Batch-runner steps that do not depend on argument parsing.
//!
//! The binary wires these to its flags; keeping them here lets them be
//! exercised without spawning a process.

use crate::{
    catalog::{RULES, RuleId},
    config::{ConfigError, RuleConfig},
};
use std::io::{self, Write};
use std::path::Path;

/// Resolve the effective configuration: defaults, then the config file,
/// then every `disable`, then every `enable`. A rule named in both lists
/// ends up enabled.
pub fn resolve_config(
    config_file: Option<&Path>,
    disable: &[RuleId],
    enable: &[RuleId],
) -> Result<RuleConfig, ConfigError> {
    let mut config = match config_file {
        Some(path) => RuleConfig::from_toml_file(path)?,
        None => RuleConfig::default(),
    };
    for &id in disable {
        config.disable(id);
    }
    for &id in enable {
        config.enable(id);
    }
    Ok(config)
}

/// Write `text` exactly as given (no trailing newline is added) and flush.
pub fn write_text<W: Write>(mut writer: W, text: &str) -> io::Result<()> {
    writer.write_all(text.as_bytes())?;
    writer.flush()
}

/// One line per rule: name, default state, label.
pub fn write_rule_list<W: Write>(mut writer: W) -> io::Result<()> {
    let width = RULES.iter().map(|d| d.name.len()).max().unwrap_or(0);
    for desc in RULES {
        let default = if desc.default_enabled { "on" } else { "off" };
        writeln!(writer, "{:<width$}  {:<3}  {}", desc.name, default, desc.label)?;
    }
    writer.flush()
}
