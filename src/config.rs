//! Rule configuration: which rules run.
//!
//! A [`RuleConfig`] always holds a value for every rule in the catalog.
//! Callers never build one from scratch; they start from
//! [`DEFAULT_CONFIG`] and *overlay* whatever they want to change, so
//! every rule they do not mention keeps its default.

use crate::catalog::{RULES, RuleId};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file `{}`", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid rule configuration")]
    Parse(#[from] toml::de::Error),
    #[error("invalid config file `{}`", path.display())]
    ParseFile {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Enabled flag for every rule, indexed by [`RuleId::index`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RuleConfig {
    enabled: [bool; RuleId::COUNT],
}

/// The canonical defaults, straight from the catalog.
pub const DEFAULT_CONFIG: RuleConfig = {
    let mut enabled = [false; RuleId::COUNT];
    let mut i = 0;
    while i < RuleId::COUNT {
        enabled[i] = RuleId::ALL[i].default_enabled();
        i += 1;
    }
    RuleConfig { enabled }
};

impl Default for RuleConfig {
    #[inline(always)]
    fn default() -> Self {
        DEFAULT_CONFIG
    }
}

impl RuleConfig {
    /// Every rule switched off. Useful as a base for "only these rules".
    pub const fn all_disabled() -> Self {
        Self {
            enabled: [false; RuleId::COUNT],
        }
    }

    #[inline]
    pub const fn is_enabled(&self, id: RuleId) -> bool {
        self.enabled[id.index()]
    }

    #[inline]
    pub fn set(&mut self, id: RuleId, enabled: bool) {
        self.enabled[id.index()] = enabled;
    }

    #[inline]
    pub fn enable(&mut self, id: RuleId) {
        self.set(id, true);
    }

    #[inline]
    pub fn disable(&mut self, id: RuleId) {
        self.set(id, false);
    }

    /// Builder-style [`set`](Self::set).
    #[must_use]
    pub fn with(mut self, id: RuleId, enabled: bool) -> Self {
        self.set(id, enabled);
        self
    }

    /// Overlay a partial `name → enabled` mapping. Names not in the catalog
    /// are ignored; for repeated names the last entry wins.
    #[must_use]
    pub fn overlay<'k, I>(mut self, entries: I) -> Self
    where
        I: IntoIterator<Item = (&'k str, bool)>,
    {
        for (name, enabled) in entries {
            if let Some(id) = RuleId::from_name(name) {
                self.set(id, enabled);
            }
        }
        self
    }

    /// Enabled rules, in application order.
    pub fn enabled(&self) -> impl Iterator<Item = RuleId> + '_ {
        RuleId::ALL.iter().copied().filter(|&id| self.is_enabled(id))
    }

    /// `(name, enabled)` for every rule, in application order.
    pub fn entries(&self) -> impl Iterator<Item = (&'static str, bool)> + '_ {
        RULES.iter().map(|desc| (desc.name, self.is_enabled(desc.id)))
    }

    /// Parse a TOML document and overlay its `[rules]` table on the
    /// defaults:
    ///
    /// ```toml
    /// [rules]
    /// replace_bullet = false
    /// surround_dashes = false
    /// ```
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        Ok(Self::parse_toml(source)?)
    }

    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse_toml(&source).map_err(|source| ConfigError::ParseFile {
            path: path.to_path_buf(),
            source,
        })
    }

    fn parse_toml(source: &str) -> Result<Self, toml::de::Error> {
        let file: ConfigFile = toml::from_str(source)?;
        Ok(DEFAULT_CONFIG.overlay(file.rules.iter().map(|(name, &on)| (name.as_str(), on))))
    }
}

/// On-disk shape of a configuration file.
#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    rules: BTreeMap<String, bool>,
}
