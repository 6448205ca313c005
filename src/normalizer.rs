use crate::{
    catalog::RuleId,
    config::{DEFAULT_CONFIG, RuleConfig},
    pipeline::Pipeline,
};
use std::borrow::Cow;

/// A reusable normalizer for one rule configuration.
///
/// Cheap to build, immutable once built, and `Send + Sync`: build it once
/// and call [`normalize`](Self::normalize) from as many threads as needed.
#[derive(Debug, Clone)]
pub struct Normalizer {
    config: RuleConfig,
    pipeline: Pipeline,
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new(DEFAULT_CONFIG)
    }
}

impl Normalizer {
    pub fn new(config: RuleConfig) -> Self {
        Self {
            pipeline: Pipeline::new(&config),
            config,
        }
    }

    pub fn builder() -> NormalizerBuilder {
        NormalizerBuilder::default()
    }

    #[inline]
    pub fn config(&self) -> &RuleConfig {
        &self.config
    }

    /// Apply every enabled rule, in catalog order.
    ///
    /// Returns `Cow::Borrowed` (same pointer) when nothing changed.
    #[inline]
    pub fn normalize<'a, T: Into<Cow<'a, str>>>(&self, text: T) -> Cow<'a, str> {
        self.pipeline.process(text.into())
    }
}

#[derive(Debug, Clone, Default)]
pub struct NormalizerBuilder {
    config: RuleConfig,
}

impl NormalizerBuilder {
    /// Replace the whole configuration.
    pub fn config(mut self, config: RuleConfig) -> Self {
        self.config = config;
        self
    }

    pub fn enable(mut self, id: RuleId) -> Self {
        self.config.enable(id);
        self
    }

    pub fn disable(mut self, id: RuleId) -> Self {
        self.config.disable(id);
        self
    }

    /// Overlay a partial `name → enabled` mapping; unknown names are ignored.
    pub fn overlay<'k, I>(mut self, entries: I) -> Self
    where
        I: IntoIterator<Item = (&'k str, bool)>,
    {
        self.config = self.config.overlay(entries);
        self
    }

    pub fn build(self) -> Normalizer {
        Normalizer::new(self.config)
    }
}

/// Normalize `text` with the default configuration.
pub fn normalize(text: &str) -> Cow<'_, str> {
    Normalizer::default().normalize(text)
}

/// Normalize `text` with `overrides` overlaid on the default configuration.
///
/// ```
/// let out = textclean::normalize_with("•…", [("replace_bullet", false)]);
/// assert_eq!(out, "•...");
/// ```
pub fn normalize_with<'a, 'k, I>(text: &'a str, overrides: I) -> Cow<'a, str>
where
    I: IntoIterator<Item = (&'k str, bool)>,
{
    Normalizer::new(DEFAULT_CONFIG.overlay(overrides)).normalize(text)
}
