// src/pipeline.rs
use crate::{catalog::RuleId, config::RuleConfig, rule::Rule, unicode::may_contain_targets};
use smallvec::SmallVec;
use std::borrow::Cow;

/// The enabled rules of one configuration, in application order.
///
/// Built once per configuration; holds only `'static` rule references, so
/// it is `Send + Sync` and free to share between threads.
#[derive(Clone)]
pub struct Pipeline {
    rules: SmallVec<[&'static dyn Rule; 10]>,
}

impl Pipeline {
    pub fn new(config: &RuleConfig) -> Self {
        let rules = RuleId::ALL
            .iter()
            .filter(|&&id| config.is_enabled(id))
            .map(|&id| id.rule())
            .collect();
        Self { rules }
    }

    /// Ids of the rules this pipeline will run, in order.
    pub fn rule_ids(&self) -> impl Iterator<Item = RuleId> + '_ {
        self.rules.iter().map(|rule| rule.id())
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn process<'a>(&self, text: Cow<'a, str>) -> Cow<'a, str> {
        // No rule can fire on text without a targeted lead byte.
        if !may_contain_targets(&text) {
            return text;
        }

        let mut current = text;
        for rule in &self.rules {
            // Fast path: skip if no mutation needed
            if !rule.needs_apply(&current) {
                continue;
            }
            current = rule.apply(current);
        }
        current
    }
}

impl std::fmt::Debug for Pipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list()
            .entries(self.rules.iter().map(|rule| rule.name()))
            .finish()
    }
}
