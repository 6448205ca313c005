//! Core rule abstraction.
//!
//! A rule is one independently toggleable substitution. Rules are total:
//! every `&str` is valid input and there is no failure path, so nothing
//! here returns `Result`.
//!
//! Rules follow the same allocation contract as the rest of the crate:
//! `needs_apply` is an accurate, cheap prediction, and `apply` hands the
//! input `Cow` back untouched whenever it would not change.

pub mod replace_chars;
pub mod surround_dashes;

use crate::catalog::RuleId;
use std::borrow::Cow;

/// A single normalization rule.
pub trait Rule: Send + Sync {
    /// Catalog identity of this rule.
    fn id(&self) -> RuleId;

    /// Configuration key – used for logging and error messages.
    #[inline]
    fn name(&self) -> &'static str {
        self.id().name()
    }

    /// Returns `true` iff `apply` would change `text`.
    fn needs_apply(&self, text: &str) -> bool;

    /// Rewrite every occurrence this rule targets. Must return `text`
    /// unchanged (same variant, same pointer) when `needs_apply` is `false`.
    fn apply<'a>(&self, text: Cow<'a, str>) -> Cow<'a, str>;
}
