//! The static rule catalog.
//!
//! Every rule the normalizer knows is declared exactly once, in application
//! order, in the `define_rules!` invocation below. Everything else (the
//! `RuleId` enum, the descriptor table the form renders, the name lookup used
//! by configuration overlays) is generated from that single table.

use crate::rule::{
    Rule,
    replace_chars::{
        NORMALIZE_DASHES, NORMALIZE_QUOTES, REPLACE_ADDITIONAL_LIGATURES, REPLACE_ANGLE_QUOTES,
        REPLACE_BULLET, REPLACE_COMMON_LIGATURES, REPLACE_ELLIPSIS, REPLACE_MATH_MINUS,
        STRIP_SPACES,
    },
    surround_dashes::SurroundDashes,
};
use phf::{Map, phf_map};
use std::fmt;

/// Static description of one rule: what the UI shows and what the default
/// configuration contains.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleDescriptor {
    pub id: RuleId,
    /// Stable configuration key.
    pub name: &'static str,
    /// Human label ("Replace Math Minus").
    pub label: &'static str,
    pub default_enabled: bool,
}

macro_rules! define_rules {
    ($(
        $variant:ident, $name:literal, $label:literal,
        default: $default:expr,
        rule: $rule:expr
    );* $(;)?) => {
        /// Identity of a rule. Variants are declared in application order.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum RuleId {
            $($variant),*
        }

        impl RuleId {
            /// All rules, in the order the pipeline applies them.
            pub const ALL: &'static [RuleId] = &[$(RuleId::$variant),*];
            pub const COUNT: usize = RuleId::ALL.len();

            #[inline]
            pub const fn name(self) -> &'static str {
                match self {
                    $(RuleId::$variant => $name),*
                }
            }

            #[inline]
            pub const fn label(self) -> &'static str {
                match self {
                    $(RuleId::$variant => $label),*
                }
            }

            #[inline]
            pub const fn default_enabled(self) -> bool {
                match self {
                    $(RuleId::$variant => $default),*
                }
            }

            /// The static implementation behind this id.
            #[inline]
            pub fn rule(self) -> &'static dyn Rule {
                match self {
                    $(RuleId::$variant => &$rule),*
                }
            }
        }

        /// Descriptor table, in application order.
        pub static RULES: &[RuleDescriptor] = &[
            $(RuleDescriptor {
                id: RuleId::$variant,
                name: $name,
                label: $label,
                default_enabled: $default,
            }),*
        ];

        static RULE_BY_NAME: Map<&'static str, RuleId> = phf_map! {
            $($name => RuleId::$variant),*
        };
    };
}

define_rules! {
    SurroundDashes, "surround_dashes", "Surround Dashes",
        default: true, rule: SurroundDashes;
    NormalizeDashes, "normalize_dashes", "Normalize Dashes",
        default: true, rule: NORMALIZE_DASHES;
    NormalizeQuotes, "normalize_quotes", "Normalize Quotes",
        default: true, rule: NORMALIZE_QUOTES;
    StripSpaces, "strip_spaces", "Strip Spaces",
        default: true, rule: STRIP_SPACES;
    ReplaceEllipsis, "replace_ellipsis", "Replace Ellipsis",
        default: true, rule: REPLACE_ELLIPSIS;
    ReplaceCommonLigatures, "replace_common_ligatures", "Replace Common Ligatures",
        default: true, rule: REPLACE_COMMON_LIGATURES;
    ReplaceMathMinus, "replace_math_minus", "Replace Math Minus",
        default: true, rule: REPLACE_MATH_MINUS;
    ReplaceAngleQuotes, "replace_angle_quotes", "Replace Angle Quotes",
        default: true, rule: REPLACE_ANGLE_QUOTES;
    ReplaceBullet, "replace_bullet", "Replace Bullet",
        default: true, rule: REPLACE_BULLET;
    ReplaceAdditionalLigatures, "replace_additional_ligatures", "Replace Additional Ligatures",
        default: true, rule: REPLACE_ADDITIONAL_LIGATURES;
}

impl RuleId {
    /// Look a rule up by its configuration key. Exact, case-sensitive match.
    #[inline]
    pub fn from_name(name: &str) -> Option<RuleId> {
        RULE_BY_NAME.get(name).copied()
    }

    /// Position in the application order.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    #[inline]
    pub fn descriptor(self) -> &'static RuleDescriptor {
        &RULES[self.index()]
    }
}

impl fmt::Display for RuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Derive a display label from a rule name: underscores become spaces and
/// each word is capitalized (`replace_math_minus` → `Replace Math Minus`).
pub fn display_label(name: &str) -> String {
    name.split('_')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
