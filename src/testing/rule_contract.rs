use crate::{rule::Rule, unicode::TARGETED};
use std::borrow::Cow;

/// Assert that a rule satisfies every universal rule contract.
///
/// ### The contracts:
/// 1. `zero_copy_when_no_changes` → untouched input comes back borrowed, same pointer
/// 2. `needs_apply_is_accurate` → predicts exactly whether `apply` changes the text
/// 3. `rule_is_idempotent` → applying twice yields the same result as once
/// 4. `handles_empty_string_and_ascii` → empty and plain ASCII pass through
/// 5. `no_panic_on_targets_at_boundaries` → targets repeated, adjacent, first and last
/// 6. (Implicit) `Send + Sync + 'static` → required by trait bounds
#[macro_export]
macro_rules! assert_rule_contract {
    ($rule:expr) => {
        $crate::testing::rule_contract::zero_copy_when_no_changes($rule);
        $crate::testing::rule_contract::needs_apply_is_accurate($rule);
        $crate::testing::rule_contract::rule_is_idempotent($rule);
        $crate::testing::rule_contract::handles_empty_string_and_ascii($rule);
        $crate::testing::rule_contract::no_panic_on_targets_at_boundaries($rule);
    };
}

/// Inputs every rule is checked against. Between them they contain every
/// targeted code point in every position that matters to some rule.
pub const SAMPLES: &[&str] = &[
    "",
    "hello world 123 !@#",
    "Hello 世界 русский Türkçe العربية 简体中文",
    "a—b a – b a‑b",
    "“Hello’s” ‘world’",
    "a\u{00A0}b\u{202F}c\u{200B}d",
    "Wait… what",
    "\u{FB01}sh \u{FB02}ag \u{FB00}ish \u{FB03}ce \u{FB04}e",
    "5 − 3 hy\u{00AD}phen",
    "«bonjour» ‹ciao›",
    "• item",
    "—–‑“”‘’\u{00A0}\u{202F}\u{200B}…\u{FB00}\u{FB01}\u{FB02}\u{FB03}\u{FB04}−\u{00AD}«»‹›•",
    "x—–—y",
    "日本—中国",
];

pub fn zero_copy_when_no_changes(rule: &dyn Rule) {
    for &input in SAMPLES {
        let text = Cow::Borrowed(input);
        if rule.needs_apply(input) {
            continue;
        }
        let out = rule.apply(text);
        assert!(
            matches!(out, Cow::Borrowed(s) if std::ptr::eq(s, input)),
            "zero-copy violated for rule `{}` on `{input}`",
            rule.name()
        );
    }

    // Owned input must keep its buffer as well.
    let owned = String::from("nothing to see");
    let ptr = owned.as_ptr();
    let out = rule.apply(Cow::Owned(owned));
    assert!(matches!(&out, Cow::Owned(s) if s.as_ptr() == ptr));
}

pub fn needs_apply_is_accurate(rule: &dyn Rule) {
    for &input in SAMPLES {
        let predicted = rule.needs_apply(input);
        let output = rule.apply(Cow::Owned(input.to_owned()));
        let actually_changes = output != input;
        assert_eq!(
            predicted,
            actually_changes,
            "needs_apply() mismatch for rule `{}` on `{input}`\n\
             predicted: {predicted}\n\
             actual   : {actually_changes} (output = {output:?})",
            rule.name(),
        );
    }
}

pub fn rule_is_idempotent(rule: &dyn Rule) {
    for &input in SAMPLES {
        let once = rule.apply(Cow::Borrowed(input)).into_owned();
        let twice = rule.apply(Cow::Borrowed(once.as_str())).into_owned();
        assert_eq!(once, twice, "`{}` not idempotent on `{input}`", rule.name());
    }
}

pub fn handles_empty_string_and_ascii(rule: &dyn Rule) {
    assert!(!rule.needs_apply(""));
    assert_eq!(rule.apply(Cow::Borrowed("")), "");
    let ascii = "hello world 123 !@# \"quoted\" 'single' -- ...";
    assert!(!rule.needs_apply(ascii));
    assert_eq!(rule.apply(Cow::Borrowed(ascii)), ascii);
}

pub fn no_panic_on_targets_at_boundaries(rule: &dyn Rule) {
    for &c in TARGETED {
        for input in [
            c.to_string(),
            c.to_string().repeat(5),
            format!("{c}x{c}"),
            format!("x{c}{c}x"),
        ] {
            let _ = rule.apply(Cow::Borrowed(input.as_str()));
        }
    }
}
