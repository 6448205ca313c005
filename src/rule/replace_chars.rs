//! rule/replace_chars.rs
//! Table-driven, context-free rules: each targeted code point maps to a
//! fixed replacement string (possibly empty, which deletes it).
//! Zero-copy when no targeted code point is present.

use crate::{
    catalog::RuleId,
    rule::Rule,
    unicode::{
        BULLET, EM_DASH, EN_DASH, HORIZONTAL_ELLIPSIS, LEFT_DOUBLE_ANGLE_QUOTE, LEFT_DOUBLE_QUOTE,
        LEFT_SINGLE_ANGLE_QUOTE, LEFT_SINGLE_QUOTE, LIGATURE_FF, LIGATURE_FFI, LIGATURE_FFL,
        LIGATURE_FI, LIGATURE_FL, MINUS_SIGN, NARROW_NO_BREAK_SPACE, NO_BREAK_SPACE,
        NON_BREAKING_HYPHEN, RIGHT_DOUBLE_ANGLE_QUOTE, RIGHT_DOUBLE_QUOTE,
        RIGHT_SINGLE_ANGLE_QUOTE, RIGHT_SINGLE_QUOTE, SOFT_HYPHEN, ZERO_WIDTH_SPACE,
        may_contain_targets,
    },
};
use std::borrow::Cow;
use std::iter::FusedIterator;
use std::str::Chars;

/// Replace a small fixed set of characters, globally.
///
/// The table is searched linearly; every instance in this crate has at most
/// four entries, which beats any hashing.
#[derive(Debug, Clone, Copy)]
pub struct ReplaceChars {
    id: RuleId,
    table: &'static [(char, &'static str)],
}

// ── Preset instances (one per catalog entry) ─────────────────────────────

/// — – ‑ → `-`
pub const NORMALIZE_DASHES: ReplaceChars = ReplaceChars::new(
    RuleId::NormalizeDashes,
    &[(EM_DASH, "-"), (EN_DASH, "-"), (NON_BREAKING_HYPHEN, "-")],
);

/// “ ” → `"`, ‘ ’ → `'`
pub const NORMALIZE_QUOTES: ReplaceChars = ReplaceChars::new(
    RuleId::NormalizeQuotes,
    &[
        (LEFT_DOUBLE_QUOTE, "\""),
        (RIGHT_DOUBLE_QUOTE, "\""),
        (LEFT_SINGLE_QUOTE, "'"),
        (RIGHT_SINGLE_QUOTE, "'"),
    ],
);

/// NBSP, narrow NBSP and zero-width space are deleted, not turned into spaces.
pub const STRIP_SPACES: ReplaceChars = ReplaceChars::new(
    RuleId::StripSpaces,
    &[
        (NO_BREAK_SPACE, ""),
        (NARROW_NO_BREAK_SPACE, ""),
        (ZERO_WIDTH_SPACE, ""),
    ],
);

/// … → `...`
pub const REPLACE_ELLIPSIS: ReplaceChars =
    ReplaceChars::new(RuleId::ReplaceEllipsis, &[(HORIZONTAL_ELLIPSIS, "...")]);

/// ﬁ ﬂ → `fi` `fl`
pub const REPLACE_COMMON_LIGATURES: ReplaceChars = ReplaceChars::new(
    RuleId::ReplaceCommonLigatures,
    &[(LIGATURE_FI, "fi"), (LIGATURE_FL, "fl")],
);

/// − → `-`; soft hyphen deleted.
pub const REPLACE_MATH_MINUS: ReplaceChars = ReplaceChars::new(
    RuleId::ReplaceMathMinus,
    &[(MINUS_SIGN, "-"), (SOFT_HYPHEN, "")],
);

/// « » → `"`, ‹ › → `'`
pub const REPLACE_ANGLE_QUOTES: ReplaceChars = ReplaceChars::new(
    RuleId::ReplaceAngleQuotes,
    &[
        (LEFT_DOUBLE_ANGLE_QUOTE, "\""),
        (RIGHT_DOUBLE_ANGLE_QUOTE, "\""),
        (LEFT_SINGLE_ANGLE_QUOTE, "'"),
        (RIGHT_SINGLE_ANGLE_QUOTE, "'"),
    ],
);

/// • → `-`
pub const REPLACE_BULLET: ReplaceChars =
    ReplaceChars::new(RuleId::ReplaceBullet, &[(BULLET, "-")]);

/// ﬀ ﬃ ﬄ → `ff` `ffi` `ffl`
pub const REPLACE_ADDITIONAL_LIGATURES: ReplaceChars = ReplaceChars::new(
    RuleId::ReplaceAdditionalLigatures,
    &[(LIGATURE_FF, "ff"), (LIGATURE_FFI, "ffi"), (LIGATURE_FFL, "ffl")],
);

impl ReplaceChars {
    pub const fn new(id: RuleId, table: &'static [(char, &'static str)]) -> Self {
        Self { id, table }
    }

    /// The replacement for `c`, or `None` if this rule leaves it alone.
    #[inline(always)]
    pub fn lookup(&self, c: char) -> Option<&'static str> {
        self.table
            .iter()
            .find_map(|&(from, to)| (from == c).then_some(to))
    }

    /// Characters this rule rewrites.
    pub fn targets(&self) -> impl Iterator<Item = char> + '_ {
        self.table.iter().map(|&(from, _)| from)
    }

    /// Lazily expanded view of `text` with this rule applied.
    pub fn iter<'a>(&self, text: &'a str) -> ReplaceCharsIter<'a> {
        ReplaceCharsIter {
            chars: text.chars(),
            table: self.table,
            pending: "".chars(),
        }
    }
}

impl Rule for ReplaceChars {
    fn id(&self) -> RuleId {
        self.id
    }

    #[inline(always)]
    fn needs_apply(&self, text: &str) -> bool {
        may_contain_targets(text) && text.chars().any(|c| self.lookup(c).is_some())
    }

    fn apply<'a>(&self, text: Cow<'a, str>) -> Cow<'a, str> {
        // Copy the untouched prefix in one go, then walk the rest.
        let Some(first) = text.char_indices().find(|&(_, c)| self.lookup(c).is_some()) else {
            return text;
        };
        let (start, _) = first;
        let mut out = String::with_capacity(text.len());
        out.push_str(&text[..start]);
        out.extend(self.iter(&text[start..]));
        Cow::Owned(out)
    }
}

/// Character iterator produced by [`ReplaceChars::iter`].
pub struct ReplaceCharsIter<'a> {
    chars: Chars<'a>,
    table: &'static [(char, &'static str)],
    pending: Chars<'static>,
}

impl Iterator for ReplaceCharsIter<'_> {
    type Item = char;

    #[inline]
    fn next(&mut self) -> Option<char> {
        loop {
            if let Some(c) = self.pending.next() {
                return Some(c);
            }
            let c = self.chars.next()?;
            match self.table.iter().find(|&&(from, _)| from == c) {
                Some(&(_, to)) => self.pending = to.chars(),
                None => return Some(c),
            }
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        // Deletions can shrink the output to nothing; expansions are bounded
        // by the longest replacement (three chars).
        let (_, upper) = self.chars.size_hint();
        let pending = self.pending.as_str().len();
        (0, upper.map(|u| u * 3 + pending))
    }
}

impl FusedIterator for ReplaceCharsIter<'_> {}


#[cfg(test)]
mod tests {
    use super::*;

    fn run(rule: &ReplaceChars, input: &str) -> String {
        rule.apply(Cow::Borrowed(input)).into_owned()
    }

    #[test]
    fn dashes_become_hyphens() {
        assert_eq!(run(&NORMALIZE_DASHES, "a — b – c ‑ d"), "a - b - c - d");
        assert_eq!(run(&NORMALIZE_DASHES, "——"), "--");
    }

    #[test]
    fn curly_quotes_become_straight() {
        assert_eq!(
            run(&NORMALIZE_QUOTES, "“Hello” ‘world’ it’s"),
            "\"Hello\" 'world' it's"
        );
    }

    #[test]
    fn special_spaces_are_deleted_not_replaced() {
        let input = "a\u{00A0}b\u{202F}c\u{200B}d";
        let out = run(&STRIP_SPACES, input);
        assert_eq!(out, "abcd");
        assert!(out.chars().count() < input.chars().count());
    }

    #[test]
    fn ellipsis_expands_to_three_periods() {
        assert_eq!(run(&REPLACE_ELLIPSIS, "Wait… what……"), "Wait... what......");
    }

    #[test]
    fn ligatures_expand() {
        assert_eq!(run(&REPLACE_COMMON_LIGATURES, "\u{FB01}sh \u{FB02}ag"), "fish flag");
        assert_eq!(
            run(&REPLACE_ADDITIONAL_LIGATURES, "o\u{FB00} o\u{FB03}ce ba\u{FB04}e"),
            "off office baffle"
        );
    }

    #[test]
    fn minus_replaced_and_soft_hyphen_deleted() {
        assert_eq!(run(&REPLACE_MATH_MINUS, "5 − 3 = hy\u{00AD}phen"), "5 - 3 = hyphen");
    }

    #[test]
    fn angle_quotes_become_straight() {
        assert_eq!(run(&REPLACE_ANGLE_QUOTES, "«bonjour» ‹ciao›"), "\"bonjour\" 'ciao'");
    }

    #[test]
    fn bullet_becomes_hyphen() {
        assert_eq!(run(&REPLACE_BULLET, "• one\n• two"), "- one\n- two");
    }

    #[test]
    fn untargeted_characters_survive() {
        // Rules only touch their own table.
        assert_eq!(run(&REPLACE_BULLET, "“—…"), "“—…");
        assert!(!REPLACE_BULLET.needs_apply("“—…"));
    }

    #[test]
    fn apply_returns_borrowed_when_nothing_matches() {
        let input = "Plain ASCII text";
        match NORMALIZE_QUOTES.apply(Cow::Borrowed(input)) {
            Cow::Borrowed(s) => assert_eq!(s.as_ptr(), input.as_ptr()),
            Cow::Owned(_) => panic!("Expected Cow::Borrowed for unchanged ASCII"),
        }
    }

    #[test]
    fn iter_matches_apply() {
        let input = "x\u{00A0}y\u{200B}\u{202F}z";
        let via_iter: String = STRIP_SPACES.iter(input).collect();
        assert_eq!(via_iter, run(&STRIP_SPACES, input));
    }

    #[test]
    fn lookup_and_targets() {
        assert_eq!(REPLACE_ADDITIONAL_LIGATURES.lookup(LIGATURE_FFI), Some("ffi"));
        assert_eq!(REPLACE_ADDITIONAL_LIGATURES.lookup('f'), None);
        assert_eq!(STRIP_SPACES.lookup(ZERO_WIDTH_SPACE), Some(""));
        let targets: Vec<char> = REPLACE_MATH_MINUS.targets().collect();
        assert_eq!(targets, [MINUS_SIGN, SOFT_HYPHEN]);
    }
}
