//! rule/surround_dashes.rs
//! The one context-sensitive rule: an em/en dash squeezed between two
//! non-whitespace characters is replaced by ` - `.
//!
//! Both neighbours are read from the *original* text in a single left-to-right
//! scan, so a run like `a—–b` expands every dash (`a -  - b`) rather than
//! seeing the spaces written for the previous one.

use crate::{
    catalog::RuleId,
    rule::Rule,
    unicode::{is_long_dash, is_space_like, may_contain_targets},
};
use std::borrow::Cow;
use std::iter::{FusedIterator, Peekable};
use std::str::CharIndices;

/// Replacement written for each surrounded dash.
pub const SPACED_HYPHEN: &str = " - ";

pub struct SurroundDashes;

impl Rule for SurroundDashes {
    fn id(&self) -> RuleId {
        RuleId::SurroundDashes
    }

    #[inline(always)]
    fn needs_apply(&self, text: &str) -> bool {
        may_contain_targets(text) && SurroundedDashes::new(text).next().is_some()
    }

    fn apply<'a>(&self, text: Cow<'a, str>) -> Cow<'a, str> {
        let mut matches = SurroundedDashes::new(&text).peekable();
        if matches.peek().is_none() {
            return text;
        }
        let mut out = String::with_capacity(text.len() + 8);
        let mut last = 0;
        for (start, dash) in matches {
            out.push_str(&text[last..start]);
            out.push_str(SPACED_HYPHEN);
            last = start + dash.len_utf8();
        }
        out.push_str(&text[last..]);
        Cow::Owned(out)
    }
}

/// Byte offsets (and the dash itself) of every em/en dash whose previous and
/// next code points both exist and are not whitespace.
pub struct SurroundedDashes<'a> {
    chars: Peekable<CharIndices<'a>>,
    prev: Option<char>,
}

impl<'a> SurroundedDashes<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            chars: text.char_indices().peekable(),
            prev: None,
        }
    }
}

impl Iterator for SurroundedDashes<'_> {
    type Item = (usize, char);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        while let Some((idx, c)) = self.chars.next() {
            let prev = self.prev.replace(c);
            if !is_long_dash(c) {
                continue;
            }
            let before = prev.is_some_and(|p| !is_space_like(p));
            let after = self
                .chars
                .peek()
                .is_some_and(|&(_, n)| !is_space_like(n));
            if before && after {
                return Some((idx, c));
            }
        }
        None
    }
}

impl FusedIterator for SurroundedDashes<'_> {}


#[cfg(test)]
mod tests {
    use super::*;

    fn run(input: &str) -> String {
        SurroundDashes.apply(Cow::Borrowed(input)).into_owned()
    }

    #[test]
    fn tight_dashes_get_spaced() {
        assert_eq!(run("a—b"), "a - b");
        assert_eq!(run("pages 10–20"), "pages 10 - 20");
    }

    #[test]
    fn spaced_dashes_are_left_alone() {
        assert_eq!(run("a — b"), "a — b");
        assert_eq!(run("a —b"), "a —b");
        assert_eq!(run("a— b"), "a— b");
        assert_eq!(run("a\t–\nb"), "a\t–\nb");
        assert!(!SurroundDashes.needs_apply("a — b"));
    }

    #[test]
    fn string_boundaries_are_not_neighbours() {
        assert_eq!(run("—"), "—");
        assert_eq!(run("—b"), "—b");
        assert_eq!(run("a—"), "a—");
        assert_eq!(run(""), "");
    }

    #[test]
    fn adjacency_is_read_from_the_original_text() {
        assert_eq!(run("a—–b"), "a -  - b");
        assert_eq!(run("a———b"), "a -  -  - b");
    }

    #[test]
    fn unicode_whitespace_blocks_surrounding() {
        assert_eq!(run("a\u{00A0}—b"), "a\u{00A0}—b");
        assert_eq!(run("a—\u{3000}b"), "a—\u{3000}b");
    }

    #[test]
    fn zero_width_space_is_not_whitespace() {
        assert_eq!(run("a\u{200B}—b"), "a\u{200B} - b");
    }

    #[test]
    fn non_breaking_hyphen_is_not_surrounded() {
        assert_eq!(run("a\u{2011}b"), "a\u{2011}b");
        assert!(!SurroundDashes.needs_apply("a\u{2011}b"));
    }

    #[test]
    fn multibyte_neighbours() {
        assert_eq!(run("日本—中国"), "日本 - 中国");
        assert_eq!(run("“quote”—reply"), "“quote” - reply");
    }

    #[test]
    fn matches_report_byte_offsets() {
        let found: Vec<_> = SurroundedDashes::new("x—y z–w — v").collect();
        assert_eq!(found, [(1, '—'), (7, '–')]);
    }

    #[test]
    fn untouched_text_stays_borrowed() {
        let input = "no dashes here";
        let out = SurroundDashes.apply(Cow::Borrowed(input));
        assert!(matches!(out, Cow::Borrowed(s) if s.as_ptr() == input.as_ptr()));
    }
}
