// Code points targeted by the rule set, plus the few predicates the rules
// need in their hot loops.

pub const EM_DASH: char = '\u{2014}';
pub const EN_DASH: char = '\u{2013}';
pub const NON_BREAKING_HYPHEN: char = '\u{2011}';

pub const LEFT_DOUBLE_QUOTE: char = '\u{201C}';
pub const RIGHT_DOUBLE_QUOTE: char = '\u{201D}';
pub const LEFT_SINGLE_QUOTE: char = '\u{2018}';
pub const RIGHT_SINGLE_QUOTE: char = '\u{2019}';

pub const NO_BREAK_SPACE: char = '\u{00A0}';
pub const NARROW_NO_BREAK_SPACE: char = '\u{202F}';
pub const ZERO_WIDTH_SPACE: char = '\u{200B}';

pub const HORIZONTAL_ELLIPSIS: char = '\u{2026}';

pub const LIGATURE_FF: char = '\u{FB00}';
pub const LIGATURE_FI: char = '\u{FB01}';
pub const LIGATURE_FL: char = '\u{FB02}';
pub const LIGATURE_FFI: char = '\u{FB03}';
pub const LIGATURE_FFL: char = '\u{FB04}';

pub const MINUS_SIGN: char = '\u{2212}';
pub const SOFT_HYPHEN: char = '\u{00AD}';

pub const LEFT_DOUBLE_ANGLE_QUOTE: char = '\u{00AB}';
pub const RIGHT_DOUBLE_ANGLE_QUOTE: char = '\u{00BB}';
pub const LEFT_SINGLE_ANGLE_QUOTE: char = '\u{2039}';
pub const RIGHT_SINGLE_ANGLE_QUOTE: char = '\u{203A}';

pub const BULLET: char = '\u{2022}';

/// Every code point some rule rewrites, in no particular order.
pub const TARGETED: &[char] = &[
    EM_DASH,
    EN_DASH,
    NON_BREAKING_HYPHEN,
    LEFT_DOUBLE_QUOTE,
    RIGHT_DOUBLE_QUOTE,
    LEFT_SINGLE_QUOTE,
    RIGHT_SINGLE_QUOTE,
    NO_BREAK_SPACE,
    NARROW_NO_BREAK_SPACE,
    ZERO_WIDTH_SPACE,
    HORIZONTAL_ELLIPSIS,
    LIGATURE_FF,
    LIGATURE_FI,
    LIGATURE_FL,
    LIGATURE_FFI,
    LIGATURE_FFL,
    MINUS_SIGN,
    SOFT_HYPHEN,
    LEFT_DOUBLE_ANGLE_QUOTE,
    RIGHT_DOUBLE_ANGLE_QUOTE,
    LEFT_SINGLE_ANGLE_QUOTE,
    RIGHT_SINGLE_ANGLE_QUOTE,
    BULLET,
];

/// Em dash or en dash: the two dashes that get surrounded by spaces.
#[inline(always)]
pub const fn is_long_dash(c: char) -> bool {
    matches!(c, EM_DASH | EN_DASH)
}

/// Whitespace as a regex `\s` class sees it in the tools this crate
/// replaces: the Unicode `White_Space` set plus the four ASCII information
/// separators (U+001C..U+001F). Zero-width space is *not* whitespace.
#[inline(always)]
pub fn is_space_like(c: char) -> bool {
    c.is_whitespace() || matches!(c, '\u{1C}'..='\u{1F}')
}

// UTF-8 lead bytes of every targeted code point:
//   0xC2 → U+0080..U+00BF (NBSP, «, soft hyphen, »)
//   0xE2 → U+2000..U+2FFF (dashes, quotes, spaces, bullet, ellipsis, minus)
//   0xEF → U+F000..U+FFFF (Alphabetic Presentation Forms ligatures)
const LEAD_C2: u8 = 0xC2;
const LEAD_E2: u8 = 0xE2;
const LEAD_EF: u8 = 0xEF;

/// Cheap byte-level prefilter. `false` proves that no targeted code point
/// occurs in `text`; `true` only means one might.
#[inline]
pub fn may_contain_targets(text: &str) -> bool {
    memchr::memchr3(LEAD_C2, LEAD_E2, LEAD_EF, text.as_bytes()).is_some()
}

#[inline]
pub fn contains_targets(text: &str) -> bool {
    may_contain_targets(text) && text.chars().any(|c| TARGETED.contains(&c))
}
