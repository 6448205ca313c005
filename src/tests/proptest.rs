mod prop_tests {
    use crate::{Normalizer, RuleConfig, RuleId, normalize, normalize_with};
    use proptest::prelude::*;
    use regex::Regex;

    /// Every targeted code point, as one character class.
    const TARGET_CLASS: &str = "[\u{2014}\u{2013}\u{2011}\u{201C}\u{201D}\u{2018}\u{2019}\
                                \u{00A0}\u{202F}\u{200B}\u{2026}\u{FB00}-\u{FB04}\u{2212}\
                                \u{00AD}\u{00AB}\u{00BB}\u{2039}\u{203A}\u{2022}]";

    /// Text dense in targeted characters, whitespace and plain letters.
    fn fancy_text() -> impl Strategy<Value = String> {
        proptest::collection::vec(
            prop_oneof![
                3 => proptest::sample::select(vec![
                    '—', '–', '‑', '“', '”', '‘', '’', '\u{00A0}', '\u{202F}', '\u{200B}',
                    '…', '\u{FB00}', '\u{FB01}', '\u{FB02}', '\u{FB03}', '\u{FB04}', '−',
                    '\u{00AD}', '«', '»', '‹', '›', '•',
                ]),
                1 => proptest::sample::select(vec![' ', '\t', '\n', '\u{1F}', '\u{3000}']),
                2 => proptest::char::range('a', 'z'),
                1 => any::<char>(),
            ],
            0..200,
        )
        .prop_map(|chars| chars.into_iter().collect::<String>())
    }

    proptest! {
        #[test]
        fn default_pass_is_idempotent(s in fancy_text()) {
            let once = normalize(&s).into_owned();
            let twice = normalize(&once).into_owned();
            prop_assert_eq!(once, twice);
        }

        #[test]
        fn arbitrary_text_is_idempotent(s in ".{0,500}") {
            let once = normalize(&s).into_owned();
            let twice = normalize(&once).into_owned();
            prop_assert_eq!(once, twice);
        }

        #[test]
        fn no_targeted_character_survives(s in fancy_text()) {
            let targets = Regex::new(TARGET_CLASS).unwrap();
            let out = normalize(&s);
            prop_assert!(!targets.is_match(&out), "left over in {:?}", out);
        }

        #[test]
        fn disabled_rule_targets_are_untouched(s in fancy_text(), idx in 0..RuleId::COUNT) {
            let id = RuleId::ALL[idx];
            // Skip the dash pair: surround_dashes also rewrites dashes, so a
            // disabled normalize_dashes still sees some of its targets go.
            prop_assume!(id != RuleId::NormalizeDashes && id != RuleId::SurroundDashes);
            let normalizer = Normalizer::new(RuleConfig::default().with(id, false));
            let out = normalizer.normalize(s.as_str());
            let count = |text: &str| {
                text.chars().filter(|&c| id_targets(id).contains(&c)).count()
            };
            prop_assert_eq!(count(s.as_str()), count(&out[..]));
        }

        #[test]
        fn everything_disabled_is_identity(s in fancy_text()) {
            let normalizer = Normalizer::new(RuleConfig::all_disabled());
            prop_assert_eq!(normalizer.normalize(s.as_str()), s.as_str());
        }

        #[test]
        fn zero_copy_on_plain_ascii(s in "[ -~\\n\\t]{0,500}") {
            let input = s.as_str();
            let result = normalize(input);
            prop_assert!(matches!(result, std::borrow::Cow::Borrowed(b) if b.as_ptr() == input.as_ptr()));
        }

        #[test]
        fn unknown_keys_never_change_output(s in fancy_text(), key in "[a-z_]{1,20}") {
            prop_assume!(RuleId::from_name(&key).is_none());
            prop_assert_eq!(normalize_with(&s, [(key.as_str(), false)]), normalize(&s));
        }

        #[test]
        fn surrounded_dash_gains_spaces(a in "[a-z]{1,5}", b in "[a-z]{1,5}", dash in "[—–]") {
            let tight = format!("{a}{dash}{b}");
            let spaced = format!("{a} {dash} {b}");
            let expected = format!("{a} - {b}");
            prop_assert_eq!(normalize(&tight), expected.as_str());
            prop_assert_eq!(normalize(&spaced), expected.as_str());
        }
    }

    fn id_targets(id: RuleId) -> &'static [char] {
        match id {
            RuleId::SurroundDashes | RuleId::NormalizeDashes => &['—', '–', '‑'],
            RuleId::NormalizeQuotes => &['“', '”', '‘', '’'],
            RuleId::StripSpaces => &['\u{00A0}', '\u{202F}', '\u{200B}'],
            RuleId::ReplaceEllipsis => &['…'],
            RuleId::ReplaceCommonLigatures => &['\u{FB01}', '\u{FB02}'],
            RuleId::ReplaceMathMinus => &['−', '\u{00AD}'],
            RuleId::ReplaceAngleQuotes => &['«', '»', '‹', '›'],
            RuleId::ReplaceBullet => &['•'],
            RuleId::ReplaceAdditionalLigatures => &['\u{FB00}', '\u{FB03}', '\u{FB04}'],
        }
    }
}
