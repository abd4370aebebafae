//! Property tests for the tag, integer, URL and JSON parsers.

use proptest::prelude::*;

use errpage::util::{hostname, split_string, str_to_int, string_to_json, uri_to_local};
use errpage::LanguageTag;

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: `LanguageTag::parse` never panics and never yields an empty language.
    #[test]
    fn property_tag_parse_never_panics(s in "(?s).{0,64}") {
        if let Some(tag) = LanguageTag::parse(&s) {
            prop_assert!(!tag.language().is_empty());
        }
    }

    /// PROPERTY: A parsed tag re-parses to itself from its display form.
    #[test]
    fn property_tag_display_is_stable(s in "[A-Za-z]{2,3}(-[A-Za-z]{4})?(-[A-Za-z]{2})?(-[0-9][a-z0-9]{3})?") {
        prop_assume!(!s.to_ascii_lowercase().starts_with("und"));
        let tag = LanguageTag::parse(&s).unwrap();
        let again = LanguageTag::parse(&tag.to_string()).unwrap();
        prop_assert_eq!(tag, again);
    }

    /// PROPERTY: `str_to_int` agrees with `i32` formatting for every i32.
    #[test]
    fn property_str_to_int_matches_display(n in any::<i32>(), suffix in "[a-z ]{0,4}") {
        prop_assert_eq!(str_to_int(&format!("{}{}", n, suffix)), Some(n));
    }

    /// PROPERTY: Splitting then joining restores input without a trailing delimiter.
    #[test]
    fn property_split_join(fields in proptest::collection::vec("[a-z]{0,5}", 1..6)) {
        let joined = fields.join(",");
        prop_assume!(!joined.ends_with(','));
        prop_assert_eq!(split_string(&joined, ',').join(","), joined);
    }

    /// PROPERTY: URL and JSON helpers never panic on arbitrary input.
    #[test]
    fn property_helpers_never_panic(s in "(?s).{0,128}") {
        let _ = hostname(&s);
        let _ = uri_to_local(&s);
        let _ = string_to_json(&s);
    }
}
