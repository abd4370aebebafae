//! Property tests for error page candidate resolution.

use proptest::prelude::*;

use errpage::{error_page_paths, LanguageTag};

fn file_name() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z0-9_-]{1,12}\\.html").unwrap()
}

fn language_tag() -> impl Strategy<Value = String> {
    let language = proptest::string::string_regex("[a-z]{2,3}")
        .unwrap()
        .prop_filter("undetermined language", |l| l != "und");
    let script = proptest::option::of(proptest::string::string_regex("[A-Z][a-z]{3}").unwrap());
    let region = proptest::option::of(proptest::string::string_regex("[A-Z]{2}|[0-9]{3}").unwrap());
    (language, script, region).prop_map(|(l, s, r)| {
        let mut tag = l;
        if let Some(s) = s {
            tag.push('-');
            tag.push_str(&s);
        }
        if let Some(r) = r {
            tag.push('-');
            tag.push_str(&r);
        }
        tag
    })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: The last candidate is always the base location, byte for byte.
    #[test]
    fn property_last_candidate_is_base(
        name in file_name(),
        language in "(?s).{0,24}",
    ) {
        let dir = tempfile::tempdir().unwrap();
        let base = format!("{}/./{}", dir.path().display(), name);

        let list = error_page_paths(&base, &language).unwrap();

        prop_assert_eq!(list.last().unwrap().to_str().unwrap(), base.as_str());
    }

    /// PROPERTY: Candidate count is 2 + one per subtag-dependent level.
    #[test]
    fn property_candidate_count_matches_tag_shape(
        name in file_name(),
        tag in language_tag(),
    ) {
        let dir = tempfile::tempdir().unwrap();
        let base = dir.path().join(&name).to_string_lossy().into_owned();
        let parsed = LanguageTag::parse(&tag).unwrap();

        let list = error_page_paths(&base, &tag).unwrap();

        let expected = 3 + usize::from(parsed.has_script()) + usize::from(parsed.has_region());
        prop_assert_eq!(list.len(), expected);
    }

    /// PROPERTY: Trailing variant subtags do not change the candidate list.
    #[test]
    fn property_variants_do_not_change_candidates(
        name in file_name(),
        tag in language_tag(),
        variant in "[0-9][a-z0-9]{3}|[a-z]{5,8}",
    ) {
        let dir = tempfile::tempdir().unwrap();
        let base = dir.path().join(&name).to_string_lossy().into_owned();

        let plain = error_page_paths(&base, &tag).unwrap();
        let with_variant = error_page_paths(&base, &format!("{}-{}", tag, variant)).unwrap();

        prop_assert_eq!(plain, with_variant);
    }

    /// PROPERTY: Every candidate ends with the base file name.
    #[test]
    fn property_candidates_share_file_name(
        name in file_name(),
        tag in language_tag(),
    ) {
        let dir = tempfile::tempdir().unwrap();
        let base = dir.path().join(&name).to_string_lossy().into_owned();

        let list = error_page_paths(&base, &tag).unwrap();

        for candidate in &list {
            prop_assert_eq!(candidate.file_name().unwrap().to_str().unwrap(), name.as_str());
        }
    }

    /// PROPERTY: Unparseable tags leave exactly the two language-agnostic candidates.
    #[test]
    fn property_invalid_tag_gives_two_candidates(
        name in file_name(),
        language in "[0-9 !@#]{0,12}",
    ) {
        let dir = tempfile::tempdir().unwrap();
        let base = dir.path().join(&name).to_string_lossy().into_owned();

        let list = error_page_paths(&base, &language).unwrap();

        prop_assert_eq!(list.len(), 2);
    }
}
