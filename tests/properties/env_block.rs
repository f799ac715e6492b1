//! Property tests for environment block normalization.

use proptest::prelude::*;

use slipway::domain::EnvBlock;

fn key() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Z][A-Z0-9_]{0,11}").unwrap()
}

fn value() -> impl Strategy<Value = String> {
    // Values may contain further '=' characters but no backslashes, so a
    // generated pair can never collide with the literal \n separator.
    proptest::string::string_regex("[A-Za-z0-9_:/=.-]{0,16}").unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Normalization never panics and never leaves a literal
    /// `\n` escape behind.
    #[test]
    fn property_normalization_removes_every_literal_escape(
        raw in "(?s).{0,256}"
    ) {
        let block = EnvBlock::new(&raw);
        prop_assert!(!block.as_str().contains("\\n"));
    }

    /// PROPERTY: Pairs joined with literal `\n` separators survive
    /// normalization with content and order intact.
    #[test]
    fn property_pairs_survive_normalization_in_order(
        pairs in proptest::collection::vec((key(), value()), 0..=8)
    ) {
        let raw = pairs
            .iter()
            .map(|(k, v)| format!("{}={}", k, v))
            .collect::<Vec<_>>()
            .join("\\n");

        let block = EnvBlock::new(&raw);

        let expected: Vec<(&str, &str)> = pairs
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect();
        prop_assert_eq!(block.pairs(), expected);
        prop_assert_eq!(block.var_count(), pairs.len());
    }

    /// PROPERTY: Every well-formed pair is also a line; malformed lines
    /// only ever shrink the pair count, never grow it.
    #[test]
    fn property_pair_count_never_exceeds_line_count(
        raw in "(?s).{0,256}"
    ) {
        let block = EnvBlock::new(&raw);
        prop_assert!(block.var_count() <= block.lines().count());
    }

    /// PROPERTY: Normalization is idempotent once the escapes are gone.
    #[test]
    fn property_normalization_is_idempotent(
        raw in "(?s).{0,256}"
    ) {
        let once = EnvBlock::new(&raw);
        let twice = EnvBlock::new(once.as_str());
        prop_assert_eq!(once.as_str(), twice.as_str());
    }
}
