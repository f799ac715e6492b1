//! Property tests for combined-secret credential parsing.

use proptest::prelude::*;

use slipway::domain::Credentials;

fn token() -> impl Strategy<Value = String> {
    // Printable ASCII with no whitespace, so each value is one token.
    proptest::string::string_regex("[!-~]{1,20}").unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 96,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Parsing never panics on arbitrary input.
    #[test]
    fn property_parse_never_panics(
        combined in "(?s).{0,256}"
    ) {
        let _ = Credentials::parse(&combined);
    }

    /// PROPERTY: Two tokens parse into username and password regardless
    /// of the whitespace around and between them.
    #[test]
    fn property_two_tokens_round_trip(
        username in token(),
        password in token(),
        pad in "[ \t\n]{0,4}",
    ) {
        let combined = format!("{pad}{username}{pad} {password}{pad}");
        let creds = Credentials::parse(&combined);

        prop_assert_eq!(creds.username(), username.as_str());
        prop_assert_eq!(creds.password(), password.as_str());
        prop_assert!(!creds.is_anonymous());
    }

    /// PROPERTY: Tokens beyond the first two never change the result.
    #[test]
    fn property_extra_tokens_are_ignored(
        username in token(),
        password in token(),
        extras in proptest::collection::vec(token(), 1..=4),
    ) {
        let combined = format!("{} {} {}", username, password, extras.join(" "));
        let creds = Credentials::parse(&combined);

        prop_assert_eq!(creds.username(), username.as_str());
        prop_assert_eq!(creds.password(), password.as_str());
    }

    /// PROPERTY: Anything with fewer than two tokens degrades to
    /// anonymous credentials instead of failing.
    #[test]
    fn property_single_token_degrades_to_anonymous(
        lone in "[!-~]{0,20}"
    ) {
        let creds = Credentials::parse(&lone);
        prop_assert!(creds.is_anonymous());
        prop_assert_eq!(creds.username(), "");
        prop_assert_eq!(creds.password(), "");
    }

    /// PROPERTY: The debug rendering never contains the password.
    #[test]
    fn property_debug_never_leaks_the_password(
        username in "[A-Z]{4,12}",
        password in "[0-9]{8,16}",
    ) {
        let creds = Credentials::parse(&format!("{} {}", username, password));
        let rendered = format!("{:?}", creds);

        prop_assert!(rendered.contains(&username));
        prop_assert!(!rendered.contains(&password));
    }
}
