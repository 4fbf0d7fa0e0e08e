//! Destination URL validation.

/// Shallow validity check for a destination URL: it must start with
/// `http://` or `https://` (which also rules out the empty string).
///
/// Deliberately no full URL parsing. Providers do their own validation and
/// reject anything they cannot shorten; duplicating that here would only
/// produce disagreements about edge cases.
pub fn is_valid_url(candidate: &str) -> bool {
    candidate.starts_with("http://") || candidate.starts_with("https://")
}

#[cfg(test)]
mod tests {
    use super::is_valid_url;

    #[test]
    fn test_accepts_both_schemes() {
        assert!(is_valid_url("http://example.com"));
        assert!(is_valid_url("https://example.com"));
    }

    #[test]
    fn test_rejects_empty_and_unprefixed() {
        assert!(!is_valid_url(""));
        assert!(!is_valid_url("example.com"));
        assert!(!is_valid_url("ftp://example.com"));
        assert!(!is_valid_url("   https://example.com"));
        assert!(!is_valid_url("HTTPS://example.com"));
    }

    #[test]
    fn test_accepts_any_suffix_including_malformed_hosts() {
        // Shallow by design: the prefix is the whole check.
        assert!(is_valid_url("https://"));
        assert!(is_valid_url("http://not a host"));
        assert!(is_valid_url("https://example.com/path?q=1#frag"));
    }

    // Property-based tests using proptest
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn test_prefix_is_the_whole_check(suffix in ".*") {
            let http_url = format!("http://{}", suffix);
            let https_url = format!("https://{}", suffix);
            prop_assert!(is_valid_url(&http_url));
            prop_assert!(is_valid_url(&https_url));
        }

        #[test]
        fn test_no_panic_on_arbitrary_input(candidate in ".*") {
            let _ = is_valid_url(&candidate);
        }

        #[test]
        fn test_accepted_implies_prefix(candidate in ".*") {
            if is_valid_url(&candidate) {
                prop_assert!(
                    candidate.starts_with("http://") || candidate.starts_with("https://")
                );
            }
        }
    }
}
