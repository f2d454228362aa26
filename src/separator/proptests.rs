//! Property-based tests for URL separation.

use super::*;
use proptest::prelude::*;

proptest! {
    /// Stripping is a no-op on strings without a protocol prefix.
    #[test]
    fn strip_without_prefix_is_identity(input in "[a-z0-9./-]{0,40}") {
        prop_assume!(!input.starts_with("http://") && !input.starts_with("https://"));
        prop_assert_eq!(strip_http_prefix(&input), input.as_str());
    }

    /// Stripping removes exactly the leading prefix.
    #[test]
    fn strip_removes_exactly_the_prefix(
        prefix in prop_oneof![Just("http://"), Just("https://")],
        rest in "[a-z0-9./-]{0,40}",
    ) {
        prop_assume!(!rest.starts_with("http://") && !rest.starts_with("https://"));
        let url = format!("{prefix}{rest}");
        prop_assert_eq!(strip_http_prefix(&url), rest.as_str());
    }

    /// Unknown provider tokens pass through unchanged.
    #[test]
    fn unknown_provider_passes_through(token in "[a-zA-Z0-9-]{1,20}") {
        prop_assume!(!["github", "bitbucket", "gitlab"].contains(&token.as_str()));
        prop_assert_eq!(match_provider(&token), token.as_str());
    }

    /// Fewer than three segments is always rejected with the segment count.
    #[test]
    fn short_urls_are_rejected(segments in prop::collection::vec("[a-z0-9.-]{1,12}", 1..3)) {
        let url = segments.join("/");
        prop_assert_eq!(
            separate(&url),
            Err(SeparateError::InsufficientSegments { found: segments.len() })
        );
    }

    /// Canonical `host.tld/org/project` keeps organization and project verbatim.
    #[test]
    fn canonical_form_round_trips(
        host in "[a-z]{3,10}\\.(com|org|io)",
        org in "[A-Za-z0-9_-]{1,16}",
        project in "[A-Za-z0-9_.-]{1,16}",
    ) {
        let got = separate(&format!("https://{host}/{org}/{project}")).expect("valid URL");
        prop_assert_eq!(got.organization, org);
        prop_assert_eq!(got.project, project);
        prop_assert!(got.sub_directories.is_empty());
        prop_assert!(got.file_path.is_empty());
    }

    /// Sub-directories never contain file-like segments and the file is never the project.
    #[test]
    fn result_invariants_hold(
        tail in prop::collection::vec("[a-z0-9._-]{1,10}", 0..6),
    ) {
        let url = format!("github.com/o/p/{}", tail.join("/"));
        if let Ok(got) = separate(&url) {
            prop_assert!(got.sub_directories.iter().all(|d| !is_file_name(d)));
            prop_assert_ne!(got.file_path.as_str(), "p");
        }
    }
}
