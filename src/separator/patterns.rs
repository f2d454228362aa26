//! Heuristic patterns used to classify URL text.
//!
//! All three are unanchored searches: a match anywhere in the input counts.

use std::sync::LazyLock;

use regex::Regex;

static ILLEGAL_CHAR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"[\[\]{}\\|"%~#<>]+"#).expect("valid regex"));

/// First capture group is the host label kept as the provider name.
pub(super) static TOP_LEVEL_DOMAIN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([a-zA-Z0-9\-]{3,})(\.[a-zA-Z0-9\-]+)").expect("valid regex")
});

static FILE_NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[a-zA-Z0-9\-_]+\.[a-zA-Z0-9]+").expect("valid regex"));

/// Returns `true` when `input` contains any of `[ ] { } \ | " % ~ # < >`.
///
/// # Examples
///
/// ```
/// # use vcs_url_separator::separator::contains_illegal_characters;
/// assert!(contains_illegal_characters("github.com/o/p#readme"));
/// assert!(!contains_illegal_characters("github.com/o/p"));
/// ```
#[must_use]
pub fn contains_illegal_characters(input: &str) -> bool {
    ILLEGAL_CHAR_RE.is_match(input)
}

/// Returns `true` when `segment` looks like a file name (`name.ext`).
///
/// Any dotted run of word characters qualifies, so `v1.2` and
/// `archive.tar.gz` both count as files.
///
/// # Examples
///
/// ```
/// # use vcs_url_separator::separator::is_file_name;
/// assert!(is_file_name("go.mod"));
/// assert!(!is_file_name("src"));
/// ```
#[must_use]
pub fn is_file_name(segment: &str) -> bool {
    FILE_NAME_RE.is_match(segment)
}
