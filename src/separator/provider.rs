//! Hosting provider resolution from the leading URL segment.

use super::patterns::TOP_LEVEL_DOMAIN_RE;

/// Known providers and their stylised names. Lookups are case-sensitive.
const KNOWN_PROVIDERS: &[(&str, &str)] = &[
    ("github", "GitHub"),
    ("bitbucket", "BitBucket"),
    ("gitlab", "GitLab"),
];

/// Strip the domain suffix from a host token.
///
/// Keeps the first label of the leftmost `label.suffix` match where the label
/// has at least three characters. Tokens without such a match are returned
/// unchanged.
///
/// # Examples
///
/// ```
/// # use vcs_url_separator::separator::strip_top_level_domain;
/// assert_eq!(strip_top_level_domain("github.com"), "github");
/// assert_eq!(strip_top_level_domain("gitea"), "gitea");
/// ```
#[must_use]
pub fn strip_top_level_domain(host: &str) -> &str {
    TOP_LEVEL_DOMAIN_RE
        .captures(host)
        .and_then(|caps| caps.get(1))
        .map_or(host, |label| label.as_str())
}

/// Map a provider token to its stylised name, passing unknown tokens through.
#[must_use]
pub fn match_provider(name: &str) -> &str {
    KNOWN_PROVIDERS
        .iter()
        .find(|(token, _)| *token == name)
        .map_or(name, |&(_, styled)| styled)
}

/// Resolve the provider name for a host token such as `github.com`.
///
/// # Examples
///
/// ```
/// # use vcs_url_separator::separator::resolve_provider;
/// assert_eq!(resolve_provider("bitbucket.org"), "BitBucket");
/// assert_eq!(resolve_provider("codeberg.org"), "codeberg");
/// ```
#[must_use]
pub fn resolve_provider(host: &str) -> String {
    match_provider(strip_top_level_domain(host)).to_owned()
}
