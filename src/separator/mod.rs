//! Separate VCS repository URLs into provider, organization, project,
//! subdirectories and an optional file path.
//!
//! Inputs take the shape
//! `[http(s)://]<host-or-provider>/<organization>/<project>[/<subdir>...][/<file>]`.
//! Only the final segment may name a file.

use std::fmt;
use std::str::FromStr;

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::SeparateError;

mod patterns;
mod provider;

#[cfg(test)]
mod proptests;

pub use patterns::{contains_illegal_characters, is_file_name};
pub use provider::{match_provider, resolve_provider, strip_top_level_domain};

const HTTP_PREFIXES: [&str; 2] = ["http://", "https://"];

/// Components of a VCS URL.
///
/// # Examples
///
/// ```
/// # use vcs_url_separator::separate;
/// let parts = separate("https://github.com/burtawicz/vcs-url-separator/go.mod")
///     .expect("valid URL");
/// assert_eq!(parts.provider, "GitHub");
/// assert_eq!(parts.organization, "burtawicz");
/// assert_eq!(parts.project, "vcs-url-separator");
/// assert!(parts.sub_directories.is_empty());
/// assert_eq!(parts.file_path, "go.mod");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UrlParts {
    pub provider: String,
    pub organization: String,
    pub project: String,
    pub sub_directories: Vec<String>,
    /// Empty when the URL does not end in a file name.
    pub file_path: String,
}

impl UrlParts {
    /// Returns `true` when the URL ended in a file name.
    #[must_use]
    pub fn has_file(&self) -> bool {
        !self.file_path.is_empty()
    }

    /// Path inside the project: subdirectories followed by the file, if any.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vcs_url_separator::separate;
    /// let parts = separate("github.com/o/p/src/bin/main.rs").expect("valid URL");
    /// assert_eq!(parts.path(), "src/bin/main.rs");
    /// ```
    #[must_use]
    pub fn path(&self) -> String {
        self.sub_directories
            .iter()
            .map(String::as_str)
            .chain(self.has_file().then_some(self.file_path.as_str()))
            .collect::<Vec<_>>()
            .join("/")
    }
}

impl fmt::Display for UrlParts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.provider, self.organization, self.project)?;
        let path = self.path();
        if !path.is_empty() {
            write!(f, "/{path}")?;
        }
        Ok(())
    }
}

impl FromStr for UrlParts {
    type Err = SeparateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        separate(s)
    }
}

/// Remove a leading `http://` or `https://`, leaving the rest untouched.
///
/// # Examples
///
/// ```
/// # use vcs_url_separator::separator::strip_http_prefix;
/// assert_eq!(strip_http_prefix("https://github.com/o/p"), "github.com/o/p");
/// assert_eq!(strip_http_prefix("github.com/o/p"), "github.com/o/p");
/// ```
#[must_use]
pub fn strip_http_prefix(url: &str) -> &str {
    HTTP_PREFIXES
        .iter()
        .find_map(|prefix| url.strip_prefix(prefix))
        .unwrap_or(url)
}

/// How a segment after the project is treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Trailing<'a> {
    Directory(&'a str),
    File(&'a str),
    /// A final segment repeating the project name; dropped.
    ProjectRepeat,
}

fn classify_final<'a>(segment: &'a str, project: &str) -> Trailing<'a> {
    if segment == project {
        Trailing::ProjectRepeat
    } else if is_file_name(segment) {
        Trailing::File(segment)
    } else {
        Trailing::Directory(segment)
    }
}

fn classify_interior(segment: &str) -> Result<Trailing<'_>, SeparateError> {
    if is_file_name(segment) {
        return Err(SeparateError::MultipleFilePaths {
            segment: segment.to_owned(),
        });
    }
    Ok(Trailing::Directory(segment))
}

/// Split the segments following the project into subdirectories and a file.
fn split_trailing(
    project: &str,
    trailing: &[&str],
) -> Result<(Vec<String>, String), SeparateError> {
    let mut sub_directories = Vec::new();
    let mut file_path = String::new();
    let Some((last, interior)) = trailing.split_last() else {
        return Ok((sub_directories, file_path));
    };

    let classified = interior
        .iter()
        .map(|segment| classify_interior(segment))
        .chain(std::iter::once(Ok(classify_final(last, project))));
    for entry in classified {
        let entry = entry?;
        trace!("classified trailing segment: {entry:?}");
        match entry {
            Trailing::Directory(dir) => sub_directories.push(dir.to_owned()),
            Trailing::File(file) => file_path = file.to_owned(),
            Trailing::ProjectRepeat => {}
        }
    }
    Ok((sub_directories, file_path))
}

/// Separate a VCS URL into its components.
///
/// # Errors
///
/// - [`SeparateError::EmptyInput`] when `url` is empty or whitespace.
/// - [`SeparateError::IllegalCharacters`] when `url` contains any of
///   `[ ] { } \ | " % ~ # < >`.
/// - [`SeparateError::InsufficientSegments`] when fewer than three
///   `/`-delimited segments remain after removing the protocol.
/// - [`SeparateError::MultipleFilePaths`] when a segment other than the last
///   looks like a file name.
pub fn separate(url: &str) -> Result<UrlParts, SeparateError> {
    let result = separate_inner(url);
    if let Err(e) = &result {
        debug!("rejected {url:?}: {e}");
    }
    result
}

fn separate_inner(url: &str) -> Result<UrlParts, SeparateError> {
    if url.trim().is_empty() {
        return Err(SeparateError::EmptyInput);
    }
    if contains_illegal_characters(url) {
        return Err(SeparateError::IllegalCharacters);
    }

    let stripped = strip_http_prefix(url);
    let segments: Vec<&str> = stripped.split('/').collect();
    let [host, organization, project, trailing @ ..] = segments.as_slice() else {
        return Err(SeparateError::InsufficientSegments {
            found: segments.len(),
        });
    };

    let provider = resolve_provider(host);
    debug!("separating {stripped:?}: provider {provider:?}");
    let (sub_directories, file_path) = split_trailing(project, trailing)?;

    Ok(UrlParts {
        provider,
        organization: (*organization).to_owned(),
        project: (*project).to_owned(),
        sub_directories,
        file_path,
    })
}
