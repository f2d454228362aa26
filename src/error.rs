//! Error types for URL separation and the `vus` command line.

use thiserror::Error;

/// Reasons a string could not be separated into repository URL parts.
///
/// Every variant is terminal: the input is not a well-formed VCS URL and no
/// partial result is produced.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[allow(clippy::module_name_repetitions, reason = "exported for callers")]
pub enum SeparateError {
    #[error("URL is empty")]
    EmptyInput,
    #[error("URL contains illegal characters")]
    IllegalCharacters,
    #[error(
        "URL does not contain enough information: expected at least 3 segments, found {found}"
    )]
    InsufficientSegments { found: usize },
    #[error("multiple file paths: '{segment}' is not the final segment")]
    MultipleFilePaths { segment: String },
}

/// Errors surfaced by the `vus` binary.
#[derive(Error, Debug)]
pub enum VusError {
    #[error("{url}: {source}")]
    Separate {
        url: String,
        #[source]
        source: SeparateError,
    },
    #[error("no URLs supplied on the command line or in configuration")]
    MissingUrls,
    #[error("{failed} of {total} URLs could not be separated")]
    Incomplete { failed: usize, total: usize },
    #[error("serialisation failed: {0}")]
    Json(#[from] serde_json::Error),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("configuration error: {0}")]
    Config(#[from] ortho_config::OrthoError),
}
