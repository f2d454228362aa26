//! Split version control repository URLs into structured parts.
//!
//! [`separate`] turns `https://github.com/owner/project/src/lib.rs` into a
//! [`UrlParts`] naming the provider (`GitHub`), organization, project, the
//! subdirectories leading to the file, and the file itself. The remaining
//! modules back the `vus` command line.

pub mod cli_args;
pub mod commands;
pub mod config;
pub mod error;
pub mod printer;
pub mod separator;

pub use error::{SeparateError, VusError};
pub use separator::{UrlParts, separate};
