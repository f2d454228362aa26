//! Command execution for `vus`.
//!
//! Owns the runtime flow of the `separate` sub-command: separating each URL,
//! reporting failures through the log and rendering the successes.

use std::io::{ErrorKind, Write};

use log::error;

use crate::cli_args::SeparateArgs;
use crate::error::VusError;
use crate::separator::{UrlParts, separate};

/// Returns `true` when `err` was caused by a closed output pipe.
#[must_use]
pub fn is_broken_pipe(err: &VusError) -> bool {
    matches!(err, VusError::Io(io) if io.kind() == ErrorKind::BrokenPipe)
}

/// Separate every URL in `args` and write the results to `out`.
///
/// Each failing URL is logged at error level; the remaining URLs are still
/// separated and printed.
///
/// # Errors
///
/// Returns [`VusError::MissingUrls`] when `args` holds no URLs,
/// [`VusError::Incomplete`] when any URL failed to separate, and any error
/// raised while writing output.
pub fn run_separate<W: Write>(args: &SeparateArgs, out: &mut W) -> Result<(), VusError> {
    if args.urls.is_empty() {
        return Err(VusError::MissingUrls);
    }
    let mut results: Vec<UrlParts> = Vec::with_capacity(args.urls.len());
    let mut failed = 0;
    for url in &args.urls {
        match separate(url) {
            Ok(parts) => results.push(parts),
            Err(source) => {
                failed += 1;
                let err = VusError::Separate {
                    url: url.clone(),
                    source,
                };
                error!("{err}");
            }
        }
    }
    crate::printer::print_parts(out, args.output_format(), &results)?;
    out.flush()?;
    if failed > 0 {
        return Err(VusError::Incomplete {
            failed,
            total: args.urls.len(),
        });
    }
    Ok(())
}
