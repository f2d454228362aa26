//! Rendering of separated URLs.
//!
//! Output is written to any [`std::io::Write`] so formatting can be unit
//! tested without capturing stdout.

use std::io::Write;

use crate::cli_args::OutputFormat;
use crate::error::VusError;
use crate::separator::UrlParts;

/// Placeholder for empty fields in text output.
const NONE: &str = "-";

fn or_none(value: &str) -> &str {
    if value.is_empty() { NONE } else { value }
}

/// Write one labelled block describing `parts`.
///
/// # Errors
///
/// Returns any error raised by `out`.
pub fn write_parts<W: Write>(out: &mut W, parts: &UrlParts) -> std::io::Result<()> {
    writeln!(out, "provider:       {}", parts.provider)?;
    writeln!(out, "organization:   {}", parts.organization)?;
    writeln!(out, "project:        {}", parts.project)?;
    writeln!(
        out,
        "subdirectories: {}",
        or_none(&parts.sub_directories.join(", "))
    )?;
    writeln!(out, "file:           {}", or_none(&parts.file_path))
}

/// Write every result in the requested format.
///
/// Text blocks are separated by a blank line; JSON is a pretty-printed array.
///
/// # Errors
///
/// Returns [`VusError::Io`] when writing fails or [`VusError::Json`] when
/// serialisation fails.
pub fn print_parts<W: Write>(
    out: &mut W,
    format: OutputFormat,
    results: &[UrlParts],
) -> Result<(), VusError> {
    match format {
        OutputFormat::Text => {
            for (i, parts) in results.iter().enumerate() {
                if i > 0 {
                    writeln!(out)?;
                }
                write_parts(out, parts)?;
            }
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(results)?;
            writeln!(out, "{json}")?;
        }
    }
    Ok(())
}
