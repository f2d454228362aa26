//! Configuration loading helpers.
//!
//! Wraps `ortho_config` so the `separate` sub-command merges defaults, the
//! `[cmds.separate]` section of `.vus.toml`, `VUSCMDS_SEPARATE_*` environment
//! variables and command-line flags, in increasing order of precedence.

use log::debug;
use ortho_config::load_and_merge_subcommand_for;

use crate::cli_args::SeparateArgs;
use crate::error::VusError;

/// Merge configuration sources into the command-line arguments.
///
/// # Errors
///
/// Returns [`VusError::Config`] when configuration gathering fails, and
/// [`VusError::MissingUrls`] when no source supplies a URL.
#[allow(
    clippy::result_large_err,
    reason = "configuration loading errors can be verbose"
)]
pub fn load_separate_args(cli_args: &SeparateArgs) -> Result<SeparateArgs, VusError> {
    let merged = load_and_merge_subcommand_for::<SeparateArgs>(cli_args)?;
    debug!(
        "merged configuration: {} URL(s), format {:?}",
        merged.urls.len(),
        merged.output_format()
    );
    if merged.urls.is_empty() {
        return Err(VusError::MissingUrls);
    }
    Ok(merged)
}
