//! Command-line argument structures.
//!
//! Isolates clap derivations so lint expectations remain scoped, keeping
//! `main.rs` focused on runtime logic.

use clap::{Parser, Subcommand, ValueEnum};
use ortho_config::OrthoConfig;
use serde::{Deserialize, Serialize};

/// Top-level `vus` command.
#[derive(Parser, Debug)]
#[command(
    name = "vus",
    about = "VCS URL separator - split repository URLs into their parts",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Separate one or more repository URLs
    Separate(SeparateArgs),
}

/// Rendering used for separated URLs.
#[derive(ValueEnum, Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One labelled block per URL
    #[default]
    Text,
    /// A JSON array of objects
    Json,
}

/// Parameters accepted by the `separate` sub-command.
#[derive(Parser, Deserialize, Serialize, Debug, OrthoConfig, Clone, Default)]
#[command(name = "separate")]
#[ortho_config(prefix = "VUS")]
pub struct SeparateArgs {
    /// Repository URLs, e.g. `https://github.com/owner/repo/src/lib.rs`
    #[arg(value_name = "URL", required = true, num_args = 1..)]
    // Clap enforces at least one URL; `default` lets configuration merging
    // and `SeparateArgs::default()` leave the list empty.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub urls: Vec<String>,
    /// Output format
    #[arg(short = 'f', long, value_enum, value_name = "FORMAT")]
    pub format: Option<OutputFormat>,
}

impl SeparateArgs {
    /// Output format after configuration merging, defaulting to text.
    #[must_use]
    pub fn output_format(&self) -> OutputFormat {
        self.format.unwrap_or_default()
    }
}
