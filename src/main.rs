//! `vus` binary entry point.

use clap::Parser;
use env_logger::Env;
use vcs_url_separator::cli_args::{Cli, Commands};
use vcs_url_separator::commands::{is_broken_pipe, run_separate};
use vcs_url_separator::config::load_separate_args;

fn init_logging() {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .format_target(false)
        .init();
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Separate(args) => {
            let args = load_separate_args(&args)?;
            run_separate(&args, &mut std::io::stdout().lock())
        }
    };
    match result {
        Err(e) if is_broken_pipe(&e) => Ok(()),
        other => other.map_err(Into::into),
    }
}
