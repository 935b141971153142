use anyhow::Result;
use clap::Parser;

use munidash::cli::{Cli, Commands};
use munidash::commands::{check, render};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    match &cli.command {
        Commands::Render(args) => render::run(&cli, args),
        Commands::Check(args) => check::run(&cli, args),
    }
}
