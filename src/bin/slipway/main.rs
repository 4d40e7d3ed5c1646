//! Slipway CLI - build-target rules for game-engine projects

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;

use cli::{Cli, Commands};

fn main() {
    if let Err(e) = run() {
        eprintln!("error: {:#}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    // Parse CLI
    let cli = Cli::parse();

    // Set up logging
    let filter = if cli.verbose {
        EnvFilter::new("slipway=debug")
    } else {
        EnvFilter::new("slipway=info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .init();

    let color = !cli.no_color;

    // Execute command
    match cli.command {
        Commands::Init(args) => commands::init::execute(args),
        Commands::List(args) => commands::list::execute(args),
        Commands::Check(args) => commands::check::execute(args, color),
        Commands::Evaluate(args) => commands::evaluate::execute(args, color),
        Commands::Completions(args) => commands::completions::execute(args),
    }
}
