//! CLI definitions using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

/// Slipway - build-target rules for game-engine projects
#[derive(Parser)]
#[command(name = "slipway")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create a Slipway.toml in an existing directory
    Init(InitArgs),

    /// List the declared build targets
    List(ListArgs),

    /// Validate the project descriptor
    Check(CheckArgs),

    /// Resolve targets and emit the orchestrator handoff as JSON
    Evaluate(EvaluateArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(Args)]
pub struct InitArgs {
    /// Project name (defaults to directory name)
    #[arg(long)]
    pub name: Option<String>,

    /// Directory to initialize (defaults to current directory)
    pub path: Option<PathBuf>,
}

#[derive(Args)]
pub struct ListArgs {
    /// Show module lists in addition to target names
    #[arg(long)]
    pub modules: bool,
}

#[derive(Args)]
pub struct CheckArgs {}

#[derive(Args)]
pub struct EvaluateArgs {
    /// Evaluate only this target (defaults to all targets)
    #[arg(long)]
    pub target: Option<String>,

    /// Platform to evaluate for (win64, linux, mac; defaults to host)
    #[arg(long)]
    pub platform: Option<String>,

    /// Build configuration (debug, development, shipping)
    #[arg(long)]
    pub configuration: Option<String>,

    /// CPU architecture to record in the context
    #[arg(long)]
    pub architecture: Option<String>,

    /// Pretty-print the JSON output
    #[arg(long)]
    pub pretty: bool,
}

#[derive(Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: Shell,
}
