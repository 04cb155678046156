//! CLI definitions using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// pomgraft - manage plugin dependency versions from dependencyManagement
#[derive(Parser)]
#[command(name = "pomgraft")]
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
    /// Fill in plugin dependency versions and print the adapted model
    Adapt(AdaptArgs),

    /// Report plugin dependencies that no management entry covers
    Check(CheckArgs),
}

/// Options shared by every command that reads a model.
#[derive(Args)]
pub struct ModelArgs {
    /// Model document (JSON)
    pub model: PathBuf,

    /// Repository root to resolve import poms from (repeatable)
    #[arg(long = "repo", value_name = "DIR")]
    pub repositories: Vec<PathBuf>,

    /// Read the model raw: only its own dependencyManagement is consulted
    #[arg(long)]
    pub raw: bool,
}

#[derive(Args)]
pub struct AdaptArgs {
    #[command(flatten)]
    pub model: ModelArgs,

    /// Write the adapted model here instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

#[derive(Args)]
pub struct CheckArgs {
    #[command(flatten)]
    pub model: ModelArgs,
}
