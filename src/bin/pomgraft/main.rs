//! pomgraft CLI - plugin dependency management for effective models

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;

use cli::{Cli, Commands};
use pomgraft::util::config::{global_config_path, load_config, project_config_path, Config};
use pomgraft::util::diagnostic::emit;
use pomgraft::ModelBuildingError;

fn main() {
    let cli = Cli::parse();
    let color = !cli.no_color;

    if let Err(e) = run(cli) {
        match e.downcast_ref::<ModelBuildingError>() {
            Some(err) => emit(&err.to_diagnostic(), color),
            None => eprintln!("error: {:#}", e),
        }
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    // Load configuration (global + project)
    let cwd = std::env::current_dir()?;
    let (config, errors) =
        load_config(global_config_path().as_deref(), &project_config_path(&cwd));

    init_logging(&cli, &config);
    for e in &errors {
        tracing::warn!("{:#}; using defaults", e);
    }

    let color = !cli.no_color;
    match cli.command {
        Commands::Adapt(args) => commands::adapt::execute(args, &config),
        Commands::Check(args) => commands::check::execute(args, &config, color),
    }
}

fn init_logging(cli: &Cli, config: &Config) {
    // --verbose wins over the configured filter
    let filter = if cli.verbose {
        EnvFilter::new("pomgraft=debug")
    } else if let Some(directive) = &config.log.filter {
        EnvFilter::new(directive)
    } else {
        EnvFilter::new("pomgraft=info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_ansi(!cli.no_color)
        .with_writer(std::io::stderr)
        .init();
}
