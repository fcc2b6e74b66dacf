//! Personnel CLI - application entry point
//!
//! CLI-based entry point that dispatches to the commands.

use std::io;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use common::AppConfig;
use personnel_cli::{commands, Cli, Commands};

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Load configuration
    let config = AppConfig::from_env().with_date_format(cli.date_format.clone());

    // Initialize tracing (verbose mode sets debug level)
    init_tracing(cli.verbose, &config.log_level);
    tracing::debug!(?config, "Configuration loaded");

    let stdout = io::stdout();
    let mut out = stdout.lock();

    // Execute command
    let result = config.validate().and_then(|()| match cli.command {
        Commands::Check(args) => commands::check::execute(args, &config, &mut out),
        Commands::Constraints => commands::constraints::execute(&mut out),
    });

    // Handle errors
    if let Err(e) = result {
        tracing::error!(code = e.code(), "Command failed: {}", e);
        std::process::exit(1);
    }
}

/// Initialize tracing subscriber
fn init_tracing(verbose: bool, log_level: &str) {
    let filter = if verbose { "debug" } else { log_level };

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .with(tracing_subscriber::EnvFilter::new(filter))
        .init();
}
