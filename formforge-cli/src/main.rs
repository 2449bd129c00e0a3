//! Formforge CLI entry point.
//!
//! Exit codes:
//! - 0: Success
//! - 1: Error

use std::io;

use clap::Parser;
use formforge::Cli;
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();

    let config = match formforge_config::load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    // Initialize tracing with appropriate level
    let filter = if cli.debug {
        EnvFilter::new("formforge=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(false)
        .with_writer(io::stderr)
        .init();

    let result = formforge::run(
        &cli,
        &config,
        &mut io::stdin().lock(),
        &mut io::stdout().lock(),
    );
    std::process::exit(result_to_exit(result));
}

/// Convert a command result to an exit code.
fn result_to_exit(result: anyhow::Result<()>) -> i32 {
    match result {
        Ok(()) => 0,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            1
        }
    }
}
