//! Formforge command-line driver.
//!
//! Commands:
//! - `formforge new [VARIANT...]`: start a form with one field per variant
//! - `formforge apply --intents FILE`: apply a layout intent script
//! - `formforge drag --events FILE`: replay a drag-gesture script
//! - `formforge export --format FORMAT`: print a document as fields, rows or defaults
//! - `formforge catalog`: list the side-panel field types
//!
//! Documents are read from `--input` (stdin by default) and written to stdout.

use std::io::{Read, Write};

use anyhow::Result;
use formforge_config::BuilderConfig;

pub mod apply;
pub mod catalog;
mod cli;
pub mod drag;
pub mod export;
pub mod io;
pub mod new;

pub use cli::{Cli, Commands, ExportFormat, STDIN};

/// Run one parsed command.
pub fn run(
    cli: &Cli,
    config: &BuilderConfig,
    stdin: &mut dyn Read,
    out: &mut dyn Write,
) -> Result<()> {
    let pretty = config.export.pretty;
    match &cli.command {
        Commands::New { variants } => {
            let registry = new::run_new(variants)?;
            io::write_registry(out, &registry, pretty)
        }
        Commands::Apply { input, intents } => {
            let registry = io::read_registry(input, stdin)?;
            let intents = io::load_script(intents)?;
            let registry = apply::run_apply(&registry, &intents)?;
            io::write_registry(out, &registry, pretty)
        }
        Commands::Drag {
            input,
            events,
            policy,
        } => {
            let registry = io::read_registry(input, stdin)?;
            let events = io::load_script(events)?;
            let policy = policy.unwrap_or(config.drag.preview_policy);
            let activation = config.drag.activation();
            let registry = drag::run_drag(registry, &events, policy, activation)?;
            io::write_registry(out, &registry, pretty)
        }
        Commands::Export { input, format } => {
            let registry = io::read_registry(input, stdin)?;
            export::run_export(out, &registry, *format, pretty)
        }
        Commands::Catalog => catalog::run_catalog(out, pretty),
    }
}
