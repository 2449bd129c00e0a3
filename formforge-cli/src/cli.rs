//! CLI definition for the formforge command-line interface.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use formforge_drag::PreviewPolicy;
use formforge_layout::FieldVariant;

/// Reads from stdin when passed as a path.
pub const STDIN: &str = "-";

/// Output shape of the `export` command.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// Full document: fields mapping plus row and column order
    Document,
    /// Array of field records
    Fields,
    /// Rows in order, each with its fields in column order
    Rows,
    /// Field name to initial value, for seeding a preview form
    Defaults,
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExportFormat::Document => write!(f, "document"),
            ExportFormat::Fields => write!(f, "fields"),
            ExportFormat::Rows => write!(f, "rows"),
            ExportFormat::Defaults => write!(f, "defaults"),
        }
    }
}

/// Formforge - drag-and-drop form layout engine
#[derive(Parser, Debug)]
#[command(name = "formforge")]
#[command(version)]
#[command(about = "Build and edit form layouts from intent and drag-gesture scripts")]
pub struct Cli {
    /// Enable debug output to stderr
    #[arg(short, long, global = true)]
    pub debug: bool,

    /// Configuration file (default: formforge.{toml,yaml,yml,json} in the working directory)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start a form, appending one field per variant, each in its own row
    New {
        /// Field variants: single-text, number, dropdown
        variants: Vec<FieldVariant>,
    },
    /// Apply a JSON or YAML script of layout intents to a document
    Apply {
        /// Form document, or - for stdin
        #[arg(short, long, default_value = STDIN)]
        input: PathBuf,
        /// Intent script
        #[arg(long)]
        intents: PathBuf,
    },
    /// Replay a JSON or YAML script of drag events against a document
    Drag {
        /// Form document, or - for stdin
        #[arg(short, long, default_value = STDIN)]
        input: PathBuf,
        /// Drag event script
        #[arg(long)]
        events: PathBuf,
        /// Preview policy (default from configuration)
        #[arg(long)]
        policy: Option<PreviewPolicy>,
    },
    /// Print a document in one of the export shapes
    Export {
        /// Form document, or - for stdin
        #[arg(short, long, default_value = STDIN)]
        input: PathBuf,
        #[arg(short, long, value_enum, default_value_t = ExportFormat::Document)]
        format: ExportFormat,
    },
    /// List the field types the side panel offers
    Catalog,
}
