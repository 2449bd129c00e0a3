//! `formforge export` - print a document in one of the export shapes.

use std::io::Write;

use anyhow::Result;
use formforge_layout::FieldRegistry;

use crate::cli::ExportFormat;
use crate::io::{write_json, write_registry};

pub fn run_export(
    out: &mut dyn Write,
    registry: &FieldRegistry,
    format: ExportFormat,
    pretty: bool,
) -> Result<()> {
    match format {
        ExportFormat::Document => write_registry(out, registry, pretty),
        ExportFormat::Fields => write_json(out, &registry.fields_json(), pretty),
        ExportFormat::Rows => write_json(out, &registry.row_export(), pretty),
        ExportFormat::Defaults => write_json(out, &registry.default_values(), pretty),
    }
}
