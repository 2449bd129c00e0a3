//! `formforge new` - start a form by click-appending fields.

use anyhow::Result;
use formforge_layout::{CreateField, FieldRegistry, FieldVariant};

/// Append one field per variant, each in a new row at the bottom.
pub fn run_new(variants: &[FieldVariant]) -> Result<FieldRegistry> {
    let registry = variants
        .iter()
        .fold(FieldRegistry::new(), |registry, variant| {
            registry.apply(&CreateField::new_row(*variant))
        });
    tracing::debug!(fields = registry.len(), "created form");
    Ok(registry)
}
