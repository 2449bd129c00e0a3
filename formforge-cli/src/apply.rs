//! `formforge apply` - run an intent script against a document.

use anyhow::Result;
use formforge_layout::{apply_all, FieldRegistry, LayoutIntent};

pub fn run_apply(registry: &FieldRegistry, intents: &[LayoutIntent]) -> Result<FieldRegistry> {
    let next = apply_all(registry, intents);
    // Mutations preserve the invariants; a failure here is a bug, not bad input.
    next.check_invariants()?;
    Ok(next)
}
