//! Reading documents and scripts, writing JSON output.

use std::fs;
use std::io::{Read, Write};
use std::path::Path;

use anyhow::{Context, Result};
use formforge_layout::FieldRegistry;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use crate::cli::STDIN;

/// Read a form document from `path` (or `stdin` for `-`).
///
/// Blank input is an empty form, so a script can be applied to nothing.
pub fn read_registry(path: &Path, stdin: &mut dyn Read) -> Result<FieldRegistry> {
    let text = if path == Path::new(STDIN) {
        let mut buf = String::new();
        stdin
            .read_to_string(&mut buf)
            .context("failed to read document from stdin")?;
        buf
    } else {
        fs::read_to_string(path)
            .with_context(|| format!("failed to read document {}", path.display()))?
    };

    if text.trim().is_empty() {
        debug!("empty input, starting from an empty form");
        return Ok(FieldRegistry::new());
    }
    FieldRegistry::from_json(&text)
        .with_context(|| format!("invalid form document {}", path.display()))
}

/// Load a script file. `.yaml`/`.yml` files are YAML, anything else JSON.
pub fn load_script<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read script {}", path.display()))?;
    let is_yaml = matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("yaml" | "yml")
    );
    let items: Vec<T> = if is_yaml {
        serde_yaml_ng::from_str(&text)
            .with_context(|| format!("invalid YAML script {}", path.display()))?
    } else {
        serde_json::from_str(&text)
            .with_context(|| format!("invalid JSON script {}", path.display()))?
    };
    debug!(steps = items.len(), "loaded script {}", path.display());
    Ok(items)
}

pub fn write_json<T: Serialize + ?Sized>(
    out: &mut dyn Write,
    value: &T,
    pretty: bool,
) -> Result<()> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    writeln!(out, "{json}")?;
    Ok(())
}

/// Write the full document form of a registry.
pub fn write_registry(out: &mut dyn Write, registry: &FieldRegistry, pretty: bool) -> Result<()> {
    writeln!(out, "{}", registry.to_json(pretty)?)?;
    Ok(())
}
