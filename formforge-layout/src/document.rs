//! Import/export of the registry.
//!
//! The document is a mapping of field ID to field record, in insertion order,
//! plus the row and column order lists. Importing validates the invariants,
//! so a hand-edited document can never produce an inconsistent registry.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::Result;
use crate::ids::{ColumnId, FieldId, RowId};
use crate::registry::FieldRegistry;
use crate::types::Field;

/// Serializable snapshot of a registry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormDocument {
    #[serde(default)]
    pub fields: IndexMap<FieldId, Field>,
    #[serde(default)]
    pub row_ids: Vec<RowId>,
    #[serde(default)]
    pub column_ids: Vec<ColumnId>,
}

/// One row of the grouped export, as consumed by preview and code generation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RowExport {
    pub id: RowId,
    pub fields: Vec<Field>,
}

impl FieldRegistry {
    /// Snapshot the registry as a document.
    pub fn to_document(&self) -> FormDocument {
        FormDocument {
            fields: self.fields.clone(),
            row_ids: self.row_ids.clone(),
            column_ids: self.column_ids.clone(),
        }
    }

    /// Build a registry from a document, rejecting documents that break the
    /// layout invariants.
    pub fn from_document(doc: FormDocument) -> Result<Self> {
        let registry = Self {
            fields: doc.fields,
            row_ids: doc.row_ids,
            column_ids: doc.column_ids,
        };
        registry.check_invariants()?;
        debug!(
            fields = registry.len(),
            rows = registry.rows_of().len(),
            "imported form document"
        );
        Ok(registry)
    }

    /// Parse and validate a JSON document.
    pub fn from_json(json: &str) -> Result<Self> {
        let doc: FormDocument = serde_json::from_str(json)?;
        Self::from_document(doc)
    }

    /// Serialize as a JSON document.
    pub fn to_json(&self, pretty: bool) -> Result<String> {
        let doc = self.to_document();
        let json = if pretty {
            serde_json::to_string_pretty(&doc)?
        } else {
            serde_json::to_string(&doc)?
        };
        Ok(json)
    }

    /// The field records in insertion order.
    pub fn fields_json(&self) -> serde_json::Value {
        serde_json::Value::Array(
            self.fields
                .values()
                .filter_map(|f| serde_json::to_value(f).ok())
                .collect(),
        )
    }

    /// Owned per-row grouping: rows in row order, fields in column order.
    pub fn row_export(&self) -> Vec<RowExport> {
        self.rows()
            .into_iter()
            .map(|row| RowExport {
                id: row.id.clone(),
                fields: row.fields.into_iter().cloned().collect(),
            })
            .collect()
    }

    /// Initial form values keyed by field ID, in insertion order.
    pub fn default_values(&self) -> IndexMap<String, String> {
        self.fields
            .values()
            .map(|f| (f.id.to_string(), f.value.clone()))
            .collect()
    }
}
