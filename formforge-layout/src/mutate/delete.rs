//! DeleteField and DeleteRow mutations

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::Mutation;
use crate::ids::{FieldId, RowId};
use crate::registry::FieldRegistry;

/// Delete one field.
///
/// The field's row is dropped from the row order when the field was its only
/// member (fewer than 2 fields before deletion). A row left with one field
/// stays.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteField {
    pub id: FieldId,
}

impl DeleteField {
    pub fn new(id: impl Into<FieldId>) -> Self {
        Self { id: id.into() }
    }
}

impl Mutation for DeleteField {
    fn op(&self) -> &'static str {
        "delete field"
    }

    fn apply(&self, registry: &FieldRegistry) -> FieldRegistry {
        let Some(field) = registry.field(&self.id) else {
            debug!(field = %self.id, "delete field: field not found");
            return registry.clone();
        };
        let row_count = registry.row_len(&field.row_id);

        let mut next = registry.clone();
        let Some(removed) = next.fields.shift_remove(&self.id) else {
            return registry.clone();
        };
        next.column_ids.retain(|c| c != &removed.column_id);
        if row_count < 2 {
            next.row_ids.retain(|r| r != &removed.row_id);
        }
        next
    }
}

/// Delete a row and every field in it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteRow {
    pub id: RowId,
}

impl DeleteRow {
    pub fn new(id: impl Into<RowId>) -> Self {
        Self { id: id.into() }
    }
}

impl Mutation for DeleteRow {
    fn op(&self) -> &'static str {
        "delete row"
    }

    fn apply(&self, registry: &FieldRegistry) -> FieldRegistry {
        if !registry.contains_row(&self.id) {
            debug!(row = %self.id, "delete row: row not found");
            return registry.clone();
        }

        let mut next = registry.clone();
        let removed_columns: Vec<_> = next
            .fields
            .values()
            .filter(|f| f.row_id == self.id)
            .map(|f| f.column_id.clone())
            .collect();
        next.fields.retain(|_, f| f.row_id != self.id);
        next.column_ids.retain(|c| !removed_columns.contains(c));
        next.row_ids.retain(|r| r != &self.id);
        next
    }
}
