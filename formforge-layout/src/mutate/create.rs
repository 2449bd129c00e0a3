//! CreateField mutation

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::Mutation;
use crate::ids::{ColumnId, FieldId, RowId};
use crate::registry::FieldRegistry;
use crate::types::{Field, FieldVariant};

/// Where a new field lands.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RowTarget {
    /// Open a new row at the bottom with this ID
    New(RowId),
    /// Append a column to an existing, live row
    Existing(RowId),
}

impl RowTarget {
    pub fn row_id(&self) -> &RowId {
        match self {
            Self::New(id) | Self::Existing(id) => id,
        }
    }
}

impl Default for RowTarget {
    fn default() -> Self {
        Self::New(RowId::new())
    }
}

/// Create a field of the given variant.
///
/// Identifiers are allocated when the intent is built, which keeps `apply`
/// deterministic. Used both for click-to-append (new row) and for dropping a
/// side-panel type onto a placed field (existing row).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateField {
    pub variant: FieldVariant,
    #[serde(default)]
    pub field_id: FieldId,
    #[serde(default)]
    pub row: RowTarget,
    #[serde(default)]
    pub column_id: ColumnId,
}

impl CreateField {
    /// Create a field, in `target_row` if given, else in a new row.
    /// `target_column` overrides the freshly minted column ID.
    pub fn new(
        variant: FieldVariant,
        target_row: Option<RowId>,
        target_column: Option<ColumnId>,
    ) -> Self {
        Self {
            variant,
            field_id: FieldId::new(),
            row: target_row.map_or_else(RowTarget::default, RowTarget::Existing),
            column_id: target_column.unwrap_or_default(),
        }
    }

    /// Create a field in a brand-new row at the bottom.
    pub fn new_row(variant: FieldVariant) -> Self {
        Self::new(variant, None, None)
    }

    /// Create a field as the last column of an existing row.
    pub fn in_row(variant: FieldVariant, row_id: impl Into<RowId>) -> Self {
        Self::new(variant, Some(row_id.into()), None)
    }

    pub fn with_column(mut self, column_id: impl Into<ColumnId>) -> Self {
        self.column_id = column_id.into();
        self
    }

    pub fn with_field_id(mut self, field_id: impl Into<FieldId>) -> Self {
        self.field_id = field_id.into();
        self
    }

    /// Use a specific ID for the new row. Only meaningful for new rows.
    pub fn with_new_row_id(mut self, row_id: impl Into<RowId>) -> Self {
        self.row = RowTarget::New(row_id.into());
        self
    }
}

impl Mutation for CreateField {
    fn op(&self) -> &'static str {
        "create field"
    }

    fn apply(&self, registry: &FieldRegistry) -> FieldRegistry {
        if registry.contains_field(&self.field_id) {
            debug!(field = %self.field_id, "create field: field ID already taken");
            return registry.clone();
        }
        if registry.contains_column(&self.column_id) {
            debug!(column = %self.column_id, "create field: column ID already taken");
            return registry.clone();
        }
        match &self.row {
            RowTarget::New(row_id) if registry.contains_row(row_id) => {
                debug!(row = %row_id, "create field: row ID already taken");
                return registry.clone();
            }
            RowTarget::Existing(row_id) if !registry.contains_row(row_id) => {
                debug!(row = %row_id, "create field: target row not found");
                return registry.clone();
            }
            _ => {}
        }

        let mut next = registry.clone();
        let row_id = self.row.row_id().clone();
        let field = Field::new(
            self.variant,
            self.field_id.clone(),
            row_id.clone(),
            self.column_id.clone(),
        );
        next.fields.insert(field.id.clone(), field);
        if matches!(self.row, RowTarget::New(_)) {
            next.row_ids.push(row_id);
        }
        next.column_ids.push(self.column_id.clone());
        next
    }
}
