//! FieldRegistry: the single source of truth for the form layout.
//!
//! Holds the field records in insertion order plus two ordered lists: the
//! live row identifiers (top to bottom) and one global list of column
//! identifiers. A row's left-to-right order is the subsequence of the global
//! column list owned by that row's fields; `columns_of_row` is the only place
//! that filter is computed.
//!
//! The registry is a plain value. Every mutation goes through
//! [`FieldRegistry::apply`] and returns a new registry, so callers thread
//! versions explicitly instead of sharing one mutable instance.

use std::collections::{HashMap, HashSet};

use indexmap::IndexMap;

use crate::error::{LayoutError, Result};
use crate::ids::{ColumnId, FieldId, RowId};
use crate::types::Field;

/// One row of the layout with its fields in display order.
#[derive(Debug, Clone, PartialEq)]
pub struct FormRow<'a> {
    pub id: &'a RowId,
    pub fields: Vec<&'a Field>,
}

#[derive(Debug, Clone, Default)]
pub struct FieldRegistry {
    pub(crate) fields: IndexMap<FieldId, Field>,
    pub(crate) row_ids: Vec<RowId>,
    pub(crate) column_ids: Vec<ColumnId>,
}

impl FieldRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    // --- Read accessors ---

    /// All fields in insertion order (not layout order).
    pub fn fields_of(&self) -> impl ExactSizeIterator<Item = &Field> + '_ {
        self.fields.values()
    }

    /// Live row identifiers, top to bottom.
    pub fn rows_of(&self) -> &[RowId] {
        &self.row_ids
    }

    /// The global column order list.
    pub fn column_order(&self) -> &[ColumnId] {
        &self.column_ids
    }

    /// Fields of one row, left to right.
    ///
    /// Computed by filtering the global column list down to the columns owned
    /// by the row's fields. Unknown rows yield an empty list.
    pub fn columns_of_row(&self, row_id: &RowId) -> Vec<&Field> {
        let by_column: HashMap<&ColumnId, &Field> = self
            .fields
            .values()
            .filter(|f| &f.row_id == row_id)
            .map(|f| (&f.column_id, f))
            .collect();

        self.column_ids
            .iter()
            .filter_map(|column| by_column.get(column).copied())
            .collect()
    }

    /// Rows in row order, each with its fields in column order.
    pub fn rows(&self) -> Vec<FormRow<'_>> {
        self.row_ids
            .iter()
            .map(|id| FormRow {
                id,
                fields: self.columns_of_row(id),
            })
            .collect()
    }

    /// Look up a field by ID.
    pub fn field(&self, id: &FieldId) -> Option<&Field> {
        self.fields.get(id)
    }

    /// The row a field currently belongs to.
    pub fn row_of(&self, id: &FieldId) -> Option<&RowId> {
        self.fields.get(id).map(|f| &f.row_id)
    }

    /// Number of fields in a row.
    pub fn row_len(&self, row_id: &RowId) -> usize {
        self.fields.values().filter(|f| &f.row_id == row_id).count()
    }

    /// Whether the row is live (listed in the row order).
    pub fn contains_row(&self, row_id: &RowId) -> bool {
        self.row_ids.contains(row_id)
    }

    /// Whether a field with this id is placed.
    pub fn contains_field(&self, id: &FieldId) -> bool {
        self.fields.contains_key(id)
    }

    /// Whether the column is listed in the global column order.
    pub fn contains_column(&self, column_id: &ColumnId) -> bool {
        self.column_ids.contains(column_id)
    }

    /// Number of placed fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the form has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    // --- Invariants ---

    /// Verify the layout invariants.
    ///
    /// - every field's row is live and every live row holds a field
    /// - row and column lists contain no duplicates
    /// - every field's column appears in the column list, and every listed
    ///   column belongs to a field
    /// - each field is keyed by its own ID
    pub fn check_invariants(&self) -> Result<()> {
        let mut rows = HashSet::new();
        for row in &self.row_ids {
            if !rows.insert(row) {
                return Err(LayoutError::DuplicateRow {
                    row: row.to_string(),
                });
            }
        }

        let mut owned_columns = HashSet::new();
        let mut populated_rows = HashSet::new();
        for (key, field) in &self.fields {
            if key != &field.id {
                return Err(LayoutError::FieldIdMismatch {
                    key: key.to_string(),
                    id: field.id.to_string(),
                });
            }
            if !rows.contains(&field.row_id) {
                return Err(LayoutError::UnknownRow {
                    field: field.id.to_string(),
                    row: field.row_id.to_string(),
                });
            }
            if !owned_columns.insert(&field.column_id) {
                return Err(LayoutError::DuplicateColumn {
                    column: field.column_id.to_string(),
                });
            }
            populated_rows.insert(&field.row_id);
        }

        if let Some(row) = self.row_ids.iter().find(|r| !populated_rows.contains(r)) {
            return Err(LayoutError::EmptyRow {
                row: row.to_string(),
            });
        }

        let mut listed = HashSet::new();
        for column in &self.column_ids {
            if !listed.insert(column) {
                return Err(LayoutError::DuplicateColumn {
                    column: column.to_string(),
                });
            }
            if !owned_columns.contains(column) {
                return Err(LayoutError::UnknownColumn {
                    column: column.to_string(),
                });
            }
        }

        if let Some(field) = self
            .fields
            .values()
            .find(|f| !listed.contains(&f.column_id))
        {
            return Err(LayoutError::ColumnNotListed {
                field: field.id.to_string(),
                column: field.column_id.to_string(),
            });
        }

        Ok(())
    }
}

/// Equality is order-sensitive for fields as well as for both lists.
impl PartialEq for FieldRegistry {
    fn eq(&self, other: &Self) -> bool {
        self.row_ids == other.row_ids
            && self.column_ids == other.column_ids
            && self.fields.len() == other.fields.len()
            && self.fields.iter().eq(other.fields.iter())
    }
}
