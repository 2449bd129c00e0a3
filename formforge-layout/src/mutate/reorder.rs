//! ReorderRows and ReorderColumnsWithinRow mutations
//!
//! Both use array-move semantics: the source is removed and reinserted at the
//! index the target held before the move. Array-move undoes itself only for
//! adjacent elements: moving `a` onto `c` in `[a, b, c]` gives `[b, c, a]`,
//! and moving `c` back onto `a` then gives `[b, a, c]`.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{array_move, Mutation};
use crate::ids::{FieldId, RowId};
use crate::registry::FieldRegistry;

/// Move a row to the position currently held by another row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReorderRows {
    pub source: RowId,
    pub target: RowId,
}

impl ReorderRows {
    pub fn new(source: impl Into<RowId>, target: impl Into<RowId>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
        }
    }
}

impl Mutation for ReorderRows {
    fn op(&self) -> &'static str {
        "reorder rows"
    }

    fn apply(&self, registry: &FieldRegistry) -> FieldRegistry {
        let rows = registry.rows_of();
        let from = rows.iter().position(|r| r == &self.source);
        let to = rows.iter().position(|r| r == &self.target);
        let (Some(from), Some(to)) = (from, to) else {
            debug!(source = %self.source, target = %self.target, "reorder rows: row not found");
            return registry.clone();
        };

        let mut next = registry.clone();
        array_move(&mut next.row_ids, from, to);
        next
    }
}

/// Move a field's column to the position of another field's column in the
/// same row.
///
/// Operates on the global column list; columns of other rows keep their
/// relative order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReorderColumnsWithinRow {
    pub source: FieldId,
    pub target: FieldId,
}

impl ReorderColumnsWithinRow {
    pub fn new(source: impl Into<FieldId>, target: impl Into<FieldId>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
        }
    }
}

impl Mutation for ReorderColumnsWithinRow {
    fn op(&self) -> &'static str {
        "reorder columns"
    }

    fn apply(&self, registry: &FieldRegistry) -> FieldRegistry {
        let (Some(source), Some(target)) =
            (registry.field(&self.source), registry.field(&self.target))
        else {
            debug!(
                source = %self.source,
                target = %self.target,
                "reorder columns: field not found"
            );
            return registry.clone();
        };
        if source.row_id != target.row_id {
            debug!(
                source = %self.source,
                target = %self.target,
                "reorder columns: fields in different rows"
            );
            return registry.clone();
        }

        let columns = registry.column_order();
        let from = columns.iter().position(|c| c == &source.column_id);
        let to = columns.iter().position(|c| c == &target.column_id);
        let (Some(from), Some(to)) = (from, to) else {
            return registry.clone();
        };

        let mut next = registry.clone();
        array_move(&mut next.column_ids, from, to);
        next
    }
}
