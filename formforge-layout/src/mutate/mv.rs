//! MoveFieldAcrossRow mutation

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::Mutation;
use crate::ids::{FieldId, RowId};
use crate::registry::FieldRegistry;

/// Move a field into another row.
///
/// The field keeps its column ID, so its position in the destination row is
/// decided by where that ID sits in the global column list. The original row
/// is collapsed when it held fewer than 2 fields before the move.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveFieldAcrossRow {
    /// The field to move
    pub id: FieldId,
    /// The row it moves into
    pub destination: RowId,
}

impl MoveFieldAcrossRow {
    pub fn new(id: impl Into<FieldId>, destination: impl Into<RowId>) -> Self {
        Self {
            id: id.into(),
            destination: destination.into(),
        }
    }
}

impl Mutation for MoveFieldAcrossRow {
    fn op(&self) -> &'static str {
        "move field"
    }

    fn apply(&self, registry: &FieldRegistry) -> FieldRegistry {
        let Some(origin) = registry.row_of(&self.id) else {
            debug!(field = %self.id, "move field: field not found");
            return registry.clone();
        };
        if origin == &self.destination {
            debug!(field = %self.id, "move field: already in destination row");
            return registry.clone();
        }
        if !registry.contains_row(&self.destination) {
            debug!(row = %self.destination, "move field: destination row not found");
            return registry.clone();
        }

        let origin = origin.clone();
        let origin_count = registry.row_len(&origin);

        let mut next = registry.clone();
        if let Some(field) = next.fields.get_mut(&self.id) {
            field.row_id = self.destination.clone();
        }
        if origin_count < 2 {
            next.row_ids.retain(|r| r != &origin);
        }
        next
    }
}
