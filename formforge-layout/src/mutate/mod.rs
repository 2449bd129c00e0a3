//! Layout mutations
//!
//! Each mutation is a struct whose fields are its parameters. Applying one
//! never fails: an intent naming a field or row that no longer exists, or
//! carrying an identifier that is already taken, returns the input registry
//! unchanged. The presentation layer may race a stale reference against a
//! deletion that just happened, so a miss is expected rather than a fault.

mod create;
mod delete;
mod mv;
mod reorder;
mod update;

pub use create::{CreateField, RowTarget};
pub use delete::{DeleteField, DeleteRow};
pub use mv::MoveFieldAcrossRow;
pub use reorder::{ReorderColumnsWithinRow, ReorderRows};
pub use update::UpdateFieldSettings;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::registry::FieldRegistry;

/// A pure transformation of a registry into its next version.
pub trait Mutation {
    /// Canonical op string, e.g. "create field"
    fn op(&self) -> &'static str;

    /// Compute the next registry. Must preserve the registry invariants.
    fn apply(&self, registry: &FieldRegistry) -> FieldRegistry;
}

impl FieldRegistry {
    /// Apply a mutation, returning the new registry.
    pub fn apply(&self, mutation: &impl Mutation) -> FieldRegistry {
        mutation.apply(self)
    }
}

/// Any layout mutation, in serializable form.
///
/// Intent scripts are JSON arrays of these, tagged by `op`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "kebab-case")]
pub enum LayoutIntent {
    CreateField(CreateField),
    DeleteField(DeleteField),
    DeleteRow(DeleteRow),
    MoveFieldAcrossRow(MoveFieldAcrossRow),
    ReorderRows(ReorderRows),
    ReorderColumnsWithinRow(ReorderColumnsWithinRow),
    UpdateFieldSettings(UpdateFieldSettings),
}

impl Mutation for LayoutIntent {
    fn op(&self) -> &'static str {
        match self {
            Self::CreateField(m) => m.op(),
            Self::DeleteField(m) => m.op(),
            Self::DeleteRow(m) => m.op(),
            Self::MoveFieldAcrossRow(m) => m.op(),
            Self::ReorderRows(m) => m.op(),
            Self::ReorderColumnsWithinRow(m) => m.op(),
            Self::UpdateFieldSettings(m) => m.op(),
        }
    }

    fn apply(&self, registry: &FieldRegistry) -> FieldRegistry {
        match self {
            Self::CreateField(m) => m.apply(registry),
            Self::DeleteField(m) => m.apply(registry),
            Self::DeleteRow(m) => m.apply(registry),
            Self::MoveFieldAcrossRow(m) => m.apply(registry),
            Self::ReorderRows(m) => m.apply(registry),
            Self::ReorderColumnsWithinRow(m) => m.apply(registry),
            Self::UpdateFieldSettings(m) => m.apply(registry),
        }
    }
}

macro_rules! impl_from_mutation {
    ($($variant:ident),* $(,)?) => {
        $(
            impl From<$variant> for LayoutIntent {
                fn from(m: $variant) -> Self {
                    Self::$variant(m)
                }
            }
        )*
    };
}

impl_from_mutation!(
    CreateField,
    DeleteField,
    DeleteRow,
    MoveFieldAcrossRow,
    ReorderRows,
    ReorderColumnsWithinRow,
    UpdateFieldSettings,
);

/// Apply one intent to a registry.
pub fn apply_intent(registry: &FieldRegistry, intent: &LayoutIntent) -> FieldRegistry {
    let next = intent.apply(registry);
    debug!(op = intent.op(), fields = next.len(), rows = next.rows_of().len(), "applied intent");
    next
}

/// Apply a sequence of intents in order.
pub fn apply_all<'a>(
    registry: &FieldRegistry,
    intents: impl IntoIterator<Item = &'a LayoutIntent>,
) -> FieldRegistry {
    intents
        .into_iter()
        .fold(registry.clone(), |acc, intent| apply_intent(&acc, intent))
}

/// Move the element at `from` to index `to`, shifting the neighbours.
///
/// Same semantics as a remove-then-insert: `to` is the target's index in the
/// list before the move.
pub(crate) fn array_move<T>(items: &mut Vec<T>, from: usize, to: usize) {
    if from == to || from >= items.len() || to >= items.len() {
        return;
    }
    let item = items.remove(from);
    items.insert(to, item);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_array_move_forward_and_back() {
        let mut v = vec!['a', 'b', 'c', 'd'];
        array_move(&mut v, 0, 2);
        assert_eq!(v, vec!['b', 'c', 'a', 'd']);
        array_move(&mut v, 3, 0);
        assert_eq!(v, vec!['d', 'b', 'c', 'a']);
    }

    #[test]
    fn test_array_move_out_of_range_is_ignored() {
        let mut v = vec![1, 2, 3];
        array_move(&mut v, 0, 3);
        array_move(&mut v, 5, 0);
        assert_eq!(v, vec![1, 2, 3]);
    }

    #[test]
    fn test_intent_json_tag() {
        let intent: LayoutIntent = serde_json::from_str(
            r#"{"op": "reorder-rows", "source": "r1", "target": "r2"}"#,
        )
        .unwrap();
        assert_eq!(intent.op(), "reorder rows");
    }
}
