//! Drag metadata tags.
//!
//! Host widgets attach a small `{type, id}` record to every draggable and
//! droppable element. [`DragTag::classify`] turns that record into a typed
//! tag; records with an unknown type or a missing id classify to `None`.

use formforge_layout::{FieldId, FieldVariant, RowId};
use serde::{Deserialize, Serialize};
use tracing::trace;

/// Type string of a side-panel field type.
pub const SIDE_FIELD: &str = "sideField";
/// Type string of a layout row.
pub const ROW: &str = "row";
/// Type string of a placed field.
pub const FIELD: &str = "field";
/// Type string of the empty drop zone below the last row.
pub const DROP_FIELD: &str = "dropField";
/// ID the empty drop zone is registered under.
pub const DROP_ZONE_ID: &str = "drop";

/// Raw metadata attached to a draggable or droppable element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DragData {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

impl DragData {
    pub fn new(kind: impl Into<String>, id: Option<String>) -> Self {
        Self {
            kind: kind.into(),
            id,
        }
    }

    pub fn side_field(variant: FieldVariant) -> Self {
        Self::new(SIDE_FIELD, Some(variant.as_str().to_string()))
    }

    pub fn row(id: &RowId) -> Self {
        Self::new(ROW, Some(id.to_string()))
    }

    pub fn field(id: &FieldId) -> Self {
        Self::new(FIELD, Some(id.to_string()))
    }

    pub fn drop_zone() -> Self {
        Self::new(DROP_FIELD, Some(DROP_ZONE_ID.to_string()))
    }
}

/// What a drag source or drop target is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DragTag {
    /// A field type in the side panel
    SideField(FieldVariant),
    /// A whole row, dragged by its handle
    Row(RowId),
    /// A field already placed in the layout
    Field(FieldId),
    /// The empty drop zone sentinel
    DropZone,
}

impl DragTag {
    /// Classify raw metadata. Unknown or incomplete records yield `None`.
    pub fn classify(data: &DragData) -> Option<DragTag> {
        let id = data.id.as_deref();
        let tag = match (data.kind.as_str(), id) {
            (SIDE_FIELD, Some(id)) => FieldVariant::all()
                .into_iter()
                .find(|variant| variant.as_str() == id)
                .map(DragTag::SideField),
            (ROW, Some(id)) => Some(DragTag::Row(RowId::from(id))),
            (FIELD, Some(id)) => Some(DragTag::Field(FieldId::from(id))),
            (DROP_FIELD, _) => Some(DragTag::DropZone),
            _ => None,
        };
        if tag.is_none() {
            trace!(kind = %data.kind, id = ?data.id, "unrecognised drag metadata");
        }
        tag
    }

    /// Whether this tag may start a drag.
    pub fn is_source(&self) -> bool {
        match self {
            DragTag::SideField(_) | DragTag::Row(_) | DragTag::Field(_) => true,
            DragTag::DropZone => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_known_tags() {
        assert_eq!(
            DragTag::classify(&DragData::side_field(FieldVariant::Number)),
            Some(DragTag::SideField(FieldVariant::Number))
        );
        assert_eq!(
            DragTag::classify(&DragData::new(ROW, Some("r1".into()))),
            Some(DragTag::Row(RowId::from("r1")))
        );
        assert_eq!(
            DragTag::classify(&DragData::new(FIELD, Some("name_a".into()))),
            Some(DragTag::Field(FieldId::from("name_a")))
        );
        assert_eq!(
            DragTag::classify(&DragData::drop_zone()),
            Some(DragTag::DropZone)
        );
    }

    #[test]
    fn test_classify_rejects_unknown_or_incomplete() {
        assert_eq!(DragTag::classify(&DragData::new("card", Some("x".into()))), None);
        assert_eq!(DragTag::classify(&DragData::new(ROW, None)), None);
        assert_eq!(
            DragTag::classify(&DragData::new(SIDE_FIELD, Some("checkbox".into()))),
            None
        );
    }

    #[test]
    fn test_side_field_requires_registered_type_id() {
        // Short names accepted on the command line are not panel ids
        for alias in ["text", "select"] {
            assert_eq!(
                DragTag::classify(&DragData::new(SIDE_FIELD, Some(alias.into()))),
                None
            );
        }
        assert_eq!(
            DragTag::classify(&DragData::new(SIDE_FIELD, Some("single-text".into()))),
            Some(DragTag::SideField(FieldVariant::SingleLineText))
        );
    }

    #[test]
    fn test_drop_zone_is_not_a_source() {
        assert!(!DragTag::DropZone.is_source());
        assert!(DragTag::Row(RowId::from("r")).is_source());
    }

    #[test]
    fn test_drag_data_json_shape() {
        let json = serde_json::to_value(DragData::drop_zone()).unwrap();
        assert_eq!(json, serde_json::json!({"type": "dropField", "id": "drop"}));
    }
}
