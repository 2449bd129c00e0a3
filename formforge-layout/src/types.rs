//! Field records and the closed set of field variants.
//!
//! All types serialize to/from JSON via serde with camelCase keys, matching
//! what the presentation layer shows on its JSON tab.

use crate::ids::{ColumnId, FieldId, RowId};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A single label/value pair offered by a dropdown field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectOption {
    pub label: String,
    pub value: String,
}

impl SelectOption {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// The kind of a field. Fixed at creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FieldVariant {
    #[serde(rename = "single-text")]
    SingleLineText,
    #[serde(rename = "number")]
    Number,
    #[serde(rename = "dropdown")]
    Dropdown,
}

impl FieldVariant {
    /// Every variant, in side-panel order.
    pub fn all() -> [FieldVariant; 3] {
        [Self::SingleLineText, Self::Number, Self::Dropdown]
    }

    /// The wire tag used in documents and drag metadata.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SingleLineText => "single-text",
            Self::Number => "number",
            Self::Dropdown => "dropdown",
        }
    }

    /// Label a freshly created field starts with.
    pub fn default_label(&self) -> &'static str {
        match self {
            Self::SingleLineText => "Text",
            Self::Number => "Number",
            Self::Dropdown => "Select",
        }
    }

    /// Name shown for this variant in the side panel.
    pub fn display_name(&self) -> &'static str {
        // Side-panel names currently match the default labels.
        self.default_label()
    }

    /// Whether fields of this variant carry selectable options.
    pub fn has_options(&self) -> bool {
        match self {
            Self::SingleLineText | Self::Number => false,
            Self::Dropdown => true,
        }
    }
}

impl std::fmt::Display for FieldVariant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldVariant {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "single-text" | "text" => Ok(Self::SingleLineText),
            "number" => Ok(Self::Number),
            "dropdown" | "select" => Ok(Self::Dropdown),
            other => Err(format!("unknown field variant: {other}")),
        }
    }
}

/// One placed widget instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Field {
    #[serde(rename = "name")]
    pub id: FieldId,
    pub variant: FieldVariant,
    pub label: String,
    #[serde(default)]
    pub placeholder: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub value: String,
    pub row_id: RowId,
    pub column_id: ColumnId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<SelectOption>>,
}

impl Field {
    /// Create a field with the variant's default metadata.
    pub fn new(variant: FieldVariant, id: FieldId, row_id: RowId, column_id: ColumnId) -> Self {
        Self {
            id,
            variant,
            label: variant.default_label().to_string(),
            placeholder: String::new(),
            description: String::new(),
            value: String::new(),
            row_id,
            column_id,
            options: None,
        }
    }
}

/// An entry in the side panel of placeable field types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SidePanelEntry {
    pub name: &'static str,
    #[serde(rename = "id")]
    pub variant: FieldVariant,
}

/// The placeable field types, in the order the side panel lists them.
pub fn side_panel_catalog() -> Vec<SidePanelEntry> {
    FieldVariant::all()
        .into_iter()
        .map(|variant| SidePanelEntry {
            name: variant.display_name(),
            variant,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variant_wire_tags() {
        assert_eq!(
            serde_json::to_string(&FieldVariant::SingleLineText).unwrap(),
            "\"single-text\""
        );
        for variant in FieldVariant::all() {
            let json = serde_json::to_string(&variant).unwrap();
            assert_eq!(json, format!("\"{}\"", variant.as_str()));
            assert_eq!(variant.as_str().parse::<FieldVariant>().unwrap(), variant);
        }
        assert!("checkbox".parse::<FieldVariant>().is_err());
    }

    #[test]
    fn test_field_defaults() {
        let field = Field::new(
            FieldVariant::Dropdown,
            FieldId::from_string("name_1"),
            RowId::from_string("r1"),
            ColumnId::from_string("c1"),
        );
        assert_eq!(field.label, "Select");
        assert!(field.placeholder.is_empty());
        assert!(field.value.is_empty());
        assert!(field.options.is_none());
    }

    #[test]
    fn test_field_json_keys() {
        let field = Field::new(
            FieldVariant::Number,
            FieldId::from_string("name_1"),
            RowId::from_string("r1"),
            ColumnId::from_string("c1"),
        );
        let json = serde_json::to_value(&field).unwrap();
        assert_eq!(json["name"], "name_1");
        assert_eq!(json["rowId"], "r1");
        assert_eq!(json["columnId"], "c1");
        assert_eq!(json["variant"], "number");
        assert!(json.get("options").is_none());
    }

    #[test]
    fn test_side_panel_catalog_order() {
        let names: Vec<_> = side_panel_catalog().iter().map(|e| e.name).collect();
        assert_eq!(names, vec!["Text", "Number", "Select"]);
    }
}
