//! UpdateFieldSettings mutation

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::Mutation;
use crate::ids::FieldId;
use crate::registry::FieldRegistry;
use crate::types::SelectOption;

/// Edit a field's display metadata. Layout is left untouched.
///
/// Only the members that are `Some` are written. Options are only accepted
/// by variants that carry them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateFieldSettings {
    pub id: FieldId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<SelectOption>>,
}

impl UpdateFieldSettings {
    pub fn new(id: impl Into<FieldId>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn with_options(mut self, options: Vec<SelectOption>) -> Self {
        self.options = Some(options);
        self
    }
}

impl Mutation for UpdateFieldSettings {
    fn op(&self) -> &'static str {
        "update field"
    }

    fn apply(&self, registry: &FieldRegistry) -> FieldRegistry {
        if !registry.contains_field(&self.id) {
            debug!(field = %self.id, "update field: field not found");
            return registry.clone();
        }

        let mut next = registry.clone();
        let Some(field) = next.fields.get_mut(&self.id) else {
            return registry.clone();
        };
        if let Some(label) = &self.label {
            field.label = label.clone();
        }
        if let Some(placeholder) = &self.placeholder {
            field.placeholder = placeholder.clone();
        }
        if let Some(description) = &self.description {
            field.description = description.clone();
        }
        if let Some(value) = &self.value {
            field.value = value.clone();
        }
        if let Some(options) = &self.options {
            if field.variant.has_options() {
                field.options = Some(options.clone());
            } else {
                debug!(
                    field = %self.id,
                    variant = %field.variant,
                    "update field: variant takes no options"
                );
            }
        }
        next
    }
}
