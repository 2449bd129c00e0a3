//! Field registry and layout mutations for the formforge form builder
//!
//! The layout is a two-dimensional grid: an ordered list of rows, each row an
//! ordered set of fields. Row order is one list of row IDs; column order is
//! one *global* list of column IDs, and a row's left-to-right order is the
//! subsequence of that list owned by its fields.
//!
//! ## Overview
//!
//! - **Value semantics** - [`FieldRegistry`] is a plain value; mutations return
//!   the next version instead of mutating shared state
//! - **Total mutations** - every [`Mutation`] either applies or returns its
//!   input unchanged; stale references are never errors
//! - **Closed variants** - [`FieldVariant`] is an enum, so each consumer
//!   dispatches with an exhaustive `match`
//!
//! ## Basic Usage
//!
//! ```rust
//! use formforge_layout::{CreateField, DeleteField, FieldRegistry, FieldVariant};
//!
//! let registry = FieldRegistry::new();
//! let create = CreateField::new_row(FieldVariant::SingleLineText);
//! let field_id = create.field_id.clone();
//! let registry = registry.apply(&create);
//! assert_eq!(registry.rows_of().len(), 1);
//!
//! let registry = registry.apply(&DeleteField::new(field_id));
//! assert!(registry.is_empty());
//! assert!(registry.rows_of().is_empty());
//! ```

mod document;
mod error;
pub mod ids;
pub mod mutate;
mod registry;
pub mod types;

pub use document::{FormDocument, RowExport};
pub use error::{LayoutError, Result};
pub use ids::{ColumnId, FieldId, RowId};
pub use mutate::{
    apply_all, apply_intent, CreateField, DeleteField, DeleteRow, LayoutIntent,
    MoveFieldAcrossRow, Mutation, ReorderColumnsWithinRow, ReorderRows, RowTarget,
    UpdateFieldSettings,
};
pub use registry::{FieldRegistry, FormRow};
pub use types::{side_panel_catalog, Field, FieldVariant, SelectOption, SidePanelEntry};
