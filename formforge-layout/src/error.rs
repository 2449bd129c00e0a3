//! Error types for the layout model
//!
//! Mutations never fail; these errors only come out of importing a document
//! whose contents break the registry invariants.

use thiserror::Error;

/// Result type for layout operations
pub type Result<T> = std::result::Result<T, LayoutError>;

/// Errors raised while validating or importing a form document
#[derive(Debug, Error)]
pub enum LayoutError {
    /// A field points at a row that is not in the row order list
    #[error("field '{field}' references unknown row: {row}")]
    UnknownRow { field: String, row: String },

    /// A row in the row order list holds no fields
    #[error("row has no fields: {row}")]
    EmptyRow { row: String },

    /// The same row appears twice in the row order list
    #[error("duplicate row ID: {row}")]
    DuplicateRow { row: String },

    /// Two fields share a column ID, or the column list repeats one
    #[error("duplicate column ID: {column}")]
    DuplicateColumn { column: String },

    /// A field's column ID is missing from the column order list
    #[error("field '{field}' column not listed in column order: {column}")]
    ColumnNotListed { field: String, column: String },

    /// The column order list names a column no field owns
    #[error("column order references unknown column: {column}")]
    UnknownColumn { column: String },

    /// A mapping key disagrees with the field record's own ID
    #[error("field keyed '{key}' carries ID '{id}'")]
    FieldIdMismatch { key: String, id: String },

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
