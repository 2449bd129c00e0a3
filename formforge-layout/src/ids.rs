//! Identifier newtypes for fields, rows and columns.
//!
//! Identifiers are opaque strings. Fresh ones are minted from a process-wide
//! monotonic ULID generator so two ids created back to back never collide and
//! sort in creation order. Imported documents may carry arbitrary strings,
//! which `from_string` wraps unchanged.

use serde::{Deserialize, Serialize};
use std::sync::{LazyLock, Mutex};
use ulid::{Generator, Ulid};

static GENERATOR: LazyLock<Mutex<Generator>> = LazyLock::new(|| Mutex::new(Generator::new()));

/// Generate a monotonic ULID.
///
/// Falls back to a random ULID if the generator overflows within a single
/// millisecond or its lock is poisoned.
pub fn generate_monotonic_ulid() -> Ulid {
    match GENERATOR.lock() {
        Ok(mut generator) => generator.generate().unwrap_or_else(|_| Ulid::new()),
        Err(_) => Ulid::new(),
    }
}

macro_rules! define_id {
    ($(#[$meta:meta])* $name:ident, $prefix:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Mint a fresh, globally unique identifier.
            pub fn new() -> Self {
                Self(format!("{}{}", $prefix, generate_monotonic_ulid()))
            }

            /// Wrap an existing identifier string.
            pub fn from_string(s: impl Into<String>) -> Self {
                Self(s.into())
            }

            /// The identifier as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }
    };
}

define_id!(
    /// Identifier of a placed field. Also the key of the field's value in
    /// the rendered form, hence the `name_` prefix.
    FieldId,
    "name_"
);

define_id!(
    /// Identifier of a row in the layout.
    RowId,
    ""
);

define_id!(
    /// Per-field identifier whose position in the global column list
    /// decides left-to-right order within a row.
    ColumnId,
    ""
);
