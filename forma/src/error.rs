//! Error types for programmatic component operations.
//!
//! Event handling never fails; these only surface from calls a host makes
//! directly and can get wrong.

use thiserror::Error;

/// Errors from table operations addressed by column key.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    /// No column carries the requested key.
    #[error("No column with key '{0}'")]
    UnknownColumn(String),

    /// The column exists but is not marked sortable.
    #[error("Column '{0}' is not sortable")]
    NotSortable(String),
}

/// Errors from input field operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    /// `set_value` was called on a field that owns its own value.
    #[error("Field is uncontrolled; its value can only change through user input")]
    Uncontrolled,
}
