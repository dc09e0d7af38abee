//! Presentational building blocks: a sortable, selectable [`DataTable`] and a
//! controlled/uncontrolled [`InputField`].
//!
//! Components own their state, mutate it only from their own event handlers
//! and operations, and describe their current state as a [`forma_dom::Element`]
//! tree via `element()`. The host decides when to render.
//!
//! [`DataTable`]: components::DataTable
//! [`InputField`]: components::InputField

pub mod components;
pub mod error;
pub mod theme;

pub use error::{InputError, TableError};

pub mod prelude {
    pub use crate::components::{
        Alignment, CellValue, ChangeEvent, Column, ComponentEvents, DataTable, EventResult,
        InputField, InputId, InputMode, InputSize, Selection, SortConfig, SortDirection, TableId,
        TableLabels, TableRow, TableStatus, ValidationMessage, Variant,
    };
    pub use crate::error::{InputError, TableError};
    pub use crate::theme::Theme;
}
