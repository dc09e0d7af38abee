//! UI components with self-managed state.
//!
//! Each component lives in its own module with:
//! - `state.rs` - the component state type
//! - `events.rs` - event handling
//! - `render.rs` - element tree construction
//! - `mod.rs` - public exports

mod events;
pub mod input;
mod selection;
pub mod table;

pub use events::{ComponentEvents, EventResult};
pub use input::{ChangeEvent, InputField, InputId, InputMode, InputSize, ValidationMessage, Variant};
pub use selection::Selection;
pub use table::{
    Alignment, CellValue, Column, DataTable, SortConfig, SortDirection, SortMode, TableId,
    TableLabels,
    TableRow, TableStatus,
};
