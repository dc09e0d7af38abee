//! Sortable, selectable data table.

mod events;
mod item;
mod render;
mod sort;
mod state;
mod value;

pub use item::{Alignment, Column, TableRow};
pub use sort::{compare_cells, sorted_order, SortConfig, SortDirection, SortMode};
pub use state::{DataTable, TableId, TableLabels, TableStatus};
pub use value::CellValue;
