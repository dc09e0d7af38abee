//! TableRow trait and Column types for table display.

use std::collections::{BTreeMap, HashMap};

use super::CellValue;

/// Horizontal alignment for column content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
}

/// Column configuration.
///
/// A column names the record field it displays (`key`), the header text
/// (`title`), and whether clicking the header sorts by it.
///
/// # Examples
///
/// ```
/// use forma::components::{Alignment, Column};
///
/// let columns = vec![
///     Column::new("id", "ID").sortable().align(Alignment::Right),
///     Column::new("name", "Name").sortable(),
///     Column::new("email", "Email").width(28),
/// ];
/// assert!(columns[0].sortable);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    /// Field name looked up on each row
    pub key: String,
    /// Header text
    pub title: String,
    /// Whether activating the header sorts by this column
    pub sortable: bool,
    /// Fixed width in cells; sized to content when `None`
    pub width: Option<u16>,
    /// Horizontal alignment
    pub align: Alignment,
}

impl Column {
    pub fn new(key: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            title: title.into(),
            sortable: false,
            width: None,
            align: Alignment::Left,
        }
    }

    /// Make this column sortable.
    pub fn sortable(mut self) -> Self {
        self.sortable = true;
        self
    }

    /// Fix the column width in terminal cells.
    pub fn width(mut self, width: u16) -> Self {
        self.width = Some(width);
        self
    }

    /// Set the column alignment.
    pub fn align(mut self, align: Alignment) -> Self {
        self.align = align;
        self
    }
}

/// Trait for records displayed by a [`DataTable`](super::DataTable).
///
/// A missing field is `None`; it renders as an empty cell and sorts after
/// every present value.
///
/// # Examples
///
/// ```
/// use forma::components::{CellValue, TableRow};
///
/// struct User {
///     id: u32,
///     name: String,
/// }
///
/// impl TableRow for User {
///     fn field(&self, key: &str) -> Option<CellValue> {
///         match key {
///             "id" => Some(self.id.into()),
///             "name" => Some(self.name.as_str().into()),
///             _ => None,
///         }
///     }
/// }
/// ```
pub trait TableRow {
    /// Value of the field named `key`.
    fn field(&self, key: &str) -> Option<CellValue>;
}

impl TableRow for HashMap<String, CellValue> {
    fn field(&self, key: &str) -> Option<CellValue> {
        self.get(key).cloned()
    }
}

impl TableRow for BTreeMap<String, CellValue> {
    fn field(&self, key: &str) -> Option<CellValue> {
        self.get(key).cloned()
    }
}
