//! Table component state.

use std::collections::HashSet;
use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};

use log::{debug, trace, warn};

use super::{sorted_order, Column, SortConfig, TableRow};
use crate::components::Selection;
use crate::error::TableError;
use crate::theme::Theme;

/// Global counter for generating unique table IDs.
static TABLE_ID_COUNTER: AtomicUsize = AtomicUsize::new(0);

/// A unique identifier for a table instance, used as the root element id and
/// as the prefix of every element id the table renders.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TableId(String);

impl TableId {
    fn next() -> Self {
        let id = TABLE_ID_COUNTER.fetch_add(1, Ordering::SeqCst);
        Self(format!("__table_{id}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TableId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Placeholder and header texts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableLabels {
    pub loading: String,
    pub empty: String,
    pub select_header: String,
}

impl Default for TableLabels {
    fn default() -> Self {
        Self {
            loading: "Loading...".into(),
            empty: "No data available".into(),
            select_header: "Select".into(),
        }
    }
}

/// What the table currently shows. Loading wins over empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableStatus {
    Loading,
    Empty,
    Ready,
}

type RowSelectHandler<T> = Box<dyn FnMut(&[&T])>;

/// Sortable, optionally selectable table over rows of `T`.
///
/// The table never reorders or mutates `data`; sorting maintains a separate
/// display order of indices, and selection tracks data indices.
///
/// # Example
///
/// ```
/// use std::collections::HashMap;
/// use forma::components::{CellValue, Column, DataTable};
///
/// let rows: Vec<HashMap<String, CellValue>> = vec![
///     HashMap::from([("name".to_string(), "Bob".into())]),
///     HashMap::from([("name".to_string(), "Ann".into())]),
/// ];
/// let mut table = DataTable::new(vec![Column::new("name", "Name").sortable()], rows);
/// table.sort_by("name").unwrap();
/// assert_eq!(table.display_order(), &[1, 0]);
/// ```
pub struct DataTable<T> {
    id: TableId,
    columns: Vec<Column>,
    data: Vec<T>,
    order: Vec<usize>,
    loading: bool,
    selectable: bool,
    sort: Option<SortConfig>,
    selection: Selection,
    labels: TableLabels,
    pub(super) theme: Theme,
    on_row_select: Option<RowSelectHandler<T>>,
}

impl<T: TableRow> DataTable<T> {
    pub fn new(columns: Vec<Column>, data: Vec<T>) -> Self {
        warn_duplicate_keys(&columns);
        let order = (0..data.len()).collect();
        Self {
            id: TableId::next(),
            columns,
            data,
            order,
            loading: false,
            selectable: false,
            sort: None,
            selection: Selection::new(),
            labels: TableLabels::default(),
            theme: Theme::default(),
            on_row_select: None,
        }
    }

    // -------------------------------------------------------------------------
    // Builder methods
    // -------------------------------------------------------------------------

    /// Show the loading placeholder instead of rows.
    pub fn loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    /// Render a leading checkbox column and track a row selection.
    pub fn selectable(mut self, selectable: bool) -> Self {
        self.selectable = selectable;
        self
    }

    /// Called with the full selection, in selection order, after every change.
    pub fn on_row_select(mut self, handler: impl FnMut(&[&T]) + 'static) -> Self {
        self.on_row_select = Some(Box::new(handler));
        self
    }

    pub fn labels(mut self, labels: TableLabels) -> Self {
        self.labels = labels;
        self
    }

    pub fn theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    pub fn id(&self) -> &TableId {
        &self.id
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Rows in their original order.
    pub fn data(&self) -> &[T] {
        &self.data
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_selectable(&self) -> bool {
        self.selectable
    }

    pub fn table_labels(&self) -> &TableLabels {
        &self.labels
    }

    pub fn sort_config(&self) -> Option<&SortConfig> {
        self.sort.as_ref()
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn status(&self) -> TableStatus {
        if self.loading {
            TableStatus::Loading
        } else if self.data.is_empty() {
            TableStatus::Empty
        } else {
            TableStatus::Ready
        }
    }

    /// Data indices in display order.
    pub fn display_order(&self) -> &[usize] {
        &self.order
    }

    /// Rows in display order.
    pub fn rows(&self) -> impl Iterator<Item = &T> {
        self.order.iter().map(|&i| &self.data[i])
    }

    /// Selected rows in selection order.
    pub fn selected_rows(&self) -> Vec<&T> {
        self.selection
            .indices()
            .iter()
            .filter_map(|&i| self.data.get(i))
            .collect()
    }

    /// Column index carrying the sort indicator.
    ///
    /// With duplicate keys the last matching column wins.
    pub fn sorted_column(&self) -> Option<usize> {
        let sort = self.sort.as_ref()?;
        self.columns.iter().rposition(|c| c.key == sort.key)
    }

    // -------------------------------------------------------------------------
    // Setters
    // -------------------------------------------------------------------------

    /// Replace the rows.
    ///
    /// Row identities are positions, so the selection is cleared. The sort
    /// configuration is kept and applied to the new rows.
    pub fn set_data(&mut self, data: Vec<T>) {
        self.data = data;
        self.resort();
        if !self.selection.clear().is_empty() {
            debug!("{}: selection cleared by data reload", self.id);
            self.notify_selection();
        }
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    /// Turning selection off drops the current selection and notifies.
    pub fn set_selectable(&mut self, selectable: bool) {
        self.selectable = selectable;
        if !selectable && !self.selection.clear().is_empty() {
            debug!("{}: selection cleared, table no longer selectable", self.id);
            self.notify_selection();
        }
    }

    /// Replace the columns. A sort on a key that is no longer sortable is dropped.
    pub fn set_columns(&mut self, columns: Vec<Column>) {
        warn_duplicate_keys(&columns);
        self.columns = columns;
        let still_sortable = self
            .sort
            .as_ref()
            .is_some_and(|sort| self.sortable_column(&sort.key).is_ok());
        if self.sort.is_some() && !still_sortable {
            debug!("{}: sort dropped with its column", self.id);
            self.clear_sort();
        }
    }

    // -------------------------------------------------------------------------
    // Operations
    // -------------------------------------------------------------------------

    /// Activate the header of column `index`, as a click would.
    ///
    /// Returns false (and changes nothing) for non-sortable or unknown columns.
    pub fn activate_header(&mut self, index: usize) -> bool {
        let Some(column) = self.columns.get(index) else {
            trace!("{}: header {} out of range", self.id, index);
            return false;
        };
        if !column.sortable {
            trace!("{}: header '{}' is not sortable", self.id, column.key);
            return false;
        }
        let key = column.key.clone();
        self.apply_sort(&key);
        true
    }

    /// Sort by `key` as if its header were activated.
    pub fn sort_by(&mut self, key: &str) -> Result<(), TableError> {
        self.sortable_column(key)?;
        self.apply_sort(key);
        Ok(())
    }

    /// Back to input order.
    pub fn clear_sort(&mut self) {
        self.sort = None;
        self.resort();
    }

    /// Toggle selection of the row at data index `index`.
    ///
    /// Returns false when the table is not selectable or the index is out of
    /// range. Otherwise notifies `on_row_select` with the new selection.
    pub fn toggle_row(&mut self, index: usize) -> bool {
        if !self.selectable {
            trace!("{}: toggle ignored, table not selectable", self.id);
            return false;
        }
        if index >= self.data.len() {
            trace!("{}: toggle ignored, row {} out of range", self.id, index);
            return false;
        }
        let selected = self.selection.toggle(index);
        debug!(
            "{}: row {} {} ({} selected)",
            self.id,
            index,
            if selected { "selected" } else { "deselected" },
            self.selection.len()
        );
        self.notify_selection();
        true
    }

    fn sortable_column(&self, key: &str) -> Result<&Column, TableError> {
        let column = self
            .columns
            .iter()
            .rfind(|c| c.key == key)
            .ok_or_else(|| TableError::UnknownColumn(key.to_string()))?;
        if column.sortable {
            Ok(column)
        } else {
            Err(TableError::NotSortable(key.to_string()))
        }
    }

    fn apply_sort(&mut self, key: &str) {
        let next = SortConfig::next(self.sort.as_ref(), key);
        debug!("{}: sort by '{}' {:?}", self.id, next.key, next.direction);
        self.sort = Some(next);
        self.resort();
    }

    fn resort(&mut self) {
        self.order = sorted_order(&self.data, self.sort.as_ref());
    }

    fn notify_selection(&mut self) {
        let Some(handler) = self.on_row_select.as_mut() else {
            return;
        };
        let rows: Vec<&T> = self
            .selection
            .indices()
            .iter()
            .filter_map(|&i| self.data.get(i))
            .collect();
        handler(&rows);
    }
}

fn warn_duplicate_keys(columns: &[Column]) {
    let mut seen = HashSet::new();
    for column in columns {
        if !seen.insert(column.key.as_str()) {
            warn!(
                "duplicate column key '{}'; the last column with this key carries the sort state",
                column.key
            );
        }
    }
}

impl<T> fmt::Debug for DataTable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DataTable")
            .field("id", &self.id)
            .field("columns", &self.columns)
            .field("rows", &self.data.len())
            .field("loading", &self.loading)
            .field("selectable", &self.selectable)
            .field("sort", &self.sort)
            .field("selection", &self.selection)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::CellValue;
    use std::cell::RefCell;
    use std::collections::HashMap;
    use std::rc::Rc;

    type Row = HashMap<String, CellValue>;

    fn user(id: i32, name: &str) -> Row {
        HashMap::from([
            ("id".to_string(), id.into()),
            ("name".to_string(), name.into()),
        ])
    }

    fn columns() -> Vec<Column> {
        vec![
            Column::new("id", "ID").sortable(),
            Column::new("name", "Name").sortable(),
            Column::new("note", "Note"),
        ]
    }

    fn names(table: &DataTable<Row>) -> Vec<String> {
        table
            .rows()
            .map(|r| r.field("name").map(|v| v.to_string()).unwrap_or_default())
            .collect()
    }

    #[test]
    fn ids_are_unique() {
        let a: DataTable<Row> = DataTable::new(vec![], vec![]);
        let b: DataTable<Row> = DataTable::new(vec![], vec![]);
        assert_ne!(a.id(), b.id());
        assert!(a.id().as_str().starts_with("__table_"));
    }

    #[test]
    fn status_prefers_loading() {
        let table: DataTable<Row> = DataTable::new(columns(), vec![]).loading(true);
        assert_eq!(table.status(), TableStatus::Loading);

        let table: DataTable<Row> = DataTable::new(columns(), vec![]);
        assert_eq!(table.status(), TableStatus::Empty);

        let table = DataTable::new(columns(), vec![user(1, "Ann")]);
        assert_eq!(table.status(), TableStatus::Ready);
    }

    #[test]
    fn non_sortable_header_changes_nothing() {
        let mut table = DataTable::new(columns(), vec![user(2, "Bob"), user(1, "Ann")]);
        assert!(!table.activate_header(2));
        assert!(!table.activate_header(9));
        assert_eq!(table.sort_config(), None);
        assert_eq!(table.display_order(), &[0, 1]);
    }

    #[test]
    fn header_cycles_ascending_descending() {
        let mut table = DataTable::new(
            columns(),
            vec![user(2, "bob"), user(10, "Ann"), user(1, "carl")],
        );

        assert!(table.activate_header(0));
        assert_eq!(table.display_order(), &[2, 0, 1]);

        assert!(table.activate_header(0));
        assert_eq!(table.display_order(), &[1, 0, 2]);

        assert!(table.activate_header(0));
        assert_eq!(table.display_order(), &[2, 0, 1]);

        assert!(table.activate_header(1));
        assert_eq!(names(&table), vec!["Ann", "bob", "carl"]);
        assert_eq!(
            table.data().iter().map(|r| r["name"].to_string()).collect::<Vec<_>>(),
            vec!["bob", "Ann", "carl"]
        );
    }

    #[test]
    fn sort_by_checks_the_column() {
        let mut table = DataTable::new(columns(), vec![user(1, "Ann")]);
        assert_eq!(
            table.sort_by("missing"),
            Err(TableError::UnknownColumn("missing".into()))
        );
        assert_eq!(
            table.sort_by("note"),
            Err(TableError::NotSortable("note".into()))
        );
        assert_eq!(table.sort_by("name"), Ok(()));
        assert_eq!(table.sort_config(), Some(&SortConfig::ascending("name")));

        table.clear_sort();
        assert_eq!(table.sort_config(), None);
    }

    #[test]
    fn duplicate_keys_put_indicator_on_last() {
        let cols = vec![
            Column::new("name", "Name").sortable(),
            Column::new("name", "Name again").sortable(),
        ];
        let mut table = DataTable::new(cols, vec![user(1, "Ann")]);
        table.activate_header(0);
        assert_eq!(table.sorted_column(), Some(1));
        table.activate_header(1);
        assert_eq!(
            table.sort_config().map(|s| s.direction),
            Some(crate::components::SortDirection::Descending)
        );
    }

    #[test]
    fn toggle_requires_selectable() {
        let mut table = DataTable::new(columns(), vec![user(1, "Ann")]);
        assert!(!table.toggle_row(0));
        assert!(table.selection().is_empty());
    }

    #[test]
    fn toggle_notifies_full_selection() {
        let seen: Rc<RefCell<Vec<Vec<String>>>> = Rc::default();
        let sink = Rc::clone(&seen);
        let mut table = DataTable::new(
            columns(),
            vec![user(1, "Ann"), user(2, "Bob"), user(3, "Cy")],
        )
        .selectable(true)
        .on_row_select(move |rows: &[&Row]| {
            sink.borrow_mut()
                .push(rows.iter().map(|r| r["name"].to_string()).collect());
        });

        table.toggle_row(2);
        table.toggle_row(0);
        table.toggle_row(2);
        assert!(!table.toggle_row(7));

        assert_eq!(
            *seen.borrow(),
            vec![
                vec!["Cy".to_string()],
                vec!["Cy".to_string(), "Ann".to_string()],
                vec!["Ann".to_string()],
            ]
        );
        assert_eq!(table.selection().indices(), &[0]);
    }

    #[test]
    fn identical_rows_are_distinct() {
        let mut table =
            DataTable::new(columns(), vec![user(1, "Ann"), user(1, "Ann")]).selectable(true);
        table.toggle_row(0);
        table.toggle_row(1);
        assert_eq!(table.selected_rows().len(), 2);
    }

    #[test]
    fn set_data_clears_selection_and_keeps_sort() {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&calls);
        let mut table = DataTable::new(columns(), vec![user(2, "Bob"), user(1, "Ann")])
            .selectable(true)
            .on_row_select(move |rows: &[&Row]| sink.borrow_mut().push(rows.len()));

        table.sort_by("id").unwrap();
        table.toggle_row(1);
        table.set_data(vec![user(5, "Eve"), user(3, "Cy"), user(4, "Dan")]);

        assert!(table.selection().is_empty());
        assert_eq!(*calls.borrow(), vec![1, 0]);
        assert_eq!(names(&table), vec!["Cy", "Dan", "Eve"]);

        // nothing selected, nothing to report
        table.set_data(vec![user(1, "Ann")]);
        assert_eq!(*calls.borrow(), vec![1, 0]);
    }

    #[test]
    fn set_columns_drops_stale_sort() {
        let mut table = DataTable::new(columns(), vec![user(2, "Bob"), user(1, "Ann")]);
        table.sort_by("name").unwrap();
        table.set_columns(vec![Column::new("id", "ID").sortable()]);
        assert_eq!(table.sort_config(), None);
        assert_eq!(table.display_order(), &[0, 1]);
    }
}
