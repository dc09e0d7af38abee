//! Selection state for the table.
//!
//! Rows are identified by their position in the data collection, so two
//! structurally equal rows are still distinct members. Members keep the
//! order in which they were toggled on.

/// Ordered set of selected row indices.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    selected: Vec<usize>,
}

impl Selection {
    /// Create a new empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Selected indices in toggle order.
    pub fn indices(&self) -> &[usize] {
        &self.selected
    }

    /// Check if an index is selected.
    pub fn is_selected(&self, index: usize) -> bool {
        self.selected.contains(&index)
    }

    /// Get the number of selected rows.
    pub fn len(&self) -> usize {
        self.selected.len()
    }

    /// Check if nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Toggle membership of `index`.
    /// Returns true if the index is now selected.
    pub fn toggle(&mut self, index: usize) -> bool {
        match self.selected.iter().position(|&i| i == index) {
            Some(pos) => {
                self.selected.remove(pos);
                false
            }
            None => {
                self.selected.push(index);
                true
            }
        }
    }

    /// Clear all selection.
    /// Returns the indices that were deselected.
    pub fn clear(&mut self) -> Vec<usize> {
        std::mem::take(&mut self.selected)
    }
}
