//! Table event handling.

use forma_dom::{Key, Modifiers};
use log::trace;

use super::{DataTable, TableRow};
use crate::components::{ComponentEvents, EventResult};

/// Table element an event is addressed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Target {
    Header(usize),
    Checkbox(usize),
}

impl<T: TableRow> DataTable<T> {
    fn parse_target(&self, target: &str) -> Option<Target> {
        let rest = target
            .strip_prefix(self.id().as_str())
            .and_then(|rest| rest.strip_prefix('-'))?;
        if let Some(index) = rest.strip_prefix("header-") {
            return index.parse().ok().map(Target::Header);
        }
        if let Some(index) = rest.strip_prefix("check-") {
            return index.parse().ok().map(Target::Checkbox);
        }
        None
    }

    fn activate(&mut self, target: Target) -> EventResult {
        let handled = match target {
            Target::Header(index) => self.activate_header(index),
            Target::Checkbox(index) => self.toggle_row(index),
        };
        if handled {
            EventResult::Consumed
        } else {
            EventResult::Ignored
        }
    }
}

impl<T: TableRow> ComponentEvents for DataTable<T> {
    fn on_click(&mut self, target: &str) -> EventResult {
        match self.parse_target(target) {
            Some(target) => self.activate(target),
            None => EventResult::Ignored,
        }
    }

    fn on_key(&mut self, target: &str, key: Key, modifiers: Modifiers) -> EventResult {
        let Some(parsed) = self.parse_target(target) else {
            return EventResult::Ignored;
        };
        if key.activates() && modifiers.none() {
            return self.activate(parsed);
        }
        trace!("{}: key {:?} ignored on {}", self.id(), key, target);
        EventResult::Ignored
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::{CellValue, Column};
    use forma_dom::Event;
    use std::collections::HashMap;

    type Row = HashMap<String, CellValue>;

    fn table() -> DataTable<Row> {
        DataTable::new(
            vec![Column::new("id", "ID").sortable(), Column::new("x", "X")],
            vec![
                HashMap::from([("id".to_string(), 2.into())]),
                HashMap::from([("id".to_string(), 1.into())]),
            ],
        )
        .selectable(true)
    }

    #[test]
    fn parses_only_own_ids() {
        let t = table();
        assert_eq!(t.parse_target(&t.header_id(1)), Some(Target::Header(1)));
        assert_eq!(t.parse_target(&t.checkbox_id(0)), Some(Target::Checkbox(0)));
        assert_eq!(t.parse_target(&t.row_id(0)), None);
        assert_eq!(t.parse_target("__table_x-header-0"), None);
        assert_eq!(t.parse_target(&format!("{}0-header-0", t.id())), None);
    }

    #[test]
    fn click_header_sorts() {
        let mut t = table();
        let result = t.handle_event(&Event::click(t.header_id(0)));
        assert_eq!(result, EventResult::Consumed);
        assert_eq!(t.display_order(), &[1, 0]);
    }

    #[test]
    fn click_non_sortable_header_is_ignored() {
        let mut t = table();
        let result = t.handle_event(&Event::click(t.header_id(1)));
        assert_eq!(result, EventResult::Ignored);
        assert_eq!(t.sort_config(), None);
    }

    #[test]
    fn space_and_enter_toggle_checkbox() {
        let mut t = table();
        let id = t.checkbox_id(1);
        assert!(t.handle_event(&Event::key(&id, Key::Char(' '))).is_handled());
        assert_eq!(t.selection().indices(), &[1]);
        assert!(t.handle_event(&Event::key(&id, Key::Enter)).is_handled());
        assert!(t.selection().is_empty());
        assert!(!t.handle_event(&Event::key(&id, Key::Char('x'))).is_handled());
    }
}
