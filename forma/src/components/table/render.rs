//! Table element tree.

use forma_dom::text::{display_width, pad_to_width, truncate_to_width};
use forma_dom::{Edges, Element, Role, Size, Style};

use super::{Alignment, DataTable, SortDirection, TableRow, TableStatus};

const CHECKED: &str = "■";
const UNCHECKED: &str = "□";
const COLUMN_GAP: u16 = 2;

impl<T: TableRow> DataTable<T> {
    /// Id of the header cell for column `index`.
    pub fn header_id(&self, index: usize) -> String {
        format!("{}-header-{index}", self.id())
    }

    /// Id of the checkbox for the row at data index `index`.
    pub fn checkbox_id(&self, index: usize) -> String {
        format!("{}-check-{index}", self.id())
    }

    /// Id of the row element for data index `index`.
    pub fn row_id(&self, index: usize) -> String {
        format!("{}-row-{index}", self.id())
    }

    /// Describe the current state as an element tree.
    pub fn element(&self) -> Element {
        match self.status() {
            TableStatus::Loading => self.placeholder(&self.table_labels().loading),
            TableStatus::Empty => self.placeholder(&self.table_labels().empty),
            TableStatus::Ready => self.table_element(),
        }
    }

    fn placeholder(&self, text: &str) -> Element {
        Element::text(text)
            .id(self.id().as_str())
            .role(Role::Status)
            .padding(Edges::horizontal(1))
            .style(Style::new().foreground(self.theme.muted))
    }

    fn table_element(&self) -> Element {
        let theme = &self.theme;
        let columns = self.columns();
        let sorted = self.sorted_column();

        // Display strings, rows in display order.
        let cells: Vec<Vec<String>> = self
            .rows()
            .map(|row| {
                columns
                    .iter()
                    .map(|c| row.field(&c.key).map(|v| v.to_string()).unwrap_or_default())
                    .collect()
            })
            .collect();

        let widths: Vec<usize> = columns
            .iter()
            .enumerate()
            .map(|(i, c)| match c.width {
                Some(w) => usize::from(w),
                None => {
                    let header = display_width(&c.title) + if c.sortable { 2 } else { 0 };
                    cells
                        .iter()
                        .map(|r| display_width(&r[i]))
                        .fold(header, usize::max)
                }
            })
            .collect();
        let select_width = display_width(&self.table_labels().select_header).max(3);

        let header_style = Style::new().foreground(theme.primary).bold();
        let focus_style = Style::new().reverse();

        let mut header = Element::row()
            .id(format!("{}-head", self.id()))
            .role(Role::Row)
            .gap(COLUMN_GAP);
        if self.is_selectable() {
            header = header.child(
                Element::text(pad_to_width(&self.table_labels().select_header, select_width))
                    .id(format!("{}-select-header", self.id()))
                    .role(Role::ColumnHeader)
                    .width(fixed_width(select_width))
                    .style(header_style.clone()),
            );
        }
        for (i, column) in columns.iter().enumerate() {
            let direction = sorted
                .filter(|&s| s == i)
                .and(self.sort_config())
                .map(|config| config.direction);
            let mut title = column.title.clone();
            if let Some(direction) = direction {
                title.push_str(direction.indicator());
            }
            let mut cell = Element::text(pad_to_width(&title, widths[i]))
                .id(self.header_id(i))
                .role(Role::ColumnHeader)
                .width(fixed_width(widths[i]))
                .style(header_style.clone());
            if column.sortable {
                let aria = direction.map_or("none", SortDirection::aria);
                cell = cell
                    .focusable(true)
                    .clickable(true)
                    .style_focused(focus_style.clone())
                    .data("aria-sort", aria);
            }
            header = header.child(cell);
        }

        let mut total = widths.iter().sum::<usize>()
            + usize::from(COLUMN_GAP) * columns.len().saturating_sub(1);
        if self.is_selectable() {
            total += select_width + usize::from(COLUMN_GAP);
        }
        let rule = Element::text("─".repeat(total))
            .id(format!("{}-rule", self.id()))
            .style(Style::new().foreground(theme.border));

        let rows = self
            .display_order()
            .iter()
            .zip(&cells)
            .enumerate()
            .map(|(position, (&index, values))| {
                let selected = self.selection().is_selected(index);
                let mut row = Element::row()
                    .id(self.row_id(index))
                    .role(Role::Row)
                    .gap(COLUMN_GAP);
                if self.is_selectable() {
                    row = row.data("aria-selected", selected.to_string());
                    if selected {
                        row = row.style(Style::new().background(theme.selection));
                    }
                    let glyph = if selected { CHECKED } else { UNCHECKED };
                    row = row.child(
                        Element::text(pad_to_width(glyph, select_width))
                            .id(self.checkbox_id(index))
                            .role(Role::Checkbox { checked: selected })
                            .width(fixed_width(select_width))
                            .focusable(true)
                            .clickable(true)
                            .style_focused(focus_style.clone())
                            .data("aria-label", format!("Select row {}", position + 1)),
                    );
                }
                row.children(values.iter().enumerate().map(|(i, value)| {
                    Element::text(align(value, widths[i], columns[i].align))
                        .id(format!("{}-cell-{index}-{i}", self.id()))
                        .role(Role::Cell)
                        .width(fixed_width(widths[i]))
                }))
            });

        Element::col()
            .id(self.id().as_str())
            .role(Role::Table)
            .style(Style::new().foreground(theme.text))
            .child(header)
            .child(rule)
            .children(rows)
    }
}

/// Column width as a layout size, saturating at `u16::MAX` cells.
fn fixed_width(width: usize) -> Size {
    Size::Fixed(u16::try_from(width).unwrap_or(u16::MAX))
}

fn align(text: &str, width: usize, alignment: Alignment) -> String {
    let text = truncate_to_width(text, width);
    let fill = width.saturating_sub(display_width(&text));
    match alignment {
        Alignment::Left => pad_to_width(&text, width),
        Alignment::Right => format!("{}{text}", " ".repeat(fill)),
        Alignment::Center => {
            let left = fill / 2;
            format!("{}{text}{}", " ".repeat(left), " ".repeat(fill - left))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn oversized_widths_saturate() {
        assert_eq!(fixed_width(12), Size::Fixed(12));
        assert_eq!(fixed_width(70_000), Size::Fixed(u16::MAX));
    }

    #[test]
    fn align_pads_per_alignment() {
        assert_eq!(align("ab", 5, Alignment::Left), "ab   ");
        assert_eq!(align("ab", 5, Alignment::Right), "   ab");
        assert_eq!(align("ab", 5, Alignment::Center), " ab  ");
    }

    #[test]
    fn align_truncates_long_text() {
        assert_eq!(align("abcdef", 4, Alignment::Right), "abc…");
    }
}
