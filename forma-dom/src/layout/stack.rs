//! Stack layout: children are placed one after another along the
//! container's direction, each sized to its content unless told otherwise.

use std::collections::HashMap;

use super::Rect;
use crate::element::{Content, Element};
use crate::text::{block_width, line_count};
use crate::types::{Direction, Size};

pub type LayoutResult = HashMap<String, Rect>;

pub fn layout(element: &Element, available: Rect) -> LayoutResult {
    let mut result = LayoutResult::new();
    layout_element(element, available, &mut result);
    result
}

/// Intrinsic (content) size of an element, including padding and border.
pub fn measure(element: &Element) -> (u16, u16) {
    let border = element.style.border.thickness() * 2;
    let pad_w = element.padding.horizontal_sum() + border;
    let pad_h = element.padding.vertical_sum() + border;

    let (inner_w, inner_h) = match &element.content {
        Content::None => (0, 0),
        Content::Text(text) => (block_width(text) as u16, line_count(text) as u16),
        Content::Children(children) => {
            let sizes: Vec<(u16, u16)> = children.iter().map(outer_size).collect();
            let gaps = element.gap * (sizes.len().saturating_sub(1) as u16);
            match element.direction {
                Direction::Column => (
                    sizes.iter().map(|s| s.0).max().unwrap_or(0),
                    sizes.iter().map(|s| s.1).sum::<u16>() + gaps,
                ),
                Direction::Row => (
                    sizes.iter().map(|s| s.0).sum::<u16>() + gaps,
                    sizes.iter().map(|s| s.1).max().unwrap_or(0),
                ),
            }
        }
    };

    let width = (inner_w + pad_w).max(element.min_width.unwrap_or(0));
    (width, inner_h + pad_h)
}

/// Size an element asks for from its parent when measured as a child.
fn outer_size(element: &Element) -> (u16, u16) {
    let (w, h) = measure(element);
    let w = match element.width {
        Size::Fixed(n) => n,
        _ => w,
    };
    let h = match element.height {
        Size::Fixed(n) => n,
        _ => h,
    };
    (w, h)
}

fn resolve(size: Size, intrinsic: u16, available: u16) -> u16 {
    match size {
        Size::Auto => intrinsic.min(available),
        Size::Fixed(n) => n.min(available),
        Size::Fill => available,
    }
}

fn layout_element(element: &Element, available: Rect, result: &mut LayoutResult) -> Rect {
    let (intrinsic_w, intrinsic_h) = measure(element);
    let width = resolve(element.width, intrinsic_w, available.width);
    let height = resolve(element.height, intrinsic_h, available.height);
    let rect = Rect::new(available.x, available.y, width, height);
    result.insert(element.id.clone(), rect);

    layout_children(element, rect, result);
    rect
}

fn layout_children(element: &Element, rect: Rect, result: &mut LayoutResult) {
    let Content::Children(children) = &element.content else {
        return;
    };

    let inner = element.content_rect(rect);

    let mut cursor_x = inner.x;
    let mut cursor_y = inner.y;

    for child in children {
        let slot = match element.direction {
            Direction::Column => Rect::new(
                inner.x,
                cursor_y,
                inner.width,
                inner.bottom().saturating_sub(cursor_y),
            ),
            Direction::Row => Rect::new(
                cursor_x,
                inner.y,
                inner.right().saturating_sub(cursor_x),
                inner.height,
            ),
        };

        let placed = layout_element(child, slot, result);

        match element.direction {
            Direction::Column => cursor_y = placed.bottom().saturating_add(element.gap),
            Direction::Row => cursor_x = placed.right().saturating_add(element.gap),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Border, Edges, Style};

    #[test]
    fn text_measures_by_display_width() {
        let el = Element::text("héllo");
        assert_eq!(measure(&el), (5, 1));
    }

    #[test]
    fn multiline_text_measures_widest_line() {
        let el = Element::text("ab\nabcd\nc");
        assert_eq!(measure(&el), (4, 3));
    }

    #[test]
    fn border_and_padding_add_to_measure() {
        let el = Element::text("abc")
            .padding(Edges::horizontal(1))
            .style(Style::new().border(Border::Single));
        assert_eq!(measure(&el), (7, 3));
    }

    #[test]
    fn row_sums_widths_with_gap() {
        let el = Element::row()
            .gap(2)
            .child(Element::text("ab"))
            .child(Element::text("cde"));
        assert_eq!(measure(&el), (7, 1));
    }

    #[test]
    fn fixed_width_child_contributes_fixed_width() {
        let el = Element::row()
            .child(Element::text("ab").width(Size::Fixed(10)))
            .child(Element::text("c"));
        assert_eq!(measure(&el), (11, 1));
    }
}
