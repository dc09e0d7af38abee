use forma_dom::render::render_to_new_buffer;
use forma_dom::{Border, Color, Edges, Element, Rgb, Size, Style};

#[test]
fn test_column_stacks_text_lines() {
    let root = Element::col()
        .child(Element::text("first"))
        .child(Element::text("second"));

    let buf = render_to_new_buffer(&root, 10, 3);

    assert_eq!(buf.lines(), vec!["first", "second", ""]);
}

#[test]
fn test_row_places_children_side_by_side_with_gap() {
    let root = Element::row()
        .gap(1)
        .child(Element::text("ab"))
        .child(Element::text("cd"));

    let buf = render_to_new_buffer(&root, 10, 1);

    assert_eq!(buf.lines(), vec!["ab cd"]);
}

#[test]
fn test_fixed_width_pads_following_sibling() {
    let root = Element::row()
        .child(Element::text("id").width(Size::Fixed(5)))
        .child(Element::text("name"));

    let buf = render_to_new_buffer(&root, 12, 1);

    assert_eq!(buf.lines(), vec!["id   name"]);
}

#[test]
fn test_text_is_truncated_with_ellipsis() {
    let root = Element::text("hello world").width(Size::Fixed(6));

    let buf = render_to_new_buffer(&root, 20, 1);

    assert_eq!(buf.lines(), vec!["hello…"]);
}

#[test]
fn test_border_surrounds_content() {
    let root = Element::text("hi")
        .padding(Edges::horizontal(1))
        .style(Style::new().border(Border::Single));

    let buf = render_to_new_buffer(&root, 10, 3);

    assert_eq!(buf.lines(), vec!["┌────┐", "│ hi │", "└────┘"]);
}

#[test]
fn test_background_fills_element_rect() {
    let root = Element::col().child(
        Element::text("x")
            .width(Size::Fixed(3))
            .style(Style::new().background(Color::rgb(0, 0, 255))),
    );

    let buf = render_to_new_buffer(&root, 5, 1);

    assert_eq!(buf.get(0, 0).unwrap().bg, Rgb::new(0, 0, 255));
    assert_eq!(buf.get(2, 0).unwrap().bg, Rgb::new(0, 0, 255));
    assert_eq!(buf.get(3, 0).unwrap().bg, Rgb::new(0, 0, 0));
}

#[test]
fn test_foreground_is_inherited_by_children() {
    let root = Element::col()
        .style(Style::new().foreground(Color::rgb(200, 10, 10)))
        .child(Element::text("a"));

    let buf = render_to_new_buffer(&root, 3, 1);

    assert_eq!(buf.get(0, 0).unwrap().fg, Rgb::new(200, 10, 10));
}

#[test]
fn test_focused_style_applies_only_when_focused() {
    let focused_style = Style::new().foreground(Color::rgb(0, 255, 0));
    let mut el = Element::text("f").style_focused(focused_style);

    let buf = render_to_new_buffer(&el, 2, 1);
    assert_eq!(buf.get(0, 0).unwrap().fg, Rgb::new(255, 255, 255));

    el.focused = true;
    let buf = render_to_new_buffer(&el, 2, 1);
    assert_eq!(buf.get(0, 0).unwrap().fg, Rgb::new(0, 255, 0));
}

#[test]
fn test_wide_characters_occupy_two_cells() {
    let root = Element::text("日x");

    let buf = render_to_new_buffer(&root, 4, 1);

    assert_eq!(buf.get(0, 0).unwrap().char, '日');
    assert!(buf.get(1, 0).unwrap().wide_continuation);
    assert_eq!(buf.get(2, 0).unwrap().char, 'x');
    assert_eq!(buf.row_text(0), "日x ");
}
