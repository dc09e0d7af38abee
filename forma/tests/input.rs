use std::cell::RefCell;
use std::rc::Rc;

use crossterm::event::{
    Event as CrosstermEvent, KeyCode, KeyEvent, KeyModifiers, MouseEvent, MouseEventKind,
};
use forma::prelude::*;
use forma_dom::element::find_element;
use forma_dom::layout::layout;
use forma_dom::render::render_to_new_buffer;
use forma_dom::{collect_focusable, Element, FocusState, LayoutResult, Rect};

const WIDTH: u16 = 50;
const HEIGHT: u16 = 6;

fn press(code: KeyCode) -> CrosstermEvent {
    CrosstermEvent::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

fn type_text(text: &str) -> Vec<CrosstermEvent> {
    text.chars().map(|c| press(KeyCode::Char(c))).collect()
}

fn click(column: u16, row: u16) -> CrosstermEvent {
    CrosstermEvent::Mouse(MouseEvent {
        kind: MouseEventKind::Down(crossterm::event::MouseButton::Left),
        column,
        row,
        modifiers: KeyModifiers::NONE,
    })
}

fn frame(field: &InputField) -> (Element, LayoutResult) {
    let root = field.element();
    let rects = layout(&root, Rect::from_size(WIDTH, HEIGHT));
    (root, rects)
}

fn dispatch(field: &mut InputField, focus: &mut FocusState, raw: &[CrosstermEvent]) {
    for event in raw {
        let (root, rects) = frame(field);
        for event in focus.process_events(std::slice::from_ref(event), &root, &rects) {
            field.handle_event(&event);
        }
    }
}

fn screen(field: &InputField) -> Vec<String> {
    render_to_new_buffer(&field.element(), WIDTH, HEIGHT).lines()
}

fn recorder() -> (Rc<RefCell<Vec<String>>>, impl FnMut(&ChangeEvent) + 'static) {
    let seen: Rc<RefCell<Vec<String>>> = Rc::default();
    let sink = Rc::clone(&seen);
    (seen, move |e: &ChangeEvent| sink.borrow_mut().push(e.value.clone()))
}

#[test]
fn test_uncontrolled_typing_shows_and_reports_each_step() {
    let (seen, handler) = recorder();
    let mut field = InputField::uncontrolled().label("Name").on_change(handler);
    let mut focus = FocusState::new();

    dispatch(&mut field, &mut focus, &[press(KeyCode::Tab)]);
    assert!(field.is_focused());
    dispatch(&mut field, &mut focus, &type_text("abc"));

    assert_eq!(field.value(), "abc");
    assert_eq!(*seen.borrow(), vec!["a", "ab", "abc"]);
    assert!(screen(&field).iter().any(|l| l.contains("abc")));
}

#[test]
fn test_change_event_targets_the_field() {
    let targets: Rc<RefCell<Vec<String>>> = Rc::default();
    let sink = Rc::clone(&targets);
    let mut field = InputField::uncontrolled()
        .on_change(move |e: &ChangeEvent| sink.borrow_mut().push(e.target.clone()));
    field.insert_char('x');
    assert_eq!(*targets.borrow(), vec![field.id().to_string()]);
}

#[test]
fn test_controlled_ignores_unacknowledged_keystrokes() {
    let (seen, handler) = recorder();
    let mut field = InputField::controlled("fixed").on_change(handler);
    let mut focus = FocusState::new();

    dispatch(&mut field, &mut focus, &[press(KeyCode::Tab)]);
    dispatch(&mut field, &mut focus, &type_text("xy"));
    dispatch(&mut field, &mut focus, &[press(KeyCode::Backspace)]);

    assert_eq!(field.value(), "fixed");
    assert_eq!(*seen.borrow(), vec!["fixedx", "fixedy", "fixe"]);
    assert!(screen(&field).iter().any(|l| l.contains("fixed")));

    field.set_value("from host").unwrap();
    assert!(screen(&field).iter().any(|l| l.contains("from host")));
}

#[test]
fn test_controlled_host_that_accepts_every_change() {
    let latest: Rc<RefCell<Option<String>>> = Rc::default();
    let sink = Rc::clone(&latest);
    let mut field = InputField::controlled("")
        .on_change(move |e: &ChangeEvent| *sink.borrow_mut() = Some(e.value.clone()));
    let mut focus = FocusState::new();

    dispatch(&mut field, &mut focus, &[press(KeyCode::Tab)]);
    let keys = [
        press(KeyCode::Char('h')),
        press(KeyCode::Char('o')),
        press(KeyCode::Left),
        press(KeyCode::Char('l')),
        press(KeyCode::Char('l')),
        press(KeyCode::Home),
        press(KeyCode::Char('>')),
    ];
    for key in keys {
        dispatch(&mut field, &mut focus, &[key]);
        let update = latest.borrow_mut().take();
        if let Some(value) = update {
            field.set_value(value).unwrap();
        }
    }

    assert_eq!(field.value(), ">hllo");
    assert_eq!(field.cursor(), 1);
}

#[test]
fn test_clear_button_click_uncontrolled() {
    let (seen, handler) = recorder();
    let mut field = InputField::with_initial_value("hello").on_change(handler);
    let mut focus = FocusState::new();

    let (_, rects) = frame(&field);
    let Some(rect) = rects.get(&field.clear_id()) else {
        panic!("clear button not laid out");
    };
    dispatch(&mut field, &mut focus, &[click(rect.x, rect.y)]);

    assert_eq!(field.value(), "");
    assert_eq!(*seen.borrow(), vec![""]);
    assert!(find_element(&field.element(), &field.clear_id()).is_none());
}

#[test]
fn test_clear_controlled_reports_without_changing() {
    let (seen, handler) = recorder();
    let mut field = InputField::controlled("keep").on_change(handler);
    assert!(field.clear());
    assert_eq!(field.value(), "keep");
    assert_eq!(*seen.borrow(), vec![""]);
}

#[test]
fn test_disabled_field_cannot_be_focused_or_edited() {
    let (seen, handler) = recorder();
    let mut field = InputField::with_initial_value("locked")
        .disabled(true)
        .on_change(handler);
    let mut focus = FocusState::new();

    assert!(collect_focusable(&field.element()).is_empty());
    dispatch(&mut field, &mut focus, &[press(KeyCode::Tab)]);
    dispatch(&mut field, &mut focus, &[click(2, 1)]);
    dispatch(&mut field, &mut focus, &type_text("zz"));

    assert!(!field.is_focused());
    assert_eq!(focus.focused(), None);
    assert_eq!(field.value(), "locked");
    assert!(seen.borrow().is_empty());
}

#[test]
fn test_error_replaces_helper_when_invalid() {
    let mut field = InputField::uncontrolled()
        .label("Email")
        .helper_text("We never share it")
        .error_message("Email is required");

    let lines = screen(&field);
    assert!(lines.iter().any(|l| l.contains("We never share it")));
    assert!(!lines.iter().any(|l| l.contains("!")));

    field.set_invalid(true);
    let lines = screen(&field);
    assert!(lines.iter().any(|l| l.contains("Email is required")));
    assert!(!lines.iter().any(|l| l.contains("We never share it")));
    assert!(lines.iter().any(|l| l.trim_end().ends_with('!')));
}

#[test]
fn test_message_line_keeps_height() {
    let mut field = InputField::uncontrolled().label("Name");
    let (root, rects) = frame(&field);
    let before = rects[&root.id].height;

    field.set_helper_text(Some("Shown now".into()));
    let (root, rects) = frame(&field);
    assert_eq!(rects[&root.id].height, before);
}

#[test]
fn test_sizes_set_field_width() {
    for (size, width) in [(InputSize::Sm, 20), (InputSize::Md, 30), (InputSize::Lg, 40)] {
        let field = InputField::uncontrolled().size(size);
        let (_, rects) = frame(&field);
        assert_eq!(rects[field.id().as_str()].width, width);
    }
}

#[test]
fn test_variants_decorate_differently() {
    let outlined = screen(&InputField::with_initial_value("v"));
    assert!(outlined[0].starts_with('┌'));

    let ghost = screen(&InputField::with_initial_value("v").variant(Variant::Ghost));
    assert!(ghost[0].starts_with(" v"));

    let filled = InputField::with_initial_value("v").variant(Variant::Filled);
    let Some(text_box) = find_element(&filled.element(), filled.id().as_str()).cloned() else {
        panic!("text box missing");
    };
    assert!(text_box.style.background.is_some());
}

#[test]
fn test_placeholder_shown_only_when_empty() {
    let mut field = InputField::uncontrolled().placeholder("Type here");
    assert!(screen(&field).iter().any(|l| l.contains("Type here")));
    field.insert_char('a');
    assert!(!screen(&field).iter().any(|l| l.contains("Type here")));
}

#[test]
fn test_mode_is_fixed() {
    let mut field = InputField::uncontrolled();
    assert_eq!(field.mode(), InputMode::Uncontrolled);
    assert_eq!(field.set_value("x"), Err(InputError::Uncontrolled));
    assert_eq!(InputField::controlled("x").mode(), InputMode::Controlled);
}
