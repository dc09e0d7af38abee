//! Events delivered to widgets, already resolved to a target element id.

use crossterm::event::{KeyCode, KeyModifiers, MouseButton as CtMouseButton};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Key press, addressed to the focused element (if any).
    Key {
        target: Option<String>,
        key: Key,
        modifiers: Modifiers,
    },
    /// Mouse press on the deepest clickable element under the pointer.
    Click {
        target: Option<String>,
        x: u16,
        y: u16,
        button: MouseButton,
    },
    Focus { target: String },
    Blur { target: String },
    Resize { width: u16, height: u16 },
}

impl Event {
    /// Element the event is addressed to, if any.
    pub fn target(&self) -> Option<&str> {
        match self {
            Event::Key { target, .. } | Event::Click { target, .. } => target.as_deref(),
            Event::Focus { target } | Event::Blur { target } => Some(target),
            Event::Resize { .. } => None,
        }
    }

    /// Key press on `target` without modifiers.
    pub fn key(target: impl Into<String>, key: Key) -> Self {
        Event::Key {
            target: Some(target.into()),
            key,
            modifiers: Modifiers::new(),
        }
    }

    /// Left click on `target`, position unknown.
    pub fn click(target: impl Into<String>) -> Self {
        Event::Click {
            target: Some(target.into()),
            x: 0,
            y: 0,
            button: MouseButton::Left,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Char(char),
    Enter,
    Backspace,
    Delete,
    Tab,
    BackTab,
    Escape,
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    PageUp,
    PageDown,
    Insert,
    F(u8),
    /// Keys the toolkit does not model (media keys, lone modifiers, ...).
    Unknown,
}

impl Key {
    /// Enter or Space: the keys that press buttons, checkboxes and headers.
    pub fn activates(self) -> bool {
        matches!(self, Key::Enter | Key::Char(' '))
    }
}

impl From<KeyCode> for Key {
    fn from(code: KeyCode) -> Self {
        match code {
            KeyCode::Char(c) => Key::Char(c),
            KeyCode::F(n) => Key::F(n),
            KeyCode::Enter => Key::Enter,
            KeyCode::Esc => Key::Escape,
            KeyCode::Tab => Key::Tab,
            KeyCode::BackTab => Key::BackTab,
            KeyCode::Backspace => Key::Backspace,
            KeyCode::Delete => Key::Delete,
            KeyCode::Insert => Key::Insert,
            KeyCode::Left => Key::Left,
            KeyCode::Right => Key::Right,
            KeyCode::Up => Key::Up,
            KeyCode::Down => Key::Down,
            KeyCode::Home => Key::Home,
            KeyCode::End => Key::End,
            KeyCode::PageUp => Key::PageUp,
            KeyCode::PageDown => Key::PageDown,
            _ => Key::Unknown,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
}

impl Modifiers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shift() -> Self {
        Self {
            shift: true,
            ..Self::default()
        }
    }

    pub fn ctrl() -> Self {
        Self {
            ctrl: true,
            ..Self::default()
        }
    }

    pub fn alt() -> Self {
        Self {
            alt: true,
            ..Self::default()
        }
    }

    /// No modifier held.
    pub fn none(&self) -> bool {
        *self == Self::default()
    }
}

impl From<KeyModifiers> for Modifiers {
    fn from(mods: KeyModifiers) -> Self {
        Self {
            shift: mods.contains(KeyModifiers::SHIFT),
            ctrl: mods.contains(KeyModifiers::CONTROL),
            alt: mods.contains(KeyModifiers::ALT),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

impl From<CtMouseButton> for MouseButton {
    fn from(button: CtMouseButton) -> Self {
        match button {
            CtMouseButton::Left => MouseButton::Left,
            CtMouseButton::Right => MouseButton::Right,
            CtMouseButton::Middle => MouseButton::Middle,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn activation_keys() {
        assert!(Key::Enter.activates());
        assert!(Key::Char(' ').activates());
        assert!(!Key::Char('x').activates());
        assert!(!Key::Escape.activates());
    }

    #[test]
    fn modifiers_from_crossterm() {
        let mods: Modifiers = (KeyModifiers::CONTROL | KeyModifiers::SHIFT).into();
        assert!(mods.ctrl && mods.shift && !mods.alt);
        assert!(!mods.none());
        assert!(Modifiers::from(KeyModifiers::NONE).none());
    }

    #[test]
    fn unmodelled_keys_are_unknown() {
        assert_eq!(Key::from(KeyCode::CapsLock), Key::Unknown);
        assert_eq!(Key::from(KeyCode::Esc), Key::Escape);
    }

    #[test]
    fn target_of_each_event() {
        assert_eq!(Event::click("a").target(), Some("a"));
        assert_eq!(
            Event::Focus {
                target: "b".into()
            }
            .target(),
            Some("b")
        );
        assert_eq!(
            Event::Resize {
                width: 1,
                height: 1
            }
            .target(),
            None
        );
    }
}
