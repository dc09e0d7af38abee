//! Event handling for the input field.

use forma_dom::{Key, Modifiers};
use log::trace;

use super::InputField;
use crate::components::{ComponentEvents, EventResult};

impl ComponentEvents for InputField {
    fn on_click(&mut self, target: &str) -> EventResult {
        if target == self.clear_id() {
            return if self.clear() {
                EventResult::Consumed
            } else {
                EventResult::Ignored
            };
        }
        if target == self.id().as_str() && !self.is_disabled() {
            return EventResult::Consumed;
        }
        EventResult::Ignored
    }

    fn on_key(&mut self, target: &str, key: Key, modifiers: Modifiers) -> EventResult {
        if target != self.id().as_str() {
            return EventResult::Ignored;
        }
        if self.is_disabled() {
            trace!("{}: key ignored while disabled", self.id());
            return EventResult::Ignored;
        }

        if modifiers.ctrl {
            return match key {
                Key::Char('u') => {
                    self.clear();
                    EventResult::Consumed
                }
                _ => EventResult::Ignored,
            };
        }
        if modifiers.alt {
            return EventResult::Ignored;
        }

        match key {
            Key::Char(c) => {
                self.insert_char(c);
            }
            Key::Backspace => {
                self.delete_char_before();
            }
            Key::Delete => {
                self.delete_char_at();
            }
            Key::Left => self.cursor_left(),
            Key::Right => self.cursor_right(),
            Key::Home => self.cursor_home(),
            Key::End => self.cursor_end(),
            // Escape clears, and falls through to the host when there is nothing to clear
            Key::Escape if self.clear() => {}
            _ => return EventResult::Ignored,
        }
        EventResult::Consumed
    }

    fn on_focus(&mut self, target: &str) -> EventResult {
        if target == self.id().as_str() {
            self.set_focused(true);
            EventResult::Consumed
        } else {
            EventResult::Ignored
        }
    }

    fn on_blur(&mut self, target: &str) -> EventResult {
        if target == self.id().as_str() {
            self.set_focused(false);
            EventResult::Consumed
        } else {
            EventResult::Ignored
        }
    }
}
