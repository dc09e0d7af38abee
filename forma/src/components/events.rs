//! Component event handling types and traits.
//!
//! Each component handles the events targeted at its own elements, keeping
//! the host's event loop a thin dispatcher.

use forma_dom::{Event, Key, Modifiers};

/// Result of handling an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Event was ignored, try other handlers.
    Ignored,
    /// Event was consumed, stop propagation.
    Consumed,
}

impl EventResult {
    /// Check if the event was handled.
    pub fn is_handled(&self) -> bool {
        matches!(self, EventResult::Consumed)
    }
}

/// Trait for components that can handle events.
///
/// All hooks default to `EventResult::Ignored`, so components only implement
/// the events they care about. `handle_event` routes a targeted
/// [`Event`] to the matching hook; untargeted events are ignored.
pub trait ComponentEvents {
    /// Route an event to the matching hook.
    fn handle_event(&mut self, event: &Event) -> EventResult {
        match event {
            Event::Key {
                target: Some(target),
                key,
                modifiers,
            } => self.on_key(target, *key, *modifiers),
            Event::Click {
                target: Some(target),
                ..
            } => self.on_click(target),
            Event::Focus { target } => self.on_focus(target),
            Event::Blur { target } => self.on_blur(target),
            _ => EventResult::Ignored,
        }
    }

    /// Handle a click on the element with id `target`.
    fn on_click(&mut self, _target: &str) -> EventResult {
        EventResult::Ignored
    }

    /// Handle a key press while the element with id `target` has focus.
    fn on_key(&mut self, _target: &str, _key: Key, _modifiers: Modifiers) -> EventResult {
        EventResult::Ignored
    }

    /// Handle focus arriving at `target`.
    fn on_focus(&mut self, _target: &str) -> EventResult {
        EventResult::Ignored
    }

    /// Handle focus leaving `target`.
    fn on_blur(&mut self, _target: &str) -> EventResult {
        EventResult::Ignored
    }
}
