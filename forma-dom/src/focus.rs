use crossterm::event::{Event as CrosstermEvent, KeyEventKind, MouseEventKind};

use crate::element::{find_element, find_element_mut, walk, Element};
use crate::event::{Event, Key, Modifiers};
use crate::hit::{hit_test, hit_test_focusable};
use crate::layout::LayoutResult;

/// Tracks which element is currently focused and processes events.
#[derive(Debug, Default)]
pub struct FocusState {
    focused: Option<String>,
}

impl FocusState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the currently focused element ID.
    pub fn focused(&self) -> Option<&str> {
        self.focused.as_deref()
    }

    /// Programmatically focus an element by ID.
    /// Returns true if focus changed.
    pub fn focus(&mut self, id: &str) -> bool {
        if self.focused.as_deref() == Some(id) {
            return false;
        }
        self.focused = Some(id.to_string());
        true
    }

    /// Clear focus.
    /// Returns true if there was something focused.
    pub fn blur(&mut self) -> bool {
        self.focused.take().is_some()
    }

    /// Focus the next focusable element (Tab navigation).
    /// Returns the newly focused element ID if focus changed.
    pub fn focus_next(&mut self, root: &Element) -> Option<String> {
        let focusable = collect_focusable(root);
        if focusable.is_empty() {
            return None;
        }

        let new_focus = match self.current_index(&focusable) {
            Some(i) => focusable[(i + 1) % focusable.len()].clone(),
            None => focusable[0].clone(),
        };
        self.move_to(new_focus)
    }

    /// Focus the previous focusable element (Shift+Tab navigation).
    /// Returns the newly focused element ID if focus changed.
    pub fn focus_prev(&mut self, root: &Element) -> Option<String> {
        let focusable = collect_focusable(root);
        if focusable.is_empty() {
            return None;
        }

        let last = focusable.len() - 1;
        let new_focus = match self.current_index(&focusable) {
            Some(0) | None => focusable[last].clone(),
            Some(i) => focusable[i - 1].clone(),
        };
        self.move_to(new_focus)
    }

    fn current_index(&self, focusable: &[String]) -> Option<usize> {
        let current = self.focused.as_ref()?;
        focusable.iter().position(|id| id == current)
    }

    fn move_to(&mut self, new_focus: String) -> Option<String> {
        if self.focused.as_ref() != Some(&new_focus) {
            self.focused = Some(new_focus.clone());
            Some(new_focus)
        } else {
            None
        }
    }

    /// Drop focus if the focused element vanished from the tree or can no
    /// longer take focus (for example a field that became disabled).
    /// Returns a `Blur` event when focus was dropped.
    pub fn retain_valid(&mut self, root: &Element) -> Option<Event> {
        let id = self.focused.as_ref()?;
        let still_valid = find_element(root, id).is_some_and(|el| el.is_focus_target());
        if still_valid {
            return None;
        }
        log::debug!("[focus] dropping focus from vanished element {id}");
        self.focused.take().map(|target| Event::Blur { target })
    }

    /// Mark the focused element in `root` so its focused style is painted.
    pub fn apply(&self, root: &mut Element) {
        if let Some(id) = &self.focused {
            if let Some(el) = find_element_mut(root, id) {
                el.focused = true;
            }
        }
    }

    /// Process raw crossterm events and produce high-level events.
    pub fn process_events(
        &mut self,
        raw: &[CrosstermEvent],
        root: &Element,
        layout: &LayoutResult,
    ) -> Vec<Event> {
        let mut events = Vec::new();

        for raw_event in raw {
            match raw_event {
                CrosstermEvent::Key(key_event) => {
                    // Only process key press events (not release/repeat on some terminals)
                    if key_event.kind != KeyEventKind::Press {
                        continue;
                    }

                    let key: Key = key_event.code.into();
                    let modifiers: Modifiers = key_event.modifiers.into();

                    if key == Key::Tab || key == Key::BackTab {
                        let old = self.focused.clone();
                        let new = if key == Key::Tab {
                            self.focus_next(root)
                        } else {
                            self.focus_prev(root)
                        };
                        if let Some(new) = new {
                            if let Some(old) = old {
                                events.push(Event::Blur { target: old });
                            }
                            events.push(Event::Focus { target: new });
                        }
                        continue;
                    }

                    events.push(Event::Key {
                        target: self.focused.clone(),
                        key,
                        modifiers,
                    });
                }

                CrosstermEvent::Mouse(mouse_event) => {
                    let MouseEventKind::Down(button) = mouse_event.kind else {
                        continue;
                    };
                    let x = mouse_event.column;
                    let y = mouse_event.row;

                    // Click to focus
                    if let Some(focus_target) = hit_test_focusable(layout, root, x, y) {
                        let old = self.focused.clone();
                        if self.focus(&focus_target) {
                            log::trace!("[focus] click moved focus from {old:?} to {focus_target}");
                            if let Some(old) = old {
                                events.push(Event::Blur { target: old });
                            }
                            events.push(Event::Focus {
                                target: focus_target,
                            });
                        }
                    }

                    events.push(Event::Click {
                        target: hit_test(layout, root, x, y),
                        x,
                        y,
                        button: button.into(),
                    });
                }

                CrosstermEvent::Resize(width, height) => {
                    events.push(Event::Resize {
                        width: *width,
                        height: *height,
                    });
                }

                _ => {}
            }
        }

        events
    }
}

/// IDs of all elements that can take focus, in document order.
pub fn collect_focusable(root: &Element) -> Vec<String> {
    let mut ids = Vec::new();
    walk(root, &mut |el| {
        if el.is_focus_target() {
            ids.push(el.id.clone());
        }
    });
    ids
}
