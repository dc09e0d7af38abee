//! Input field state and editing.

use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};

use log::debug;

use super::{InputSize, ValidationMessage, Variant};
use crate::error::InputError;
use crate::theme::Theme;

/// Global counter for generating unique input IDs.
static INPUT_ID_COUNTER: AtomicUsize = AtomicUsize::new(0);

/// A unique identifier for an input field. Doubles as the id of the text box
/// element, so focus and key events address the field directly.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct InputId(String);

impl InputId {
    fn next() -> Self {
        let id = INPUT_ID_COUNTER.fetch_add(1, Ordering::SeqCst);
        Self(format!("__input_{id}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for InputId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Who owns the text. Fixed when the field is constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// The host owns the value and supplies it through `set_value`.
    Controlled,
    /// The field owns its buffer.
    Uncontrolled,
}

/// A proposed or performed text change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeEvent {
    /// Id of the field that changed.
    pub target: String,
    /// The new text.
    pub value: String,
}

type ChangeHandler = Box<dyn FnMut(&ChangeEvent)>;

/// Single-line text input.
///
/// In controlled mode every edit is only reported through `on_change`; the
/// displayed text changes when the host calls [`InputField::set_value`]. In
/// uncontrolled mode the field applies the edit to its own buffer and then
/// reports it.
pub struct InputField {
    id: InputId,
    mode: InputMode,
    value: String,
    /// Cursor position in chars.
    cursor: usize,
    /// Last text proposed in controlled mode, with the cursor it implies.
    pending: Option<(String, usize)>,
    focused: bool,
    label: Option<String>,
    placeholder: String,
    helper_text: Option<String>,
    error_message: Option<String>,
    disabled: bool,
    invalid: bool,
    variant: Variant,
    size: InputSize,
    pub(super) theme: Theme,
    on_change: Option<ChangeHandler>,
}

impl InputField {
    fn with_mode(mode: InputMode, value: String) -> Self {
        let cursor = value.chars().count();
        Self {
            id: InputId::next(),
            mode,
            value,
            cursor,
            pending: None,
            focused: false,
            label: None,
            placeholder: String::new(),
            helper_text: None,
            error_message: None,
            disabled: false,
            invalid: false,
            variant: Variant::default(),
            size: InputSize::default(),
            theme: Theme::default(),
            on_change: None,
        }
    }

    /// A field whose text is owned by the host.
    pub fn controlled(value: impl Into<String>) -> Self {
        Self::with_mode(InputMode::Controlled, value.into())
    }

    /// A field that owns its text, starting empty.
    pub fn uncontrolled() -> Self {
        Self::with_mode(InputMode::Uncontrolled, String::new())
    }

    /// A field that owns its text, seeded with `initial`.
    pub fn with_initial_value(initial: impl Into<String>) -> Self {
        Self::with_mode(InputMode::Uncontrolled, initial.into())
    }

    // -------------------------------------------------------------------------
    // Builder methods
    // -------------------------------------------------------------------------

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    pub fn helper_text(mut self, text: impl Into<String>) -> Self {
        self.helper_text = Some(text.into());
        self
    }

    /// Shown instead of the helper text while the field is invalid.
    pub fn error_message(mut self, text: impl Into<String>) -> Self {
        self.error_message = Some(text.into());
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn invalid(mut self, invalid: bool) -> Self {
        self.invalid = invalid;
        self
    }

    pub fn variant(mut self, variant: Variant) -> Self {
        self.variant = variant;
        self
    }

    pub fn size(mut self, size: InputSize) -> Self {
        self.size = size;
        self
    }

    pub fn theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Called with every text change, in both modes.
    pub fn on_change(mut self, handler: impl FnMut(&ChangeEvent) + 'static) -> Self {
        self.on_change = Some(Box::new(handler));
        self
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    pub fn id(&self) -> &InputId {
        &self.id
    }

    /// Id of the clear button element.
    pub fn clear_id(&self) -> String {
        format!("{}-clear", self.id)
    }

    /// Id of the element holding the helper or error message.
    pub fn message_id(&self) -> String {
        format!("{}-message", self.id)
    }

    pub fn mode(&self) -> InputMode {
        self.mode
    }

    pub fn is_controlled(&self) -> bool {
        self.mode == InputMode::Controlled
    }

    /// The displayed text.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Cursor position in chars.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    pub fn is_invalid(&self) -> bool {
        self.invalid
    }

    pub fn label_text(&self) -> Option<&str> {
        self.label.as_deref()
    }

    pub fn placeholder_text(&self) -> &str {
        &self.placeholder
    }

    pub fn current_variant(&self) -> Variant {
        self.variant
    }

    pub fn current_size(&self) -> InputSize {
        self.size
    }

    /// Whether the clear action is offered.
    pub fn clear_visible(&self) -> bool {
        !self.disabled && !self.value.is_empty()
    }

    /// Whether the label is raised: the field is focused or holds text.
    pub fn label_floating(&self) -> bool {
        self.focused || !self.value.is_empty()
    }

    /// The message under the field. An error message needs `invalid` to show.
    pub fn message(&self) -> Option<ValidationMessage<'_>> {
        match (&self.error_message, &self.helper_text) {
            (Some(error), _) if self.invalid => Some(ValidationMessage::Error(error)),
            (_, Some(helper)) => Some(ValidationMessage::Helper(helper)),
            _ => None,
        }
    }

    // -------------------------------------------------------------------------
    // Setters
    // -------------------------------------------------------------------------

    /// Supply the host's value to a controlled field.
    ///
    /// If `value` is the text this field last proposed, the cursor lands
    /// where the edit left it; otherwise it is kept in range.
    pub fn set_value(&mut self, value: impl Into<String>) -> Result<(), InputError> {
        if self.mode == InputMode::Uncontrolled {
            debug!("{}: set_value on uncontrolled field rejected", self.id);
            return Err(InputError::Uncontrolled);
        }
        let value = value.into();
        let len = value.chars().count();
        self.cursor = match self.pending.take() {
            Some((proposed, cursor)) if proposed == value => cursor,
            _ => self.cursor.min(len),
        };
        self.value = value;
        Ok(())
    }

    pub fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    /// Disabling also drops focus.
    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
        if disabled {
            self.focused = false;
        }
    }

    pub fn set_invalid(&mut self, invalid: bool) {
        self.invalid = invalid;
    }

    pub fn set_error_message(&mut self, text: Option<String>) {
        self.error_message = text;
    }

    pub fn set_helper_text(&mut self, text: Option<String>) {
        self.helper_text = text;
    }

    // -------------------------------------------------------------------------
    // Editing
    // -------------------------------------------------------------------------

    /// Insert `c` at the cursor. Control characters are rejected.
    pub fn insert_char(&mut self, c: char) -> bool {
        if self.disabled || c.is_control() {
            return false;
        }
        let cursor = self.cursor.min(self.value.chars().count());
        let mut next = self.value.clone();
        next.insert(byte_index(&next, cursor), c);
        self.propose(next, cursor + 1);
        true
    }

    /// Delete the char before the cursor (Backspace).
    pub fn delete_char_before(&mut self) -> bool {
        if self.disabled || self.cursor == 0 {
            return false;
        }
        let cursor = self.cursor.min(self.value.chars().count());
        let mut next = self.value.clone();
        let start = byte_index(&next, cursor - 1);
        next.remove(start);
        self.propose(next, cursor - 1);
        true
    }

    /// Delete the char under the cursor (Delete).
    pub fn delete_char_at(&mut self) -> bool {
        if self.disabled || self.cursor >= self.value.chars().count() {
            return false;
        }
        let mut next = self.value.clone();
        let start = byte_index(&next, self.cursor);
        next.remove(start);
        let cursor = self.cursor;
        self.propose(next, cursor);
        true
    }

    pub fn cursor_left(&mut self) {
        if !self.disabled {
            self.cursor = self.cursor.saturating_sub(1);
        }
    }

    pub fn cursor_right(&mut self) {
        if !self.disabled {
            self.cursor = (self.cursor + 1).min(self.value.chars().count());
        }
    }

    pub fn cursor_home(&mut self) {
        if !self.disabled {
            self.cursor = 0;
        }
    }

    pub fn cursor_end(&mut self) {
        if !self.disabled {
            self.cursor = self.value.chars().count();
        }
    }

    /// Clear the text, as the clear button does.
    ///
    /// Returns false when the action is not offered (disabled or empty).
    pub fn clear(&mut self) -> bool {
        if !self.clear_visible() {
            return false;
        }
        debug!("{}: cleared", self.id);
        self.propose(String::new(), 0);
        true
    }

    fn propose(&mut self, next: String, cursor: usize) {
        match self.mode {
            InputMode::Uncontrolled => {
                self.value.clone_from(&next);
                self.cursor = cursor;
            }
            InputMode::Controlled => {
                self.pending = Some((next.clone(), cursor));
            }
        }
        if let Some(handler) = self.on_change.as_mut() {
            handler(&ChangeEvent {
                target: self.id.to_string(),
                value: next,
            });
        }
    }
}

/// Byte offset of char index `index`, or the end of `s`.
fn byte_index(s: &str, index: usize) -> usize {
    s.char_indices().nth(index).map_or(s.len(), |(byte, _)| byte)
}

impl fmt::Debug for InputField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InputField")
            .field("id", &self.id)
            .field("mode", &self.mode)
            .field("value", &self.value)
            .field("cursor", &self.cursor)
            .field("focused", &self.focused)
            .field("disabled", &self.disabled)
            .field("invalid", &self.invalid)
            .finish_non_exhaustive()
    }
}
