//! Visual variants, sizes and the validation message.

/// Field decoration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Variant {
    /// Solid surface background, no border.
    Filled,
    /// Single-line border around the field.
    #[default]
    Outlined,
    /// No decoration beyond an underline.
    Ghost,
}

/// Field width preset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputSize {
    Sm,
    #[default]
    Md,
    Lg,
}

impl InputSize {
    /// Outer width of the field in cells.
    pub fn width(self) -> u16 {
        match self {
            InputSize::Sm => 20,
            InputSize::Md => 30,
            InputSize::Lg => 40,
        }
    }
}

/// Text shown under the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationMessage<'a> {
    Error(&'a str),
    Helper(&'a str),
}

impl<'a> ValidationMessage<'a> {
    pub fn text(&self) -> &'a str {
        match self {
            ValidationMessage::Error(text) | ValidationMessage::Helper(text) => text,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, ValidationMessage::Error(_))
    }
}
