//! Visual style: colors, border and text attributes.

use super::Color;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Border {
    #[default]
    None,
    Single,
    Rounded,
}

impl Border {
    /// Cells consumed on each side.
    pub const fn thickness(&self) -> u16 {
        match self {
            Border::None => 0,
            Border::Single | Border::Rounded => 1,
        }
    }
}

/// Terminal text attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TextStyle {
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
    pub dim: bool,
    pub reverse: bool,
}

impl TextStyle {
    pub const fn new() -> Self {
        Self {
            bold: false,
            italic: false,
            underline: false,
            dim: false,
            reverse: false,
        }
    }

    pub const fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub const fn underline(mut self) -> Self {
        self.underline = true;
        self
    }

    pub const fn dim(mut self) -> Self {
        self.dim = true;
        self
    }

    pub const fn reverse(mut self) -> Self {
        self.reverse = true;
        self
    }

    /// Attributes set in either.
    pub const fn union(self, other: TextStyle) -> Self {
        Self {
            bold: self.bold || other.bold,
            italic: self.italic || other.italic,
            underline: self.underline || other.underline,
            dim: self.dim || other.dim,
            reverse: self.reverse || other.reverse,
        }
    }
}

/// Unset colors inherit: foreground from the parent, background from
/// whatever was painted underneath.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Style {
    pub background: Option<Color>,
    pub foreground: Option<Color>,
    pub border: Border,
    pub text_style: TextStyle,
}

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn background(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }

    pub fn foreground(mut self, color: Color) -> Self {
        self.foreground = Some(color);
        self
    }

    pub fn border(mut self, border: Border) -> Self {
        self.border = border;
        self
    }

    pub fn text_style(mut self, text_style: TextStyle) -> Self {
        self.text_style = text_style;
        self
    }

    pub fn bold(mut self) -> Self {
        self.text_style = self.text_style.bold();
        self
    }

    pub fn underline(mut self) -> Self {
        self.text_style = self.text_style.underline();
        self
    }

    pub fn dim(mut self) -> Self {
        self.text_style = self.text_style.dim();
        self
    }

    pub fn reverse(mut self) -> Self {
        self.text_style = self.text_style.reverse();
        self
    }

    /// `top` drawn over `self`: colors and border from `top` where set,
    /// text attributes combined.
    pub fn overlay(&self, top: &Style) -> Style {
        Style {
            background: top.background.or(self.background),
            foreground: top.foreground.or(self.foreground),
            border: match top.border {
                Border::None => self.border,
                border => border,
            },
            text_style: self.text_style.union(top.text_style),
        }
    }
}
