//! Default forma theme with dark purple accents.

use forma_dom::Color;

/// Colors used by the built-in components.
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub background: Color,
    pub surface: Color,
    pub border: Color,
    pub primary: Color,
    pub text: Color,
    pub muted: Color,
    pub error: Color,
    /// Row highlight for selected table rows.
    pub selection: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            background: Color::oklch(0.18, 0.02, 290.0),
            surface: Color::oklch(0.25, 0.03, 290.0),
            border: Color::oklch(0.42, 0.03, 290.0),
            primary: Color::oklch(0.68, 0.19, 295.0),
            text: Color::oklch(0.92, 0.01, 290.0),
            muted: Color::oklch(0.62, 0.02, 290.0),
            error: Color::oklch(0.65, 0.2, 25.0),
            selection: Color::oklch(0.45, 0.1, 295.0),
        }
    }
}
