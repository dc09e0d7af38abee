//! Input field element tree.

use forma_dom::text::char_width;
use forma_dom::{Border, Edges, Element, Role, Size, Style, TextStyle};

use super::{InputField, Variant};

const CLEAR_GLYPH: &str = "×";
const ERROR_GLYPH: &str = "!";

impl InputField {
    /// Describe the current state as an element tree.
    ///
    /// The text box element carries the field id, so it receives focus and
    /// key events directly. The message line is always present, empty when
    /// there is nothing to say.
    pub fn element(&self) -> Element {
        let theme = &self.theme;
        let mut wrapper = Element::col().id(format!("{}-wrapper", self.id()));

        if let Some(label) = self.label_text() {
            let style = if self.is_disabled() {
                Style::new().foreground(theme.muted).dim()
            } else if self.label_floating() {
                Style::new()
                    .foreground(if self.is_invalid() {
                        theme.error
                    } else {
                        theme.primary
                    })
                    .bold()
            } else {
                Style::new().foreground(theme.muted)
            };
            wrapper = wrapper.child(
                Element::text(label)
                    .id(format!("{}-label", self.id()))
                    .role(Role::Label)
                    .data("for", self.id().as_str())
                    .style(style),
            );
        }

        let mut line = Element::row()
            .id(format!("{}-line", self.id()))
            .gap(1)
            .child(self.field_element());
        if self.clear_visible() {
            line = line.child(
                Element::text(CLEAR_GLYPH)
                    .id(self.clear_id())
                    .role(Role::Button)
                    .clickable(true)
                    .style(Style::new().foreground(theme.muted))
                    .data("aria-label", "Clear input"),
            );
        }
        if self.is_invalid() {
            line = line.child(
                Element::text(ERROR_GLYPH)
                    .id(format!("{}-error-icon", self.id()))
                    .style(Style::new().foreground(theme.error).bold())
                    .data("aria-hidden", "true"),
            );
        }
        wrapper = wrapper.child(line);

        let message = self.message();
        let message_style = match message {
            Some(m) if m.is_error() => Style::new().foreground(theme.error),
            _ => Style::new().foreground(theme.muted),
        };
        wrapper.child(
            Element::text(message.map_or("", |m| m.text()))
                .id(self.message_id())
                .role(Role::Status)
                .style(message_style),
        )
    }

    fn field_element(&self) -> Element {
        let theme = &self.theme;
        let accent = if self.is_invalid() {
            theme.error
        } else {
            theme.primary
        };
        let idle = if self.is_invalid() {
            theme.error
        } else {
            theme.border
        };

        let (style, focused_style) = match self.current_variant() {
            Variant::Outlined => (
                Style::new().border(Border::Single).foreground(idle),
                Style::new().foreground(accent),
            ),
            Variant::Filled => (
                Style::new().background(theme.surface).foreground(idle),
                Style::new().background(theme.surface.lighten(0.05)).foreground(accent),
            ),
            Variant::Ghost => (
                Style::new().foreground(idle),
                Style::new().foreground(accent),
            ),
        };

        let mut field = Element::row()
            .id(self.id().as_str())
            .role(Role::TextBox)
            .width(Size::Fixed(self.current_size().width()))
            .padding(Edges::horizontal(1))
            .style(style)
            .style_focused(focused_style)
            .focusable(true)
            .clickable(true)
            .captures_input(true)
            .disabled(self.is_disabled())
            .data("aria-describedby", self.message_id());
        if let Some(label) = self.label_text() {
            field = field.data("aria-label", label);
        }
        if self.is_invalid() {
            field = field.data("aria-invalid", "true");
        }
        if !self.placeholder_text().is_empty() {
            field = field.data("placeholder", self.placeholder_text());
        }
        if self.is_disabled() {
            field = field.data("aria-disabled", "true");
        }

        let inner = self.inner_width();
        field.children(self.text_spans(inner))
    }

    /// Cells available for text inside the field.
    fn inner_width(&self) -> usize {
        let border = match self.current_variant() {
            Variant::Outlined => Border::Single.thickness() * 2,
            _ => 0,
        };
        self.current_size().width().saturating_sub(2 + border) as usize
    }

    /// Text split around the cursor, scrolled so the cursor stays visible.
    fn text_spans(&self, width: usize) -> Vec<Element> {
        let theme = &self.theme;
        let showing_placeholder = self.value().is_empty();
        let text = if showing_placeholder {
            self.placeholder_text()
        } else {
            self.value()
        };

        let mut text_style = TextStyle::new();
        if showing_placeholder || self.is_disabled() {
            text_style = text_style.dim();
        }
        if self.current_variant() == Variant::Ghost {
            text_style = text_style.underline();
        }
        let fg = if showing_placeholder || self.is_disabled() {
            theme.muted
        } else {
            theme.text
        };
        let span_style = Style::new().foreground(fg).text_style(text_style);
        let span = |s: String, style: Style| Element::text(s).style(style);

        let chars: Vec<char> = text.chars().collect();
        if !self.is_focused() {
            let mut used = 0;
            let visible: String = chars
                .iter()
                .take_while(|&&c| {
                    used += char_width(c);
                    used <= width
                })
                .collect();
            return vec![span(visible, span_style)];
        }

        let cursor = if showing_placeholder {
            0
        } else {
            self.cursor().min(chars.len())
        };

        // Window in display cells: the cursor cell first, then as much text
        // before it as fits, then text after it.
        let cursor_width = chars.get(cursor).map_or(1, |&c| char_width(c).max(1));
        let mut budget = width.saturating_sub(cursor_width);
        let mut start = cursor;
        while start > 0 && char_width(chars[start - 1]) <= budget {
            budget -= char_width(chars[start - 1]);
            start -= 1;
        }
        let mut end = (cursor + 1).min(chars.len());
        while end < chars.len() && char_width(chars[end]) <= budget {
            budget -= char_width(chars[end]);
            end += 1;
        }

        let before: String = chars[start..cursor].iter().collect();
        let (at, after) = if cursor < end {
            (
                chars[cursor].to_string(),
                chars[cursor + 1..end].iter().collect::<String>(),
            )
        } else {
            (" ".to_string(), String::new())
        };

        let cursor_style = span_style.clone().reverse();
        vec![
            span(before, span_style.clone()),
            span(at, cursor_style),
            span(after, span_style),
        ]
    }
}
