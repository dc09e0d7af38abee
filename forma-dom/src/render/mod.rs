use crate::buffer::{Buffer, Cell};
use crate::element::{Content, Element};
use crate::layout::{LayoutResult, Rect};
use crate::text::{char_width, display_width, truncate_to_width};
use crate::types::{Border, Rgb, Style};

const DEFAULT_FG: Rgb = Rgb::new(255, 255, 255);

pub fn render_to_buffer(element: &Element, layout: &LayoutResult, buf: &mut Buffer) {
    render_element(element, layout, buf, DEFAULT_FG);
}

fn render_element(element: &Element, layout: &LayoutResult, buf: &mut Buffer, inherited_fg: Rgb) {
    let Some(rect) = layout.get(&element.id).copied() else {
        return;
    };

    let style = element.effective_style();
    let fg = style
        .foreground
        .as_ref()
        .map(|c| c.to_rgb())
        .unwrap_or(inherited_fg);

    if let Some(bg) = &style.background {
        buf.paint_background(rect, bg.to_rgb());
    }

    render_border(&style, rect, fg, buf);

    match &element.content {
        Content::None => {}
        Content::Text(text) => render_text(text, element, &style, rect, fg, buf),
        Content::Children(children) => {
            for child in children {
                render_element(child, layout, buf, fg);
            }
        }
    }
}

fn render_text(text: &str, element: &Element, style: &Style, rect: Rect, fg: Rgb, buf: &mut Buffer) {
    let inner = element.content_rect(rect);
    if inner.is_empty() {
        return;
    }

    let explicit_bg = style.background.as_ref().map(|c| c.to_rgb());

    for (row, line) in text.split('\n').enumerate() {
        let y = inner.y + row as u16;
        if y >= inner.bottom() {
            break;
        }

        let line = if display_width(line) > inner.width as usize {
            truncate_to_width(line, inner.width as usize)
        } else {
            line.to_string()
        };

        let mut x = inner.x;
        for ch in line.chars() {
            let width = char_width(ch) as u16;
            if width == 0 {
                continue;
            }
            if x + width > inner.right() {
                break;
            }

            // Preserve existing background if no explicit background set
            let bg = explicit_bg
                .unwrap_or_else(|| buf.get(x, y).map(|c| c.bg).unwrap_or_default());

            buf.put(x, y, Cell::glyph(ch, fg, bg, style.text_style));
            if width == 2 {
                buf.put(x + 1, y, Cell::continuation(fg, bg));
            }
            x += width;
        }
    }
}

fn render_border(style: &Style, rect: Rect, fg: Rgb, buf: &mut Buffer) {
    let (tl, tr, bl, br, h, v) = match style.border {
        Border::None => return,
        Border::Single => ('┌', '┐', '└', '┘', '─', '│'),
        Border::Rounded => ('╭', '╮', '╰', '╯', '─', '│'),
    };

    if rect.width < 2 || rect.height < 2 {
        return;
    }

    set_char(buf, rect.x, rect.y, tl, fg);
    set_char(buf, rect.right() - 1, rect.y, tr, fg);
    set_char(buf, rect.x, rect.bottom() - 1, bl, fg);
    set_char(buf, rect.right() - 1, rect.bottom() - 1, br, fg);

    for x in (rect.x + 1)..(rect.right() - 1) {
        set_char(buf, x, rect.y, h, fg);
        set_char(buf, x, rect.bottom() - 1, h, fg);
    }

    for y in (rect.y + 1)..(rect.bottom() - 1) {
        set_char(buf, rect.x, y, v, fg);
        set_char(buf, rect.right() - 1, y, v, fg);
    }
}

fn set_char(buf: &mut Buffer, x: u16, y: u16, ch: char, fg: Rgb) {
    if let Some(cell) = buf.get_mut(x, y) {
        cell.char = ch;
        cell.fg = fg;
        cell.wide_continuation = false;
    }
}

/// Lay out and paint `root` into a fresh buffer of the given size.
pub fn render_to_new_buffer(root: &Element, width: u16, height: u16) -> Buffer {
    let layout = crate::layout::layout(root, Rect::from_size(width, height));
    let mut buf = Buffer::new(width, height);
    render_to_buffer(root, &layout, &mut buf);
    buf
}
