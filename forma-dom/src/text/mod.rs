use unicode_width::UnicodeWidthChar;
use unicode_width::UnicodeWidthStr;

pub fn display_width(s: &str) -> usize {
    s.width()
}

pub fn char_width(c: char) -> usize {
    c.width().unwrap_or(0)
}

/// Widest line of a possibly multi-line string.
pub fn block_width(s: &str) -> usize {
    s.split('\n').map(display_width).max().unwrap_or(0)
}

pub fn line_count(s: &str) -> usize {
    s.split('\n').count()
}

pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    if display_width(s) <= max_width {
        return s.to_string();
    }

    if max_width == 0 {
        return String::new();
    }

    let ellipsis = '…';
    let target_width = max_width - 1;

    let mut result = String::new();
    let mut width = 0;

    for ch in s.chars() {
        let ch_width = char_width(ch);
        if width + ch_width > target_width {
            break;
        }
        result.push(ch);
        width += ch_width;
    }

    result.push(ellipsis);
    result
}

/// Pad with spaces on the right up to `width` cells, truncating when longer.
pub fn pad_to_width(s: &str, width: usize) -> String {
    let truncated = truncate_to_width(s, width);
    let fill = width.saturating_sub(display_width(&truncated));
    let mut out = truncated;
    out.push_str(&" ".repeat(fill));
    out
}
