//! Display-width aware text formatting for the pull request table.
//!
//! Every width in this module is a terminal column count, not a byte or `char` count: East Asian
//! wide and fullwidth characters occupy two columns.

use crate::constants::ELLIPSIS;
use unicode_width::UnicodeWidthStr;

mod layout;
pub use layout::ColumnWidths;

mod render;
pub use render::{summary_line, DisplayPullRequest, Palette, TableRenderer};

mod time;
pub use time::created_label;

/// Returns the number of terminal columns `text` occupies.
pub fn rendered_width(text: &str) -> usize {
    UnicodeWidthStr::width(text)
}

/// Truncates `text` to at most `max_width` columns, marking the cut with an ellipsis.
///
/// Text that already fits is returned unchanged. Otherwise the longest prefix of at most
/// `max_width - 1` columns is kept and `…` appended. Prefixes are measured with
/// [rendered_width], so a wide character or emoji sequence that would straddle the limit is
/// dropped whole.
pub fn truncate(text: &str, max_width: usize) -> String {
    if rendered_width(text) <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let target_width = max_width - 1;
    let mut end = 0;

    for (idx, ch) in text.char_indices() {
        let next_end = idx + ch.len_utf8();
        if rendered_width(&text[..next_end]) > target_width {
            break;
        }
        end = next_end;
    }

    format!("{}{}", &text[..end], ELLIPSIS)
}

/// Right-pads `text` with spaces until it occupies `width` columns.
///
/// Never truncates: text at or beyond `width` is returned unchanged.
pub fn pad_right(text: &str, width: usize) -> String {
    let current = rendered_width(text);
    if current >= width {
        return text.to_string();
    }
    format!("{}{}", text, " ".repeat(width - current))
}

/// Truncates `text` to `width` columns if needed, then pads it out to exactly `width`.
pub fn fit(text: &str, width: usize) -> String {
    pad_right(&truncate(text, width), width)
}
