//! Custom widgets for the TUI

mod detail_panes;
mod entry_table;
mod footer;

pub use detail_panes::{GeneralPane, HeadersPane};
pub use entry_table::EntryTableView;
pub use footer::Footer;

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Truncate `s` to at most `max_width` terminal columns, appending `…` when
/// truncated.
///
/// Width is measured in display columns, so CJK and emoji in URLs do not
/// overflow their cell.
pub(crate) fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let budget = max_width - 1;
    let mut used = 0;
    let mut out = String::new();
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(c);
    }
    out.push('…');
    out
}

/// Split `s` into rows of at most `max_width` terminal columns.
///
/// An empty string yields one empty row. A single character wider than
/// `max_width` gets a row of its own.
pub(crate) fn wrap_to_width(s: &str, max_width: usize) -> Vec<&str> {
    if max_width == 0 {
        return Vec::new();
    }

    let mut rows = Vec::new();
    let mut start = 0;
    let mut used = 0;
    for (i, c) in s.char_indices() {
        let w = c.width().unwrap_or(0);
        if used + w > max_width && i > start {
            rows.push(&s[start..i]);
            start = i;
            used = 0;
        }
        used += w;
    }
    rows.push(&s[start..]);
    rows
}
