//! # Header Ordering
//!
//! Deterministic display order for header lists. Sorting happens on a
//! working copy of references; the stored list in the document keeps its
//! received order.

use harview_core::Header;

/// Headers ordered by name (byte-wise ascending).
///
/// The sort is stable: repeated names such as `set-cookie` keep their
/// relative input order.
pub fn sorted_headers(headers: &[Header]) -> Vec<&Header> {
    let mut sorted: Vec<&Header> = headers.iter().collect();
    sorted.sort_by(|a, b| a.name.as_bytes().cmp(b.name.as_bytes()));
    sorted
}

/// One `name: value` line per header, in [`sorted_headers`] order.
pub fn format_headers(headers: &[Header]) -> String {
    sorted_headers(headers)
        .into_iter()
        .map(|h| format!("{}: {}", h.name, h.value))
        .collect::<Vec<_>>()
        .join("\n")
}
