//! # Detail Panes
//!
//! Text content for the three panes shown under the table in detail mode:
//! General, Request Headers, and Response Headers. Built from a single
//! entry and replaced wholesale whenever the active row changes.
//!
//! [`DetailScroll`] tracks which header pane has focus and how far each one
//! is scrolled. It is reset together with the panes.

use harview_core::{Entry, Page};

use crate::headers::format_headers;

/// Labels of the General pane, in display order.
pub const GENERAL_LABELS: [&str; 4] = [
    "Request URL",
    "Request Method",
    "Status Code",
    "Remote Address",
];

/// Label of the optional General line naming the entry's page.
pub const PAGE_LABEL: &str = "Page";

/// Label of the optional General line carrying the `_error` text.
pub const ERROR_LABEL: &str = "Error";

/// One label/value line of the General pane.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneralField {
    pub label: &'static str,
    pub value: String,
}

/// Rendered contents of the detail panes for one entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DetailPanes {
    pub general: Vec<GeneralField>,
    pub request_headers: String,
    pub response_headers: String,
}

impl DetailPanes {
    /// Build the panes for `entry`.
    ///
    /// The four fixed General lines always come first. A `Page` line follows
    /// when the entry's `pageref` resolves, then an `Error` line when the
    /// response recorded one.
    pub fn for_entry(entry: &Entry, page: Option<&Page>) -> Self {
        let request = &entry.request;
        let response = &entry.response;
        let values = [
            request.url.clone(),
            request.method.clone(),
            format!("{} {}", response.status, response.status_text),
            entry.server_ip_address.clone(),
        ];

        let mut general: Vec<GeneralField> = GENERAL_LABELS
            .into_iter()
            .zip(values)
            .map(|(label, value)| GeneralField { label, value })
            .collect();
        if let Some(page) = page {
            let name = if page.title.is_empty() {
                &page.id
            } else {
                &page.title
            };
            general.push(GeneralField {
                label: PAGE_LABEL,
                value: name.clone(),
            });
        }
        if let Some(message) = response.error_message() {
            general.push(GeneralField {
                label: ERROR_LABEL,
                value: message.to_string(),
            });
        }

        Self {
            general,
            request_headers: format_headers(&request.headers),
            response_headers: format_headers(&response.headers),
        }
    }

    /// Panes with no content (no entry active).
    pub fn is_empty(&self) -> bool {
        self.general.is_empty()
            && self.request_headers.is_empty()
            && self.response_headers.is_empty()
    }
}

// ── Scrolling ─────────────────────────────────────────────────────────────────

/// Header pane that receives scroll keys.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DetailFocus {
    #[default]
    Request,
    Response,
}

/// Focus and vertical scroll offsets (in rendered rows) of the header panes.
///
/// The renderer knows the pane size and clamps each offset to the last full
/// page, writing the clamped value back.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DetailScroll {
    pub focus: DetailFocus,
    pub request: usize,
    pub response: usize,
}

impl DetailScroll {
    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            DetailFocus::Request => DetailFocus::Response,
            DetailFocus::Response => DetailFocus::Request,
        };
    }

    /// Offset of the focused pane.
    pub fn focused_offset(&self) -> usize {
        match self.focus {
            DetailFocus::Request => self.request,
            DetailFocus::Response => self.response,
        }
    }

    fn focused_offset_mut(&mut self) -> &mut usize {
        match self.focus {
            DetailFocus::Request => &mut self.request,
            DetailFocus::Response => &mut self.response,
        }
    }

    /// Scroll the focused pane up. Returns `true` if the offset moved.
    pub fn scroll_up(&mut self, rows: usize) -> bool {
        let offset = self.focused_offset_mut();
        let before = *offset;
        *offset = offset.saturating_sub(rows);
        *offset != before
    }

    /// Scroll the focused pane down.
    pub fn scroll_down(&mut self, rows: usize) {
        let offset = self.focused_offset_mut();
        *offset = offset.saturating_add(rows);
    }
}
