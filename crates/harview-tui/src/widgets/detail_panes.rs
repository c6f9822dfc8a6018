//! # Detail Pane Widgets
//!
//! The three panes under the table in detail mode. [`GeneralPane`] renders
//! the label/value summary; [`HeadersPane`] renders pre-sorted
//! `name: value` lines for either direction and scrolls vertically.

use harview_app::GeneralField;
use ratatui::buffer::Buffer;
use ratatui::layout::{Margin, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{
    Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState, StatefulWidget, Widget, Wrap,
};

use super::wrap_to_width;
use crate::theme::styles;

/// Width of the label column in the General pane (characters).
const LABEL_COL_WIDTH: usize = 16;

// ── GeneralPane ───────────────────────────────────────────────────────────────

pub struct GeneralPane<'a> {
    fields: &'a [GeneralField],
}

impl<'a> GeneralPane<'a> {
    pub fn new(fields: &'a [GeneralField]) -> Self {
        Self { fields }
    }
}

impl Widget for GeneralPane<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let lines: Vec<Line> = self
            .fields
            .iter()
            .map(|field| {
                Line::from(vec![
                    Span::styled(
                        format!("{:<width$}", format!("{}:", field.label), width = LABEL_COL_WIDTH),
                        styles::text_muted(),
                    ),
                    Span::styled(field.value.as_str(), styles::text_primary()),
                ])
            })
            .collect();

        Paragraph::new(lines)
            .block(styles::titled_block("General", false))
            .wrap(Wrap { trim: false })
            .render(area, buf);
    }
}

// ── HeadersPane ───────────────────────────────────────────────────────────────

pub struct HeadersPane<'a> {
    title: &'a str,
    /// Newline-separated `name: value` lines, already in display order.
    text: &'a str,
    /// Whether scroll keys go to this pane.
    focused: bool,
}

impl<'a> HeadersPane<'a> {
    pub fn new(title: &'a str, text: &'a str) -> Self {
        Self {
            title,
            text,
            focused: false,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Header lines wrapped to `width`; continuation rows are unstyled.
    fn rows(&self, width: usize) -> Vec<Line<'a>> {
        self.text
            .lines()
            .flat_map(|line| {
                wrap_to_width(line, width)
                    .into_iter()
                    .enumerate()
                    .map(|(i, row)| {
                        if i == 0 {
                            header_line(row)
                        } else {
                            Line::styled(row, styles::text_primary())
                        }
                    })
            })
            .collect()
    }
}

impl StatefulWidget for HeadersPane<'_> {
    /// Index of the first rendered row. Clamped in place so the last row
    /// can reach the bottom of the pane but never scroll above it.
    type State = usize;

    fn render(self, area: Rect, buf: &mut Buffer, offset: &mut usize) {
        let block = styles::titled_block(self.title, self.focused);
        let inner = block.inner(area);
        block.render(area, buf);
        if inner.width == 0 || inner.height == 0 {
            return;
        }

        let rows = self.rows(inner.width as usize);
        let total = rows.len();
        let visible = inner.height as usize;
        *offset = (*offset).min(total.saturating_sub(visible));

        let shown: Vec<Line> = rows.into_iter().skip(*offset).take(visible).collect();
        Paragraph::new(shown).render(inner, buf);

        if total > visible {
            let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
                .begin_symbol(Some("▲"))
                .end_symbol(Some("▼"))
                .track_symbol(Some("│"))
                .thumb_symbol("█");
            let mut scrollbar_state = ScrollbarState::new(total).position(*offset);
            scrollbar.render(
                area.inner(Margin {
                    vertical: 1,
                    horizontal: 0,
                }),
                buf,
                &mut scrollbar_state,
            );
        }
    }
}

impl Widget for HeadersPane<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut offset = 0;
        StatefulWidget::render(self, area, buf, &mut offset);
    }
}

/// Style the name part of a `name: value` line.
fn header_line(line: &str) -> Line<'_> {
    match line.split_once(": ") {
        Some((name, value)) => Line::from(vec![
            Span::styled(name, styles::accent()),
            Span::styled(": ", styles::text_muted()),
            Span::styled(value, styles::text_primary()),
        ]),
        None => Line::styled(line, styles::text_primary()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use harview_app::detail::GENERAL_LABELS;

    fn fields() -> Vec<GeneralField> {
        GENERAL_LABELS
            .into_iter()
            .zip(["https://a.test/x", "GET", "200 OK", "10.1.2.3"])
            .map(|(label, value)| GeneralField {
                label,
                value: value.to_string(),
            })
            .collect()
    }

    #[test]
    fn test_general_pane_lines_in_order() {
        let mut term = TestTerminal::with_size(60, 8);
        let area = term.area();
        let fields = fields();
        term.render_widget(GeneralPane::new(&fields), area);

        assert!(term.line_contains(0, "General"));
        assert!(term.line_contains(1, "Request URL:"));
        assert!(term.line_contains(1, "https://a.test/x"));
        assert!(term.line_contains(2, "Request Method:"));
        assert!(term.line_contains(3, "Status Code:"));
        assert!(term.line_contains(3, "200 OK"));
        assert!(term.line_contains(4, "Remote Address:"));
        assert!(term.line_contains(4, "10.1.2.3"));
    }

    #[test]
    fn test_headers_pane_renders_each_line() {
        let mut term = TestTerminal::with_size(40, 6);
        let area = term.area();
        term.render_widget(
            HeadersPane::new("Response Headers", "age: 5\nset-cookie: a=1\nset-cookie: b=2"),
            area,
        );

        assert!(term.line_contains(0, "Response Headers"));
        assert!(term.line_contains(1, "age: 5"));
        assert!(term.line_contains(2, "set-cookie: a=1"));
        assert!(term.line_contains(3, "set-cookie: b=2"));
    }

    fn many_headers(count: usize) -> String {
        (0..count)
            .map(|i| format!("x-h{i:02}: {i}"))
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_headers_pane_scrolls_to_last_header() {
        let text = many_headers(25);
        let mut term = TestTerminal::with_size(40, 8);
        let area = term.area();
        let mut offset = usize::MAX;
        term.draw_with(|frame| {
            frame.render_stateful_widget(HeadersPane::new("Response Headers", &text), area, &mut offset)
        });

        // 6 inner rows: the offset settles on the last full page
        assert_eq!(offset, 19);
        assert!(term.line_contains(1, "x-h19: 19"));
        assert!(term.line_contains(6, "x-h24: 24"));
        assert!(!term.buffer_contains("x-h00"));
    }

    #[test]
    fn test_headers_pane_offset_shows_middle_rows() {
        let text = many_headers(25);
        let mut term = TestTerminal::with_size(40, 8);
        let area = term.area();
        let mut offset = 5;
        term.draw_with(|frame| {
            frame.render_stateful_widget(HeadersPane::new("Request Headers", &text), area, &mut offset)
        });

        assert_eq!(offset, 5);
        assert!(term.line_contains(1, "x-h05: 5"));
        assert!(term.buffer_contains("█"));
    }

    #[test]
    fn test_headers_pane_no_scrollbar_when_content_fits() {
        let mut term = TestTerminal::with_size(40, 6);
        let area = term.area();
        term.render_widget(HeadersPane::new("Request Headers", "a: 1\nb: 2"), area);
        assert!(!term.buffer_contains("█"));
    }

    #[test]
    fn test_headers_pane_wraps_long_values() {
        let mut term = TestTerminal::with_size(16, 6);
        let area = term.area();
        term.render_widget(HeadersPane::new("Cookies", "cookie: 0123456789abcdef"), area);
        // 14 inner columns
        assert!(term.line_contains(1, "cookie: 012345"));
        assert!(term.line_contains(2, "6789abcdef"));
    }

    #[test]
    fn test_headers_pane_empty() {
        let mut term = TestTerminal::with_size(40, 4);
        let area = term.area();
        term.render_widget(HeadersPane::new("Request Headers", ""), area);
        assert!(term.line_contains(0, "Request Headers"));
    }

    #[test]
    fn test_header_line_split_keeps_pseudo_header_name() {
        let line = header_line(":authority: example.com");
        assert_eq!(line.spans[0].content, ":authority");
        assert_eq!(line.spans[2].content, "example.com");
    }
}
