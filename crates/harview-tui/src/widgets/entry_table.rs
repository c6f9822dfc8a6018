//! # Entries Table Widget
//!
//! Renders the HAR entries as a grid: a column header row (display row 0)
//! followed by one row per entry. The active row is highlighted and kept in
//! view; in checklist mode a `[x]` marker column precedes the data.

use harview_app::selection::calculate_scroll_offset;
use harview_app::{ControllerMode, EntryTable, SelectionState, COLUMN_TITLES};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::Widget;

use super::truncate_to_width;
use crate::theme::styles;

// ── Column widths (characters) ────────────────────────────────────────────────

/// Checklist marker column width (`[x] `).
const COL_MARKER: u16 = 4;

/// Status code column width.
const COL_STATUS: u16 = 7;

/// Resource type column width.
const COL_TYPE: u16 = 12;

/// Transfer size column width.
const COL_SIZE: u16 = 9;

/// Time column width.
const COL_TIME: u16 = 10;

/// Share of the flexible width given to Name; Initiator takes the rest.
const NAME_SHARE_PERCENT: u16 = 45;

/// Widths of the six data columns, in [`COLUMN_TITLES`] order.
fn column_widths(width: u16) -> [u16; 6] {
    let fixed = COL_STATUS + COL_TYPE + COL_SIZE + COL_TIME;
    let flexible = width.saturating_sub(fixed);
    let name = u32::from(flexible) * u32::from(NAME_SHARE_PERCENT) / 100;
    let name = u16::try_from(name).unwrap_or(flexible);
    let initiator = flexible - name;
    [name, COL_STATUS, COL_TYPE, initiator, COL_SIZE, COL_TIME]
}

// ── EntryTableView ────────────────────────────────────────────────────────────

/// Table widget over a projected [`EntryTable`].
///
/// The projection and selection are borrowed from `AppState`. The window
/// starts at the selection's stored scroll offset, moved only as far as
/// needed to show the active row.
pub struct EntryTableView<'a> {
    table: &'a EntryTable,
    selection: &'a SelectionState,
}

impl<'a> EntryTableView<'a> {
    pub fn new(table: &'a EntryTable, selection: &'a SelectionState) -> Self {
        Self { table, selection }
    }

    fn checklist(&self) -> bool {
        self.selection.mode() == ControllerMode::Checklist
    }
}

impl Widget for EntryTableView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width == 0 {
            return;
        }

        // Display row 0: column headers
        self.render_column_headers(Rect { height: 1, ..area }, buf);

        // Display rows 1+: entries
        let data_area = Rect {
            y: area.y + 1,
            height: area.height - 1,
            ..area
        };
        if self.table.is_empty() {
            if data_area.height > 0 {
                buf.set_string(
                    data_area.x,
                    data_area.y,
                    truncate_to_width("No entries in this archive", data_area.width as usize),
                    styles::text_muted(),
                );
            }
            return;
        }
        self.render_rows(data_area, buf);
    }
}

impl EntryTableView<'_> {
    // ── Column headers ────────────────────────────────────────────────────────

    fn render_column_headers(&self, area: Rect, buf: &mut Buffer) {
        let style = styles::column_header();
        let mut x = area.x;
        if self.checklist() {
            x += COL_MARKER;
        }
        let widths = column_widths(area.right().saturating_sub(x));
        for (title, width) in COLUMN_TITLES.iter().zip(widths) {
            put_cell(buf, x, area.y, title, width, style);
            x += width;
        }
    }

    // ── Data rows ─────────────────────────────────────────────────────────────

    fn render_rows(&self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }

        let visible = area.height as usize;
        let active = self.selection.active_row();
        let start = active.map_or(0, |row| {
            calculate_scroll_offset(row, visible, self.selection.scroll_offset())
        });
        let end = (start + visible).min(self.table.len());

        for (offset, index) in (start..end).enumerate() {
            let Some(row) = self.table.row(index) else {
                break;
            };
            let y = area.y + offset as u16;
            let row_style = if active == Some(index) {
                styles::selected_row()
            } else {
                Style::default()
            };

            // Clear the full row with its background.
            for x in area.x..area.right() {
                if let Some(cell) = buf.cell_mut((x, y)) {
                    cell.set_style(row_style).set_char(' ');
                }
            }

            let mut x = area.x;
            if self.checklist() {
                let marker = if self.selection.is_checked(index) {
                    "[x]"
                } else {
                    "[ ]"
                };
                put_cell(
                    buf,
                    x,
                    y,
                    marker,
                    COL_MARKER.min(area.width),
                    styles::accent().patch(row_style),
                );
                x += COL_MARKER;
            }

            let widths = column_widths(area.right().saturating_sub(x));
            let status_style = styles::http_status(row.status.parse().unwrap_or(0));
            let cell_styles = [
                styles::text_primary(),
                status_style,
                styles::text_secondary(),
                styles::text_muted(),
                styles::text_secondary(),
                styles::text_primary(),
            ];
            for ((value, width), style) in row.cells().into_iter().zip(widths).zip(cell_styles) {
                put_cell(buf, x, y, value, width, style.patch(row_style));
                x += width;
            }
        }
    }
}

/// Write `text` into a cell of `width` columns, leaving one column of gap.
fn put_cell(buf: &mut Buffer, x: u16, y: u16, text: &str, width: u16, style: Style) {
    if width < 2 || !buf.area.contains((x, y).into()) {
        return;
    }
    buf.set_string(
        x,
        y,
        truncate_to_width(text, width as usize - 1),
        style,
    );
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{test_document, TestTerminal};
    use harview_core::HarDocument;

    fn render(
        table: &EntryTable,
        selection: &SelectionState,
        width: u16,
        height: u16,
    ) -> TestTerminal {
        let mut term = TestTerminal::with_size(width, height);
        let area = term.area();
        term.render_widget(EntryTableView::new(table, selection), area);
        term
    }

    #[test]
    fn test_renders_header_row_first() {
        let doc = test_document(3);
        let table = EntryTable::project(&doc);
        let selection = SelectionState::new(ControllerMode::Detail, table.len());
        let term = render(&table, &selection, 100, 6);

        for title in COLUMN_TITLES {
            assert!(term.line_contains(0, title), "missing column {title}");
        }
    }

    #[test]
    fn test_entry_i_on_display_row_i_plus_one() {
        let doc = test_document(3);
        let table = EntryTable::project(&doc);
        let selection = SelectionState::new(ControllerMode::Detail, table.len());
        let term = render(&table, &selection, 100, 6);

        assert!(term.line_contains(1, "item-0.js"));
        assert!(term.line_contains(2, "item-1.js"));
        assert!(term.line_contains(3, "item-2.js"));
    }

    #[test]
    fn test_active_row_highlighted() {
        let doc = test_document(3);
        let table = EntryTable::project(&doc);
        let mut selection = SelectionState::new(ControllerMode::Detail, table.len());
        selection.move_down();
        let term = render(&table, &selection, 100, 6);

        let bg = crate::theme::palette::SELECTED_ROW_BG;
        assert_eq!(term.buffer()[(0, 2)].bg, bg);
        assert_ne!(term.buffer()[(0, 1)].bg, bg);
    }

    #[test]
    fn test_scrolls_to_keep_active_row_visible() {
        let doc = test_document(20);
        let table = EntryTable::project(&doc);
        let mut selection = SelectionState::new(ControllerMode::Detail, table.len());
        selection.move_to_last();
        // 1 header row + 4 visible entries
        let term = render(&table, &selection, 100, 5);

        assert!(term.line_contains(0, "Name"));
        assert!(term.line_contains(4, "item-19.js"));
        assert!(!term.buffer_contains("item-0.js"));
    }

    #[test]
    fn test_checklist_markers() {
        let doc = test_document(2);
        let table = EntryTable::project(&doc);
        let mut selection = SelectionState::new(ControllerMode::Checklist, table.len());
        selection.toggle_select(1);
        let term = render(&table, &selection, 100, 4);

        assert!(term.line_contains(1, "[ ]"));
        assert!(term.line_contains(2, "[x]"));
    }

    #[test]
    fn test_detail_mode_has_no_markers() {
        let doc = test_document(2);
        let table = EntryTable::project(&doc);
        let selection = SelectionState::new(ControllerMode::Detail, table.len());
        let term = render(&table, &selection, 100, 4);

        assert!(!term.buffer_contains("[ ]"));
    }

    #[test]
    fn test_empty_document_header_only() {
        let table = EntryTable::project(&HarDocument::default());
        let selection = SelectionState::new(ControllerMode::Detail, 0);
        let term = render(&table, &selection, 80, 4);

        assert!(term.line_contains(0, "Status"));
        assert!(term.line_contains(1, "No entries"));
    }

    #[test]
    fn test_renders_tiny_areas_without_panic() {
        let doc = test_document(2);
        let table = EntryTable::project(&doc);
        let selection = SelectionState::new(ControllerMode::Checklist, table.len());
        render(&table, &selection, 1, 1);
        render(&table, &selection, 10, 2);
        render(&table, &selection, 3, 10);
    }

    #[test]
    fn test_cursor_moves_up_inside_scrolled_window() {
        let doc = test_document(20);
        let table = EntryTable::project(&doc);
        let mut selection = SelectionState::new(ControllerMode::Detail, table.len());
        selection.move_to_last();
        selection.adjust_scroll(4);
        selection.move_up();
        selection.move_up();
        selection.adjust_scroll(4);
        let term = render(&table, &selection, 100, 5);

        assert!(term.line_contains(1, "item-16.js"));
        assert!(term.line_contains(2, "item-17.js"));
        assert!(term.line_contains(4, "item-19.js"));
        let bg = crate::theme::palette::SELECTED_ROW_BG;
        assert_eq!(term.buffer()[(0, 2)].bg, bg);
        assert_ne!(term.buffer()[(0, 4)].bg, bg);
    }

    #[test]
    fn test_column_widths_fill_area() {
        let widths = column_widths(100);
        assert_eq!(widths.iter().sum::<u16>(), 100);
        assert!(widths[0] > 0 && widths[3] > 0);
    }

    #[test]
    fn test_column_widths_very_wide_terminal() {
        for width in [1600, u16::MAX] {
            let widths = column_widths(width);
            assert_eq!(widths.iter().map(|w| u32::from(*w)).sum::<u32>(), u32::from(width));
            assert!(widths[0] < widths[3]);
        }
    }
}
