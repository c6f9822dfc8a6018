//! Main render/view function (View in TEA pattern)

use harview_app::{AppState, DetailFocus};
use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

use crate::layout;
use crate::theme::{palette, styles};
use crate::widgets::{EntryTableView, Footer, GeneralPane, HeadersPane};

/// Render the complete UI (View function in TEA)
///
/// Takes `&mut AppState` to store scroll positions that depend on the
/// rendered size: the table window and the clamped header pane offsets.
pub fn view(frame: &mut Frame, state: &mut AppState) {
    let area = frame.area();

    // Fill entire terminal with deepest background color
    let bg_block = Block::default().style(Style::default().bg(palette::DEEPEST_BG));
    frame.render_widget(bg_block, area);

    let areas = layout::create(
        area,
        state.mode(),
        state.settings.ui.detail_height_percent(),
    );

    // Entries table inside a bordered block
    let table_block = styles::titled_block("Entries", true);
    let table_inner = table_block.inner(areas.table);
    frame.render_widget(table_block, areas.table);
    // One row of the inner area is the column header
    state
        .selection
        .adjust_scroll(table_inner.height.saturating_sub(1) as usize);
    frame.render_widget(
        EntryTableView::new(&state.table, &state.selection),
        table_inner,
    );

    if let Some(detail) = areas.detail {
        frame.render_widget(GeneralPane::new(&state.detail.general), detail.general);
        let focus = state.detail_scroll.focus;
        frame.render_stateful_widget(
            HeadersPane::new("Request Headers", &state.detail.request_headers)
                .focused(focus == DetailFocus::Request),
            detail.request_headers,
            &mut state.detail_scroll.request,
        );
        frame.render_stateful_widget(
            HeadersPane::new("Response Headers", &state.detail.response_headers)
                .focused(focus == DetailFocus::Response),
            detail.response_headers,
            &mut state.detail_scroll.response,
        );
    }

    frame.render_widget(Footer::new(state), areas.footer);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{create_test_state, TestTerminal};
    use harview_app::{update, ControllerMode, InputKey, Message};
    use harview_core::Header;

    fn render_screen(state: &mut AppState) -> TestTerminal {
        let mut term = TestTerminal::with_size(120, 30);
        term.draw_with(|frame| view(frame, state));
        term
    }

    fn press(state: &mut AppState, key: InputKey) {
        crate::runner::process_message(state, Message::Key(key));
    }

    #[test]
    fn test_detail_mode_shows_all_panes() {
        let mut state = create_test_state(3, ControllerMode::Detail);
        let term = render_screen(&mut state);

        assert!(term.buffer_contains("Entries"));
        assert!(term.buffer_contains("General"));
        assert!(term.buffer_contains("Request Headers"));
        assert!(term.buffer_contains("Response Headers"));
        assert!(term.buffer_contains("3 entries"));
    }

    #[test]
    fn test_detail_panes_follow_active_row() {
        let mut state = create_test_state(3, ControllerMode::Detail);
        assert!(render_screen(&mut state).buffer_contains("x-item: 0"));

        update(&mut state, Message::ActivateRow { display_row: 3 });
        let term = render_screen(&mut state);
        assert!(term.buffer_contains("x-item: 2"));
        assert!(!term.buffer_contains("x-item: 0"));
    }

    #[test]
    fn test_checklist_mode_hides_detail_panes() {
        let mut state = create_test_state(3, ControllerMode::Checklist);
        let term = render_screen(&mut state);

        assert!(term.buffer_contains("[ ]"));
        assert!(!term.buffer_contains("General"));
        assert!(!term.buffer_contains("Request Headers"));
    }

    #[test]
    fn test_empty_document_renders() {
        let mut state = create_test_state(0, ControllerMode::Detail);
        let term = render_screen(&mut state);

        assert!(term.buffer_contains("Name"));
        assert!(term.buffer_contains("No entries"));
        assert!(term.buffer_contains("0 entries"));
    }

    #[test]
    fn test_renders_small_terminal_without_panic() {
        let mut state = create_test_state(5, ControllerMode::Detail);
        let mut term = TestTerminal::with_size(20, 6);
        term.draw_with(|frame| view(frame, &mut state));
    }

    #[test]
    fn test_response_headers_scroll_to_last_header() {
        let mut state = create_test_state(2, ControllerMode::Detail);
        state.document.entries[0].response.headers = (0..25)
            .map(|i| Header::new(format!("x-h{i:02}"), i.to_string()))
            .collect();
        state.refresh_detail();

        let term = render_screen(&mut state);
        assert!(term.buffer_contains("x-h00: 0"));
        assert!(!term.buffer_contains("x-h24: 24"));

        press(&mut state, InputKey::Tab);
        for _ in 0..10 {
            press(&mut state, InputKey::PageDown);
        }
        let term = render_screen(&mut state);
        assert!(term.buffer_contains("x-h24: 24"));
        assert!(!term.buffer_contains("x-h00: 0"));

        // Offset was clamped by the render, so one step up moves right away
        let clamped = state.detail_scroll.response;
        assert!(clamped < 50);
        update(&mut state, Message::ScrollDetailUp);
        assert!(state.detail_scroll.response < clamped);
    }

    #[test]
    fn test_table_window_kept_while_moving_up() {
        let mut state = create_test_state(60, ControllerMode::Checklist);
        update(&mut state, Message::MoveToLast);
        render_screen(&mut state);
        let offset = state.selection.scroll_offset();
        assert!(offset > 0);

        update(&mut state, Message::MoveUp);
        let term = render_screen(&mut state);
        assert_eq!(state.selection.scroll_offset(), offset);
        assert!(term.buffer_contains("item-59.js"));
    }
}
