//! Main update function - handles state transitions (TEA pattern)

use crate::message::Message;
use crate::state::AppState;
use tracing::{debug, info};

use super::{keys::handle_key, UpdateResult};

/// Rows moved by one header pane scroll step.
pub const DETAIL_SCROLL_ROWS: usize = 5;

/// Process a message and update state
/// Returns optional follow-up message
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Quit => {
            info!("Quit requested");
            state.request_quit();
            UpdateResult::none()
        }

        Message::Key(key) => {
            if let Some(msg) = handle_key(state, key) {
                UpdateResult::message(msg)
            } else {
                UpdateResult::none()
            }
        }

        // ─────────────────────────────────────────────────────────
        // Table Navigation
        // ─────────────────────────────────────────────────────────
        Message::MoveUp => {
            let changed = state.selection.move_up();
            after_move(state, changed)
        }
        Message::MoveDown => {
            let changed = state.selection.move_down();
            after_move(state, changed)
        }
        Message::MoveToFirst => {
            let changed = state.selection.move_to_first();
            after_move(state, changed)
        }
        Message::MoveToLast => {
            let changed = state.selection.move_to_last();
            after_move(state, changed)
        }

        Message::ActivateRow { display_row } => {
            let changed = state.selection.activate_display_row(display_row);
            after_move(state, changed)
        }

        // ─────────────────────────────────────────────────────────
        // Header Panes
        // ─────────────────────────────────────────────────────────
        Message::ScrollDetailUp => {
            state.detail_scroll.scroll_up(DETAIL_SCROLL_ROWS);
            UpdateResult::none()
        }
        Message::ScrollDetailDown => {
            state.detail_scroll.scroll_down(DETAIL_SCROLL_ROWS);
            UpdateResult::none()
        }
        Message::SwitchDetailFocus => {
            state.detail_scroll.toggle_focus();
            debug!(focus = ?state.detail_scroll.focus, "Header pane focus");
            UpdateResult::none()
        }

        Message::ToggleSelect => {
            if let Some(row) = state.selection.active_row() {
                if state.selection.toggle_select(row) {
                    debug!(row, checked = state.selection.is_checked(row), "Toggled row");
                }
            }
            UpdateResult::none()
        }
    }
}

/// Recompute the detail panes only when the active row moved.
fn after_move(state: &mut AppState, changed: bool) -> UpdateResult {
    if changed {
        state.refresh_detail();
    }
    UpdateResult::none()
}
