//! Key event handlers for each controller mode

use crate::config::ControllerMode;
use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::AppState;

/// Convert key events to messages based on the controller mode
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    if let Some(msg) = handle_key_common(key) {
        return Some(msg);
    }
    match state.mode() {
        ControllerMode::Detail => handle_key_detail(state, key),
        ControllerMode::Checklist => handle_key_checklist(key),
    }
}

/// Quit and navigation keys, shared by both modes
fn handle_key_common(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('q') | InputKey::Esc | InputKey::CharCtrl('c') => Some(Message::Quit),

        InputKey::Up | InputKey::Char('k') => Some(Message::MoveUp),
        InputKey::Down | InputKey::Char('j') => Some(Message::MoveDown),
        InputKey::Home | InputKey::Char('g') => Some(Message::MoveToFirst),
        InputKey::End | InputKey::Char('G') => Some(Message::MoveToLast),

        _ => None,
    }
}

/// Enter/Space re-activate the cursor row; PgUp/PgDn and Tab drive the
/// header panes
fn handle_key_detail(state: &AppState, key: InputKey) -> Option<Message> {
    match key {
        InputKey::PageUp | InputKey::CharCtrl('u') => Some(Message::ScrollDetailUp),
        InputKey::PageDown | InputKey::CharCtrl('d') => Some(Message::ScrollDetailDown),
        InputKey::Tab | InputKey::BackTab => Some(Message::SwitchDetailFocus),

        InputKey::Enter | InputKey::Char(' ') => {
            let row = state.selection.active_row()?;
            Some(Message::ActivateRow {
                display_row: row + 1,
            })
        }
        _ => None,
    }
}

/// Enter/Space flip the cursor row's checkbox
fn handle_key_checklist(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Enter | InputKey::Char(' ') => Some(Message::ToggleSelect),
        _ => None,
    }
}
