//! Message types for the application (TEA pattern)

use crate::input_key::InputKey;

/// All possible messages/actions in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    // ─────────────────────────────────────────────────────────
    // Table Navigation
    // ─────────────────────────────────────────────────────────
    /// Move the cursor one row up
    MoveUp,
    /// Move the cursor one row down
    MoveDown,
    /// Jump to the first entry
    MoveToFirst,
    /// Jump to the last entry
    MoveToLast,

    /// Flip the checked state of the cursor row (checklist mode)
    ToggleSelect,

    /// Activate the entry behind a display row (detail mode).
    /// Display row 0 is the column header.
    ActivateRow { display_row: usize },

    // ─────────────────────────────────────────────────────────
    // Header Panes (detail mode)
    // ─────────────────────────────────────────────────────────
    /// Scroll the focused header pane up by a page
    ScrollDetailUp,
    /// Scroll the focused header pane down by a page
    ScrollDetailDown,
    /// Move scroll focus to the other header pane
    SwitchDetailFocus,

    /// Leave the application
    Quit,
}
