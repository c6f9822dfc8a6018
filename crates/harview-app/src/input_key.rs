//! Abstract input key event, independent of terminal library.
//!
//! `InputKey` keeps harview-app free of crossterm types; the TUI crate
//! converts terminal events at its boundary.

/// Abstract input key event, independent of terminal library.
/// Converted from crossterm::event::KeyEvent at the TUI boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKey {
    // Character keys
    /// Regular character key (a-z, 0-9, symbols, space)
    Char(char),
    /// Character with Ctrl modifier (Ctrl+c, etc.)
    CharCtrl(char),

    // Navigation
    /// Up arrow key
    Up,
    /// Down arrow key
    Down,
    /// Home key
    Home,
    /// End key
    End,
    /// Page Up key
    PageUp,
    /// Page Down key
    PageDown,

    // Action keys
    /// Tab key
    Tab,
    /// Shift+Tab (BackTab)
    BackTab,
    /// Enter/Return key
    Enter,
    /// Escape key
    Esc,
}
