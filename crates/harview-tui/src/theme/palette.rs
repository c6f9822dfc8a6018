//! Color palette for the harview theme.

use ratatui::style::Color;

// --- Background layers ---
pub const DEEPEST_BG: Color = Color::Black; // Terminal background
pub const SELECTED_ROW_BG: Color = Color::DarkGray; // Active table row

// --- Borders ---
pub const BORDER_DIM: Color = Color::DarkGray; // Pane borders
pub const BORDER_ACTIVE: Color = Color::Cyan; // Entries table border

// --- Accent ---
pub const ACCENT: Color = Color::Cyan;

// --- Text ---
pub const TEXT_PRIMARY: Color = Color::White;
pub const TEXT_SECONDARY: Color = Color::Gray;
pub const TEXT_MUTED: Color = Color::DarkGray;

// --- Status ---
pub const STATUS_GREEN: Color = Color::Green; // 2xx
pub const STATUS_CYAN: Color = Color::Cyan; // 3xx
pub const STATUS_YELLOW: Color = Color::Yellow; // 4xx, key hints
pub const STATUS_RED: Color = Color::Red; // 5xx
