//! Semantic style builders for the harview theme.

use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders};

use super::palette;

// --- Text styles ---
pub fn text_primary() -> Style {
    Style::default().fg(palette::TEXT_PRIMARY)
}

pub fn text_secondary() -> Style {
    Style::default().fg(palette::TEXT_SECONDARY)
}

pub fn text_muted() -> Style {
    Style::default().fg(palette::TEXT_MUTED)
}

// --- Border styles ---
pub fn border_inactive() -> Style {
    Style::default().fg(palette::BORDER_DIM)
}

pub fn border_active() -> Style {
    Style::default().fg(palette::BORDER_ACTIVE)
}

// --- Accent styles ---
pub fn accent() -> Style {
    Style::default().fg(palette::ACCENT)
}

pub fn accent_bold() -> Style {
    Style::default()
        .fg(palette::ACCENT)
        .add_modifier(Modifier::BOLD)
}

// --- Table styles ---
pub fn column_header() -> Style {
    Style::default()
        .fg(palette::TEXT_MUTED)
        .add_modifier(Modifier::BOLD)
}

pub fn selected_row() -> Style {
    Style::default().bg(palette::SELECTED_ROW_BG)
}

/// Color an HTTP status code by class. `0` (no response) is muted.
pub fn http_status(code: i64) -> Style {
    let color = match code {
        200..=299 => palette::STATUS_GREEN,
        300..=399 => palette::STATUS_CYAN,
        400..=499 => palette::STATUS_YELLOW,
        500.. => palette::STATUS_RED,
        _ => palette::TEXT_MUTED,
    };
    Style::default().fg(color)
}

// --- Keybinding hint style ---
pub fn keybinding() -> Style {
    Style::default().fg(palette::STATUS_YELLOW)
}

// --- Block builders ---

/// Rounded, bordered block with a title.
pub fn titled_block(title: &str, active: bool) -> Block<'static> {
    let border_style = if active {
        border_active()
    } else {
        border_inactive()
    };
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border_style)
        .title(format!(" {title} "))
        .title_style(accent_bold())
}
