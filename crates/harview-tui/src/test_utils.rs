//! Test utilities for TUI rendering verification
//!
//! Provides helpers for testing widgets and full-screen rendering
//! using ratatui's TestBackend.

use harview_app::config::{ControllerMode, Settings};
use harview_app::AppState;
use harview_core::{Entry, HarDocument, Header, Initiator, Request, Response};
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::widgets::Widget;
use ratatui::Frame;
use ratatui::Terminal;

/// Standard test terminal size (matches common terminal dimensions)
pub const TEST_WIDTH: u16 = 80;
pub const TEST_HEIGHT: u16 = 24;

/// Test utility wrapper around ratatui's TestBackend terminal.
pub struct TestTerminal {
    pub terminal: Terminal<TestBackend>,
}

impl TestTerminal {
    /// Create a new test terminal with standard dimensions (80x24)
    pub fn new() -> Self {
        Self::with_size(TEST_WIDTH, TEST_HEIGHT)
    }

    /// Create a new test terminal with custom dimensions
    pub fn with_size(width: u16, height: u16) -> Self {
        let backend = TestBackend::new(width, height);
        let terminal = Terminal::new(backend).expect("Failed to create test terminal");
        Self { terminal }
    }

    /// Get the full terminal area
    pub fn area(&self) -> Rect {
        let size = self.terminal.size().expect("Failed to get terminal size");
        Rect::new(0, 0, size.width, size.height)
    }

    /// Render a widget to the terminal
    pub fn render_widget<W: Widget>(&mut self, widget: W, area: Rect) {
        self.terminal
            .draw(|frame| frame.render_widget(widget, area))
            .expect("Failed to render widget");
    }

    /// Draws a frame using a custom rendering function (e.g. `view`)
    pub fn draw_with<F>(&mut self, f: F)
    where
        F: FnOnce(&mut Frame),
    {
        self.terminal.draw(f).expect("Failed to draw frame");
    }

    /// Get the underlying buffer for assertions
    pub fn buffer(&self) -> &Buffer {
        self.terminal.backend().buffer()
    }

    /// Check if the buffer contains a string anywhere
    pub fn buffer_contains(&self, text: &str) -> bool {
        self.content().contains(text)
    }

    /// Check if a specific line contains text
    pub fn line_contains(&self, line: u16, text: &str) -> bool {
        get_line_content(self.buffer(), line).contains(text)
    }

    /// Get all content as a string (for debugging)
    pub fn content(&self) -> String {
        buffer_to_string(self.buffer())
    }
}

impl Default for TestTerminal {
    fn default() -> Self {
        Self::new()
    }
}

/// Convert buffer to string representation
fn buffer_to_string(buffer: &Buffer) -> String {
    let mut result = String::new();
    for y in 0..buffer.area.height {
        result.push_str(&get_line_content(buffer, y));
        result.push('\n');
    }
    result
}

/// Get content of a specific line
fn get_line_content(buffer: &Buffer, line: u16) -> String {
    let mut result = String::new();
    if line < buffer.area.height {
        for x in 0..buffer.area.width {
            result.push_str(buffer[(x, line)].symbol());
        }
    }
    result
}

/// A document of `count` script entries named `item-<i>.js`.
///
/// Entry `i` carries an `x-item: <i>` request header so tests can tell
/// which entry the detail panes show.
pub fn test_document(count: usize) -> HarDocument {
    let entries = (0..count)
        .map(|i| Entry {
            resource_type: "script".to_string(),
            initiator: Some(Initiator {
                kind: "parser".to_string(),
                url: "https://example.test/".to_string(),
                ..Initiator::default()
            }),
            request: Request {
                method: "GET".to_string(),
                url: format!("https://example.test/static/item-{i}.js"),
                headers: vec![
                    Header::new("x-item", i.to_string()),
                    Header::new("accept", "*/*"),
                ],
                ..Request::default()
            },
            response: Response {
                status: 200,
                status_text: "OK".to_string(),
                headers: vec![Header::new("content-type", "text/javascript")],
                transfer_size: 512 + i as i64,
                ..Response::default()
            },
            server_ip_address: "93.184.216.34".to_string(),
            total_time_ms: 12.5 + i as f64,
            ..Entry::default()
        })
        .collect();

    HarDocument {
        entries,
        ..HarDocument::default()
    }
}

/// AppState over [`test_document`] in the given mode
pub fn create_test_state(count: usize, mode: ControllerMode) -> AppState {
    let mut settings = Settings::default();
    settings.ui.mode = mode;
    AppState::new(test_document(count), settings)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_default_size() {
        let term = TestTerminal::new();
        assert_eq!(term.area(), Rect::new(0, 0, TEST_WIDTH, TEST_HEIGHT));
    }

    #[test]
    fn test_content_has_one_line_per_row() {
        let term = TestTerminal::with_size(10, 3);
        assert_eq!(term.content().lines().count(), 3);
    }

    #[test]
    fn test_document_entries() {
        let doc = test_document(2);
        assert_eq!(doc.entries.len(), 2);
        assert!(doc.entries[1].request.url.ends_with("item-1.js"));
    }
}
