//! Footer bar: entry count, controller mode, and key hints.

use harview_app::{AppState, ControllerMode};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget};

use crate::theme::styles;

const DETAIL_HINTS: &[(&str, &str)] = &[
    ("↑↓/jk", "move"),
    ("g/G", "first/last"),
    ("PgUp/PgDn", "scroll"),
    ("Tab", "pane"),
    ("q", "quit"),
];

const CHECKLIST_HINTS: &[(&str, &str)] = &[
    ("↑↓/jk", "move"),
    ("g/G", "first/last"),
    ("Space", "toggle"),
    ("q", "quit"),
];

pub struct Footer<'a> {
    state: &'a AppState,
}

impl<'a> Footer<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    fn summary(&self) -> String {
        let count = self.state.table.len();
        let noun = if count == 1 { "entry" } else { "entries" };
        match self.state.mode() {
            ControllerMode::Detail => format!(" {count} {noun}"),
            ControllerMode::Checklist => {
                let checked = self.state.selection.checked().count();
                format!(" {count} {noun}, {checked} checked")
            }
        }
    }
}

impl Widget for Footer<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut spans = vec![
            Span::styled(self.summary(), styles::text_secondary()),
            Span::styled(format!("  [{}]", self.state.mode()), styles::text_muted()),
        ];

        if self.state.settings.ui.show_key_hints {
            let hints = match self.state.mode() {
                ControllerMode::Detail => DETAIL_HINTS,
                ControllerMode::Checklist => CHECKLIST_HINTS,
            };
            for (key, action) in hints {
                spans.push(Span::raw("  "));
                spans.push(Span::styled(*key, styles::keybinding()));
                spans.push(Span::styled(format!(" {action}"), styles::text_muted()));
            }
        }

        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}
