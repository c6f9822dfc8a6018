//! Screen layout definitions for the TUI
//!
//! The entries table fills the top of the screen. In detail mode the
//! detail panes take a configurable share below it, split into three
//! columns. A one-line footer sits at the bottom.

use harview_app::ControllerMode;
use ratatui::layout::{Constraint, Layout, Rect};

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    /// Entries table (bordered)
    pub table: Rect,

    /// Detail panes; `None` in checklist mode
    pub detail: Option<DetailAreas>,

    /// Footer bar (entry count + key hints)
    pub footer: Rect,
}

/// The three detail panes, left to right
#[derive(Debug, Clone, Copy)]
pub struct DetailAreas {
    pub general: Rect,
    pub request_headers: Rect,
    pub response_headers: Rect,
}

/// Create the main screen layout
///
/// # Arguments
/// * `area` - Total screen area
/// * `mode` - Controller mode (checklist mode has no detail panes)
/// * `detail_percent` - Share of the screen height given to the detail panes
pub fn create(area: Rect, mode: ControllerMode, detail_percent: u16) -> ScreenAreas {
    match mode {
        ControllerMode::Detail => {
            let [table, detail, footer] = Layout::vertical([
                Constraint::Min(3),
                Constraint::Percentage(detail_percent),
                Constraint::Length(1),
            ])
            .areas(area);

            let [general, request_headers, response_headers] = Layout::horizontal([
                Constraint::Ratio(1, 3),
                Constraint::Ratio(1, 3),
                Constraint::Ratio(1, 3),
            ])
            .areas(detail);

            ScreenAreas {
                table,
                detail: Some(DetailAreas {
                    general,
                    request_headers,
                    response_headers,
                }),
                footer,
            }
        }
        ControllerMode::Checklist => {
            let [table, footer] =
                Layout::vertical([Constraint::Min(3), Constraint::Length(1)]).areas(area);
            ScreenAreas {
                table,
                detail: None,
                footer,
            }
        }
    }
}
