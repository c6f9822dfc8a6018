//! Application state (Model in TEA pattern)

use harview_core::{Entry, HarDocument};
use tracing::debug;

use crate::config::{ControllerMode, Settings};
use crate::detail::{DetailPanes, DetailScroll};
use crate::selection::SelectionState;
use crate::table::EntryTable;

/// Lifecycle of the event loop.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AppPhase {
    #[default]
    Running,
    Quitting,
}

// ─────────────────────────────────────────────────────────────────────────────
/// Complete application state (the Model in TEA)
#[derive(Debug)]
pub struct AppState {
    /// Loaded archive. Read-only after load.
    pub document: HarDocument,

    /// Table rows projected from `document`, same order as its entries
    pub table: EntryTable,

    /// Cursor, active row and checked rows
    pub selection: SelectionState,

    /// Content of the detail panes for the active row
    pub detail: DetailPanes,

    /// Number of times `detail` has been recomputed
    pub detail_revision: u64,

    /// Header pane focus and scroll offsets, reset with `detail`
    pub detail_scroll: DetailScroll,

    /// Application settings from config file and CLI
    pub settings: Settings,

    pub phase: AppPhase,
}

impl AppState {
    /// Build the state for a loaded document.
    ///
    /// Row 0 starts active; in detail mode its panes are filled immediately.
    pub fn new(document: HarDocument, settings: Settings) -> Self {
        let table = EntryTable::project(&document);
        let selection = SelectionState::new(settings.ui.mode, table.len());
        let mut state = Self {
            document,
            table,
            selection,
            detail: DetailPanes::default(),
            detail_revision: 0,
            detail_scroll: DetailScroll::default(),
            settings,
            phase: AppPhase::Running,
        };
        state.refresh_detail();
        state
    }

    pub fn mode(&self) -> ControllerMode {
        self.selection.mode()
    }

    /// Entry behind the active row.
    pub fn active_entry(&self) -> Option<&Entry> {
        self.selection
            .active_row()
            .and_then(|row| self.document.entry(row))
    }

    /// Replace the detail panes with the active entry's content.
    ///
    /// Previous content is cleared first, so a row without an entry leaves
    /// the panes empty. Header panes scroll back to the top. No-op in
    /// checklist mode.
    pub fn refresh_detail(&mut self) {
        if self.mode() != ControllerMode::Detail {
            return;
        }
        self.detail = DetailPanes::default();
        self.detail_scroll = DetailScroll::default();
        let panes = self
            .active_entry()
            .map(|entry| DetailPanes::for_entry(entry, self.document.page_for(entry)));
        if let Some(panes) = panes {
            self.detail = panes;
        }
        self.detail_revision += 1;
        debug!(
            row = ?self.selection.active_row(),
            revision = self.detail_revision,
            "Detail panes refreshed"
        );
    }

    pub fn request_quit(&mut self) {
        self.phase = AppPhase::Quitting;
    }

    pub fn should_quit(&self) -> bool {
        self.phase == AppPhase::Quitting
    }
}
