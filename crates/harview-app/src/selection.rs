//! # Selection State
//!
//! Which table row is active and, in checklist mode, which rows are checked.
//! Row indices are entry indices (`0..row_count`); the table header is not
//! part of this index space. Display rows (header = 0) are translated at
//! [`SelectionState::activate_display_row`].
//!
//! Every mutating method returns `true` only when the state actually
//! changed, so callers can recompute derived content exactly once per change.
//!
//! The first visible row of the table window is kept here too. It only moves
//! when the active row would otherwise leave the window.

use std::collections::BTreeSet;

use crate::config::ControllerMode;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionState {
    mode: ControllerMode,
    row_count: usize,
    /// `None` only when there are no rows.
    active_row: Option<usize>,
    /// Checked rows. Always empty in detail mode.
    checked: BTreeSet<usize>,
    /// First entry shown in the table window.
    scroll_offset: usize,
}

impl SelectionState {
    /// Start on row 0 (if any) with nothing checked.
    pub fn new(mode: ControllerMode, row_count: usize) -> Self {
        Self {
            mode,
            row_count,
            active_row: (row_count > 0).then_some(0),
            checked: BTreeSet::new(),
            scroll_offset: 0,
        }
    }

    pub fn mode(&self) -> ControllerMode {
        self.mode
    }

    pub fn row_count(&self) -> usize {
        self.row_count
    }

    pub fn active_row(&self) -> Option<usize> {
        self.active_row
    }

    /// Checked rows in ascending order.
    pub fn checked(&self) -> impl Iterator<Item = usize> + '_ {
        self.checked.iter().copied()
    }

    pub fn is_checked(&self, row: usize) -> bool {
        self.checked.contains(&row)
    }

    pub fn scroll_offset(&self) -> usize {
        self.scroll_offset
    }

    /// Keep the active row inside a window of `visible_height` rows.
    pub fn adjust_scroll(&mut self, visible_height: usize) {
        self.scroll_offset = match self.active_row {
            Some(row) => calculate_scroll_offset(row, visible_height, self.scroll_offset),
            None => 0,
        };
    }

    // ── Navigation ────────────────────────────────────────────────────────────

    /// Move one row up. No wraparound; a no-op on the first row.
    pub fn move_up(&mut self) -> bool {
        match self.active_row {
            Some(row) if row > 0 => self.set_active(row - 1),
            _ => false,
        }
    }

    /// Move one row down. No wraparound; a no-op on the last row.
    pub fn move_down(&mut self) -> bool {
        match self.active_row {
            Some(row) if row + 1 < self.row_count => self.set_active(row + 1),
            _ => false,
        }
    }

    pub fn move_to_first(&mut self) -> bool {
        if self.row_count == 0 {
            return false;
        }
        self.set_active(0)
    }

    pub fn move_to_last(&mut self) -> bool {
        match self.row_count.checked_sub(1) {
            Some(last) => self.set_active(last),
            None => false,
        }
    }

    // ── Mode-specific operations ──────────────────────────────────────────────

    /// Activate the entry behind a display row (detail mode only).
    ///
    /// Display row 0 is the column header and never selects an entry.
    pub fn activate_display_row(&mut self, display_row: usize) -> bool {
        if self.mode != ControllerMode::Detail || display_row == 0 {
            return false;
        }
        let row = display_row - 1;
        if row >= self.row_count {
            return false;
        }
        self.set_active(row)
    }

    /// Flip the checked state of `row` (checklist mode only).
    pub fn toggle_select(&mut self, row: usize) -> bool {
        if self.mode != ControllerMode::Checklist || row >= self.row_count {
            return false;
        }
        if !self.checked.remove(&row) {
            self.checked.insert(row);
        }
        true
    }

    fn set_active(&mut self, row: usize) -> bool {
        if self.active_row == Some(row) {
            return false;
        }
        self.active_row = Some(row);
        true
    }
}

/// Scroll offset that keeps `selected_index` visible, moving the window as
/// little as possible from `current_offset`.
pub fn calculate_scroll_offset(
    selected_index: usize,
    visible_height: usize,
    current_offset: usize,
) -> usize {
    if visible_height == 0 {
        return 0;
    }
    if selected_index < current_offset {
        return selected_index;
    }
    if selected_index >= current_offset + visible_height {
        return selected_index + 1 - visible_height;
    }
    current_offset
}
