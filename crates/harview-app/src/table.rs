//! # Entry Table Projection
//!
//! Derives the tabular view of a [`HarDocument`]: one [`EntryRow`] per entry,
//! in capture order, with display-ready column values.
//!
//! The projection is pure. It holds no state beyond the strings it derived,
//! and `rows[N]` always reflects `entries[N]`. In the rendered grid the
//! header occupies display row 0, so entry `N` is display row `N + 1`.

use harview_core::{Entry, HarDocument};
use url::Url;

/// Column titles, in display order.
pub const COLUMN_TITLES: [&str; 6] = ["Name", "Status", "Type", "Initiator", "Size", "Time"];

/// Display values for a single entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryRow {
    pub name: String,
    pub status: String,
    pub kind: String,
    pub initiator: String,
    pub size: String,
    pub time: String,
}

impl EntryRow {
    pub fn from_entry(entry: &Entry) -> Self {
        Self {
            name: display_name(&entry.request.url),
            status: entry.response.status.to_string(),
            kind: entry.resource_type.clone(),
            initiator: entry.initiator_url().to_string(),
            size: entry.response.transfer_size.to_string(),
            time: format_time_ms(entry.total_time_ms),
        }
    }

    /// Cell values in [`COLUMN_TITLES`] order.
    pub fn cells(&self) -> [&str; 6] {
        [
            self.name.as_str(),
            self.status.as_str(),
            self.kind.as_str(),
            self.initiator.as_str(),
            self.size.as_str(),
            self.time.as_str(),
        ]
    }
}

/// All rows of the entries table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryTable {
    rows: Vec<EntryRow>,
}

impl EntryTable {
    pub fn project(document: &HarDocument) -> Self {
        Self {
            rows: document.entries.iter().map(EntryRow::from_entry).collect(),
        }
    }

    pub fn rows(&self) -> &[EntryRow] {
        &self.rows
    }

    pub fn row(&self, index: usize) -> Option<&EntryRow> {
        self.rows.get(index)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// The full grid: the header row followed by one row per entry.
    pub fn cells(&self) -> Vec<Vec<String>> {
        std::iter::once(COLUMN_TITLES.map(String::from).to_vec())
            .chain(
                self.rows
                    .iter()
                    .map(|row| row.cells().map(String::from).to_vec()),
            )
            .collect()
    }
}

/// Name column value for a request URL.
///
/// The last path segment, or the full URL when that segment is empty (the
/// root `/` or a trailing slash). URLs that do not parse, or have no
/// hierarchical path (`data:`, `blob:`), are returned unmodified.
pub fn display_name(raw_url: &str) -> String {
    let Ok(url) = Url::parse(raw_url) else {
        return raw_url.to_string();
    };
    match url.path_segments().and_then(|mut segments| segments.next_back()) {
        Some(last) if !last.is_empty() => last.to_string(),
        _ => raw_url.to_string(),
    }
}

/// Time column value: whole milliseconds with a unit suffix.
pub fn format_time_ms(ms: f64) -> String {
    format!("{:.0} ms", ms)
}
