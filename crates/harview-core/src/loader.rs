//! HAR file loading
//!
//! Reads the whole file, then deserializes it into [`HarDocument`]. Any
//! failure is reported as an [`Error`] and is fatal to startup: there is no
//! retry, caching, or partial-document recovery.

use std::path::Path;

use crate::har::{HarDocument, HarFile};
use crate::prelude::*;

/// Load a HAR document from a file on disk.
pub fn load(path: impl AsRef<Path>) -> Result<HarDocument> {
    let path = path.as_ref();
    let bytes = std::fs::read(path)
        .map_err(|e| Error::file_read(path, e))
        .with_context(|| format!("Failed to open {}", path.display()))?;

    let document =
        parse_slice(&bytes).with_context(|| format!("Failed to parse {}", path.display()))?;

    info!(
        "Loaded {} ({} entries, {} pages)",
        path.display(),
        document.entries.len(),
        document.pages.len()
    );
    Ok(document)
}

/// Parse a HAR document from raw bytes.
pub fn parse_slice(bytes: &[u8]) -> Result<HarDocument> {
    serde_json::from_slice::<HarFile>(bytes)
        .map(|file| file.log)
        .map_err(Error::from_json)
}

/// Parse a HAR document from a string.
pub fn parse_str(json: &str) -> Result<HarDocument> {
    parse_slice(json.as_bytes())
}
