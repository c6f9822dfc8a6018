//! # harview-core - HAR Domain Types
//!
//! Foundation crate for harview. Provides the HAR document model, the file
//! loader, error handling, and logging setup.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, serde_json, chrono, thiserror, tracing).
//!
//! ## Public API
//!
//! ### Document Model (`har`)
//! - [`HarDocument`] - The HAR log: creator, pages, entries in capture order
//! - [`Entry`] - One captured HTTP transaction
//! - [`Request`], [`Response`], [`Header`] - Transaction halves and header lines
//! - [`Timings`], [`Initiator`] - Phase breakdown and request trigger metadata
//!
//! ### Loader (`loader`)
//! - [`load()`] - Read and parse a HAR file from disk
//! - [`parse_str()`], [`parse_slice()`] - Parse an in-memory document
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Error enum separating I/O, decode and schema failures
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use harview_core::prelude::*;
//! ```

pub mod error;
pub mod har;
pub mod loader;
pub mod logging;
pub mod prelude;

// Re-export commonly used types at crate root for convenience
pub use error::{Error, Result, ResultExt};
pub use har::{
    CallFrame, Content, Cookie, Creator, Entry, HarDocument, HarFile, Header, Initiator, Page,
    PageTimings, ParentStack, Request, Response, Stack, Timings, NOT_RECORDED,
};
pub use loader::{load, parse_slice, parse_str};
