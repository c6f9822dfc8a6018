//! harview-app - Application state and update loop for harview
//!
//! This crate implements the TEA (The Elm Architecture) pattern for state
//! management: the entries table projection, the selection/detail
//! controller, detail pane recomputation, and configuration loading.
//! It has no terminal dependency; `harview-tui` renders [`AppState`] and
//! feeds [`Message`]s back in.

pub mod config;
pub mod detail;
pub mod handler;
pub mod headers;
pub mod input_key;
pub mod message;
pub mod selection;
pub mod state;
pub mod table;

// Re-export primary types
pub use config::{ControllerMode, Settings};
pub use detail::{DetailFocus, DetailPanes, DetailScroll, GeneralField};
pub use handler::{handle_key, update, UpdateResult};
pub use input_key::InputKey;
pub use message::Message;
pub use selection::SelectionState;
pub use state::{AppPhase, AppState};
pub use table::{EntryRow, EntryTable, COLUMN_TITLES};
