//! Configuration file parsing for harview
//!
//! Supports `~/.config/harview/config.toml` (platform config dir).

pub mod settings;
pub mod types;

pub use settings::{default_config_path, load_settings, load_settings_from, parse_settings};
pub use types::*;
