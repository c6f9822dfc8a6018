//! Configuration types

use serde::{Deserialize, Serialize};

/// Interaction model for the entry table.
///
/// The two modes share the document and table projection but are otherwise
/// independent: one is chosen per run and they are never combined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ControllerMode {
    /// Master/detail: a single active row drives the detail panes.
    #[default]
    Detail,
    /// A cursor plus a set of checked rows; no detail panes.
    Checklist,
}

impl ControllerMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ControllerMode::Detail => "detail",
            ControllerMode::Checklist => "checklist",
        }
    }
}

impl std::fmt::Display for ControllerMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ControllerMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "detail" => Ok(ControllerMode::Detail),
            "checklist" => Ok(ControllerMode::Checklist),
            other => Err(format!(
                "unknown mode '{other}' (expected 'detail' or 'checklist')"
            )),
        }
    }
}

/// Application settings (config.toml)
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub ui: UiSettings,
}

/// UI settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UiSettings {
    /// Interaction model for the table
    #[serde(default)]
    pub mode: ControllerMode,

    /// Show the key legend in the footer
    #[serde(default = "default_true")]
    pub show_key_hints: bool,

    /// Share of the screen height given to the detail panes (10-90)
    #[serde(default = "default_detail_height_percent")]
    pub detail_height_percent: u16,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            mode: ControllerMode::default(),
            show_key_hints: true,
            detail_height_percent: default_detail_height_percent(),
        }
    }
}

impl UiSettings {
    /// Detail pane height share, clamped so neither half disappears.
    pub fn detail_height_percent(&self) -> u16 {
        self.detail_height_percent.clamp(10, 90)
    }
}

fn default_true() -> bool {
    true
}

fn default_detail_height_percent() -> u16 {
    50
}
