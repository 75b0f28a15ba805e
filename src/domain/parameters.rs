//! Parameter set collected from the user and handed to the renderer.

use serde::{Deserialize, Serialize};

/// Where the Outlook executable lives: a preset key or a user-typed path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PathSelection {
    Preset { key: String },
    Custom { raw_path: String },
}

impl PathSelection {
    pub fn preset(key: impl Into<String>) -> Self {
        PathSelection::Preset { key: key.into() }
    }

    pub fn custom(raw_path: impl Into<String>) -> Self {
        PathSelection::Custom { raw_path: raw_path.into() }
    }
}

/// Fully populated input of a single render call.
///
/// `startup_delay_seconds` is kept as the raw number typed by the user; the
/// resolver floors it, clamps it at zero, and rejects non-finite values.
#[derive(Debug, Clone, PartialEq)]
pub struct ScriptParameters {
    pub recipient_address: String,
    pub subject_line: String,
    pub body_text: String,
    pub startup_delay_seconds: f64,
    pub keep_application_open: bool,
    pub path_selection: PathSelection,
}
