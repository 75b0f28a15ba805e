//! Installation path presets offered as quick-select alternatives to a custom path.

use serde::Serialize;

/// Key of the Microsoft 365 (Click-to-Run) preset.
pub const M365_PRESET: &str = "m365";
/// Key of the Office 2019 (64-bit) preset.
pub const OFFICE2019_PRESET: &str = "office2019";
/// Key of the Office 2016/2013 (32-bit) preset.
pub const OFFICE2016_PRESET: &str = "office2016";

/// A named, built-in installation path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Preset {
    pub key: String,
    pub label: String,
    pub install_path: String,
}

impl Preset {
    pub fn new(
        key: impl Into<String>,
        label: impl Into<String>,
        install_path: impl Into<String>,
    ) -> Self {
        Self { key: key.into(), label: label.into(), install_path: install_path.into() }
    }
}

/// Ordered, read-only mapping from preset key to preset.
///
/// The renderer receives a table instead of reading a global, so callers can
/// extend or substitute it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PresetTable {
    entries: Vec<Preset>,
}

impl PresetTable {
    pub fn new(entries: Vec<Preset>) -> Self {
        let mut table = Self::default();
        for preset in entries {
            table.upsert(preset);
        }
        table
    }

    /// The three reference Outlook installation paths.
    pub fn builtin() -> Self {
        Self::new(vec![
            Preset::new(
                M365_PRESET,
                "Microsoft 365 (Office Click-to-Run)",
                r"C:\\Program Files\\Microsoft Office\\root\\Office16\\OUTLOOK.EXE",
            ),
            Preset::new(
                OFFICE2019_PRESET,
                "Office 2019 (64 bits)",
                r"C:\\Program Files\\Microsoft Office\\Office16\\OUTLOOK.EXE",
            ),
            Preset::new(
                OFFICE2016_PRESET,
                "Office 2016/2013 (32 bits)",
                r"C:\\Program Files (x86)\\Microsoft Office\\Office16\\OUTLOOK.EXE",
            ),
        ])
    }

    /// Exact-match lookup.
    pub fn get(&self, key: &str) -> Option<&Preset> {
        self.entries.iter().find(|preset| preset.key == key)
    }

    /// Replace the preset with the same key in place, or append a new one.
    pub fn upsert(&mut self, preset: Preset) {
        match self.entries.iter_mut().find(|existing| existing.key == preset.key) {
            Some(existing) => *existing = preset,
            None => self.entries.push(preset),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Preset> {
        self.entries.iter()
    }

    pub fn keys(&self) -> Vec<&str> {
        self.entries.iter().map(|preset| preset.key.as_str()).collect()
    }
}
