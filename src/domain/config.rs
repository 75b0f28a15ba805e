//! Generator configuration loaded from `mailstart.toml`.

use serde::{Deserialize, Serialize};

use crate::domain::{AppError, PathSelection, Preset, PresetTable, presets::M365_PRESET};

/// Default configuration file name, resolved against the working directory.
pub const CONFIG_FILE: &str = "mailstart.toml";

/// Preset selector meaning "use `custom_path`".
pub const CUSTOM_PRESET: &str = "custom";

/// Configuration for script generation.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct GeneratorConfig {
    /// Message fields.
    #[serde(default)]
    pub message: MessageConfig,
    /// Outlook launch settings.
    #[serde(default)]
    pub outlook: OutlookConfig,
    /// Additional or replacement installation presets.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub presets: Vec<PresetEntry>,
}

/// Message fields of the generated email.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct MessageConfig {
    #[serde(default = "default_recipient")]
    pub recipient: String,
    #[serde(default = "default_subject")]
    pub subject: String,
    #[serde(default = "default_body")]
    pub body: String,
}

impl Default for MessageConfig {
    fn default() -> Self {
        Self { recipient: default_recipient(), subject: default_subject(), body: default_body() }
    }
}

/// Outlook launch settings.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct OutlookConfig {
    /// Seconds to wait after launching Outlook.
    #[serde(default = "default_startup_delay")]
    pub startup_delay_seconds: f64,
    /// Leave Outlook running after the message is sent.
    #[serde(default = "default_true")]
    pub keep_open: bool,
    /// Preset key, or `custom` to use `custom_path`.
    #[serde(default = "default_preset")]
    pub preset: String,
    #[serde(default = "default_custom_path")]
    pub custom_path: String,
}

impl Default for OutlookConfig {
    fn default() -> Self {
        Self {
            startup_delay_seconds: default_startup_delay(),
            keep_open: default_true(),
            preset: default_preset(),
            custom_path: default_custom_path(),
        }
    }
}

/// A preset declared in the configuration file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct PresetEntry {
    pub key: String,
    pub label: String,
    pub path: String,
}

fn default_recipient() -> String {
    "votre.adresse@email.com".to_string()
}

fn default_subject() -> String {
    "Rappel automatique".to_string()
}

fn default_body() -> String {
    [
        "Bonjour,",
        "",
        "Ceci est un rappel automatique envoyé à chaque démarrage de l'ordinateur.",
        "",
        "Bonne journée !",
    ]
    .join("\n")
}

fn default_startup_delay() -> f64 {
    12.0
}

fn default_true() -> bool {
    true
}

fn default_preset() -> String {
    M365_PRESET.to_string()
}

fn default_custom_path() -> String {
    r"C:\\Program Files\\Microsoft Office\\root\\Office16\\OUTLOOK.EXE".to_string()
}

impl GeneratorConfig {
    /// Built-in presets extended by the `[[presets]]` entries.
    pub fn preset_table(&self) -> PresetTable {
        let mut table = PresetTable::builtin();
        for entry in &self.presets {
            table.upsert(Preset::new(&entry.key, &entry.label, &entry.path));
        }
        table
    }

    /// Path selection described by `outlook.preset` / `outlook.custom_path`.
    pub fn path_selection(&self) -> PathSelection {
        if self.outlook.preset == CUSTOM_PRESET {
            PathSelection::custom(&self.outlook.custom_path)
        } else {
            PathSelection::preset(&self.outlook.preset)
        }
    }

    /// Serialize to the TOML written by `init`.
    pub fn to_toml(&self) -> Result<String, AppError> {
        toml::to_string_pretty(self)
            .map_err(|e| AppError::ParseError { what: CONFIG_FILE.into(), details: e.to_string() })
    }
}

/// Parse and validate configuration content.
pub fn parse_config_content(content: &str) -> Result<GeneratorConfig, AppError> {
    let config: GeneratorConfig = toml::from_str(content)?;

    for entry in &config.presets {
        if entry.key.trim().is_empty() {
            return Err(AppError::config_error("Preset entries require a non-empty 'key'"));
        }
        if entry.key == CUSTOM_PRESET {
            return Err(AppError::config_error(format!(
                "Preset key '{}' is reserved for custom paths",
                CUSTOM_PRESET
            )));
        }
    }

    Ok(config)
}
