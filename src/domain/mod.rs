pub mod config;
pub mod error;
pub mod parameters;
pub mod presets;
pub mod script;

pub use config::{CONFIG_FILE, CUSTOM_PRESET, GeneratorConfig, PresetEntry, parse_config_content};
pub use error::AppError;
pub use parameters::{PathSelection, ScriptParameters};
pub use presets::{Preset, PresetTable};
pub use script::ScriptRenderer;
