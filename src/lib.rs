//! mailstart: Generate PowerShell scripts that open Outlook and send an email at startup.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

pub use app::api::{RenderOptions, RenderOutcome};
pub use domain::script::{clamp_delay, escape_for_script_string, resolve_path};
pub use domain::{
    AppError, GeneratorConfig, PathSelection, Preset, PresetTable, ScriptParameters,
    ScriptRenderer,
};

/// Render the script for `params` against the built-in preset table.
pub fn render(params: &ScriptParameters) -> Result<String, AppError> {
    ScriptRenderer::new(&PresetTable::builtin()).render(params)
}
