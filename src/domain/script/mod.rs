//! Rendering of the Outlook autostart PowerShell script.

mod assemble;
mod escape;
mod resolve;

pub use assemble::{
    AssemblyInputs, CLOSE_WINDOW_STATEMENT, KEEP_OPEN_COMMENT, assemble, closing_snippet,
};
pub use escape::{escape_for_script_string, normalize_block_body};
pub use resolve::{clamp_delay, resolve_path};

use crate::domain::{AppError, PresetTable, ScriptParameters};

/// Renders scripts against an injected preset table.
#[derive(Debug, Clone, Copy)]
pub struct ScriptRenderer<'a> {
    presets: &'a PresetTable,
}

impl<'a> ScriptRenderer<'a> {
    pub fn new(presets: &'a PresetTable) -> Self {
        Self { presets }
    }

    /// Resolve, escape, and assemble `params` into the script text.
    ///
    /// Path and delay are resolved before any assembly, so a failure never
    /// yields a partial script.
    pub fn render(&self, params: &ScriptParameters) -> Result<String, AppError> {
        let install_path = resolve_path(self.presets, &params.path_selection)?;
        let delay_seconds = clamp_delay(params.startup_delay_seconds)?;

        let inputs = AssemblyInputs {
            install_path,
            escaped_recipient: escape_for_script_string(&params.recipient_address),
            escaped_subject: escape_for_script_string(&params.subject_line),
            body: normalize_block_body(&params.body_text),
            delay_seconds,
            keep_open: params.keep_application_open,
        };
        tracing::debug!(
            install_path = %inputs.install_path,
            delay_seconds,
            keep_open = inputs.keep_open,
            "assembling script"
        );

        Ok(assemble(&inputs))
    }
}
