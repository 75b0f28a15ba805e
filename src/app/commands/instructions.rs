use crate::adapters::instructions_template::{InstructionsContext, render_instructions};
use crate::app::AppContext;
use crate::app::commands::load_config;
use crate::domain::AppError;
use crate::ports::ConfigStore;

/// File name suggested for the saved script.
pub const DEFAULT_SCRIPT_NAME: &str = "Outlook-AutoStart.ps1";

/// Render installation steps for a script saved as `script_name`.
pub fn execute<C: ConfigStore>(ctx: &AppContext<C>, script_name: &str) -> Result<String, AppError> {
    if script_name.trim().is_empty() {
        return Err(AppError::Validation("Script name must not be empty".into()));
    }
    let config = load_config(ctx)?;
    let presets = config.preset_table();

    render_instructions(&InstructionsContext {
        script_name,
        keep_open: config.outlook.keep_open,
        presets: &presets,
    })
}
