use std::path::PathBuf;

use crate::app::AppContext;
use crate::domain::{AppError, CUSTOM_PRESET, GeneratorConfig, PresetTable};
use crate::ports::ConfigStore;

/// Default configuration content, with a header naming the selectable presets.
fn generate_config_template() -> Result<String, AppError> {
    let mut template = String::from(
        "# mailstart configuration\n\
         # Values below are used by `mailstart render` unless overridden by flags.\n",
    );
    let keys = PresetTable::builtin().keys().join(", ");
    template.push_str(&format!("# outlook.preset: {}, or {}\n\n", keys, CUSTOM_PRESET));
    template.push_str(&GeneratorConfig::default().to_toml()?);
    Ok(template)
}

/// Execute the init command.
///
/// Writes the default configuration file and refuses to overwrite an existing one.
pub fn execute<C: ConfigStore>(ctx: &AppContext<C>) -> Result<PathBuf, AppError> {
    let store = ctx.config_store();
    if store.exists() {
        return Err(AppError::ConfigExists(store.location().display().to_string()));
    }

    store.write(&generate_config_template()?)?;
    tracing::info!(path = %store.location().display(), "wrote default configuration");
    Ok(store.location().to_path_buf())
}
