pub mod init;
pub mod instructions;
pub mod presets;
pub mod render;

use crate::app::AppContext;
use crate::domain::{AppError, GeneratorConfig, parse_config_content};
use crate::ports::ConfigStore;

/// Load the configuration, falling back to defaults when the file is absent.
pub fn load_config<C: ConfigStore>(ctx: &AppContext<C>) -> Result<GeneratorConfig, AppError> {
    match ctx.config_store().read()? {
        Some(content) => {
            tracing::debug!(path = %ctx.config_store().location().display(), "loaded configuration");
            parse_config_content(&content)
        }
        None => Ok(GeneratorConfig::default()),
    }
}
