use crate::app::AppContext;
use crate::app::commands::load_config;
use crate::domain::{AppError, Preset};
use crate::ports::ConfigStore;

/// List the built-in presets merged with configured ones, in table order.
pub fn list<C: ConfigStore>(ctx: &AppContext<C>) -> Result<Vec<Preset>, AppError> {
    let config = load_config(ctx)?;
    Ok(config.preset_table().iter().cloned().collect())
}
