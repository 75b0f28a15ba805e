//! API Facade for the application.
//!
//! This module exposes high-level functions that glue together context creation
//! and command execution.

use std::path::{Path, PathBuf};

use crate::adapters::config_filesystem::FilesystemConfigStore;
use crate::app::{
    AppContext,
    commands::{self, init, instructions, presets, render},
};
use crate::ports::ConfigStore;

pub use crate::app::commands::instructions::DEFAULT_SCRIPT_NAME;
pub use crate::app::commands::render::{RenderOptions, RenderOutcome};
pub use crate::domain::{AppError, GeneratorConfig, Preset};

/// Create an `AppContext` reading `config_path`, or `mailstart.toml` in the
/// current directory when no path is given.
///
/// An explicit path must exist; the default file is optional.
fn create_context(
    config_path: Option<&Path>,
) -> Result<AppContext<FilesystemConfigStore>, AppError> {
    let store = match config_path {
        Some(path) => {
            let store = FilesystemConfigStore::new(path);
            if !store.exists() {
                return Err(AppError::ConfigNotFound(path.display().to_string()));
            }
            store
        }
        None => FilesystemConfigStore::current()?,
    };
    Ok(AppContext::new(store))
}

/// Render a script from configuration plus per-invocation overrides.
pub fn render(
    config_path: Option<&Path>,
    options: RenderOptions,
) -> Result<RenderOutcome, AppError> {
    let ctx = create_context(config_path)?;
    render::execute(&ctx, options)
}

/// Load the effective configuration (defaults when no file exists).
pub fn load_config(config_path: Option<&Path>) -> Result<GeneratorConfig, AppError> {
    let ctx = create_context(config_path)?;
    commands::load_config(&ctx)
}

/// Write the default configuration file and return its path.
///
/// Writes to `config_path` when given, otherwise to `mailstart.toml` in the
/// current directory.
pub fn init(config_path: Option<&Path>) -> Result<PathBuf, AppError> {
    let store = match config_path {
        Some(path) => FilesystemConfigStore::new(path),
        None => FilesystemConfigStore::current()?,
    };
    init::execute(&AppContext::new(store))
}

/// List available installation presets.
pub fn presets(config_path: Option<&Path>) -> Result<Vec<Preset>, AppError> {
    let ctx = create_context(config_path)?;
    presets::list(&ctx)
}

/// Render the installation instructions for a saved script.
pub fn instructions(config_path: Option<&Path>, script_name: &str) -> Result<String, AppError> {
    let ctx = create_context(config_path)?;
    instructions::execute(&ctx, script_name)
}

/// Write a rendered script to `path` exactly as rendered.
pub fn write_script(path: &Path, script: &str) -> Result<(), AppError> {
    std::fs::write(path, script)?;
    tracing::info!(path = %path.display(), bytes = script.len(), "wrote script");
    Ok(())
}
