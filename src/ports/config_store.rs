use std::path::Path;

use crate::domain::AppError;

/// Port for reading and writing the generator configuration file.
pub trait ConfigStore {
    /// Location of the configuration file, for messages.
    fn location(&self) -> &Path;

    /// Whether the configuration file exists.
    fn exists(&self) -> bool;

    /// Read the raw configuration content, or `None` when absent.
    fn read(&self) -> Result<Option<String>, AppError>;

    /// Write the raw configuration content.
    fn write(&self, content: &str) -> Result<(), AppError>;
}
