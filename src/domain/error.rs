use std::io;

use thiserror::Error;

/// Library-wide error type for mailstart operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// User input rejected outside the renderer (prompts, CLI glue).
    #[error("{0}")]
    Validation(String),

    /// Path selection references a key absent from the preset table.
    #[error("Unknown preset '{key}'. Available: {available}")]
    UnknownPreset { key: String, available: String },

    /// Startup delay is not a finite number.
    #[error("Invalid startup delay '{0}': must be a finite number of seconds")]
    InvalidDelay(String),

    /// Configuration file already exists at the target location.
    #[error("Configuration file already exists: {0}")]
    ConfigExists(String),

    /// Explicitly requested configuration file is missing.
    #[error("Configuration file not found: {0}")]
    ConfigNotFound(String),

    /// Parse error.
    #[error("Failed to parse {what}: {details}")]
    ParseError { what: String, details: String },

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),

    /// Embedded template failed to render.
    #[error("Template rendering failed: {0}")]
    Template(String),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_preset_message_lists_available_keys() {
        let err = AppError::UnknownPreset { key: "office2007".into(), available: "m365".into() };
        assert_eq!(err.to_string(), "Unknown preset 'office2007'. Available: m365");
    }

    #[test]
    fn io_errors_convert_transparently() {
        let err: AppError = io::Error::new(io::ErrorKind::NotFound, "missing body.txt").into();
        assert_eq!(err.to_string(), "missing body.txt");
    }
}
