use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::domain::{AppError, CONFIG_FILE};
use crate::ports::ConfigStore;

/// Filesystem-based configuration store.
#[derive(Debug, Clone)]
pub struct FilesystemConfigStore {
    path: PathBuf,
}

impl FilesystemConfigStore {
    /// Create a store for an explicit configuration file path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Create a store for `mailstart.toml` in the current directory.
    pub fn current() -> Result<Self, AppError> {
        Ok(Self::in_dir(std::env::current_dir()?))
    }

    /// Create a store for `mailstart.toml` inside `dir`.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        Self::new(dir.as_ref().join(CONFIG_FILE))
    }
}

impl ConfigStore for FilesystemConfigStore {
    fn location(&self) -> &Path {
        &self.path
    }

    fn exists(&self) -> bool {
        self.path.is_file()
    }

    fn read(&self) -> Result<Option<String>, AppError> {
        match fs::read_to_string(&self.path) {
            Ok(content) => Ok(Some(content)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn write(&self, content: &str) -> Result<(), AppError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn read_returns_none_when_missing() {
        let dir = TempDir::new().unwrap();
        let store = FilesystemConfigStore::in_dir(dir.path());
        assert!(!store.exists());
        assert!(store.read().unwrap().is_none());
    }

    #[test]
    fn write_creates_parent_directories() {
        let dir = TempDir::new().unwrap();
        let store = FilesystemConfigStore::new(dir.path().join("nested/conf.toml"));
        store.write("[outlook]\n").unwrap();
        assert!(store.exists());
        assert_eq!(store.read().unwrap().as_deref(), Some("[outlook]\n"));
    }
}
