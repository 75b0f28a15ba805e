use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::domain::{AppError, CONFIG_FILE};
use crate::ports::ConfigStore;

/// In-memory configuration store for testing.
#[derive(Debug, Clone)]
pub struct MemoryConfigStore {
    path: PathBuf,
    // Shared so clones observe writes made through the context.
    content: Arc<Mutex<Option<String>>>,
}

impl MemoryConfigStore {
    #[allow(dead_code)]
    pub fn new() -> Self {
        Self { path: PathBuf::from(CONFIG_FILE), content: Arc::new(Mutex::new(None)) }
    }

    #[allow(dead_code)]
    pub fn with_content(content: &str) -> Self {
        let store = Self::new();
        *store.content.lock().unwrap() = Some(content.to_string());
        store
    }

    #[allow(dead_code)]
    pub fn content(&self) -> Option<String> {
        self.content.lock().unwrap().clone()
    }
}

impl Default for MemoryConfigStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigStore for MemoryConfigStore {
    fn location(&self) -> &Path {
        &self.path
    }

    fn exists(&self) -> bool {
        self.content.lock().unwrap().is_some()
    }

    fn read(&self) -> Result<Option<String>, AppError> {
        Ok(self.content.lock().unwrap().clone())
    }

    fn write(&self, content: &str) -> Result<(), AppError> {
        *self.content.lock().unwrap() = Some(content.to_string());
        Ok(())
    }
}
