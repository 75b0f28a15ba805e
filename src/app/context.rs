use crate::ports::ConfigStore;

/// Application context holding dependencies for command execution.
pub struct AppContext<C: ConfigStore> {
    config_store: C,
}

impl<C: ConfigStore> AppContext<C> {
    /// Create a new application context.
    pub fn new(config_store: C) -> Self {
        Self { config_store }
    }

    /// Get a reference to the configuration store.
    pub fn config_store(&self) -> &C {
        &self.config_store
    }
}
