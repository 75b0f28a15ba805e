pub mod config_filesystem;
pub mod instructions_template;
pub mod memory_config_store;
