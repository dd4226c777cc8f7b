//! Concrete adapter implementations for ports.

pub mod file_config_adapter;
pub mod memory_store;
pub mod map_env;
pub mod process_env;
