//! Configuration: TOML file with serde defaults for every field.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{Config, ServerConfig, SyncConfig};
