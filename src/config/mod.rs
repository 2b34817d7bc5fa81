//! Configuration loaded from `config.toml`.

mod loader;
mod types;

pub use loader::{ConfigError, MAX_DELAY_MS};
pub use types::{AlertsConfig, Config, SimulatorConfig, StorageConfig};
