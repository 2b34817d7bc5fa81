use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::iap::{TomlFlagStorage, TransactionSimulator};
use crate::ui::purchase::AlertToggle;

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub simulator: SimulatorConfig,
    #[serde(default)]
    pub alerts: AlertsConfig,
    #[serde(default)]
    pub storage: StorageConfig,
}

/// Simulated payment provider settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulatorConfig {
    /// Latency of every simulated request in milliseconds (default: 1000).
    #[serde(default = "default_delay_ms")]
    pub delay_ms: u64,
    /// Seed for outcome selection. Unset means a fresh seed each run.
    #[serde(default)]
    pub seed: Option<u64>,
}

/// Outcome alert settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlertsConfig {
    /// Initial value of the alert toggle (default: true).
    #[serde(default = "default_alerts_enabled")]
    pub enabled: bool,
}

/// Where the purchased flag is persisted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StorageConfig {
    /// State file path (default: `<data_dir>/adfree/state.toml`).
    #[serde(default)]
    pub path: Option<PathBuf>,
}

fn default_delay_ms() -> u64 {
    1000
}

fn default_alerts_enabled() -> bool {
    true
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            delay_ms: default_delay_ms(),
            seed: None,
        }
    }
}

impl Default for AlertsConfig {
    fn default() -> Self {
        Self {
            enabled: default_alerts_enabled(),
        }
    }
}

impl SimulatorConfig {
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }

    /// Build a simulator, seeded when a seed is configured.
    pub fn build(&self) -> TransactionSimulator {
        match self.seed {
            Some(seed) => TransactionSimulator::seeded(self.delay(), seed),
            None => TransactionSimulator::new(self.delay()),
        }
    }
}

impl AlertsConfig {
    pub fn toggle(&self) -> AlertToggle {
        AlertToggle::from(self.enabled)
    }
}

impl StorageConfig {
    pub fn resolve_path(&self) -> PathBuf {
        self.path.clone().unwrap_or_else(TomlFlagStorage::default_path)
    }
}
