//! Command-line options for the demo binary.

use std::path::PathBuf;

use clap::Parser;

use crate::config::Config;

/// Walk through the "remove ads" purchase flow against the simulated store.
#[derive(Debug, Parser)]
#[command(name = "adfree", version, about)]
pub struct Cli {
    /// Config file (default: <config_dir>/adfree/config.toml)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// State file holding the purchased flag
    #[arg(long, value_name = "PATH")]
    pub state_file: Option<PathBuf>,

    /// Seed for simulated outcomes
    #[arg(long)]
    pub seed: Option<u64>,

    /// Simulated request latency in milliseconds
    #[arg(long, value_name = "MS")]
    pub delay_ms: Option<u64>,

    /// Do not show outcome alerts
    #[arg(long)]
    pub no_alerts: bool,

    /// Tap restore instead of purchase
    #[arg(long, conflicts_with = "reset")]
    pub restore: bool,

    /// Forget the purchase and show ads again
    #[arg(long)]
    pub reset: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Apply command-line overrides on top of the loaded config.
    pub fn apply(&self, config: &mut Config) {
        if let Some(seed) = self.seed {
            config.simulator.seed = Some(seed);
        }
        if let Some(delay_ms) = self.delay_ms {
            config.simulator.delay_ms = delay_ms;
        }
        if self.no_alerts {
            config.alerts.enabled = false;
        }
        if let Some(path) = &self.state_file {
            config.storage.path = Some(path.clone());
        }
    }
}
