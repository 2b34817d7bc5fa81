use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use serde::Serialize;

use adfree::cli::Cli;
use adfree::config::Config;
use adfree::iap::{PurchaseStore, TomlFlagStorage};
use adfree::logging::init_tracing;
use adfree::ui::banner::{BannerAttributes, BannerSink, BannerView};
use adfree::ui::purchase::{
    Alert, PurchaseScreen, PurchaseScreenState, ScreenFrame, ScreenSink,
};

/// Prints every render and alert as one JSON line on stdout.
struct JsonLinesSink;

impl JsonLinesSink {
    fn emit<T: Serialize>(&self, kind: &str, value: &T) {
        match serde_json::to_string(value) {
            Ok(json) => println!("{} {}", kind, json),
            Err(e) => tracing::warn!(error = %e, kind, "failed to serialize record"),
        }
    }
}

impl ScreenSink for JsonLinesSink {
    fn render(&self, frame: &ScreenFrame) {
        self.emit("screen", frame);
    }

    fn alert(&self, alert: &Alert) {
        self.emit("alert", alert);
    }
}

impl BannerSink for JsonLinesSink {
    fn render(&self, attributes: &BannerAttributes) {
        self.emit("banner", attributes);
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(if cli.verbose { "adfree=debug" } else { "info" });

    let config_path = cli.config.clone().unwrap_or_else(Config::config_path);
    let mut config = Config::load_from(&config_path)
        .with_context(|| format!("loading {}", config_path.display()))?;
    cli.apply(&mut config);
    config.validate()?;

    let state_path = config.storage.resolve_path();
    tracing::debug!(path = %state_path.display(), "using state file");
    let store = PurchaseStore::open(Arc::new(TomlFlagStorage::new(state_path)));

    let banner = BannerView::new(store.clone(), JsonLinesSink);
    banner.appear();

    if cli.reset {
        banner.reset();
        return Ok(());
    }

    let screen = PurchaseScreen::activate(
        store.clone(),
        config.simulator.build(),
        JsonLinesSink,
        config.alerts.toggle(),
    );
    let mut states = screen.subscribe();
    let settled = *states
        .wait_for(|state| *state != PurchaseScreenState::Fetching)
        .await?;

    if settled == PurchaseScreenState::NotPurchased {
        let started = if cli.restore {
            screen.tap_restore()
        } else {
            screen.tap_purchase()
        };
        if started {
            states.wait_for(|state| !state.is_in_flight()).await?;
        }
    }
    drop(screen);

    banner.appear();
    tracing::info!(status = ?store.current(), "done");
    Ok(())
}
