mod app;
mod color;
mod config;
mod data;
mod figure;
mod state;
mod ui;

use std::sync::Arc;

use anyhow::{Context, Result};
use app::AvocadoDashboardApp;
use config::DashboardConfig;
use eframe::egui;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = DashboardConfig::default();

    // No recovery path: a missing or malformed dataset ends the process.
    let dataset = match data::loader::load_csv(&config.data_path) {
        Ok(ds) => Arc::new(ds),
        Err(e) => {
            log::error!("Failed to load {}: {e}", config.data_path.display());
            return Err(e).with_context(|| format!("loading {}", config.data_path.display()));
        }
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(config.title.clone())
            .with_inner_size(config.window_size)
            .with_min_inner_size(config.min_window_size),
        ..Default::default()
    };

    let title = config.title.clone();
    eframe::run_native(
        &config.title,
        options,
        Box::new(move |_cc| Ok(Box::new(AvocadoDashboardApp::new(title, dataset)))),
    )
    .map_err(|e| anyhow::anyhow!("dashboard window failed: {e}"))
}
