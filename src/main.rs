use std::sync::Arc;

use anyhow::Context;
use eframe::egui;

use spacex_dash::app::DashboardApp;
use spacex_dash::config::DashboardConfig;
use spacex_dash::data::loader::load_file;
use spacex_dash::state::AppState;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config = DashboardConfig::default();

    // The dashboard never opens without its dataset.
    let table = load_file(&config.dataset_path)
        .with_context(|| format!("loading {}", config.dataset_path.display()))?;
    let state = AppState::new(
        Arc::new(table),
        config.dataset_path.clone(),
        config.payload_slider,
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(config.window_size)
            .with_min_inner_size(config.min_window_size),
        ..Default::default()
    };

    eframe::run_native(
        &config.window_title,
        options,
        Box::new(|_cc| Ok(Box::new(DashboardApp::new(state)))),
    )
    .map_err(|e| anyhow::anyhow!("{e}"))
}
