mod app;
mod color;
mod data;
mod state;
mod ui;

use std::path::PathBuf;

use anyhow::{anyhow, Context};
use app::ExplorerApp;
use eframe::egui;
use state::AppState;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    // Optional CLI argument: a CSV to load before the UI starts. A load
    // failure here is fatal; once the app is running, the File dialog
    // reports errors in the status bar instead.
    let mut state = AppState::default();
    if let Some(path) = std::env::args_os().nth(1).map(PathBuf::from) {
        let dataset = data::loader::load_csv(&path)
            .with_context(|| format!("loading {}", path.display()))?;
        state.set_dataset(dataset);
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 860.0])
            .with_min_inner_size([700.0, 500.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Eurostat Explorer – Scatterplot + Time Series",
        options,
        Box::new(move |_cc| Ok(Box::new(ExplorerApp::new(state)))),
    )
    .map_err(|e| anyhow!("eframe error: {e}"))
}
