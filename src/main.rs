mod app;
mod chart;
mod color;
mod data;
mod state;
mod stats;
mod ui;

use std::path::PathBuf;

use app::IrisChartsApp;
use eframe::egui;
use state::AppState;

/// Dataset loaded when no path is given on the command line.
const DEFAULT_DATASET: &str = "iris.csv";

fn main() -> eframe::Result {
    env_logger::init();

    let path = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DATASET));

    // Data first, then the window: charts are built before the first frame.
    let mut state = AppState::default();
    state.load(&path);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([860.0, 1000.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Iris Charts",
        options,
        Box::new(|_cc| Ok(Box::new(IrisChartsApp::new(state)))),
    )
}
