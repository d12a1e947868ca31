mod app;
mod demo;
mod state;
mod ui;

use std::path::Path;

use anyhow::{Context, Result};
use app::ViewerApp;
use eframe::egui;
use jke_utilities::PlotStyle;
use state::AppState;

const DEMO_SEED: u64 = 42;

/// Read a plot style from a JSON file; missing keys keep their defaults.
fn load_style(path: &Path) -> Result<PlotStyle> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading style file {}", path.display()))?;
    PlotStyle::from_json_str(&text).context("parsing style JSON")
}

/// Filter used when `RUST_LOG` is unset; keeps unfilled-gap warnings visible.
const DEFAULT_LOG_FILTER: &str = "warn";

fn main() -> eframe::Result {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(DEFAULT_LOG_FILTER))
        .init();

    let style = match std::env::args().nth(1) {
        Some(path) => load_style(Path::new(&path)).unwrap_or_else(|e| {
            log::error!("Falling back to the default style: {e:#}");
            PlotStyle::default()
        }),
        None => PlotStyle::default(),
    };

    let demo = match demo::generate(DEMO_SEED) {
        Ok(demo) => demo,
        Err(e) => {
            log::error!("Failed to build demo data: {e:#}");
            std::process::exit(1);
        }
    };
    let state = AppState::new(demo, style);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "JKE Utilities – Category Subplots",
        options,
        Box::new(|_cc| Ok(Box::new(ViewerApp::new(state)))),
    )
}
