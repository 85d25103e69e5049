#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod views;

use app::GraphApp;

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt::init();
    tracing::info!("starting Engineering Graph Generator");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 820.0])
            .with_min_inner_size([800.0, 600.0])
            .with_title("Engineering Graph Generator"),
        ..Default::default()
    };

    eframe::run_native(
        "Engineering Graph Generator",
        options,
        Box::new(|cc| Ok(Box::new(GraphApp::new(cc)))),
    )
}
