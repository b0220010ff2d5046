mod app;
mod filter;
mod photo;
mod state;
mod ui;

use app::RustyLensApp;
use eframe::egui;

fn main() -> eframe::Result {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 640.0])
            .with_min_inner_size([480.0, 360.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Rusty Lens – Photo Filters",
        options,
        Box::new(|_cc| Ok(Box::new(RustyLensApp::default()))),
    )
}
