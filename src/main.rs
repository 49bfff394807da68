mod core;
mod gui;
mod persistence;

use eframe::egui;

fn main() -> eframe::Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([700.0, 500.0])
            .with_min_inner_size([640.0, 480.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Balatrack",
        options,
        Box::new(|cc| Ok(Box::new(gui::app::TrackerApp::new(cc)))),
    )
}
