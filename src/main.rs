#![warn(clippy::all, rust_2018_idioms)]

use sketchpad::{PaintApp, Settings};

fn main() -> eframe::Result {
    env_logger::init(); // Log to stderr (if you run with `RUST_LOG=debug`).

    let settings = Settings::from_env();
    let canvas = settings.canvas_size;

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Drawing Site")
            .with_inner_size([canvas.x + 320.0, canvas.y + 160.0])
            .with_min_inner_size([canvas.x + 240.0, canvas.y + 100.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Drawing Site",
        native_options,
        Box::new(|cc| Ok(Box::new(PaintApp::new(cc, settings)))),
    )
}
