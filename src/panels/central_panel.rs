use crate::PaintApp;
use crate::surface::PainterSurface;

pub fn central_panel(app: &mut PaintApp, ctx: &egui::Context) {
    egui::CentralPanel::default().show(ctx, |ui| {
        ui.heading("Draw on the canvas below!");

        let canvas_size = app.sketchpad().settings().canvas_size;
        let (response, painter) = ui.allocate_painter(canvas_size, egui::Sense::click_and_drag());

        // Apply input before drawing so this frame shows its effect.
        // The sticker prompt owns the pointer while it is open.
        if !app.is_sticker_prompt_open() {
            app.handle_canvas_input(ctx, &response);
        }

        let background = app.sketchpad().settings().background;
        let mut surface = PainterSurface::new(&painter, response.rect, background);
        app.sketchpad().render(&mut surface);
    });
}
