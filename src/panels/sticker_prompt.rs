use crate::PaintApp;

/// Modal asking for the text of a custom sticker
pub fn sticker_prompt(app: &mut PaintApp, ctx: &egui::Context) {
    if !app.is_sticker_prompt_open() {
        return;
    }

    let mut result = None;
    let modal = egui::Modal::new(egui::Id::new("custom_sticker_prompt")).show(ctx, |ui| {
        ui.heading("Custom sticker");
        ui.label("Custom sticker text:");
        let edit = ui.text_edit_singleline(app.sticker_input_mut());
        edit.request_focus();
        if edit.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
            result = Some(true);
        }
        ui.horizontal(|ui| {
            if ui.button("Add").clicked() {
                result = Some(true);
            }
            if ui.button("Cancel").clicked() {
                result = Some(false);
            }
        });
    });

    // Escape or a click on the backdrop cancels
    if result.is_none() && modal.should_close() {
        result = Some(false);
    }
    if let Some(accept) = result {
        app.close_sticker_prompt(accept);
    }
}
