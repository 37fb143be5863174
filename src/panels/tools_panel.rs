use crate::PaintApp;
use crate::tool::{ActiveTool, BrushPreset};
use crate::widgets::StickerButton;

pub fn tools_panel(app: &mut PaintApp, ctx: &egui::Context) {
    egui::SidePanel::left("tools_panel")
        .resizable(true)
        .default_width(200.0)
        .show(ctx, |ui| {
            ui.heading("Tools");

            let active = app.sketchpad().tools().active().clone();
            let preview_shown = app.sketchpad().tools().preview().is_some();

            // Brushes
            for preset in BrushPreset::ALL {
                let thickness = preset.thickness(app.sketchpad().settings());
                let is_selected = preview_shown
                    && matches!(active, ActiveTool::Brush(brush) if brush.thickness == thickness);
                if ui.selectable_label(is_selected, preset.label()).clicked() {
                    app.sketchpad_mut().select_brush_preset(preset);
                }
            }

            ui.horizontal(|ui| {
                ui.label("Color:");
                let mut color = app.sketchpad().tools().brush().color;
                if egui::color_picker::color_edit_button_srgba(
                    ui,
                    &mut color,
                    egui::color_picker::Alpha::Opaque,
                )
                .changed()
                {
                    app.sketchpad_mut().set_color(color);
                }
            });

            ui.separator();
            ui.label("Stickers");

            let entries = app.sketchpad().palette().entries().to_vec();
            ui.horizontal_wrapped(|ui| {
                for entry in &entries {
                    let is_selected =
                        matches!(&active, ActiveTool::Sticker { glyph } if *glyph == entry.glyph);
                    if StickerButton::new(&entry.glyph, is_selected).show(ui).clicked() {
                        app.sketchpad_mut().select_sticker(entry.id);
                    }
                }
            });
            if ui.button("Custom sticker…").clicked() {
                app.open_sticker_prompt();
            }

            ui.separator();

            // Undo/Redo section
            ui.horizontal(|ui| {
                let can_undo = app.sketchpad().store().can_undo();
                let can_redo = app.sketchpad().store().can_redo();

                if ui.add_enabled(can_undo, egui::Button::new("Undo")).clicked() {
                    app.sketchpad_mut().undo();
                }
                if ui.add_enabled(can_redo, egui::Button::new("Redo")).clicked() {
                    app.sketchpad_mut().redo();
                }
            });

            ui.horizontal(|ui| {
                if ui.button("Clear Canvas").clicked() {
                    app.sketchpad_mut().clear();
                }
                if ui.button("Export").clicked() {
                    app.export();
                }
            });

            if let Some(status) = app.status() {
                ui.label(status);
            }

            ui.separator();

            let store = app.sketchpad().store();
            ui.horizontal(|ui| {
                ui.label(format!("Undo stack size: {}", store.undo_len()));
                ui.label(format!("Redo stack size: {}", store.redo_len()));
            });

            egui::Grid::new("command_history_grid")
                .num_columns(2)
                .spacing([40.0, 4.0])
                .striped(true)
                .show(ui, |ui| {
                    ui.strong("Undo Stack");
                    ui.strong("Redo Stack");
                    ui.end_row();

                    let undo_stack = store.history().undo_stack();
                    let redo_stack = store.history().redo_stack();
                    for i in 0..undo_stack.len().max(redo_stack.len()) {
                        ui.label(undo_stack.get(i).map_or("", |c| c.label()));
                        ui.label(redo_stack.get(i).map_or("", |c| c.label()));
                        ui.end_row();
                    }
                });
        });
}
