use egui::Color32;

use crate::document::Document;
use crate::history::HistoryStore;
use crate::stroke::MutableStroke;
use crate::surface::Surface;
use crate::tool::ToolPreview;

/// Redraws the whole canvas from scratch.
///
/// Layering is fixed: committed strokes, committed stickers, the stroke in
/// progress, then the tool preview. Each layer is drawn in creation order.
#[derive(Debug, Clone, Copy)]
pub struct Renderer {
    sticker_color: Color32,
}

impl Default for Renderer {
    fn default() -> Self {
        Self {
            sticker_color: Color32::BLACK,
        }
    }
}

impl Renderer {
    /// Full redraw, including the preview when no stroke is being drawn
    pub fn render(
        &self,
        surface: &mut dyn Surface,
        store: &HistoryStore,
        preview: Option<&ToolPreview>,
    ) {
        self.render_content(surface, store);
        if store.is_drawing() {
            return;
        }
        if let Some(preview) = preview {
            self.draw_preview(surface, preview);
        }
    }

    /// Everything except the preview, as used for export
    pub fn render_content(&self, surface: &mut dyn Surface, store: &HistoryStore) {
        surface.clear();
        self.draw_document(surface, store.document());
        if let Some(stroke) = store.current_stroke() {
            draw_mutable_stroke(surface, stroke);
        }
    }

    fn draw_document(&self, surface: &mut dyn Surface, document: &Document) {
        for stroke in document.strokes() {
            surface.stroke_path(stroke.points(), stroke.thickness(), stroke.color());
        }
        for sticker in document.stickers() {
            surface.draw_text(
                sticker.position(),
                sticker.glyph(),
                sticker.size(),
                self.sticker_color,
            );
        }
    }

    fn draw_preview(&self, surface: &mut dyn Surface, preview: &ToolPreview) {
        match preview {
            ToolPreview::Brush {
                center,
                radius,
                color,
            } => surface.fill_circle(*center, *radius, *color),
            ToolPreview::Sticker {
                glyph,
                position,
                size,
            } => surface.draw_text(*position, glyph, *size, self.sticker_color),
        }
    }
}

fn draw_mutable_stroke(surface: &mut dyn Surface, stroke: &MutableStroke) {
    surface.stroke_path(stroke.points(), stroke.thickness(), stroke.color());
}
