use egui::Pos2;

use crate::element::ElementId;

/// An emoji or text glyph placed on the canvas.
///
/// `position` is the left end of the text baseline, matching how the glyph is
/// drawn.
#[derive(Debug, Clone, PartialEq)]
pub struct Sticker {
    id: ElementId,
    glyph: String,
    position: Pos2,
    size: f32,
}

impl Sticker {
    pub fn new(glyph: impl Into<String>, position: Pos2, size: f32) -> Self {
        Self {
            id: ElementId::new(),
            glyph: glyph.into(),
            position,
            size,
        }
    }

    pub fn id(&self) -> ElementId {
        self.id
    }

    pub fn glyph(&self) -> &str {
        &self.glyph
    }

    pub fn position(&self) -> Pos2 {
        self.position
    }

    pub fn size(&self) -> f32 {
        self.size
    }
}
