use egui::{Color32, Pos2};

mod brush;
mod sticker;

pub use brush::{Brush, BrushPreset};
pub use sticker::{StickerEntry, StickerPalette};

/// The single active tool
#[derive(Debug, Clone, PartialEq)]
pub enum ActiveTool {
    Brush(Brush),
    Sticker { glyph: String },
}

/// What to draw on top of everything while not drawing
#[derive(Debug, Clone, PartialEq)]
pub enum ToolPreview {
    /// Filled circle the size of the brush tip
    Brush {
        center: Pos2,
        radius: f32,
        color: Color32,
    },
    /// The sticker glyph that would be placed
    Sticker {
        glyph: String,
        position: Pos2,
        size: f32,
    },
}

/// A sticker ready to be committed to the document
#[derive(Debug, Clone, PartialEq)]
pub struct StickerPlacement {
    pub glyph: String,
    pub position: Pos2,
    pub size: f32,
}

/// Current tool, brush settings and the pointer-following preview
#[derive(Debug, Clone)]
pub struct ToolState {
    active: ActiveTool,
    /// Brush used when no sticker is armed, kept across sticker placements
    brush: Brush,
    pointer: Pos2,
    preview_visible: bool,
    sticker_size: f32,
    revision: u64,
}

impl ToolState {
    pub fn new(brush: Brush, sticker_size: f32) -> Self {
        Self {
            active: ActiveTool::Brush(brush),
            brush,
            pointer: Pos2::ZERO,
            preview_visible: false,
            sticker_size,
            revision: 0,
        }
    }

    pub fn select_brush(&mut self, thickness: f32, color: Color32) {
        self.brush = Brush::new(thickness, color);
        self.active = ActiveTool::Brush(self.brush);
        self.preview_visible = true;
        log::debug!("Selected brush {:?}", self.brush);
        self.mark_changed();
    }

    pub fn select_sticker(&mut self, glyph: &str) {
        self.active = ActiveTool::Sticker {
            glyph: glyph.to_owned(),
        };
        self.preview_visible = true;
        log::debug!("Selected sticker {:?}", glyph);
        self.mark_changed();
    }

    /// Change the brush color; an active brush and its preview follow
    pub fn set_color(&mut self, color: Color32) {
        self.brush.color = color;
        if let ActiveTool::Brush(brush) = &mut self.active {
            brush.color = color;
        }
        self.mark_changed();
    }

    /// Move the preview to the pointer
    pub fn update_preview_position(&mut self, point: Pos2) {
        if self.pointer == point {
            return;
        }
        self.pointer = point;
        if self.preview_visible {
            self.mark_changed();
        }
    }

    /// Turn the sticker preview into a placement at `point`.
    ///
    /// Only sticker tools commit; brushes return `None` and stay selected.
    /// After placement the brush is active again with no preview until a
    /// tool is reselected.
    pub fn commit_preview(&mut self, point: Pos2) -> Option<StickerPlacement> {
        let ActiveTool::Sticker { glyph } = &self.active else {
            return None;
        };
        let placement = StickerPlacement {
            glyph: glyph.clone(),
            position: point,
            size: self.sticker_size,
        };
        self.active = ActiveTool::Brush(self.brush);
        self.preview_visible = false;
        self.pointer = point;
        self.mark_changed();
        Some(placement)
    }

    pub fn preview(&self) -> Option<ToolPreview> {
        if !self.preview_visible {
            return None;
        }
        Some(match &self.active {
            ActiveTool::Brush(brush) => ToolPreview::Brush {
                center: self.pointer,
                radius: brush.preview_radius(),
                color: brush.color,
            },
            ActiveTool::Sticker { glyph } => ToolPreview::Sticker {
                glyph: glyph.clone(),
                position: self.pointer,
                size: self.sticker_size,
            },
        })
    }

    pub fn active(&self) -> &ActiveTool {
        &self.active
    }

    pub fn brush(&self) -> Brush {
        self.brush
    }

    pub fn is_sticker_armed(&self) -> bool {
        matches!(self.active, ActiveTool::Sticker { .. })
    }

    pub fn pointer(&self) -> Pos2 {
        self.pointer
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    fn mark_changed(&mut self) {
        self.revision += 1;
    }
}
