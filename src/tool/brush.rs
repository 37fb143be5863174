use egui::Color32;

use crate::config::Settings;

/// Brush settings used for new strokes
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Brush {
    pub thickness: f32,
    pub color: Color32,
}

impl Brush {
    pub fn new(thickness: f32, color: Color32) -> Self {
        Self { thickness, color }
    }

    /// Radius of the circular preview
    pub fn preview_radius(&self) -> f32 {
        self.thickness / 2.0
    }
}

/// The two brush buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrushPreset {
    Thin,
    Thick,
}

impl BrushPreset {
    pub const ALL: [BrushPreset; 2] = [BrushPreset::Thin, BrushPreset::Thick];

    pub fn label(&self) -> &'static str {
        match self {
            BrushPreset::Thin => "Thin Brush",
            BrushPreset::Thick => "Thick Brush",
        }
    }

    pub fn thickness(&self, settings: &Settings) -> f32 {
        match self {
            BrushPreset::Thin => settings.thin_thickness,
            BrushPreset::Thick => settings.thick_thickness,
        }
    }
}
