use egui::{Color32, Vec2};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{ConfigError, ConfigResult};

/// Environment variable naming an optional JSON settings file
pub const CONFIG_ENV_VAR: &str = "SKETCHPAD_CONFIG";

/// User-tunable settings for the canvas, brushes, stickers and export.
///
/// Missing fields fall back to their defaults when deserializing, so partial
/// settings files are fine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Visible canvas size in points
    pub canvas_size: Vec2,
    /// Linear magnification applied when exporting
    pub export_scale: f32,
    pub thin_thickness: f32,
    pub thick_thickness: f32,
    pub brush_color: Color32,
    /// Font size used for sticker glyphs
    pub sticker_size: f32,
    /// Glyphs offered in the sticker palette on first start
    pub stickers: Vec<String>,
    pub export_file_name: String,
    pub background: Color32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            canvas_size: Vec2::new(256.0, 256.0),
            export_scale: 4.0,
            thin_thickness: 7.0,
            thick_thickness: 20.0,
            brush_color: Color32::BLACK,
            sticker_size: 24.0,
            stickers: vec!["🧽".to_owned(), "🧽".to_owned(), "😀".to_owned()],
            export_file_name: "high_resolution_drawing.png".to_owned(),
            background: Color32::WHITE,
        }
    }
}

impl Settings {
    /// Load settings from a JSON file and validate them
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let text = std::fs::read_to_string(path.as_ref())?;
        let settings: Settings = serde_json::from_str(&text)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load from the file named by `SKETCHPAD_CONFIG`, or use the defaults
    pub fn from_env() -> Self {
        let Ok(path) = std::env::var(CONFIG_ENV_VAR) else {
            return Self::default();
        };
        match Self::load(&path) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path);
                settings
            }
            Err(err) => {
                log::warn!("Ignoring settings file {}: {}", path, err);
                Self::default()
            }
        }
    }

    pub fn validate(&self) -> ConfigResult<()> {
        if !(self.canvas_size.x > 0.0 && self.canvas_size.y > 0.0) {
            return Err(invalid("canvas_size", format!("{:?}", self.canvas_size)));
        }
        for (field, value) in [
            ("export_scale", self.export_scale),
            ("thin_thickness", self.thin_thickness),
            ("thick_thickness", self.thick_thickness),
            ("sticker_size", self.sticker_size),
        ] {
            if !(value > 0.0 && value.is_finite()) {
                return Err(invalid(field, format!("must be positive, got {}", value)));
            }
        }
        if self.export_file_name.trim().is_empty() {
            return Err(invalid("export_file_name", "must not be empty".to_owned()));
        }
        Ok(())
    }
}

fn invalid(field: &'static str, reason: String) -> ConfigError {
    ConfigError::Invalid { field, reason }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let settings = Settings::default();
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_default_palette_keeps_duplicate_sponge() {
        let palette = crate::tool::StickerPalette::new(Settings::default().stickers.as_slice());
        let glyphs: Vec<_> = palette.entries().iter().map(|e| e.glyph.as_str()).collect();
        assert_eq!(glyphs, ["🧽", "🧽", "😀"]);
        assert_eq!(palette.get(2).map(|e| e.id), Some(2));
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let settings: Settings = serde_json::from_str(r#"{ "export_scale": 2.0 }"#).unwrap();
        assert_eq!(settings.export_scale, 2.0);
        assert_eq!(settings.thin_thickness, 7.0);
        assert_eq!(settings.canvas_size, Vec2::new(256.0, 256.0));
    }

    #[test]
    fn test_rejects_non_positive_values() {
        let settings = Settings {
            thick_thickness: 0.0,
            ..Default::default()
        };
        assert!(matches!(
            settings.validate(),
            Err(ConfigError::Invalid { field: "thick_thickness", .. })
        ));
    }

    #[test]
    fn test_load_missing_file() {
        let result = Settings::load("/definitely/not/here/settings.json");
        assert!(matches!(result, Err(ConfigError::Read(_))));
    }
}
