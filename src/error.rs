use thiserror::Error;

/// Errors that can occur while exporting the drawing to a raster image
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Offscreen surface unavailable: {width}x{height}")]
    SurfaceUnavailable { width: u32, height: u32 },

    #[error("Failed to load export font: {0}")]
    Font(#[from] ab_glyph::InvalidFont),

    #[error("Failed to encode image: {0}")]
    Encode(#[from] image::ImageError),

    #[error("Failed to write export file: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors that can occur while loading settings
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read settings file: {0}")]
    Read(#[from] std::io::Error),

    #[error("Failed to parse settings: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid setting `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

pub type ExportResult<T> = Result<T, ExportError>;
pub type ConfigResult<T> = Result<T, ConfigError>;
