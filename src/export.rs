use std::io::Cursor;
use std::path::Path;

use egui::Vec2;
use image::{ImageFormat, RgbaImage};

use crate::error::ExportResult;
use crate::history::HistoryStore;
use crate::renderer::Renderer;
use crate::surface::RasterSurface;

/// Renders committed work to an offscreen image at a fixed magnification
#[derive(Debug, Clone, Copy)]
pub struct Exporter {
    scale: f32,
    renderer: Renderer,
}

impl Exporter {
    pub fn new(scale: f32, renderer: Renderer) -> Self {
        Self { scale, renderer }
    }

    /// Pixel size of an export of a canvas of `canvas_size` points
    pub fn output_size(&self, canvas_size: Vec2) -> [u32; 2] {
        let scaled = canvas_size * self.scale;
        [
            scaled.x.round().max(0.0) as u32,
            scaled.y.round().max(0.0) as u32,
        ]
    }

    /// Render everything but the tool preview
    pub fn render(&self, store: &HistoryStore, canvas_size: Vec2) -> ExportResult<RgbaImage> {
        let [width, height] = self.output_size(canvas_size);
        let mut surface = RasterSurface::new(width, height, self.scale)?;
        self.renderer.render_content(&mut surface, store);
        Ok(surface.into_image())
    }

    pub fn export_png_bytes(&self, store: &HistoryStore, canvas_size: Vec2) -> ExportResult<Vec<u8>> {
        let image = self.render(store, canvas_size)?;
        let mut bytes = Vec::new();
        image.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
        log::info!(
            "Exported {}x{} PNG ({} bytes)",
            image.width(),
            image.height(),
            bytes.len()
        );
        Ok(bytes)
    }

    /// Write a PNG to `path`, returning the exported size
    pub fn export_png(
        &self,
        store: &HistoryStore,
        canvas_size: Vec2,
        path: &Path,
    ) -> ExportResult<[u32; 2]> {
        let bytes = self.export_png_bytes(store, canvas_size)?;
        std::fs::write(path, bytes)?;
        log::info!("Saved export to {}", path.display());
        Ok(self.output_size(canvas_size))
    }
}
