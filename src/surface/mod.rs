use egui::{Color32, Pos2};

mod painter;
mod raster;

pub use painter::PainterSurface;
pub use raster::RasterSurface;

/// The 2D drawing primitives the renderer needs.
///
/// Coordinates are canvas-local points. Implementations apply their own
/// offset and scale.
pub trait Surface {
    /// Wipe the whole surface back to blank
    fn clear(&mut self);

    /// Stroke a polyline through `points`
    fn stroke_path(&mut self, points: &[Pos2], width: f32, color: Color32);

    fn fill_circle(&mut self, center: Pos2, radius: f32, color: Color32);

    /// Draw `text` with its baseline starting at `origin`
    fn draw_text(&mut self, origin: Pos2, text: &str, size: f32, color: Color32);
}
