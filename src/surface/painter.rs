use egui::{Align2, Color32, FontId, Painter, Pos2, Rect, Shape, Stroke as EguiStroke};

use super::Surface;

/// Draws onto the visible canvas through an egui painter
pub struct PainterSurface<'a> {
    painter: &'a Painter,
    rect: Rect,
    background: Color32,
}

impl<'a> PainterSurface<'a> {
    pub fn new(painter: &'a Painter, rect: Rect, background: Color32) -> Self {
        Self {
            painter,
            rect,
            background,
        }
    }

    fn to_screen(&self, pos: Pos2) -> Pos2 {
        self.rect.min + pos.to_vec2()
    }
}

impl Surface for PainterSurface<'_> {
    fn clear(&mut self) {
        self.painter.rect_filled(self.rect, 0.0, self.background);
    }

    fn stroke_path(&mut self, points: &[Pos2], width: f32, color: Color32) {
        // A single point has zero length and leaves no mark
        if points.len() < 2 {
            return;
        }
        let points = points.iter().map(|p| self.to_screen(*p)).collect();
        self.painter
            .add(Shape::line(points, EguiStroke::new(width, color)));
    }

    fn fill_circle(&mut self, center: Pos2, radius: f32, color: Color32) {
        self.painter
            .circle_filled(self.to_screen(center), radius, color);
    }

    fn draw_text(&mut self, origin: Pos2, text: &str, size: f32, color: Color32) {
        self.painter.text(
            self.to_screen(origin),
            Align2::LEFT_BOTTOM,
            text,
            FontId::proportional(size),
            color,
        );
    }
}
