#![allow(dead_code)]

use egui::{Color32, Pos2};
use sketchpad::Surface;

/// One recorded surface call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    Clear,
    Path {
        points: Vec<Pos2>,
        width: f32,
        color: Color32,
    },
    Circle {
        center: Pos2,
        radius: f32,
        color: Color32,
    },
    Text {
        origin: Pos2,
        text: String,
        size: f32,
    },
}

/// Surface that records calls instead of drawing
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub calls: Vec<DrawCall>,
}

impl Surface for RecordingSurface {
    fn clear(&mut self) {
        self.calls.push(DrawCall::Clear);
    }

    fn stroke_path(&mut self, points: &[Pos2], width: f32, color: Color32) {
        self.calls.push(DrawCall::Path {
            points: points.to_vec(),
            width,
            color,
        });
    }

    fn fill_circle(&mut self, center: Pos2, radius: f32, color: Color32) {
        self.calls.push(DrawCall::Circle {
            center,
            radius,
            color,
        });
    }

    fn draw_text(&mut self, origin: Pos2, text: &str, size: f32, _color: Color32) {
        self.calls.push(DrawCall::Text {
            origin,
            text: text.to_owned(),
            size,
        });
    }
}

pub fn pos(x: f32, y: f32) -> Pos2 {
    Pos2::new(x, y)
}

/// Draw a stroke through `points` on the store and commit it
pub fn draw_stroke(store: &mut sketchpad::HistoryStore, points: &[Pos2], thickness: f32) {
    store.begin_stroke(points[0], thickness, Color32::BLACK);
    for point in &points[1..] {
        store.extend_stroke(*point);
    }
    store.commit_stroke();
}
