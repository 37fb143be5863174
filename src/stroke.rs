use egui::{Color32, Pos2, Rect};

use crate::element::ElementId;

// Frozen stroke, as stored in the document
#[derive(Debug, Clone, PartialEq)]
pub struct Stroke {
    id: ElementId,
    points: Vec<Pos2>,
    color: Color32,
    thickness: f32,
}

// Stroke still being drawn
#[derive(Debug, Clone, PartialEq)]
pub struct MutableStroke {
    points: Vec<Pos2>,
    color: Color32,
    thickness: f32,
}

impl Stroke {
    pub fn new(color: Color32, thickness: f32, points: Vec<Pos2>) -> Self {
        Self {
            id: ElementId::new(),
            points,
            color,
            thickness,
        }
    }

    pub fn id(&self) -> ElementId {
        self.id
    }

    pub fn points(&self) -> &[Pos2] {
        &self.points
    }

    pub fn color(&self) -> Color32 {
        self.color
    }

    pub fn thickness(&self) -> f32 {
        self.thickness
    }
}

impl MutableStroke {
    /// Start a stroke at `origin`
    pub fn new(origin: Pos2, color: Color32, thickness: f32) -> Self {
        Self {
            points: vec![origin],
            color,
            thickness,
        }
    }

    pub fn add_point(&mut self, point: Pos2) {
        self.points.push(point);
    }

    // Freeze into an immutable Stroke with a fresh id
    pub fn to_stroke(&self) -> Stroke {
        Stroke::new(self.color, self.thickness, self.points.clone())
    }

    pub fn into_stroke(self) -> Stroke {
        Stroke::new(self.color, self.thickness, self.points)
    }

    pub fn points(&self) -> &[Pos2] {
        &self.points
    }

    pub fn color(&self) -> Color32 {
        self.color
    }

    pub fn thickness(&self) -> f32 {
        self.thickness
    }
}

/// Calculate the bounding box for a set of points
pub(crate) fn bounds(points: &[Pos2], padding: f32) -> Rect {
    if points.is_empty() {
        return Rect::NOTHING;
    }

    let mut min = Pos2::new(f32::INFINITY, f32::INFINITY);
    let mut max = Pos2::new(f32::NEG_INFINITY, f32::NEG_INFINITY);
    for point in points {
        min = min.min(*point);
        max = max.max(*point);
    }

    Rect::from_min_max(min, max).expand(padding)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mutable_stroke_grows() {
        let mut stroke = MutableStroke::new(Pos2::new(0.0, 0.0), Color32::RED, 2.0);
        stroke.add_point(Pos2::new(10.0, 10.0));
        assert_eq!(stroke.points().len(), 2);

        let frozen = stroke.into_stroke();
        assert_eq!(frozen.points(), &[Pos2::new(0.0, 0.0), Pos2::new(10.0, 10.0)]);
        assert_eq!(frozen.thickness(), 2.0);
        assert_eq!(frozen.color(), Color32::RED);
    }

    #[test]
    fn test_bounds_pad_every_side() {
        let rect = bounds(&[Pos2::new(10.0, 10.0), Pos2::new(20.0, 30.0)], 2.0);
        assert_eq!(rect.min, Pos2::new(8.0, 8.0));
        assert_eq!(rect.max, Pos2::new(22.0, 32.0));
    }

    #[test]
    fn test_frozen_strokes_get_distinct_ids() {
        let stroke = MutableStroke::new(Pos2::ZERO, Color32::BLACK, 1.0);
        assert_ne!(stroke.to_stroke().id(), stroke.to_stroke().id());
    }
}
