use crate::element::{Element, ElementId};
use crate::sticker::Sticker;
use crate::stroke::Stroke;

/// Committed work, in creation order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    elements: Vec<Element>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_element(&mut self, element: Element) {
        self.elements.push(element);
    }

    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    pub fn remove_last_element(&mut self) -> Option<Element> {
        self.elements.pop()
    }

    pub fn find_element_by_id(&self, id: ElementId) -> Option<&Element> {
        self.elements.iter().find(|e| e.id() == id)
    }

    /// Committed strokes in creation order
    pub fn strokes(&self) -> impl Iterator<Item = &Stroke> {
        self.elements.iter().filter_map(Element::as_stroke)
    }

    /// Committed stickers in creation order
    pub fn stickers(&self) -> impl Iterator<Item = &Sticker> {
        self.elements.iter().filter_map(Element::as_sticker)
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn clear(&mut self) {
        self.elements.clear();
    }
}
