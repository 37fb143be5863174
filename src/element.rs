use uuid::Uuid;

use crate::sticker::Sticker;
use crate::stroke::Stroke;

/// Unique identifier of a committed element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ElementId(Uuid);

impl ElementId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ElementId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for ElementId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Anything that can be committed to the document
#[derive(Debug, Clone, PartialEq)]
pub enum Element {
    Stroke(Stroke),
    Sticker(Sticker),
}

impl Element {
    pub fn id(&self) -> ElementId {
        match self {
            Element::Stroke(s) => s.id(),
            Element::Sticker(s) => s.id(),
        }
    }

    pub fn as_stroke(&self) -> Option<&Stroke> {
        match self {
            Element::Stroke(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_sticker(&self) -> Option<&Sticker> {
        match self {
            Element::Sticker(s) => Some(s),
            _ => None,
        }
    }
}
