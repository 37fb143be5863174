mod history;

use crate::document::Document;
use crate::element::{Element, ElementId};
use crate::sticker::Sticker;
use crate::stroke::Stroke;

pub use history::CommandHistory;

/// Undoable actions on the document
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Append a finished stroke
    AddStroke(Stroke),
    /// Append a placed sticker
    PlaceSticker(Sticker),
}

impl Command {
    pub fn element_id(&self) -> ElementId {
        match self {
            Command::AddStroke(stroke) => stroke.id(),
            Command::PlaceSticker(sticker) => sticker.id(),
        }
    }

    /// Short label used by the history view
    pub fn label(&self) -> &'static str {
        match self {
            Command::AddStroke(_) => "Add Stroke",
            Command::PlaceSticker(_) => "Place Sticker",
        }
    }

    pub fn execute(&self, document: &mut Document) {
        let element = match self {
            Command::AddStroke(stroke) => Element::Stroke(stroke.clone()),
            Command::PlaceSticker(sticker) => Element::Sticker(sticker.clone()),
        };
        document.add_element(element);
    }

    /// Remove the element this command added.
    ///
    /// Commands are undone in reverse order, so the element should be the
    /// newest one in the document. Returns false and leaves the document
    /// untouched when it is not.
    pub fn undo(&self, document: &mut Document) -> bool {
        let is_last = document
            .elements()
            .last()
            .is_some_and(|e| e.id() == self.element_id());
        if !is_last {
            log::warn!(
                "Undo of {} skipped: element {} is not the newest",
                self.label(),
                self.element_id()
            );
            return false;
        }
        document.remove_last_element();
        true
    }
}
