use egui::{Color32, Pos2};

use crate::command::{Command, CommandHistory};
use crate::document::Document;
use crate::sticker::Sticker;
use crate::stroke::MutableStroke;

/// Owns committed work, the undo/redo stacks and the stroke being drawn.
///
/// Every mutation bumps `revision`, which is the change notification the
/// renderer keys off.
#[derive(Debug, Clone, Default)]
pub struct HistoryStore {
    document: Document,
    history: CommandHistory,
    current_stroke: Option<MutableStroke>,
    revision: u64,
}

impl HistoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start the in-progress stroke. A stroke that was never committed is dropped.
    pub fn begin_stroke(&mut self, origin: Pos2, thickness: f32, color: Color32) -> &MutableStroke {
        if self.current_stroke.is_some() {
            log::debug!("Discarding uncommitted stroke");
        }
        self.mark_changed();
        self.current_stroke
            .insert(MutableStroke::new(origin, color, thickness))
    }

    /// Append a point to the in-progress stroke, if there is one
    pub fn extend_stroke(&mut self, point: Pos2) {
        if let Some(stroke) = &mut self.current_stroke {
            stroke.add_point(point);
            self.mark_changed();
        }
    }

    /// Freeze the in-progress stroke into the document
    pub fn commit_stroke(&mut self) {
        let Some(stroke) = self.current_stroke.take() else {
            return;
        };
        let stroke = stroke.into_stroke();
        log::debug!("Committing stroke {} ({} points)", stroke.id(), stroke.points().len());
        self.history
            .execute(Command::AddStroke(stroke), &mut self.document);
        self.mark_changed();
    }

    pub fn place_sticker(&mut self, glyph: &str, position: Pos2, size: f32) {
        let sticker = Sticker::new(glyph, position, size);
        log::debug!("Placing sticker {:?} at {:?}", glyph, position);
        self.history
            .execute(Command::PlaceSticker(sticker), &mut self.document);
        self.mark_changed();
    }

    pub fn undo(&mut self) {
        if self.history.undo(&mut self.document) {
            self.mark_changed();
        }
    }

    pub fn redo(&mut self) {
        if self.history.redo(&mut self.document) {
            self.mark_changed();
        }
    }

    /// Drop all committed work, both stacks and any stroke in progress
    pub fn clear(&mut self) {
        self.document.clear();
        self.history.clear();
        self.current_stroke = None;
        self.mark_changed();
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn history(&self) -> &CommandHistory {
        &self.history
    }

    pub fn current_stroke(&self) -> Option<&MutableStroke> {
        self.current_stroke.as_ref()
    }

    pub fn is_drawing(&self) -> bool {
        self.current_stroke.is_some()
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    pub fn undo_len(&self) -> usize {
        self.history.undo_stack().len()
    }

    pub fn redo_len(&self) -> usize {
        self.history.redo_stack().len()
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    fn mark_changed(&mut self) {
        self.revision += 1;
    }
}
