use super::Command;
use crate::document::Document;

/// Manages the history of executed commands for undo/redo functionality
#[derive(Debug, Clone, Default)]
pub struct CommandHistory {
    /// Stack of commands that can be undone
    undo_stack: Vec<Command>,
    /// Stack of commands that can be redone
    redo_stack: Vec<Command>,
}

impl CommandHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Execute a command and record it. New work invalidates redo history.
    pub fn execute(&mut self, command: Command, document: &mut Document) {
        command.execute(document);
        self.undo_stack.push(command);
        self.redo_stack.clear();
    }

    /// Undo the last executed command. Returns false if there was nothing to
    /// undo or the document no longer ends with its element; the command then
    /// stays on the undo stack.
    pub fn undo(&mut self, document: &mut Document) -> bool {
        let Some(command) = self.undo_stack.pop() else {
            return false;
        };
        if !command.undo(document) {
            self.undo_stack.push(command);
            return false;
        }
        self.redo_stack.push(command);
        true
    }

    /// Redo the last undone command. Returns false if there was nothing to redo.
    pub fn redo(&mut self, document: &mut Document) -> bool {
        let Some(command) = self.redo_stack.pop() else {
            return false;
        };
        command.execute(document);
        self.undo_stack.push(command);
        true
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn undo_stack(&self) -> &[Command] {
        &self.undo_stack
    }

    pub fn redo_stack(&self) -> &[Command] {
        &self.redo_stack
    }

    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }
}
