use super::{CommandError, CommandResult, DrawCommand};
use crate::config::UNDO_LIMIT;
use crate::document::Document;

/// Bounded, linear undo/redo history of whole-bitmap commands
#[derive(Debug)]
pub struct CommandHistory {
    /// Stack of commands that can be undone, oldest first
    undo_stack: Vec<DrawCommand>,
    /// Stack of commands that can be redone
    redo_stack: Vec<DrawCommand>,
    limit: usize,
}

impl Default for CommandHistory {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandHistory {
    /// Creates a new empty history holding at most `UNDO_LIMIT` commands
    pub fn new() -> Self {
        Self::with_limit(UNDO_LIMIT)
    }

    /// A limit of zero means the history is unbounded
    pub fn with_limit(limit: usize) -> Self {
        Self {
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
            limit,
        }
    }

    /// Apply a command and put it on top of the undo stack.
    ///
    /// Anything that was undone is discarded, and the oldest command is
    /// dropped once the limit is exceeded.
    pub fn push(&mut self, command: DrawCommand, document: &mut Document) {
        command.redo(document);
        log::info!("Pushed command: {}", command.label());
        self.undo_stack.push(command);
        self.redo_stack.clear();
        self.enforce_limit();
    }

    /// Undo the last executed command
    pub fn undo(&mut self, document: &mut Document) -> CommandResult {
        let command = self.undo_stack.pop().ok_or(CommandError::NothingToUndo)?;
        command.undo(document);
        log::info!("Undo: {}", command.label());
        self.redo_stack.push(command);
        Ok(())
    }

    /// Redo the last undone command
    pub fn redo(&mut self, document: &mut Document) -> CommandResult {
        let command = self.redo_stack.pop().ok_or(CommandError::NothingToRedo)?;
        command.redo(document);
        log::info!("Redo: {}", command.label());
        self.undo_stack.push(command);
        Ok(())
    }

    /// Returns true if there are commands that can be undone
    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    /// Returns true if there are commands that can be redone
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Label of the command the next undo would revert
    pub fn undo_text(&self) -> Option<&'static str> {
        self.undo_stack.last().map(DrawCommand::label)
    }

    /// Label of the command the next redo would reapply
    pub fn redo_text(&self) -> Option<&'static str> {
        self.redo_stack.last().map(DrawCommand::label)
    }

    pub fn undo_stack(&self) -> &[DrawCommand] {
        &self.undo_stack
    }

    pub fn redo_stack(&self) -> &[DrawCommand] {
        &self.redo_stack
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Change the limit, dropping the oldest commands if the stack is over it
    pub fn set_limit(&mut self, limit: usize) {
        self.limit = limit;
        self.enforce_limit();
    }

    /// Clear the command history
    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }

    fn enforce_limit(&mut self) {
        if self.limit > 0 && self.undo_stack.len() > self.limit {
            let excess = self.undo_stack.len() - self.limit;
            self.undo_stack.drain(..excess);
            log::debug!("Dropped {} command(s) past the undo limit", excess);
        }
    }
}
