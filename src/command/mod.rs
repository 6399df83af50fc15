mod draw_command;
mod history;

use thiserror::Error;

pub use draw_command::DrawCommand;
pub use history::CommandHistory;

/// Result type for command operations
pub type CommandResult = Result<(), CommandError>;

/// Errors that can occur when walking the history
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("Nothing to undo")]
    NothingToUndo,
    #[error("Nothing to redo")]
    NothingToRedo,
}
