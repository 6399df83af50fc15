//! The canvas state machine.
//!
//! ```text
//!   ┌──────────┐  pointer down   ┌───────────┐
//!   │   Idle   ├────────────────►│  Drawing  │
//!   │          │◄────────────────┤ (before)  │
//!   └──────────┘  pointer up /   └───────────┘
//!                 undo / redo
//! ```
//!
//! While drawing, the bitmap as it was at pointer-down is held so that line
//! and shape tools can rubber-band and so the finished stroke can be turned
//! into one undoable command.

use crate::document::Snapshot;

#[derive(Debug, Default)]
pub enum EditorState {
    /// No active operation
    #[default]
    Idle,
    /// A stroke or shape is in progress
    Drawing { before: Snapshot },
}

impl EditorState {
    /// Returns true if the editor is currently in an idle state
    pub fn is_idle(&self) -> bool {
        matches!(self, EditorState::Idle)
    }

    /// Returns true if the editor is currently in a drawing state
    pub fn is_drawing(&self) -> bool {
        matches!(self, EditorState::Drawing { .. })
    }

    /// The bitmap saved when the current stroke started
    pub fn before(&self) -> Option<&Snapshot> {
        match self {
            EditorState::Drawing { before } => Some(before),
            EditorState::Idle => None,
        }
    }

    /// Leave the drawing state, handing back the saved bitmap
    pub fn finish(&mut self) -> Option<Snapshot> {
        match std::mem::take(self) {
            EditorState::Drawing { before } => Some(before),
            EditorState::Idle => None,
        }
    }
}
