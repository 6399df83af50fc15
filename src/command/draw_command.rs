use crate::document::{Document, Snapshot};

/// One undoable edit: the whole bitmap before and after it happened.
#[derive(Debug, Clone)]
pub struct DrawCommand {
    label: &'static str,
    before: Snapshot,
    after: Snapshot,
}

impl DrawCommand {
    /// Pair `before` with the document's current bitmap.
    ///
    /// Returns `None` when the edit left the bitmap untouched, so no-op
    /// strokes (e.g. a click that landed beside the image) never reach the
    /// history.
    pub fn capture(label: &'static str, before: Snapshot, document: &Document) -> Option<Self> {
        if document.matches(&before) {
            log::debug!("Skipping no-op command: {}", label);
            return None;
        }
        Some(Self {
            label,
            before,
            after: document.snapshot(),
        })
    }

    pub fn label(&self) -> &'static str {
        self.label
    }

    pub fn before(&self) -> &Snapshot {
        &self.before
    }

    pub fn after(&self) -> &Snapshot {
        &self.after
    }

    /// Restore the bitmap as it was before the edit.
    pub fn undo(&self, document: &mut Document) {
        document.restore(self.before.clone());
    }

    /// Restore the bitmap as it was after the edit.
    pub fn redo(&self, document: &mut Document) {
        document.restore(self.after.clone());
    }
}
