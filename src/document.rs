use egui::Color32;
use tiny_skia::Pixmap;

use crate::bitmap;

/// A full copy of the canvas bitmap, `None` while no image exists.
pub type Snapshot = Option<Pixmap>;

/// The single bitmap being edited.
///
/// The bitmap starts out null until an image is created or loaded. Every
/// mutable access bumps `revision`, which the renderer uses to decide when
/// the texture has to be re-uploaded.
#[derive(Debug, Default)]
pub struct Document {
    image: Option<Pixmap>,
    revision: u64,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_image(image: Pixmap) -> Self {
        Self {
            image: Some(image),
            revision: 1,
        }
    }

    pub fn is_null(&self) -> bool {
        self.image.is_none()
    }

    /// Width and height in pixels, `None` for a null image.
    pub fn size(&self) -> Option<(u32, u32)> {
        self.image.as_ref().map(|img| (img.width(), img.height()))
    }

    pub fn image(&self) -> Option<&Pixmap> {
        self.image.as_ref()
    }

    pub fn image_mut(&mut self) -> Option<&mut Pixmap> {
        if self.image.is_some() {
            self.revision += 1;
        }
        self.image.as_mut()
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<Color32> {
        self.image.as_ref().and_then(|img| bitmap::pixel(img, x, y))
    }

    pub fn snapshot(&self) -> Snapshot {
        self.image.clone()
    }

    pub fn restore(&mut self, snapshot: Snapshot) {
        self.image = snapshot;
        self.revision += 1;
    }

    pub fn replace(&mut self, image: Pixmap) {
        self.restore(Some(image));
    }

    /// True when the bitmap matches `snapshot` exactly.
    pub fn matches(&self, snapshot: &Snapshot) -> bool {
        bitmap::images_equal(self.image.as_ref(), snapshot.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_document_is_null() {
        let doc = Document::new();
        assert!(doc.is_null());
        assert_eq!(doc.size(), None);
        assert_eq!(doc.pixel(0, 0), None);
        assert!(doc.matches(&None));
    }

    #[test]
    fn test_revision_tracks_mutation() {
        let mut doc = Document::new();
        assert!(doc.image_mut().is_none());
        assert_eq!(doc.revision(), 0);

        doc.replace(bitmap::new_filled(3, 3, Color32::WHITE).unwrap());
        let after_replace = doc.revision();
        assert!(after_replace > 0);

        doc.image_mut().unwrap().fill(tiny_skia::Color::BLACK);
        assert!(doc.revision() > after_replace);
        assert_eq!(doc.pixel(1, 1), Some(Color32::BLACK));
    }

    #[test]
    fn test_snapshot_restore() {
        let mut doc = Document::with_image(bitmap::new_filled(2, 2, Color32::WHITE).unwrap());
        let before = doc.snapshot();

        doc.image_mut().unwrap().fill(tiny_skia::Color::BLACK);
        assert!(!doc.matches(&before));

        doc.restore(before.clone());
        assert!(doc.matches(&before));
        assert_eq!(doc.pixel(0, 0), Some(Color32::WHITE));

        doc.restore(None);
        assert!(doc.is_null());
    }
}
