// src/renderer.rs
use eframe::egui::{self, Color32, Pos2, Rect, TextureHandle, TextureOptions, Vec2};

use crate::bitmap;
use crate::document::Document;

/// Fill shown where there is no bitmap
const EMPTY_CANVAS: Color32 = Color32::from_gray(96);

/// Keeps the document bitmap uploaded as an egui texture.
#[derive(Default)]
pub struct Renderer {
    texture: Option<TextureHandle>,
    /// Document revision the texture was built from
    revision: Option<u64>,
}

impl std::fmt::Debug for Renderer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Renderer")
            .field("has_texture", &self.texture.is_some())
            .field("revision", &self.revision)
            .finish()
    }
}

impl Renderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// True when the bitmap changed since the last upload
    pub fn is_stale(&self, document: &Document) -> bool {
        self.revision != Some(document.revision())
    }

    /// Upload the bitmap if it changed.
    ///
    /// Returns the texture, or None for a null image.
    pub fn sync(&mut self, ctx: &egui::Context, document: &Document) -> Option<&TextureHandle> {
        if self.is_stale(document) {
            match document.image() {
                Some(pixmap) => {
                    let image = bitmap::to_color_image(pixmap);
                    match &mut self.texture {
                        Some(texture) => texture.set(image, TextureOptions::NEAREST),
                        None => {
                            self.texture =
                                Some(ctx.load_texture("canvas", image, TextureOptions::NEAREST));
                        }
                    }
                }
                None => self.texture = None,
            }
            self.revision = Some(document.revision());
        }
        self.texture.as_ref()
    }

    /// Size the canvas occupies on screen, one point per pixel
    pub fn canvas_size(document: &Document) -> Vec2 {
        document
            .size()
            .map(|(w, h)| Vec2::new(w as f32, h as f32))
            .unwrap_or(Vec2::ZERO)
    }

    /// Paint the bitmap with its top-left corner at `origin`, or fill
    /// `area` with a neutral color when there is no image.
    pub fn render(
        &mut self,
        ctx: &egui::Context,
        painter: &egui::Painter,
        origin: Pos2,
        area: Rect,
        document: &Document,
    ) {
        match self.sync(ctx, document) {
            Some(texture) => {
                let rect = Rect::from_min_size(origin, Self::canvas_size(document));
                let uv = Rect::from_min_max(Pos2::ZERO, Pos2::new(1.0, 1.0));
                painter.image(texture.id(), rect, uv, Color32::WHITE);
            }
            None => {
                painter.rect_filled(area, 0.0, EMPTY_CANVAS);
            }
        }
    }
}
