use std::path::Path;

use eframe::egui;

use crate::error::PaintResult;
use crate::state::EditorContext;

/// Extensions accepted when a dropped file carries no MIME type
const IMAGE_EXTENSIONS: [&str; 9] = [
    "png", "jpg", "jpeg", "gif", "webp", "bmp", "ico", "tif", "tiff",
];

/// Loads images dropped onto the window.
#[derive(Debug, Default)]
pub struct FileHandler {
    dropped_files: Vec<egui::DroppedFile>,
}

impl FileHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pick up files dropped this frame.
    /// Returns true if any new files arrived
    pub fn check_for_dropped_files(&mut self, ctx: &egui::Context) -> bool {
        ctx.input(|i| {
            if i.raw.dropped_files.is_empty() {
                false
            } else {
                self.dropped_files = i.raw.dropped_files.clone();
                true
            }
        })
    }

    /// Load the dropped images into the editor, one undoable command each.
    ///
    /// Returns the first error, after trying every file.
    pub fn process_dropped_files(&mut self, editor: &mut EditorContext) -> PaintResult<usize> {
        let mut loaded = 0;
        let mut first_error = None;

        for file in std::mem::take(&mut self.dropped_files) {
            let file_name = display_name(&file);
            if !is_image_file(&file) {
                log::warn!("Dropped file is not a supported type: {}", file_name);
                continue;
            }
            match load_dropped(&file, editor) {
                Ok(Some(_)) => loaded += 1,
                Ok(None) => log::warn!("Dropped file has no accessible data: {}", file_name),
                Err(err) => {
                    log::error!("Failed to load {}: {}", file_name, err);
                    first_error.get_or_insert(err);
                }
            }
        }

        match first_error {
            Some(err) => Err(err),
            None => Ok(loaded),
        }
    }

    /// Preview files being dragged over the application
    pub fn preview_files_being_dropped(&self, ctx: &egui::Context) {
        use egui::{Align2, Color32, Id, LayerId, Order, TextStyle};

        if ctx.input(|i| i.raw.hovered_files.is_empty()) {
            return;
        }

        let text = ctx.input(|i| {
            let mut text = "Open image:\n".to_owned();
            for file in &i.raw.hovered_files {
                if let Some(path) = &file.path {
                    text += &format!("\n{}", path.display());
                } else if !file.mime.is_empty() {
                    text += &format!("\n{}", file.mime);
                }
            }
            text
        });

        let painter = ctx.layer_painter(LayerId::new(Order::Foreground, Id::new("file_drop_target")));
        let screen_rect = ctx.screen_rect();
        painter.rect_filled(screen_rect, 0.0, Color32::from_black_alpha(192));
        painter.text(
            screen_rect.center(),
            Align2::CENTER_CENTER,
            text,
            TextStyle::Heading.resolve(&ctx.style()),
            Color32::WHITE,
        );
    }
}

fn display_name(file: &egui::DroppedFile) -> String {
    if let Some(path) = &file.path {
        path.display().to_string()
    } else if !file.name.is_empty() {
        file.name.clone()
    } else {
        "unknown".to_owned()
    }
}

/// Check if a file is an image based on MIME type or extension
pub fn is_image_file(file: &egui::DroppedFile) -> bool {
    if !file.mime.is_empty() {
        return file.mime.starts_with("image/");
    }
    let name = file
        .path
        .as_deref()
        .or_else(|| (!file.name.is_empty()).then(|| Path::new(&file.name)));
    name.is_some_and(has_image_extension)
}

pub fn has_image_extension(path: &Path) -> bool {
    path.extension()
        .map(|ext| ext.to_string_lossy().to_lowercase())
        .is_some_and(|ext| IMAGE_EXTENSIONS.contains(&ext.as_str()))
}

/// Ok(None) when the file has neither bytes nor a readable path.
fn load_dropped(file: &egui::DroppedFile, editor: &mut EditorContext) -> PaintResult<Option<bool>> {
    if let Some(bytes) = &file.bytes {
        log::info!("Loading dropped image from memory ({} bytes)", bytes.len());
        return editor.load_image_bytes(bytes).map(Some);
    }

    // The web build only ever receives bytes
    #[cfg(not(target_arch = "wasm32"))]
    {
        if let Some(path) = &file.path {
            return editor.load_image(path).map(Some);
        }
    }

    Ok(None)
}
