//! The editing context: the bitmap, its undo history and the tools, plus the
//! pointer protocol that drives them.
//!
//! Every operation that changes the bitmap saves a full copy beforehand and
//! pushes a [`DrawCommand`] afterwards, unless the bitmap came out identical.
//!
//! ```rust,no_run
//! use raster_paint::state::EditorContext;
//! use raster_paint::tools::ToolBox;
//! use egui::Pos2;
//!
//! let mut ctx = EditorContext::new(ToolBox::default());
//! ctx.new_image(640, 480).unwrap();
//! ctx.pointer_down(Pos2::new(10.5, 10.5));
//! ctx.pointer_move(Pos2::new(40.5, 25.5));
//! ctx.pointer_up(Pos2::new(40.5, 25.5));
//! assert!(ctx.history.can_undo());
//! ```

use std::path::{Path, PathBuf};

use egui::{Color32, Pos2, Ui};

use super::EditorState;
use crate::bitmap;
use crate::command::{CommandHistory, DrawCommand};
use crate::config;
use crate::document::{Document, Snapshot};
use crate::error::{PaintError, PaintResult};
use crate::tools::{ColorRole, DrawType, ToolBox, ToolKind};

#[derive(Debug, Default)]
pub struct EditorContext {
    /// The bitmap being edited
    pub document: Document,
    /// Undo/redo history for the document
    pub history: CommandHistory,
    /// Tool settings and the palette
    pub tools: ToolBox,
    state: EditorState,
    /// A polyline is being extended: the next press continues from the
    /// last release point instead of starting a new line
    drawing_poly: bool,
}

impl EditorContext {
    pub fn new(tools: ToolBox) -> Self {
        Self {
            tools,
            ..Self::default()
        }
    }

    pub fn state(&self) -> &EditorState {
        &self.state
    }

    pub fn is_drawing_poly(&self) -> bool {
        self.drawing_poly
    }

    // Pointer protocol

    /// Primary button pressed: remember the bitmap and anchor the tool.
    pub fn pointer_down(&mut self, pos: Pos2) {
        if self.document.is_null() {
            return;
        }
        if !self.drawing_poly {
            self.tools.current_mut().set_start_point(pos);
        }
        self.state = EditorState::Drawing {
            before: self.document.snapshot(),
        };
    }

    /// Pointer dragged with the primary button held.
    pub fn pointer_move(&mut self, pos: Pos2) {
        let EditorState::Drawing { before } = &self.state else {
            return;
        };
        if self.document.is_null() {
            return;
        }

        let kind = self.tools.current_kind();
        if kind.rubber_bands() {
            self.document.restore(before.clone());
            if kind == ToolKind::Line && self.tools.line().draw_type == DrawType::Poly {
                self.drawing_poly = true;
            }
        }
        if let Some(pixmap) = self.document.image_mut() {
            self.tools.current_mut().draw_to(pos, pixmap);
        }
    }

    /// Primary button released: finish the stroke and record it.
    ///
    /// Returns true if a command was pushed.
    pub fn pointer_up(&mut self, pos: Pos2) -> bool {
        let Some(before) = self.state.finish() else {
            return false;
        };
        if self.document.is_null() {
            return false;
        }

        let kind = self.tools.current_kind();
        if self.drawing_poly {
            self.tools.current_mut().set_start_point(pos);
        }
        if matches!(kind, ToolKind::Pen | ToolKind::Eraser) {
            if let Some(pixmap) = self.document.image_mut() {
                self.tools.current_mut().draw_to(pos, pixmap);
            }
        }
        self.commit(stroke_label(kind), before)
    }

    /// A double click ends the polyline in progress.
    pub fn double_click(&mut self) {
        if self.drawing_poly {
            log::debug!("Polyline finished");
            self.drawing_poly = false;
        }
    }

    /// Abandon a stroke in progress, putting the bitmap back as it was.
    pub fn cancel_stroke(&mut self) {
        if let Some(before) = self.state.finish() {
            log::debug!("Stroke cancelled");
            self.document.restore(before);
        }
    }

    // Image operations

    /// Replace the bitmap with a blank one filled with the background color.
    pub fn new_image(&mut self, width: u32, height: u32) -> PaintResult<bool> {
        config::validate_image_size(width, height)?;
        let image = bitmap::new_filled(width, height, self.tools.background())?;
        log::info!("New image: {}x{}", width, height);
        Ok(self.install("New image", image))
    }

    pub fn load_image(&mut self, path: &Path) -> PaintResult<bool> {
        let image = bitmap::load(path)?;
        log::info!("Loaded image from {}", path.display());
        Ok(self.install("Load image", image))
    }

    pub fn load_image_bytes(&mut self, bytes: &[u8]) -> PaintResult<bool> {
        let image = bitmap::decode(bytes)?;
        Ok(self.install("Load image", image))
    }

    /// Save as BMP. Saving never touches the history.
    pub fn save_image(&self, path: &Path) -> PaintResult<PathBuf> {
        let image = self.document.image().ok_or(PaintError::NoImage)?;
        let written = bitmap::save_bmp(image, path)?;
        log::info!("Saved image to {}", written.display());
        Ok(written)
    }

    /// Stretch the bitmap to a new size. Keeping the same size is a no-op.
    pub fn resize_image(&mut self, width: u32, height: u32) -> PaintResult<bool> {
        config::validate_image_size(width, height)?;
        let image = self.document.image().ok_or(PaintError::NoImage)?;
        if (image.width(), image.height()) == (width, height) {
            return Ok(false);
        }
        let scaled = bitmap::scale(image, width, height)?;
        log::info!("Resized image to {}x{}", width, height);
        Ok(self.install("Resize image", scaled))
    }

    /// Fill the whole bitmap with the background color.
    pub fn clear_image(&mut self) -> bool {
        if self.document.is_null() {
            return false;
        }
        self.cancel_stroke();
        let before = self.document.snapshot();
        let background = bitmap::skia_color(self.tools.background());
        if let Some(pixmap) = self.document.image_mut() {
            pixmap.fill(background);
        }
        self.commit("Clear image", before)
    }

    // History

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Returns false when there was nothing to undo.
    pub fn undo(&mut self) -> bool {
        self.cancel_stroke();
        match self.history.undo(&mut self.document) {
            Ok(()) => true,
            Err(err) => {
                log::debug!("{}", err);
                false
            }
        }
    }

    /// Returns false when there was nothing to redo.
    pub fn redo(&mut self) -> bool {
        self.cancel_stroke();
        match self.history.redo(&mut self.document) {
            Ok(()) => true,
            Err(err) => {
                log::debug!("{}", err);
                false
            }
        }
    }

    // Tools

    /// Switch tools. Leaving the line tool ends any polyline.
    pub fn set_current_tool(&mut self, kind: ToolKind) -> bool {
        if self.tools.current_kind() == kind {
            return false;
        }
        if self.tools.current_kind() == ToolKind::Line {
            self.drawing_poly = false;
        }
        self.tools.select(kind)
    }

    pub fn set_line_mode(&mut self, mode: DrawType) {
        if mode == DrawType::Single {
            self.drawing_poly = false;
        }
        self.tools.set_draw_type(mode);
    }

    pub fn set_color(&mut self, role: ColorRole, color: Color32) {
        self.tools.set_color(role, color);
    }

    pub fn set_foreground(&mut self, color: Color32) {
        self.set_color(ColorRole::Foreground, color);
    }

    pub fn set_background(&mut self, color: Color32) {
        self.set_color(ColorRole::Background, color);
    }

    /// Show one tool's settings, applying line-mode changes as they happen.
    pub fn tool_ui(&mut self, kind: ToolKind, ui: &mut Ui) -> bool {
        let changed = self.tools.tool_ui(kind, ui);
        if changed {
            let mode = self.tools.line().draw_type;
            self.set_line_mode(mode);
        }
        changed
    }

    fn install(&mut self, label: &'static str, image: tiny_skia::Pixmap) -> bool {
        self.cancel_stroke();
        let before = self.document.snapshot();
        self.document.replace(image);
        self.commit(label, before)
    }

    fn commit(&mut self, label: &'static str, before: Snapshot) -> bool {
        match DrawCommand::capture(label, before, &self.document) {
            Some(command) => {
                self.history.push(command, &mut self.document);
                true
            }
            None => false,
        }
    }
}

fn stroke_label(kind: ToolKind) -> &'static str {
    match kind {
        ToolKind::Pen => "Pen stroke",
        ToolKind::Line => "Line",
        ToolKind::Eraser => "Erase",
        ToolKind::Rectangle => "Shape",
    }
}
