use egui::{Color32, Pos2, Ui};
use serde::{Deserialize, Serialize};
use tiny_skia::Pixmap;

use super::raster;
use super::style::{self, StrokeStyle};
use super::{Tool, ToolKind};
use crate::config::DEFAULT_ERASER_THICKNESS;

/// Paints freehand in the background color.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EraserTool {
    pub style: StrokeStyle,
    #[serde(skip)]
    start: Pos2,
}

impl Default for EraserTool {
    fn default() -> Self {
        Self::new(Color32::WHITE, DEFAULT_ERASER_THICKNESS)
    }
}

impl EraserTool {
    pub fn new(color: Color32, width: f32) -> Self {
        Self {
            style: StrokeStyle::new(color, width),
            start: Pos2::ZERO,
        }
    }
}

impl Tool for EraserTool {
    fn kind(&self) -> ToolKind {
        ToolKind::Eraser
    }

    fn style(&self) -> &StrokeStyle {
        &self.style
    }

    fn style_mut(&mut self) -> &mut StrokeStyle {
        &mut self.style
    }

    fn start_point(&self) -> Pos2 {
        self.start
    }

    fn set_start_point(&mut self, pos: Pos2) {
        self.start = pos;
    }

    fn draw_to(&mut self, end: Pos2, pixmap: &mut Pixmap) {
        raster::draw_segment(pixmap, self.start, end, &self.style);
        self.start = end;
    }

    fn ui(&mut self, ui: &mut Ui) -> bool {
        style::size_ui(ui, "Eraser Thickness", &mut self.style)
    }
}
