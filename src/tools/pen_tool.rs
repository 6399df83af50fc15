use egui::{Color32, Pos2, Ui};
use serde::{Deserialize, Serialize};
use tiny_skia::Pixmap;

use super::raster;
use super::style::{self, StrokeStyle};
use super::{Tool, ToolKind};
use crate::config::DEFAULT_PEN_THICKNESS;

/// Freehand pen: each move strokes from the previous point to the new one.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PenTool {
    pub style: StrokeStyle,
    #[serde(skip)]
    start: Pos2,
}

impl Default for PenTool {
    fn default() -> Self {
        Self::new(Color32::BLACK, DEFAULT_PEN_THICKNESS)
    }
}

impl PenTool {
    pub fn new(color: Color32, width: f32) -> Self {
        Self {
            style: StrokeStyle::new(color, width),
            start: Pos2::ZERO,
        }
    }
}

impl Tool for PenTool {
    fn kind(&self) -> ToolKind {
        ToolKind::Pen
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
        let mut changed = style::cap_style_ui(ui, &mut self.style.cap);
        changed |= style::size_ui(ui, "Pen Size", &mut self.style);
        changed
    }
}
