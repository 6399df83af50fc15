use egui::{Color32, Pos2, Ui};
use serde::{Deserialize, Serialize};
use tiny_skia::Pixmap;

use super::raster;
use super::style::{self, StrokeStyle};
use super::{Tool, ToolKind};
use crate::config::DEFAULT_PEN_THICKNESS;

/// Whether each drag draws a separate line or continues a polyline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DrawType {
    #[default]
    Single,
    Poly,
}

impl DrawType {
    pub fn label(self) -> &'static str {
        match self {
            Self::Single => "Single",
            Self::Poly => "Poly",
        }
    }
}

/// Straight line from the press point to the pointer. The start point is
/// kept across moves so the line rubber-bands.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LineTool {
    pub style: StrokeStyle,
    pub draw_type: DrawType,
    #[serde(skip)]
    start: Pos2,
}

impl Default for LineTool {
    fn default() -> Self {
        Self::new(Color32::BLACK, DEFAULT_PEN_THICKNESS)
    }
}

impl LineTool {
    pub fn new(color: Color32, width: f32) -> Self {
        Self {
            style: StrokeStyle::new(color, width),
            draw_type: DrawType::Single,
            start: Pos2::ZERO,
        }
    }
}

impl Tool for LineTool {
    fn kind(&self) -> ToolKind {
        ToolKind::Line
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
    }

    fn ui(&mut self, ui: &mut Ui) -> bool {
        let mut changed = false;
        ui.horizontal(|ui| {
            changed |= style::line_style_ui(ui, "Line Style", &mut self.style.line_style);
            ui.vertical(|ui| {
                changed |= style::cap_style_ui(ui, &mut self.style.cap);
                ui.group(|ui| {
                    ui.label("Draw Type");
                    for draw_type in [DrawType::Single, DrawType::Poly] {
                        changed |= ui
                            .radio_value(&mut self.draw_type, draw_type, draw_type.label())
                            .changed();
                    }
                });
            });
        });
        changed |= style::size_ui(ui, "Line Thickness", &mut self.style);
        changed
    }
}
