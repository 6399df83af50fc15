use egui::{Color32, Pos2, Rect, Ui};
use serde::{Deserialize, Serialize};
use tiny_skia::Pixmap;

use super::raster;
use super::style::{self, StrokeStyle};
use super::{Tool, ToolKind};
use crate::config::{DEFAULT_PEN_THICKNESS, DEFAULT_RECT_CURVE, RECT_CURVE_RANGE};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ShapeType {
    #[default]
    Rectangle,
    RoundedRectangle,
    Ellipse,
}

impl ShapeType {
    pub const ALL: [Self; 3] = [Self::Rectangle, Self::RoundedRectangle, Self::Ellipse];

    pub fn label(self) -> &'static str {
        match self {
            Self::Rectangle => "Rectangle",
            Self::RoundedRectangle => "Rounded Rectangle",
            Self::Ellipse => "Ellipse",
        }
    }
}

/// Which of the two palette colors fills the shape, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FillMode {
    Foreground,
    Background,
    #[default]
    NoFill,
}

impl FillMode {
    pub const ALL: [Self; 3] = [Self::Foreground, Self::Background, Self::NoFill];

    pub fn label(self) -> &'static str {
        match self {
            Self::Foreground => "Foreground Color",
            Self::Background => "Background Color",
            Self::NoFill => "No Fill",
        }
    }
}

/// Draws a rectangle, rounded rectangle or ellipse spanning the press point
/// and the pointer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RectTool {
    pub style: StrokeStyle,
    pub shape: ShapeType,
    pub fill_mode: FillMode,
    pub curve: u32,
    // Resolved from the palette by the tool box whenever colors change.
    #[serde(skip)]
    fill_color: Option<Color32>,
    #[serde(skip)]
    start: Pos2,
}

impl Default for RectTool {
    fn default() -> Self {
        Self::new(Color32::BLACK, DEFAULT_PEN_THICKNESS)
    }
}

impl RectTool {
    pub fn new(color: Color32, width: f32) -> Self {
        Self {
            style: StrokeStyle::new(color, width),
            shape: ShapeType::Rectangle,
            fill_mode: FillMode::NoFill,
            curve: DEFAULT_RECT_CURVE,
            fill_color: None,
            start: Pos2::ZERO,
        }
    }

    pub fn fill_color(&self) -> Option<Color32> {
        self.fill_color
    }

    /// Resolve the fill color for the current mode from the palette.
    pub fn update_fill(&mut self, foreground: Color32, background: Color32) {
        self.fill_color = match self.fill_mode {
            FillMode::Foreground => Some(foreground),
            FillMode::Background => Some(background),
            FillMode::NoFill => None,
        };
    }

    pub fn set_curve(&mut self, curve: u32) {
        self.curve = curve.clamp(*RECT_CURVE_RANGE.start(), *RECT_CURVE_RANGE.end());
    }

    fn bounds_to(&self, end: Pos2) -> Rect {
        Rect::from_two_pos(self.start, end)
    }
}

impl Tool for RectTool {
    fn kind(&self) -> ToolKind {
        ToolKind::Rectangle
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
        let rect = self.bounds_to(end);
        let path = match self.shape {
            ShapeType::Rectangle => raster::rect_path(rect),
            ShapeType::RoundedRectangle => raster::rounded_rect_path(rect, self.curve),
            ShapeType::Ellipse => raster::ellipse_path(rect),
        };
        if let Some(path) = path {
            raster::draw_shape(pixmap, &path, &self.style, self.fill_color);
        }
    }

    fn ui(&mut self, ui: &mut Ui) -> bool {
        let mut changed = false;
        ui.horizontal(|ui| {
            ui.vertical(|ui| {
                changed |= style::line_style_ui(ui, "Boundary Style", &mut self.style.line_style);
                changed |= style::join_style_ui(ui, &mut self.style.join);
            });
            ui.vertical(|ui| {
                ui.group(|ui| {
                    ui.label("Shape Type");
                    for shape in ShapeType::ALL {
                        changed |= ui.radio_value(&mut self.shape, shape, shape.label()).changed();
                    }
                });
                ui.group(|ui| {
                    ui.label("Fill Color");
                    for mode in FillMode::ALL {
                        changed |= ui.radio_value(&mut self.fill_mode, mode, mode.label()).changed();
                    }
                });
            });
        });
        changed |= style::size_ui(ui, "Line Thickness", &mut self.style);

        let mut curve = self.curve;
        let curve_changed = ui
            .add_enabled(
                self.shape == ShapeType::RoundedRectangle,
                egui::Slider::new(&mut curve, RECT_CURVE_RANGE).text("Rounded Rect Curve"),
            )
            .changed();
        if curve_changed {
            self.set_curve(curve);
        }
        changed || curve_changed
    }
}
