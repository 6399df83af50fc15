use egui::{Pos2, Ui};
use serde::{Deserialize, Serialize};
use tiny_skia::Pixmap;

pub mod raster;
pub mod style;

mod eraser_tool;
mod line_tool;
mod pen_tool;
mod rect_tool;
mod toolbox;

pub use eraser_tool::EraserTool;
pub use line_tool::{DrawType, LineTool};
pub use pen_tool::PenTool;
pub use rect_tool::{FillMode, RectTool, ShapeType};
pub use style::{CapStyle, JoinStyle, LineStyle, StrokeStyle};
pub use toolbox::{ColorRole, ToolBox};

/// The available drawing tools
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ToolKind {
    #[default]
    Pen,
    Line,
    Eraser,
    Rectangle,
}

impl ToolKind {
    pub const ALL: [Self; 4] = [Self::Pen, Self::Line, Self::Eraser, Self::Rectangle];

    pub fn name(self) -> &'static str {
        match self {
            Self::Pen => "Pen Tool",
            Self::Line => "Line Tool",
            Self::Eraser => "Eraser",
            Self::Rectangle => "Rectangle Tool",
        }
    }

    /// Glyph shown on the toolbar button
    pub fn icon(self) -> &'static str {
        match self {
            Self::Pen => "✏",
            Self::Line => "╱",
            Self::Eraser => "⌫",
            Self::Rectangle => "◻",
        }
    }

    /// Line and shape tools redraw from the saved bitmap on every move
    pub fn rubber_bands(self) -> bool {
        matches!(self, Self::Line | Self::Rectangle)
    }
}

/// A stroke-style record plus the primitive it forwards pointer positions to.
pub trait Tool {
    fn kind(&self) -> ToolKind;

    fn style(&self) -> &StrokeStyle;

    fn style_mut(&mut self) -> &mut StrokeStyle;

    /// Where the current stroke or shape is anchored
    fn start_point(&self) -> Pos2;

    fn set_start_point(&mut self, pos: Pos2);

    /// Draw from the start point to `end` into the bitmap.
    fn draw_to(&mut self, end: Pos2, pixmap: &mut Pixmap);

    /// Show the tool's settings. Returns true if any setting changed.
    fn ui(&mut self, ui: &mut Ui) -> bool;
}
