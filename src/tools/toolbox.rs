use egui::{Color32, Ui};
use serde::{Deserialize, Serialize};

use super::{
    CapStyle, DrawType, EraserTool, FillMode, JoinStyle, LineStyle, LineTool, PenTool, RectTool,
    ShapeType, Tool, ToolKind,
};
use crate::config::{DEFAULT_ERASER_THICKNESS, DEFAULT_PEN_THICKNESS};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColorRole {
    Foreground,
    Background,
}

/// The four tools, which one is selected, and the palette they paint with.
///
/// Pen, line and shape outlines use the foreground color, the eraser uses the
/// background color, and the shape fill follows its fill mode.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolBox {
    current: ToolKind,
    foreground: Color32,
    background: Color32,
    pen: PenTool,
    line: LineTool,
    eraser: EraserTool,
    rect: RectTool,
}

impl Default for ToolBox {
    fn default() -> Self {
        let foreground = Color32::BLACK;
        let background = Color32::WHITE;
        let mut toolbox = Self {
            current: ToolKind::Pen,
            foreground,
            background,
            pen: PenTool::new(foreground, DEFAULT_PEN_THICKNESS),
            line: LineTool::new(foreground, DEFAULT_PEN_THICKNESS),
            eraser: EraserTool::new(background, DEFAULT_ERASER_THICKNESS),
            rect: RectTool::new(foreground, DEFAULT_PEN_THICKNESS),
        };
        toolbox.sync_colors();
        toolbox
    }
}

impl ToolBox {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_kind(&self) -> ToolKind {
        self.current
    }

    pub fn current(&self) -> &dyn Tool {
        self.tool(self.current)
    }

    pub fn current_mut(&mut self) -> &mut dyn Tool {
        self.tool_mut(self.current)
    }

    pub fn tool(&self, kind: ToolKind) -> &dyn Tool {
        match kind {
            ToolKind::Pen => &self.pen,
            ToolKind::Line => &self.line,
            ToolKind::Eraser => &self.eraser,
            ToolKind::Rectangle => &self.rect,
        }
    }

    pub fn tool_mut(&mut self, kind: ToolKind) -> &mut dyn Tool {
        match kind {
            ToolKind::Pen => &mut self.pen,
            ToolKind::Line => &mut self.line,
            ToolKind::Eraser => &mut self.eraser,
            ToolKind::Rectangle => &mut self.rect,
        }
    }

    /// Select a tool. Returns false if it was already selected.
    pub fn select(&mut self, kind: ToolKind) -> bool {
        if self.current == kind {
            return false;
        }
        log::info!("Tool changed: {} -> {}", self.current.name(), kind.name());
        self.current = kind;
        true
    }

    pub fn pen(&self) -> &PenTool {
        &self.pen
    }

    pub fn line(&self) -> &LineTool {
        &self.line
    }

    pub fn eraser(&self) -> &EraserTool {
        &self.eraser
    }

    pub fn rect(&self) -> &RectTool {
        &self.rect
    }

    pub fn foreground(&self) -> Color32 {
        self.foreground
    }

    pub fn background(&self) -> Color32 {
        self.background
    }

    pub fn color(&self, role: ColorRole) -> Color32 {
        match role {
            ColorRole::Foreground => self.foreground,
            ColorRole::Background => self.background,
        }
    }

    pub fn set_color(&mut self, role: ColorRole, color: Color32) {
        match role {
            ColorRole::Foreground => self.foreground = color,
            ColorRole::Background => self.background = color,
        }
        self.sync_colors();
    }

    /// Push the palette into every tool's stroke and fill colors.
    pub fn sync_colors(&mut self) {
        self.pen.style.color = self.foreground;
        self.line.style.color = self.foreground;
        self.rect.style.color = self.foreground;
        self.eraser.style.color = self.background;
        self.rect.update_fill(self.foreground, self.background);
    }

    /// Show the settings of one tool; colors are re-synced after a change
    pub fn tool_ui(&mut self, kind: ToolKind, ui: &mut Ui) -> bool {
        let changed = self.tool_mut(kind).ui(ui);
        if changed {
            log::debug!("{} settings changed", kind.name());
            self.sync_colors();
        }
        changed
    }

    // Pen

    pub fn set_pen_cap(&mut self, cap: CapStyle) {
        self.pen.style.cap = cap;
    }

    pub fn set_pen_size(&mut self, size: f32) {
        self.pen.style.set_width(size);
    }

    // Eraser

    pub fn set_eraser_size(&mut self, size: f32) {
        self.eraser.style.set_width(size);
    }

    // Line

    pub fn set_line_style(&mut self, line_style: LineStyle) {
        self.line.style.line_style = line_style;
    }

    pub fn set_line_cap(&mut self, cap: CapStyle) {
        self.line.style.cap = cap;
    }

    pub fn set_draw_type(&mut self, draw_type: DrawType) {
        self.line.draw_type = draw_type;
    }

    pub fn set_line_thickness(&mut self, thickness: f32) {
        self.line.style.set_width(thickness);
    }

    // Rectangle

    pub fn set_rect_boundary_style(&mut self, line_style: LineStyle) {
        self.rect.style.line_style = line_style;
    }

    pub fn set_rect_shape(&mut self, shape: ShapeType) {
        self.rect.shape = shape;
    }

    pub fn set_rect_fill(&mut self, fill_mode: FillMode) {
        self.rect.fill_mode = fill_mode;
        self.rect.update_fill(self.foreground, self.background);
    }

    pub fn set_rect_join(&mut self, join: JoinStyle) {
        self.rect.style.join = join;
    }

    pub fn set_rect_thickness(&mut self, thickness: f32) {
        self.rect.style.set_width(thickness);
    }

    pub fn set_rect_curve(&mut self, curve: u32) {
        self.rect.set_curve(curve);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let tools = ToolBox::default();
        assert_eq!(tools.current_kind(), ToolKind::Pen);
        assert_eq!(tools.pen().style.width, DEFAULT_PEN_THICKNESS);
        assert_eq!(tools.eraser().style.width, DEFAULT_ERASER_THICKNESS);
        assert_eq!(tools.eraser().style.color, Color32::WHITE);
        assert_eq!(tools.rect().fill_color(), None);
    }

    #[test]
    fn test_select_reports_change() {
        let mut tools = ToolBox::default();
        assert!(!tools.select(ToolKind::Pen));
        assert!(tools.select(ToolKind::Line));
        assert_eq!(tools.current().kind(), ToolKind::Line);
    }

    #[test]
    fn test_colors_follow_roles() {
        let mut tools = ToolBox::default();
        tools.set_rect_fill(FillMode::Background);
        assert_eq!(tools.rect().fill_color(), Some(Color32::WHITE));

        tools.set_color(ColorRole::Foreground, Color32::RED);
        assert_eq!(tools.pen().style.color, Color32::RED);
        assert_eq!(tools.line().style.color, Color32::RED);
        assert_eq!(tools.rect().style.color, Color32::RED);
        assert_eq!(tools.eraser().style.color, Color32::WHITE);

        tools.set_color(ColorRole::Background, Color32::YELLOW);
        assert_eq!(tools.eraser().style.color, Color32::YELLOW);
        assert_eq!(tools.rect().fill_color(), Some(Color32::YELLOW));

        tools.set_rect_fill(FillMode::Foreground);
        assert_eq!(tools.rect().fill_color(), Some(Color32::RED));

        tools.set_rect_fill(FillMode::NoFill);
        assert_eq!(tools.rect().fill_color(), None);
    }

    #[test]
    fn test_setters_clamp() {
        let mut tools = ToolBox::default();
        tools.set_pen_size(80.0);
        assert_eq!(tools.pen().style.width, 50.0);
        tools.set_rect_curve(250);
        assert_eq!(tools.rect().curve, 100);
    }
}
