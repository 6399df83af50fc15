use egui::Color32;
use serde::{Deserialize, Serialize};
use tiny_skia::{LineCap, LineJoin, Paint, StrokeDash};

use crate::bitmap;
use crate::config::PEN_SIZE_RANGE;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LineStyle {
    #[default]
    Solid,
    Dashed,
    Dotted,
    DashDotted,
    DashDotDotted,
}

impl LineStyle {
    pub const ALL: [Self; 5] = [
        Self::Solid,
        Self::Dashed,
        Self::Dotted,
        Self::DashDotted,
        Self::DashDotDotted,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Solid => "Solid",
            Self::Dashed => "Dashed",
            Self::Dotted => "Dotted",
            Self::DashDotted => "Dash-Dotted",
            Self::DashDotDotted => "Dash-Dot-Dotted",
        }
    }

    /// On/off intervals in multiples of the pen width; `None` for solid.
    pub fn dash_pattern(self) -> Option<&'static [f32]> {
        match self {
            Self::Solid => None,
            Self::Dashed => Some(&[4.0, 2.0]),
            Self::Dotted => Some(&[1.0, 2.0]),
            Self::DashDotted => Some(&[4.0, 2.0, 1.0, 2.0]),
            Self::DashDotDotted => Some(&[4.0, 2.0, 1.0, 2.0, 1.0, 2.0]),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CapStyle {
    Flat,
    Square,
    #[default]
    Round,
}

impl CapStyle {
    pub const ALL: [Self; 3] = [Self::Flat, Self::Square, Self::Round];

    pub fn label(self) -> &'static str {
        match self {
            Self::Flat => "Flat",
            Self::Square => "Square",
            Self::Round => "Round",
        }
    }

    pub fn to_skia(self) -> LineCap {
        match self {
            Self::Flat => LineCap::Butt,
            Self::Square => LineCap::Square,
            Self::Round => LineCap::Round,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum JoinStyle {
    Miter,
    #[default]
    Bevel,
    Round,
}

impl JoinStyle {
    pub const ALL: [Self; 3] = [Self::Miter, Self::Bevel, Self::Round];

    pub fn label(self) -> &'static str {
        match self {
            Self::Miter => "Miter",
            Self::Bevel => "Bevel",
            Self::Round => "Round",
        }
    }

    pub fn to_skia(self) -> LineJoin {
        match self {
            Self::Miter => LineJoin::Miter,
            Self::Bevel => LineJoin::Bevel,
            Self::Round => LineJoin::Round,
        }
    }
}

/// How a tool strokes: color, width, dash pattern, caps and joins.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StrokeStyle {
    pub color: Color32,
    pub width: f32,
    pub line_style: LineStyle,
    pub cap: CapStyle,
    pub join: JoinStyle,
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self::new(Color32::BLACK, 1.0)
    }
}

impl StrokeStyle {
    pub fn new(color: Color32, width: f32) -> Self {
        Self {
            color,
            width,
            line_style: LineStyle::default(),
            cap: CapStyle::default(),
            join: JoinStyle::default(),
        }
    }

    /// Width actually used for rasterizing, never thinner than one pixel.
    pub fn effective_width(&self) -> f32 {
        self.width.max(1.0)
    }

    pub fn set_width(&mut self, width: f32) {
        self.width = width.clamp(*PEN_SIZE_RANGE.start(), *PEN_SIZE_RANGE.end());
    }

    pub fn paint(&self) -> Paint<'static> {
        solid_paint(self.color)
    }

    pub fn to_skia(&self) -> tiny_skia::Stroke {
        let width = self.effective_width();
        let dash = self.line_style.dash_pattern().and_then(|pattern| {
            StrokeDash::new(pattern.iter().map(|interval| interval * width).collect(), 0.0)
        });
        tiny_skia::Stroke {
            width,
            miter_limit: 2.0,
            line_cap: self.cap.to_skia(),
            line_join: self.join.to_skia(),
            dash,
        }
    }
}

/// Aliased solid-color paint; the canvas is never anti-aliased.
pub fn solid_paint(color: Color32) -> Paint<'static> {
    let mut paint = Paint::default();
    paint.set_color(bitmap::skia_color(color));
    paint.anti_alias = false;
    paint
}

pub fn size_ui(ui: &mut egui::Ui, label: &str, style: &mut StrokeStyle) -> bool {
    let mut width = style.width;
    let changed = ui
        .add(egui::Slider::new(&mut width, PEN_SIZE_RANGE).step_by(1.0).text(label))
        .changed();
    if changed {
        style.set_width(width);
    }
    changed
}

pub fn line_style_ui(ui: &mut egui::Ui, heading: &str, value: &mut LineStyle) -> bool {
    let mut changed = false;
    ui.group(|ui| {
        ui.label(heading);
        for style in LineStyle::ALL {
            changed |= ui.radio_value(value, style, style.label()).changed();
        }
    });
    changed
}

pub fn cap_style_ui(ui: &mut egui::Ui, value: &mut CapStyle) -> bool {
    let mut changed = false;
    ui.group(|ui| {
        ui.label("Cap Style");
        for cap in CapStyle::ALL {
            changed |= ui.radio_value(value, cap, cap.label()).changed();
        }
    });
    changed
}

pub fn join_style_ui(ui: &mut egui::Ui, value: &mut JoinStyle) -> bool {
    let mut changed = false;
    ui.group(|ui| {
        ui.label("Boundary Type");
        for join in JoinStyle::ALL {
            changed |= ui.radio_value(value, join, join.label()).changed();
        }
    });
    changed
}
