//! Drawing primitives the tools forward to: segments, dots, rectangles,
//! rounded rectangles and ellipses.

use egui::{Color32, Pos2, Rect};
use tiny_skia::{FillRule, Path, PathBuilder, Pixmap, Transform};

use super::style::{solid_paint, CapStyle, StrokeStyle};

// 4/3 * tan(pi/8): control point offset for a quarter-ellipse cubic.
const KAPPA: f32 = 0.552_284_8;

/// Stroke a straight segment. A zero-length segment paints a single dot.
pub fn draw_segment(pixmap: &mut Pixmap, from: Pos2, to: Pos2, style: &StrokeStyle) {
    if from == to {
        draw_dot(pixmap, from, style);
        return;
    }

    let mut pb = PathBuilder::new();
    pb.move_to(from.x, from.y);
    pb.line_to(to.x, to.y);
    if let Some(path) = pb.finish() {
        pixmap.stroke_path(&path, &style.paint(), &style.to_skia(), Transform::identity(), None);
    }
}

/// Paint what a zero-length stroke leaves behind, which depends on the cap.
fn draw_dot(pixmap: &mut Pixmap, at: Pos2, style: &StrokeStyle) {
    let radius = style.effective_width() / 2.0;
    let path = match style.cap {
        CapStyle::Flat => None,
        CapStyle::Round => ellipse_path(Rect::from_center_size(at, egui::Vec2::splat(radius * 2.0))),
        CapStyle::Square => rect_path(Rect::from_center_size(at, egui::Vec2::splat(radius * 2.0))),
    };
    if let Some(path) = path {
        fill(pixmap, &path, style.color);
    }
}

/// Fill (optionally) and then stroke the outline of a closed shape.
pub fn draw_shape(pixmap: &mut Pixmap, path: &Path, style: &StrokeStyle, fill_color: Option<Color32>) {
    if let Some(color) = fill_color {
        fill(pixmap, path, color);
    }
    pixmap.stroke_path(path, &style.paint(), &style.to_skia(), Transform::identity(), None);
}

fn fill(pixmap: &mut Pixmap, path: &Path, color: Color32) {
    pixmap.fill_path(path, &solid_paint(color), FillRule::Winding, Transform::identity(), None);
}

pub fn rect_path(rect: Rect) -> Option<Path> {
    let mut pb = PathBuilder::new();
    pb.move_to(rect.min.x, rect.min.y);
    pb.line_to(rect.max.x, rect.min.y);
    pb.line_to(rect.max.x, rect.max.y);
    pb.line_to(rect.min.x, rect.max.y);
    pb.close();
    pb.finish()
}

/// Rounded rectangle whose corner radii are `curve` percent of half the
/// rectangle's width and height respectively.
pub fn rounded_rect_path(rect: Rect, curve: u32) -> Option<Path> {
    let factor = curve.min(100) as f32 / 100.0;
    let rx = rect.width() / 2.0 * factor;
    let ry = rect.height() / 2.0 * factor;
    if rx <= 0.0 || ry <= 0.0 {
        return rect_path(rect);
    }

    let (x0, y0, x1, y1) = (rect.min.x, rect.min.y, rect.max.x, rect.max.y);
    let (kx, ky) = (rx * KAPPA, ry * KAPPA);

    let mut pb = PathBuilder::new();
    pb.move_to(x0 + rx, y0);
    pb.line_to(x1 - rx, y0);
    pb.cubic_to(x1 - rx + kx, y0, x1, y0 + ry - ky, x1, y0 + ry);
    pb.line_to(x1, y1 - ry);
    pb.cubic_to(x1, y1 - ry + ky, x1 - rx + kx, y1, x1 - rx, y1);
    pb.line_to(x0 + rx, y1);
    pb.cubic_to(x0 + rx - kx, y1, x0, y1 - ry + ky, x0, y1 - ry);
    pb.line_to(x0, y0 + ry);
    pb.cubic_to(x0, y0 + ry - ky, x0 + rx - kx, y0, x0 + rx, y0);
    pb.close();
    pb.finish()
}

/// Ellipse inscribed in `rect`.
pub fn ellipse_path(rect: Rect) -> Option<Path> {
    let c = rect.center();
    let rx = rect.width() / 2.0;
    let ry = rect.height() / 2.0;
    let (kx, ky) = (rx * KAPPA, ry * KAPPA);

    let mut pb = PathBuilder::new();
    pb.move_to(c.x, c.y - ry);
    pb.cubic_to(c.x + kx, c.y - ry, c.x + rx, c.y - ky, c.x + rx, c.y);
    pb.cubic_to(c.x + rx, c.y + ky, c.x + kx, c.y + ry, c.x, c.y + ry);
    pb.cubic_to(c.x - kx, c.y + ry, c.x - rx, c.y + ky, c.x - rx, c.y);
    pb.cubic_to(c.x - rx, c.y - ky, c.x - kx, c.y - ry, c.x, c.y - ry);
    pb.close();
    pb.finish()
}
