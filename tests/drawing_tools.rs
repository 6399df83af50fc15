use egui::{Color32, Pos2};
use raster_paint::state::EditorContext;
use raster_paint::tools::{DrawType, FillMode, ShapeType, Tool, ToolBox, ToolKind};

fn create_test_editor(kind: ToolKind) -> EditorContext {
    let mut editor = EditorContext::new(ToolBox::default());
    editor.new_image(40, 40).unwrap();
    editor.set_current_tool(kind);
    editor
}

fn drag(editor: &mut EditorContext, path: &[Pos2]) -> bool {
    let (first, rest) = path.split_first().unwrap();
    editor.pointer_down(*first);
    for pos in rest {
        editor.pointer_move(*pos);
    }
    editor.pointer_up(*path.last().unwrap())
}

fn p(x: f32, y: f32) -> Pos2 {
    Pos2::new(x, y)
}

#[test]
fn test_null_image_ignores_pointer() {
    let mut editor = EditorContext::new(ToolBox::default());
    editor.pointer_down(p(1.5, 1.5));
    assert!(editor.state().is_idle());
    editor.pointer_move(p(5.5, 5.5));
    assert!(!editor.pointer_up(p(5.5, 5.5)));
    assert!(!editor.can_undo());
}

#[test]
fn test_pen_follows_pointer() {
    let mut editor = create_test_editor(ToolKind::Pen);
    editor.tools.set_pen_size(3.0);
    assert!(drag(&mut editor, &[p(5.5, 5.5), p(20.5, 5.5), p(20.5, 30.5)]));

    assert_eq!(editor.document.pixel(12, 5), Some(Color32::BLACK));
    assert_eq!(editor.document.pixel(20, 18), Some(Color32::BLACK));
    assert_eq!(editor.document.pixel(12, 18), Some(Color32::WHITE));
}

#[test]
fn test_pen_click_leaves_dot() {
    let mut editor = create_test_editor(ToolKind::Pen);
    editor.tools.set_pen_size(5.0);
    editor.pointer_down(p(10.5, 10.5));
    assert!(editor.pointer_up(p(10.5, 10.5)));
    assert_eq!(editor.document.pixel(10, 10), Some(Color32::BLACK));
    assert_eq!(editor.document.pixel(20, 20), Some(Color32::WHITE));
}

#[test]
fn test_eraser_paints_background() {
    let mut editor = create_test_editor(ToolKind::Pen);
    editor.tools.set_pen_size(5.0);
    drag(&mut editor, &[p(5.5, 20.5), p(35.5, 20.5)]);
    assert_eq!(editor.document.pixel(20, 20), Some(Color32::BLACK));

    editor.set_current_tool(ToolKind::Eraser);
    assert!(drag(&mut editor, &[p(15.5, 20.5), p(25.5, 20.5)]));
    assert_eq!(editor.document.pixel(20, 20), Some(Color32::WHITE));
    assert_eq!(editor.document.pixel(7, 20), Some(Color32::BLACK));
    assert_eq!(editor.history.undo_text(), Some("Erase"));
}

#[test]
fn test_line_rubber_bands() {
    let mut editor = create_test_editor(ToolKind::Line);
    editor.tools.set_line_thickness(3.0);
    assert!(drag(&mut editor, &[p(5.5, 10.5), p(30.5, 10.5), p(5.5, 30.5)]));

    // Only the last preview survives
    assert_eq!(editor.document.pixel(20, 10), Some(Color32::WHITE));
    assert_eq!(editor.document.pixel(5, 20), Some(Color32::BLACK));
}

#[test]
fn test_polyline_continues_from_last_release() {
    let mut editor = create_test_editor(ToolKind::Line);
    editor.tools.set_line_thickness(3.0);
    editor.set_line_mode(DrawType::Poly);

    drag(&mut editor, &[p(5.5, 5.5), p(20.5, 5.5)]);
    assert!(editor.is_drawing_poly());
    assert_eq!(editor.tools.line().start_point(), p(20.5, 5.5));

    // The second press is ignored as an anchor; the segment starts where the
    // first one ended.
    drag(&mut editor, &[p(33.5, 33.5), p(20.5, 30.5)]);
    assert_eq!(editor.document.pixel(20, 18), Some(Color32::BLACK));
    assert_eq!(editor.document.pixel(33, 33), Some(Color32::WHITE));

    editor.double_click();
    assert!(!editor.is_drawing_poly());

    drag(&mut editor, &[p(2.5, 36.5), p(10.5, 36.5)]);
    assert_eq!(editor.document.pixel(6, 36), Some(Color32::BLACK));
}

#[test]
fn test_leaving_line_tool_ends_polyline() {
    let mut editor = create_test_editor(ToolKind::Line);
    editor.set_line_mode(DrawType::Poly);
    drag(&mut editor, &[p(5.5, 5.5), p(20.5, 5.5)]);
    assert!(editor.is_drawing_poly());

    editor.set_current_tool(ToolKind::Pen);
    assert!(!editor.is_drawing_poly());
}

#[test]
fn test_single_mode_ends_polyline() {
    let mut editor = create_test_editor(ToolKind::Line);
    editor.set_line_mode(DrawType::Poly);
    drag(&mut editor, &[p(5.5, 5.5), p(20.5, 5.5)]);
    editor.set_line_mode(DrawType::Single);
    assert!(!editor.is_drawing_poly());
    assert_eq!(editor.tools.line().draw_type, DrawType::Single);
}

#[test]
fn test_rectangle_outline_and_fill() {
    let mut editor = create_test_editor(ToolKind::Rectangle);
    editor.set_background(Color32::BLUE);
    editor.tools.set_rect_fill(FillMode::Background);
    assert!(drag(&mut editor, &[p(5.5, 5.5), p(12.5, 30.5), p(30.5, 30.5)]));

    assert_eq!(editor.document.pixel(18, 18), Some(Color32::BLUE));
    assert_eq!(editor.document.pixel(18, 5), Some(Color32::BLACK));
    assert_eq!(editor.document.pixel(5, 18), Some(Color32::BLACK));
    assert_eq!(editor.document.pixel(35, 35), Some(Color32::WHITE));
}

#[test]
fn test_ellipse_without_fill() {
    let mut editor = create_test_editor(ToolKind::Rectangle);
    editor.tools.set_rect_shape(ShapeType::Ellipse);
    editor.tools.set_rect_thickness(2.0);
    drag(&mut editor, &[p(4.5, 4.5), p(34.5, 34.5)]);

    // Corners of the bounding box stay untouched, as does the middle
    assert_eq!(editor.document.pixel(5, 5), Some(Color32::WHITE));
    assert_eq!(editor.document.pixel(19, 19), Some(Color32::WHITE));
    assert_eq!(editor.document.pixel(19, 4), Some(Color32::BLACK));
}

#[test]
fn test_foreground_change_reaches_tools() {
    let mut editor = create_test_editor(ToolKind::Pen);
    editor.set_foreground(Color32::RED);
    editor.tools.set_pen_size(3.0);
    drag(&mut editor, &[p(5.5, 5.5), p(30.5, 5.5)]);
    assert_eq!(editor.document.pixel(15, 5), Some(Color32::RED));
}
