use egui::{Color32, Pos2};
use raster_paint::bitmap;
use raster_paint::command::{CommandError, CommandHistory, DrawCommand};
use raster_paint::document::Document;
use raster_paint::state::EditorContext;
use raster_paint::tools::ToolBox;

// Helper to create an editor with a blank white canvas
fn create_test_editor() -> EditorContext {
    let mut editor = EditorContext::new(ToolBox::default());
    editor.tools.set_pen_size(3.0);
    editor.new_image(64, 16).unwrap();
    editor
}

fn stroke(editor: &mut EditorContext, from: Pos2, to: Pos2) -> bool {
    editor.pointer_down(from);
    editor.pointer_move(to);
    editor.pointer_up(to)
}

#[test]
fn test_stroke_is_one_undo_step() {
    let mut editor = create_test_editor();
    assert_eq!(editor.history.undo_stack().len(), 1);

    assert!(stroke(&mut editor, Pos2::new(4.5, 8.5), Pos2::new(40.5, 8.5)));
    assert_eq!(editor.history.undo_stack().len(), 2);
    assert_eq!(editor.history.undo_text(), Some("Pen stroke"));
    assert_eq!(editor.document.pixel(20, 8), Some(Color32::BLACK));

    assert!(editor.undo());
    assert_eq!(editor.document.pixel(20, 8), Some(Color32::WHITE));
    assert!(editor.can_redo());

    assert!(editor.redo());
    assert_eq!(editor.document.pixel(20, 8), Some(Color32::BLACK));
    assert!(!editor.can_redo());
}

#[test]
fn test_undo_back_to_null_image() {
    let mut editor = create_test_editor();
    assert!(editor.undo());
    assert!(editor.document.is_null());
    assert!(!editor.undo());
    assert!(editor.redo());
    assert_eq!(editor.document.size(), Some((64, 16)));
}

#[test]
fn test_new_command_discards_redo() {
    let mut editor = create_test_editor();
    stroke(&mut editor, Pos2::new(4.5, 4.5), Pos2::new(30.5, 4.5));
    editor.undo();
    assert_eq!(editor.history.redo_stack().len(), 1);

    stroke(&mut editor, Pos2::new(4.5, 12.5), Pos2::new(30.5, 12.5));
    assert!(!editor.can_redo());
    assert_eq!(editor.document.pixel(15, 4), Some(Color32::WHITE));
    assert_eq!(editor.document.pixel(15, 12), Some(Color32::BLACK));
}

#[test]
fn test_unchanged_bitmap_pushes_nothing() {
    let mut editor = create_test_editor();

    // Clearing a blank canvas changes nothing
    assert!(!editor.clear_image());
    assert_eq!(editor.history.undo_stack().len(), 1);

    // Painting black over black changes nothing either
    stroke(&mut editor, Pos2::new(4.5, 8.5), Pos2::new(40.5, 8.5));
    assert!(!stroke(&mut editor, Pos2::new(20.5, 8.5), Pos2::new(20.5, 8.5)));
    assert_eq!(editor.history.undo_stack().len(), 2);
}

#[test]
fn test_undo_abandons_stroke_in_progress() {
    let mut editor = create_test_editor();
    stroke(&mut editor, Pos2::new(4.5, 4.5), Pos2::new(30.5, 4.5));

    editor.pointer_down(Pos2::new(4.5, 12.5));
    editor.pointer_move(Pos2::new(30.5, 12.5));
    assert!(editor.state().is_drawing());

    assert!(editor.undo());
    assert!(editor.state().is_idle());
    assert_eq!(editor.document.pixel(15, 12), Some(Color32::WHITE));
    assert_eq!(editor.document.pixel(15, 4), Some(Color32::WHITE));

    // The release that follows is ignored
    assert!(!editor.pointer_up(Pos2::new(30.5, 12.5)));
    assert_eq!(editor.history.undo_stack().len(), 1);
}

#[test]
fn test_history_drops_oldest_past_limit() {
    let mut document = Document::new();
    let mut history = CommandHistory::with_limit(3);

    for shade in 0..5u8 {
        let before = document.snapshot();
        document.replace(bitmap::new_filled(2, 2, Color32::from_gray(shade * 40)).unwrap());
        let command = DrawCommand::capture("Fill", before, &document).unwrap();
        history.push(command, &mut document);
    }

    assert_eq!(history.undo_stack().len(), 3);
    while history.can_undo() {
        history.undo(&mut document).unwrap();
    }
    // The two oldest commands are gone, so the earliest reachable state is
    // the second fill.
    assert_eq!(document.pixel(0, 0), Some(Color32::from_gray(40)));
    assert_eq!(history.undo(&mut document), Err(CommandError::NothingToUndo));
}

#[test]
fn test_set_limit_trims_immediately() {
    let mut document = Document::new();
    let mut history = CommandHistory::new();

    for shade in 0..5u8 {
        let before = document.snapshot();
        document.replace(bitmap::new_filled(2, 2, Color32::from_gray(shade * 40)).unwrap());
        let command = DrawCommand::capture("Fill", before, &document).unwrap();
        history.push(command, &mut document);
    }
    assert_eq!(history.undo_stack().len(), 5);

    history.set_limit(2);
    assert_eq!(history.limit(), 2);
    assert_eq!(history.undo_stack().len(), 2);

    history.undo(&mut document).unwrap();
    history.undo(&mut document).unwrap();
    assert_eq!(document.pixel(0, 0), Some(Color32::from_gray(80)));
    assert_eq!(history.undo(&mut document), Err(CommandError::NothingToUndo));
}

#[test]
fn test_editor_history_is_bounded() {
    let mut editor = EditorContext::new(ToolBox::default());
    editor.tools.set_pen_size(3.0);
    editor.new_image(128, 4).unwrap();
    for x in 0..110 {
        let at = Pos2::new(x as f32 + 0.5, 1.5);
        assert!(stroke(&mut editor, at, at));
    }
    assert_eq!(editor.history.undo_stack().len(), raster_paint::config::UNDO_LIMIT);
}

#[test]
fn test_capture_skips_identical_bitmaps() {
    let document = Document::with_image(bitmap::new_filled(3, 3, Color32::WHITE).unwrap());
    assert!(DrawCommand::capture("Nothing", document.snapshot(), &document).is_none());
    assert!(DrawCommand::capture("Nothing", None, &Document::new()).is_none());
}

#[test]
fn test_capture_keeps_both_bitmaps() {
    let mut document = Document::new();
    let before = document.snapshot();
    document.replace(bitmap::new_filled(4, 3, Color32::WHITE).unwrap());

    let command = DrawCommand::capture("New image", before, &document).unwrap();
    assert!(command.before().is_none());
    let after = command.after().as_ref().unwrap();
    assert_eq!((after.width(), after.height()), (4, 3));
    assert!(document.matches(command.after()));
}
