use egui::PointerButton;

use super::{InputEvent, PanelKind};
use crate::state::EditorContext;
use crate::tools::ToolKind;

/// What the app should do after an event was routed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteOutcome {
    /// Nothing happened
    Ignored,
    /// The editor consumed the event; the canvas may need a repaint
    Handled,
    /// A finished stroke was pushed onto the undo stack
    Committed,
    /// Show the settings window of this tool
    OpenToolDialog(ToolKind),
}

/// Routes a canvas input event to the editor.
pub fn route_event(event: &InputEvent, editor: &mut EditorContext) -> RouteOutcome {
    match event {
        InputEvent::PointerDown { location, button } => {
            if location.panel != PanelKind::Canvas {
                return RouteOutcome::Ignored;
            }
            match button {
                PointerButton::Primary => {
                    editor.pointer_down(location.position);
                    if editor.state().is_drawing() {
                        RouteOutcome::Handled
                    } else {
                        RouteOutcome::Ignored
                    }
                }
                PointerButton::Secondary if editor.state().is_idle() => {
                    RouteOutcome::OpenToolDialog(editor.tools.current_kind())
                }
                _ => RouteOutcome::Ignored,
            }
        }
        InputEvent::PointerMove {
            location,
            held_buttons,
        } => {
            if editor.state().is_drawing() && held_buttons.contains(&PointerButton::Primary) {
                editor.pointer_move(location.position);
                RouteOutcome::Handled
            } else {
                RouteOutcome::Ignored
            }
        }
        InputEvent::PointerUp { location, button } => {
            if *button != PointerButton::Primary || !editor.state().is_drawing() {
                return RouteOutcome::Ignored;
            }
            if editor.pointer_up(location.position) {
                RouteOutcome::Committed
            } else {
                RouteOutcome::Handled
            }
        }
        InputEvent::DoubleClick { button, .. } => {
            if *button != PointerButton::Primary {
                return RouteOutcome::Ignored;
            }
            editor.double_click();
            RouteOutcome::Handled
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::InputLocation;
    use crate::tools::ToolBox;
    use egui::{Pos2, pos2};

    fn at(position: Pos2) -> InputLocation {
        InputLocation {
            position,
            panel: PanelKind::Canvas,
        }
    }

    fn editor() -> EditorContext {
        let mut editor = EditorContext::new(ToolBox::default());
        editor.new_image(32, 32).unwrap();
        editor
    }

    #[test]
    fn test_primary_drag_commits_stroke() {
        let mut editor = editor();
        let down = InputEvent::PointerDown {
            location: at(pos2(2.5, 2.5)),
            button: PointerButton::Primary,
        };
        assert_eq!(route_event(&down, &mut editor), RouteOutcome::Handled);

        let drag = InputEvent::PointerMove {
            location: at(pos2(10.5, 2.5)),
            held_buttons: vec![PointerButton::Primary],
        };
        assert_eq!(route_event(&drag, &mut editor), RouteOutcome::Handled);

        let up = InputEvent::PointerUp {
            location: at(pos2(10.5, 2.5)),
            button: PointerButton::Primary,
        };
        assert_eq!(route_event(&up, &mut editor), RouteOutcome::Committed);
        assert_eq!(editor.history.undo_stack().len(), 2);
    }

    #[test]
    fn test_hover_without_button_is_ignored() {
        let mut editor = editor();
        let hover = InputEvent::PointerMove {
            location: at(pos2(4.5, 4.5)),
            held_buttons: vec![],
        };
        assert_eq!(route_event(&hover, &mut editor), RouteOutcome::Ignored);
    }

    #[test]
    fn test_press_outside_canvas_is_ignored() {
        let mut editor = editor();
        let down = InputEvent::PointerDown {
            location: InputLocation {
                position: pos2(40.5, 4.5),
                panel: PanelKind::Outside,
            },
            button: PointerButton::Primary,
        };
        assert_eq!(route_event(&down, &mut editor), RouteOutcome::Ignored);
        assert!(editor.state().is_idle());
    }

    #[test]
    fn test_secondary_press_without_image_opens_dialog() {
        let mut editor = EditorContext::new(ToolBox::default());
        let down = InputEvent::PointerDown {
            location: at(pos2(100.5, 80.5)),
            button: PointerButton::Secondary,
        };
        assert_eq!(
            route_event(&down, &mut editor),
            RouteOutcome::OpenToolDialog(ToolKind::Pen)
        );
    }

    #[test]
    fn test_line_can_start_off_image() {
        let mut editor = editor();
        editor.set_current_tool(ToolKind::Line);
        let down = InputEvent::PointerDown {
            location: at(pos2(42.5, 10.5)),
            button: PointerButton::Primary,
        };
        assert_eq!(route_event(&down, &mut editor), RouteOutcome::Handled);

        let drag = InputEvent::PointerMove {
            location: at(pos2(5.5, 10.5)),
            held_buttons: vec![PointerButton::Primary],
        };
        route_event(&drag, &mut editor);
        let up = InputEvent::PointerUp {
            location: at(pos2(5.5, 10.5)),
            button: PointerButton::Primary,
        };
        assert_eq!(route_event(&up, &mut editor), RouteOutcome::Committed);
        assert_eq!(editor.document.pixel(10, 10), Some(egui::Color32::BLACK));
        assert_eq!(editor.document.pixel(31, 10), Some(egui::Color32::BLACK));
    }

    #[test]
    fn test_click_beside_image_records_nothing() {
        let mut editor = editor();
        let down = InputEvent::PointerDown {
            location: at(pos2(40.5, 4.5)),
            button: PointerButton::Primary,
        };
        assert_eq!(route_event(&down, &mut editor), RouteOutcome::Handled);
        let up = InputEvent::PointerUp {
            location: at(pos2(40.5, 4.5)),
            button: PointerButton::Primary,
        };
        assert_eq!(route_event(&up, &mut editor), RouteOutcome::Handled);
        assert_eq!(editor.history.undo_stack().len(), 1);
    }

    #[test]
    fn test_secondary_press_opens_current_tool_dialog() {
        let mut editor = editor();
        editor.set_current_tool(ToolKind::Rectangle);
        let down = InputEvent::PointerDown {
            location: at(pos2(4.5, 4.5)),
            button: PointerButton::Secondary,
        };
        assert_eq!(
            route_event(&down, &mut editor),
            RouteOutcome::OpenToolDialog(ToolKind::Rectangle)
        );
    }
}
