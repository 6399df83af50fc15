use egui::{Context, PointerButton, Pos2, Rect};

mod router;
pub use router::{RouteOutcome, route_event};

const BUTTONS: [PointerButton; 3] = [
    PointerButton::Primary,
    PointerButton::Secondary,
    PointerButton::Middle,
];

/// Represents which part of the window an input event occurred in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelKind {
    /// Over the canvas panel, on or off the bitmap
    Canvas,
    /// Anywhere else: toolbar, status bar, an open window
    Outside,
}

/// Represents the location where an input event occurred
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InputLocation {
    /// Pixel center in bitmap coordinates
    pub position: Pos2,
    /// Whether the pointer was over the canvas panel
    pub panel: PanelKind,
}

/// Pointer input in canvas coordinates
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// Mouse button was pressed
    PointerDown {
        location: InputLocation,
        button: PointerButton,
    },
    /// Mouse moved
    PointerMove {
        location: InputLocation,
        /// Buttons that are currently held down
        held_buttons: Vec<PointerButton>,
    },
    /// Mouse button was released
    PointerUp {
        location: InputLocation,
        button: PointerButton,
    },
    /// Second click of a double click, reported after its release
    DoubleClick {
        location: InputLocation,
        button: PointerButton,
    },
}

/// Map a screen position to the center of the bitmap pixel under it.
pub fn to_canvas(pos: Pos2, canvas_rect: Rect) -> Pos2 {
    let offset = pos - canvas_rect.min;
    Pos2::new(offset.x.floor() + 0.5, offset.y.floor() + 0.5)
}

/// Handles converting raw egui input into canvas `InputEvent`s
#[derive(Debug, Default)]
pub struct InputHandler {
    last_pointer_pos: Option<Pos2>,
}

impl InputHandler {
    pub fn new() -> Self {
        Self::default()
    }

    fn make_location(pos: Pos2, canvas_rect: Rect, canvas_hovered: bool) -> InputLocation {
        InputLocation {
            position: to_canvas(pos, canvas_rect),
            panel: if canvas_hovered {
                PanelKind::Canvas
            } else {
                PanelKind::Outside
            },
        }
    }

    /// Collect this frame's pointer events, relative to the bitmap drawn at
    /// `canvas_rect`. `canvas_hovered` is false while a window covers it.
    pub fn process_input(
        &mut self,
        ctx: &Context,
        canvas_rect: Rect,
        canvas_hovered: bool,
    ) -> Vec<InputEvent> {
        let mut events = Vec::new();

        ctx.input(|input| {
            let pos = input.pointer.interact_pos().or(self.last_pointer_pos);
            let Some(pos) = pos else {
                return;
            };
            let location = Self::make_location(pos, canvas_rect, canvas_hovered);

            for button in BUTTONS {
                if input.pointer.button_pressed(button) {
                    events.push(InputEvent::PointerDown { location, button });
                }
            }

            if input.pointer.latest_pos().is_some() && Some(pos) != self.last_pointer_pos {
                let held_buttons = BUTTONS
                    .into_iter()
                    .filter(|button| input.pointer.button_down(*button))
                    .collect();
                events.push(InputEvent::PointerMove {
                    location,
                    held_buttons,
                });
            }

            for button in BUTTONS {
                if input.pointer.button_released(button) {
                    events.push(InputEvent::PointerUp { location, button });
                }
                if input.pointer.button_double_clicked(button) {
                    events.push(InputEvent::DoubleClick { location, button });
                }
            }

            self.last_pointer_pos = input.pointer.latest_pos().or(self.last_pointer_pos);
        });

        events
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::pos2;

    #[test]
    fn test_to_canvas_snaps_to_pixel_centers() {
        let rect = Rect::from_min_size(pos2(100.0, 50.0), egui::vec2(640.0, 480.0));
        assert_eq!(to_canvas(pos2(100.0, 50.0), rect), pos2(0.5, 0.5));
        assert_eq!(to_canvas(pos2(110.9, 52.2), rect), pos2(10.5, 2.5));
        assert_eq!(to_canvas(pos2(99.5, 49.0), rect), pos2(-0.5, -0.5));
    }

    #[test]
    fn test_location_panel() {
        let rect = Rect::from_min_size(pos2(0.0, 0.0), egui::vec2(10.0, 10.0));
        assert_eq!(
            InputHandler::make_location(pos2(5.0, 5.0), rect, true).panel,
            PanelKind::Canvas
        );
        // Past the bitmap edge but still over the panel
        let beside = InputHandler::make_location(pos2(15.0, 5.0), rect, true);
        assert_eq!(beside.panel, PanelKind::Canvas);
        assert_eq!(beside.position, pos2(15.5, 5.5));
        // A null image has an empty rect; the panel still counts
        let empty = Rect::from_min_size(pos2(0.0, 0.0), egui::Vec2::ZERO);
        assert_eq!(
            InputHandler::make_location(pos2(5.0, 5.0), empty, true).panel,
            PanelKind::Canvas
        );
        assert_eq!(
            InputHandler::make_location(pos2(5.0, 5.0), rect, false).panel,
            PanelKind::Outside
        );
    }
}
