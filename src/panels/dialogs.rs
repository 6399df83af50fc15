use std::path::PathBuf;

use crate::action::{AppAction, DialogKind};
use crate::config::{self, DEFAULT_IMG_HEIGHT, DEFAULT_IMG_WIDTH, IMG_HEIGHT_RANGE, IMG_WIDTH_RANGE};
use crate::state::EditorContext;
use crate::tools::{ColorRole, ToolKind};

/// Width/height prompt for a new canvas or a resize.
#[derive(Debug, Clone, PartialEq)]
pub struct SizeDialog {
    pub kind: DialogKind,
    pub width: u32,
    pub height: u32,
}

impl SizeDialog {
    pub fn new_image() -> Self {
        Self {
            kind: DialogKind::NewImage,
            width: DEFAULT_IMG_WIDTH,
            height: DEFAULT_IMG_HEIGHT,
        }
    }

    /// Starts from the current size, clamped into range.
    pub fn resize(width: u32, height: u32) -> Self {
        let (width, height) = config::clamp_image_size(width, height);
        Self {
            kind: DialogKind::ResizeImage,
            width,
            height,
        }
    }

    fn title(&self) -> &'static str {
        match self.kind {
            DialogKind::ResizeImage => "Resize Canvas",
            _ => "New Canvas",
        }
    }

    fn accept(&self) -> AppAction {
        let (width, height) = config::clamp_image_size(self.width, self.height);
        match self.kind {
            DialogKind::ResizeImage => AppAction::ResizeImage { width, height },
            _ => AppAction::NewImage { width, height },
        }
    }
}

/// File path prompt for opening or saving.
#[derive(Debug, Clone, PartialEq)]
pub struct PathDialog {
    pub kind: DialogKind,
    pub path: String,
}

impl PathDialog {
    pub fn open_image() -> Self {
        Self {
            kind: DialogKind::OpenImage,
            path: String::new(),
        }
    }

    pub fn save_image(path: String) -> Self {
        Self {
            kind: DialogKind::SaveImage,
            path,
        }
    }

    fn title(&self) -> &'static str {
        match self.kind {
            DialogKind::SaveImage => "Save Image",
            _ => "Load Image",
        }
    }

    fn accept(&self) -> Option<AppAction> {
        let path = self.path.trim();
        if path.is_empty() {
            return None;
        }
        let path = PathBuf::from(path);
        Some(match self.kind {
            DialogKind::SaveImage => AppAction::SaveImage(path),
            _ => AppAction::OpenImage(path),
        })
    }
}

enum Choice {
    Pending,
    Accept,
    Cancel,
}

fn ok_cancel(ui: &mut egui::Ui) -> Choice {
    let mut choice = Choice::Pending;
    ui.horizontal(|ui| {
        if ui.button("OK").clicked() {
            choice = Choice::Accept;
        }
        if ui.button("Cancel").clicked() {
            choice = Choice::Cancel;
        }
    });
    choice
}

/// The dialogs that can be open at once: one prompt, one tool window and
/// one color picker.
#[derive(Debug, Default)]
pub struct Dialogs {
    pub size: Option<SizeDialog>,
    pub path: Option<PathDialog>,
    pub tool: Option<ToolKind>,
    pub color: Option<ColorRole>,
    /// Last path an image was loaded from or saved to
    pub last_path: Option<PathBuf>,
}

impl Dialogs {
    pub fn is_prompt_open(&self) -> bool {
        self.size.is_some() || self.path.is_some()
    }

    pub fn show(&mut self, ctx: &egui::Context, editor: &mut EditorContext, actions: &mut Vec<AppAction>) {
        self.show_size(ctx, actions);
        self.show_path(ctx, actions);
        self.show_tool(ctx, editor);
        self.show_color(ctx, editor, actions);
    }

    fn show_size(&mut self, ctx: &egui::Context, actions: &mut Vec<AppAction>) {
        let Some(dialog) = &mut self.size else {
            return;
        };
        let mut choice = Choice::Pending;
        egui::Window::new(dialog.title())
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
            .show(ctx, |ui| {
                egui::Grid::new("canvas_size_grid").num_columns(2).show(ui, |ui| {
                    ui.label("Width");
                    ui.add(egui::DragValue::new(&mut dialog.width).range(IMG_WIDTH_RANGE));
                    ui.end_row();
                    ui.label("Height");
                    ui.add(egui::DragValue::new(&mut dialog.height).range(IMG_HEIGHT_RANGE));
                    ui.end_row();
                });
                choice = ok_cancel(ui);
            });

        match choice {
            Choice::Pending => {}
            Choice::Accept => {
                actions.push(dialog.accept());
                self.size = None;
            }
            Choice::Cancel => self.size = None,
        }
    }

    fn show_path(&mut self, ctx: &egui::Context, actions: &mut Vec<AppAction>) {
        let Some(dialog) = &mut self.path else {
            return;
        };
        let mut choice = Choice::Pending;
        egui::Window::new(dialog.title())
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
            .show(ctx, |ui| {
                let hint = match dialog.kind {
                    DialogKind::SaveImage => "image.bmp",
                    _ => "image.png",
                };
                let response = ui.add(
                    egui::TextEdit::singleline(&mut dialog.path)
                        .hint_text(hint)
                        .desired_width(320.0),
                );
                if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                    choice = Choice::Accept;
                }
                if dialog.kind == DialogKind::SaveImage {
                    ui.weak("Saved as BMP");
                }
                match ok_cancel(ui) {
                    Choice::Pending => {}
                    other => choice = other,
                }
            });

        match choice {
            Choice::Pending => {}
            Choice::Accept => {
                if let Some(action) = dialog.accept() {
                    actions.push(action);
                    self.path = None;
                }
            }
            Choice::Cancel => self.path = None,
        }
    }

    fn show_color(&mut self, ctx: &egui::Context, editor: &EditorContext, actions: &mut Vec<AppAction>) {
        let Some(role) = self.color else {
            return;
        };
        let title = match role {
            ColorRole::Foreground => "Foreground Color",
            ColorRole::Background => "Background Color",
        };
        let mut color = editor.tools.color(role);
        let mut open = true;
        egui::Window::new(title)
            .open(&mut open)
            .collapsible(false)
            .resizable(false)
            .show(ctx, |ui| {
                if egui::color_picker::color_picker_color32(
                    ui,
                    &mut color,
                    egui::color_picker::Alpha::Opaque,
                ) {
                    actions.push(AppAction::SetColor(role, color));
                }
            });
        if !open {
            self.color = None;
        }
    }

    fn show_tool(&mut self, ctx: &egui::Context, editor: &mut EditorContext) {
        let Some(kind) = self.tool else {
            return;
        };
        let mut open = true;
        egui::Window::new(kind.name())
            .open(&mut open)
            .collapsible(false)
            .resizable(false)
            .show(ctx, |ui| {
                editor.tool_ui(kind, ui);
            });
        if !open {
            self.tool = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_dialog_clamps_on_accept() {
        let mut dialog = SizeDialog::new_image();
        assert_eq!((dialog.width, dialog.height), (640, 480));
        dialog.width = 9000;
        dialog.height = 0;
        assert_eq!(
            dialog.accept(),
            AppAction::NewImage {
                width: 2560,
                height: 1
            }
        );

        let dialog = SizeDialog::resize(4000, 300);
        assert_eq!(
            dialog.accept(),
            AppAction::ResizeImage {
                width: 2560,
                height: 300
            }
        );
    }

    #[test]
    fn test_path_dialog_needs_a_path() {
        let mut dialog = PathDialog::open_image();
        assert_eq!(dialog.accept(), None);
        dialog.path = "  pictures/cat.png ".to_owned();
        assert_eq!(
            dialog.accept(),
            Some(AppAction::OpenImage(PathBuf::from("pictures/cat.png")))
        );
        let dialog = PathDialog::save_image("out".to_owned());
        assert_eq!(dialog.accept(), Some(AppAction::SaveImage(PathBuf::from("out"))));
    }
}
