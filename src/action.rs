use std::path::PathBuf;

use egui::Color32;

use crate::tools::{ColorRole, ToolKind};

/// Which modal dialog to bring up
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogKind {
    NewImage,
    ResizeImage,
    OpenImage,
    SaveImage,
}

/// Everything the toolbar, shortcuts, dialogs and canvas can ask the app to do.
#[derive(Debug, Clone, PartialEq)]
pub enum AppAction {
    ShowDialog(DialogKind),
    NewImage { width: u32, height: u32 },
    ResizeImage { width: u32, height: u32 },
    OpenImage(PathBuf),
    SaveImage(PathBuf),
    ClearImage,
    Undo,
    Redo,
    SelectTool(ToolKind),
    SetColor(ColorRole, Color32),
    ShowColorPicker(ColorRole),
    OpenToolDialog(ToolKind),
}

impl AppAction {
    /// Map this frame's keyboard shortcuts to actions.
    pub fn from_shortcuts(ctx: &egui::Context) -> Vec<AppAction> {
        use egui::Key;

        ctx.input(|i| {
            let mut actions = Vec::new();
            if !i.modifiers.command {
                return actions;
            }
            if i.key_pressed(Key::N) {
                actions.push(AppAction::ShowDialog(DialogKind::NewImage));
            }
            if i.key_pressed(Key::O) {
                actions.push(AppAction::ShowDialog(DialogKind::OpenImage));
            }
            if i.key_pressed(Key::S) {
                actions.push(AppAction::ShowDialog(DialogKind::SaveImage));
            }
            if i.key_pressed(Key::R) {
                actions.push(AppAction::ShowDialog(DialogKind::ResizeImage));
            }
            if i.key_pressed(Key::Z) {
                actions.push(AppAction::Undo);
            }
            if i.key_pressed(Key::Y) {
                actions.push(AppAction::Redo);
            }
            if i.key_pressed(Key::F) {
                actions.push(AppAction::ShowColorPicker(ColorRole::Foreground));
            }
            if i.key_pressed(Key::B) {
                actions.push(AppAction::ShowColorPicker(ColorRole::Background));
            }
            // The native backend turns Ctrl+C into a copy event
            let clear = i.key_pressed(Key::C) || i.events.contains(&egui::Event::Copy);
            if i.modifiers.shift && clear {
                actions.push(AppAction::ClearImage);
            }
            actions
        })
    }
}
