use egui::color_picker::{self, Alpha};

use crate::action::{AppAction, DialogKind};
use crate::components::ToolButton;
use crate::state::EditorContext;
use crate::tools::{ColorRole, ToolKind};

/// The toolbar along the top of the window. Clicks become actions.
pub fn tools_panel(ctx: &egui::Context, editor: &EditorContext, actions: &mut Vec<AppAction>) {
    egui::TopBottomPanel::top("tools_panel").show(ctx, |ui| {
        egui::menu::bar(ui, |ui| {
            ui.menu_button("File", |ui| {
                let has_image = !editor.document.is_null();
                if ui.button("New image…").clicked() {
                    actions.push(AppAction::ShowDialog(DialogKind::NewImage));
                    ui.close_menu();
                }
                if ui.button("Load image…").clicked() {
                    actions.push(AppAction::ShowDialog(DialogKind::OpenImage));
                    ui.close_menu();
                }
                if ui
                    .add_enabled(has_image, egui::Button::new("Save image…"))
                    .clicked()
                {
                    actions.push(AppAction::ShowDialog(DialogKind::SaveImage));
                    ui.close_menu();
                }
            });
        });

        ui.horizontal(|ui| {
            let has_image = !editor.document.is_null();

            if ui.button("New").on_hover_text("Ctrl+N").clicked() {
                actions.push(AppAction::ShowDialog(DialogKind::NewImage));
            }
            if ui.button("Open").on_hover_text("Ctrl+O").clicked() {
                actions.push(AppAction::ShowDialog(DialogKind::OpenImage));
            }
            if ui
                .add_enabled(has_image, egui::Button::new("Save"))
                .on_hover_text("Ctrl+S")
                .clicked()
            {
                actions.push(AppAction::ShowDialog(DialogKind::SaveImage));
            }

            ui.separator();

            let undo_hint = editor
                .history
                .undo_text()
                .map_or("Ctrl+Z".to_owned(), |text| format!("Undo {text} (Ctrl+Z)"));
            if ui
                .add_enabled(editor.can_undo(), egui::Button::new("Undo"))
                .on_hover_text(undo_hint)
                .clicked()
            {
                actions.push(AppAction::Undo);
            }
            let redo_hint = editor
                .history
                .redo_text()
                .map_or("Ctrl+Y".to_owned(), |text| format!("Redo {text} (Ctrl+Y)"));
            if ui
                .add_enabled(editor.can_redo(), egui::Button::new("Redo"))
                .on_hover_text(redo_hint)
                .clicked()
            {
                actions.push(AppAction::Redo);
            }

            ui.separator();

            if ui
                .add_enabled(has_image, egui::Button::new("Clear"))
                .on_hover_text("Ctrl+Shift+C")
                .clicked()
            {
                actions.push(AppAction::ClearImage);
            }
            if ui
                .add_enabled(has_image, egui::Button::new("Resize"))
                .on_hover_text("Ctrl+R")
                .clicked()
            {
                actions.push(AppAction::ShowDialog(DialogKind::ResizeImage));
            }

            ui.separator();

            for role in [ColorRole::Foreground, ColorRole::Background] {
                let mut color = editor.tools.color(role);
                let label = match role {
                    ColorRole::Foreground => "Foreground",
                    ColorRole::Background => "Background",
                };
                let shortcut = match role {
                    ColorRole::Foreground => "Ctrl+F",
                    ColorRole::Background => "Ctrl+B",
                };
                if ui.button(label).on_hover_text(shortcut).clicked() {
                    actions.push(AppAction::ShowColorPicker(role));
                }
                if color_picker::color_edit_button_srgba(ui, &mut color, Alpha::Opaque).changed() {
                    actions.push(AppAction::SetColor(role, color));
                }
            }

            ui.separator();

            let current = editor.tools.current_kind();
            for kind in ToolKind::ALL {
                if ToolButton::new(kind, kind == current).show(ui).clicked() {
                    actions.push(AppAction::SelectTool(kind));
                }
            }
        });
    });
}
