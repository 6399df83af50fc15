use crate::state::EditorContext;

/// Image size, history depth, and the last error if there is one.
pub fn status_bar(ctx: &egui::Context, editor: &EditorContext, last_error: &mut Option<String>) {
    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            match editor.document.size() {
                Some((width, height)) => ui.label(format!("{width} × {height}")),
                None => ui.label("No image"),
            };
            ui.separator();
            ui.label(editor.tools.current_kind().name());
            ui.separator();
            ui.label(format!(
                "Undo: {}  Redo: {}",
                editor.history.undo_stack().len(),
                editor.history.redo_stack().len()
            ));
            if editor.is_drawing_poly() {
                ui.separator();
                ui.label("Polyline: double-click to finish");
            }

            let mut dismissed = false;
            if let Some(error) = last_error.as_deref() {
                ui.separator();
                ui.colored_label(ui.visuals().error_fg_color, error);
                dismissed = ui.small_button("✖").clicked();
            }
            if dismissed {
                *last_error = None;
            }
        });
    });
}
