use crate::action::AppAction;
use crate::input::{InputHandler, RouteOutcome, route_event};
use crate::renderer::Renderer;
use crate::state::EditorContext;

/// The drawing canvas. The bitmap sits at the panel's top-left corner,
/// one screen point per pixel.
pub fn central_panel(
    ctx: &egui::Context,
    editor: &mut EditorContext,
    renderer: &mut Renderer,
    input: &mut InputHandler,
    actions: &mut Vec<AppAction>,
) {
    egui::CentralPanel::default().show(ctx, |ui| {
        let panel_rect = ui.available_rect_before_wrap();
        let (response, painter) =
            ui.allocate_painter(panel_rect.size(), egui::Sense::click_and_drag());

        let canvas_rect =
            egui::Rect::from_min_size(response.rect.min, Renderer::canvas_size(&editor.document));

        for event in input.process_input(ctx, canvas_rect, response.hovered()) {
            match route_event(&event, editor) {
                RouteOutcome::Ignored => {}
                RouteOutcome::Handled => ctx.request_repaint(),
                RouteOutcome::Committed => {
                    log::debug!("Stroke committed ({} undo steps)", editor.history.undo_stack().len());
                    ctx.request_repaint();
                }
                RouteOutcome::OpenToolDialog(kind) => actions.push(AppAction::OpenToolDialog(kind)),
            }
        }

        renderer.render(ctx, &painter, canvas_rect.min, response.rect, &editor.document);

        if !editor.document.is_null() && response.hovered() {
            ctx.set_cursor_icon(egui::CursorIcon::Crosshair);
        }
    });
}
