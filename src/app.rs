use crate::action::{AppAction, DialogKind};
use crate::error::PaintError;
use crate::file_handler::FileHandler;
use crate::input::InputHandler;
use crate::panels::{self, Dialogs, PathDialog, SizeDialog};
use crate::renderer::Renderer;
use crate::state::EditorContext;
use crate::tools::ToolBox;

/// The paint program. Only the tool box is persisted between runs; the
/// bitmap and its history start fresh.
#[derive(Debug, Default)]
pub struct PaintApp {
    editor: EditorContext,
    renderer: Renderer,
    input: InputHandler,
    file_handler: FileHandler,
    dialogs: Dialogs,
    last_error: Option<String>,
}

impl PaintApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let tools = cc
            .storage
            .and_then(|storage| eframe::get_value::<ToolBox>(storage, eframe::APP_KEY))
            .map(|mut tools| {
                tools.sync_colors();
                tools
            })
            .unwrap_or_default();
        log::info!("Starting with the {}", tools.current_kind().name());
        Self::with_tools(tools)
    }

    pub fn with_tools(tools: ToolBox) -> Self {
        Self {
            editor: EditorContext::new(tools),
            ..Self::default()
        }
    }

    pub fn editor(&self) -> &EditorContext {
        &self.editor
    }

    pub fn editor_mut(&mut self) -> &mut EditorContext {
        &mut self.editor
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn dialogs(&self) -> &Dialogs {
        &self.dialogs
    }

    /// Carry out one action. Failures are logged and kept for the status bar.
    pub fn dispatch(&mut self, action: AppAction) {
        log::debug!("Action: {:?}", action);
        let result = match action {
            AppAction::ShowDialog(kind) => self.show_dialog(kind),
            AppAction::NewImage { width, height } => self.editor.new_image(width, height).map(|_| ()),
            AppAction::ResizeImage { width, height } => {
                self.editor.resize_image(width, height).map(|_| ())
            }
            AppAction::OpenImage(path) => {
                let result = self.editor.load_image(&path).map(|_| ());
                if result.is_ok() {
                    self.dialogs.last_path = Some(path);
                }
                result
            }
            AppAction::SaveImage(path) => self.editor.save_image(&path).map(|written| {
                self.dialogs.last_path = Some(written);
            }),
            AppAction::ClearImage => {
                self.editor.clear_image();
                Ok(())
            }
            AppAction::Undo => {
                self.editor.undo();
                Ok(())
            }
            AppAction::Redo => {
                self.editor.redo();
                Ok(())
            }
            AppAction::SelectTool(kind) => {
                self.editor.set_current_tool(kind);
                Ok(())
            }
            AppAction::SetColor(role, color) => {
                self.editor.set_color(role, color);
                Ok(())
            }
            AppAction::ShowColorPicker(role) => {
                self.dialogs.color = Some(role);
                Ok(())
            }
            AppAction::OpenToolDialog(kind) => {
                self.dialogs.tool = Some(kind);
                Ok(())
            }
        };

        match result {
            Ok(()) => self.last_error = None,
            Err(err) => {
                log::error!("{}", err);
                self.last_error = Some(err.to_string());
            }
        }
    }

    fn show_dialog(&mut self, kind: DialogKind) -> Result<(), PaintError> {
        match kind {
            DialogKind::NewImage => self.dialogs.size = Some(SizeDialog::new_image()),
            DialogKind::ResizeImage => {
                let (width, height) = self.editor.document.size().ok_or(PaintError::NoImage)?;
                self.dialogs.size = Some(SizeDialog::resize(width, height));
            }
            DialogKind::OpenImage => self.dialogs.path = Some(PathDialog::open_image()),
            DialogKind::SaveImage => {
                if self.editor.document.is_null() {
                    return Err(PaintError::NoImage);
                }
                let path = self
                    .dialogs
                    .last_path
                    .as_ref()
                    .map(|path| path.with_extension("bmp").display().to_string())
                    .unwrap_or_default();
                self.dialogs.path = Some(PathDialog::save_image(path));
            }
        }
        Ok(())
    }
}

impl eframe::App for PaintApp {
    /// Called by the frame work to save state before shutdown.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, eframe::APP_KEY, &self.editor.tools);
    }

    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let mut actions = Vec::new();

        if !self.dialogs.is_prompt_open() {
            actions.extend(AppAction::from_shortcuts(ctx));
        }

        panels::tools_panel(ctx, &self.editor, &mut actions);
        panels::status_bar(ctx, &self.editor, &mut self.last_error);
        panels::central_panel(
            ctx,
            &mut self.editor,
            &mut self.renderer,
            &mut self.input,
            &mut actions,
        );
        self.dialogs.show(ctx, &mut self.editor, &mut actions);

        self.file_handler.preview_files_being_dropped(ctx);
        if self.file_handler.check_for_dropped_files(ctx) {
            match self.file_handler.process_dropped_files(&mut self.editor) {
                Ok(loaded) => log::info!("Loaded {} dropped file(s)", loaded),
                Err(err) => self.last_error = Some(err.to_string()),
            }
        }

        for action in actions {
            self.dispatch(action);
        }
    }
}
