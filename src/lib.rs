#![warn(clippy::all, rust_2018_idioms)]

pub mod action;
pub mod app;
pub mod bitmap;
pub mod command;
pub mod components;
pub mod config;
pub mod document;
pub mod error;
pub mod file_handler;
pub mod input;
pub mod panels;
pub mod renderer;
pub mod state;
pub mod tools;

pub use action::AppAction;
pub use app::PaintApp;
pub use command::{CommandHistory, DrawCommand};
pub use document::Document;
pub use error::{PaintError, PaintResult};
pub use input::{InputEvent, InputLocation};
pub use renderer::Renderer;
pub use state::{EditorContext, EditorState};
pub use tools::{Tool, ToolBox, ToolKind};
