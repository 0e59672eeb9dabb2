//! Application-Layer: Controller, State, Events und Use-Cases.

pub mod command_log;
pub mod controller;
pub mod events;
pub mod history;
mod intent_mapping;
pub mod render_scene;
/// Application State
///
/// Dieses Modul verwaltet den Zustand der Anwendung (Map-Inhalt, Selektion, View, Werkzeug).
pub mod state;
pub mod use_cases;

pub use crate::core::Camera2D;
pub use command_log::CommandLog;
pub use controller::AppController;
pub use events::{AppCommand, AppIntent};
pub use history::{EditHistory, Snapshot};
pub use render_scene::build as build_render_scene;
pub use state::{
    AppState, Clipboard, ConnectionDrawing, EditorTool, EditorToolState, SelectionState, UiState,
    ViewState,
};
