//! Wardley Map Editor Library.
//! Zustands-Engine, MapScript- und JSON-Codec als Library exportiert für Frontends und Tests.

pub mod app;
pub mod core;
pub mod json;
pub mod mapscript;
pub mod shared;

pub use app::{
    AppCommand, AppController, AppIntent, AppState, EditorTool, EditorToolState, UiState, ViewState,
};
pub use core::{
    Annotation, AnnotationKind, Camera2D, CanvasLayout, CanvasPoint, Component, ComponentKind,
    Connection, ConnectionKind, MapContent, MapDocument, MapMeta, Position,
};
pub use json::{parse_map_json, write_map_json};
pub use mapscript::{parse_mapscript, parse_mapscript_with_diagnostics, write_mapscript};
pub use shared::{EditorOptions, RenderScene};
