//! Application State: zentrale Datenhaltung.
//!
//! Aufgeteilt nach Verantwortung:
//! - `app_state`: Hauptzustand mit Map-Inhalt, History und Optionen
//! - `selection`: selektierte Komponenten/Verbindungen
//! - `clipboard`: zuletzt kopierte Komponenten
//! - `editor`: aktives Werkzeug und Verbindungs-Geste
//! - `view`: Kamera, Raster, Canvas-Größe
//! - `ui`: Dateipfad und Statusmeldung

mod app_state;
mod clipboard;
mod editor;
mod selection;
mod ui;
mod view;

pub use app_state::AppState;
pub use clipboard::Clipboard;
pub use editor::{ConnectionDrawing, EditorTool, EditorToolState};
pub use selection::SelectionState;
pub use ui::UiState;
pub use view::ViewState;
