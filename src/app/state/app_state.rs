use crate::app::history::{EditHistory, Snapshot};
use crate::app::CommandLog;
use crate::core::{MapContent, MapDocument, MapMeta};
use crate::shared::EditorOptions;
use std::sync::Arc;

use super::{Clipboard, EditorToolState, SelectionState, UiState, ViewState};

/// Hauptzustand der Anwendung
#[derive(Debug)]
pub struct AppState {
    /// Map-Metadaten (Titel, Zweck, Umfang)
    pub map: MapMeta,
    /// Komponenten, Verbindungen und Annotationen (Arc für O(1)-Snapshots)
    pub content: Arc<MapContent>,
    /// Selection-State
    pub selection: SelectionState,
    /// Zuletzt kopierte Komponenten
    pub clipboard: Clipboard,
    /// View-State
    pub view: ViewState,
    /// UI-State
    pub ui: UiState,
    /// Editor-Werkzeug-State
    pub editor: EditorToolState,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Undo/Redo-History (Snapshot-basiert)
    pub history: EditHistory,
    /// Laufzeit-Optionen
    pub options: EditorOptions,
    /// Wird pro ausgeführtem Command erhöht
    pub revision: u64,
}

impl AppState {
    /// Erstellt einen neuen, leeren App-State mit Standard-Optionen
    pub fn new() -> Self {
        Self::with_options(EditorOptions::default())
    }

    /// Erstellt einen leeren App-State mit den gegebenen Optionen
    pub fn with_options(options: EditorOptions) -> Self {
        let options = options.sanitized();
        Self {
            map: MapMeta::default(),
            content: Arc::new(MapContent::new()),
            selection: SelectionState::new(),
            clipboard: Clipboard::default(),
            view: ViewState::from_options(&options),
            ui: UiState::new(),
            editor: EditorToolState::new(),
            command_log: CommandLog::new(),
            history: EditHistory::new_with_capacity(options.history_depth),
            options,
            revision: 0,
        }
    }

    /// Mutabler Zugriff auf den Map-Inhalt (CoW: klont nur, wenn ein Snapshot ihn teilt).
    #[inline]
    pub fn content_mut(&mut self) -> &mut MapContent {
        Arc::make_mut(&mut self.content)
    }

    /// Gibt die Anzahl der Komponenten zurück (für UI-Anzeige)
    pub fn component_count(&self) -> usize {
        self.content.component_count()
    }

    /// Gibt die Anzahl der Verbindungen zurück (für UI-Anzeige)
    pub fn connection_count(&self) -> usize {
        self.content.connection_count()
    }

    /// Gibt die Anzahl der Annotationen zurück (für UI-Anzeige)
    pub fn annotation_count(&self) -> usize {
        self.content.annotation_count()
    }

    /// Undo/Redo helpers
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Gibt zurück, ob ein Redo-Schritt verfügbar ist.
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Erstellt einen Undo-Snapshot des aktuellen Zustands.
    /// Reduziert Boilerplate in mutierenden Use-Cases.
    pub fn record_undo_snapshot(&mut self) {
        let snap = Snapshot::from_state(self);
        self.history.record_snapshot(snap);
    }

    /// Liefert Metadaten und Inhalt als eigenständiges Dokument (tiefe Kopie).
    pub fn to_document(&self) -> MapDocument {
        MapDocument::from_parts(&self.map, &self.content)
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
