//! Use-Case: Map-Dokument laden, exportieren und zurücksetzen.

use crate::app::AppState;
use crate::core::MapDocument;
use std::sync::Arc;

/// Ersetzt Metadaten, Komponenten, Verbindungen und Annotationen vollständig.
///
/// Die History bleibt unangetastet; Selektion und Verbindungs-Geste werden zurückgesetzt.
pub fn load_map(state: &mut AppState, document: MapDocument) {
    let (map, content) = document.into_parts();
    log::info!(
        "Map '{}' geladen: {} Komponenten, {} Verbindungen, {} Annotationen",
        map.title,
        content.component_count(),
        content.connection_count(),
        content.annotation_count()
    );

    let dangling = content.dangling_connections().count();
    if dangling > 0 {
        log::warn!("{} Verbindungen mit fehlenden Endpunkten geladen", dangling);
    }

    state.map = map;
    state.content = Arc::new(content);
    state.selection.clear();
    state.editor.connection_drawing.cancel();
}

/// Liefert den aktuellen Stand als eigenständiges Dokument.
pub fn export_map(state: &AppState) -> MapDocument {
    state.to_document()
}

/// Setzt die Map auf den leeren Ausgangszustand mit frischer Map-ID zurück.
///
/// History, Zwischenablage, Selektion, Kamera und Werkzeug werden ebenfalls
/// zurückgesetzt. Optionen, Canvas-Größe, Command-Log und Revision bleiben erhalten.
pub fn reset_map(state: &mut AppState) {
    let options = std::mem::take(&mut state.options);
    let command_log = std::mem::take(&mut state.command_log);
    let canvas_size = state.view.canvas_size;
    let revision = state.revision;

    *state = AppState::with_options(options);
    state.command_log = command_log;
    state.view.canvas_size = canvas_size;
    state.revision = revision;
    log::info!("Map zurückgesetzt (neue ID {})", state.map.id);
}
