//! Use-Case-Funktionen für Komponenten- und Verbindungs-Selektion.
//!
//! Selektion erzeugt nie History-Einträge.

use crate::app::AppState;

/// Selektiert genau eine Komponente und leert die Verbindungs-Selektion.
pub fn select_component(state: &mut AppState, id: String) {
    log::debug!("Komponente selektiert: {}", id);
    state.selection.select_component(id);
}

/// Setzt die Mehrfachauswahl (Reihenfolge wie übergeben, Duplikate entfallen).
pub fn select_components(state: &mut AppState, ids: Vec<String>) {
    log::debug!("{} Komponenten selektiert", ids.len());
    state.selection.select_components(ids);
}

/// Selektiert genau eine Verbindung und leert die Komponenten-Selektion.
pub fn select_connection(state: &mut AppState, id: String) {
    log::debug!("Verbindung selektiert: {}", id);
    state.selection.select_connection(id);
}

/// Hebt jede Selektion auf und bricht eine laufende Verbindungs-Geste ab.
pub fn deselect_all(state: &mut AppState) {
    state.selection.clear();
    state.editor.connection_drawing.cancel();
}

/// Startet die Verbindungs-Geste an `source_id`.
pub fn start_connection_drawing(state: &mut AppState, source_id: String) {
    log::debug!("Verbindungs-Geste gestartet an {}", source_id);
    state.editor.connection_drawing.start(source_id);
}

/// Bricht die Verbindungs-Geste ab.
pub fn cancel_connection_drawing(state: &mut AppState) {
    state.editor.connection_drawing.cancel();
}
