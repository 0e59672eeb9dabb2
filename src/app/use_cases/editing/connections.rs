//! Use-Case: Verbindungen hinzufügen, ändern und löschen.

use crate::app::AppState;
use crate::core::{Connection, ConnectionUpdate};

/// Hängt eine Verbindung an.
///
/// Endpunkte werden nur geloggt, nicht erzwungen: Renderer überspringen
/// Verbindungen mit fehlenden Endpunkten.
pub fn add_connection(state: &mut AppState, connection: Connection) {
    for endpoint in [&connection.source, &connection.target] {
        if !state.content.has_component(endpoint) {
            log::warn!(
                "Verbindung {} referenziert unbekannte Komponente {}",
                connection.id,
                endpoint
            );
        }
    }

    // Snapshot VOR Mutation
    state.record_undo_snapshot();

    log::info!(
        "Verbindung hinzugefügt: {} -> {} ({:?})",
        connection.source,
        connection.target,
        connection.kind
    );
    state.content_mut().add_connection(connection);
}

/// Übernimmt die gesetzten Felder von `update` in die Verbindung `id` (ohne History).
pub fn update_connection(state: &mut AppState, id: &str, update: ConnectionUpdate) {
    if state.content.connection(id).is_none() {
        log::debug!("Update ignoriert: Verbindung {} existiert nicht", id);
        return;
    }
    state.content_mut().update_connection(id, update);
}

/// Löscht die Verbindung `id`. Keine Kaskade.
///
/// Der History-Eintrag wird auch für unbekannte IDs angelegt.
pub fn delete_connection(state: &mut AppState, id: &str) {
    // Snapshot VOR Mutation
    state.record_undo_snapshot();

    if state.content_mut().remove_connection(id) {
        log::info!("Verbindung {} gelöscht", id);
    } else {
        log::debug!("Löschen ignoriert: Verbindung {} existiert nicht", id);
    }
    state.selection.selected_connection_ids.shift_remove(id);
}
