//! Use-Case: Komponenten hinzufügen, ändern und löschen.

use crate::app::AppState;
use crate::core::{Component, ComponentUpdate};

/// Hängt eine Komponente an die Map an.
///
/// Keine Prüfung auf doppelte IDs.
pub fn add_component(state: &mut AppState, component: Component) {
    // Snapshot VOR Mutation
    state.record_undo_snapshot();

    log::info!(
        "Komponente hinzugefügt: '{}' ({:?}) an {:.2}/{:.2}",
        component.name,
        component.kind,
        component.position.visibility,
        component.position.evolution
    );
    state.content_mut().add_component(component);
}

/// Übernimmt die gesetzten Felder von `update` in die Komponente `id`.
///
/// Kein History-Eintrag; unbekannte IDs sind ein No-op.
pub fn update_component(state: &mut AppState, id: &str, update: ComponentUpdate) {
    if !state.content.has_component(id) {
        log::debug!("Update ignoriert: Komponente {} existiert nicht", id);
        return;
    }
    if update.is_empty() {
        return;
    }
    state.content_mut().update_component(id, update);
}

/// Löscht die Komponente `id` samt aller Verbindungen, die sie referenzieren.
///
/// Der History-Eintrag wird auch für unbekannte IDs angelegt.
pub fn delete_component(state: &mut AppState, id: &str) {
    // Snapshot VOR Mutation
    state.record_undo_snapshot();

    match state.content_mut().remove_component(id) {
        Some(removed_connections) => {
            log::info!(
                "Komponente {} gelöscht ({} Verbindungen entfernt)",
                id,
                removed_connections
            );
        }
        None => {
            log::debug!("Löschen ignoriert: Komponente {} existiert nicht", id);
            return;
        }
    }

    state.selection.selected_component_ids.shift_remove(id);
    prune_connection_selection(state);
    if state.editor.connection_drawing.active_source() == Some(id) {
        state.editor.connection_drawing.cancel();
    }
}

/// Entfernt IDs nicht mehr existierender Verbindungen aus der Selektion.
pub(crate) fn prune_connection_selection(state: &mut AppState) {
    let content = &state.content;
    state
        .selection
        .selected_connection_ids
        .retain(|cid| content.connection(cid).is_some());
}
