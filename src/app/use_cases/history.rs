//! Use-Case: Undo/Redo über Snapshots des Map-Inhalts.

use crate::app::history::Snapshot;
use crate::app::AppState;

/// Stellt den letzten History-Snapshot wieder her und leert die Selektion.
pub fn undo(state: &mut AppState) {
    let current = Snapshot::from_state(state);
    let Some(previous) = state.history.pop_undo_with_current(current) else {
        log::debug!("Undo ignoriert: keine History");
        return;
    };
    previous.apply_to(state);
    state.selection.clear();
    log::info!(
        "Undo: {} Komponenten, {} Verbindungen",
        state.component_count(),
        state.connection_count()
    );
}

/// Stellt den zuletzt rückgängig gemachten Snapshot wieder her und leert die Selektion.
pub fn redo(state: &mut AppState) {
    let current = Snapshot::from_state(state);
    let Some(next) = state.history.pop_redo_with_current(current) else {
        log::debug!("Redo ignoriert: nichts rückgängig gemacht");
        return;
    };
    next.apply_to(state);
    state.selection.clear();
    log::info!(
        "Redo: {} Komponenten, {} Verbindungen",
        state.component_count(),
        state.connection_count()
    );
}
