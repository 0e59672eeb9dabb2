//! Use-Case: Map-Metadaten setzen (ohne History).

use crate::app::AppState;

/// Setzt den Map-Titel.
pub fn set_title(state: &mut AppState, title: String) {
    log::debug!("Titel: '{}'", title);
    state.map.title = title;
}

/// Setzt oder entfernt den Zweck der Map.
pub fn set_purpose(state: &mut AppState, purpose: Option<String>) {
    state.map.purpose = purpose;
}

/// Setzt oder entfernt den Umfang der Map.
pub fn set_scope(state: &mut AppState, scope: Option<String>) {
    state.map.scope = scope;
}
