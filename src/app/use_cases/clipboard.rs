//! Use-Case: Kopieren, Einfügen und Löschen der Komponenten-Selektion.

use crate::app::{AppState, Clipboard};
use crate::core::{new_id, Component, Connection};
use std::collections::HashMap;

/// Kopiert die selektierten Komponenten (in Map-Reihenfolge) und alle
/// Verbindungen, deren beide Endpunkte selektiert sind.
///
/// Überschreibt die Zwischenablage; leere Selektion ergibt eine leere Zwischenablage.
pub fn copy_selected_components(state: &mut AppState) {
    let selected = &state.selection.selected_component_ids;
    let components: Vec<Component> = state
        .content
        .components
        .iter()
        .filter(|c| selected.contains(&c.id))
        .cloned()
        .collect();
    let connections = state.content.internal_connections(selected);

    log::info!(
        "{} Komponenten und {} Verbindungen kopiert",
        components.len(),
        connections.len()
    );
    state.clipboard = Clipboard {
        components,
        connections,
    };
}

/// Fügt die Zwischenablage als neue Elemente ein.
///
/// Jede Komponente erhält eine neue ID und wird um `options.paste_offset`
/// verschoben (nach oben auf 1.0 begrenzt). Verbindungen werden auf die neuen
/// IDs umgehängt. Die eingefügten Komponenten werden selektiert.
pub fn paste_components(state: &mut AppState) {
    if state.clipboard.is_empty() {
        log::debug!("Einfügen ignoriert: Zwischenablage leer");
        return;
    }

    // Snapshot VOR Mutation
    state.record_undo_snapshot();

    let offset = state.options.paste_offset;
    let mut id_map: HashMap<&str, String> = HashMap::new();
    let mut new_components = Vec::with_capacity(state.clipboard.components.len());
    for original in &state.clipboard.components {
        let mut copy = original.clone();
        copy.id = new_id();
        copy.position = original.position.offset_capped(offset);
        id_map.insert(original.id.as_str(), copy.id.clone());
        new_components.push(copy);
    }

    let remap = |id: &str| id_map.get(id).cloned().unwrap_or_else(|| id.to_string());
    let new_connections: Vec<Connection> = state
        .clipboard
        .connections
        .iter()
        .map(|original| Connection {
            id: new_id(),
            source: remap(&original.source),
            target: remap(&original.target),
            ..original.clone()
        })
        .collect();

    let new_ids: Vec<String> = new_components.iter().map(|c| c.id.clone()).collect();
    log::info!(
        "{} Komponenten und {} Verbindungen eingefügt",
        new_components.len(),
        new_connections.len()
    );

    let content = state.content_mut();
    for component in new_components {
        content.add_component(component);
    }
    for connection in new_connections {
        content.add_connection(connection);
    }
    state.selection.select_components(new_ids);
}

/// Löscht alle selektierten Komponenten samt berührender Verbindungen.
pub fn delete_selected_components(state: &mut AppState) {
    if state.selection.selected_component_ids.is_empty() {
        log::debug!("Nichts zum Löschen selektiert");
        return;
    }

    // Snapshot VOR Mutation
    state.record_undo_snapshot();

    let ids = std::mem::take(&mut state.selection.selected_component_ids);
    let (removed_components, removed_connections) = state.content_mut().remove_components(&ids);
    log::info!(
        "{} Komponenten gelöscht ({} Verbindungen entfernt)",
        removed_components,
        removed_connections
    );

    super::editing::prune_connection_selection(state);
    if let Some(source) = state.editor.connection_drawing.active_source() {
        if ids.contains(source) {
            state.editor.connection_drawing.cancel();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{ComponentKind, Position};
    use std::collections::HashSet;

    fn chain_state() -> (AppState, Vec<String>) {
        let mut state = AppState::new();
        let comps: Vec<Component> = [(0.1, 0.2), (0.5, 0.5), (0.98, 0.97)]
            .iter()
            .enumerate()
            .map(|(i, &(v, e))| {
                Component::new(format!("C{i}"), ComponentKind::Capability, Position::new(v, e))
            })
            .collect();
        let ids: Vec<String> = comps.iter().map(|c| c.id.clone()).collect();
        let content = state.content_mut();
        for c in comps {
            content.add_component(c);
        }
        content.add_connection(Connection::dependency(&ids[0], &ids[1]));
        content.add_connection(Connection::dependency(&ids[1], &ids[2]));
        (state, ids)
    }

    #[test]
    fn copy_keeps_only_internal_connections_in_map_order() {
        let (mut state, ids) = chain_state();
        state
            .selection
            .select_components([ids[1].clone(), ids[0].clone()]);

        copy_selected_components(&mut state);

        let copied: Vec<&str> = state
            .clipboard
            .components
            .iter()
            .map(|c| c.id.as_str())
            .collect();
        assert_eq!(copied, vec![ids[0].as_str(), ids[1].as_str()]);
        assert_eq!(state.clipboard.connections.len(), 1);
    }

    #[test]
    fn copy_with_empty_selection_clears_clipboard() {
        let (mut state, ids) = chain_state();
        state.selection.select_component(ids[0].clone());
        copy_selected_components(&mut state);
        assert!(!state.clipboard.is_empty());

        state.selection.clear();
        copy_selected_components(&mut state);
        assert!(state.clipboard.is_empty());
    }

    #[test]
    fn paste_offsets_caps_and_remaps() {
        let (mut state, ids) = chain_state();
        state
            .selection
            .select_components([ids[1].clone(), ids[2].clone()]);
        copy_selected_components(&mut state);

        paste_components(&mut state);

        assert_eq!(state.component_count(), 5);
        assert_eq!(state.connection_count(), 3);
        let pasted = &state.content.components[3..];
        approx::assert_relative_eq!(pasted[0].position.visibility, 0.55, epsilon = 1e-12);
        approx::assert_relative_eq!(pasted[1].position.visibility, 1.0);
        approx::assert_relative_eq!(pasted[1].position.evolution, 1.0);

        let new_conn = state.content.connections.last().expect("Verbindung");
        assert_eq!(new_conn.source, pasted[0].id);
        assert_eq!(new_conn.target, pasted[1].id);

        let selected: Vec<&String> = state.selection.selected_component_ids.iter().collect();
        assert_eq!(selected, vec![&pasted[0].id, &pasted[1].id]);
    }

    #[test]
    fn paste_twice_yields_distinct_ids() {
        let (mut state, ids) = chain_state();
        state.selection.select_components(ids.clone());
        copy_selected_components(&mut state);
        paste_components(&mut state);
        paste_components(&mut state);

        assert_eq!(state.component_count(), 9);
        let unique: HashSet<&str> = state
            .content
            .components
            .iter()
            .map(|c| c.id.as_str())
            .collect();
        assert_eq!(unique.len(), 9);
    }

    #[test]
    fn paste_with_empty_clipboard_is_noop() {
        let (mut state, _) = chain_state();
        paste_components(&mut state);
        assert_eq!(state.component_count(), 3);
        assert!(!state.can_undo());
    }

    #[test]
    fn delete_selected_removes_touching_connections() {
        let (mut state, ids) = chain_state();
        state.selection.select_component(ids[1].clone());

        delete_selected_components(&mut state);

        assert_eq!(state.component_count(), 2);
        assert_eq!(state.connection_count(), 0);
        assert!(state.selection.selected_component_ids.is_empty());
        assert!(state.can_undo());
    }

    #[test]
    fn delete_selected_with_empty_selection_is_noop() {
        let (mut state, _) = chain_state();
        delete_selected_components(&mut state);
        assert!(!state.can_undo());
        assert_eq!(state.component_count(), 3);
    }
}
