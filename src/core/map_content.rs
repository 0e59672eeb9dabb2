//! Der zentrale Map-Inhalt: Komponenten, Verbindungen und Annotationen.

use super::{
    Annotation, AnnotationUpdate, Component, ComponentUpdate, Connection, ConnectionUpdate,
};
use indexmap::IndexSet;

/// Container für alle historisierten Map-Elemente.
///
/// Alle Listen behalten die Einfügereihenfolge. Filter arbeiten
/// ausschließlich über ID-Gleichheit.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MapContent {
    /// Alle Komponenten in Einfügereihenfolge
    pub components: Vec<Component>,
    /// Alle Verbindungen in Einfügereihenfolge
    pub connections: Vec<Connection>,
    /// Alle Annotationen in Einfügereihenfolge
    pub annotations: Vec<Annotation>,
}

impl MapContent {
    /// Erstellt einen leeren Inhalt
    pub fn new() -> Self {
        Self::default()
    }

    /// Prüft ob keinerlei Elemente vorhanden sind
    pub fn is_empty(&self) -> bool {
        self.components.is_empty() && self.connections.is_empty() && self.annotations.is_empty()
    }

    // ── Komponenten ─────────────────────────────────────────────────

    /// Findet eine Komponente per ID
    pub fn component(&self, id: &str) -> Option<&Component> {
        self.components.iter().find(|c| c.id == id)
    }

    /// Prüft ob eine Komponente mit dieser ID existiert
    pub fn has_component(&self, id: &str) -> bool {
        self.component(id).is_some()
    }

    /// Hängt eine Komponente an (keine Eindeutigkeitsprüfung der ID)
    pub fn add_component(&mut self, component: Component) {
        self.components.push(component);
    }

    /// Merged ein partielles Update in die Komponente. Gibt `false` zurück, falls unbekannt.
    pub fn update_component(&mut self, id: &str, update: ComponentUpdate) -> bool {
        match self.components.iter_mut().find(|c| c.id == id) {
            Some(component) => {
                component.apply_update(update);
                true
            }
            None => false,
        }
    }

    /// Entfernt eine Komponente inklusive aller Verbindungen, die sie referenzieren.
    ///
    /// Gibt die Anzahl entfernter Verbindungen zurück, oder `None` falls die
    /// Komponente nicht existierte (Verbindungen bleiben dann unangetastet).
    pub fn remove_component(&mut self, id: &str) -> Option<usize> {
        let before = self.components.len();
        self.components.retain(|c| c.id != id);
        if self.components.len() == before {
            return None;
        }
        Some(self.remove_connections_touching(|cid| cid == id))
    }

    /// Entfernt alle Komponenten der Menge samt berührender Verbindungen.
    ///
    /// Gibt (entfernte Komponenten, entfernte Verbindungen) zurück.
    pub fn remove_components(&mut self, ids: &IndexSet<String>) -> (usize, usize) {
        let before = self.components.len();
        self.components.retain(|c| !ids.contains(&c.id));
        let removed_components = before - self.components.len();
        let removed_connections = self.remove_connections_touching(|cid| ids.contains(cid));
        (removed_components, removed_connections)
    }

    // ── Verbindungen ────────────────────────────────────────────────

    /// Findet eine Verbindung per ID
    pub fn connection(&self, id: &str) -> Option<&Connection> {
        self.connections.iter().find(|c| c.id == id)
    }

    /// Hängt eine Verbindung an (Endpunkte werden nicht validiert)
    pub fn add_connection(&mut self, connection: Connection) {
        self.connections.push(connection);
    }

    /// Merged ein partielles Update in die Verbindung
    pub fn update_connection(&mut self, id: &str, update: ConnectionUpdate) -> bool {
        match self.connections.iter_mut().find(|c| c.id == id) {
            Some(connection) => {
                connection.apply_update(update);
                true
            }
            None => false,
        }
    }

    /// Entfernt eine Verbindung (keine Kaskade)
    pub fn remove_connection(&mut self, id: &str) -> bool {
        let before = self.connections.len();
        self.connections.retain(|c| c.id != id);
        self.connections.len() < before
    }

    /// Verbindungen, deren beide Endpunkte in der Menge liegen
    pub fn internal_connections(&self, ids: &IndexSet<String>) -> Vec<Connection> {
        self.connections
            .iter()
            .filter(|c| ids.contains(&c.source) && ids.contains(&c.target))
            .cloned()
            .collect()
    }

    /// Verbindungen, deren Quelle oder Ziel auf keine Komponente zeigt
    pub fn dangling_connections(&self) -> impl Iterator<Item = &Connection> {
        self.connections
            .iter()
            .filter(|c| !self.has_component(&c.source) || !self.has_component(&c.target))
    }

    fn remove_connections_touching(&mut self, is_removed: impl Fn(&str) -> bool) -> usize {
        let before = self.connections.len();
        self.connections
            .retain(|c| !is_removed(&c.source) && !is_removed(&c.target));
        before - self.connections.len()
    }

    // ── Annotationen ────────────────────────────────────────────────

    /// Findet eine Annotation per ID
    pub fn annotation(&self, id: &str) -> Option<&Annotation> {
        self.annotations.iter().find(|a| a.id == id)
    }

    /// Hängt eine Annotation an
    pub fn add_annotation(&mut self, annotation: Annotation) {
        self.annotations.push(annotation);
    }

    /// Merged ein partielles Update in die Annotation
    pub fn update_annotation(&mut self, id: &str, update: AnnotationUpdate) -> bool {
        match self.annotations.iter_mut().find(|a| a.id == id) {
            Some(annotation) => {
                annotation.apply_update(update);
                true
            }
            None => false,
        }
    }

    /// Entfernt eine Annotation
    pub fn remove_annotation(&mut self, id: &str) -> bool {
        let before = self.annotations.len();
        self.annotations.retain(|a| a.id != id);
        self.annotations.len() < before
    }

    // ── Zähler ──────────────────────────────────────────────────────

    /// Gibt die Anzahl der Komponenten zurück
    pub fn component_count(&self) -> usize {
        self.components.len()
    }

    /// Gibt die Anzahl der Verbindungen zurück
    pub fn connection_count(&self) -> usize {
        self.connections.len()
    }

    /// Gibt die Anzahl der Annotationen zurück
    pub fn annotation_count(&self) -> usize {
        self.annotations.len()
    }
}
