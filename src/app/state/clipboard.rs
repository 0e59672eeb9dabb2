use crate::core::{Component, Connection};

/// Zwischenablage für Copy/Paste von Komponenten.
///
/// Enthält nur Verbindungen, deren beide Endpunkte mitkopiert wurden.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Clipboard {
    /// Kopierte Komponenten in Map-Reihenfolge
    pub components: Vec<Component>,
    /// Interne Verbindungen zwischen den kopierten Komponenten
    pub connections: Vec<Connection>,
}

impl Clipboard {
    /// Gibt `true` zurück, wenn keine Komponenten kopiert wurden.
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }
}
