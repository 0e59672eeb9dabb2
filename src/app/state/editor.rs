use serde::{Deserialize, Serialize};

/// Aktives Editor-Werkzeug
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EditorTool {
    /// Standard: Komponenten selektieren und verschieben
    #[default]
    Select,
    /// Neue Komponenten auf der Map platzieren
    Component,
    /// Abhängigkeiten zwischen Komponenten ziehen
    Connection,
    /// Notizen auf dem Canvas platzieren
    Annotation,
}

/// Laufende Verbindungs-Geste (Quelle gewählt, Ziel ausstehend)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConnectionDrawing {
    /// Ob gerade eine Verbindung gezogen wird
    pub is_drawing: bool,
    /// Quell-Komponente der Geste
    pub source_id: Option<String>,
}

impl ConnectionDrawing {
    /// Startet die Geste an `source_id`.
    pub fn start(&mut self, source_id: impl Into<String>) {
        self.is_drawing = true;
        self.source_id = Some(source_id.into());
    }

    /// Bricht die Geste ab.
    pub fn cancel(&mut self) {
        self.is_drawing = false;
        self.source_id = None;
    }

    /// Quelle der laufenden Geste, falls aktiv.
    pub fn active_source(&self) -> Option<&str> {
        if self.is_drawing {
            self.source_id.as_deref()
        } else {
            None
        }
    }
}

/// Zustand des aktuellen Editor-Werkzeugs
#[derive(Debug, Clone, Default)]
pub struct EditorToolState {
    /// Aktives Werkzeug
    pub active_tool: EditorTool,
    /// Verbindungs-Geste des Connection-Tools
    pub connection_drawing: ConnectionDrawing,
}

impl EditorToolState {
    /// Erstellt den Standard-Werkzeugzustand (Select-Tool aktiv).
    pub fn new() -> Self {
        Self::default()
    }
}
