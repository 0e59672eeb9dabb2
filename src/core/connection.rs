//! Repräsentiert eine gerichtete Verbindung zwischen zwei Komponenten.

use super::new_id;
use serde::{Deserialize, Serialize};

/// Art der Verbindung
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConnectionKind {
    /// Abhängigkeit (einzige in MapScript ausdrückbare Art)
    #[default]
    Dependency,
    /// Fluss (Wert, Geld, Information)
    Flow,
    /// Evolutionsschritt
    Evolution,
}

/// Stil-Angaben einer Verbindung
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ConnectionStyle {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dashed: Option<bool>,
}

/// Eine Verbindung zwischen zwei Komponenten
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Connection {
    /// Eindeutige ID
    pub id: String,
    /// ID der Quell-Komponente
    pub source: String,
    /// ID der Ziel-Komponente
    pub target: String,
    /// Art der Verbindung
    #[serde(rename = "type")]
    pub kind: ConnectionKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<ConnectionStyle>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Connection {
    /// Erstellt eine neue Verbindung mit frisch vergebener ID.
    pub fn new(source: impl Into<String>, target: impl Into<String>, kind: ConnectionKind) -> Self {
        Self {
            id: new_id(),
            source: source.into(),
            target: target.into(),
            kind,
            style: None,
            label: None,
            notes: None,
        }
    }

    /// Erstellt eine Abhängigkeits-Verbindung.
    pub fn dependency(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self::new(source, target, ConnectionKind::Dependency)
    }

    /// Prüft, ob die Verbindung die Komponente als Quelle oder Ziel referenziert.
    pub fn touches(&self, component_id: &str) -> bool {
        self.source == component_id || self.target == component_id
    }

    /// Übernimmt alle in `update` gesetzten Felder.
    pub fn apply_update(&mut self, update: ConnectionUpdate) {
        if let Some(kind) = update.kind {
            self.kind = kind;
        }
        if let Some(style) = update.style {
            self.style = style;
        }
        if let Some(label) = update.label {
            self.label = label;
        }
        if let Some(notes) = update.notes {
            self.notes = notes;
        }
    }
}

/// Partielles Update einer Verbindung.
///
/// Quelle und Ziel sind nicht änderbar; zum Umhängen wird neu angelegt.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConnectionUpdate {
    pub kind: Option<ConnectionKind>,
    pub style: Option<Option<ConnectionStyle>>,
    pub label: Option<Option<String>>,
    pub notes: Option<Option<String>>,
}
