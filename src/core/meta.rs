//! Metadaten einer Map (Titel, Zweck, Umfang).

use super::new_id;
use serde::{Deserialize, Serialize};

/// Titel einer frisch angelegten Map.
pub const DEFAULT_MAP_TITLE: &str = "Untitled Wardley Map";

/// Singleton-Metadaten eines Map-Dokuments.
///
/// Fehlende Felder beim Deserialisieren werden mit den Standardwerten
/// (frische ID, Standardtitel) aufgefüllt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapMeta {
    /// Eindeutige Map-ID
    pub id: String,
    /// Titel der Map
    pub title: String,
    /// Zweck der Map (optional)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub purpose: Option<String>,
    /// Umfang der Map (optional)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scope: Option<String>,
}

impl MapMeta {
    /// Erstellt Metadaten mit frischer ID und dem gegebenen Titel.
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            id: new_id(),
            title: title.into(),
            purpose: None,
            scope: None,
        }
    }
}

impl Default for MapMeta {
    fn default() -> Self {
        Self::titled(DEFAULT_MAP_TITLE)
    }
}
