//! Vollständiger Map-Schnappschuss als Austauschformat (Laden, Export, JSON).

use super::{Annotation, Component, Connection, MapContent, MapMeta};
use serde::{Deserialize, Deserializer, Serialize};

/// Map-Metadaten plus alle Elemente, wie sie `export_map` liefert und
/// `load_map` entgegennimmt.
///
/// Fehlende oder `null`-Schlüssel werden beim Deserialisieren mit leeren Listen
/// bzw. Standard-Metadaten aufgefüllt.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MapDocument {
    #[serde(deserialize_with = "null_as_default")]
    pub map: MapMeta,
    #[serde(deserialize_with = "null_as_default")]
    pub components: Vec<Component>,
    #[serde(deserialize_with = "null_as_default")]
    pub connections: Vec<Connection>,
    #[serde(deserialize_with = "null_as_default")]
    pub annotations: Vec<Annotation>,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl MapDocument {
    /// Baut ein Dokument aus Metadaten und Inhalt (tiefe Kopie).
    pub fn from_parts(map: &MapMeta, content: &MapContent) -> Self {
        Self {
            map: map.clone(),
            components: content.components.clone(),
            connections: content.connections.clone(),
            annotations: content.annotations.clone(),
        }
    }

    /// Zerlegt das Dokument in Metadaten und Inhalt.
    pub fn into_parts(self) -> (MapMeta, MapContent) {
        let content = MapContent {
            components: self.components,
            connections: self.connections,
            annotations: self.annotations,
        };
        (self.map, content)
    }
}
