//! JSON Import/Export des vollständigen Map-Dokuments.
//!
//! Format: `{ map, components, connections, annotations }` mit camelCase-Feldnamen.
//! Fehlende oder `null`-Top-Level-Schlüssel werden mit Standardwerten aufgefüllt, eine
//! Schema-Validierung findet nicht statt.

use crate::core::MapDocument;
use anyhow::{Context, Result};

/// Parsed ein Map-Dokument aus JSON.
pub fn parse_map_json(json: &str) -> Result<MapDocument> {
    let document: MapDocument =
        serde_json::from_str(json).context("Map-JSON konnte nicht gelesen werden")?;
    log::debug!(
        "Map-JSON gelesen: {} Komponenten, {} Verbindungen, {} Annotationen",
        document.components.len(),
        document.connections.len(),
        document.annotations.len()
    );
    Ok(document)
}

/// Schreibt ein Map-Dokument als formatiertes JSON.
pub fn write_map_json(document: &MapDocument) -> Result<String> {
    serde_json::to_string_pretty(document).context("Map-JSON konnte nicht geschrieben werden")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{
        Annotation, AnnotationKind, AnnotationStyle, CanvasPoint, Component, ComponentKind,
        Connection, Position,
    };

    #[test]
    fn missing_keys_default() {
        let doc = parse_map_json("{}").expect("leeres Objekt ist gültig");
        assert!(doc.components.is_empty());
        assert_eq!(doc.map.title, crate::core::DEFAULT_MAP_TITLE);

        let doc = parse_map_json(r#"{"map": {"title": "Nur Titel"}}"#).expect("gültig");
        assert_eq!(doc.map.title, "Nur Titel");
        assert!(!doc.map.id.is_empty());
    }

    #[test]
    fn null_keys_count_as_missing() {
        let doc = parse_map_json(
            r#"{"map": null, "components": null, "connections": null, "annotations": null}"#,
        )
        .expect("null ist wie fehlend");
        assert!(doc.components.is_empty());
        assert!(doc.connections.is_empty());
        assert_eq!(doc.map.title, crate::core::DEFAULT_MAP_TITLE);
        assert!(!doc.map.id.is_empty());
    }

    #[test]
    fn malformed_shapes_are_errors() {
        assert!(parse_map_json("nicht json").is_err());
        assert!(parse_map_json(r#"{"components": {}}"#).is_err());
        assert!(parse_map_json(r#"{"components": [{"id": "a"}]}"#).is_err());
    }

    #[test]
    fn uses_camel_case_wire_names() {
        let mut note = Annotation::new(
            AnnotationKind::Area,
            "Bereich",
            CanvasPoint::new(1.0, 2.0),
        );
        note.style = Some(AnnotationStyle {
            color: None,
            background_color: Some("#eee".into()),
        });
        let a = Component::new("A", ComponentKind::Need, Position::new(0.1, 0.2));
        let doc = MapDocument {
            connections: vec![Connection::dependency(&a.id, &a.id)],
            components: vec![a],
            annotations: vec![note],
            ..Default::default()
        };

        let json = write_map_json(&doc).expect("schreiben");
        assert!(json.contains("\"backgroundColor\": \"#eee\""));
        assert!(json.contains("\"type\": \"need\""));
        assert!(json.contains("\"type\": \"dependency\""));
        assert!(json.contains("\"type\": \"area\""));
        assert!(!json.contains("purpose"));

        assert_eq!(parse_map_json(&json).expect("lesen"), doc);
    }

    #[test]
    fn float_values_roundtrip_exactly() {
        let a = Component::new("A", ComponentKind::User, Position::new(0.1 + 0.2, 1.0 / 3.0));
        let doc = MapDocument {
            components: vec![a],
            ..Default::default()
        };
        let back = parse_map_json(&write_map_json(&doc).expect("schreiben")).expect("lesen");
        assert_eq!(back, doc);
    }
}
