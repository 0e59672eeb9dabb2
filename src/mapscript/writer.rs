//! Writer für MapScript-Text.

use crate::core::{Component, ComponentKind, MapDocument};
use std::collections::HashMap;

/// Serialisiert ein Map-Dokument als MapScript.
///
/// Reihenfolge: `title`, optional `purpose`/`scope`, Leerzeile, Komponenten,
/// Leerzeile, Verbindungen. Koordinaten mit genau 2 Nachkommastellen.
/// Verbindungen mit fehlendem Endpunkt werden ausgelassen.
pub fn write_mapscript(document: &MapDocument) -> String {
    let map = &document.map;
    let mut lines: Vec<String> = Vec::with_capacity(
        document.components.len() + document.connections.len() + 5,
    );

    lines.push(format!("title {}", map.title));
    if let Some(purpose) = map.purpose.as_deref().filter(|p| !p.is_empty()) {
        lines.push(format!("purpose {purpose}"));
    }
    if let Some(scope) = map.scope.as_deref().filter(|s| !s.is_empty()) {
        lines.push(format!("scope {scope}"));
    }
    lines.push(String::new());

    lines.extend(document.components.iter().map(component_line));
    lines.push(String::new());

    let names_by_id: HashMap<&str, &str> = document
        .components
        .iter()
        .map(|c| (c.id.as_str(), c.name.as_str()))
        .collect();
    let mut skipped = 0usize;
    for conn in &document.connections {
        match (
            names_by_id.get(conn.source.as_str()),
            names_by_id.get(conn.target.as_str()),
        ) {
            (Some(source), Some(target)) => lines.push(format!("{source}->{target}")),
            _ => skipped += 1,
        }
    }
    if skipped > 0 {
        log::debug!("MapScript: {} Verbindungen ohne Endpunkt ausgelassen", skipped);
    }

    lines.join("\n")
}

fn component_line(component: &Component) -> String {
    let keyword = match component.kind {
        ComponentKind::User => "anchor",
        ComponentKind::Need | ComponentKind::Capability => "component",
    };
    let mut line = format!(
        "{} {} [{}, {}]",
        keyword,
        component.name,
        format_coord(component.position.visibility),
        format_coord(component.position.evolution)
    );
    if let Some(label) = &component.label {
        if !label.text.is_empty() && label.text != component.name {
            line.push_str(&format!(" ({})", label.text));
        }
    }
    line
}

/// Zwei Nachkommastellen, Halbwerte werden von der Null weg gerundet (0.125 → `0.13`).
fn format_coord(value: f64) -> String {
    format!("{:.2}", (value * 100.0).round() / 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Connection, MapMeta, Position};

    fn doc() -> MapDocument {
        let a = Component::new("Kunde", ComponentKind::User, Position::new(0.1, 0.234))
            .with_label("Kunde");
        let b = Component::new("Tee", ComponentKind::Need, Position::new(0.5, 0.6))
            .with_label("Heißer Tee");
        let mut map = MapMeta::titled("Teeladen");
        map.purpose = Some("Tee verkaufen".into());
        map.scope = Some(String::new());
        MapDocument {
            map,
            connections: vec![
                Connection::dependency(&a.id, &b.id),
                Connection::dependency(&b.id, "fehlt"),
            ],
            components: vec![a, b],
            annotations: Vec::new(),
        }
    }

    #[test]
    fn writes_expected_layout() {
        let text = write_mapscript(&doc());
        assert_eq!(
            text,
            "title Teeladen\n\
             purpose Tee verkaufen\n\
             \n\
             anchor Kunde [0.10, 0.23]\n\
             component Tee [0.50, 0.60] (Heißer Tee)\n\
             \n\
             Kunde->Tee"
        );
    }

    #[test]
    fn halfway_coordinates_round_up() {
        let document = MapDocument {
            map: MapMeta::titled("Achtel"),
            components: vec![
                Component::new("A", ComponentKind::Capability, Position::new(0.125, 0.375)),
                Component::new("B", ComponentKind::Capability, Position::new(0.625, 0.875)),
            ],
            ..Default::default()
        };
        let text = write_mapscript(&document);
        assert!(text.contains("component A [0.13, 0.38]\n"));
        assert!(text.contains("component B [0.63, 0.88]\n"));
    }

    #[test]
    fn format_coord_keeps_two_decimals() {
        assert_eq!(format_coord(0.1), "0.10");
        assert_eq!(format_coord(0.234), "0.23");
        assert_eq!(format_coord(1.0), "1.00");
        assert_eq!(format_coord(-0.125), "-0.13");
    }

    #[test]
    fn empty_map_has_only_header() {
        let document = MapDocument {
            map: MapMeta::titled("Leer"),
            ..Default::default()
        };
        assert_eq!(write_mapscript(&document), "title Leer\n\n");
    }
}
