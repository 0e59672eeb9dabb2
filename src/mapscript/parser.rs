//! Parser für MapScript-Text.

use super::diagnostics::{MapScriptIssue, MapScriptIssueKind};
use super::DEFAULT_MAPSCRIPT_TITLE;
use crate::core::{
    Component, ComponentKind, ComponentLabel, Connection, MapDocument, MapMeta, Position,
};
use regex::Regex;
use std::collections::HashMap;
use std::sync::OnceLock;

/// `<name> [<visibility>, <evolution>] (<label>)?`, Label optional.
const COMPONENT_PATTERN: &str = r"^(.+?)\s*\[([0-9.]+)\s*,\s*([0-9.]+)\](?:\s*\((.+)\))?";

fn component_regex() -> Option<&'static Regex> {
    static RE: OnceLock<Option<Regex>> = OnceLock::new();
    RE.get_or_init(|| Regex::new(COMPONENT_PATTERN).ok()).as_ref()
}

/// Ergebnis eines MapScript-Durchlaufs.
///
/// Alle Komponenten und Verbindungen tragen frisch erzeugte IDs.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedMapScript {
    pub title: String,
    pub purpose: Option<String>,
    pub scope: Option<String>,
    pub components: Vec<Component>,
    pub connections: Vec<Connection>,
}

impl ParsedMapScript {
    /// Baut ein Map-Dokument mit frischer Map-ID und ohne Annotationen.
    pub fn into_map_document(self) -> MapDocument {
        let mut map = MapMeta::titled(self.title);
        map.purpose = self.purpose;
        map.scope = self.scope;
        MapDocument {
            map,
            components: self.components,
            connections: self.connections,
            annotations: Vec::new(),
        }
    }
}

/// Parsed MapScript-Text. Schlägt nie fehl; nicht erkannte Zeilen entfallen.
pub fn parse_mapscript(text: &str) -> ParsedMapScript {
    parse_mapscript_with_diagnostics(text).0
}

/// Wie `parse_mapscript`, liefert zusätzlich alle verworfenen Zeilen.
pub fn parse_mapscript_with_diagnostics(text: &str) -> (ParsedMapScript, Vec<MapScriptIssue>) {
    let mut parsed = ParsedMapScript {
        title: DEFAULT_MAPSCRIPT_TITLE.to_string(),
        purpose: None,
        scope: None,
        components: Vec::new(),
        connections: Vec::new(),
    };
    let mut issues = Vec::new();
    // Name → ID; spätere Deklarationen überschreiben frühere
    let mut ids_by_name: HashMap<String, String> = HashMap::new();

    for (index, raw) in text.split('\n').enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with("//") {
            continue;
        }
        let line_no = index + 1;

        if let Some(rest) = line.strip_prefix("title ") {
            parsed.title = rest.trim().to_string();
        } else if let Some(rest) = line.strip_prefix("purpose ") {
            parsed.purpose = Some(rest.trim().to_string());
        } else if let Some(rest) = line.strip_prefix("scope ") {
            parsed.scope = Some(rest.trim().to_string());
        } else if let Some((rest, kind)) = component_keyword(line) {
            match parse_component(rest, kind) {
                Some(component) => {
                    ids_by_name.insert(component.name.clone(), component.id.clone());
                    parsed.components.push(component);
                }
                None => {
                    log::debug!("MapScript Zeile {}: ungültige Komponente '{}'", line_no, line);
                    issues.push(MapScriptIssue {
                        line: line_no,
                        kind: MapScriptIssueKind::MalformedComponent,
                    });
                }
            }
        } else if let Some((source, target)) = line.split_once("->") {
            let (source, target) = (source.trim(), target.trim());
            match (ids_by_name.get(source), ids_by_name.get(target)) {
                (Some(source_id), Some(target_id)) => {
                    parsed
                        .connections
                        .push(Connection::dependency(source_id, target_id));
                }
                (source_id, target_id) => {
                    log::debug!(
                        "MapScript Zeile {}: Verbindung '{}' nicht auflösbar",
                        line_no,
                        line
                    );
                    for (name, resolved) in [(source, source_id), (target, target_id)] {
                        if resolved.is_none() {
                            issues.push(MapScriptIssue {
                                line: line_no,
                                kind: MapScriptIssueKind::UnresolvedEndpoint {
                                    name: name.to_string(),
                                },
                            });
                        }
                    }
                }
            }
        } else {
            log::debug!("MapScript Zeile {} nicht erkannt: '{}'", line_no, line);
            issues.push(MapScriptIssue {
                line: line_no,
                kind: MapScriptIssueKind::UnrecognizedLine,
            });
        }
    }

    log::debug!(
        "MapScript geparst: {} Komponenten, {} Verbindungen, {} verworfene Zeilen",
        parsed.components.len(),
        parsed.connections.len(),
        issues.len()
    );
    (parsed, issues)
}

/// `anchor` → User, `component` → Capability.
fn component_keyword(line: &str) -> Option<(&str, ComponentKind)> {
    if let Some(rest) = line.strip_prefix("component ") {
        Some((rest, ComponentKind::Capability))
    } else {
        line.strip_prefix("anchor ")
            .map(|rest| (rest, ComponentKind::User))
    }
}

fn parse_component(rest: &str, kind: ComponentKind) -> Option<Component> {
    let caps = component_regex()?.captures(rest)?;
    let name = caps.get(1)?.as_str().trim();
    let visibility = parse_leading_float(caps.get(2)?.as_str())?;
    let evolution = parse_leading_float(caps.get(3)?.as_str())?;

    let mut component = Component::new(name, kind, Position::new(visibility, evolution));
    if let Some(label) = caps.get(4) {
        component.label = Some(ComponentLabel::new(label.as_str().trim()));
    }
    Some(component)
}

/// Liest die längste Zahl `ziffern[.ziffern]` vom Anfang (`"1.2.3"` → 1.2).
///
/// Ohne eine einzige Ziffer (z.B. `"."`) gibt es keinen Wert.
fn parse_leading_float(text: &str) -> Option<f64> {
    let mut end = 0;
    let mut seen_dot = false;
    for (i, ch) in text.char_indices() {
        match ch {
            '.' if seen_dot => break,
            '.' => seen_dot = true,
            c if c.is_ascii_digit() => {}
            _ => break,
        }
        end = i + ch.len_utf8();
    }
    let prefix = &text[..end];
    if !prefix.bytes().any(|b| b.is_ascii_digit()) {
        return None;
    }
    prefix.parse().ok()
}
