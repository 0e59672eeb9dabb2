//! Use-Case-Funktionen für Dateiaktionen.
//! Alle Dateisystem-Operationen (I/O) sind hier zentralisiert.
//!
//! Ein fehlgeschlagenes Laden lässt den AppState unverändert.

use super::document::{export_map, load_map};
use crate::app::AppState;
use crate::core::MapDocument;
use anyhow::Context;

/// Lädt eine JSON-Map und ersetzt den aktuellen Inhalt.
pub fn load_json_file(state: &mut AppState, path: &str) -> anyhow::Result<()> {
    let text = read_file(path)?;
    let document = crate::json::parse_map_json(&text)
        .with_context(|| format!("JSON-Map ungültig: {path}"))?;
    finish_load(state, document, path);
    Ok(())
}

/// Speichert die Map als formatiertes JSON.
///
/// Ohne Pfad wird der Pfad der zuletzt geladenen/gespeicherten Datei verwendet.
pub fn save_json_file(state: &mut AppState, path: Option<String>) -> anyhow::Result<()> {
    let path = resolve_save_path(state, path)?;
    let text = crate::json::write_map_json(&export_map(state))?;
    write_file(&path, &text)?;
    finish_save(state, path);
    Ok(())
}

/// Lädt eine MapScript-Datei.
///
/// Die Map erhält eine frische ID und keine Annotationen. Nicht erkannte
/// Zeilen werden verworfen.
pub fn load_mapscript_file(state: &mut AppState, path: &str) -> anyhow::Result<()> {
    let text = read_file(path)?;
    let (parsed, issues) = crate::mapscript::parse_mapscript_with_diagnostics(&text);
    if !issues.is_empty() {
        log::warn!("{}: {} Zeilen verworfen", path, issues.len());
    }
    finish_load(state, parsed.into_map_document(), path);
    Ok(())
}

/// Speichert die Map als MapScript-Text (verlustbehaftet, siehe `mapscript`).
pub fn save_mapscript_file(state: &mut AppState, path: Option<String>) -> anyhow::Result<()> {
    let path = resolve_save_path(state, path)?;
    let text = crate::mapscript::write_mapscript(&export_map(state));
    write_file(&path, &text)?;
    finish_save(state, path);
    Ok(())
}

fn read_file(path: &str) -> anyhow::Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("Datei nicht lesbar: {path}"))
}

fn write_file(path: &str, content: &str) -> anyhow::Result<()> {
    std::fs::write(path, content).with_context(|| format!("Datei nicht schreibbar: {path}"))
}

fn resolve_save_path(state: &AppState, path: Option<String>) -> anyhow::Result<String> {
    path.or_else(|| state.ui.current_file_path.clone())
        .context("Kein Dateipfad bekannt")
}

fn finish_load(state: &mut AppState, document: MapDocument, path: &str) {
    load_map(state, document);
    state.ui.current_file_path = Some(path.to_string());
    state.ui.status_message = Some(format!(
        "Geladen: {} ({} Komponenten, {} Verbindungen)",
        path,
        state.component_count(),
        state.connection_count()
    ));
}

fn finish_save(state: &mut AppState, path: String) {
    log::info!("Map gespeichert: {}", path);
    state.ui.status_message = Some(format!("Gespeichert: {path}"));
    state.ui.current_file_path = Some(path);
}
