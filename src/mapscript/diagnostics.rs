//! Befunde des strikten MapScript-Durchlaufs.

use std::fmt;

/// Art einer verworfenen Zeile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MapScriptIssueKind {
    /// `component`/`anchor`-Zeile ohne gültige `[visibility, evolution]`-Angabe
    MalformedComponent,
    /// Verbindung mit unbekanntem Komponentennamen
    UnresolvedEndpoint { name: String },
    /// Zeile passt zu keinem Schlüsselwort
    UnrecognizedLine,
}

/// Eine verworfene Zeile mit 1-basierter Zeilennummer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapScriptIssue {
    pub line: usize,
    pub kind: MapScriptIssueKind,
}

impl fmt::Display for MapScriptIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            MapScriptIssueKind::MalformedComponent => {
                write!(f, "Zeile {}: ungültige Komponentenzeile", self.line)
            }
            MapScriptIssueKind::UnresolvedEndpoint { name } => {
                write!(f, "Zeile {}: unbekannte Komponente '{}'", self.line, name)
            }
            MapScriptIssueKind::UnrecognizedLine => {
                write!(f, "Zeile {}: nicht erkannt", self.line)
            }
        }
    }
}
