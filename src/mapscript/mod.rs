//! MapScript Import/Export.
//!
//! Zeilenbasiertes Textformat für Wardley-Maps:
//!
//! ```text
//! title <text>
//! purpose <text>
//! scope <text>
//! component <name> [<visibility>, <evolution>] (<label>)
//! anchor <name> [<visibility>, <evolution>] (<label>)
//! <name>-><name>
//! // Kommentar
//! ```
//!
//! Der Parser ist tolerant: nicht erkannte Zeilen werden verworfen.
//! `parse_mapscript_with_diagnostics` meldet zusätzlich, was verworfen wurde.
//!
//! Verlustbehaftet gegenüber JSON: Komponententyp (nur anchor/component),
//! Verbindungstyp, Stile, Notizen, Annotationen und Nachkommastellen (2).

pub mod diagnostics;
pub mod parser;
pub mod writer;

pub use diagnostics::{MapScriptIssue, MapScriptIssueKind};
pub use parser::{parse_mapscript, parse_mapscript_with_diagnostics, ParsedMapScript};
pub use writer::write_mapscript;

/// Titel, wenn der Text keine `title`-Zeile enthält.
pub const DEFAULT_MAPSCRIPT_TITLE: &str = "Untitled Map";
