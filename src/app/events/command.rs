use super::super::state::EditorTool;
use crate::core::{
    Annotation, AnnotationUpdate, Component, ComponentUpdate, Connection, ConnectionUpdate,
    MapDocument,
};
use crate::shared::EditorOptions;

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone, PartialEq)]
pub enum AppCommand {
    // === Komponenten ===
    /// Komponente anhängen (mit History)
    AddComponent { component: Component },
    /// Angegebene Felder einer Komponente übernehmen (ohne History)
    UpdateComponent { id: String, update: ComponentUpdate },
    /// Komponente samt referenzierender Verbindungen löschen (mit History)
    DeleteComponent { id: String },

    // === Verbindungen ===
    /// Verbindung anhängen (mit History)
    AddConnection { connection: Connection },
    /// Angegebene Felder einer Verbindung übernehmen (ohne History)
    UpdateConnection { id: String, update: ConnectionUpdate },
    /// Verbindung löschen (mit History)
    DeleteConnection { id: String },

    // === Annotationen (ohne History) ===
    /// Annotation anhängen
    AddAnnotation { annotation: Annotation },
    /// Angegebene Felder einer Annotation übernehmen
    UpdateAnnotation { id: String, update: AnnotationUpdate },
    /// Annotation löschen
    DeleteAnnotation { id: String },

    // === Metadaten ===
    /// Map-Titel setzen
    SetTitle { title: String },
    /// Zweck setzen oder entfernen
    SetPurpose { purpose: Option<String> },
    /// Umfang setzen oder entfernen
    SetScope { scope: Option<String> },

    // === Selektion ===
    /// Genau eine Komponente selektieren
    SelectComponent { id: String },
    /// Mehrfachauswahl von Komponenten setzen
    SelectComponents { ids: Vec<String> },
    /// Genau eine Verbindung selektieren
    SelectConnection { id: String },
    /// Alles abwählen und Verbindungs-Geste abbrechen
    DeselectAll,

    // === Zwischenablage ===
    /// Selektierte Komponenten + interne Verbindungen kopieren
    CopySelectedComponents,
    /// Zwischenablage mit neuen IDs und Versatz einfügen
    PasteComponents,
    /// Selektierte Komponenten löschen
    DeleteSelectedComponents,

    // === Verbindungs-Geste ===
    /// Verbindungs-Geste an Quell-Komponente starten
    StartConnectionDrawing { source_id: String },
    /// Verbindungs-Geste abbrechen
    CancelConnectionDrawing,

    // === History ===
    /// Letzten Schritt rückgängig machen
    Undo,
    /// Rückgängig gemachten Schritt wiederherstellen
    Redo,

    // === Dokument ===
    /// Map-Dokument vollständig ersetzen (ohne History)
    LoadMap { document: MapDocument },
    /// Auf leere Map zurücksetzen
    ResetMap,

    // === Datei-I/O ===
    /// JSON-Datei laden
    LoadJsonFile { path: String },
    /// JSON-Datei speichern (None = aktueller Pfad)
    SaveJsonFile { path: Option<String> },
    /// MapScript-Datei laden
    LoadMapScriptFile { path: String },
    /// MapScript-Datei speichern (None = aktueller Pfad)
    SaveMapScriptFile { path: Option<String> },

    // === View ===
    /// Zoom absolut setzen (geklemmt)
    SetZoom { zoom: f32 },
    /// Mausrad-Zoom um einen Bildschirmpunkt
    ZoomAt { zoom_in: bool, pointer: glam::Vec2 },
    /// Kamera-Verschiebung absolut setzen
    SetPan { pan: glam::Vec2 },
    /// Raster ein-/ausblenden
    ToggleGrid,
    /// Editor-Werkzeug wechseln
    SetEditorTool { tool: EditorTool },
    /// Canvas-Größe hat sich geändert
    SetCanvasSize { size: glam::Vec2 },

    // === Optionen ===
    /// Laufzeit-Optionen übernehmen
    ApplyOptions { options: Box<EditorOptions> },
}
