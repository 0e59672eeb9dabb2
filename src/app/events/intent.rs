use super::super::state::EditorTool;
use crate::core::{AnnotationUpdate, ComponentUpdate, ConnectionUpdate, MapDocument};
use crate::shared::EditorOptions;

/// App-Intent und App-Command Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
#[derive(Debug, Clone, PartialEq)]
pub enum AppIntent {
    // === Canvas-Gesten ===
    /// Klick auf leere Canvas-Fläche (Bildschirm-Pixel)
    CanvasClicked { screen_pos: glam::Vec2 },
    /// Klick auf eine Komponente
    ComponentClicked { id: String, shift: bool },
    /// Drag einer Komponente beendet (Canvas-Pixel der neuen Position)
    ComponentDragEnded { id: String, canvas_pos: glam::Vec2 },
    /// Klick auf eine Verbindung
    ConnectionClicked { id: String },
    /// Entfernen-Taste
    DeleteRequested,
    /// Escape: Geste abbrechen und abwählen
    CancelRequested,

    // === Zwischenablage & History ===
    /// Selektion kopieren
    CopyRequested,
    /// Zwischenablage einfügen
    PasteRequested,
    /// Undo
    UndoRequested,
    /// Redo
    RedoRequested,

    // === Editor-Panel ===
    /// Felder einer Komponente geändert
    ComponentEdited { id: String, update: ComponentUpdate },
    /// Komponente per Editor-Panel löschen
    ComponentDeleteRequested { id: String },
    /// Felder einer Verbindung geändert
    ConnectionEdited { id: String, update: ConnectionUpdate },
    /// Verbindung per Editor-Panel löschen
    ConnectionDeleteRequested { id: String },
    /// Felder einer Annotation geändert
    AnnotationEdited { id: String, update: AnnotationUpdate },
    /// Annotation löschen
    AnnotationDeleteRequested { id: String },
    /// Map-Titel geändert
    TitleEdited { title: String },
    /// Zweck geändert (leerer Text entfernt ihn)
    PurposeEdited { purpose: String },
    /// Umfang geändert (leerer Text entfernt ihn)
    ScopeEdited { scope: String },

    // === Toolbar & View ===
    /// Werkzeug gewählt
    ToolSelected { tool: EditorTool },
    /// Zoom über Toolbar gesetzt
    ZoomChanged { zoom: f32 },
    /// Mausrad-Zoom; `zoom_in` bei negativem Scroll-Delta
    WheelZoom {
        zoom_in: bool,
        screen_pos: glam::Vec2,
    },
    /// Kamera um Delta verschieben (Bildschirm-Pixel)
    CameraPan { delta: glam::Vec2 },
    /// Raster umschalten
    GridToggled,
    /// Canvas-Größe hat sich geändert
    CanvasResized { size: glam::Vec2 },

    // === Dokument & Dateien ===
    /// Neue, leere Map
    NewMapRequested,
    /// Dokument aus dem Host importieren
    ImportRequested { document: MapDocument },
    /// JSON-Datei öffnen
    OpenJsonRequested { path: String },
    /// JSON-Datei speichern (None = aktueller Pfad)
    SaveJsonRequested { path: Option<String> },
    /// MapScript-Datei öffnen
    OpenMapScriptRequested { path: String },
    /// MapScript-Datei speichern (None = aktueller Pfad)
    SaveMapScriptRequested { path: Option<String> },

    // === Optionen ===
    /// Optionen übernommen
    OptionsChanged { options: Box<EditorOptions> },
}
