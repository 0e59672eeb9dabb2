//! Zentrale Konfiguration für den Wardley-Map-Editor.
//!
//! `EditorOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};

// ── Kamera ──────────────────────────────────────────────────────────

/// Minimaler Zoom-Faktor.
pub const CAMERA_ZOOM_MIN: f32 = 0.1;
/// Maximaler Zoom-Faktor.
pub const CAMERA_ZOOM_MAX: f32 = 5.0;
/// Zoom-Schritt bei Mausrad-Scroll.
pub const CAMERA_SCROLL_ZOOM_STEP: f32 = 1.05;

// ── Canvas ──────────────────────────────────────────────────────────

/// Rand um die Map-Fläche in Canvas-Pixeln.
pub const CANVAS_PADDING: f32 = 80.0;

// ── Editing ─────────────────────────────────────────────────────────

/// Versatz eingefügter Komponenten auf beiden Achsen.
pub const PASTE_OFFSET: f64 = 0.05;
/// Maximale Anzahl Undo-/Redo-Schritte.
pub const HISTORY_DEPTH: usize = 200;
/// Name neu platzierter Komponenten.
pub const DEFAULT_COMPONENT_NAME: &str = "New Component";

// ── Connection-Rendering ───────────────────────────────────────────

/// Standard-Farbe von Verbindungen ohne eigenen Stil.
pub const CONNECTION_COLOR_DEFAULT: &str = "#666";
/// Standard-Linienstärke von Verbindungen in Pixeln.
pub const CONNECTION_WIDTH_DEFAULT: f64 = 2.0;

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Editor-Optionen.
/// Wird als `wardley_map_editor.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EditorOptions {
    // ── Kamera ──────────────────────────────────────────────────
    /// Minimaler Zoom-Faktor
    pub camera_zoom_min: f32,
    /// Maximaler Zoom-Faktor
    pub camera_zoom_max: f32,
    /// Zoom-Schritt bei Mausrad-Scroll
    pub camera_scroll_zoom_step: f32,
    /// Raster beim Start anzeigen
    #[serde(default = "default_grid_enabled")]
    pub grid_enabled: bool,

    // ── Canvas ──────────────────────────────────────────────────
    /// Rand um die Map-Fläche in Pixeln
    pub canvas_padding: f32,

    // ── Editing ─────────────────────────────────────────────────
    /// Versatz eingefügter Komponenten
    pub paste_offset: f64,
    /// Maximale Undo-Tiefe
    pub history_depth: usize,
    /// Name neu platzierter Komponenten
    pub default_component_name: String,
    /// Inhalt neu platzierter Notizen
    #[serde(default)]
    pub default_annotation_text: String,

    // ── Connections ─────────────────────────────────────────────
    /// Farbe für Verbindungen ohne eigenen Stil
    pub connection_color_default: String,
    /// Linienstärke für Verbindungen ohne eigenen Stil
    pub connection_width_default: f64,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            camera_zoom_min: CAMERA_ZOOM_MIN,
            camera_zoom_max: CAMERA_ZOOM_MAX,
            camera_scroll_zoom_step: CAMERA_SCROLL_ZOOM_STEP,
            grid_enabled: true,

            canvas_padding: CANVAS_PADDING,

            paste_offset: PASTE_OFFSET,
            history_depth: HISTORY_DEPTH,
            default_component_name: DEFAULT_COMPONENT_NAME.to_string(),
            default_annotation_text: String::new(),

            connection_color_default: CONNECTION_COLOR_DEFAULT.to_string(),
            connection_width_default: CONNECTION_WIDTH_DEFAULT,
        }
    }
}

/// Serde-Default für `grid_enabled` (Abwärtskompatibilität bestehender TOML-Dateien).
fn default_grid_enabled() -> bool {
    true
}

impl EditorOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    Self::sanitized(opts)
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Korrigiert ungültige Werte, damit keine Laufzeit-Operation daran scheitert.
    ///
    /// Vertauschte Zoom-Grenzen werden getauscht; nicht-endliche oder nicht
    /// positive Zoom-Werte und Zoom-Schritte fallen auf die Standardwerte zurück.
    pub fn sanitized(mut self) -> Self {
        let zoom_valid = |z: f32| z.is_finite() && z > 0.0;
        if !zoom_valid(self.camera_zoom_min) || !zoom_valid(self.camera_zoom_max) {
            log::warn!(
                "Ungültige Zoom-Grenzen {}..{}, verwende Standardwerte",
                self.camera_zoom_min,
                self.camera_zoom_max
            );
            self.camera_zoom_min = CAMERA_ZOOM_MIN;
            self.camera_zoom_max = CAMERA_ZOOM_MAX;
        } else if self.camera_zoom_min > self.camera_zoom_max {
            log::warn!(
                "Zoom-Grenzen vertauscht ({} > {}), werden getauscht",
                self.camera_zoom_min,
                self.camera_zoom_max
            );
            std::mem::swap(&mut self.camera_zoom_min, &mut self.camera_zoom_max);
        }
        if !zoom_valid(self.camera_scroll_zoom_step) {
            log::warn!(
                "Ungültiger Zoom-Schritt {}, verwende {}",
                self.camera_scroll_zoom_step,
                CAMERA_SCROLL_ZOOM_STEP
            );
            self.camera_scroll_zoom_step = CAMERA_SCROLL_ZOOM_STEP;
        }
        self
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("wardley_map_editor"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("wardley_map_editor.toml")
    }
}
