use crate::core::{Camera2D, CanvasLayout};
use crate::shared::EditorOptions;
use glam::Vec2;

/// View-bezogener Anwendungszustand
#[derive(Debug, Clone)]
pub struct ViewState {
    /// 2D-Kamera für die Ansicht
    pub camera: Camera2D,
    /// Raster anzeigen
    pub grid_enabled: bool,
    /// Aktuelle Canvas-Größe in Pixeln
    pub canvas_size: Vec2,
    /// Rand um die Map-Fläche in Pixeln
    pub canvas_padding: f32,
}

impl ViewState {
    /// Standard-Canvas-Größe vor der ersten Größenmeldung des Hosts.
    pub const DEFAULT_CANVAS_SIZE: Vec2 = Vec2::new(1200.0, 800.0);

    /// Erstellt den View-Zustand aus den Optionen.
    pub fn from_options(options: &EditorOptions) -> Self {
        Self {
            camera: Camera2D::new(),
            grid_enabled: options.grid_enabled,
            canvas_size: Self::DEFAULT_CANVAS_SIZE,
            canvas_padding: options.canvas_padding,
        }
    }

    /// Aktuelles Canvas-Layout für Koordinaten-Umrechnungen.
    pub fn canvas_layout(&self) -> CanvasLayout {
        CanvasLayout::new(self.canvas_size, self.canvas_padding)
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::from_options(&EditorOptions::default())
    }
}
