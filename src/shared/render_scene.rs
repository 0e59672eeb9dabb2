//! Render-Szene als expliziter Übergabevertrag zwischen App und Renderer.
//!
//! Lebt im shared-Modul, da `app` sie baut und ein externer Renderer sie konsumiert.
//! Alle Positionen sind bereits in Canvas-Pixel umgerechnet.

use crate::core::{Annotation, Camera2D, ComponentKind, ComponentStyle, ConnectionKind};
use glam::Vec2;

/// Eine Komponente, wie sie gezeichnet wird.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderComponent {
    pub id: String,
    /// Anzuzeigender Text (Label oder Name)
    pub text: String,
    pub kind: ComponentKind,
    /// Position in Canvas-Pixeln
    pub canvas_pos: Vec2,
    pub style: Option<ComponentStyle>,
    pub selected: bool,
}

/// Eine Verbindung mit aufgelösten Endpunkten und Stil-Defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderConnection {
    pub id: String,
    pub kind: ConnectionKind,
    /// Startpunkt (Quelle) in Canvas-Pixeln
    pub from: Vec2,
    /// Endpunkt (Ziel) in Canvas-Pixeln
    pub to: Vec2,
    pub color: String,
    pub width: f64,
    pub dashed: bool,
    pub label: Option<String>,
    pub selected: bool,
}

/// Read-only Daten für einen Render-Frame.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderScene {
    /// Titel der Map
    pub title: String,
    /// Komponenten in Map-Reihenfolge
    pub components: Vec<RenderComponent>,
    /// Verbindungen (solche mit fehlenden Endpunkten sind ausgelassen)
    pub connections: Vec<RenderConnection>,
    /// Annotationen in Canvas-Koordinaten
    pub annotations: Vec<Annotation>,
    /// Kamera-Zustand für diesen Frame
    pub camera: Camera2D,
    /// Canvas-Größe in Pixeln
    pub canvas_size: Vec2,
    /// Rand um die Map-Fläche in Pixeln
    pub canvas_padding: f32,
    /// Raster zeichnen
    pub grid_enabled: bool,
    /// Quell-Position einer laufenden Verbindungs-Geste
    pub drawing_source: Option<Vec2>,
}

impl RenderScene {
    /// Gibt zurück, ob es etwas zu zeichnen gibt.
    pub fn has_content(&self) -> bool {
        !self.components.is_empty() || !self.annotations.is_empty()
    }
}
