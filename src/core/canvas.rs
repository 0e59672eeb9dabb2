//! Umrechnung zwischen normalisierten Map-Positionen und Canvas-Pixeln.

use super::Position;
use glam::Vec2;

/// Canvas-Geometrie: Gesamtgröße und Rand um die Map-Fläche.
///
/// Die X-Achse trägt Evolution, die Y-Achse Sichtbarkeit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasLayout {
    /// Canvas-Größe in Pixeln
    pub size: Vec2,
    /// Rand um die Map-Fläche in Pixeln
    pub padding: f32,
}

impl CanvasLayout {
    /// Erstellt ein Layout
    pub fn new(size: Vec2, padding: f32) -> Self {
        Self { size, padding }
    }

    /// Größe der eigentlichen Map-Fläche (mindestens 1×1 Pixel).
    pub fn map_size(&self) -> Vec2 {
        (self.size - Vec2::splat(2.0 * self.padding)).max(Vec2::ONE)
    }

    /// Canvas-Pixel → normalisierte Position, auf `[0, 1]` geklemmt.
    ///
    /// Das ist die einzige Stelle, an der Positionen geklemmt werden
    /// (interaktive Platzierung und Drag).
    pub fn to_normalized(&self, canvas_pos: Vec2) -> Position {
        let map = self.map_size();
        let rel = (canvas_pos - Vec2::splat(self.padding)) / map;
        Position::new(rel.y as f64, rel.x as f64).clamped()
    }

    /// Normalisierte Position → Canvas-Pixel (ungeklemmt).
    pub fn to_canvas(&self, position: Position) -> Vec2 {
        let map = self.map_size();
        Vec2::new(
            self.padding + position.evolution as f32 * map.x,
            self.padding + position.visibility as f32 * map.y,
        )
    }
}
