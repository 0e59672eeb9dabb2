//! 2D-Kamera für Pan und Zoom des Map-Canvas.

use glam::Vec2;

/// 2D-Kamera mit Pan und Zoom
#[derive(Debug, Clone, PartialEq)]
pub struct Camera2D {
    /// Verschiebung des Canvas in Bildschirm-Pixeln
    pub pan: Vec2,
    /// Zoom-Level (1.0 = normal, 2.0 = doppelt so groß)
    pub zoom: f32,
}

impl Camera2D {
    /// Erstellt eine neue Kamera
    pub fn new() -> Self {
        Self {
            pan: Vec2::ZERO,
            zoom: 1.0,
        }
    }

    /// Setzt den Zoom, begrenzt auf `[min, max]`.
    ///
    /// Vertauschte Grenzen werden als `[max, min]` gelesen; ein NaN-Zoom
    /// lässt den bisherigen Wert stehen.
    pub fn set_zoom_clamped(&mut self, zoom: f32, min: f32, max: f32) {
        if zoom.is_nan() {
            return;
        }
        let (lo, hi) = if min <= max { (min, max) } else { (max, min) };
        self.zoom = zoom.max(lo).min(hi);
    }

    /// Zoomt um `factor`, sodass der Canvas-Punkt unter `pointer` (Bildschirm)
    /// an derselben Bildschirmposition bleibt.
    pub fn zoom_at(&mut self, factor: f32, pointer: Vec2, min: f32, max: f32) {
        let focus = self.screen_to_canvas(pointer);
        self.set_zoom_clamped(self.zoom * factor, min, max);
        self.pan = pointer - focus * self.zoom;
    }

    /// Setzt die Verschiebung
    pub fn set_pan(&mut self, pan: Vec2) {
        self.pan = pan;
    }

    /// Konvertiert Bildschirm-Koordinaten in Canvas-Koordinaten.
    pub fn screen_to_canvas(&self, screen_pos: Vec2) -> Vec2 {
        (screen_pos - self.pan) / self.zoom
    }

    /// Konvertiert Canvas-Koordinaten in Bildschirm-Koordinaten.
    pub fn canvas_to_screen(&self, canvas_pos: Vec2) -> Vec2 {
        canvas_pos * self.zoom + self.pan
    }
}

impl Default for Camera2D {
    fn default() -> Self {
        Self::new()
    }
}
