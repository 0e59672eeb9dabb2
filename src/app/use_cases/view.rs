//! Use-Case-Funktionen für Kamera, Raster, Werkzeug und Optionen.
//!
//! Keine dieser Operationen erzeugt History-Einträge.

use crate::app::{AppState, EditorTool};
use crate::shared::EditorOptions;

/// Setzt den Zoom, geklemmt auf `[camera_zoom_min, camera_zoom_max]`.
pub fn set_zoom(state: &mut AppState, zoom: f32) {
    let opts = &state.options;
    state
        .view
        .camera
        .set_zoom_clamped(zoom, opts.camera_zoom_min, opts.camera_zoom_max);
}

/// Mausrad-Zoom: multipliziert bzw. dividiert durch den Zoom-Schritt, wobei der
/// Canvas-Punkt unter `pointer` an seiner Bildschirmposition bleibt.
pub fn zoom_at(state: &mut AppState, zoom_in: bool, pointer: glam::Vec2) {
    let opts = &state.options;
    let factor = if zoom_in {
        opts.camera_scroll_zoom_step
    } else {
        1.0 / opts.camera_scroll_zoom_step
    };
    state
        .view
        .camera
        .zoom_at(factor, pointer, opts.camera_zoom_min, opts.camera_zoom_max);
}

/// Setzt die Kamera-Verschiebung.
pub fn set_pan(state: &mut AppState, pan: glam::Vec2) {
    state.view.camera.set_pan(pan);
}

/// Schaltet das Raster um.
pub fn toggle_grid(state: &mut AppState) {
    state.view.grid_enabled = !state.view.grid_enabled;
}

/// Wechselt das Werkzeug. Verlässt man das Connection-Tool, endet die Geste.
pub fn set_editor_tool(state: &mut AppState, tool: EditorTool) {
    if tool != EditorTool::Connection {
        state.editor.connection_drawing.cancel();
    }
    state.editor.active_tool = tool;
    log::debug!("Werkzeug: {:?}", tool);
}

/// Übernimmt die vom Host gemeldete Canvas-Größe.
pub fn set_canvas_size(state: &mut AppState, size: glam::Vec2) {
    state.view.canvas_size = size;
}

/// Übernimmt neue Laufzeit-Optionen.
///
/// Ungültige Werte werden vorher korrigiert (`EditorOptions::sanitized`).
/// Zoom wird neu geklemmt, die History-Tiefe sofort angepasst.
pub fn apply_options(state: &mut AppState, options: EditorOptions) {
    let options = options.sanitized();
    state.history.set_max_depth(options.history_depth);
    state.view.canvas_padding = options.canvas_padding;
    state.options = options;
    let zoom = state.view.camera.zoom;
    set_zoom(state, zoom);
    log::info!("Optionen übernommen");
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn set_zoom_clamps_to_option_range() {
        let mut state = AppState::new();
        set_zoom(&mut state, 0.01);
        assert_relative_eq!(state.view.camera.zoom, 0.1);
        set_zoom(&mut state, 50.0);
        assert_relative_eq!(state.view.camera.zoom, 5.0);
        set_zoom(&mut state, 2.5);
        assert_relative_eq!(state.view.camera.zoom, 2.5);
    }

    #[test]
    fn wheel_zoom_in_then_out_returns_to_start() {
        let mut state = AppState::new();
        let pointer = glam::Vec2::new(300.0, 200.0);
        zoom_at(&mut state, true, pointer);
        assert_relative_eq!(state.view.camera.zoom, 1.05);
        zoom_at(&mut state, false, pointer);
        assert_relative_eq!(state.view.camera.zoom, 1.0, epsilon = 1e-6);
        assert_relative_eq!(state.view.camera.pan.x, 0.0, epsilon = 1e-3);
    }

    #[test]
    fn leaving_connection_tool_cancels_drawing() {
        let mut state = AppState::new();
        set_editor_tool(&mut state, EditorTool::Connection);
        state.editor.connection_drawing.start("a");
        set_editor_tool(&mut state, EditorTool::Connection);
        assert!(state.editor.connection_drawing.is_drawing);

        set_editor_tool(&mut state, EditorTool::Select);
        assert!(!state.editor.connection_drawing.is_drawing);
    }

    #[test]
    fn apply_options_reclamps_zoom() {
        let mut state = AppState::new();
        set_zoom(&mut state, 4.0);
        let options = EditorOptions {
            camera_zoom_max: 2.0,
            ..EditorOptions::default()
        };
        apply_options(&mut state, options);
        assert_relative_eq!(state.view.camera.zoom, 2.0);
        toggle_grid(&mut state);
        assert!(!state.view.grid_enabled);
    }

    #[test]
    fn apply_options_with_swapped_zoom_bounds() {
        let mut state = AppState::new();
        let options = EditorOptions {
            camera_zoom_min: 5.0,
            camera_zoom_max: 0.1,
            ..EditorOptions::default()
        };
        apply_options(&mut state, options);

        assert_relative_eq!(state.options.camera_zoom_min, 0.1);
        assert_relative_eq!(state.options.camera_zoom_max, 5.0);
        set_zoom(&mut state, 50.0);
        assert_relative_eq!(state.view.camera.zoom, 5.0);
    }
}
