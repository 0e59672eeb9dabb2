//! Builder für Render-Szenen aus dem AppState.

use crate::app::AppState;
use crate::core::Connection;
use crate::shared::{RenderComponent, RenderConnection, RenderScene};

/// Baut eine RenderScene aus dem aktuellen AppState.
pub fn build(state: &AppState) -> RenderScene {
    let layout = state.view.canvas_layout();
    let content = &state.content;

    let components = content
        .components
        .iter()
        .map(|c| RenderComponent {
            id: c.id.clone(),
            text: c.display_text().to_string(),
            kind: c.kind,
            canvas_pos: layout.to_canvas(c.position),
            style: c.style.clone(),
            selected: state.selection.is_component_selected(&c.id),
        })
        .collect();

    let connections = content
        .connections
        .iter()
        .filter_map(|conn| build_connection(state, conn))
        .collect();

    let drawing_source = state
        .editor
        .connection_drawing
        .active_source()
        .and_then(|id| content.component(id))
        .map(|c| layout.to_canvas(c.position));

    RenderScene {
        title: state.map.title.clone(),
        components,
        connections,
        annotations: content.annotations.clone(),
        camera: state.view.camera.clone(),
        canvas_size: state.view.canvas_size,
        canvas_padding: state.view.canvas_padding,
        grid_enabled: state.view.grid_enabled,
        drawing_source,
    }
}

/// Löst die Endpunkte auf; fehlt einer, wird die Verbindung nicht gezeichnet.
fn build_connection(state: &AppState, conn: &Connection) -> Option<RenderConnection> {
    let layout = state.view.canvas_layout();
    let source = state.content.component(&conn.source)?;
    let target = state.content.component(&conn.target)?;
    let style = conn.style.clone().unwrap_or_default();

    Some(RenderConnection {
        id: conn.id.clone(),
        kind: conn.kind,
        from: layout.to_canvas(source.position),
        to: layout.to_canvas(target.position),
        color: style
            .color
            .unwrap_or_else(|| state.options.connection_color_default.clone()),
        width: style.width.unwrap_or(state.options.connection_width_default),
        dashed: style.dashed.unwrap_or(false),
        label: conn.label.clone(),
        selected: state.selection.is_connection_selected(&conn.id),
    })
}
