//! Mapping von UI-Intents auf mutierende App-Commands.

use super::{AppCommand, AppIntent, AppState, EditorTool};
use crate::core::{Annotation, CanvasPoint, Component, ComponentKind, ComponentUpdate, Connection};

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        // === Canvas-Gesten ===
        AppIntent::CanvasClicked { screen_pos } => canvas_click(state, screen_pos),
        AppIntent::ComponentClicked { id, shift } => component_click(state, id, shift),
        AppIntent::ComponentDragEnded { id, canvas_pos } => {
            let position = state.view.canvas_layout().to_normalized(canvas_pos);
            vec![AppCommand::UpdateComponent {
                id,
                update: ComponentUpdate::position(position),
            }]
        }
        AppIntent::ConnectionClicked { id } => vec![AppCommand::SelectConnection { id }],
        AppIntent::DeleteRequested => {
            if !state.selection.selected_component_ids.is_empty() {
                vec![AppCommand::DeleteSelectedComponents]
            } else {
                state
                    .selection
                    .selected_connection_ids
                    .iter()
                    .map(|id| AppCommand::DeleteConnection { id: id.clone() })
                    .collect()
            }
        }
        AppIntent::CancelRequested => vec![
            AppCommand::CancelConnectionDrawing,
            AppCommand::DeselectAll,
        ],

        // === Zwischenablage & History ===
        AppIntent::CopyRequested => vec![AppCommand::CopySelectedComponents],
        AppIntent::PasteRequested => vec![AppCommand::PasteComponents],
        AppIntent::UndoRequested => vec![AppCommand::Undo],
        AppIntent::RedoRequested => vec![AppCommand::Redo],

        // === Editor-Panel ===
        AppIntent::ComponentEdited { id, update } => {
            vec![AppCommand::UpdateComponent { id, update }]
        }
        AppIntent::ComponentDeleteRequested { id } => vec![AppCommand::DeleteComponent { id }],
        AppIntent::ConnectionEdited { id, update } => {
            vec![AppCommand::UpdateConnection { id, update }]
        }
        AppIntent::ConnectionDeleteRequested { id } => {
            vec![AppCommand::DeleteConnection { id }]
        }
        AppIntent::AnnotationEdited { id, update } => {
            vec![AppCommand::UpdateAnnotation { id, update }]
        }
        AppIntent::AnnotationDeleteRequested { id } => {
            vec![AppCommand::DeleteAnnotation { id }]
        }
        AppIntent::TitleEdited { title } => vec![AppCommand::SetTitle { title }],
        AppIntent::PurposeEdited { purpose } => vec![AppCommand::SetPurpose {
            purpose: non_empty(purpose),
        }],
        AppIntent::ScopeEdited { scope } => vec![AppCommand::SetScope {
            scope: non_empty(scope),
        }],

        // === Toolbar & View ===
        AppIntent::ToolSelected { tool } => vec![AppCommand::SetEditorTool { tool }],
        AppIntent::ZoomChanged { zoom } => vec![AppCommand::SetZoom { zoom }],
        AppIntent::WheelZoom {
            zoom_in,
            screen_pos,
        } => vec![AppCommand::ZoomAt {
            zoom_in,
            pointer: screen_pos,
        }],
        AppIntent::CameraPan { delta } => vec![AppCommand::SetPan {
            pan: state.view.camera.pan + delta,
        }],
        AppIntent::GridToggled => vec![AppCommand::ToggleGrid],
        AppIntent::CanvasResized { size } => vec![AppCommand::SetCanvasSize { size }],

        // === Dokument & Dateien ===
        AppIntent::NewMapRequested => vec![AppCommand::ResetMap],
        AppIntent::ImportRequested { document } => vec![AppCommand::LoadMap { document }],
        AppIntent::OpenJsonRequested { path } => vec![AppCommand::LoadJsonFile { path }],
        AppIntent::SaveJsonRequested { path } => vec![AppCommand::SaveJsonFile { path }],
        AppIntent::OpenMapScriptRequested { path } => {
            vec![AppCommand::LoadMapScriptFile { path }]
        }
        AppIntent::SaveMapScriptRequested { path } => {
            vec![AppCommand::SaveMapScriptFile { path }]
        }

        // === Optionen ===
        AppIntent::OptionsChanged { options } => vec![AppCommand::ApplyOptions { options }],
    }
}

/// Klick auf leere Canvas-Fläche: Platzieren (Component-/Annotation-Tool) oder Abwählen.
fn canvas_click(state: &AppState, screen_pos: glam::Vec2) -> Vec<AppCommand> {
    let canvas_pos = state.view.camera.screen_to_canvas(screen_pos);
    match state.editor.active_tool {
        EditorTool::Component => {
            let position = state.view.canvas_layout().to_normalized(canvas_pos);
            let component = Component::new(
                state.options.default_component_name.clone(),
                ComponentKind::Capability,
                position,
            );
            vec![AppCommand::AddComponent { component }]
        }
        EditorTool::Annotation => {
            let annotation = Annotation::note(
                state.options.default_annotation_text.clone(),
                CanvasPoint::new(canvas_pos.x as f64, canvas_pos.y as f64),
            );
            vec![AppCommand::AddAnnotation { annotation }]
        }
        EditorTool::Select | EditorTool::Connection => vec![AppCommand::DeselectAll],
    }
}

/// Klick auf eine Komponente.
///
/// Connection-Tool: erster Klick startet die Geste, zweiter Klick auf eine andere
/// Komponente legt eine Dependency an. Klick auf die Quelle selbst bricht ab.
/// Sonst: Einzelauswahl bzw. Shift-Toggle in der Mehrfachauswahl.
fn component_click(state: &AppState, id: String, shift: bool) -> Vec<AppCommand> {
    if state.editor.active_tool == EditorTool::Connection {
        return match state.editor.connection_drawing.active_source() {
            None => vec![AppCommand::StartConnectionDrawing { source_id: id }],
            Some(source) if source == id => vec![AppCommand::CancelConnectionDrawing],
            Some(source) => vec![
                AppCommand::AddConnection {
                    connection: Connection::dependency(source, id),
                },
                AppCommand::CancelConnectionDrawing,
            ],
        };
    }

    if shift {
        vec![AppCommand::SelectComponents {
            ids: state.selection.toggled_component_ids(&id),
        }]
    } else {
        vec![AppCommand::SelectComponent { id }]
    }
}

fn non_empty(text: String) -> Option<String> {
    if text.trim().is_empty() {
        None
    } else {
        Some(text)
    }
}
