//! Application Controller für zentrale Event-Verarbeitung.

use super::render_scene;
use super::use_cases::{clipboard, document, editing, file_io, history, selection, view};
use super::{AppCommand, AppIntent, AppState};
use crate::core::MapDocument;
use crate::shared::RenderScene;

/// Orchestriert UI-Events und Use-Cases auf den AppState.
#[derive(Debug, Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = self.map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    fn map_intent_to_commands(&self, state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
        super::intent_mapping::map_intent_to_commands(state, intent)
    }

    /// Führt mutierende Commands auf dem AppState aus.
    ///
    /// Jeder Command wird geloggt und erhöht `state.revision`, auch wenn er
    /// fehlschlägt oder ein No-op ist.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(&command);
        state.revision += 1;

        match command {
            // === Komponenten ===
            AppCommand::AddComponent { component } => editing::add_component(state, component),
            AppCommand::UpdateComponent { id, update } => {
                editing::update_component(state, &id, update)
            }
            AppCommand::DeleteComponent { id } => editing::delete_component(state, &id),

            // === Verbindungen ===
            AppCommand::AddConnection { connection } => {
                editing::add_connection(state, connection)
            }
            AppCommand::UpdateConnection { id, update } => {
                editing::update_connection(state, &id, update)
            }
            AppCommand::DeleteConnection { id } => editing::delete_connection(state, &id),

            // === Annotationen ===
            AppCommand::AddAnnotation { annotation } => {
                editing::add_annotation(state, annotation)
            }
            AppCommand::UpdateAnnotation { id, update } => {
                editing::update_annotation(state, &id, update)
            }
            AppCommand::DeleteAnnotation { id } => editing::delete_annotation(state, &id),

            // === Metadaten ===
            AppCommand::SetTitle { title } => editing::set_title(state, title),
            AppCommand::SetPurpose { purpose } => editing::set_purpose(state, purpose),
            AppCommand::SetScope { scope } => editing::set_scope(state, scope),

            // === Selektion ===
            AppCommand::SelectComponent { id } => selection::select_component(state, id),
            AppCommand::SelectComponents { ids } => selection::select_components(state, ids),
            AppCommand::SelectConnection { id } => selection::select_connection(state, id),
            AppCommand::DeselectAll => selection::deselect_all(state),

            // === Zwischenablage ===
            AppCommand::CopySelectedComponents => clipboard::copy_selected_components(state),
            AppCommand::PasteComponents => clipboard::paste_components(state),
            AppCommand::DeleteSelectedComponents => clipboard::delete_selected_components(state),

            // === Verbindungs-Geste ===
            AppCommand::StartConnectionDrawing { source_id } => {
                selection::start_connection_drawing(state, source_id)
            }
            AppCommand::CancelConnectionDrawing => selection::cancel_connection_drawing(state),

            // === History ===
            AppCommand::Undo => history::undo(state),
            AppCommand::Redo => history::redo(state),

            // === Dokument ===
            AppCommand::LoadMap { document } => document::load_map(state, document),
            AppCommand::ResetMap => document::reset_map(state),

            // === Datei-I/O ===
            AppCommand::LoadJsonFile { path } => file_io::load_json_file(state, &path)?,
            AppCommand::SaveJsonFile { path } => file_io::save_json_file(state, path)?,
            AppCommand::LoadMapScriptFile { path } => file_io::load_mapscript_file(state, &path)?,
            AppCommand::SaveMapScriptFile { path } => file_io::save_mapscript_file(state, path)?,

            // === View ===
            AppCommand::SetZoom { zoom } => view::set_zoom(state, zoom),
            AppCommand::ZoomAt { zoom_in, pointer } => view::zoom_at(state, zoom_in, pointer),
            AppCommand::SetPan { pan } => view::set_pan(state, pan),
            AppCommand::ToggleGrid => view::toggle_grid(state),
            AppCommand::SetEditorTool { tool } => view::set_editor_tool(state, tool),
            AppCommand::SetCanvasSize { size } => view::set_canvas_size(state, size),

            // === Optionen ===
            AppCommand::ApplyOptions { options } => view::apply_options(state, *options),
        }

        Ok(())
    }

    /// Liefert den aktuellen Stand als Dokument (lesend, kein Command).
    pub fn export_map(&self, state: &AppState) -> MapDocument {
        document::export_map(state)
    }

    /// Baut die Render-Szene aus dem aktuellen AppState.
    pub fn build_render_scene(&self, state: &AppState) -> RenderScene {
        render_scene::build(state)
    }
}
