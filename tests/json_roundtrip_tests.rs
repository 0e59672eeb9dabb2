//! JSON-Import/Export: verlustfreier Roundtrip und Fehlerverhalten.

use wardley_map_editor::{parse_map_json, write_map_json};
use wardley_map_editor::{AppCommand, AppController, AppIntent, AppState, ConnectionKind};

const FIXTURE: &str = include_str!("fixtures/simple_map.json");

#[test]
fn test_fixture_loads_all_fields() {
    let doc = parse_map_json(FIXTURE).expect("Fixture gültig");

    assert_eq!(doc.map.id, "map-1");
    assert_eq!(doc.map.scope, None);
    assert_eq!(doc.components.len(), 3);
    assert_eq!(doc.components[2].inertia, Some(0.4));
    assert_eq!(doc.connections[1].kind, ConnectionKind::Flow);
    assert_eq!(doc.connections[1].label.as_deref(), Some("heiß"));
    assert_eq!(doc.annotations[0].content, "Kessel bald austauschen");
}

#[test]
fn test_export_then_import_reproduces_equal_arrays() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    let doc = parse_map_json(FIXTURE).expect("Fixture gültig");
    controller
        .handle_intent(&mut state, AppIntent::ImportRequested { document: doc })
        .expect("ImportRequested");

    let exported = controller.export_map(&state);
    let json = write_map_json(&exported).expect("schreiben");
    let reimported = parse_map_json(&json).expect("lesen");

    assert_eq!(reimported.components, exported.components);
    assert_eq!(reimported.connections, exported.connections);
    assert_eq!(reimported.annotations, exported.annotations);
    assert_eq!(write_map_json(&reimported).expect("schreiben"), json);
}

#[test]
fn test_import_does_not_touch_history() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    controller
        .handle_command(
            &mut state,
            AppCommand::LoadMap {
                document: parse_map_json(FIXTURE).expect("Fixture gültig"),
            },
        )
        .expect("LoadMap");

    assert!(!state.can_undo());
    assert_eq!(state.map.title, "Teeladen");
}

#[test]
fn test_save_and_reopen_json_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("map.json").to_string_lossy().into_owned();

    let mut controller = AppController::new();
    let mut state = AppState::new();
    controller
        .handle_command(
            &mut state,
            AppCommand::LoadMap {
                document: parse_map_json(FIXTURE).expect("Fixture gültig"),
            },
        )
        .expect("LoadMap");
    controller
        .handle_intent(
            &mut state,
            AppIntent::SaveJsonRequested {
                path: Some(path.clone()),
            },
        )
        .expect("SaveJsonRequested");
    let saved = controller.export_map(&state);

    let mut other = AppState::new();
    controller
        .handle_intent(&mut other, AppIntent::OpenJsonRequested { path })
        .expect("OpenJsonRequested");

    assert_eq!(controller.export_map(&other), saved);
}

#[test]
fn test_malformed_json_is_rejected_and_state_kept() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("kaputt.json");
    std::fs::write(&path, r#"{"connections": "keine Liste"}"#).expect("schreiben");

    let mut controller = AppController::new();
    let mut state = AppState::new();
    controller
        .handle_command(
            &mut state,
            AppCommand::LoadMap {
                document: parse_map_json(FIXTURE).expect("Fixture gültig"),
            },
        )
        .expect("LoadMap");
    let before = controller.export_map(&state);

    let result = controller.handle_intent(
        &mut state,
        AppIntent::OpenJsonRequested {
            path: path.to_string_lossy().into_owned(),
        },
    );

    assert!(result.is_err());
    assert_eq!(controller.export_map(&state), before);
}
