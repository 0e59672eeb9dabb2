#![no_main]

use libfuzzer_sys::fuzz_target;
use wardley_map_editor::{parse_map_json, write_map_json, AppCommand, AppController, AppState};

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(document) = parse_map_json(text) else {
        return;
    };
    let _ = write_map_json(&document);

    let mut controller = AppController::new();
    let mut state = AppState::new();
    let ids: Vec<String> = document.components.iter().map(|c| c.id.clone()).collect();
    let _ = controller.handle_command(&mut state, AppCommand::LoadMap { document });
    for id in ids {
        let _ = controller.handle_command(&mut state, AppCommand::DeleteComponent { id });
    }
    let _ = controller.handle_command(&mut state, AppCommand::Undo);
});
