#![no_main]

use libfuzzer_sys::fuzz_target;
use wardley_map_editor::{parse_mapscript, write_mapscript};

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data) {
        let doc = parse_mapscript(text).into_map_document();
        // Geschriebener Text muss erneut ohne Panik parsebar sein
        let written = write_mapscript(&doc);
        let _ = parse_mapscript(&written);
    }
});
