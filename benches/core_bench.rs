use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;
use wardley_map_editor::{
    parse_map_json, parse_mapscript, write_map_json, write_mapscript, AppCommand, AppController,
    AppState, Component, ComponentKind, Connection, MapDocument, Position,
};

fn bench_mapscript_parsing(c: &mut Criterion) {
    let text = include_str!("../tests/fixtures/simple_map.owm");

    c.bench_function("mapscript_parse_simple_map", |b| {
        b.iter(|| {
            let parsed = parse_mapscript(black_box(text));
            black_box(parsed.components.len())
        })
    });
}

fn build_synthetic_document(component_count: usize) -> MapDocument {
    let components: Vec<Component> = (0..component_count)
        .map(|i| {
            let v = (i % 100) as f64 / 100.0;
            let e = ((i * 7) % 100) as f64 / 100.0;
            Component::new(format!("K{i}"), ComponentKind::Capability, Position::new(v, e))
        })
        .collect();
    let connections = components
        .windows(2)
        .map(|pair| Connection::dependency(&pair[0].id, &pair[1].id))
        .collect();

    MapDocument {
        components,
        connections,
        ..Default::default()
    }
}

fn bench_codecs(c: &mut Criterion) {
    let mut group = c.benchmark_group("codecs");

    for &count in &[100usize, 1_000usize] {
        let doc = build_synthetic_document(count);
        let json = write_map_json(&doc).expect("JSON schreiben");
        let script = write_mapscript(&doc);

        group.bench_with_input(BenchmarkId::new("json_write", count), &doc, |b, doc| {
            b.iter(|| black_box(write_map_json(doc).map(|s| s.len())))
        });
        group.bench_with_input(BenchmarkId::new("json_parse", count), &json, |b, json| {
            b.iter(|| black_box(parse_map_json(json).map(|d| d.components.len())))
        });
        group.bench_with_input(
            BenchmarkId::new("mapscript_roundtrip", count),
            &script,
            |b, script| {
                b.iter(|| {
                    let doc = parse_mapscript(black_box(script)).into_map_document();
                    black_box(write_mapscript(&doc).len())
                })
            },
        );
    }

    group.finish();
}

fn bench_edit_history(c: &mut Criterion) {
    let mut group = c.benchmark_group("edit_history");

    for &count in &[100usize, 1_000usize] {
        let doc = build_synthetic_document(count);

        group.bench_with_input(
            BenchmarkId::new("delete_then_undo", count),
            &doc,
            |b, doc| {
                let mut controller = AppController::new();
                let mut state = AppState::new();
                let _ = controller.handle_command(
                    &mut state,
                    AppCommand::LoadMap {
                        document: doc.clone(),
                    },
                );
                let id = doc.components[count / 2].id.clone();
                b.iter(|| {
                    let _ = controller
                        .handle_command(&mut state, AppCommand::DeleteComponent { id: id.clone() });
                    let _ = controller.handle_command(&mut state, AppCommand::Undo);
                    black_box(state.component_count())
                })
            },
        );
    }

    group.finish();
}

criterion_group!(
    core_benches,
    bench_mapscript_parsing,
    bench_codecs,
    bench_edit_history
);
criterion_main!(core_benches);
