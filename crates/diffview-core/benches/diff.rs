//! Benchmarks for diff construction and rendering over synthetic nested
//! documents.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use serde_json::{json, Value};

use diffview_core::{diff, render_changes_only, render_full, RenderConfig};

/// Build a nested document: `width` fields per level, recursing every third
/// field down to `depth`. `marker` perturbs numeric leaves so two documents
/// built with different markers differ throughout.
fn synthetic(width: usize, depth: usize, marker: i64) -> Value {
    if depth == 0 {
        return json!(marker);
    }
    let mut map = serde_json::Map::new();
    for i in 0..width {
        let child = match i % 3 {
            0 => synthetic(width, depth - 1, marker),
            1 => json!(format!("value-{i}")),
            _ => json!(i as i64 + marker),
        };
        map.insert(format!("field_{i}"), child);
    }
    Value::Object(map)
}

fn bench_diff(c: &mut Criterion) {
    let left = synthetic(8, 4, 1);
    let right = synthetic(8, 4, 1000);

    c.bench_function("diff/nested_8x4", |b| {
        b.iter(|| diff(black_box(&left), black_box(&right)).unwrap())
    });

    let tree = diff(&left, &right).unwrap();
    let config = RenderConfig::default();

    c.bench_function("render_full/nested_8x4", |b| {
        b.iter(|| render_full(black_box(&tree), &config))
    });

    c.bench_function("render_changes_only/nested_8x4", |b| {
        b.iter(|| render_changes_only(black_box(&tree), &config))
    });
}

criterion_group!(benches, bench_diff);
criterion_main!(benches);
