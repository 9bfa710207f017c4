use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};

use referent::construct::{Model, Value};
use referent::reference::compute_references;

// A chain of named resources with a back edge every so often, to exercise
// both the URI index and the visited set.
fn linked_model(n: u64) -> Model {
    let mut model = Model::new();
    let points_to = model.locate_resource("http://example.org/pointsTo");
    let mut previous = model.locate_resource("http://example.org/resource/0");
    for i in 1..n {
        let current = model.locate_resource(&format!("http://example.org/resource/{i}"));
        model
            .add_property(previous, points_to, Value::Resource(current))
            .unwrap();
        if i % 64 == 0 {
            model
                .add_property(current, points_to, Value::Resource(previous))
                .unwrap();
        }
        previous = current;
    }
    model
}

fn construction(c: &mut Criterion) {
    c.bench_function("construct_1k_linked_resources", |b| {
        b.iter(|| linked_model(black_box(1_000)))
    });
}

fn references(c: &mut Criterion) {
    let model = linked_model(10_000);
    c.bench_function("compute_references_10k", |b| {
        b.iter(|| compute_references(black_box(&model)))
    });
}

criterion_group!(benches, construction, references);
criterion_main!(benches);
