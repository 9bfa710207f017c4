use std::cmp::Ordering;

use referent::construct::{Model, Resource, Value};
use referent::reference::{
    compute_references, compute_references_from, root_resources, LabelOrProperties,
};
use referent::vocab::rdfs;

#[test]
fn cycle_terminates_and_reports_both_directions() {
    let mut model = Model::new();
    let points_to = model.locate_resource("http://example.org/pointsTo");
    let a = model.locate_resource("http://example.org/a");
    let b = model.locate_resource("http://example.org/b");
    model.add_property(a, points_to, Value::Resource(b)).unwrap();
    model.add_property(b, points_to, Value::Resource(a)).unwrap();
    let references = compute_references(&model);
    assert_eq!(references[&b].len(), 1);
    assert!(references[&b].contains(&a));
    assert_eq!(references[&a].len(), 1);
    assert!(references[&a].contains(&b));
}

#[test]
fn diamond_aggregates_every_referrer() {
    let mut model = Model::new();
    let points_to = model.locate_resource("http://example.org/pointsTo");
    let a = model.locate_resource("http://example.org/a");
    let b = model.locate_resource("http://example.org/b");
    let c = model.locate_resource("http://example.org/c");
    model.add_property(a, points_to, Value::Resource(c)).unwrap();
    model.add_property(b, points_to, Value::Resource(c)).unwrap();
    let references = compute_references(&model);
    assert_eq!(references[&c].len(), 2);
    assert!(references[&c].contains(&a));
    assert!(references[&c].contains(&b));
    // nothing points at a or b
    assert!(!references.contains_key(&a));
    assert!(!references.contains_key(&b));
}

#[test]
fn repeated_edges_are_reported_once() {
    let mut model = Model::new();
    let points_to = model.locate_resource("http://example.org/pointsTo");
    let a = model.locate_resource("http://example.org/a");
    let b = model.locate_resource("http://example.org/b");
    model.add_property(a, points_to, Value::Resource(b)).unwrap();
    model.add_property(a, points_to, Value::Resource(b)).unwrap();
    let references = compute_references(&model);
    assert_eq!(references[&b].len(), 1);
}

#[test]
fn single_root_stays_within_reach() {
    let mut model = Model::new();
    let points_to = model.locate_resource("http://example.org/pointsTo");
    let a = model.locate_resource("http://example.org/a");
    let b = model.locate_resource("http://example.org/b");
    let c = model.locate_resource("http://example.org/c");
    let d = model.locate_resource("http://example.org/d");
    model.add_property(a, points_to, Value::Resource(b)).unwrap();
    model.add_property(b, points_to, Value::Resource(c)).unwrap();
    model.add_property(d, points_to, Value::Resource(a)).unwrap();
    let references = compute_references_from(&model, a);
    assert!(references[&b].contains(&a));
    assert!(references[&c].contains(&b));
    // d is not reachable from a, so its edge is never discovered
    assert!(!references.contains_key(&a));
}

#[test]
fn root_classification() {
    let mut model = Model::new();
    let property = model.locate_resource("http://example.org/p");
    let label = model.locate_resource(rdfs::LABEL);

    let named = model.locate_resource("http://example.org/named");
    model.add_property(named, property, Value::plain("x")).unwrap();

    let busy_blank = model.create_resource(None);
    for i in 0..10 {
        model
            .add_property(busy_blank, property, Value::plain(format!("v{i}")))
            .unwrap();
    }

    let labeled_blank = model.create_resource(None);
    model
        .add_property(labeled_blank, label, Value::plain("hello"))
        .unwrap();

    let bare_named = model.locate_resource("http://example.org/bare");

    let roots = root_resources(&model, &LabelOrProperties, None);
    assert!(roots.contains(&named));
    assert!(roots.contains(&labeled_blank));
    assert!(!roots.contains(&busy_blank));
    assert!(!roots.contains(&bare_named));
}

#[test]
fn comparator_orders_for_display() {
    let mut model = Model::new();
    let property = model.locate_resource("http://example.org/p");
    for uri in ["http://example.org/c", "http://example.org/a", "http://example.org/b"] {
        let id = model.locate_resource(uri);
        model.add_property(id, property, Value::plain("x")).unwrap();
    }
    let by_uri = |a: &Resource, b: &Resource| -> Ordering { a.uri().cmp(&b.uri()) };
    let roots = root_resources(&model, &LabelOrProperties, Some(&by_uri));
    let uris: Vec<_> = roots
        .iter()
        .map(|id| model.resource(*id).unwrap().uri().unwrap().to_owned())
        .collect();
    assert_eq!(
        uris,
        vec![
            "http://example.org/a",
            "http://example.org/b",
            "http://example.org/c"
        ]
    );
}
