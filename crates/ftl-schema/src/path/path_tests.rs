#![allow(non_snake_case)]

use super::*;

#[test]
fn SchemaPath___root___displays_placeholder() {
    assert_eq!(SchemaPath::root().to_string(), "<schema>");
}

#[test]
fn SchemaPath___join___builds_readable_location() {
    let path = SchemaPath::module("payments")
        .join(PathSegment::Verb("charge".into()))
        .join(PathSegment::Request);

    let display = path.to_string();

    assert_eq!(display, "module payments / verb charge / request");
}

#[test]
fn SchemaPath___join___does_not_mutate_parent() {
    let parent = SchemaPath::module("orders");

    let child = parent.join(PathSegment::Data("Order".into()));

    assert_eq!(parent.segments().len(), 1);
    assert_eq!(child.segments().len(), 2);
}

#[test]
fn SchemaPath___nested_containers___display_in_order() {
    let path = SchemaPath::module("m")
        .join(PathSegment::Data("D".into()))
        .join(PathSegment::Field("f".into()))
        .join(PathSegment::MapValue)
        .join(PathSegment::ArrayElement);

    assert_eq!(
        path.to_string(),
        "module m / data D / field f / map value / array element"
    );
}

#[test]
fn SchemaPath___is_root___only_when_empty() {
    assert!(SchemaPath::root().is_root());
    assert!(!SchemaPath::module("m").is_root());
}
