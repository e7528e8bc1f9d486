//! Tests for schema-driven child ordering

use crate::node::SrsNode;
use crate::node::ordering::ordering_rule;

fn parse(text: &str) -> SrsNode {
    let mut node = SrsNode::default();
    node.import_from_wkt(text).unwrap();
    node
}

#[test]
fn test_rules_exist_for_known_parents() {
    assert!(ordering_rule("projcs").is_some());
    assert!(ordering_rule("GEOGCS").is_some());
    assert!(ordering_rule("DATUM").is_some());
    assert!(ordering_rule("GEOCCS").is_some());
    assert!(ordering_rule("VERT_CS").is_none());
}

#[test]
fn test_geogcs_children_sorted() {
    let mut node = parse("GEOGCS[\"x\",AUTHORITY[\"EPSG\",\"4326\"],UNIT[\"degree\",0.0174532925199433],DATUM[\"d\",SPHEROID[\"s\",1,2]],PRIMEM[\"Greenwich\",0]]");
    node.fixup_ordering();
    let order: Vec<&str> = node.children().iter().map(|c| c.value()).collect();
    assert_eq!(order, vec!["x", "DATUM", "PRIMEM", "UNIT", "AUTHORITY"]);
}

#[test]
fn test_nested_datum_sorted_post_order() {
    let mut node = parse("PROJCS[\"p\",UNIT[\"m\",1],GEOGCS[\"g\",DATUM[\"d\",AUTHORITY[\"EPSG\",\"1\"],TOWGS84[0,0,0,0,0,0,0],SPHEROID[\"s\",1,2]],PRIMEM[\"pm\",0]],PROJECTION[\"Mercator_1SP\"]]");
    node.fixup_ordering();
    assert_eq!(
        node.export_to_wkt(),
        "PROJCS[\"p\",GEOGCS[\"g\",DATUM[\"d\",SPHEROID[\"s\",1,2],TOWGS84[0,0,0,0,0,0,0],AUTHORITY[\"EPSG\",\"1\"]],PRIMEM[\"pm\",0]],PROJECTION[\"Mercator_1SP\"],UNIT[\"m\",1]]"
    );
}

#[test]
fn test_unknown_children_block_swaps() {
    let mut node = parse("GEOGCS[\"x\",UNIT[\"u\",1],EXTENSION[\"a\",\"b\"],DATUM[\"d\",SPHEROID[\"s\",1,2]]]");
    node.fixup_ordering();
    let order: Vec<&str> = node.children().iter().map(|c| c.value()).collect();
    assert_eq!(order, vec!["x", "UNIT", "EXTENSION", "DATUM"]);
}

#[test]
fn test_two_children_untouched() {
    let mut node = parse("GEOGCS[UNIT[\"u\",1],DATUM[\"d\",SPHEROID[\"s\",1,2]]]");
    let before = node.clone();
    node.fixup_ordering();
    assert_eq!(node, before);
}

#[test]
fn test_ordering_is_idempotent() {
    let inputs = [
        "PROJCS[\"p\",AUTHORITY[\"EPSG\",\"2\"],PARAMETER[\"a\",1],UNIT[\"m\",1],PROJECTION[\"TM\"],GEOGCS[\"g\",UNIT[\"d\",1],DATUM[\"d\",SPHEROID[\"s\",1,2]]]]",
        "GEOGCS[\"x\",UNIT[\"u\",1],EXTENSION[\"a\",\"b\"],AUTHORITY[\"EPSG\",\"1\"],DATUM[\"d\",SPHEROID[\"s\",1,2]]]",
        "GEOCCS[\"c\",UNIT[\"m\",1],PRIMEM[\"pm\",0],DATUM[\"d\",SPHEROID[\"s\",1,2]]]",
    ];

    for input in inputs {
        let mut once = parse(input);
        once.fixup_ordering();
        let mut twice = once.clone();
        twice.fixup_ordering();
        assert_eq!(once, twice, "ordering not idempotent for {}", input);
    }
}
