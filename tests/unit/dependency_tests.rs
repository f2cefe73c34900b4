//! Dependency index built from fixture views.

use bunsen_tree::cell::Cell;
use bunsen_tree::dependency::{DependencySet, reevaluation_order};
use bunsen_tree::test_utils::{ViewFixture, init_test_logging};

fn sorted(paths: Vec<&bunsen_tree::path::PathId>) -> Vec<String> {
    let mut out: Vec<String> = paths.into_iter().map(ToString::to_string).collect();
    out.sort();
    out
}

#[test]
fn registers_every_model_in_the_view() {
    init_test_logging(None);
    let view = ViewFixture::addresses().cell().unwrap();
    let deps = DependencySet::from_cell(&view);

    assert_eq!(deps.len(), 4);
    for id in ["name", "addresses", "addresses.[].street", "root.addresses.[].city"] {
        assert!(deps.contains(id), "missing {id}");
    }
}

#[test]
fn element_change_reaches_wildcard_dependents() {
    let view = ViewFixture::addresses().cell().unwrap();
    let deps = DependencySet::from_cell(&view);

    assert_eq!(
        sorted(deps.affected_by("addresses.0.street")),
        ["root.addresses", "root.addresses.[].street"]
    );
}

#[test]
fn replacing_the_array_reaches_every_template() {
    let view = ViewFixture::addresses().cell().unwrap();
    let deps = DependencySet::from_cell(&view);

    assert_eq!(
        sorted(deps.affected_by("addresses")),
        ["root.addresses", "root.addresses.[].city", "root.addresses.[].street"]
    );
}

#[test]
fn batch_of_siblings_collapses_to_parent() {
    let view = ViewFixture::basic().cell().unwrap();
    let deps = DependencySet::from_cell(&view);

    assert_eq!(
        sorted(deps.affected_by_batch(&["contact.email", "contact.phone"])),
        ["root.contact", "root.contact.email", "root.contact.phone"]
    );
}

#[test]
fn tuple_positions_are_independent() {
    let view = ViewFixture::tuple().cell().unwrap();
    let deps = DependencySet::from_cell(&view);

    assert_eq!(sorted(deps.affected_by("location.0")), ["root.location", "root.location.0"]);
}

#[test]
fn reevaluation_order_skips_unrelated_and_anonymous_cells() {
    let view = ViewFixture::addresses().cell().unwrap();
    let order: Vec<&str> =
        reevaluation_order(&view, "addresses.3.city").into_iter().map(Cell::display_name).collect();
    assert_eq!(order, ["addresses.[].city", "addresses"]);
}
