//! Cell and object walkers over realistic view configurations.

use bunsen_tree::cell::{Cell, traverse_bottom_up, traverse_top_down};
use bunsen_tree::object::traverse_object;
use bunsen_tree::test_utils::{ViewFixture, init_test_logging};
use serde_json::json;
use std::collections::HashSet;
use std::ptr;

/// Three levels: object group, array of objects, tuple inside the item template.
fn nested_view() -> Cell {
    Cell::anonymous().with_children(vec![
        Cell::new("name"),
        Cell::new("orders").with_item_cell(Cell::anonymous().with_children(vec![
            Cell::new("orders.[].sku"),
            Cell::new("orders.[].range").with_tuple_cells(vec![
                Cell::new("orders.[].range.0"),
                Cell::new("orders.[].range.1"),
            ]),
        ])),
    ])
}

#[test]
fn top_down_visits_every_cell_exactly_once() {
    init_test_logging(None);
    let view = nested_view();

    let mut seen: Vec<*const Cell> = Vec::new();
    traverse_top_down(&view, |cell| seen.push(ptr::from_ref(cell)));

    let unique: HashSet<_> = seen.iter().collect();
    assert_eq!(seen.len(), 8);
    assert_eq!(unique.len(), 8);
}

#[test]
fn bottom_up_visits_every_cell_exactly_once() {
    let view = nested_view();

    let mut seen: Vec<*const Cell> = Vec::new();
    traverse_bottom_up(&view, |cell| seen.push(ptr::from_ref(cell)));

    let unique: HashSet<_> = seen.iter().collect();
    assert_eq!(seen.len(), 8);
    assert_eq!(unique.len(), 8);
}

#[test]
fn top_down_visits_parents_before_children() {
    let view = nested_view();
    let mut order = Vec::new();
    traverse_top_down(&view, |cell| order.push(cell.display_name()));

    let position = |name: &str| order.iter().position(|n| *n == name).unwrap();
    assert_eq!(position("<anonymous>"), 0);
    assert!(position("orders") < position("orders.[].range"));
    assert!(position("orders.[].range") < position("orders.[].range.0"));
}

#[test]
fn bottom_up_visits_children_before_parents() {
    let view = Cell::new("root").with_children(vec![Cell::new("childA"), Cell::new("childB")]);

    let mut order = Vec::new();
    traverse_bottom_up(&view, |cell| order.push(cell.display_name()));
    assert_eq!(order.last(), Some(&"root"));
    assert!(order.contains(&"childA"));
    assert!(order.contains(&"childB"));
}

#[test]
fn bottom_up_deepest_level_first() {
    let view = nested_view();
    let mut order = Vec::new();
    traverse_bottom_up(&view, |cell| order.push(cell.display_name()));

    assert_eq!(
        order,
        [
            "orders.[].range.1",
            "orders.[].range.0",
            "orders.[].range",
            "orders.[].sku",
            "<anonymous>",
            "orders",
            "name",
            "<anonymous>",
        ]
    );
}

#[test]
fn fixture_views_walk_completely() {
    let basic = ViewFixture::basic().cell().unwrap();
    assert_eq!(basic.count(), 6);

    let tuple = ViewFixture::tuple().cell().unwrap();
    let mut count = 0;
    traverse_bottom_up(&tuple, |_| count += 1);
    assert_eq!(count, 3);
}

#[test]
fn object_walker_reaches_cell_options() {
    let view = ViewFixture::basic().cell().unwrap();
    let email = &view.children()[2].children()[0];
    let renderer = email.extra.get("renderer").unwrap();

    let mut count = 0;
    traverse_object(renderer, |_| count += 1);
    assert_eq!(count, 2); // the renderer object and its name
}

#[test]
fn object_walker_counts_nested_values() {
    let value = json!({
        "a": { "b": { "c": 1 } },
        "d": [ { "e": null }, 2 ]
    });

    // root, a, b, c, d, d[0], e, d[1]
    let mut count = 0;
    traverse_object(&value, |_| count += 1);
    assert_eq!(count, 8);
}
