//! Laws of the ancestry relation and the common-ancestor reduction.

use bunsen_tree::path::{PathId, common_ancestor, is_ancestor_or_equal, segments_equal};

const SAMPLE_IDS: &[&str] = &[
    "root",
    "root.foo",
    "root.foo.bar",
    "root.items.0",
    "root.items.[].name",
    "root.items.12.tags.[]",
    "root.category[]",
    "root.a1b2.c",
];

#[test]
fn ancestry_is_reflexive() {
    for &id in SAMPLE_IDS {
        assert!(is_ancestor_or_equal(Some(id), Some(id)), "{id} should relate to itself");
    }
}

#[test]
fn ancestry_holds_in_both_directions_for_extensions() {
    for &id in SAMPLE_IDS {
        for suffix in ["x", "x.y", "0.z", "[].w"] {
            let longer = format!("{id}.{suffix}");
            assert!(is_ancestor_or_equal(Some(id), Some(longer.as_str())), "{id} -> {longer}");
            assert!(is_ancestor_or_equal(Some(longer.as_str()), Some(id)), "{longer} -> {id}");
        }
    }
}

#[test]
fn wildcard_matches_indices_but_indices_do_not_match_each_other() {
    assert!(is_ancestor_or_equal(Some("root.items.[].name"), Some("root.items.3.name")));
    assert!(!is_ancestor_or_equal(Some("root.items.2.name"), Some("root.items.3.name")));
}

#[test]
fn missing_inputs_are_unrelated() {
    assert!(!is_ancestor_or_equal(None, Some("root.foo")));
    assert!(!is_ancestor_or_equal(Some("root.foo"), None));
}

#[test]
fn bare_changed_ids_are_rooted() {
    assert!(is_ancestor_or_equal(Some("root.foo.bar"), Some("foo")));
    assert_eq!(PathId::parse("foo").to_string(), "root.foo");
}

#[test]
fn wildcard_substitution_is_textual() {
    // "category[]" has no digits, so it only equals itself
    assert!(segments_equal("category[]", "category[]"));
    assert!(!segments_equal("category[]", "[]"));
    assert!(!is_ancestor_or_equal(Some("root.category[].x"), Some("root.[].x")));
}

#[test]
fn common_ancestor_examples() {
    assert_eq!(common_ancestor(&["root.foo.a", "root.foo.b"]).as_deref(), Some("root.foo"));
    assert_eq!(common_ancestor(&["root.foo", "bar.baz"]).as_deref(), Some(""));
    assert_eq!(common_ancestor(&["root.a.b.c"]).as_deref(), Some("root.a.b.c"));
    assert_eq!(common_ancestor::<&str>(&[]), None);
}

#[test]
fn common_ancestor_is_an_ancestor_of_every_input() {
    let ids = ["root.form.items.1.name", "root.form.items.1.tags.0", "root.form.items.1"];
    let ancestor = common_ancestor(&ids).unwrap();
    assert_eq!(ancestor, "root.form.items.1");
    for id in ids {
        assert!(PathId::parse(&ancestor).is_prefix_of(&PathId::parse(id)));
    }
}
