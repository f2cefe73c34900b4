//! Ancestry checks between path identifiers.
//!
//! A view cell that depends on `foo.bar` must hear about a change to `foo`
//! (the whole object was replaced) and about a change to `foo.bar.baz` (a
//! nested value moved). Both directions reduce to the same question: is the
//! shorter path a prefix of the longer one, comparing segments with the
//! wildcard rule of [`segments_equal`](super::segments_equal)?

use tracing::trace;

use super::PathId;

/// Returns `true` when one identifier is an ancestor of, or equal to, the other.
///
/// The relation is symmetric: the shorter of the two normalized paths is
/// checked as a wildcard-aware prefix of the longer. A missing identifier on
/// either side yields `false`; no relation is assumed without input.
///
/// # Arguments
///
/// * `dependency_id` - the path a cell declared a dependency on
/// * `changed_id` - the path whose value changed; bare ids are rooted
///
/// # Examples
///
/// ```rust
/// use bunsen_tree::path::is_ancestor_or_equal;
///
/// assert!(is_ancestor_or_equal(Some("root.foo"), Some("foo.bar")));
/// assert!(is_ancestor_or_equal(Some("root.foo.bar"), Some("foo")));
/// assert!(is_ancestor_or_equal(Some("root.items.[].name"), Some("root.items.3.name")));
/// assert!(!is_ancestor_or_equal(Some("root.items.2.name"), Some("root.items.3.name")));
/// assert!(!is_ancestor_or_equal(None, Some("root.foo")));
/// ```
pub fn is_ancestor_or_equal(dependency_id: Option<&str>, changed_id: Option<&str>) -> bool {
    let (Some(dependency_id), Some(changed_id)) = (dependency_id, changed_id) else {
        return false;
    };

    let a = PathId::parse(dependency_id);
    let b = PathId::parse(changed_id);
    let related = paths_related(&a, &b);

    trace!("ancestry {} <-> {}: {}", a, b, related);
    related
}

/// [`is_ancestor_or_equal`] over already-normalized paths.
pub fn paths_related(a: &PathId, b: &PathId) -> bool {
    if a == b {
        return true;
    }

    let (shorter, longer) = if a.len() > b.len() {
        (b, a)
    } else {
        (a, b)
    };

    shorter.is_prefix_of(longer)
}
