//! Common-ancestor reduction over a batch of path identifiers.
//!
//! When several fields change at once, the change controller re-evaluates a
//! single subtree rooted at their longest shared prefix instead of one
//! subtree per field. Segments are compared exactly here; wildcard matching
//! does not apply.

use tracing::trace;

use crate::constants::SEGMENT_SEPARATOR;

/// Computes the longest shared segment prefix of `ids`.
///
/// Scanning stops at the first position where any id disagrees with the
/// first one; later positions are never considered even if they happen to
/// match again. Ids are split as given (no rooting).
///
/// # Returns
///
/// - `None` for an empty batch (nothing has an ancestor)
/// - `Some("")` when the ids already differ at the first segment
/// - `Some(prefix)` otherwise, segments joined with `.`
///
/// # Examples
///
/// ```rust
/// use bunsen_tree::path::common_ancestor;
///
/// assert_eq!(common_ancestor(&["root.foo.a", "root.foo.b"]), Some("root.foo".to_string()));
/// assert_eq!(common_ancestor(&["root.foo", "bar.baz"]), Some(String::new()));
/// assert_eq!(common_ancestor::<&str>(&[]), None);
/// ```
pub fn common_ancestor<S: AsRef<str>>(ids: &[S]) -> Option<String> {
    let paths: Vec<Vec<&str>> =
        ids.iter().map(|id| id.as_ref().split(SEGMENT_SEPARATOR).collect()).collect();

    let first = paths.first()?;
    let min_length = paths.iter().map(Vec::len).min().unwrap_or(0);

    let mut prefix = Vec::with_capacity(min_length);
    for (i, sample) in first.iter().take(min_length).enumerate() {
        if paths.iter().all(|path| path[i] == *sample) {
            prefix.push(*sample);
        } else {
            break;
        }
    }

    let ancestor = prefix.join(&SEGMENT_SEPARATOR.to_string());
    trace!("common ancestor of {} ids: '{}'", ids.len(), ancestor);
    Some(ancestor)
}
