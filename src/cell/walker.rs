//! Iterative traversals over a cell tree.
//!
//! Both walkers use an explicit work list instead of recursion so deeply
//! nested or array-heavy views cannot exhaust the call stack. Visitors get a
//! shared borrow of each cell; the tree cannot change while it is walked.
//!
//! Nested cells are discovered in a fixed order per node: `children` first,
//! then `arrayOptions.itemCell`, then each of `arrayOptions.tupleCells`.
//!
//! The cell tree must be acyclic, which owned [`Cell`] values always are.

use std::collections::VecDeque;

use tracing::trace;

use super::Cell;

/// Pushes every nested cell of `node` onto `out` in discovery order.
fn push_nested<'a>(node: &'a Cell, mut out: impl FnMut(&'a Cell)) {
    for child in node.children() {
        out(child);
    }
    if let Some(item) = node.item_cell() {
        out(item);
    }
    for tuple in node.tuple_cells() {
        out(tuple);
    }
}

/// Pre-order depth-first traversal: each cell is visited before its nested cells.
///
/// Nested cells are pushed onto a LIFO stack in discovery order, so among
/// siblings the last declared is visited first (tuple cells before the item
/// cell, before children in reverse order). Every reachable cell is visited
/// exactly once.
///
/// # Examples
///
/// ```rust
/// use bunsen_tree::cell::{Cell, traverse_top_down};
///
/// let root = Cell::new("root").with_children(vec![Cell::new("a"), Cell::new("b")]);
///
/// let mut seen = Vec::new();
/// traverse_top_down(&root, |cell| seen.push(cell.display_name()));
/// assert_eq!(seen, ["root", "b", "a"]);
/// ```
pub fn traverse_top_down<'a, F>(root: &'a Cell, mut visit: F)
where
    F: FnMut(&'a Cell),
{
    let mut stack = vec![root];
    let mut visited = 0usize;

    while let Some(node) = stack.pop() {
        visit(node);
        visited += 1;
        push_nested(node, |nested| stack.push(nested));
    }

    trace!("top-down traversal visited {} cells", visited);
}

/// Reversed breadth-first traversal: nested cells are visited before the cell holding them.
///
/// The tree is first enumerated level by level with a queue, recording each
/// cell on an auxiliary stack; the stack is then drained, so the deepest
/// level comes first and the root is visited last. Within a level the order
/// is the reverse of discovery order. Each cell, item templates included, is
/// visited exactly once.
///
/// # Examples
///
/// ```rust
/// use bunsen_tree::cell::{Cell, traverse_bottom_up};
///
/// let root = Cell::new("root").with_children(vec![Cell::new("a"), Cell::new("b")]);
///
/// let mut seen = Vec::new();
/// traverse_bottom_up(&root, |cell| seen.push(cell.display_name()));
/// assert_eq!(seen, ["b", "a", "root"]);
/// ```
pub fn traverse_bottom_up<'a, F>(root: &'a Cell, mut visit: F)
where
    F: FnMut(&'a Cell),
{
    let mut queue = VecDeque::from([root]);
    let mut stack = Vec::new();

    while let Some(node) = queue.pop_front() {
        stack.push(node);
        push_nested(node, |nested| queue.push_back(nested));
    }

    trace!("bottom-up traversal collected {} cells", stack.len());

    while let Some(node) = stack.pop() {
        visit(node);
    }
}
