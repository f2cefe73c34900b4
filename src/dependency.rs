//! Dependency index built from a view's cell tree.
//!
//! When a view is compiled, every cell that names a `model` registers that
//! path in a [`DependencySet`]. On each value change the set answers which
//! registered paths must re-evaluate, using the symmetric ancestry rule of
//! [`paths_related`]: a cell on `foo.bar` cares about changes to `foo` and to
//! `foo.bar.baz`, and array indices match the `[]` wildcard.
//!
//! The set is built once per view configuration and is read-only afterwards;
//! rebuild it when the view changes.
//!
//! # Examples
//!
//! ```rust
//! use bunsen_tree::cell::Cell;
//! use bunsen_tree::dependency::DependencySet;
//!
//! let view = Cell::anonymous().with_children(vec![
//!     Cell::new("name"),
//!     Cell::new("addresses").with_item_cell(Cell::new("addresses.[].city")),
//! ]);
//!
//! let deps = DependencySet::from_cell(&view);
//! assert_eq!(deps.len(), 3);
//!
//! let affected: Vec<String> =
//!     deps.affected_by("addresses.2.city").iter().map(|p| p.to_string()).collect();
//! assert_eq!(affected, ["root.addresses", "root.addresses.[].city"]);
//! ```

use std::collections::HashSet;

use serde::Serialize;
use tracing::debug;

use crate::cell::{Cell, traverse_bottom_up, traverse_top_down};
use crate::path::ancestry::paths_related;
use crate::path::{PathId, common_ancestor};

/// Set of model paths registered by the cells of a view.
///
/// Paths are normalized and deduplicated; iteration follows the order in
/// which a top-down walk first registered them.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct DependencySet {
    paths: Vec<PathId>,
    #[serde(skip)]
    index: HashSet<PathId>,
}

impl DependencySet {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the set from every cell reachable from `root`.
    ///
    /// Cells without a `model` contribute nothing.
    pub fn from_cell(root: &Cell) -> Self {
        let mut set = Self::new();
        traverse_top_down(root, |cell| {
            if let Some(path) = cell.model_path() {
                set.insert(path);
            }
        });
        debug!("Registered {} dependency paths", set.len());
        set
    }

    /// Registers a path; returns `false` if it was already present.
    pub fn insert(&mut self, path: PathId) -> bool {
        if self.index.contains(&path) {
            return false;
        }
        self.index.insert(path.clone());
        self.paths.push(path);
        true
    }

    /// Whether `id` (normalized) is registered exactly.
    pub fn contains(&self, id: &str) -> bool {
        self.index.contains(&PathId::parse(id))
    }

    /// Number of registered paths.
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    /// Whether no path is registered.
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// Registered paths in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &PathId> {
        self.paths.iter()
    }

    /// Registered paths related to a change at `changed_id`.
    ///
    /// A path is affected when it is an ancestor of, a descendant of, or equal
    /// to the changed path under wildcard-aware comparison.
    pub fn affected_by(&self, changed_id: &str) -> Vec<&PathId> {
        let changed = PathId::parse(changed_id);
        let affected: Vec<&PathId> =
            self.paths.iter().filter(|path| paths_related(path, &changed)).collect();
        debug!("Change at {} affects {} of {} paths", changed, affected.len(), self.len());
        affected
    }

    /// Registered paths affected by a batch of simultaneous changes.
    ///
    /// The batch is reduced to the common ancestor of its normalized ids and
    /// that single path is used as the re-evaluation root. An empty batch
    /// affects nothing; a batch with no shared prefix affects every path.
    pub fn affected_by_batch<S: AsRef<str>>(&self, changed_ids: &[S]) -> Vec<&PathId> {
        match batch_root(changed_ids) {
            BatchRoot::Nothing => Vec::new(),
            BatchRoot::Everything => self.paths.iter().collect(),
            BatchRoot::Path(ancestor) => self.affected_by(&ancestor),
        }
    }
}

impl<'a> IntoIterator for &'a DependencySet {
    type Item = &'a PathId;
    type IntoIter = std::slice::Iter<'a, PathId>;

    fn into_iter(self) -> Self::IntoIter {
        self.paths.iter()
    }
}

/// Cells to recompute after a change, nested cells before their parents.
///
/// Walks `root` bottom-up and keeps every cell whose model is related to
/// `changed_id`. Cells without a model are skipped.
pub fn reevaluation_order<'a>(root: &'a Cell, changed_id: &str) -> Vec<&'a Cell> {
    let changed = PathId::parse(changed_id);
    let mut order = Vec::new();
    traverse_bottom_up(root, |cell| {
        if cell.model_path().is_some_and(|path| paths_related(&path, &changed)) {
            order.push(cell);
        }
    });
    debug!("{} cells to re-evaluate after change at {}", order.len(), changed);
    order
}

/// Cells to recompute after a batch of simultaneous changes.
///
/// Applies the same reduction as [`DependencySet::affected_by_batch`]: an
/// empty batch recomputes nothing, a batch with no shared prefix recomputes
/// every cell that has a model, nested cells first.
pub fn reevaluation_order_batch<'a, S: AsRef<str>>(
    root: &'a Cell,
    changed_ids: &[S],
) -> Vec<&'a Cell> {
    match batch_root(changed_ids) {
        BatchRoot::Nothing => Vec::new(),
        BatchRoot::Everything => {
            let mut order = Vec::new();
            traverse_bottom_up(root, |cell| {
                if cell.model.is_some() {
                    order.push(cell);
                }
            });
            order
        }
        BatchRoot::Path(ancestor) => reevaluation_order(root, &ancestor),
    }
}

enum BatchRoot {
    Nothing,
    Everything,
    Path(String),
}

fn batch_root<S: AsRef<str>>(changed_ids: &[S]) -> BatchRoot {
    let normalized: Vec<String> =
        changed_ids.iter().map(|id| PathId::parse(id.as_ref()).to_string()).collect();

    match common_ancestor(&normalized) {
        None => BatchRoot::Nothing,
        // Ids left unrooted (`rootless.a`) need not share even the first segment
        Some(ancestor) if ancestor.is_empty() => {
            debug!("Batch of {} changes has no common ancestor", changed_ids.len());
            BatchRoot::Everything
        }
        Some(ancestor) => {
            debug!("Batch of {} changes reduced to {}", changed_ids.len(), ancestor);
            BatchRoot::Path(ancestor)
        }
    }
}
