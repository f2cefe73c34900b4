//! bunsen-tree - path dependencies and cell-tree traversal for bunsen views
//!
//! A bunsen form is described by a schema model and a view: a tree of cells,
//! each optionally bound to a model field through a dotted path such as
//! `root.addresses.2.city`. This crate is the engine that decides which cells
//! are affected when a field changes and walks the cell tree in the orders
//! the view compiler needs.
//!
//! # Architecture Overview
//!
//! - **Path model** ([`path`]) - rooted, dot-delimited identifiers with the
//!   `[]` wildcard standing for any array index
//! - **Ancestry** ([`path::is_ancestor_or_equal`]) - symmetric,
//!   wildcard-aware prefix relation between two paths
//! - **Common ancestor** ([`path::common_ancestor`]) - longest shared prefix
//!   of a batch of changed paths
//! - **Cell walkers** ([`cell::walker`]) - iterative pre-order depth-first and
//!   reversed breadth-first traversals over children, item templates and
//!   tuple templates
//! - **Object walker** ([`object`]) - structural traversal of arbitrary JSON
//!   option objects
//! - **Dependency index** ([`dependency`]) - model paths registered by a view
//!   and change-propagation queries over them
//!
//! All of these are pure and synchronous; they never mutate their inputs and
//! may be called concurrently. Fallible work (reading view files, CLI input)
//! lives in [`view`], [`cli`] and [`core`].
//!
//! # Example
//!
//! ```rust
//! use bunsen_tree::cell::Cell;
//! use bunsen_tree::dependency::DependencySet;
//! use bunsen_tree::path::{common_ancestor, is_ancestor_or_equal};
//!
//! assert!(is_ancestor_or_equal(Some("root.items.[].name"), Some("items.3.name")));
//! assert_eq!(common_ancestor(&["root.foo.a", "root.foo.b"]).as_deref(), Some("root.foo"));
//!
//! let view = Cell::anonymous().with_children(vec![Cell::new("foo"), Cell::new("bar")]);
//! let deps = DependencySet::from_cell(&view);
//! assert_eq!(deps.affected_by("foo.x").len(), 1);
//! ```

// Core engine
pub mod cell;
pub mod constants;
pub mod dependency;
pub mod object;
pub mod path;

// Loading and error handling
pub mod core;
pub mod view;

// Command-line interface
pub mod cli;

// test_utils module is available for both unit tests and integration tests
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
