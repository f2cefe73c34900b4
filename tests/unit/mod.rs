//! Unit test suite for bunsen-tree
//!
//! Exercises the public API of the path model, the cell walkers and the
//! dependency index through the crate boundary.
//!
//! ```bash
//! cargo test --test unit
//! ```

mod ancestry_properties;
mod dependency_tests;
mod walker_tests;
