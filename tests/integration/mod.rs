//! Integration test suite for bunsen-tree
//!
//! Runs the `bunsen-tree` binary end to end against view files written to
//! temporary directories.
//!
//! ```bash
//! cargo test --test integration
//! ```
//!
//! # Test Organization
//!
//! - **cli**: every subcommand in text and JSON output
//! - **errors**: exit status and user-facing error messages

mod cli;
mod errors;
