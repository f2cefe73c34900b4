//! Core types for bunsen-tree
//!
//! Error handling shared by the view loader and the CLI lives here. The
//! path and traversal modules themselves are infallible and do not depend on
//! it.
//!
//! # Examples
//!
//! ```rust,no_run
//! use bunsen_tree::core::{BunsenError, user_friendly_error};
//! use anyhow::Result;
//!
//! fn load() -> Result<()> {
//!     Err(BunsenError::ViewNotFound { path: "view.json".to_string() }.into())
//! }
//!
//! if let Err(e) = load() {
//!     user_friendly_error(e).display();
//! }
//! ```

pub mod error;

pub use error::{BunsenError, ErrorContext, user_friendly_error};
