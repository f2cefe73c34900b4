//! Path-only commands that need no view file.

use anyhow::Result;
use clap::Args;

use super::{OutputFormat, json_line};
use crate::path::{common_ancestor, is_ancestor_or_equal};

/// Command to print the common ancestor of path identifiers.
///
/// Ids are compared exactly as given; no `root.` prefix is added.
#[derive(Args, Debug)]
pub struct AncestorCommand {
    /// Path identifiers
    ids: Vec<String>,
}

impl AncestorCommand {
    /// Render the common ancestor; `<none>` (JSON `null`) for no ids.
    pub fn render(&self, format: OutputFormat) -> Result<String> {
        let ancestor = common_ancestor(&self.ids);

        match format {
            OutputFormat::Text => Ok(format!("{}\n", ancestor.as_deref().unwrap_or("<none>"))),
            OutputFormat::Json => json_line(&ancestor),
        }
    }
}

/// Command to check whether two paths are ancestor-or-equal.
#[derive(Args, Debug)]
pub struct RelatedCommand {
    /// Dependency path
    dependency: String,

    /// Changed path
    changed: String,
}

impl RelatedCommand {
    /// Render `true` or `false`.
    pub fn render(&self, format: OutputFormat) -> Result<String> {
        let related =
            is_ancestor_or_equal(Some(self.dependency.as_str()), Some(self.changed.as_str()));

        match format {
            OutputFormat::Text => Ok(format!("{related}\n")),
            OutputFormat::Json => json_line(&related),
        }
    }
}
