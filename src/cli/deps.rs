//! List the dependency paths a view registers.
//!
//! Paths are normalized (`root.`-prefixed), deduplicated and printed in the
//! order a top-down walk first registers them.

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

use super::{OutputFormat, json_line, lines};
use crate::dependency::DependencySet;
use crate::view::load_view;

/// Command to list registered dependency paths.
#[derive(Args, Debug)]
pub struct DepsCommand {
    /// View configuration file (JSON)
    view: PathBuf,
}

impl DepsCommand {
    /// Render the dependency set in `format`.
    pub fn render(&self, format: OutputFormat) -> Result<String> {
        let root = load_view(&self.view)
            .with_context(|| format!("Failed to load view {}", self.view.display()))?;
        let deps = DependencySet::from_cell(&root);

        match format {
            OutputFormat::Text => Ok(lines(deps.iter().map(ToString::to_string))),
            OutputFormat::Json => json_line(&deps),
        }
    }
}
