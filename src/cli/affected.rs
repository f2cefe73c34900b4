//! Show which dependency paths a field change re-evaluates.
//!
//! With one changed path, every registered path related to it is listed.
//! With several, the batch is first reduced to its common ancestor and that
//! path is used as the single re-evaluation root.
//!
//! ```bash
//! bunsen-tree affected view.json addresses.2.city
//! bunsen-tree affected view.json foo.a foo.b
//! bunsen-tree affected view.json foo.a --cells   # cells, children first
//! ```

use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;

use super::{OutputFormat, json_line, lines};
use crate::dependency::{DependencySet, reevaluation_order_batch};
use crate::path::{PathId, common_ancestor};
use crate::view::load_view;

/// Command to list paths affected by field changes.
#[derive(Args, Debug)]
pub struct AffectedCommand {
    /// View configuration file (JSON)
    view: PathBuf,

    /// Changed field paths (bare ids are rooted)
    #[arg(required = true, num_args = 1..)]
    changed: Vec<String>,

    /// List the cells to re-evaluate, nested cells first, instead of paths
    #[arg(long)]
    cells: bool,
}

#[derive(Serialize)]
struct AffectedReport<'a> {
    root: String,
    affected: Vec<&'a str>,
}

impl AffectedCommand {
    /// Render the affected paths (or cells) in `format`.
    pub fn render(&self, format: OutputFormat) -> Result<String> {
        let view = load_view(&self.view)
            .with_context(|| format!("Failed to load view {}", self.view.display()))?;

        let root = self.reevaluation_root();

        let affected: Vec<String> = if self.cells {
            reevaluation_order_batch(&view, &self.changed)
                .into_iter()
                .map(|cell| cell.display_name().to_string())
                .collect()
        } else {
            let deps = DependencySet::from_cell(&view);
            deps.affected_by_batch(&self.changed).into_iter().map(ToString::to_string).collect()
        };

        match format {
            OutputFormat::Text => Ok(lines(&affected)),
            OutputFormat::Json => json_line(&AffectedReport {
                root,
                affected: affected.iter().map(String::as_str).collect(),
            }),
        }
    }

    /// Common ancestor of the normalized changed paths.
    fn reevaluation_root(&self) -> String {
        let normalized: Vec<String> =
            self.changed.iter().map(|id| PathId::parse(id).to_string()).collect();
        common_ancestor(&normalized).unwrap_or_default()
    }
}
