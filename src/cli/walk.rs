//! List the cells of a view in traversal order.
//!
//! ```bash
//! bunsen-tree walk view.json                  # pre-order, depth-first
//! bunsen-tree walk view.json --order bottom-up
//! bunsen-tree --format json walk view.json
//! ```
//!
//! Cells without a model print as `<anonymous>` (JSON `null`).

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

use super::{OutputFormat, json_line, lines};
use crate::cell::{Cell, traverse_bottom_up, traverse_top_down};
use crate::view::load_view;

/// Traversal order for `walk`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum TraversalOrder {
    /// Each cell before its nested cells
    #[default]
    TopDown,
    /// Nested cells before the cell holding them, deepest level first
    BottomUp,
}

/// Command to list cells in traversal order.
#[derive(Args, Debug)]
pub struct WalkCommand {
    /// View configuration file (JSON)
    view: PathBuf,

    /// Traversal order
    #[arg(short, long, value_enum, default_value_t = TraversalOrder::TopDown)]
    order: TraversalOrder,
}

impl WalkCommand {
    /// Render the visited cells in `format`.
    pub fn render(&self, format: OutputFormat) -> Result<String> {
        let root = load_view(&self.view)
            .with_context(|| format!("Failed to load view {}", self.view.display()))?;

        let visited = collect(&root, self.order);

        match format {
            OutputFormat::Text => Ok(lines(visited.iter().map(|cell| cell.display_name()))),
            OutputFormat::Json => {
                let models: Vec<Option<&str>> =
                    visited.iter().map(|cell| cell.model.as_deref()).collect();
                json_line(&models)
            }
        }
    }
}

fn collect(root: &Cell, order: TraversalOrder) -> Vec<&Cell> {
    let mut visited = Vec::new();
    match order {
        TraversalOrder::TopDown => traverse_top_down(root, |cell| visited.push(cell)),
        TraversalOrder::BottomUp => traverse_bottom_up(root, |cell| visited.push(cell)),
    }
    visited
}
