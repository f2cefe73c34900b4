//! View cells: the static tree a bunsen view is compiled from.
//!
//! A view configuration describes how fields render as a tree of cells. A
//! cell may point at a model field (`model`) and may nest further cells in
//! three ways:
//!
//! - `children` - an ordered list of cells rendered as an object group
//! - `arrayOptions.itemCell` - one template cell repeated for each array item
//! - `arrayOptions.tupleCells` - one template cell per fixed tuple position
//!
//! Well-formed views populate at most one of these per cell, but nothing
//! here relies on that: each is handled independently.
//!
//! Every other key of a cell (renderer, label, classNames, ...) is kept in
//! [`Cell::extra`] untouched, so option objects can still be scanned with
//! [`crate::object::traverse_object`].
//!
//! # JSON Shape
//!
//! ```json
//! {
//!   "model": "addresses",
//!   "arrayOptions": {
//!     "itemCell": {
//!       "children": [{ "model": "street" }, { "model": "city" }]
//!     }
//!   }
//! }
//! ```

pub mod walker;

pub use walker::{traverse_bottom_up, traverse_top_down};

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::constants::ANONYMOUS_CELL;
use crate::path::PathId;

/// A node in the view's cell tree.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cell {
    /// Model field this cell renders or depends on.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,

    /// Nested cells of an object group, in declaration order.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<Cell>>,

    /// Array item and tuple templates.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub array_options: Option<ArrayOptions>,

    /// Every other key of the cell configuration.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Array templates of a cell.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArrayOptions {
    /// Template applied to every array item.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item_cell: Option<Box<Cell>>,

    /// Templates for fixed tuple positions, in order.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tuple_cells: Option<Vec<Cell>>,

    /// Remaining array options (sortable, compact, ...).
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Cell {
    /// Creates a cell bound to `model`.
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            model: Some(model.into()),
            ..Self::default()
        }
    }

    /// Creates a cell with no model, e.g. a pure layout group.
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// Sets the object children of this cell.
    #[must_use]
    pub fn with_children(mut self, children: Vec<Cell>) -> Self {
        self.children = Some(children);
        self
    }

    /// Sets the array item template of this cell.
    #[must_use]
    pub fn with_item_cell(mut self, item: Cell) -> Self {
        self.array_options.get_or_insert_with(ArrayOptions::default).item_cell =
            Some(Box::new(item));
        self
    }

    /// Sets the tuple templates of this cell.
    #[must_use]
    pub fn with_tuple_cells(mut self, tuple: Vec<Cell>) -> Self {
        self.array_options.get_or_insert_with(ArrayOptions::default).tuple_cells = Some(tuple);
        self
    }

    /// Normalized model path, if the cell has a model.
    pub fn model_path(&self) -> Option<PathId> {
        self.model.as_deref().map(PathId::parse)
    }

    /// Model text for display, `<anonymous>` when absent.
    pub fn display_name(&self) -> &str {
        self.model.as_deref().unwrap_or(ANONYMOUS_CELL)
    }

    /// Object children, empty when absent.
    pub fn children(&self) -> &[Cell] {
        self.children.as_deref().unwrap_or_default()
    }

    /// Array item template, if any.
    pub fn item_cell(&self) -> Option<&Cell> {
        self.array_options.as_ref().and_then(|options| options.item_cell.as_deref())
    }

    /// Tuple templates, empty when absent.
    pub fn tuple_cells(&self) -> &[Cell] {
        self.array_options
            .as_ref()
            .and_then(|options| options.tuple_cells.as_deref())
            .unwrap_or_default()
    }

    /// Whether the cell nests any other cell.
    pub fn is_leaf(&self) -> bool {
        self.children().is_empty() && self.item_cell().is_none() && self.tuple_cells().is_empty()
    }

    /// Counts this cell and every nested cell.
    pub fn count(&self) -> usize {
        let mut count = 0;
        traverse_top_down(self, |_| count += 1);
        count
    }
}
