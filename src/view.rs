//! Loading view configurations.
//!
//! A view document is either a single cell object or an object holding a
//! `cells` array. In the second form the cells are wrapped in an anonymous
//! root cell so the walkers always start from one node; every other key of
//! the document ends up in that root's [`Cell::extra`]. A document with both
//! `cells` and a top-level `model` is rejected, since the synthetic root has
//! no model of its own.

use anyhow::{Context, Result};
use serde_json::Value;
use std::path::Path;
use tracing::debug;

use crate::cell::Cell;
use crate::core::BunsenError;

/// Parses a view document from a JSON string.
///
/// # Errors
///
/// Returns [`BunsenError::ViewParseError`] when the text is not JSON or does
/// not have the shape of a cell, and [`BunsenError::InvalidView`] when the
/// document is not a JSON object or mixes `cells` with a root `model`.
pub fn parse_view(json: &str) -> Result<Cell> {
    parse_view_named(json, "<input>")
}

/// Reads and parses a view document from `path`.
///
/// # Errors
///
/// Returns [`BunsenError::ViewNotFound`] if the file does not exist,
/// [`BunsenError::IoError`] if it cannot be read, and the errors of [`parse_view`] otherwise.
pub fn load_view(path: &Path) -> Result<Cell> {
    if !path.exists() {
        return Err(BunsenError::ViewNotFound {
            path: path.display().to_string(),
        }
        .into());
    }

    let content = std::fs::read_to_string(path)
        .map_err(BunsenError::IoError)
        .with_context(|| format!("Failed to read view file: {}", path.display()))?;

    parse_view_named(&content, &path.display().to_string())
}

fn parse_view_named(json: &str, file: &str) -> Result<Cell> {
    let value: Value = serde_json::from_str(json).map_err(|e| BunsenError::ViewParseError {
        file: file.to_string(),
        reason: e.to_string(),
    })?;

    let Value::Object(mut document) = value else {
        return Err(BunsenError::InvalidView {
            reason: format!("{file} must contain a JSON object"),
        }
        .into());
    };

    if document.contains_key("cells") && document.contains_key("model") {
        return Err(BunsenError::InvalidView {
            reason: format!("{file} has both \"cells\" and a top-level \"model\""),
        }
        .into());
    }

    let cell = match document.remove("cells") {
        Some(cells) => {
            let children: Vec<Cell> =
                serde_json::from_value(cells).map_err(|e| BunsenError::ViewParseError {
                    file: file.to_string(),
                    reason: format!("cells: {e}"),
                })?;
            Cell {
                children: Some(children),
                extra: document,
                ..Cell::default()
            }
        }
        None => serde_json::from_value(Value::Object(document)).map_err(|e| {
            BunsenError::ViewParseError {
                file: file.to_string(),
                reason: e.to_string(),
            }
        })?,
    };

    debug!("Loaded view from {} with {} cells", file, cell.count());
    Ok(cell)
}
