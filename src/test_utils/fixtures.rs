//! Sample view configurations for tests

use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};

use crate::cell::Cell;
use crate::view::parse_view;

/// Test fixture for a view configuration document
#[derive(Clone, Debug)]
pub struct ViewFixture {
    pub content: String,
    pub name: String,
}

impl ViewFixture {
    /// Flat object form: two text fields and a nested group
    pub fn basic() -> Self {
        Self {
            name: "basic".to_string(),
            content: r#"
{
  "version": "2.0",
  "type": "form",
  "cells": [
    { "model": "firstName", "label": "First name" },
    { "model": "lastName", "label": "Last name" },
    {
      "model": "contact",
      "children": [
        { "model": "contact.email", "renderer": { "name": "text" } },
        { "model": "contact.phone" }
      ]
    }
  ]
}
"#
            .trim()
            .to_string(),
        }
    }

    /// Array of addresses using an item template
    pub fn addresses() -> Self {
        Self {
            name: "addresses".to_string(),
            content: r#"
{
  "cells": [
    { "model": "name" },
    {
      "model": "addresses",
      "arrayOptions": {
        "sortable": true,
        "itemCell": {
          "children": [
            { "model": "addresses.[].street" },
            { "model": "addresses.[].city" }
          ]
        }
      }
    }
  ]
}
"#
            .trim()
            .to_string(),
        }
    }

    /// Fixed-position tuple of coordinates
    pub fn tuple() -> Self {
        Self {
            name: "tuple".to_string(),
            content: r#"
{
  "model": "location",
  "arrayOptions": {
    "tupleCells": [
      { "model": "location.0", "label": "Latitude" },
      { "model": "location.1", "label": "Longitude" }
    ]
  }
}
"#
            .trim()
            .to_string(),
        }
    }

    /// Truncated JSON
    pub fn invalid_syntax() -> Self {
        Self {
            name: "invalid_syntax".to_string(),
            content: r#"{ "cells": [ { "model": "a" }"#.to_string(),
        }
    }

    /// Parse the fixture into a cell tree
    pub fn cell(&self) -> Result<Cell> {
        parse_view(&self.content)
    }

    /// Write the fixture to `<dir>/<name>.json`
    pub fn write_to(&self, dir: &Path) -> Result<PathBuf> {
        let view_path = dir.join(format!("{}.json", self.name));
        fs::write(&view_path, &self.content)?;
        Ok(view_path)
    }
}
