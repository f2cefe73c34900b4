//! Error handling for bunsen-tree
//!
//! Path comparison and tree traversal are total functions and never fail.
//! Errors only arise at the edges: reading a view configuration from disk,
//! parsing its JSON, and validating CLI input. This module provides:
//!
//! - [`BunsenError`] - enumerated failure cases
//! - [`ErrorContext`] - wrapper adding user-facing details and a suggestion
//! - [`user_friendly_error`] - maps any [`anyhow::Error`] to an [`ErrorContext`]
//!
//! [`std::io::Error`] converts into [`BunsenError::IoError`]; JSON failures
//! are reported as [`BunsenError::ViewParseError`] with the parser message.
//!
//! # Examples
//!
//! ```rust,no_run
//! use bunsen_tree::core::{BunsenError, ErrorContext, user_friendly_error};
//!
//! let err = BunsenError::ViewNotFound { path: "view.json".to_string() };
//! let ctx = user_friendly_error(anyhow::Error::from(err));
//! ctx.display(); // colored error with suggestion on stderr
//!
//! let manual = ErrorContext::new(BunsenError::InvalidView { reason: "empty".to_string() })
//!     .with_suggestion("Add at least one cell");
//! println!("{manual}");
//! ```

use colored::Colorize;
use std::fmt;
use thiserror::Error;

/// The main error type for bunsen-tree operations.
#[derive(Error, Debug)]
pub enum BunsenError {
    /// View configuration file does not exist
    #[error("View configuration not found: {path}")]
    ViewNotFound {
        /// Path that was looked up
        path: String,
    },

    /// View configuration is not valid JSON or has the wrong shape
    #[error("Invalid view configuration in {file}")]
    ViewParseError {
        /// File (or `<input>`) being parsed
        file: String,
        /// Parser message
        reason: String,
    },

    /// View parsed but cannot be used
    #[error("Invalid view configuration: {reason}")]
    InvalidView {
        /// What is wrong with the view
        reason: String,
    },

    /// IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Other error
    #[error("{message}")]
    Other {
        /// Generic error message
        message: String,
    },
}

impl Clone for BunsenError {
    fn clone(&self) -> Self {
        match self {
            Self::ViewNotFound {
                path,
            } => Self::ViewNotFound {
                path: path.clone(),
            },
            Self::ViewParseError {
                file,
                reason,
            } => Self::ViewParseError {
                file: file.clone(),
                reason: reason.clone(),
            },
            Self::InvalidView {
                reason,
            } => Self::InvalidView {
                reason: reason.clone(),
            },
            Self::Other {
                message,
            } => Self::Other {
                message: message.clone(),
            },
            // io::Error is not Clone; keep its message
            Self::IoError(e) => Self::Other {
                message: format!("IO error: {e}"),
            },
        }
    }
}

/// Error wrapper with optional details and a suggestion for the user.
///
/// When displayed, the error is printed in red, details in yellow and the
/// suggestion in green.
#[derive(Debug)]
pub struct ErrorContext {
    /// The underlying error
    pub error: BunsenError,
    /// Optional suggestion for resolving the error
    pub suggestion: Option<String>,
    /// Optional additional details about the error
    pub details: Option<String>,
}

impl ErrorContext {
    /// Create a new error context with no suggestion or details.
    #[must_use]
    pub const fn new(error: BunsenError) -> Self {
        Self {
            error,
            suggestion: None,
            details: None,
        }
    }

    /// Add a suggestion for resolving the error
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Add additional details explaining the error
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    /// Print the error context to stderr with terminal colors
    pub fn display(&self) {
        eprintln!("{}: {}", "error".red().bold(), self.error);

        if let Some(details) = &self.details {
            eprintln!("{}: {}", "details".yellow(), details);
        }

        if let Some(suggestion) = &self.suggestion {
            eprintln!("{}: {}", "suggestion".green(), suggestion);
        }
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.error)?;

        if let Some(details) = &self.details {
            write!(f, "\nDetails: {details}")?;
        }

        if let Some(suggestion) = &self.suggestion {
            write!(f, "\nSuggestion: {suggestion}")?;
        }

        Ok(())
    }
}

impl std::error::Error for ErrorContext {}

/// Convert any error to a user-friendly [`ErrorContext`].
///
/// Recognizes [`BunsenError`], [`std::io::Error`] and [`serde_json::Error`]
/// anywhere in the error chain; anything else is reported with its full
/// cause chain.
#[must_use]
pub fn user_friendly_error(error: anyhow::Error) -> ErrorContext {
    for cause in error.chain() {
        if let Some(bunsen_error) = cause.downcast_ref::<BunsenError>() {
            return create_error_context(bunsen_error.clone());
        }

        if let Some(json_error) = cause.downcast_ref::<serde_json::Error>() {
            return ErrorContext::new(BunsenError::ViewParseError {
                file: "<input>".to_string(),
                reason: json_error.to_string(),
            })
            .with_suggestion("Check the JSON syntax of the view configuration")
            .with_details(format!(
                "Parsing stopped at line {}, column {}",
                json_error.line(),
                json_error.column()
            ));
        }

        if let Some(io_error) = cause.downcast_ref::<std::io::Error>()
            && io_error.kind() == std::io::ErrorKind::NotFound
        {
            return ErrorContext::new(BunsenError::ViewNotFound {
                path: "unknown".to_string(),
            })
            .with_suggestion("Check that the file exists and the path is correct");
        }
    }

    let mut message = error.to_string();
    let chain: Vec<String> = error.chain().skip(1).map(std::string::ToString::to_string).collect();

    if !chain.is_empty() {
        message.push_str("\n\nCaused by:");
        for (i, cause) in chain.iter().enumerate() {
            message.push_str(&format!("\n  {}: {}", i + 1, cause));
        }
    }

    ErrorContext::new(BunsenError::Other {
        message,
    })
}

fn create_error_context(error: BunsenError) -> ErrorContext {
    match error {
        BunsenError::ViewNotFound {
            path,
        } => ErrorContext::new(BunsenError::ViewNotFound {
            path,
        })
        .with_suggestion("Check that the view file exists and the path is correct"),

        BunsenError::ViewParseError {
            file,
            reason,
        } => ErrorContext::new(BunsenError::ViewParseError {
            file,
            reason: reason.clone(),
        })
        .with_suggestion("A view is a cell object, or an object with a \"cells\" array of cells")
        .with_details(reason),

        BunsenError::InvalidView {
            reason,
        } => ErrorContext::new(BunsenError::InvalidView {
            reason,
        })
        .with_suggestion(
            "Cells may only nest through children, arrayOptions.itemCell and arrayOptions.tupleCells",
        ),

        other => ErrorContext::new(other),
    }
}
