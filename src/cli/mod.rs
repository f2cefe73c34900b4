//! Command-line interface for bunsen-tree.
//!
//! The `bunsen-tree` binary is an inspection tool for view configurations:
//! it shows how the cell walkers enumerate a view, which dependency paths the
//! view registers, and which of them a field change would re-evaluate.
//!
//! # Commands
//!
//! - `walk` - list cells in top-down or bottom-up traversal order
//! - `deps` - list the dependency paths registered by a view
//! - `affected` - list dependency paths affected by one or more changes
//! - `ancestor` - print the common ancestor of path identifiers
//! - `related` - check whether two paths are ancestor-or-equal
//!
//! # Global Options
//!
//! - `--verbose` - debug logging on stderr
//! - `--quiet` - only errors on stderr
//! - `--format text|json` - output format on stdout
//!
//! Without `--verbose`/`--quiet` the `RUST_LOG` environment variable is
//! honored, defaulting to warnings only.
//!
//! # Examples
//!
//! ```bash
//! bunsen-tree walk view.json --order bottom-up
//! bunsen-tree --format json deps view.json
//! bunsen-tree affected view.json addresses.2.city
//! bunsen-tree ancestor root.foo.a root.foo.b
//! bunsen-tree related root.items.[].name root.items.3.name
//! ```

pub mod affected;
pub mod deps;
pub mod paths;
pub mod walk;


use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

/// Output format for command results.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// One item per line
    #[default]
    Text,
    /// JSON document
    Json,
}

/// Runtime configuration for CLI execution.
///
/// Built from the parsed flags by [`Cli::build_config`], or constructed
/// directly by tests and passed to [`Cli::execute_with_config`].
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    /// Log filter directive (`"debug"`, `"error"`, ...).
    ///
    /// When `None`, `RUST_LOG` is used if set, otherwise `"warn"`.
    pub log_level: Option<String>,

    /// Output format for command results.
    pub format: OutputFormat,
}

impl CliConfig {
    /// Create a configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the log filter directive.
    #[must_use]
    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = Some(level.into());
        self
    }

    /// Set the output format.
    #[must_use]
    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    /// Log filter this configuration resolves to.
    pub fn env_filter(&self) -> EnvFilter {
        match &self.log_level {
            Some(level) => EnvFilter::new(level),
            None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        }
    }

    /// Install the global tracing subscriber, writing to stderr.
    ///
    /// Does nothing if a subscriber is already installed.
    pub fn init_logging(&self) {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(self.env_filter())
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init();
    }
}

/// Inspect bunsen view configurations: traversal order, dependency paths and change propagation.
#[derive(Parser, Debug)]
#[command(
    name = "bunsen-tree",
    about = "Inspect bunsen view cell trees and field path dependencies",
    version
)]
pub struct Cli {
    /// The subcommand to execute.
    #[command(subcommand)]
    command: Commands,

    /// Enable debug logging on stderr.
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    verbose: bool,

    /// Only log errors.
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Output format.
    #[arg(short, long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List cells in traversal order.
    Walk(walk::WalkCommand),

    /// List the dependency paths registered by a view.
    Deps(deps::DepsCommand),

    /// List dependency paths affected by field changes.
    Affected(affected::AffectedCommand),

    /// Print the common ancestor of path identifiers.
    Ancestor(paths::AncestorCommand),

    /// Check whether one path is an ancestor of (or equal to) another.
    Related(paths::RelatedCommand),
}

impl Cli {
    /// Execute the parsed command.
    pub fn execute(self) -> Result<()> {
        let config = self.build_config();
        self.execute_with_config(config)
    }

    /// Build a [`CliConfig`] from the parsed flags.
    #[must_use]
    pub fn build_config(&self) -> CliConfig {
        let log_level = if self.verbose {
            Some("debug".to_string())
        } else if self.quiet {
            Some("error".to_string())
        } else {
            None
        };

        CliConfig {
            log_level,
            format: self.format,
        }
    }

    /// Execute the command with an injected configuration.
    pub fn execute_with_config(self, config: CliConfig) -> Result<()> {
        config.init_logging();

        let output = self.command.render(config.format)?;
        print!("{output}");
        Ok(())
    }
}

impl Commands {
    fn render(&self, format: OutputFormat) -> Result<String> {
        match self {
            Self::Walk(cmd) => cmd.render(format),
            Self::Deps(cmd) => cmd.render(format),
            Self::Affected(cmd) => cmd.render(format),
            Self::Ancestor(cmd) => cmd.render(format),
            Self::Related(cmd) => cmd.render(format),
        }
    }
}

/// Joins items one per line, each line newline-terminated.
pub(crate) fn lines<I, S>(items: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    items.into_iter().fold(String::new(), |mut out, item| {
        out.push_str(item.as_ref());
        out.push('\n');
        out
    })
}

/// Pretty JSON followed by a newline.
pub(crate) fn json_line<T: serde::Serialize + ?Sized>(value: &T) -> Result<String> {
    Ok(format!("{}\n", serde_json::to_string_pretty(value)?))
}
