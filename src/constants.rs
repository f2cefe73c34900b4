//! Global constants used throughout the bunsen-tree codebase.
//!
//! Path identifiers are plain dotted strings, so the handful of tokens that
//! give them structure are defined here once and shared by the path model,
//! the dependency index and the CLI.

/// Literal first segment of every normalized path identifier.
///
/// Identifiers that do not start with this text are implicitly rooted:
/// `foo.bar` is treated as `root.foo.bar`.
pub const ROOT_SEGMENT: &str = "root";

/// Segment token meaning "any array index".
///
/// Used in dependency expressions such as `root.items.[].name` that must
/// match every element of an array.
pub const WILDCARD_SEGMENT: &str = "[]";

/// Separator between path segments.
pub const SEGMENT_SEPARATOR: char = '.';

/// Display name for cells that carry no `model`.
pub const ANONYMOUS_CELL: &str = "<anonymous>";
