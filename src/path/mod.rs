//! Path identifiers for fields in a bunsen view.
//!
//! A path identifier ("bunsen id") addresses one field of the form model as a
//! dot-delimited sequence of segments, e.g. `root.addresses.2.city`. Numeric
//! segments are array indices and the token `[]` stands for "any index", so a
//! dependency declared on `root.addresses.[].city` follows every element.
//!
//! # Normalization
//!
//! Every identifier is rooted: ids that do not begin with `root` get a
//! `root.` prefix, so `foo.bar` and `root.foo.bar` name the same field.
//! Normalization never rewrites array indices; wildcard handling happens
//! per segment at comparison time (see [`segments_equal`]).
//!
//! # Submodules
//!
//! - [`ancestry`] - decides whether two ids lie on the same branch
//! - [`common`] - longest shared prefix of a batch of ids
//!
//! # Examples
//!
//! ```rust
//! use bunsen_tree::path::{PathId, segments_equal};
//!
//! let id = PathId::parse("items.3.name");
//! assert_eq!(id.to_string(), "root.items.3.name");
//! assert_eq!(id.len(), 4);
//!
//! assert!(segments_equal("[]", "3"));
//! assert!(!segments_equal("2", "3"));
//! ```

pub mod ancestry;
pub mod common;

pub use ancestry::is_ancestor_or_equal;
pub use common::common_ancestor;

use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use crate::constants::{ROOT_SEGMENT, SEGMENT_SEPARATOR, WILDCARD_SEGMENT};

/// First run of ASCII digits in a segment.
fn array_index_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new("[0-9]+").expect("array index pattern is a valid regex"))
}

/// Prefixes `root.` to an identifier that does not already start with `root`.
///
/// The check is a plain prefix test on the text, so `rootless.a` is left
/// alone just like `root.a`.
///
/// # Examples
///
/// ```rust
/// use bunsen_tree::path::rooted;
///
/// assert_eq!(rooted("foo.bar"), "root.foo.bar");
/// assert_eq!(rooted("root.foo"), "root.foo");
/// ```
pub fn rooted(id: &str) -> String {
    if id.starts_with(ROOT_SEGMENT) {
        id.to_string()
    } else {
        format!("{ROOT_SEGMENT}{SEGMENT_SEPARATOR}{id}")
    }
}

/// Normalizes an identifier into its rooted segment sequence.
pub fn normalize(id: &str) -> PathId {
    PathId::parse(id)
}

/// Compares two path segments, treating `[]` as "any array index".
///
/// Identical segments are always equal. When either side is the wildcard
/// token, the first run of decimal digits in *both* segments is replaced by
/// `[]` before comparing, so `[]` matches `3` and `3` matches `[]`. The
/// substitution is textual: a segment such as `category[]` is compared as
/// written, and only the first digit run is rewritten (`a1b2` becomes
/// `a[]b2`).
///
/// # Examples
///
/// ```rust
/// use bunsen_tree::path::segments_equal;
///
/// assert!(segments_equal("foo", "foo"));
/// assert!(segments_equal("[]", "12"));
/// assert!(segments_equal("7", "[]"));
/// assert!(!segments_equal("[]", "name"));
/// assert!(!segments_equal("1", "2"));
/// ```
pub fn segments_equal(a: &str, b: &str) -> bool {
    if a == b {
        return true;
    }

    if a != WILDCARD_SEGMENT && b != WILDCARD_SEGMENT {
        return false;
    }

    let re = array_index_re();
    re.replace(a, WILDCARD_SEGMENT) == re.replace(b, WILDCARD_SEGMENT)
}

/// A normalized, root-prefixed field identifier.
///
/// `PathId` stores the segments of an identifier after [`rooted`] has been
/// applied. The derived `PartialEq`/`Hash` compare segments exactly, which
/// makes `PathId` usable as a map key; use [`PathId::matches`] for the
/// wildcard-aware comparison used by dependency tracking.
///
/// Serializes as its dotted string form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PathId {
    segments: Vec<String>,
}

impl PathId {
    /// Parses and normalizes an identifier.
    ///
    /// Parsing is total: any string yields a path, empty segments included
    /// (`root..a` has an empty middle segment).
    pub fn parse(id: &str) -> Self {
        let segments = rooted(id).split(SEGMENT_SEPARATOR).map(str::to_string).collect();
        Self {
            segments,
        }
    }

    /// Segments of this path, starting with `root`.
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Number of segments, including `root`.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Always `false`: a normalized path has at least the root segment.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Wildcard-aware equality.
    ///
    /// Two paths match when they have the same length and every segment pair
    /// satisfies [`segments_equal`].
    pub fn matches(&self, other: &Self) -> bool {
        self.segments.len() == other.segments.len()
            && self.segments.iter().zip(&other.segments).all(|(a, b)| segments_equal(a, b))
    }

    /// Wildcard-aware prefix test: is `self` a prefix of (or equal to) `other`?
    pub fn is_prefix_of(&self, other: &Self) -> bool {
        self.segments.len() <= other.segments.len()
            && self.segments.iter().zip(&other.segments).all(|(a, b)| segments_equal(a, b))
    }
}

impl fmt::Display for PathId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.segments.join(&SEGMENT_SEPARATOR.to_string()))
    }
}

impl FromStr for PathId {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl From<&str> for PathId {
    fn from(id: &str) -> Self {
        Self::parse(id)
    }
}

impl Serialize for PathId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for PathId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::parse(&raw))
    }
}
