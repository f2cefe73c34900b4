//! Structural traversal of arbitrary JSON values.
//!
//! Cell option objects and schema fragments have no fixed shape, so they are
//! walked as plain [`serde_json::Value`] trees. Objects contribute every
//! property value and arrays every element; scalars are leaves. There is no
//! notion of paths or ancestry here.

use serde_json::Value;
use tracing::trace;

/// Depth-first, pre-order traversal of a JSON value.
///
/// Visits the root and then every nested value exactly once. Nested values
/// are pushed on a stack in iteration order, so the last property (or
/// element) of a container is visited first.
///
/// # Examples
///
/// ```rust
/// use bunsen_tree::object::traverse_object;
/// use serde_json::json;
///
/// let value = json!({ "a": { "b": 1 }, "c": [true, null] });
///
/// let mut count = 0;
/// traverse_object(&value, |_| count += 1);
/// assert_eq!(count, 6);
/// ```
pub fn traverse_object<'a, F>(value: &'a Value, mut visit: F)
where
    F: FnMut(&'a Value),
{
    let mut stack = vec![value];
    let mut visited = 0usize;

    while let Some(next) = stack.pop() {
        visit(next);
        visited += 1;

        match next {
            Value::Object(map) => stack.extend(map.values()),
            Value::Array(items) => stack.extend(items),
            _ => {}
        }
    }

    trace!("object traversal visited {} values", visited);
}

/// Reports whether any object nested in `value` declares a required field.
///
/// A schema-like object declares required fields through a non-empty
/// `required` array, e.g. `{"type": "object", "required": ["name"]}`. Used
/// to decide whether a container holding `value` should be flagged as
/// required.
///
/// # Examples
///
/// ```rust
/// use bunsen_tree::object::contains_required_field;
/// use serde_json::json;
///
/// let schema = json!({
///     "type": "object",
///     "properties": {
///         "address": { "type": "object", "required": ["city"] }
///     }
/// });
/// assert!(contains_required_field(&schema));
/// assert!(!contains_required_field(&json!({ "type": "string" })));
/// ```
pub fn contains_required_field(value: &Value) -> bool {
    let mut found = false;
    traverse_object(value, |node| {
        if let Some(Value::Array(required)) = node.get("required")
            && !required.is_empty()
        {
            found = true;
        }
    });
    found
}
