//! Decides what a segment names on a given container.
//!
//! Object keys are tried before index interpretation, so an array carrying an
//! enumerable `"-1"` property answers `"-1"` with that property and not with
//! its last element.
use alloc::string::ToString;

use crate::{
    Value,
    index::{normalize_index, to_integer},
    path::Segment,
    value::Object,
};

const LENGTH: &str = "length";

/// A segment resolved against a container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolved {
    /// A named property.
    Key(Segment),
    /// A slot of an array-like, already normalized into `[0, length)`.
    Index(usize),
}

/// Resolves `segment` against `container`.
///
/// Own properties win over indices: non-enumerable ones only when
/// `include_non_enumerable` is set, enumerable ones always. Failing that,
/// arrays and strings accept any segment that coerces to an index in
/// `-length..length`. Scalars resolve nothing.
///
/// ```
/// use dotpath::{Resolved, Value, resolve_key};
///
/// let arr = Value::from(vec![Value::from(1), Value::from(2), Value::from(3)]);
/// assert_eq!(resolve_key(&arr, "-1", false), Some(Resolved::Index(2)));
/// assert_eq!(resolve_key(&arr, "3", false), None);
/// assert_eq!(resolve_key(&arr, "length", false), Some(Resolved::Index(0)));
/// assert_eq!(resolve_key(&arr, "length", true), Some(Resolved::Key("length".into())));
/// ```
#[must_use]
pub fn resolve_key(container: &Value, segment: &str, include_non_enumerable: bool) -> Option<Resolved> {
    let properties = named_properties(container);

    if include_non_enumerable && has_own_property(container, properties, segment) {
        return Some(Resolved::Key(segment.into()));
    }
    if properties.is_some_and(|p| p.is_enumerable(segment)) {
        return Some(Resolved::Key(segment.into()));
    }

    let length = array_like_length(container)?;
    normalize_index(to_integer(segment), length).map(Resolved::Index)
}

/// Reads the slot `resolved` names on `container`.
///
/// Holes and anything `resolve_key` would not have produced read as
/// [`Value::Undefined`].
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn lookup(container: &Value, resolved: &Resolved) -> Value {
    match (container, resolved) {
        (Value::Array(arr), Resolved::Index(i)) => arr.get(*i).cloned().unwrap_or_default(),
        (Value::String(s), Resolved::Index(i)) => s
            .chars()
            .nth(*i)
            .map_or(Value::Undefined, |c| Value::from(c.to_string())),
        (_, Resolved::Key(key)) => {
            if let Some(value) = named_properties(container).and_then(|p| p.get_own(key)) {
                return value.clone();
            }
            match (array_like_length(container), &**key) {
                (Some(len), LENGTH) => Value::Number(len as f64),
                _ => Value::Undefined,
            }
        }
        _ => Value::Undefined,
    }
}

/// The property table of a container, if it has one.
pub(crate) fn named_properties(container: &Value) -> Option<&Object> {
    match container {
        Value::Object(obj) => Some(obj),
        Value::Array(arr) => Some(arr.properties()),
        _ => None,
    }
}

/// Length of an array or string, counted in elements or characters.
pub(crate) fn array_like_length(container: &Value) -> Option<usize> {
    match container {
        Value::Array(arr) => Some(arr.len()),
        Value::String(s) => Some(s.chars().count()),
        _ => None,
    }
}

fn has_own_property(container: &Value, properties: Option<&Object>, segment: &str) -> bool {
    properties.is_some_and(|p| p.has_own(segment))
        || (segment == LENGTH && array_like_length(container).is_some())
}
