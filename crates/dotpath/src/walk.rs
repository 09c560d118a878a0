use crate::{
    PathError, Value,
    path::Segment,
    resolve::{lookup, resolve_key},
    trace::{debug, trace},
};

/// Outcome of walking a path.
///
/// `NotFound` means some segment did not resolve. A path that resolves to a
/// slot holding `undefined` (a hole, or an explicitly stored
/// [`Value::Undefined`]) is `Found(Value::Undefined)`.
#[derive(Debug, Clone, PartialEq)]
pub enum PathResolution {
    /// Every segment resolved; holds the value at the end of the path.
    Found(Value),
    /// Some segment did not resolve.
    NotFound,
}

impl PathResolution {
    /// Returns `true` for [`PathResolution::Found`].
    #[must_use]
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }

    /// The found value, by reference.
    #[must_use]
    pub fn value(&self) -> Option<&Value> {
        match self {
            Self::Found(v) => Some(v),
            Self::NotFound => None,
        }
    }

    /// The found value, or `None` when the path did not resolve.
    #[must_use]
    pub fn into_value(self) -> Option<Value> {
        match self {
            Self::Found(v) => Some(v),
            Self::NotFound => None,
        }
    }
}

/// Walks `segments` from `root`.
///
/// Stops at the first segment that does not resolve. An empty path resolves
/// to `root` itself.
///
/// # Errors
///
/// [`PathError::NilContainer`] if `root` is null or undefined. This is
/// checked before any segment is looked at; nothing met along the way is an
/// error.
pub fn walk(
    root: &Value,
    segments: &[Segment],
    include_non_enumerable: bool,
) -> Result<PathResolution, PathError> {
    if root.is_nil() {
        debug!(segments = segments.len(), "walk on nil container");
        return Err(PathError::NilContainer);
    }

    let mut current = root.clone();
    for segment in segments {
        let Some(resolved) = resolve_key(&current, segment, include_non_enumerable) else {
            trace!(segment = &**segment, "segment did not resolve");
            return Ok(PathResolution::NotFound);
        };
        current = lookup(&current, &resolved);
    }
    Ok(PathResolution::Found(current))
}
