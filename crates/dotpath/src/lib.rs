//! Path-addressed reads and copy-on-write updates over nested dynamic values.
//!
//! A path such as `"a.b.-1"` is split into segments, and each segment is
//! resolved against the container it meets: an enumerable key if one
//! exists, otherwise an index into an array-like (negative indices count from
//! the end). Writes never mutate their input; they rebuild the containers on
//! the addressed path and share everything else.
//!
//! ```rust
//! use dotpath::{Object, Value, get_path_in, set_path_in};
//!
//! let root: Value = [(
//!     "a",
//!     Value::from(vec![Value::from(4), Value::from(5), Value::from(6)]),
//! )]
//! .into_iter()
//! .collect::<Object>()
//! .into();
//!
//! assert_eq!(get_path_in(&root, "a.-1", None)?, Some(Value::from(6)));
//!
//! let updated = set_path_in(&root, "b.c", Value::from(99), None)?;
//! assert_eq!(updated.to_string(), r#"{"a":[4,5,6],"b":{"c":99}}"#);
//! assert_eq!(root.to_string(), r#"{"a":[4,5,6]}"#);
//! # Ok::<(), dotpath::PathError>(())
//! ```

#![no_std]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod trace;

mod error;
mod index;
mod options;
mod path;
mod resolve;
mod rewrite;
mod value;
mod walk;


pub use error::PathError;
pub use index::{normalize_index, to_integer};
pub use options::PathOptions;
pub use path::{DEFAULT_SEPARATOR, IntoPath, Segment, SegmentBuilder, SegmentFrom, tokenize};
pub use resolve::{Resolved, lookup, resolve_key};
pub use rewrite::{rewrite_path, rewrite_path_with};
pub use value::{Array, Map, Object, Value};
pub use walk::{PathResolution, walk};

#[doc(hidden)]
pub use alloc::vec;

fn options_for(separator: Option<&str>) -> PathOptions {
    match separator {
        Some(separator) => PathOptions::default().with_separator(alloc::string::String::from(separator)),
        None => PathOptions::default(),
    }
}

/// Reads the value at `path` in `container`.
///
/// `separator` defaults to `"."`. Non-enumerable properties are visible, so
/// `"list.length"` reads the length of an array. Returns `None` when some
/// segment does not resolve; a slot that exists but holds `undefined` is
/// `Some(Value::Undefined)`.
///
/// # Errors
///
/// [`PathError::NilContainer`] if `container` is null or undefined.
pub fn get_path_in(
    container: &Value,
    path: impl IntoPath,
    separator: Option<&str>,
) -> Result<Option<Value>, PathError> {
    options_for(separator).get(container, path)
}

/// Returns a copy of `container` with `value` stored at `path`.
///
/// Intermediate objects are created as needed, so this always succeeds on a
/// non-nil container.
///
/// # Errors
///
/// [`PathError::NilContainer`] if `container` is null or undefined.
pub fn set_path_in(
    container: &Value,
    path: impl IntoPath,
    value: Value,
    separator: Option<&str>,
) -> Result<Value, PathError> {
    options_for(separator).set(container, path, value)
}

/// Returns a copy of `container` with the value at `path` replaced by
/// `updater(old)`.
///
/// Non-enumerable properties do not exist for this lookup. If `path` does
/// not resolve, `updater` is not called and an unchanged copy of the
/// container is returned.
///
/// # Errors
///
/// [`PathError::NilContainer`] if `container` is null or undefined.
pub fn update_path_in<F>(
    container: &Value,
    path: impl IntoPath,
    updater: F,
    separator: Option<&str>,
) -> Result<Value, PathError>
where
    F: FnOnce(Value) -> Value,
{
    options_for(separator).update(container, path, updater)
}

/// Returns `true` if every segment of `path` resolves in `container`.
///
/// Existence is tested, not the value: a key holding `undefined` exists.
///
/// # Errors
///
/// [`PathError::NilContainer`] if `container` is null or undefined.
pub fn path_exists_in(
    container: &Value,
    path: impl IntoPath,
    separator: Option<&str>,
) -> Result<bool, PathError> {
    options_for(separator).exists(container, path)
}

/// Returns `true` if `path` resolves to a value SameValueZero-equal to
/// `expected` (`NaN` matches `NaN`, `0` matches `-0`).
///
/// # Errors
///
/// [`PathError::NilContainer`] if `container` is null or undefined.
pub fn has_path_value(
    container: &Value,
    path: impl IntoPath,
    expected: &Value,
    separator: Option<&str>,
) -> Result<bool, PathError> {
    options_for(separator).has_value(container, path, expected)
}

/// Macro to build a `Vec<Segment>` from a heterogeneous list of keys and
/// indices.
///
/// ```rust
/// # use dotpath::{Segment, path};
/// let p = path![0, "foo", -1];
/// assert_eq!(p, vec![Segment::from("0"), Segment::from("foo"), Segment::from("-1")]);
/// ```
#[macro_export]
macro_rules! path {
    ( $( $elem:expr ),* $(,)? ) => {{
        #[allow(unused_imports)]
        use $crate::SegmentFrom;
        let segments: $crate::vec::Vec<$crate::Segment> =
            $crate::vec![$(<$crate::SegmentBuilder as SegmentFrom<_>>::from_segment($elem)),*];
        segments
    }};
}
