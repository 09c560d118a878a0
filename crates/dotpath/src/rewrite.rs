//! Copy-on-write rewriting of a path.
//!
//! Only the containers on the addressed spine are reallocated. Everything
//! else is carried over by cloning [`Value`]s, which for containers is a
//! reference-count bump, so untouched branches stay shared with the input.
use alloc::string::ToString;

use crate::{
    PathError, Value,
    path::Segment,
    resolve::{Resolved, lookup, resolve_key},
    trace::trace,
    value::Object,
    walk::{PathResolution, walk},
};

/// Returns a copy of `root` with `leaf` stored at `segments`.
///
/// Missing intermediate containers are created as objects, and scalars met
/// along the way are replaced by objects. Arrays on the spine are copied
/// densely; an array addressed by a segment that is not one of its indices
/// is turned into an object keyed by its indices. An empty path replaces the
/// root with `leaf`.
///
/// ```
/// use dotpath::{Value, rewrite_path, tokenize};
///
/// let root = Value::from(vec![Value::from(1), Value::from(2)]);
/// let updated = rewrite_path(&root, &tokenize("-1.x", "."), Value::from(true));
/// assert_eq!(updated.to_string(), r#"[1,{"x":true}]"#);
/// assert_eq!(root.to_string(), "[1,2]");
/// ```
#[must_use]
pub fn rewrite_path(root: &Value, segments: &[Segment], leaf: Value) -> Value {
    match segments {
        [] => leaf,
        [segment] => assign(root, segment, leaf),
        [first, rest @ ..] => {
            let child = resolve_key(root, first, false)
                .map_or(Value::Undefined, |resolved| lookup(root, &resolved));
            let child = rewrite_path(&child, rest, leaf);
            assign(root, first, child)
        }
    }
}

/// Replaces the value at `segments` with `updater(current)`.
///
/// The path is walked with the same visibility writes have, so a
/// non-enumerable property does not exist here even when reads can see it.
/// If the path does not resolve, `updater` is never called and the result is
/// an unchanged copy of `root`: arrays come back dense and objects keep only
/// their enumerable properties, as any write would leave them.
///
/// # Errors
///
/// [`PathError::NilContainer`] if `root` is null or undefined.
pub fn rewrite_path_with<F>(root: &Value, segments: &[Segment], updater: F) -> Result<Value, PathError>
where
    F: FnOnce(Value) -> Value,
{
    match walk(root, segments, false)? {
        PathResolution::Found(current) => Ok(rewrite_path(root, segments, updater(current))),
        PathResolution::NotFound => {
            trace!(segments = segments.len(), "update target missing, copying root");
            Ok(match root {
                Value::Array(arr) => arr.densified().into(),
                Value::Object(_) => enumerable_copy(root).into(),
                _ => root.clone(),
            })
        }
    }
}

/// Writes `value` at the single `segment` of a copy of `root`.
fn assign(root: &Value, segment: &Segment, value: Value) -> Value {
    if let (Value::Array(arr), Some(Resolved::Index(index))) = (root, resolve_key(root, segment, false)) {
        if !arr.is_dense() {
            trace!(len = arr.len(), "densifying sparse array");
        }
        let mut copy = arr.densified();
        copy.set(index, value);
        return copy.into();
    }

    trace!(segment = &**segment, "assigning into object copy");
    let mut object = enumerable_copy(root);
    object.insert(segment.clone(), value);
    object.into()
}

/// Shallow copy of the enumerable own entries of `root` as a plain object.
///
/// Array slots become decimal keys (holes have no entry); scalars and strings
/// contribute nothing.
fn enumerable_copy(root: &Value) -> Object {
    match root {
        Value::Object(obj) => Object::from_map(obj.enumerable().clone()),
        Value::Array(arr) => {
            let mut object: Object = arr
                .slots()
                .iter()
                .enumerate()
                .filter_map(|(i, slot)| slot.clone().map(|v| (i.to_string(), v)))
                .collect();
            for (k, v) in arr.properties().iter() {
                object.insert(k.clone(), v.clone());
            }
            object
        }
        _ => Object::new(),
    }
}
