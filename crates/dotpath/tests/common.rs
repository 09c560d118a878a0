#![allow(missing_docs, dead_code)]

use dotpath::{Array, Object, Value};

/// Object from `(key, value)` pairs.
pub fn obj<const N: usize>(entries: [(&str, Value); N]) -> Value {
    entries.into_iter().collect::<Object>().into()
}

/// Dense array.
pub fn arr<const N: usize>(items: [Value; N]) -> Value {
    items.into_iter().collect::<Array>().into()
}

/// Array where `None` marks a hole.
pub fn sparse<const N: usize>(slots: [Option<Value>; N]) -> Value {
    Array::from(slots.to_vec()).into()
}

pub fn num(n: f64) -> Value {
    Value::Number(n)
}

/// `{"a": {"b": [4, 5, 6]}, "x": {"y": "z"}}`
pub fn nested() -> Value {
    obj([
        ("a", obj([("b", arr([num(4.0), num(5.0), num(6.0)]))])),
        ("x", obj([("y", Value::from("z"))])),
    ])
}
