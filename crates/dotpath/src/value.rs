//! Dynamic value types traversed by the path engine.
//!
//! This module defines the [`Value`] enum, which represents any value a path
//! can address, together with the two container kinds it can hold: [`Object`]
//! (a key/value mapping) and [`Array`] (an index-addressed sequence that may
//! contain holes).
//!
//! Containers are stored behind an [`Arc`], so cloning a [`Value`] is shallow:
//! a copy-on-write update only reallocates the containers on the addressed
//! path and every other branch stays shared with the input.
use alloc::{collections::BTreeMap, string::ToString, sync::Arc, vec::Vec};
use core::fmt::{self, Write as _};

use crate::path::Segment;

/// Property table keyed by segment.
pub type Map = BTreeMap<Segment, Value>;

/// A dynamically typed value.
///
/// `Undefined` is the missing sentinel. It is a real value that can be stored
/// (a densified hole becomes `Undefined`), which is why reads that need to
/// tell "absent" from "present but undefined" return an `Option<Value>`
/// instead of overloading it.
///
/// # Examples
///
/// ```
/// use dotpath::{Object, Value};
///
/// let v: Value = [("key", Value::from("value"))].into_iter().collect::<Object>().into();
/// assert_eq!(v.to_string(), r#"{"key":"value"}"#);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    /// The missing sentinel.
    Undefined,
    /// An explicit null.
    Null,
    /// `true` or `false`.
    Boolean(bool),
    /// A double-precision number, including `NaN` and the infinities.
    Number(f64),
    /// A string. Reads index it by character and see its `length`.
    String(Arc<str>),
    /// An index-addressed sequence, possibly with holes.
    Array(Arc<Array>),
    /// A key/value mapping.
    Object(Arc<Object>),
}

impl Default for Value {
    fn default() -> Self {
        Self::Undefined
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Boolean(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

macro_rules! impl_from_lossless_number {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Value {
                fn from(v: $t) -> Self {
                    Self::Number(f64::from(v))
                }
            }
        )*
    };
}

impl_from_lossless_number!(i8, i16, i32, u8, u16, u32, f32);

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::String(v.into())
    }
}

impl From<alloc::string::String> for Value {
    fn from(v: alloc::string::String) -> Self {
        Self::String(v.into())
    }
}

impl From<Arc<str>> for Value {
    fn from(v: Arc<str>) -> Self {
        Self::String(v)
    }
}

impl From<Array> for Value {
    fn from(v: Array) -> Self {
        Self::Array(Arc::new(v))
    }
}

impl From<Vec<Value>> for Value {
    fn from(v: Vec<Value>) -> Self {
        Self::Array(Arc::new(v.into()))
    }
}

impl From<Object> for Value {
    fn from(v: Object) -> Self {
        Self::Object(Arc::new(v))
    }
}

impl Value {
    /// Returns `true` if the value is [`Undefined`].
    ///
    /// [`Undefined`]: Value::Undefined
    #[must_use]
    pub fn is_undefined(&self) -> bool {
        matches!(self, Self::Undefined)
    }

    /// Returns `true` if the value is [`Null`].
    ///
    /// [`Null`]: Value::Null
    ///
    /// # Examples
    ///
    /// ```
    /// use dotpath::Value;
    ///
    /// assert!(Value::Null.is_null());
    /// assert!(!Value::Undefined.is_null());
    /// ```
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns `true` for [`Null`] and [`Undefined`], the two values that
    /// cannot serve as the root of a path.
    ///
    /// [`Null`]: Value::Null
    /// [`Undefined`]: Value::Undefined
    #[must_use]
    pub fn is_nil(&self) -> bool {
        matches!(self, Self::Null | Self::Undefined)
    }

    /// Returns `true` if the value is [`Boolean`].
    ///
    /// [`Boolean`]: Value::Boolean
    #[must_use]
    pub fn is_bool(&self) -> bool {
        matches!(self, Self::Boolean(..))
    }

    /// Returns `true` if the value is [`Number`].
    ///
    /// [`Number`]: Value::Number
    ///
    /// # Examples
    ///
    /// ```
    /// use dotpath::Value;
    ///
    /// assert!(Value::Number(42.0).is_number());
    /// assert!(!Value::Null.is_number());
    /// ```
    #[must_use]
    pub fn is_number(&self) -> bool {
        matches!(self, Self::Number(..))
    }

    /// Returns `true` if the value is [`String`].
    ///
    /// [`String`]: Value::String
    #[must_use]
    pub fn is_string(&self) -> bool {
        matches!(self, Self::String(..))
    }

    /// Returns `true` if the value is [`Array`].
    ///
    /// [`Array`]: Value::Array
    ///
    /// # Examples
    ///
    /// ```
    /// use dotpath::Value;
    ///
    /// assert!(Value::from(vec![Value::Null]).is_array());
    /// assert!(!Value::Null.is_array());
    /// ```
    #[must_use]
    pub fn is_array(&self) -> bool {
        matches!(self, Self::Array(..))
    }

    /// Returns `true` if the value is [`Object`].
    ///
    /// [`Object`]: Value::Object
    #[must_use]
    pub fn is_object(&self) -> bool {
        matches!(self, Self::Object(..))
    }

    /// Returns the number if the value is a [`Value::Number`].
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        if let Self::Number(n) = self {
            Some(*n)
        } else {
            None
        }
    }

    /// Returns the string slice if the value is a [`Value::String`].
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        if let Self::String(s) = self {
            Some(s)
        } else {
            None
        }
    }

    /// Returns the array if the value is a [`Value::Array`].
    #[must_use]
    pub fn as_array(&self) -> Option<&Array> {
        if let Self::Array(a) = self {
            Some(a)
        } else {
            None
        }
    }

    /// Returns the object if the value is a [`Value::Object`].
    #[must_use]
    pub fn as_object(&self) -> Option<&Object> {
        if let Self::Object(o) = self {
            Some(o)
        } else {
            None
        }
    }

    /// Returns `true` if both values are the same container allocation.
    ///
    /// Scalars are never pointer-equal; use [`Value::same_value_zero`] for
    /// value comparison.
    #[must_use]
    pub fn ptr_eq(&self, other: &Value) -> bool {
        match (self, other) {
            (Self::Array(a), Self::Array(b)) => Arc::ptr_eq(a, b),
            (Self::Object(a), Self::Object(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }

    /// SameValueZero equality: `NaN` equals `NaN` and `+0` equals `-0`.
    ///
    /// Scalars compare by value. Containers compare by identity, as
    /// [`Value::ptr_eq`] does: two arrays with the same elements are still
    /// different arrays. Use `==` for structural equality.
    ///
    /// ```
    /// use dotpath::Value;
    ///
    /// assert!(Value::Number(f64::NAN).same_value_zero(&Value::Number(f64::NAN)));
    /// assert!(Value::Number(0.0).same_value_zero(&Value::Number(-0.0)));
    /// assert!(!Value::Null.same_value_zero(&Value::Undefined));
    ///
    /// let list = Value::from(vec![Value::from(1)]);
    /// assert!(list.same_value_zero(&list.clone()));
    /// assert!(!list.same_value_zero(&Value::from(vec![Value::from(1)])));
    /// ```
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn same_value_zero(&self, other: &Value) -> bool {
        match (self, other) {
            (Self::Number(a), Self::Number(b)) => a == b || (a.is_nan() && b.is_nan()),
            (Self::Array(_), Self::Array(_)) | (Self::Object(_), Self::Object(_)) => self.ptr_eq(other),
            (a, b) => a == b,
        }
    }
}

/// A plain key/value mapping.
///
/// Properties are split into an enumerable table, which every operation sees,
/// and a non-enumerable table, which only reads that explicitly ask for it
/// see. Writes never carry non-enumerable properties into their copies.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Object {
    enumerable: Map,
    non_enumerable: Map,
}

impl Object {
    /// Creates an empty object.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces an enumerable property.
    ///
    /// A non-enumerable property with the same key is removed, matching plain
    /// assignment semantics where a key exists at most once.
    pub fn insert(&mut self, key: impl Into<Segment>, value: Value) -> Option<Value> {
        let key = key.into();
        self.non_enumerable.remove(&key);
        self.enumerable.insert(key, value)
    }

    /// Inserts or replaces a non-enumerable property.
    pub fn insert_non_enumerable(&mut self, key: impl Into<Segment>, value: Value) -> Option<Value> {
        let key = key.into();
        self.enumerable.remove(&key);
        self.non_enumerable.insert(key, value)
    }

    /// Returns the enumerable property `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.enumerable.get(key)
    }

    /// Returns the property `key` whether or not it is enumerable.
    #[must_use]
    pub fn get_own(&self, key: &str) -> Option<&Value> {
        self.enumerable
            .get(key)
            .or_else(|| self.non_enumerable.get(key))
    }

    /// Returns `true` if `key` is an enumerable property.
    #[must_use]
    pub fn is_enumerable(&self, key: &str) -> bool {
        self.enumerable.contains_key(key)
    }

    /// Returns `true` if `key` is a property, enumerable or not.
    #[must_use]
    pub fn has_own(&self, key: &str) -> bool {
        self.enumerable.contains_key(key) || self.non_enumerable.contains_key(key)
    }

    /// Iterates over the enumerable properties in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&Segment, &Value)> {
        self.enumerable.iter()
    }

    /// Number of enumerable properties.
    #[must_use]
    pub fn len(&self) -> usize {
        self.enumerable.len()
    }

    /// Returns `true` if there are no enumerable properties.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.enumerable.is_empty()
    }

    pub(crate) fn from_map(enumerable: Map) -> Self {
        Self {
            enumerable,
            non_enumerable: Map::new(),
        }
    }

    pub(crate) fn enumerable(&self) -> &Map {
        &self.enumerable
    }
}

impl<K: Into<Segment>> FromIterator<(K, Value)> for Object {
    fn from_iter<T: IntoIterator<Item = (K, Value)>>(iter: T) -> Self {
        let mut object = Object::new();
        for (k, v) in iter {
            object.insert(k, v);
        }
        object
    }
}

/// An index-addressed sequence.
///
/// Each slot is either assigned or a hole. Arrays can also carry named
/// properties of their own (for example a `"-1"` key), which take precedence
/// over index interpretation when a path segment names them.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Array {
    slots: Vec<Option<Value>>,
    properties: Object,
}

impl Array {
    /// Creates an empty array.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an array of `len` holes.
    #[must_use]
    pub fn with_holes(len: usize) -> Self {
        Self {
            slots: alloc::vec![None; len],
            properties: Object::new(),
        }
    }

    /// Appends an assigned slot.
    pub fn push(&mut self, value: Value) {
        self.slots.push(Some(value));
    }

    /// Appends a hole.
    pub fn push_hole(&mut self) {
        self.slots.push(None);
    }

    /// Assigns slot `index`, growing the array with holes when `index` is
    /// past the end.
    pub fn set(&mut self, index: usize, value: Value) {
        if index >= self.slots.len() {
            self.slots.resize(index + 1, None);
        }
        self.slots[index] = Some(value);
    }

    /// Returns the value at `index`, or `None` for a hole or an index out of
    /// bounds.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Value> {
        self.slots.get(index).and_then(Option::as_ref)
    }

    /// Returns `true` if `index` is in bounds and unassigned.
    #[must_use]
    pub fn is_hole(&self, index: usize) -> bool {
        matches!(self.slots.get(index), Some(None))
    }

    /// Returns `true` if no slot is a hole.
    #[must_use]
    pub fn is_dense(&self) -> bool {
        self.slots.iter().all(Option::is_some)
    }

    /// Number of slots, holes included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Returns `true` if there are no slots.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// The raw slots, with `None` for holes.
    #[must_use]
    pub fn slots(&self) -> &[Option<Value>] {
        &self.slots
    }

    /// Iterates over the slots as read, with holes reading as `Undefined`.
    pub fn iter(&self) -> impl Iterator<Item = &Value> {
        self.slots
            .iter()
            .map(|slot| slot.as_ref().unwrap_or(&Value::Undefined))
    }

    /// Named properties attached to the array.
    #[must_use]
    pub fn properties(&self) -> &Object {
        &self.properties
    }

    /// Attaches a named property to the array.
    ///
    /// A key that spells an array index (`"0"`, `"17"`, but not `"01"` or
    /// `"-1"`) names a slot, so it assigns that slot the way [`Array::set`]
    /// does and returns what the slot held. `"length"` belongs to the array
    /// itself and cannot be shadowed.
    ///
    /// ```
    /// use dotpath::{Array, Value};
    ///
    /// let mut arr = Array::from(vec![Value::from(1)]);
    /// arr.insert_property("-1", Value::from("tail")).unwrap();
    /// arr.insert_property("0", Value::from(2)).unwrap();
    /// assert!(arr.insert_property("length", Value::from(9)).is_err());
    /// assert_eq!(Value::from(arr).to_string(), r#"[2,"-1":"tail"]"#);
    /// ```
    ///
    /// # Errors
    ///
    /// Hands `value` back when `key` is `"length"`.
    pub fn insert_property(&mut self, key: impl Into<Segment>, value: Value) -> Result<Option<Value>, Value> {
        let key = key.into();
        if &*key == "length" {
            return Err(value);
        }
        if let Some(index) = array_index(&key) {
            let previous = self.get(index).cloned();
            self.set(index, value);
            return Ok(previous);
        }
        Ok(self.properties.insert(key, value))
    }

    /// Copies the slots into a new array with every hole materialized as
    /// [`Value::Undefined`]. Named properties are not carried over.
    #[must_use]
    pub fn densified(&self) -> Array {
        Array {
            slots: self.iter().cloned().map(Some).collect(),
            properties: Object::new(),
        }
    }
}

impl From<Vec<Value>> for Array {
    fn from(values: Vec<Value>) -> Self {
        Self {
            slots: values.into_iter().map(Some).collect(),
            properties: Object::new(),
        }
    }
}

impl From<Vec<Option<Value>>> for Array {
    fn from(slots: Vec<Option<Value>>) -> Self {
        Self {
            slots,
            properties: Object::new(),
        }
    }
}

impl FromIterator<Value> for Array {
    fn from_iter<T: IntoIterator<Item = Value>>(iter: T) -> Self {
        Self {
            slots: iter.into_iter().map(Some).collect(),
            properties: Object::new(),
        }
    }
}

/// The slot a key names when it is the canonical spelling of an index below
/// `u32::MAX`.
fn array_index(key: &str) -> Option<usize> {
    let index: u32 = key.parse().ok()?;
    if index == u32::MAX || index.to_string() != key {
        return None;
    }
    usize::try_from(index).ok()
}

/// Escapes control characters in a string for inclusion in a JSON string literal.
///
/// This function writes to the provided formatter, replacing characters such as
/// quotes, backslashes, control characters (<= U+001F), and Unicode line separators
/// with their JSON escape sequences.
pub(crate) fn write_escaped_string<W: fmt::Write>(src: &str, f: &mut W) -> fmt::Result {
    for c in src.chars() {
        match c {
            '"' => f.write_str("\\\"")?,
            '\\' => f.write_str("\\\\")?,
            '\u{2028}' | '\u{2029}' => {
                write!(f, "\\u{:04X}", c as u32)?;
            }
            c if c.is_ascii_control() || c.is_control() && c as u32 <= 0xFFFF => {
                write!(f, "\\u{:04X}", c as u32)?;
            }
            _ => f.write_char(c)?,
        }
    }
    Ok(())
}

fn write_number(n: f64, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if n.is_nan() {
        f.write_str("NaN")
    } else if n.is_infinite() {
        f.write_str(if n > 0.0 { "Infinity" } else { "-Infinity" })
    } else if n == 0.0 {
        // -0 prints as 0
        f.write_str("0")
    } else {
        f.write_str(&n.to_string())
    }
}

fn write_entry(key: &str, value: &Value, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_char('"')?;
    write_escaped_string(key, f)?;
    write!(f, "\":{value}")
}

/// Renders a JSON-like form. `undefined` and `NaN` are printed as such,
/// holes as `<empty>`, and named array properties after the elements.
/// Non-enumerable properties are not shown.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Undefined => f.write_str("undefined"),
            Value::Null => f.write_str("null"),
            Value::Boolean(b) => f.write_str(if *b { "true" } else { "false" }),
            Value::Number(n) => write_number(*n, f),
            Value::String(s) => {
                f.write_char('"')?;
                write_escaped_string(s, f)?;
                f.write_char('"')
            }
            Value::Array(arr) => {
                f.write_char('[')?;
                let mut first = true;
                for slot in &arr.slots {
                    if !first {
                        f.write_char(',')?;
                    }
                    first = false;
                    match slot {
                        Some(v) => write!(f, "{v}")?,
                        None => f.write_str("<empty>")?,
                    }
                }
                for (k, v) in arr.properties.iter() {
                    if !first {
                        f.write_char(',')?;
                    }
                    first = false;
                    write_entry(k, v, f)?;
                }
                f.write_char(']')
            }
            Value::Object(map) => {
                f.write_char('{')?;
                let mut first = true;
                for (k, v) in map.iter() {
                    if !first {
                        f.write_char(',')?;
                    }
                    first = false;
                    write_entry(k, v, f)?;
                }
                f.write_char('}')
            }
        }
    }
}

// Serialization mirrors JSON.stringify: `Undefined` and holes become `null`,
// objects keep only enumerable properties, named array properties are dropped.
#[cfg(any(test, feature = "serde"))]
mod serde_impls {
    use alloc::string::String;
    use core::fmt;

    use serde::{
        Deserialize, Deserializer, Serialize, Serializer,
        de::{MapAccess, SeqAccess, Visitor},
        ser::{SerializeMap, SerializeSeq},
    };

    use super::{Array, Object, Value};

    impl Serialize for Value {
        fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            match self {
                Value::Undefined | Value::Null => serializer.serialize_unit(),
                Value::Boolean(b) => serializer.serialize_bool(*b),
                Value::Number(n) => serializer.serialize_f64(*n),
                Value::String(s) => serializer.serialize_str(s),
                Value::Array(arr) => {
                    let mut seq = serializer.serialize_seq(Some(arr.len()))?;
                    for v in arr.iter() {
                        seq.serialize_element(v)?;
                    }
                    seq.end()
                }
                Value::Object(obj) => {
                    let mut map = serializer.serialize_map(Some(obj.len()))?;
                    for (k, v) in obj.iter() {
                        map.serialize_entry(&**k, v)?;
                    }
                    map.end()
                }
            }
        }
    }

    struct ValueVisitor;

    impl<'de> Visitor<'de> for ValueVisitor {
        type Value = Value;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("any JSON-like value")
        }

        fn visit_unit<E>(self) -> Result<Self::Value, E> {
            Ok(Value::Null)
        }

        fn visit_none<E>(self) -> Result<Self::Value, E> {
            Ok(Value::Null)
        }

        fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
        where
            D: Deserializer<'de>,
        {
            Deserialize::deserialize(deserializer)
        }

        fn visit_bool<E>(self, value: bool) -> Result<Self::Value, E> {
            Ok(Value::Boolean(value))
        }

        #[allow(clippy::cast_precision_loss)]
        fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E> {
            Ok(Value::Number(value as f64))
        }

        #[allow(clippy::cast_precision_loss)]
        fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E> {
            Ok(Value::Number(value as f64))
        }

        fn visit_f64<E>(self, value: f64) -> Result<Self::Value, E> {
            Ok(Value::Number(value))
        }

        fn visit_str<E>(self, value: &str) -> Result<Self::Value, E> {
            Ok(Value::from(value))
        }

        fn visit_string<E>(self, value: String) -> Result<Self::Value, E> {
            Ok(Value::from(value))
        }

        fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
        where
            A: SeqAccess<'de>,
        {
            let mut arr = Array::new();
            while let Some(v) = seq.next_element()? {
                arr.push(v);
            }
            Ok(arr.into())
        }

        fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
        where
            A: MapAccess<'de>,
        {
            let mut obj = Object::new();
            while let Some((k, v)) = access.next_entry::<String, Value>()? {
                obj.insert(k, v);
            }
            Ok(obj.into())
        }
    }

    impl<'de> Deserialize<'de> for Value {
        fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where
            D: Deserializer<'de>,
        {
            deserializer.deserialize_any(ValueVisitor)
        }
    }
}
