use alloc::{borrow::Cow, vec::Vec};

use crate::{
    PathError, Value,
    path::{DEFAULT_SEPARATOR, IntoPath, Segment},
    rewrite::{rewrite_path, rewrite_path_with},
    walk::{PathResolution, walk},
};

/// Configuration for path operations.
///
/// The free functions ([`get_path_in`](crate::get_path_in) and friends) use
/// the defaults with an optional separator; build a `PathOptions` to hide
/// non-enumerable properties from reads as well.
///
/// # Examples
///
/// ```rust
/// use dotpath::{Object, PathOptions, Value};
///
/// let mut inner = Object::new();
/// inner.insert_non_enumerable("secret", Value::from(7));
/// let root: Value = [("a", Value::from(inner))].into_iter().collect::<Object>().into();
///
/// let options = PathOptions::default().with_separator("/");
/// assert_eq!(options.get(&root, "a/secret")?, Some(Value::from(7)));
///
/// let enumerable_only = options.include_non_enumerable(false);
/// assert_eq!(enumerable_only.get(&root, "a/secret")?, None);
/// # Ok::<(), dotpath::PathError>(())
/// ```
///
/// # Default
///
/// Separator `"."`, non-enumerable properties visible to reads.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    any(test, feature = "serde"),
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct PathOptions {
    /// Literal string that separates segments in a string path.
    ///
    /// # Default
    ///
    /// `"."`
    pub separator: Cow<'static, str>,

    /// Whether reads may resolve non-enumerable properties (including the
    /// `length` of arrays and strings).
    ///
    /// Writes and updates ignore this flag: to them a non-enumerable
    /// property does not exist, and their copies leave it out.
    ///
    /// # Default
    ///
    /// `true`
    pub include_non_enumerable: bool,
}

impl Default for PathOptions {
    fn default() -> Self {
        Self {
            separator: Cow::Borrowed(DEFAULT_SEPARATOR),
            include_non_enumerable: true,
        }
    }
}

impl PathOptions {
    /// Sets the separator used to split string paths.
    #[must_use]
    pub fn with_separator(mut self, separator: impl Into<Cow<'static, str>>) -> Self {
        self.separator = separator.into();
        self
    }

    /// Sets whether reads resolve non-enumerable properties.
    #[must_use]
    pub fn include_non_enumerable(mut self, include: bool) -> Self {
        self.include_non_enumerable = include;
        self
    }

    /// Splits `path` into segments using the configured separator.
    pub fn segments(&self, path: impl IntoPath) -> Vec<Segment> {
        path.into_segments(&self.separator)
    }

    /// Walks `path` and reports whether it was found.
    ///
    /// # Errors
    ///
    /// [`PathError::NilContainer`] if `container` is null or undefined.
    pub fn resolve(&self, container: &Value, path: impl IntoPath) -> Result<PathResolution, PathError> {
        walk(container, &self.segments(path), self.include_non_enumerable)
    }

    /// Reads the value at `path`.
    ///
    /// Returns `None` when the path does not resolve and
    /// `Some(Value::Undefined)` when it resolves to a slot holding
    /// `undefined`.
    ///
    /// # Errors
    ///
    /// [`PathError::NilContainer`] if `container` is null or undefined.
    pub fn get(&self, container: &Value, path: impl IntoPath) -> Result<Option<Value>, PathError> {
        Ok(self.resolve(container, path)?.into_value())
    }

    /// Returns `true` if every segment of `path` resolves, regardless of the
    /// value stored at the end.
    ///
    /// # Errors
    ///
    /// [`PathError::NilContainer`] if `container` is null or undefined.
    pub fn exists(&self, container: &Value, path: impl IntoPath) -> Result<bool, PathError> {
        Ok(self.resolve(container, path)?.is_found())
    }

    /// Returns `true` if `path` resolves to a value that is SameValueZero
    /// equal to `expected`.
    ///
    /// # Errors
    ///
    /// [`PathError::NilContainer`] if `container` is null or undefined.
    pub fn has_value(
        &self,
        container: &Value,
        path: impl IntoPath,
        expected: &Value,
    ) -> Result<bool, PathError> {
        Ok(match self.resolve(container, path)? {
            PathResolution::Found(value) => value.same_value_zero(expected),
            PathResolution::NotFound => false,
        })
    }

    /// Returns a copy of `container` with `value` stored at `path`, creating
    /// intermediate objects as needed.
    ///
    /// # Errors
    ///
    /// [`PathError::NilContainer`] if `container` is null or undefined.
    pub fn set(&self, container: &Value, path: impl IntoPath, value: Value) -> Result<Value, PathError> {
        if container.is_nil() {
            return Err(PathError::NilContainer);
        }
        Ok(rewrite_path(container, &self.segments(path), value))
    }

    /// Returns a copy of `container` with the value at `path` replaced by
    /// `updater(old)`.
    ///
    /// The path is looked up the way writes see it, so non-enumerable
    /// properties are missing regardless of
    /// [`include_non_enumerable`](Self::include_non_enumerable). When the path
    /// does not resolve, `updater` is not called and the result is an
    /// unchanged copy of `container`.
    ///
    /// # Errors
    ///
    /// [`PathError::NilContainer`] if `container` is null or undefined.
    pub fn update<F>(&self, container: &Value, path: impl IntoPath, updater: F) -> Result<Value, PathError>
    where
        F: FnOnce(Value) -> Value,
    {
        rewrite_path_with(container, &self.segments(path), updater)
    }
}
