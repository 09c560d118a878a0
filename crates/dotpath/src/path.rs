use alloc::{
    string::{String, ToString},
    sync::Arc,
    vec::Vec,
};

/// One token of a path.
///
/// A segment carries no type of its own: whether it names an object key or
/// an array index is decided against the container it is applied to.
pub type Segment = Arc<str>;

/// The separator used when none is given.
pub const DEFAULT_SEPARATOR: &str = ".";

/// Splits `path` on the literal `separator`.
///
/// Segments are returned verbatim: nothing is trimmed and empty segments are
/// kept, so `"a..b"` yields `["a", "", "b"]` and `""` yields `[""]`. An empty
/// separator splits the path into its characters.
///
/// ```
/// use dotpath::tokenize;
///
/// let segments = tokenize("a..b", ".");
/// assert_eq!(segments.iter().map(|s| &**s).collect::<Vec<_>>(), ["a", "", "b"]);
/// ```
#[must_use]
pub fn tokenize(path: &str, separator: &str) -> Vec<Segment> {
    if separator.is_empty() {
        return path.chars().map(|c| Segment::from(c.to_string())).collect();
    }
    path.split(separator).map(Segment::from).collect()
}

/// Conversion into a sequence of path segments.
///
/// Strings are tokenized on the separator; integers are first rendered in
/// decimal, so `-1` addresses the last element of an array. Pre-segmented
/// inputs (slices, vectors, arrays of segments) bypass the tokenizer, which
/// is the only way to express a path of zero segments.
pub trait IntoPath {
    /// Produces the segments of this path.
    fn into_segments(self, separator: &str) -> Vec<Segment>;
}

impl IntoPath for &str {
    fn into_segments(self, separator: &str) -> Vec<Segment> {
        tokenize(self, separator)
    }
}

impl IntoPath for String {
    fn into_segments(self, separator: &str) -> Vec<Segment> {
        tokenize(&self, separator)
    }
}

impl IntoPath for &String {
    fn into_segments(self, separator: &str) -> Vec<Segment> {
        tokenize(self, separator)
    }
}

macro_rules! impl_into_path_for_integer {
    ($($t:ty),+) => {
        $(
            impl IntoPath for $t {
                fn into_segments(self, separator: &str) -> Vec<Segment> {
                    tokenize(&self.to_string(), separator)
                }
            }
        )+
    };
}

impl_into_path_for_integer!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl IntoPath for Vec<Segment> {
    fn into_segments(self, _separator: &str) -> Vec<Segment> {
        self
    }
}

impl IntoPath for &[Segment] {
    fn into_segments(self, _separator: &str) -> Vec<Segment> {
        self.to_vec()
    }
}

impl IntoPath for &[&str] {
    fn into_segments(self, _separator: &str) -> Vec<Segment> {
        self.iter().map(|s| Segment::from(*s)).collect()
    }
}

impl<const N: usize> IntoPath for [&str; N] {
    fn into_segments(self, _separator: &str) -> Vec<Segment> {
        self.iter().map(|s| Segment::from(*s)).collect()
    }
}

/// Converts one `path!` element into a segment.
#[doc(hidden)]
pub trait SegmentFrom<T> {
    /// Renders `value` as a segment.
    fn from_segment(value: T) -> Segment;
}

/// Target type the `path!` macro dispatches [`SegmentFrom`] on.
#[doc(hidden)]
pub struct SegmentBuilder;

macro_rules! impl_integer_as_segment {
    ($($t:ty),+) => {
        $(
            impl SegmentFrom<$t> for SegmentBuilder {
                fn from_segment(value: $t) -> Segment {
                    value.to_string().into()
                }
            }
        )+
    };
}
impl_integer_as_segment!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl SegmentFrom<&str> for SegmentBuilder {
    fn from_segment(value: &str) -> Segment {
        value.into()
    }
}

impl SegmentFrom<String> for SegmentBuilder {
    fn from_segment(value: String) -> Segment {
        value.into()
    }
}
