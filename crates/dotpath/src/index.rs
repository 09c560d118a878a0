//! Coercion of path segments into array indices.

/// Parses a segment as a number the way a loose string-to-number conversion
/// does, then truncates it toward zero.
///
/// Surrounding whitespace is ignored, an empty string is `0`, `Infinity` may
/// carry a sign, `0x`/`0o`/`0b` literals are read in their radix and decimal
/// literals may carry a sign, a fraction and an exponent. Anything else is not
/// a number and coerces to `0`.
///
/// ```
/// use dotpath::to_integer;
///
/// assert_eq!(to_integer("-1"), -1.0);
/// assert_eq!(to_integer(" 2.9 "), 2.0);
/// assert_eq!(to_integer("0x10"), 16.0);
/// assert_eq!(to_integer("foo"), 0.0);
/// ```
#[must_use]
pub fn to_integer(segment: &str) -> f64 {
    let n = to_number(segment);
    if n.is_nan() { 0.0 } else { trunc(n) }
}

/// Every `f64` at or beyond 2^52 in magnitude is already integral.
const INTEGRAL_BOUND: f64 = 4_503_599_627_370_496.0;

/// Rounds toward zero. `f64::trunc` lives in `std`, so this goes through an
/// integer cast, which is exact below [`INTEGRAL_BOUND`].
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss, clippy::float_cmp)]
fn trunc(x: f64) -> f64 {
    if !(-INTEGRAL_BOUND..INTEGRAL_BOUND).contains(&x) {
        // NaN, infinities and large magnitudes
        return x;
    }
    let t = x as i64 as f64;
    if t == 0.0 && x.is_sign_negative() { -0.0 } else { t }
}

fn to_number(segment: &str) -> f64 {
    let s = segment.trim();
    if s.is_empty() {
        return 0.0;
    }
    match s {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }

    let radix = match s.get(..2) {
        Some("0x" | "0X") => Some(16),
        Some("0o" | "0O") => Some(8),
        Some("0b" | "0B") => Some(2),
        _ => None,
    };
    if let Some(radix) = radix {
        return parse_radix(&s[2..], radix);
    }

    // `f64::from_str` also accepts "inf" and "nan" spellings, which are not
    // numbers here.
    let digits = s.strip_prefix(['+', '-']).unwrap_or(s);
    if !digits.starts_with(|c: char| c.is_ascii_digit() || c == '.') {
        return f64::NAN;
    }
    s.parse::<f64>().unwrap_or(f64::NAN)
}

fn parse_radix(digits: &str, radix: u32) -> f64 {
    if digits.is_empty() {
        return f64::NAN;
    }
    let mut acc = 0.0_f64;
    for c in digits.chars() {
        let Some(d) = c.to_digit(radix) else {
            return f64::NAN;
        };
        acc = acc * f64::from(radix) + f64::from(d);
    }
    acc
}

/// Maps `raw` onto `[0, length)`, counting negative values from the end.
///
/// `raw` is truncated toward zero first (`NaN` counts as `0`). Returns `None`
/// when the result falls outside `-length..length`.
///
/// ```
/// use dotpath::normalize_index;
///
/// assert_eq!(normalize_index(-1.0, 3), Some(2));
/// assert_eq!(normalize_index(1.7, 3), Some(1));
/// assert_eq!(normalize_index(3.0, 3), None);
/// assert_eq!(normalize_index(-4.0, 3), None);
/// ```
#[must_use]
#[allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
pub fn normalize_index(raw: f64, length: usize) -> Option<usize> {
    let i = if raw.is_nan() { 0.0 } else { trunc(raw) };
    let len = length as f64;
    if i < -len || i >= len {
        return None;
    }
    Some(if i < 0.0 { (i + len) as usize } else { i as usize })
}
