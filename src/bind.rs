//! Typed coercion helpers for raw field text
//!
//! The parser always delivers fields as raw text; converting them into
//! numbers, booleans, or domain enums is the consumer's job. This module
//! carries the conversions a typical [`RowSink`](crate::RowSink)
//! implementation needs when binding rows onto a struct.

/// Conversion from raw field text into a typed value
///
/// Returns `None` when the text does not convert. Consumers can implement
/// this for their own types (a domain enum, for instance) and bind fields
/// uniformly through [`parse_field`].
pub trait FromField: Sized {
    /// Convert field text into `Self`, or `None` if it does not parse
    fn from_field(text: &str) -> Option<Self>;
}

/// Parse field text into `T`
///
/// # Examples
///
/// ```
/// use csvpush::bind::parse_field;
///
/// assert_eq!(parse_field::<i32>("42"), Some(42));
/// assert_eq!(parse_field::<f32>("1.5"), Some(1.5));
/// assert_eq!(parse_field::<bool>("YES"), Some(true));
/// assert_eq!(parse_field::<i32>("forty-two"), None);
/// ```
pub fn parse_field<T: FromField>(text: &str) -> Option<T> {
    T::from_field(text)
}

impl FromField for String {
    fn from_field(text: &str) -> Option<Self> {
        Some(text.to_string())
    }
}

macro_rules! from_field_via_from_str {
    ($($ty:ty),* $(,)?) => {
        $(
            impl FromField for $ty {
                fn from_field(text: &str) -> Option<Self> {
                    text.parse().ok()
                }
            }
        )*
    };
}

from_field_via_from_str!(u8, i8, u16, i16, u32, i32, u64, i64, usize, isize, f32, f64);

impl FromField for bool {
    /// Recognizes `y`/`t`/`yes`/`true` and `n`/`f`/`no`/`false` in any
    /// case, then falls back to integer parsing with non-zero meaning true
    fn from_field(text: &str) -> Option<Self> {
        match text.trim().to_ascii_uppercase().as_str() {
            "Y" | "T" | "YES" | "TRUE" => Some(true),
            "N" | "F" | "NO" | "FALSE" => Some(false),
            other => other.parse::<i64>().ok().map(|n| n != 0),
        }
    }
}
