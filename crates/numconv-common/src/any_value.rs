//! Polars `AnyValue` helpers.

use polars::prelude::AnyValue;

/// Borrows the text of a string cell; `None` for nulls and every other type.
///
/// # Examples
///
/// ```
/// use polars::prelude::AnyValue;
/// use numconv_common::any_as_text;
///
/// assert_eq!(any_as_text(&AnyValue::String("1,5")), Some("1,5"));
/// assert_eq!(any_as_text(&AnyValue::Null), None);
/// assert_eq!(any_as_text(&AnyValue::Int32(42)), None);
/// ```
pub fn any_as_text<'a>(value: &'a AnyValue<'_>) -> Option<&'a str> {
    match value {
        AnyValue::String(s) => Some(*s),
        AnyValue::StringOwned(s) => Some(s.as_str()),
        _ => None,
    }
}
