//! Plain-decimal parsing with an optional decimal-comma variant.
//!
//! The accepted grammar is the usual one: optional sign, digits, optional
//! decimal point, optional exponent. Surrounding whitespace is ignored.
//! Spelled-out specials such as `inf` or `NaN` are rejected even though
//! `f64::from_str` would take them, and so are literals whose magnitude
//! overflows `f64` (`1e999`).

use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Decimal separator a text column is written with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DecimalSeparator {
    /// `1.5`
    #[default]
    Point,
    /// `1,5` (every comma is read as a decimal point).
    Comma,
}

impl fmt::Display for DecimalSeparator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Point => write!(f, "point"),
            Self::Comma => write!(f, "comma"),
        }
    }
}

/// Rewrites `value` so it can be read with the plain-decimal grammar.
///
/// With [`DecimalSeparator::Comma`] every `,` becomes `.`; the input is
/// borrowed unchanged when there is nothing to rewrite.
///
/// # Examples
///
/// ```
/// use numconv_common::{DecimalSeparator, normalize_decimal};
///
/// assert_eq!(normalize_decimal("1,5", DecimalSeparator::Comma), "1.5");
/// assert_eq!(normalize_decimal("1,5", DecimalSeparator::Point), "1,5");
/// assert_eq!(normalize_decimal("1,2,3", DecimalSeparator::Comma), "1.2.3");
/// ```
pub fn normalize_decimal(value: &str, separator: DecimalSeparator) -> Cow<'_, str> {
    match separator {
        DecimalSeparator::Comma if value.contains(',') => Cow::Owned(value.replace(',', ".")),
        _ => Cow::Borrowed(value),
    }
}

/// Parses `value` as a plain decimal number.
///
/// Returns `None` for empty or whitespace-only input, for anything outside
/// the sign/digits/point/exponent grammar and for values too large to be
/// finite.
///
/// # Examples
///
/// ```
/// use numconv_common::parse_plain_decimal;
///
/// assert_eq!(parse_plain_decimal("1.25"), Some(1.25));
/// assert_eq!(parse_plain_decimal(" -3e2 "), Some(-300.0));
/// assert_eq!(parse_plain_decimal("1,25"), None);
/// assert_eq!(parse_plain_decimal("inf"), None);
/// assert_eq!(parse_plain_decimal("1e999"), None);
/// ```
pub fn parse_plain_decimal(value: &str) -> Option<f64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    // The only letter the grammar allows is the exponent marker.
    if trimmed
        .chars()
        .any(|ch| ch.is_alphabetic() && !matches!(ch, 'e' | 'E'))
    {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Parses `value` as a decimal written with the given separator.
pub fn parse_decimal(value: &str, separator: DecimalSeparator) -> Option<f64> {
    parse_plain_decimal(&normalize_decimal(value, separator))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_parse_plain_decimal_accepts_grammar() {
        assert_eq!(parse_plain_decimal("1"), Some(1.0));
        assert_eq!(parse_plain_decimal("+1.5"), Some(1.5));
        assert_eq!(parse_plain_decimal("-0.25"), Some(-0.25));
        assert_eq!(parse_plain_decimal(".5"), Some(0.5));
        assert_eq!(parse_plain_decimal("5."), Some(5.0));
        assert_eq!(parse_plain_decimal("1e3"), Some(1000.0));
        assert_eq!(parse_plain_decimal("2.5E-1"), Some(0.25));
    }

    #[test]
    fn test_parse_plain_decimal_rejects_non_numbers() {
        assert_eq!(parse_plain_decimal(""), None);
        assert_eq!(parse_plain_decimal("   "), None);
        assert_eq!(parse_plain_decimal("abc"), None);
        assert_eq!(parse_plain_decimal("1,5"), None);
        assert_eq!(parse_plain_decimal("1.2.3"), None);
        assert_eq!(parse_plain_decimal("NaN"), None);
        assert_eq!(parse_plain_decimal("-infinity"), None);
        assert_eq!(parse_plain_decimal("1 000"), None);
        assert_eq!(parse_plain_decimal("e5"), None);
    }

    #[test]
    fn test_parse_plain_decimal_rejects_overflow() {
        assert_eq!(parse_plain_decimal("1e999"), None);
        assert_eq!(parse_plain_decimal("-1e999"), None);
        assert_eq!(parse_decimal("1,5e999", DecimalSeparator::Comma), None);
        // Underflow rounds to zero and stays finite.
        assert_eq!(parse_plain_decimal("1e-999"), Some(0.0));
    }

    #[test]
    fn test_parse_decimal_comma() {
        assert_eq!(parse_decimal("1,2", DecimalSeparator::Comma), Some(1.2));
        assert_eq!(parse_decimal("6", DecimalSeparator::Comma), Some(6.0));
        assert_eq!(parse_decimal("1,2", DecimalSeparator::Point), None);
        // Thousands grouping is not supported.
        assert_eq!(parse_decimal("1,234,5", DecimalSeparator::Comma), None);
    }

    #[test]
    fn test_normalize_decimal_borrows_when_unchanged() {
        assert!(matches!(
            normalize_decimal("12", DecimalSeparator::Comma),
            Cow::Borrowed(_)
        ));
        assert!(matches!(
            normalize_decimal("1,2", DecimalSeparator::Comma),
            Cow::Owned(_)
        ));
    }

    proptest! {
        #[test]
        fn comma_form_of_any_fraction_parses_only_with_comma(
            whole in 0u32..100_000,
            frac in 1u32..1000,
        ) {
            let text = format!("{whole},{frac}");
            let expected: f64 = format!("{whole}.{frac}").parse().unwrap();
            prop_assert_eq!(parse_decimal(&text, DecimalSeparator::Comma), Some(expected));
            prop_assert_eq!(parse_decimal(&text, DecimalSeparator::Point), None);
        }

        #[test]
        fn integers_parse_identically_with_either_separator(value in any::<i32>()) {
            let text = value.to_string();
            prop_assert_eq!(parse_decimal(&text, DecimalSeparator::Point), Some(f64::from(value)));
            prop_assert_eq!(parse_decimal(&text, DecimalSeparator::Comma), Some(f64::from(value)));
        }
    }
}
