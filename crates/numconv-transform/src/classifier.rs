//! Format classification of text samples.
//!
//! A sample is parsed twice, once as written and once with commas read as
//! decimal points. Each attempt yields a failure mask (one flag per value).
//! A format is accepted only when its mask equals the mask of the raw sample,
//! that is when it introduces no failure at all. The comparison is
//! structural: a single unparseable value disqualifies the format for the
//! whole column, however many other values parsed.
//!
//! Plain decimals win ties, so a column of integers is never comma-normalized.

use numconv_common::{DecimalSeparator, any_as_text, parse_decimal};
use numconv_model::{Classification, ConvertError, Result};
use polars::prelude::AnyValue;

/// Classifies a sample of cell values.
///
/// # Errors
///
/// Returns [`ConvertError::InvalidInputKind`] if the sample is empty or holds
/// anything other than text (nulls included).
///
/// # Examples
///
/// ```
/// use numconv_model::Classification;
/// use numconv_transform::classify;
/// use polars::prelude::AnyValue;
///
/// let sample = [AnyValue::String("1,2"), AnyValue::String("6")];
/// assert_eq!(classify(&sample).unwrap(), Classification::NormalizedNumeric);
///
/// assert!(classify(&[AnyValue::Int32(1)]).is_err());
/// ```
pub fn classify(sample: &[AnyValue<'_>]) -> Result<Classification> {
    let texts = sample
        .iter()
        .enumerate()
        .map(|(idx, value)| {
            any_as_text(value).ok_or_else(|| {
                ConvertError::invalid_input(format!(
                    "sample value at position {idx} is {}, expected text",
                    value.dtype()
                ))
            })
        })
        .collect::<Result<Vec<&str>>>()?;
    classify_text(&texts)
}

/// Classifies a sample of text values.
///
/// # Errors
///
/// Returns [`ConvertError::InvalidInputKind`] if the sample is empty.
pub fn classify_text<S: AsRef<str>>(sample: &[S]) -> Result<Classification> {
    if sample.is_empty() {
        return Err(ConvertError::invalid_input("cannot classify an empty sample"));
    }

    // Sample values are never missing, so the reference mask is all-false.
    let original = vec![false; sample.len()];

    if failure_mask(sample, DecimalSeparator::Point) == original {
        return Ok(Classification::DirectNumeric);
    }
    if failure_mask(sample, DecimalSeparator::Comma) == original {
        return Ok(Classification::NormalizedNumeric);
    }
    Ok(Classification::NotNumeric)
}

/// One flag per value: `true` where parsing with `separator` fails.
fn failure_mask<S: AsRef<str>>(sample: &[S], separator: DecimalSeparator) -> Vec<bool> {
    sample
        .iter()
        .map(|value| parse_decimal(value.as_ref(), separator).is_none())
        .collect()
}
