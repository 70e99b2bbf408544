//! Classification of text samples and per-column scan outcomes.

use std::fmt;

use numconv_common::DecimalSeparator;
use polars::prelude::DataType;
use serde::{Deserialize, Serialize};

/// How a sample of text values reads as numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Classification {
    /// Every value parses as a plain decimal as written.
    DirectNumeric,
    /// Every value parses once commas are read as decimal points.
    NormalizedNumeric,
    /// At least one value parses under neither format.
    NotNumeric,
}

impl Classification {
    /// Separator the cast must use for this classification, if any.
    pub fn decimal_separator(self) -> Option<DecimalSeparator> {
        match self {
            Self::DirectNumeric => Some(DecimalSeparator::Point),
            Self::NormalizedNumeric => Some(DecimalSeparator::Comma),
            Self::NotNumeric => None,
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DirectNumeric => write!(f, "numeric"),
            Self::NormalizedNumeric => write!(f, "numeric (decimal comma)"),
            Self::NotNumeric => write!(f, "not numeric"),
        }
    }
}

/// Storage kind of a column, read from its dtype before any sampling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnKind {
    Text,
    Numeric,
    Other,
}

impl ColumnKind {
    /// Maps a Polars dtype onto the three kinds the scanner distinguishes.
    ///
    /// # Examples
    ///
    /// ```
    /// use numconv_model::ColumnKind;
    /// use polars::prelude::DataType;
    ///
    /// assert_eq!(ColumnKind::from_dtype(&DataType::String), ColumnKind::Text);
    /// assert_eq!(ColumnKind::from_dtype(&DataType::Float64), ColumnKind::Numeric);
    /// assert_eq!(ColumnKind::from_dtype(&DataType::Boolean), ColumnKind::Other);
    /// ```
    pub fn from_dtype(dtype: &DataType) -> Self {
        match dtype {
            DataType::String => Self::Text,
            DataType::Int8
            | DataType::Int16
            | DataType::Int32
            | DataType::Int64
            | DataType::UInt8
            | DataType::UInt16
            | DataType::UInt32
            | DataType::UInt64
            | DataType::Float32
            | DataType::Float64 => Self::Numeric,
            _ => Self::Other,
        }
    }
}

impl fmt::Display for ColumnKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Numeric => write!(f, "numeric"),
            Self::Other => write!(f, "other"),
        }
    }
}

/// What the scanner decided for one column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ColumnOutcome {
    /// Column is not text-typed; nothing to detect.
    NotText { kind: ColumnKind },
    /// Column is text but has no non-empty values to sample.
    EmptySample,
    /// Column was sampled and classified.
    Classified { classification: Classification },
}

impl ColumnOutcome {
    /// Storage kind of the scanned column.
    pub fn kind(self) -> ColumnKind {
        match self {
            Self::NotText { kind } => kind,
            Self::EmptySample | Self::Classified { .. } => ColumnKind::Text,
        }
    }

    pub fn classification(self) -> Option<Classification> {
        match self {
            Self::Classified { classification } => Some(classification),
            Self::NotText { .. } | Self::EmptySample => None,
        }
    }
}

impl fmt::Display for ColumnOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotText { kind } => write!(f, "skipped ({kind})"),
            Self::EmptySample => write!(f, "skipped (no values)"),
            Self::Classified { classification } => write!(f, "{classification}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decimal_separator_per_classification() {
        assert_eq!(
            Classification::DirectNumeric.decimal_separator(),
            Some(DecimalSeparator::Point)
        );
        assert_eq!(
            Classification::NormalizedNumeric.decimal_separator(),
            Some(DecimalSeparator::Comma)
        );
        assert_eq!(Classification::NotNumeric.decimal_separator(), None);
    }

    #[test]
    fn test_outcome_classification() {
        let outcome = ColumnOutcome::Classified {
            classification: Classification::NormalizedNumeric,
        };
        assert_eq!(
            outcome.classification(),
            Some(Classification::NormalizedNumeric)
        );
        assert_eq!(ColumnOutcome::EmptySample.classification(), None);
        assert_eq!(outcome.kind(), ColumnKind::Text);
        assert_eq!(
            ColumnOutcome::NotText {
                kind: ColumnKind::Other
            }
            .kind(),
            ColumnKind::Other
        );
    }

    #[test]
    fn test_outcome_display() {
        let outcome = ColumnOutcome::NotText {
            kind: ColumnKind::Numeric,
        };
        assert_eq!(outcome.to_string(), "skipped (numeric)");
        assert_eq!(
            ColumnOutcome::Classified {
                classification: Classification::DirectNumeric
            }
            .to_string(),
            "numeric"
        );
    }
}
