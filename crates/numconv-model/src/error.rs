//! Error types for numeric conversion.

use thiserror::Error;

/// Errors raised while validating a conversion request.
///
/// Every variant except [`ConvertError::DataFrame`] is raised before any
/// column is scanned, so a failed call never leaves a table half converted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConvertError {
    /// Input is not a usable table, or a classifier sample is empty or non-text.
    #[error("invalid input: {reason}")]
    InvalidInputKind { reason: String },

    /// An explicitly selected column does not exist in the table.
    #[error("column '{column}' not found in table")]
    InvalidColumnName { column: String },

    /// A numeric parameter is outside its accepted range.
    #[error("invalid {parameter} value '{value}': {reason}")]
    InvalidParameterRange {
        parameter: &'static str,
        value: String,
        reason: &'static str,
    },

    /// Failed DataFrame operation.
    #[error("DataFrame operation failed: {message}")]
    DataFrame { message: String },
}

impl ConvertError {
    /// Shorthand for [`ConvertError::InvalidInputKind`].
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInputKind {
            reason: reason.into(),
        }
    }
}

impl From<polars::prelude::PolarsError> for ConvertError {
    fn from(err: polars::prelude::PolarsError) -> Self {
        Self::DataFrame {
            message: err.to_string(),
        }
    }
}

/// Result type for conversion operations.
pub type Result<T> = std::result::Result<T, ConvertError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ConvertError::InvalidColumnName {
            column: "price".to_string(),
        };
        assert_eq!(err.to_string(), "column 'price' not found in table");

        let err = ConvertError::InvalidParameterRange {
            parameter: "sample_size",
            value: "0".to_string(),
            reason: "must be positive",
        };
        assert_eq!(
            err.to_string(),
            "invalid sample_size value '0': must be positive"
        );
    }

    #[test]
    fn test_error_from_polars() {
        let polars_err = polars::prelude::PolarsError::ColumnNotFound("test".into());
        let err: ConvertError = polars_err.into();
        assert!(matches!(err, ConvertError::DataFrame { .. }));
    }
}
