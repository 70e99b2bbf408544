//! In-place cast of text columns to `Float64`.

use numconv_common::{DecimalSeparator, parse_decimal};
use numconv_model::Result;
use polars::prelude::{Column, DataFrame, StringChunked};
use tracing::{debug, warn};

/// Replaces each named text column of `table` with a `Float64` column.
///
/// Nulls and empty strings become missing values. With
/// [`DecimalSeparator::Comma`] commas are read as decimal points. Column
/// position, row count and row order are preserved.
///
/// Values that fail to parse also become missing; they are counted, logged,
/// and the total over all columns is returned. Columns picked by the scanner
/// only contain such values beyond the sampled rows.
pub fn cast_columns_to_numeric(
    table: &mut DataFrame,
    columns: &[String],
    separator: DecimalSeparator,
) -> Result<usize> {
    let mut coerced_total = 0;

    for name in columns {
        let (values, coerced) = parse_text_column(table.column(name)?.str()?, separator);
        if coerced > 0 {
            warn!(
                column = %name,
                coerced,
                decimal = %separator,
                "unparseable values set to missing"
            );
        }
        table.with_column(Column::new(name.as_str().into(), values))?;
        debug!(column = %name, decimal = %separator, "column cast to numeric");
        coerced_total += coerced;
    }

    Ok(coerced_total)
}

/// Parses every cell, returning the values and how many non-empty cells failed.
fn parse_text_column(
    text: &StringChunked,
    separator: DecimalSeparator,
) -> (Vec<Option<f64>>, usize) {
    let mut coerced = 0usize;
    let values = text
        .iter()
        .map(|cell| match cell {
            None | Some("") => None,
            Some(raw) => {
                let parsed = parse_decimal(raw, separator);
                if parsed.is_none() {
                    coerced += 1;
                }
                parsed
            }
        })
        .collect();
    (values, coerced)
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::prelude::{DataType, df};

    #[test]
    fn test_cast_direct_column() {
        let mut df = df! {
            "v" => &[Some("1.5"), None, Some(""), Some("-2")],
        }
        .unwrap();

        let coerced =
            cast_columns_to_numeric(&mut df, &["v".to_string()], DecimalSeparator::Point).unwrap();

        assert_eq!(coerced, 0);
        let v = df.column("v").unwrap().f64().unwrap();
        assert_eq!(v.get(0), Some(1.5));
        assert_eq!(v.get(1), None);
        assert_eq!(v.get(2), None);
        assert_eq!(v.get(3), Some(-2.0));
    }

    #[test]
    fn test_cast_comma_column_counts_failures() {
        let mut df = df! {
            "v" => &["1,5", "2", "oops"],
        }
        .unwrap();

        let coerced =
            cast_columns_to_numeric(&mut df, &["v".to_string()], DecimalSeparator::Comma).unwrap();

        assert_eq!(coerced, 1);
        let v = df.column("v").unwrap().f64().unwrap();
        assert_eq!(v.get(0), Some(1.5));
        assert_eq!(v.get(1), Some(2.0));
        assert_eq!(v.get(2), None);
    }

    #[test]
    fn test_cast_keeps_column_position() {
        let mut df = df! {
            "a" => &["x", "y"],
            "b" => &["1", "2"],
            "c" => &["z", "w"],
        }
        .unwrap();

        cast_columns_to_numeric(&mut df, &["b".to_string()], DecimalSeparator::Point).unwrap();

        let names: Vec<String> = df
            .get_column_names()
            .iter()
            .map(|name| name.to_string())
            .collect();
        assert_eq!(names, vec!["a", "b", "c"]);
        assert_eq!(df.column("b").unwrap().dtype(), &DataType::Float64);
        assert_eq!(df.column("a").unwrap().dtype(), &DataType::String);
    }

    #[test]
    fn test_cast_unknown_column_fails() {
        let mut df = df! { "a" => &["1"] }.unwrap();
        assert!(
            cast_columns_to_numeric(&mut df, &["zz".to_string()], DecimalSeparator::Point)
                .is_err()
        );
    }
}
