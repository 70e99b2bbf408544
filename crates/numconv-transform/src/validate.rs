//! Request validation run before any column is scanned.
//!
//! - [`to_table`] / [`validate_table`]: the input must be a non-empty table
//! - [`resolve_columns`]: `auto` or an explicit list of existing columns
//! - [`validate_sample_size`]: positive, clamped to the row count

use std::collections::HashSet;

use numconv_model::{ColumnSelector, ConvertError, Result};
use polars::prelude::{Column, DataFrame};

/// Tabular input accepted by [`to_table`].
#[derive(Debug, Clone)]
pub enum TableSource {
    /// An existing DataFrame, used as is.
    Frame(DataFrame),
    /// Named text columns.
    Columns(Vec<(String, Vec<Option<String>>)>),
    /// A header row plus records; every record must have one field per header.
    Records {
        headers: Vec<String>,
        rows: Vec<Vec<Option<String>>>,
    },
}

impl From<DataFrame> for TableSource {
    fn from(df: DataFrame) -> Self {
        Self::Frame(df)
    }
}

/// Coerces `source` into a validated DataFrame.
///
/// # Errors
///
/// Returns [`ConvertError::InvalidInputKind`] when the input has no columns or
/// rows, blank or duplicate column names, or records and columns of unequal
/// length.
pub fn to_table(source: TableSource) -> Result<DataFrame> {
    let df = match source {
        TableSource::Frame(df) => df,
        TableSource::Columns(columns) => frame_from_columns(columns)?,
        TableSource::Records { headers, rows } => {
            let width = headers.len();
            let mut columns: Vec<Vec<Option<String>>> = vec![Vec::with_capacity(rows.len()); width];
            for (row_idx, row) in rows.into_iter().enumerate() {
                if row.len() != width {
                    return Err(ConvertError::invalid_input(format!(
                        "record {row_idx} has {} fields, expected {width}",
                        row.len()
                    )));
                }
                for (column, cell) in columns.iter_mut().zip(row) {
                    column.push(cell);
                }
            }
            frame_from_columns(headers.into_iter().zip(columns).collect())?
        }
    };
    validate_table(&df)?;
    Ok(df)
}

fn frame_from_columns(columns: Vec<(String, Vec<Option<String>>)>) -> Result<DataFrame> {
    let mut seen = HashSet::new();
    let mut height = None;
    let mut built = Vec::with_capacity(columns.len());

    for (name, values) in columns {
        if !seen.insert(name.clone()) {
            return Err(ConvertError::invalid_input(format!(
                "duplicate column name '{name}'"
            )));
        }
        match height {
            None => height = Some(values.len()),
            Some(expected) if expected != values.len() => {
                return Err(ConvertError::invalid_input(format!(
                    "column '{name}' has {} values, expected {expected}",
                    values.len()
                )));
            }
            Some(_) => {}
        }
        built.push(Column::new(name.as_str().into(), values));
    }

    Ok(DataFrame::new(built)?)
}

/// Checks that `table` is something the converter can work on.
///
/// # Errors
///
/// Returns [`ConvertError::InvalidInputKind`] for a table with no columns, no
/// rows, or a blank column name.
pub fn validate_table(table: &DataFrame) -> Result<()> {
    if table.width() == 0 {
        return Err(ConvertError::invalid_input("table has no columns"));
    }
    if table.height() == 0 {
        return Err(ConvertError::invalid_input("table has no rows"));
    }
    if let Some(idx) = table
        .get_column_names()
        .iter()
        .position(|name| name.trim().is_empty())
    {
        return Err(ConvertError::invalid_input(format!(
            "column {idx} has a blank name"
        )));
    }
    Ok(())
}

/// Resolves `selector` into the ordered list of columns to scan.
///
/// `Auto` yields every column in table order. An explicit list keeps its own
/// order with duplicates dropped.
///
/// # Errors
///
/// Returns [`ConvertError::InvalidColumnName`] for the first explicit name
/// that is not a column of `table`.
pub fn resolve_columns(table: &DataFrame, selector: &ColumnSelector) -> Result<Vec<String>> {
    match selector {
        ColumnSelector::Auto => Ok(table
            .get_column_names()
            .iter()
            .map(|name| name.to_string())
            .collect()),
        ColumnSelector::Explicit(names) => {
            let mut seen = HashSet::new();
            let mut resolved = Vec::with_capacity(names.len());
            for name in names {
                if table.get_column_index(name).is_none() {
                    return Err(ConvertError::InvalidColumnName {
                        column: name.clone(),
                    });
                }
                if seen.insert(name.as_str()) {
                    resolved.push(name.clone());
                }
            }
            Ok(resolved)
        }
    }
}

/// Validates the requested sample size and clamps it to the row count.
///
/// # Errors
///
/// Returns [`ConvertError::InvalidParameterRange`] when `requested` is zero.
pub fn validate_sample_size(table: &DataFrame, requested: usize) -> Result<usize> {
    if requested == 0 {
        return Err(ConvertError::InvalidParameterRange {
            parameter: "sample_size",
            value: requested.to_string(),
            reason: "must be a positive integer",
        });
    }
    Ok(requested.min(table.height()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::prelude::df;

    fn cells(values: &[&str]) -> Vec<Option<String>> {
        values
            .iter()
            .map(|v| (!v.is_empty()).then(|| (*v).to_string()))
            .collect()
    }

    #[test]
    fn test_to_table_from_records() {
        let df = to_table(TableSource::Records {
            headers: vec!["a".to_string(), "b".to_string()],
            rows: vec![cells(&["1", "x"]), cells(&["", "y"])],
        })
        .unwrap();

        assert_eq!(df.height(), 2);
        assert_eq!(df.width(), 2);
        let a = df.column("a").unwrap().str().unwrap();
        assert_eq!(a.get(0), Some("1"));
        assert_eq!(a.get(1), None);
    }

    #[test]
    fn test_to_table_rejects_ragged_records() {
        let err = to_table(TableSource::Records {
            headers: vec!["a".to_string(), "b".to_string()],
            rows: vec![cells(&["1", "x"]), cells(&["2"])],
        })
        .unwrap_err();

        assert_eq!(
            err,
            ConvertError::invalid_input("record 1 has 1 fields, expected 2")
        );
    }

    #[test]
    fn test_to_table_rejects_unequal_columns() {
        let err = to_table(TableSource::Columns(vec![
            ("a".to_string(), cells(&["1", "2"])),
            ("b".to_string(), cells(&["1"])),
        ]))
        .unwrap_err();
        assert!(matches!(err, ConvertError::InvalidInputKind { .. }));
    }

    #[test]
    fn test_to_table_rejects_duplicate_names() {
        let err = to_table(TableSource::Columns(vec![
            ("a".to_string(), cells(&["1"])),
            ("a".to_string(), cells(&["2"])),
        ]))
        .unwrap_err();
        assert!(err.to_string().contains("duplicate column name 'a'"));
    }

    #[test]
    fn test_to_table_rejects_empty_input() {
        assert!(matches!(
            to_table(TableSource::Columns(Vec::new())),
            Err(ConvertError::InvalidInputKind { .. })
        ));
        assert!(matches!(
            to_table(TableSource::Records {
                headers: vec!["a".to_string()],
                rows: Vec::new(),
            }),
            Err(ConvertError::InvalidInputKind { .. })
        ));
    }

    #[test]
    fn test_to_table_accepts_frame() {
        let df = df! { "a" => &["1"] }.unwrap();
        let table = to_table(df.clone().into()).unwrap();
        assert!(table.equals_missing(&df));
    }

    #[test]
    fn test_validate_table_blank_name() {
        let df = df! { " " => &["1"] }.unwrap();
        assert_eq!(
            validate_table(&df),
            Err(ConvertError::invalid_input("column 0 has a blank name"))
        );
    }

    #[test]
    fn test_resolve_auto_uses_table_order() {
        let df = df! { "z" => &["1"], "a" => &["2"] }.unwrap();
        assert_eq!(
            resolve_columns(&df, &ColumnSelector::Auto).unwrap(),
            vec!["z", "a"]
        );
    }

    #[test]
    fn test_resolve_explicit_keeps_order_and_dedupes() {
        let df = df! { "a" => &["1"], "b" => &["2"], "c" => &["3"] }.unwrap();
        let selector = ColumnSelector::explicit(["c", "a", "c"]);
        assert_eq!(resolve_columns(&df, &selector).unwrap(), vec!["c", "a"]);
    }

    #[test]
    fn test_resolve_explicit_unknown_column() {
        let df = df! { "a" => &["1"] }.unwrap();
        let selector = ColumnSelector::explicit(["a", "missing"]);
        assert_eq!(
            resolve_columns(&df, &selector),
            Err(ConvertError::InvalidColumnName {
                column: "missing".to_string()
            })
        );
    }

    #[test]
    fn test_validate_sample_size() {
        let df = df! { "a" => &["1", "2", "3"] }.unwrap();
        assert_eq!(validate_sample_size(&df, 30).unwrap(), 3);
        assert_eq!(validate_sample_size(&df, 2).unwrap(), 2);
        assert!(matches!(
            validate_sample_size(&df, 0),
            Err(ConvertError::InvalidParameterRange {
                parameter: "sample_size",
                ..
            })
        ));
    }
}
