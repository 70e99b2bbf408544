//! Column scanning and partitioning.
//!
//! The scanner walks the requested columns in order. Text columns get a
//! bounded sample of their first non-empty values, which is classified; the
//! column then lands in the direct or normalized list of the
//! [`ColumnPartition`], or in neither. Cost per column is bounded by the
//! sample size, not by the row count.

use numconv_model::{ColumnKind, ColumnOutcome, ColumnPartition, ColumnReport, Result};
use polars::prelude::{Column, DataFrame, StringChunked};
use tracing::{debug, trace};

use crate::classifier::classify_text;
use crate::progress::ProgressReporter;

/// Outcome of a scan: per-column decisions plus the resulting partition.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanResult {
    /// One entry per scanned column, in scan order.
    pub columns: Vec<ColumnReport>,
    pub partition: ColumnPartition,
}

/// Samples text columns and sorts them by decimal format.
#[derive(Debug, Clone, Copy)]
pub struct ColumnScanner {
    sample_size: usize,
}

impl ColumnScanner {
    /// Creates a scanner drawing at most `sample_size` values per column.
    pub fn new(sample_size: usize) -> Self {
        Self { sample_size }
    }

    /// Scans `columns` of `table` and returns the conversion partition.
    ///
    /// Column names must exist in `table`; resolve them first with
    /// [`resolve_columns`](crate::validate::resolve_columns).
    pub fn scan(
        &self,
        table: &DataFrame,
        columns: &[String],
        progress: &mut dyn ProgressReporter,
    ) -> Result<ColumnPartition> {
        Ok(self.scan_detailed(table, columns, progress)?.partition)
    }

    /// Like [`scan`](Self::scan), keeping the outcome of every column.
    pub fn scan_detailed(
        &self,
        table: &DataFrame,
        columns: &[String],
        progress: &mut dyn ProgressReporter,
    ) -> Result<ScanResult> {
        progress.on_scan_started(columns.len());

        let mut result = ScanResult::default();
        for name in columns {
            let outcome = self.scan_column(table.column(name)?)?;
            debug!(column = %name, outcome = %outcome, "column scanned");

            if let Some(classification) = outcome.classification() {
                result.partition.insert(name.as_str(), classification);
            }
            progress.on_column_processed(name, &outcome);
            result.columns.push(ColumnReport {
                name: name.clone(),
                outcome,
            });
        }

        Ok(result)
    }

    /// Decides the outcome for a single column.
    pub fn scan_column(&self, column: &Column) -> Result<ColumnOutcome> {
        let kind = ColumnKind::from_dtype(column.dtype());
        if kind != ColumnKind::Text {
            return Ok(ColumnOutcome::NotText { kind });
        }

        let sample = draw_sample(column.str()?, self.sample_size);
        trace!(column = %column.name(), sampled = sample.len(), "sample drawn");
        if sample.is_empty() {
            return Ok(ColumnOutcome::EmptySample);
        }

        let classification = classify_text(&sample)?;
        Ok(ColumnOutcome::Classified { classification })
    }
}

/// Takes up to `size` values from `values` in row order, skipping nulls and
/// empty strings.
///
/// Stops reading as soon as the sample is full.
pub fn draw_sample(values: &StringChunked, size: usize) -> Vec<&str> {
    values
        .iter()
        .flatten()
        .filter(|value| !value.is_empty())
        .take(size)
        .collect()
}
