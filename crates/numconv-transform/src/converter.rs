//! Conversion entry points.

use numconv_model::{Classification, ConversionReport, ConvertOptions, Result};
use polars::prelude::DataFrame;
use tracing::{debug, info, info_span};

use crate::cast::cast_columns_to_numeric;
use crate::progress::{NoProgress, ProgressReporter, TracingProgress};
use crate::scanner::ColumnScanner;
use crate::validate::{resolve_columns, validate_sample_size, validate_table};

/// Detects numeric text columns and casts them in place.
///
/// Every check runs before the first column is touched, so a rejected request
/// leaves the table exactly as it was.
#[derive(Debug, Clone, Default)]
pub struct NumericConverter {
    options: ConvertOptions,
}

impl NumericConverter {
    pub fn new(options: ConvertOptions) -> Self {
        Self { options }
    }

    /// Converts `table` and hands it back for chaining.
    pub fn convert<'t>(
        &self,
        table: &'t mut DataFrame,
        progress: &mut dyn ProgressReporter,
    ) -> Result<&'t mut DataFrame> {
        self.convert_with_report(table, progress)?;
        Ok(table)
    }

    /// Converts `table` and reports what was scanned and changed.
    ///
    /// Plain-decimal columns are cast first, then decimal-comma columns. When
    /// `verbose` is off no event reaches `progress`.
    ///
    /// # Errors
    ///
    /// - [`InvalidInputKind`](numconv_model::ConvertError::InvalidInputKind)
    ///   when the table is empty or has a blank column name
    /// - [`InvalidColumnName`](numconv_model::ConvertError::InvalidColumnName)
    ///   when an explicit column is missing
    /// - [`InvalidParameterRange`](numconv_model::ConvertError::InvalidParameterRange)
    ///   when the sample size is zero
    pub fn convert_with_report(
        &self,
        table: &mut DataFrame,
        progress: &mut dyn ProgressReporter,
    ) -> Result<ConversionReport> {
        let span = info_span!(
            "convert_numeric",
            rows = table.height(),
            columns = table.width()
        );
        let _guard = span.enter();

        let mut silent = NoProgress;
        let progress: &mut dyn ProgressReporter = if self.options.verbose {
            progress
        } else {
            &mut silent
        };

        let mut report = self.scan(table, progress)?;
        if report.partition.is_empty() {
            progress.on_nothing_to_convert();
            return Ok(report);
        }

        let partition = report.partition.clone();
        for (columns, classification) in [
            (&partition.direct, Classification::DirectNumeric),
            (&partition.normalized, Classification::NormalizedNumeric),
        ] {
            let Some(separator) = classification.decimal_separator() else {
                continue;
            };
            if columns.is_empty() {
                continue;
            }
            report.coerced_to_missing += cast_columns_to_numeric(table, columns, separator)?;
            progress.on_columns_converted(columns, separator);
        }

        info!(
            converted = report.converted_count(),
            direct = partition.direct.len(),
            normalized = partition.normalized.len(),
            coerced = report.coerced_to_missing,
            "numeric conversion complete"
        );
        Ok(report)
    }

    /// Runs validation and the scan without modifying `table`.
    pub fn inspect(
        &self,
        table: &DataFrame,
        progress: &mut dyn ProgressReporter,
    ) -> Result<ConversionReport> {
        let span = info_span!("inspect_numeric", rows = table.height(), columns = table.width());
        let _guard = span.enter();

        let mut silent = NoProgress;
        let progress: &mut dyn ProgressReporter = if self.options.verbose {
            progress
        } else {
            &mut silent
        };
        self.scan(table, progress)
    }

    fn scan(
        &self,
        table: &DataFrame,
        progress: &mut dyn ProgressReporter,
    ) -> Result<ConversionReport> {
        validate_table(table)?;
        let columns = resolve_columns(table, &self.options.columns)?;
        let sample_size = validate_sample_size(table, self.options.sample_size)?;
        debug!(columns = columns.len(), sample_size, "request validated");

        let scan = ColumnScanner::new(sample_size).scan_detailed(table, &columns, progress)?;
        Ok(ConversionReport {
            sample_size,
            columns: scan.columns,
            partition: scan.partition,
            coerced_to_missing: 0,
        })
    }
}

/// Converts the numeric text columns of `table` in place, logging progress
/// through `tracing`.
pub fn convert_numeric_columns(
    table: &mut DataFrame,
    options: &ConvertOptions,
) -> Result<ConversionReport> {
    let mut progress = TracingProgress::new();
    NumericConverter::new(options.clone()).convert_with_report(table, &mut progress)
}
