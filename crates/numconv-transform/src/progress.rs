//! Progress callbacks for conversion runs.

use numconv_common::DecimalSeparator;
use numconv_model::ColumnOutcome;
use tracing::info;

/// Receives progress events from the scanner and the converter.
///
/// Only [`on_column_processed`](Self::on_column_processed) is required; it is
/// called exactly once per scanned column whatever the outcome.
pub trait ProgressReporter {
    /// A scan over `total_columns` columns is about to start.
    fn on_scan_started(&mut self, _total_columns: usize) {}

    /// `column` has been scanned.
    fn on_column_processed(&mut self, column: &str, outcome: &ColumnOutcome);

    /// The scan found no column to convert.
    fn on_nothing_to_convert(&mut self) {}

    /// `columns` were cast to numeric using `separator`.
    fn on_columns_converted(&mut self, _columns: &[String], _separator: DecimalSeparator) {}
}

/// Reporter that ignores every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoProgress;

impl ProgressReporter for NoProgress {
    fn on_column_processed(&mut self, _column: &str, _outcome: &ColumnOutcome) {}
}

/// Reporter that emits `tracing` events.
#[derive(Debug, Clone, Default)]
pub struct TracingProgress {
    total: usize,
    processed: usize,
}

impl TracingProgress {
    pub fn new() -> Self {
        Self::default()
    }

    /// Columns reported so far.
    pub fn processed(&self) -> usize {
        self.processed
    }
}

impl ProgressReporter for TracingProgress {
    fn on_scan_started(&mut self, total_columns: usize) {
        self.total = total_columns;
        self.processed = 0;
    }

    fn on_column_processed(&mut self, column: &str, outcome: &ColumnOutcome) {
        self.processed += 1;
        info!(
            column,
            outcome = %outcome,
            processed = self.processed,
            total = self.total,
            "column scanned"
        );
    }

    fn on_nothing_to_convert(&mut self) {
        info!("no text column needs a numeric conversion");
    }

    fn on_columns_converted(&mut self, columns: &[String], separator: DecimalSeparator) {
        if columns.is_empty() {
            return;
        }
        info!(
            columns = %columns.join(", "),
            count = columns.len(),
            decimal = %separator,
            "converted columns to numeric"
        );
    }
}
