//! Terminal progress bar for column scans.

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use numconv_common::DecimalSeparator;
use numconv_model::ColumnOutcome;
use numconv_transform::ProgressReporter;

const BAR_TEMPLATE: &str = "{spinner:.green} [{elapsed_precise}] {bar:40.cyan/blue} {pos:>5}/{len:5} columns {msg}";

/// Progress bar advanced once per scanned column.
///
/// Draws to stderr and stays invisible when stderr is not a terminal.
pub struct BarProgress {
    bar: ProgressBar,
}

impl BarProgress {
    pub fn new() -> Self {
        let bar = ProgressBar::new(0);
        let style = ProgressStyle::with_template(BAR_TEMPLATE)
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▓▒░  ");
        bar.set_style(style);
        Self { bar }
    }

    /// A reporter that never draws.
    pub fn hidden() -> Self {
        Self {
            bar: ProgressBar::hidden(),
        }
    }

    /// Removes the bar from the terminal.
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }

    /// Columns reported so far.
    pub fn position(&self) -> u64 {
        self.bar.position()
    }
}

impl Default for BarProgress {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressReporter for BarProgress {
    fn on_scan_started(&mut self, total_columns: usize) {
        self.bar.set_length(total_columns as u64);
        self.bar.set_position(0);
        self.bar.enable_steady_tick(Duration::from_millis(100));
    }

    fn on_column_processed(&mut self, column: &str, _outcome: &ColumnOutcome) {
        self.bar.set_message(column.to_string());
        self.bar.inc(1);
    }

    fn on_nothing_to_convert(&mut self) {
        self.bar.println("  no text column holds numbers");
    }

    fn on_columns_converted(&mut self, columns: &[String], separator: DecimalSeparator) {
        self.bar.println(format!(
            "  ✓ {} column(s) converted ({separator} decimal): {}",
            columns.len(),
            columns.join(", ")
        ));
    }
}
