//! Summary of a conversion run.

use serde::{Deserialize, Serialize};

use crate::classification::ColumnOutcome;
use crate::partition::ColumnPartition;

/// Scan result for one column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnReport {
    pub name: String,
    #[serde(flatten)]
    pub outcome: ColumnOutcome,
}

/// What a conversion run looked at and what it changed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionReport {
    /// Effective sample size after clamping to the row count.
    pub sample_size: usize,
    /// One entry per scanned column, in scan order.
    pub columns: Vec<ColumnReport>,
    /// Columns converted, split by decimal format.
    pub partition: ColumnPartition,
    /// Non-empty cells outside the samples that failed to parse and became missing.
    pub coerced_to_missing: usize,
}

impl ConversionReport {
    /// Number of columns whose type changed.
    pub fn converted_count(&self) -> usize {
        self.partition.len()
    }

    /// Outcome recorded for `column`, if it was scanned.
    pub fn outcome(&self, column: &str) -> Option<ColumnOutcome> {
        self.columns
            .iter()
            .find(|report| report.name == column)
            .map(|report| report.outcome)
    }
}
