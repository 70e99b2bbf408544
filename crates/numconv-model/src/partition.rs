//! Column partition produced by a scan.

use serde::{Deserialize, Serialize};

use crate::classification::Classification;

/// Columns to convert, split by the decimal format they were detected with.
///
/// The two lists are disjoint and keep the order in which columns were
/// scanned.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnPartition {
    /// Columns that parse as plain decimals.
    pub direct: Vec<String>,
    /// Columns that parse once commas are read as decimal points.
    pub normalized: Vec<String>,
}

impl ColumnPartition {
    pub fn new() -> Self {
        Self::default()
    }

    /// Files `column` under the list matching `classification`.
    ///
    /// `NotNumeric` columns are ignored, and a column already present in
    /// either list is not added again.
    pub fn insert(&mut self, column: impl Into<String>, classification: Classification) {
        let column = column.into();
        if self.contains(&column) {
            return;
        }
        match classification {
            Classification::DirectNumeric => self.direct.push(column),
            Classification::NormalizedNumeric => self.normalized.push(column),
            Classification::NotNumeric => {}
        }
    }

    pub fn contains(&self, column: &str) -> bool {
        self.direct.iter().chain(&self.normalized).any(|c| c == column)
    }

    /// True when neither list has a column.
    pub fn is_empty(&self) -> bool {
        self.direct.is_empty() && self.normalized.is_empty()
    }

    /// Total number of columns to convert.
    pub fn len(&self) -> usize {
        self.direct.len() + self.normalized.len()
    }
}
