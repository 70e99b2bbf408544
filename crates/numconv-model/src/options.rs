//! Configuration options for numeric conversion.

use serde::{Deserialize, Serialize};

/// Default number of non-empty values sampled per column.
pub const DEFAULT_SAMPLE_SIZE: usize = 30;

/// Which columns a conversion run looks at.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnSelector {
    /// Every column in the table, in table order.
    #[default]
    Auto,
    /// Only the named columns, in the given order.
    Explicit(Vec<String>),
}

impl ColumnSelector {
    /// Builds an explicit selector from any list of names.
    pub fn explicit<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Explicit(names.into_iter().map(Into::into).collect())
    }
}

impl From<Vec<String>> for ColumnSelector {
    fn from(names: Vec<String>) -> Self {
        Self::Explicit(names)
    }
}

/// Options controlling a conversion run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConvertOptions {
    /// Columns to consider.
    pub columns: ColumnSelector,

    /// Maximum number of non-empty values sampled per column.
    ///
    /// Zero is rejected when the run starts; larger values are clamped to the
    /// table's row count.
    pub sample_size: usize,

    /// Deliver progress events to the reporter.
    pub verbose: bool,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            columns: ColumnSelector::Auto,
            sample_size: DEFAULT_SAMPLE_SIZE,
            verbose: true,
        }
    }
}

impl ConvertOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_columns(mut self, columns: ColumnSelector) -> Self {
        self.columns = columns;
        self
    }

    #[must_use]
    pub fn with_sample_size(mut self, sample_size: usize) -> Self {
        self.sample_size = sample_size;
        self
    }

    #[must_use]
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }
}
