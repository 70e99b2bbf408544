//! CSV reading and writing.

mod reader;
mod writer;

use serde::{Deserialize, Serialize};

pub use reader::{detect_bom, read_csv_table};
pub use writer::write_csv_table;

/// CSV dialect shared by reading and writing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CsvOptions {
    /// Field separator byte.
    pub separator: u8,
}

impl Default for CsvOptions {
    fn default() -> Self {
        Self { separator: b',' }
    }
}

impl CsvOptions {
    #[must_use]
    pub fn with_separator(mut self, separator: u8) -> Self {
        self.separator = separator;
        self
    }
}
