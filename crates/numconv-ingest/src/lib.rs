//! CSV ingestion for numeric column conversion.
//!
//! Files are loaded with every column typed as text so that the converter
//! sees values exactly as written, and written back once converted.
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use numconv_ingest::{CsvOptions, read_csv_table, write_csv_table};
//!
//! let options = CsvOptions::default().with_separator(b';');
//! let mut df = read_csv_table(Path::new("prices.csv"), &options)?;
//! write_csv_table(&mut df, Path::new("prices.numeric.csv"), &options)?;
//! # Ok::<(), numconv_ingest::IngestError>(())
//! ```

mod csv;
mod error;

// === Error Types ===
pub use error::{IngestError, Result};

// === CSV Reading and Writing ===
pub use csv::{CsvOptions, detect_bom, read_csv_table, write_csv_table};
