//! Numeric column detection and conversion.
//!
//! This crate decides, column by column, whether text values are numbers and
//! converts the ones that are:
//!
//! - **classifier**: three-way classification of a text sample
//!   (plain decimal, decimal comma, not numeric)
//! - **scanner**: bounded sampling of text columns and partitioning by format
//! - **converter**: validation, scan and in-place cast, in that order
//! - **cast**: the text-to-`Float64` column cast
//! - **validate**: table coercion, column resolution and sample-size checks
//! - **progress**: per-column progress callbacks
//!
//! # Example
//!
//! ```
//! use numconv_model::ConvertOptions;
//! use numconv_transform::convert_numeric_columns;
//! use polars::prelude::*;
//!
//! let mut df = df! {
//!     "id" => &["A", "B", "C"],
//!     "price" => &["1,5", "2", "3,25"],
//! }
//! .unwrap();
//!
//! convert_numeric_columns(&mut df, &ConvertOptions::default()).unwrap();
//!
//! assert_eq!(df.column("id").unwrap().dtype(), &DataType::String);
//! let price = df.column("price").unwrap().f64().unwrap();
//! assert_eq!(price.get(0), Some(1.5));
//! assert_eq!(price.get(2), Some(3.25));
//! ```

pub mod cast;
pub mod classifier;
pub mod converter;
pub mod progress;
pub mod scanner;
pub mod validate;

pub use cast::cast_columns_to_numeric;
pub use classifier::{classify, classify_text};
pub use converter::{NumericConverter, convert_numeric_columns};
pub use progress::{NoProgress, ProgressReporter, TracingProgress};
pub use scanner::{ColumnScanner, ScanResult, draw_sample};
pub use validate::{TableSource, resolve_columns, to_table, validate_sample_size, validate_table};
