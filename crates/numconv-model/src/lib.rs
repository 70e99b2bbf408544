//! Data model for numeric column detection and conversion.
//!
//! Everything here is plain data: the three-way [`Classification`] of a text
//! sample, the per-column [`ColumnOutcome`] of a scan, the
//! [`ColumnPartition`] the converter consumes, the [`ConvertOptions`] that
//! drive a run, and the [`ConversionReport`] it produces.

pub mod classification;
pub mod error;
pub mod options;
pub mod partition;
pub mod report;

pub use classification::{Classification, ColumnKind, ColumnOutcome};
pub use error::{ConvertError, Result};
pub use options::{ColumnSelector, ConvertOptions, DEFAULT_SAMPLE_SIZE};
pub use partition::ColumnPartition;
pub use report::{ColumnReport, ConversionReport};
