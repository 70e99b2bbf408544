//! CSV file writing.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use polars::prelude::{CsvWriter, DataFrame, SerWriter};
use tracing::info;

use super::CsvOptions;
use crate::error::{IngestError, Result};

/// Writes `df` to `path` with a header row, replacing any existing file.
///
/// Missing values are written as empty fields.
pub fn write_csv_table(df: &mut DataFrame, path: &Path, options: &CsvOptions) -> Result<()> {
    let file = File::create(path).map_err(|e| IngestError::FileWrite {
        path: path.to_path_buf(),
        source: e,
    })?;

    CsvWriter::new(BufWriter::new(file))
        .include_header(true)
        .with_separator(options.separator)
        .finish(df)
        .map_err(|e| IngestError::CsvWrite {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    info!(
        path = %path.display(),
        rows = df.height(),
        columns = df.width(),
        "wrote CSV"
    );
    Ok(())
}
