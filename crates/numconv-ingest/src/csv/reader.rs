//! CSV file reading with every column kept as text.

use std::io::Cursor;
use std::path::Path;

use polars::prelude::{CsvParseOptions, CsvReadOptions, DataFrame, SerReader};
use tracing::{debug, info};

use super::CsvOptions;
use crate::error::{IngestError, Result};

/// Checks the byte order mark of `bytes` read from `path`.
///
/// Returns the length of a UTF-8 BOM to skip, or 0 when there is none. Any
/// other BOM (UTF-16 LE or BE) is rejected.
pub fn detect_bom(path: &Path, bytes: &[u8]) -> Result<usize> {
    match encoding_rs::Encoding::for_bom(bytes) {
        None => Ok(0),
        Some((encoding, len)) if encoding == encoding_rs::UTF_8 => Ok(len),
        Some((encoding, _)) => Err(IngestError::UnsupportedEncoding {
            path: path.to_path_buf(),
            encoding: encoding.name(),
        }),
    }
}

/// Reads a CSV file into a DataFrame of `String` columns.
///
/// The first row is the header. Schema inference is off so that values such
/// as `1,5` or `007` reach the converter exactly as written; empty fields
/// are read as nulls.
pub fn read_csv_table(path: &Path, options: &CsvOptions) -> Result<DataFrame> {
    let mut bytes = std::fs::read(path).map_err(|e| IngestError::from_read(path, e))?;

    let bom = detect_bom(path, &bytes)?;
    if bom > 0 {
        debug!(path = %path.display(), "skipping UTF-8 byte order mark");
        bytes.drain(..bom);
    }

    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Err(IngestError::EmptyCsv {
            path: path.to_path_buf(),
        });
    }

    let df = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(0))
        .with_parse_options(CsvParseOptions::default().with_separator(options.separator))
        .into_reader_with_file_handle(Cursor::new(bytes))
        .finish()
        .map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    info!(
        path = %path.display(),
        rows = df.height(),
        columns = df.width(),
        "loaded CSV"
    );
    Ok(df)
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::prelude::DataType;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_temp_csv(content: &[u8]) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content).unwrap();
        file
    }

    #[test]
    fn test_read_keeps_everything_as_text() {
        let file = create_temp_csv(b"id,amount,code\nA,1.5,007\nB,2,010\n");
        let df = read_csv_table(file.path(), &CsvOptions::default()).unwrap();

        assert_eq!(df.height(), 2);
        assert_eq!(df.width(), 3);
        for column in df.get_columns() {
            assert_eq!(column.dtype(), &DataType::String);
        }
        let code = df.column("code").unwrap().str().unwrap();
        assert_eq!(code.get(0), Some("007"));
    }

    #[test]
    fn test_read_empty_fields_are_null() {
        let file = create_temp_csv(b"a,b\n1,\n,2\n");
        let df = read_csv_table(file.path(), &CsvOptions::default()).unwrap();

        let b = df.column("b").unwrap().str().unwrap();
        assert_eq!(b.get(0), None);
        assert_eq!(b.get(1), Some("2"));
    }

    #[test]
    fn test_read_with_semicolon_separator() {
        let file = create_temp_csv(b"price;qty\n1,5;2\n3,25;4\n");
        let options = CsvOptions::default().with_separator(b';');
        let df = read_csv_table(file.path(), &options).unwrap();

        let price = df.column("price").unwrap().str().unwrap();
        assert_eq!(price.get(0), Some("1,5"));
        assert_eq!(price.get(1), Some("3,25"));
    }

    #[test]
    fn test_read_quoted_decimal_comma() {
        let file = create_temp_csv(b"id,price\nA,\"1,5\"\nB,\"2,75\"\n");
        let df = read_csv_table(file.path(), &CsvOptions::default()).unwrap();

        let price = df.column("price").unwrap().str().unwrap();
        assert_eq!(price.get(1), Some("2,75"));
    }

    #[test]
    fn test_read_with_utf8_bom() {
        let file = create_temp_csv("\u{feff}A,B\n1,2\n".as_bytes());
        let df = read_csv_table(file.path(), &CsvOptions::default()).unwrap();

        let names: Vec<String> = df
            .get_column_names()
            .iter()
            .map(|name| name.to_string())
            .collect();
        assert_eq!(names, vec!["A", "B"]);
    }

    #[test]
    fn test_read_rejects_utf16() {
        let file = create_temp_csv(&[0xFF, 0xFE, b'A', 0x00]);
        let result = read_csv_table(file.path(), &CsvOptions::default());
        assert!(matches!(
            result,
            Err(IngestError::UnsupportedEncoding {
                encoding: "UTF-16LE",
                ..
            })
        ));

        let file = create_temp_csv(&[0xFE, 0xFF, 0x00, b'A']);
        assert!(matches!(
            read_csv_table(file.path(), &CsvOptions::default()),
            Err(IngestError::UnsupportedEncoding {
                encoding: "UTF-16BE",
                ..
            })
        ));
    }

    #[test]
    fn test_read_empty_file() {
        let file = create_temp_csv(b"");
        let result = read_csv_table(file.path(), &CsvOptions::default());
        assert!(matches!(result, Err(IngestError::EmptyCsv { .. })));

        let file = create_temp_csv("\u{feff}\n".as_bytes());
        let result = read_csv_table(file.path(), &CsvOptions::default());
        assert!(matches!(result, Err(IngestError::EmptyCsv { .. })));
    }

    #[test]
    fn test_read_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = read_csv_table(&dir.path().join("nope.csv"), &CsvOptions::default());
        assert!(matches!(result, Err(IngestError::FileNotFound { .. })));
    }

    #[test]
    fn test_detect_bom() {
        let path = Path::new("x.csv");
        assert_eq!(detect_bom(path, b"a,b").unwrap(), 0);
        assert_eq!(detect_bom(path, &[0xEF, 0xBB, 0xBF, b'a']).unwrap(), 3);
        assert!(detect_bom(path, &[0xFF, 0xFE]).is_err());
    }
}
