//! Metadata table loading and writing
//!
//! A metadata table is an ordered sequence of [`Record`]s read from either a
//! CSV file (header row required) or a JSON Lines file. The table remembers
//! its source format and header so a subset of its rows can be written back
//! in exactly the same shape.
//!
//! # Formats
//!
//! - **CSV** (`.csv`): must contain an `image_path` column; empty cells are
//!   treated as missing values
//! - **JSON Lines** (`.jsonl`, `.ndjson`): one object per line with a string
//!   `image_path`; blank lines are skipped

mod error;
mod record;

pub use error::{DatasetError, Result};
pub use record::{IMAGE_PATH_COLUMN, Record, RecordFields, TEXT_COLUMNS};

use record::RawRow;
use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

/// Textual format of a metadata table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableFormat {
    /// Comma-separated values with a header row
    Csv,
    /// One JSON object per line
    JsonLines,
}

impl TableFormat {
    /// Detect the format from a file extension (case-insensitive)
    ///
    /// # Errors
    ///
    /// Returns `DatasetError::UnsupportedFormat` for unknown extensions.
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);

        match ext.as_deref() {
            Some("csv") => Ok(Self::Csv),
            Some("jsonl" | "ndjson") => Ok(Self::JsonLines),
            _ => Err(DatasetError::UnsupportedFormat(path.display().to_string())),
        }
    }
}

impl fmt::Display for TableFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Csv => write!(f, "CSV"),
            Self::JsonLines => write!(f, "JSON Lines"),
        }
    }
}

/// An ordered, immutable sequence of records
#[derive(Debug, Clone)]
pub struct MetadataTable {
    format: TableFormat,
    /// CSV header row (empty for JSON Lines)
    headers: csv::StringRecord,
    records: Vec<Record>,
}

impl MetadataTable {
    /// Load a table, detecting its format from the extension
    ///
    /// # Errors
    ///
    /// Returns `DatasetError` if the file cannot be read, has an unsupported
    /// extension, is malformed, or lacks the `image_path` column.
    pub fn load(path: &Path) -> Result<Self> {
        let format = TableFormat::from_path(path)?;
        let file = File::open(path).map_err(|e| DatasetError::io(path, e))?;

        let table = match format {
            TableFormat::Csv => Self::read_csv(file)?,
            TableFormat::JsonLines => Self::read_json_lines(BufReader::new(file))?,
        };

        tracing::info!(
            path = %path.display(),
            %format,
            records = table.len(),
            "Loaded metadata table"
        );
        Ok(table)
    }

    /// Parse CSV from any reader
    ///
    /// # Errors
    ///
    /// Returns `DatasetError::Csv` for malformed input or
    /// `DatasetError::MissingColumn` when `image_path` is absent.
    pub fn read_csv(reader: impl std::io::Read) -> Result<Self> {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_reader(reader);

        let headers = rdr.headers()?.clone();
        let column = |name: &str| headers.iter().position(|h| h == name);
        let image_col = column(IMAGE_PATH_COLUMN)
            .ok_or_else(|| DatasetError::MissingColumn(IMAGE_PATH_COLUMN.to_string()))?;

        let mut records = Vec::new();
        for (index, row) in rdr.records().enumerate() {
            let row = row?;
            let image_path = row.get(image_col).unwrap_or_default().to_string();
            let fields = RecordFields::from_lookup(|name| column(name).and_then(|i| row.get(i)));
            records.push(Record::new(index, image_path, fields, RawRow::Csv(row)));
        }

        Ok(Self {
            format: TableFormat::Csv,
            headers,
            records,
        })
    }

    /// Parse JSON Lines from any buffered reader
    ///
    /// # Errors
    ///
    /// Returns `DatasetError::Json` for unparsable lines and
    /// `DatasetError::InvalidRow` for lines that are not objects with a
    /// string `image_path`.
    pub fn read_json_lines(reader: impl BufRead) -> Result<Self> {
        let mut records = Vec::new();

        for (line_idx, line) in reader.lines().enumerate() {
            let line_no = line_idx + 1;
            let line = line.map_err(|e| DatasetError::InvalidRow {
                line: line_no,
                message: e.to_string(),
            })?;
            if line.trim().is_empty() {
                continue;
            }

            let value: serde_json::Value = serde_json::from_str(&line)
                .map_err(|source| DatasetError::Json {
                    line: line_no,
                    source,
                })?;
            let object = value.as_object().ok_or_else(|| DatasetError::InvalidRow {
                line: line_no,
                message: "expected a JSON object".to_string(),
            })?;
            let image_path = object
                .get(IMAGE_PATH_COLUMN)
                .and_then(serde_json::Value::as_str)
                .ok_or_else(|| DatasetError::InvalidRow {
                    line: line_no,
                    message: format!("missing string field '{IMAGE_PATH_COLUMN}'"),
                })?
                .to_string();

            let fields = RecordFields::from_json(object);
            let index = records.len();
            records.push(Record::new(index, image_path, fields, RawRow::JsonLine(line)));
        }

        Ok(Self {
            format: TableFormat::JsonLines,
            headers: csv::StringRecord::new(),
            records,
        })
    }

    /// Source format of the table
    #[must_use]
    pub const fn format(&self) -> TableFormat {
        self.format
    }

    /// Column names (CSV only; empty for JSON Lines)
    #[must_use]
    pub fn headers(&self) -> Vec<&str> {
        self.headers.iter().collect()
    }

    /// Number of records
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the table has no records
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// All records in table order
    #[must_use]
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Record at `index`, if any
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Record> {
        self.records.get(index)
    }

    /// The preview window: the first `min(n, len)` records
    #[must_use]
    pub fn preview(&self, n: usize) -> &[Record] {
        &self.records[..n.min(self.records.len())]
    }

    /// Write `records` to `path` in this table's format, replacing any
    /// existing file. Returns the number of rows written.
    ///
    /// # Errors
    ///
    /// Returns `DatasetError` if the file cannot be created or written.
    pub fn write_subset<'a>(
        &self,
        path: &Path,
        records: impl IntoIterator<Item = &'a Record>,
    ) -> Result<usize> {
        let file = File::create(path).map_err(|e| DatasetError::io(path, e))?;
        let written = self.write_records(file, records)?;

        tracing::info!(path = %path.display(), rows = written, "Wrote metadata table");
        Ok(written)
    }

    /// Write `records` in this table's format to any writer
    ///
    /// # Errors
    ///
    /// Returns `DatasetError` on write failure or if a record came from a
    /// table of another format.
    pub fn write_records<'a>(
        &self,
        writer: impl Write,
        records: impl IntoIterator<Item = &'a Record>,
    ) -> Result<usize> {
        let mut written = 0;

        match self.format {
            TableFormat::Csv => {
                let mut wtr = csv::Writer::from_writer(writer);
                wtr.write_record(&self.headers)?;
                for record in records {
                    let RawRow::Csv(row) = &record.raw else {
                        return Err(self.mismatch(record));
                    };
                    wtr.write_record(row)?;
                    written += 1;
                }
                wtr.flush()?;
            }
            TableFormat::JsonLines => {
                let mut wtr = BufWriter::new(writer);
                for record in records {
                    let RawRow::JsonLine(line) = &record.raw else {
                        return Err(self.mismatch(record));
                    };
                    writeln!(wtr, "{line}")?;
                    written += 1;
                }
                wtr.flush()?;
            }
        }

        Ok(written)
    }

    const fn mismatch(&self, record: &Record) -> DatasetError {
        DatasetError::FormatMismatch {
            index: record.index(),
            format: self.format,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    const CSV: &str = "\
image_path,caption,subset,split,pathology,roi_text,noisy_text,corrected_text
a.jpg,first caption,train,train,lung,,noisy a,fixed a
b.png,\"second, with comma\",test,val,,roi b,,
c.jpg,,,,,,,
";

    #[test]
    fn test_format_detection() {
        assert_eq!(TableFormat::from_path(Path::new("x.csv")).unwrap(), TableFormat::Csv);
        assert_eq!(TableFormat::from_path(Path::new("x.CSV")).unwrap(), TableFormat::Csv);
        assert_eq!(
            TableFormat::from_path(Path::new("x.jsonl")).unwrap(),
            TableFormat::JsonLines
        );
        assert!(matches!(
            TableFormat::from_path(Path::new("x.parquet")),
            Err(DatasetError::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn test_read_csv() {
        let table = MetadataTable::read_csv(CSV.as_bytes()).unwrap();
        assert_eq!(table.len(), 3);
        assert_eq!(table.headers()[0], "image_path");

        let b = table.get(1).unwrap();
        assert_eq!(b.index(), 1);
        assert_eq!(b.image_path(), "b.png");
        assert_eq!(b.caption(), Some("second, with comma"));
        assert_eq!(b.fields().roi_text.as_deref(), Some("roi b"));
        assert_eq!(b.fields().pathology, None);

        let c = table.get(2).unwrap();
        assert_eq!(c.fields(), &RecordFields::default());
    }

    #[test]
    fn test_csv_missing_image_column() {
        let result = MetadataTable::read_csv("caption\nhello\n".as_bytes());
        assert!(matches!(result, Err(DatasetError::MissingColumn(col)) if col == "image_path"));
    }

    #[test]
    fn test_csv_ragged_row_rejected() {
        let result = MetadataTable::read_csv("image_path,caption\na.jpg\n".as_bytes());
        assert!(matches!(result, Err(DatasetError::Csv(_))));
    }

    #[test]
    fn test_preview_window() {
        let table = MetadataTable::read_csv(CSV.as_bytes()).unwrap();
        assert_eq!(table.preview(2).len(), 2);
        assert_eq!(table.preview(100).len(), 3);
        assert!(table.preview(0).is_empty());
    }

    #[test]
    fn test_write_csv_subset_preserves_rows() {
        let table = MetadataTable::read_csv(CSV.as_bytes()).unwrap();
        let subset = [table.get(0).unwrap(), table.get(1).unwrap()];

        let mut out = Vec::new();
        let written = table.write_records(&mut out, subset).unwrap();
        assert_eq!(written, 2);

        let text = String::from_utf8(out).unwrap();
        let expected: String = CSV.lines().take(3).map(|l| format!("{l}\n")).collect();
        assert_eq!(text, expected);
    }

    #[test]
    fn test_read_json_lines() {
        let input = "{\"image_path\":\"a.jpg\",\"caption\":\"x\"}\n\n{\"image_path\":\"b.jpg\",\"split\":null}\n";
        let table = MetadataTable::read_json_lines(Cursor::new(input)).unwrap();
        assert_eq!(table.format(), TableFormat::JsonLines);
        assert_eq!(table.len(), 2);
        assert_eq!(table.get(1).unwrap().index(), 1);
        assert_eq!(table.get(1).unwrap().image_path(), "b.jpg");
        assert!(table.headers().is_empty());
    }

    #[test]
    fn test_json_lines_errors_report_line() {
        let bad = "{\"image_path\":\"a.jpg\"}\n{not json}\n";
        assert!(matches!(
            MetadataTable::read_json_lines(Cursor::new(bad)),
            Err(DatasetError::Json { line: 2, .. })
        ));

        let no_path = "{\"caption\":\"x\"}\n";
        assert!(matches!(
            MetadataTable::read_json_lines(Cursor::new(no_path)),
            Err(DatasetError::InvalidRow { line: 1, .. })
        ));
    }

    #[test]
    fn test_write_json_lines_verbatim() {
        let input = "{\"image_path\":\"a.jpg\",\"z\":1,\"a\":2}\n{\"image_path\":\"b.jpg\"}\n";
        let table = MetadataTable::read_json_lines(Cursor::new(input)).unwrap();

        let mut out = Vec::new();
        table.write_records(&mut out, [table.get(0).unwrap()]).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "{\"image_path\":\"a.jpg\",\"z\":1,\"a\":2}\n"
        );
    }

    #[test]
    fn test_write_rejects_foreign_records() {
        let csv_table = MetadataTable::read_csv(CSV.as_bytes()).unwrap();
        let json_table =
            MetadataTable::read_json_lines(Cursor::new("{\"image_path\":\"a.jpg\"}\n")).unwrap();

        let result = csv_table.write_records(Vec::new(), [json_table.get(0).unwrap()]);
        assert!(matches!(result, Err(DatasetError::FormatMismatch { index: 0, .. })));
    }
}
