//! CSV/TSV reading.

use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord};

use crate::error::{IngestError, Result};

/// A header row and data rows, as text.
///
/// Data rows shorter than the header are padded with empty cells. Wider rows
/// are kept as read; deciding whether they are an error is the parser's job.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl RawTable {
    pub fn width(&self) -> usize {
        self.headers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IngestOptions {
    /// Field delimiter. `None` infers it from the file extension.
    pub delimiter: Option<u8>,
}

impl IngestOptions {
    #[must_use]
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = Some(delimiter);
        self
    }
}

/// Delimiter implied by a file name: tab for `.tsv`/`.tab`, comma otherwise.
pub fn delimiter_for_path(path: &Path) -> u8 {
    match path
        .extension()
        .and_then(std::ffi::OsStr::to_str)
        .map(str::to_ascii_lowercase)
        .as_deref()
    {
        Some("tsv" | "tab") => b'\t',
        _ => b',',
    }
}

/// Read a table from a file.
pub fn read_table(path: &Path, options: &IngestOptions) -> Result<RawTable> {
    let bytes = std::fs::read(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            IngestError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            IngestError::FileRead {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })?;
    validate_encoding(&bytes, path)?;

    let delimiter = options
        .delimiter
        .unwrap_or_else(|| delimiter_for_path(path));
    let table =
        read_table_from_reader(bytes.as_slice(), delimiter).map_err(|e| IngestError::Parse {
            path: path.to_path_buf(),
            source: e,
        })?;
    if table.headers.is_empty() {
        return Err(IngestError::EmptyTable {
            path: path.to_path_buf(),
        });
    }

    tracing::debug!(
        path = %path.display(),
        columns = table.width(),
        rows = table.rows.len(),
        "Read table"
    );
    Ok(table)
}

/// Read a table from any reader.
///
/// Strips a UTF-8 byte-order mark and surrounding whitespace from every cell.
/// Row numbers match the table as the author sees it in a spreadsheet: rows
/// of empty cells (`,,,`) are kept, and each empty line between data rows
/// becomes an empty row. A quoted cell spanning several lines is still one
/// row. Empty lines before the header row are ignored.
pub fn read_table_from_reader<R: Read>(
    mut reader: R,
    delimiter: u8,
) -> std::result::Result<RawTable, csv::Error> {
    let mut input = Vec::new();
    reader.read_to_end(&mut input)?;

    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .delimiter(delimiter)
        .from_reader(input.as_slice());

    let mut record = StringRecord::new();
    if !reader.read_record(&mut record)? {
        return Ok(RawTable::default());
    }
    let headers = normalize_record(&record);

    let mut rows = Vec::new();
    while reader.read_record(&mut record)? {
        let start = record
            .position()
            .and_then(|position| usize::try_from(position.byte()).ok())
            .unwrap_or(input.len());
        for _ in 0..skipped_lines(&input, start) {
            rows.push(vec![String::new(); headers.len()]);
        }

        let mut row = normalize_record(&record);
        if row.len() < headers.len() {
            row.resize(headers.len(), String::new());
        }
        rows.push(row);
    }
    Ok(RawTable { headers, rows })
}

/// Empty lines the CSV reader skipped before the record starting at `start`.
///
/// The record's input begins where the previous record's terminator ended,
/// so the leading line breaks are exactly the skipped lines, except that a
/// CRLF terminator is split: its `\r` closes the previous record and its
/// `\n` opens this one.
fn skipped_lines(input: &[u8], start: usize) -> usize {
    let Some(tail) = input.get(start..) else {
        return 0;
    };
    let newlines = tail
        .iter()
        .take_while(|&&byte| matches!(byte, b'\r' | b'\n'))
        .filter(|&&byte| byte == b'\n')
        .count();
    let split_crlf =
        start > 0 && input[start - 1] == b'\r' && tail.first() == Some(&b'\n');
    newlines - usize::from(split_crlf)
}

fn normalize_record(record: &StringRecord) -> Vec<String> {
    record.iter().map(normalize_cell).collect()
}

fn normalize_cell(value: &str) -> String {
    value
        .trim_matches(|ch: char| ch.is_whitespace() || ch == '\u{feff}')
        .to_string()
}

/// Reject UTF-16 input, which the CSV reader would misread.
fn validate_encoding(bytes: &[u8], path: &Path) -> Result<()> {
    let encoding = match bytes {
        [0xFF, 0xFE, ..] => "UTF-16 LE",
        [0xFE, 0xFF, ..] => "UTF-16 BE",
        _ => return Ok(()),
    };
    Err(IngestError::UnsupportedEncoding {
        path: path.to_path_buf(),
        encoding,
    })
}
