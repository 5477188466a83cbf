//! Tests for reading CSV and TSV tables.

use std::io::Write;

use dctap_ingest::{IngestError, IngestOptions, read_table, read_table_from_reader};
use tempfile::TempDir;

fn write_file(dir: &TempDir, name: &str, bytes: &[u8]) -> std::path::PathBuf {
    let path = dir.path().join(name);
    let mut file = std::fs::File::create(&path).expect("create file");
    file.write_all(bytes).expect("write file");
    path
}

#[test]
fn reads_csv_with_bom_and_whitespace() {
    let dir = TempDir::new().expect("temp dir");
    let path = write_file(
        &dir,
        "profile.csv",
        "\u{feff}shapeID, propertyID ,note\nbook,dc:title,  a note \n".as_bytes(),
    );
    let table = read_table(&path, &IngestOptions::default()).expect("read table");
    assert_eq!(table.headers, vec!["shapeID", "propertyID", "note"]);
    assert_eq!(table.rows, vec![vec!["book", "dc:title", "a note"]]);
}

#[test]
fn tsv_extension_selects_tab() {
    let dir = TempDir::new().expect("temp dir");
    let path = write_file(&dir, "profile.tsv", b"propertyID\tnote\ndc:title\tx, y\n");
    let table = read_table(&path, &IngestOptions::default()).expect("read table");
    assert_eq!(table.headers, vec!["propertyID", "note"]);
    assert_eq!(table.rows[0], vec!["dc:title", "x, y"]);
}

#[test]
fn explicit_delimiter_wins() {
    let dir = TempDir::new().expect("temp dir");
    let path = write_file(&dir, "profile.txt", b"propertyID;note\ndc:title;x\n");
    let options = IngestOptions::default().with_delimiter(b';');
    let table = read_table(&path, &options).expect("read table");
    assert_eq!(table.width(), 2);
}

#[test]
fn short_rows_are_padded_and_wide_rows_kept() {
    let input = "a,b,c\n1\n1,2,3,4\n";
    let table = read_table_from_reader(input.as_bytes(), b',').expect("read table");
    assert_eq!(table.rows[0], vec!["1", "", ""]);
    assert_eq!(table.rows[1].len(), 4);
}

#[test]
fn empty_lines_become_empty_rows() {
    let input = "a,b\n\n1,2\n,\n\n\n3,4\n\n";
    let table = read_table_from_reader(input.as_bytes(), b',').expect("read table");
    let empty = vec![String::new(), String::new()];
    assert_eq!(
        table.rows,
        vec![
            empty.clone(),
            vec!["1".to_string(), "2".to_string()],
            empty.clone(),
            empty.clone(),
            empty,
            vec!["3".to_string(), "4".to_string()],
        ]
    );
}

#[test]
fn empty_lines_counted_with_crlf_endings() {
    let input = "a,b\r\n1,2\r\n\r\n3,4\r\n";
    let table = read_table_from_reader(input.as_bytes(), b',').expect("read table");
    assert_eq!(table.rows.len(), 3);
    assert_eq!(table.rows[1], vec!["", ""]);
    assert_eq!(table.rows[2], vec!["3", "4"]);
}

#[test]
fn multiline_quoted_cell_is_one_row() {
    let input = "propertyID,note\ndc:title,\"one\n\ntwo\"\n\ndc:date,x\n";
    let table = read_table_from_reader(input.as_bytes(), b',').expect("read table");
    assert_eq!(table.rows.len(), 3);
    assert_eq!(table.rows[0][1], "one\n\ntwo");
    assert_eq!(table.rows[1], vec!["", ""]);
    assert_eq!(table.rows[2][0], "dc:date");
}

#[test]
fn empty_lines_before_header_are_ignored() {
    let input = "\n\npropertyID\ndc:title\n";
    let table = read_table_from_reader(input.as_bytes(), b',').expect("read table");
    assert_eq!(table.headers, vec!["propertyID"]);
    assert_eq!(table.rows, vec![vec!["dc:title"]]);
}

#[test]
fn quoted_cells_keep_delimiters_and_newlines() {
    let input = "propertyID,note\ndc:title,\"first, second\nthird\"\n";
    let table = read_table_from_reader(input.as_bytes(), b',').expect("read table");
    assert_eq!(table.rows[0][1], "first, second\nthird");
}

#[test]
fn empty_input_has_no_headers() {
    let table = read_table_from_reader("".as_bytes(), b',').expect("read table");
    assert!(table.headers.is_empty());
    assert!(table.is_empty());
}

#[test]
fn empty_file_is_an_error() {
    let dir = TempDir::new().expect("temp dir");
    let path = write_file(&dir, "empty.csv", b"");
    let err = read_table(&path, &IngestOptions::default()).unwrap_err();
    assert!(matches!(err, IngestError::EmptyTable { .. }));
}

#[test]
fn missing_file_is_reported() {
    let dir = TempDir::new().expect("temp dir");
    let err = read_table(&dir.path().join("absent.csv"), &IngestOptions::default()).unwrap_err();
    assert!(matches!(err, IngestError::FileNotFound { .. }));
}

#[test]
fn utf16_is_rejected() {
    let dir = TempDir::new().expect("temp dir");
    let path = write_file(&dir, "utf16.csv", &[0xFF, 0xFE, b'a', 0x00]);
    let err = read_table(&path, &IngestOptions::default()).unwrap_err();
    assert!(matches!(
        err,
        IngestError::UnsupportedEncoding {
            encoding: "UTF-16 LE",
            ..
        }
    ));
}
