//! Integration tests for the delimited-text loader.

use std::io::Write;

use dml_stats::config::ReaderConfig;
use dml_stats::io::read_delimited;
use dml_stats::stats::mean;

fn write_file(dir: &tempfile::TempDir, name: &str, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    path
}

#[test]
fn reads_csv_with_headers() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(&dir, "data.csv", "a,b\n1,2\n3,4\n5,6\n");

    let loaded = read_delimited(&path, &ReaderConfig::default()).unwrap();
    assert_eq!(loaded.table.shape(), (3, 2));
    assert_eq!(loaded.table[(2, 1)], 6.0);
    assert_eq!(loaded.column_name(1), "b");
    assert!((mean(&loaded.table, 0).unwrap() - 3.0).abs() < 1e-6);
}

#[test]
fn infers_tab_delimiter_from_extension() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(&dir, "data.tsv", "x\ty\n1.5\t2.5\n");

    let loaded = read_delimited(&path, &ReaderConfig::default()).unwrap();
    assert_eq!(loaded.table.shape(), (1, 2));
    assert_eq!(loaded.table[(0, 1)], 2.5);
}

#[test]
fn explicit_delimiter_without_headers() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(&dir, "data.txt", "1;2;3\n4;5;6\n");
    let cfg = ReaderConfig {
        delimiter: Some(';'),
        has_headers: false,
    };

    let loaded = read_delimited(&path, &cfg).unwrap();
    assert_eq!(loaded.table.shape(), (2, 3));
    assert!(loaded.headers.is_none());
    assert_eq!(loaded.column_name(2), "col_2");
}

#[test]
fn non_numeric_field_errors() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(&dir, "data.csv", "a,b\n1,oops\n");
    let err = read_delimited(&path, &ReaderConfig::default()).unwrap_err();
    assert!(format!("{:#}", err).contains("oops"));
}

#[test]
fn ragged_rows_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(&dir, "data.csv", "a,b\n1,2\n3\n");
    assert!(read_delimited(&path, &ReaderConfig::default()).is_err());
}

#[test]
fn header_only_file_errors() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(&dir, "data.csv", "a,b\n");
    assert!(read_delimited(&path, &ReaderConfig::default()).is_err());
}

#[test]
fn missing_file_errors() {
    assert!(read_delimited("/nonexistent/path/data.csv", &ReaderConfig::default()).is_err());
}
