use std::fs;

use polars::df;
use tempfile::TempDir;

use landgrab_output::{OutputError, write_csv_with_index};

#[test]
fn writes_into_missing_directories() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("nested").join("clean.csv");
    let df = df! { "University" => &["Purdue"], "Yr_ST_Accept" => &[1865i64] }.unwrap();

    write_csv_with_index(&df, &path).expect("write csv");

    let written = fs::read_to_string(&path).expect("read back");
    assert_eq!(written, ",University,Yr_ST_Accept\n0,Purdue,1865\n");
}

#[test]
fn overwrites_existing_file() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("clean.csv");
    fs::write(&path, "stale contents that are longer than the new file\n").expect("seed");
    let df = df! { "A" => &[1.5f64] }.unwrap();

    write_csv_with_index(&df, &path).expect("write csv");

    assert_eq!(fs::read_to_string(&path).unwrap(), ",A\n0,1.5\n");
}

#[test]
fn directory_path_is_a_create_error() {
    let dir = TempDir::new().expect("temp dir");
    let df = df! { "A" => &[1i64] }.unwrap();

    let err = write_csv_with_index(&df, dir.path()).expect_err("directory is not a file");

    assert!(matches!(err, OutputError::CreateFile { .. }));
}
