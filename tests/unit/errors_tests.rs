/*!
 * Tests for error types and conversions
 */

use std::path::PathBuf;
use tagsplice::errors::{AppError, BatchError, ExtractError, InsertError};

#[test]
fn test_extractError_io_shouldDisplayPathAndCause() {
    let error = ExtractError::Io {
        path: PathBuf::from("src/main.py"),
        source: std::io::Error::new(std::io::ErrorKind::NotFound, "No such file"),
    };
    let display = format!("{}", error);
    assert!(display.contains("src/main.py"));
    assert!(display.contains("No such file"));
}

#[test]
fn test_insertError_malformedLine_shouldDisplayLineNumber() {
    let error = InsertError::MalformedLine {
        line_number: 12,
        content: "<EXTRACTED4>".to_string(),
    };
    let display = format!("{}", error);
    assert!(display.contains("line 12"));
    assert!(display.contains("<EXTRACTED4>"));
}

#[test]
fn test_batchError_missingPair_shouldNameTaggedFile() {
    let error = BatchError::MissingPair {
        translation: PathBuf::from("dir/a.py.en"),
        tagged: PathBuf::from("dir/a.py.tagged"),
    };
    let display = format!("{}", error);
    assert!(display.contains("a.py.tagged"));
    assert!(display.contains("Skipped"));
}

#[test]
fn test_appError_fromExtractError_shouldWrapCorrectly() {
    let app_error: AppError = ExtractError::Encoding {
        path: PathBuf::from("latin1.txt"),
    }
    .into();
    let display = format!("{}", app_error);
    assert!(display.contains("Extraction error"));
    assert!(display.contains("latin1.txt"));
}

#[test]
fn test_appError_fromInsertError_shouldWrapCorrectly() {
    let app_error: AppError = InsertError::MalformedLine {
        line_number: 1,
        content: "x".to_string(),
    }
    .into();
    assert!(format!("{}", app_error).contains("Insertion error"));
}

#[test]
fn test_appError_fromBatchError_shouldWrapCorrectly() {
    let app_error: AppError = BatchError::MissingPair {
        translation: PathBuf::from("a.py.en"),
        tagged: PathBuf::from("a.py.tagged"),
    }
    .into();
    let display = format!("{}", app_error);
    assert!(display.starts_with("Batch error"));
    assert!(display.contains("a.py.tagged"));
}

#[test]
fn test_appError_file_shouldDisplayMessage() {
    let app_error = AppError::File("Input file does not exist: \"x.py\"".to_string());
    assert_eq!(format!("{}", app_error), "File error: Input file does not exist: \"x.py\"");
}
