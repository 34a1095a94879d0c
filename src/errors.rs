/*!
 * Error types for the tagsplice application.
 *
 * This module contains custom error types for the extraction and insertion
 * steps, using the thiserror crate for ergonomic error definitions.
 */

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while extracting translatable runs from a file
#[derive(Error, Debug)]
pub enum ExtractError {
    /// The source could not be read or an output could not be written
    #[error("I/O error on {path:?}: {source}")]
    Io {
        /// File or directory the operation failed on
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The source is not valid UTF-8
    #[error("File is not valid UTF-8: {path:?}")]
    Encoding {
        /// Offending source file
        path: PathBuf,
    },
}

/// Errors that can occur while inserting translations into a tagged file
#[derive(Error, Debug)]
pub enum InsertError {
    /// An input could not be read or the output could not be written
    #[error("I/O error on {path:?}: {source}")]
    Io {
        /// File the operation failed on
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// An input is not valid UTF-8
    #[error("File is not valid UTF-8: {path:?}")]
    Encoding {
        /// Offending input file
        path: PathBuf,
    },

    /// A translation line has no separator between identifier and text
    #[error("Malformed translation line {line_number}: {content:?}")]
    MalformedLine {
        /// 1-based line number in the translation file
        line_number: usize,
        /// The offending line, without its terminator
        content: String,
    },
}

/// Errors reported per file by the batch driver
#[derive(Error, Debug)]
pub enum BatchError {
    /// A translation file has no tagged file next to it
    #[error("Tagged file {tagged:?} not found for {translation:?}. Skipped.")]
    MissingPair {
        /// The translation file that was found
        translation: PathBuf,
        /// The tagged file that was expected next to it
        tagged: PathBuf,
    },
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// A required input file or directory is missing
    #[error("File error: {0}")]
    File(String),

    /// Invalid configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Error from extraction
    #[error("Extraction error: {0}")]
    Extract(#[from] ExtractError),

    /// Error from insertion
    #[error("Insertion error: {0}")]
    Insert(#[from] InsertError),

    /// Error from the batch driver
    #[error("Batch error: {0}")]
    Batch(#[from] BatchError),
}
