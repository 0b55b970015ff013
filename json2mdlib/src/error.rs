//! Error types for json2mdlib

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during result-set conversion
#[derive(Error, Debug)]
pub enum Json2mdError {
    /// Deliberate, user-facing failure. The CLI prints the message as a
    /// single line and exits with status 1 instead of showing the full
    /// error chain.
    #[error("{0}")]
    User(String),

    /// Failed to read the input file
    #[error("failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Failed to write the output file
    #[error("failed to write file '{path}': {source}")]
    FileWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Input is not valid JSON
    #[error("failed to parse JSON in '{path}': {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// Input is valid JSON but does not have the expected result-set shape
    #[error("unexpected result-set shape in '{path}': {source}")]
    Schema {
        path: PathBuf,
        source: serde_json::Error,
    },
}
