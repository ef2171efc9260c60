//! Error types for the docfill library.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for docfill operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while filling a document template.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The template file does not exist.
    #[error("Template not found: {}", .0.display())]
    TemplateNotFound(PathBuf),

    /// Error parsing the DOCX package.
    #[error("DOCX read error: {0}")]
    DocxRead(#[from] docx_rs::ReaderError),

    /// The output file could not be created or written.
    #[error("Cannot write output {}: {}", .path.display(), .source)]
    Write {
        /// Output path that failed.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// Error packing the document back into a DOCX archive.
    #[error("DOCX write error: {0}")]
    DocxWrite(String),

    /// The fill configuration is malformed.
    #[error("Invalid fill configuration: {0}")]
    InvalidConfig(String),

    /// Error serializing inspection output.
    #[error("Serialization error: {0}")]
    Serialize(String),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::InvalidConfig(err.to_string())
    }
}
