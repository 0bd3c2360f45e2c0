//! Error types for reading and writing appearance XML.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur when reading or writing appearance XML.
#[derive(Debug, Error)]
pub enum Error {
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The input file does not exist.
    #[error("input file not found: {}", path.display())]
    NotFound { path: PathBuf },

    /// The document is not well-formed XML.
    #[error("XML parse error at byte {position}: {message}")]
    Parse { position: u64, message: String },

    /// The document ended while elements were still open.
    #[error("unexpected end of document: <{tag}> is not closed")]
    UnclosedElement { tag: String },

    /// The document contains no root element.
    #[error("no root element found in XML")]
    NoRoot,

    /// A required attribute is missing.
    #[error("<{tag}> is missing the '{attribute}' attribute")]
    MissingAttribute { tag: String, attribute: &'static str },

    /// An attribute value could not be interpreted.
    #[error("invalid '{attribute}' value {value:?}")]
    InvalidAttribute { attribute: &'static str, value: String },

    /// XML writing error.
    #[error("XML error: {0}")]
    Xml(String),

    /// UTF-8 decoding error.
    #[error("UTF-8 error: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// Result type for appearance XML operations.
pub type Result<T> = std::result::Result<T, Error>;
