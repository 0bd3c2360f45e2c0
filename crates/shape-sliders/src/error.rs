//! Error types for shape filtering.

use thiserror::Error;

/// Errors that can occur when filtering a shape.
#[derive(Debug, Error)]
pub enum Error {
    /// Reading or writing the document failed.
    #[error("{0}")]
    Xml(#[from] shape_xml::Error),

    /// A selected param has no `u8` value to display.
    #[error("param {id} has no 'u8' value")]
    MissingValue { id: u32 },
}

/// Result type for shape filtering operations.
pub type Result<T> = std::result::Result<T, Error>;
