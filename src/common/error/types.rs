//! Unified error types for numstyle.
//!
//! Parsing, model construction and XML generation all report through this
//! single error type so callers can decide in one place whether a bad format
//! code is fatal or should fall back to the default style.
use thiserror::Error;

/// Main error type for numstyle operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Malformed format code: unknown comparator, bad placeholder grammar,
    /// unrecognized token or non-numeric condition value
    #[error("Invalid number format: {0}")]
    InvalidFormat(String),

    /// Out-of-range attribute passed to a programmatically built part
    #[error("Invalid attribute: {0}")]
    InvalidAttribute(String),

    /// XML writing or reading error
    #[error("XML error: {0}")]
    XmlError(String),
}

/// Result type for numstyle operations.
pub type Result<T> = std::result::Result<T, Error>;
