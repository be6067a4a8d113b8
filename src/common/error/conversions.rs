//! Error conversion implementations.
//!
//! This module contains From trait implementations to convert from the
//! errors raised by writers and third-party readers to the unified Error type.

use super::types::Error;

impl From<std::fmt::Error> for Error {
    fn from(err: std::fmt::Error) -> Self {
        Error::XmlError(format!("XML write error: {}", err))
    }
}

#[cfg(feature = "odf")]
impl From<quick_xml::Error> for Error {
    fn from(err: quick_xml::Error) -> Self {
        Error::XmlError(err.to_string())
    }
}
