//! Common types, traits, and utilities shared across formats.
//!
//! This module provides the error type, XML helpers and the style registry
//! used by both the OOXML and the ODF generators.

// Submodule declarations
pub mod error;
pub mod number;
pub mod registry;
pub mod xml;

// Re-exports for convenience
pub use error::{Error, Result};
pub use number::format_number;
pub use registry::{FormatRegistry, SharedFormatRegistry};
