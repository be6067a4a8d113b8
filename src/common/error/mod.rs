//! Unified error types for numstyle.
//!
//! This module provides a single error type shared by the parser, the model
//! constructors and both XML generators.

// Submodule declarations
pub mod types;
pub mod conversions;

// Re-exports
pub use types::{Error, Result};
