//! Numstyle - spreadsheet number formats for OOXML and ODF writers
//!
//! This library parses spreadsheet number format codes (the mini-language
//! behind `#,##0.00;[Red]-#,##0.00`) into a structured model and renders
//! that model for the two spreadsheet document dialects.
//!
//! # Features
//!
//! - **Parser**: Format codes with up to four sections, colour tags and
//!   `[<op><value>]` conditions
//! - **OOXML output**: `formatCode` strings and the `<numFmts>` table of
//!   `styles.xml` (feature `ooxml`)
//! - **ODF output**: `<number:number-style>` trees with `style:map`
//!   conditions (feature `odf`)
//! - **Registries**: Value-deduplicated ids for formats, shareable between
//!   threads
//!
//! # Example - Parsing a format code
//!
//! ```
//! use numstyle::numfmt::{Comparator, FormatColor};
//!
//! # fn main() -> Result<(), numstyle::Error> {
//! let model = numstyle::parse("[>=1000][Green]#,##0;0.00")?;
//!
//! let branch = &model.branches()[0];
//! assert_eq!(branch.condition.comparator(), Comparator::GreaterOrEqual);
//! assert_eq!(branch.condition.threshold(), 1000.0);
//! assert_eq!(branch.section.color(), Some(FormatColor::Green));
//! assert_eq!(model.primary().parts().len(), 1);
//! # Ok(())
//! # }
//! ```
//!
//! # Example - Rendering for both dialects
//!
//! ```
//! # fn main() -> Result<(), numstyle::Error> {
//! let model = numstyle::parse("0.00;[Red]-0.00")?;
//!
//! assert_eq!(numstyle::render_ooxml(&model), "0.00;[Red]-0.00");
//!
//! let nodes = numstyle::render_odf(&model, "N1");
//! assert_eq!(nodes.len(), 3);
//! assert_eq!(nodes[2].get_attribute("style:name"), Some("N1"));
//! # Ok(())
//! # }
//! ```
//!
//! # Example - Lenient parsing
//!
//! ```
//! use numstyle::numfmt::{ParseOptions, Parser};
//!
//! let parser = Parser::new(ParseOptions::lenient());
//! // The first section spans a line feed and is dropped instead of failing
//! let model = parser.parse("0.00\n;0").unwrap();
//! assert_eq!(model.branches().len(), 1);
//! ```

/// Common types, errors and utilities
pub mod common;

/// Number format model and parser
///
/// This module provides the format model ([`numfmt::FormatModel`]) and the
/// parser that builds it from a format code.
pub mod numfmt;

/// OOXML (SpreadsheetML) format code generation
#[cfg(feature = "ooxml")]
pub mod ooxml;

/// ODF number style generation
#[cfg(feature = "odf")]
pub mod odf;

// Re-export commonly used types for convenience
pub use common::{Error, Result};
pub use numfmt::{FormatModel, parse};

#[cfg(feature = "ooxml")]
pub use ooxml::render_ooxml;

#[cfg(feature = "odf")]
pub use odf::render_odf;
