//! Office Open XML (SpreadsheetML) output.
//!
//! [`render_ooxml`] turns a [`FormatModel`](crate::numfmt::FormatModel) into
//! the `formatCode` attribute of a `<numFmt>` entry, and [`NumFmtTable`]
//! collects those entries for the `<numFmts>` section of `styles.xml`.
//!
//! # Example
//!
//! ```rust
//! use numstyle::ooxml::NumFmtTable;
//!
//! let mut table = NumFmtTable::new();
//! let id = table.register(&numstyle::parse("0.0\" kg\"").unwrap());
//! assert_eq!(id, 164);
//! assert_eq!(
//!     table.to_xml()?,
//!     r#"<numFmts count="1"><numFmt numFmtId="164" formatCode="0.0&quot; kg&quot;"/></numFmts>"#
//! );
//! # Ok::<(), numstyle::Error>(())
//! ```
pub mod numfmt;
pub mod styles;

pub use numfmt::render_ooxml;
pub use styles::{FIRST_CUSTOM_NUM_FMT_ID, GENERAL_NUM_FMT_ID, NumFmtTable};
