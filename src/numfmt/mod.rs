//! Number format mini-language.
//!
//! A format code such as `[Red][<0]-0.00;#,##0` is parsed into a
//! [`FormatModel`]: a primary [`FormatSection`] plus an ordered list of
//! conditional branches. The model is what the OOXML and ODF generators
//! consume, and what style registries deduplicate on.
//!
//! # Examples
//!
//! ```
//! use numstyle::numfmt::{Comparator, parse};
//!
//! let model = parse("0.00;[Red]-0.00").unwrap();
//! let comparators: Vec<_> = model
//!     .branches()
//!     .iter()
//!     .map(|branch| branch.condition.comparator())
//!     .collect();
//! assert_eq!(comparators, [Comparator::LessThan, Comparator::GreaterThan]);
//! ```

pub mod builtin;
mod color;
mod condition;
mod model;
mod parser;
mod part;
mod section;

pub use color::{FormatColor, MAX_INDEXED_COLOR};
pub use condition::{Comparator, Condition};
pub use model::{Branch, FormatModel, MAX_SECTIONS};
pub use parser::{DefaultConditions, ParseOptions, Parser, parse};
pub use part::{FormatPart, NumberPart, TextPart};
pub use section::FormatSection;
