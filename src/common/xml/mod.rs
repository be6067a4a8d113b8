//! XML helpers shared by the OOXML and ODF generators.

mod escape;

pub use escape::{escape_xml, escape_xml_text, unescape_xml};
