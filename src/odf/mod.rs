//! OpenDocument number style output.
//!
//! [`render_odf`] turns a [`FormatModel`](crate::numfmt::FormatModel) into
//! `<number:number-style>` elements, and [`NumberStyleRegistry`] names them
//! (`N0`, `N1`, ...) for reference from cell styles via
//! `style:data-style-name`.

/// XML element tree
pub mod element;
/// Number style generation
pub mod number_style;
/// Document-level style registry
pub mod styles;

pub use element::Element;
pub use number_style::render_odf;
pub use styles::{NumberStyleRegistry, data_style_name};

/// Namespace of the `number:` prefix.
pub const NUMBER_NAMESPACE: &str = "urn:oasis:names:tc:opendocument:xmlns:datastyle:1.0";
/// Namespace of the `style:` prefix.
pub const STYLE_NAMESPACE: &str = "urn:oasis:names:tc:opendocument:xmlns:style:1.0";
/// Namespace of the `fo:` prefix.
pub const FO_NAMESPACE: &str = "urn:oasis:names:tc:opendocument:xmlns:xsl-fo-compatible:1.0";
/// Namespace of the LibreOffice `loext:` extension prefix.
pub const LOEXT_NAMESPACE: &str = "urn:org:documentfoundation:names:experimental:office:xmlns:loext:1.0";
