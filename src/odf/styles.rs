//! Number styles of an ODF document.

use super::element::Element;
use super::number_style::render_odf;
use crate::common::FormatRegistry;
use crate::numfmt::{FormatModel, FormatPart, FormatSection, NumberPart};

/// Data style name for a registered number style id.
pub fn data_style_name(id: usize) -> String {
    format!("N{}", id)
}

/// Assigns `N<id>` data style names to the number formats of a document.
///
/// Id 0 is always the plain integer format used by the default cell style.
#[derive(Debug, Clone)]
pub struct NumberStyleRegistry {
    formats: FormatRegistry,
}

impl Default for NumberStyleRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl NumberStyleRegistry {
    pub fn new() -> Self {
        // Same model as parsing "0"
        let default_model = FormatModel::new(FormatSection::with_parts(
            [FormatPart::Number(NumberPart::default())],
            None,
        ));
        let mut formats = FormatRegistry::new();
        formats.register(default_model);
        Self { formats }
    }

    /// Register a number format and return its id.
    pub fn register(&mut self, model: FormatModel) -> usize {
        self.formats.register(model)
    }

    /// Register a number format and return its data style name.
    pub fn register_name(&mut self, model: FormatModel) -> String {
        data_style_name(self.register(model))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.formats.len()
    }

    /// Never true: the default style is always present.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.formats.is_empty()
    }

    /// Style nodes of every registered format, in id order.
    pub fn to_elements(&self) -> Vec<Element> {
        self.formats
            .iter()
            .flat_map(|(id, model)| render_odf(model, &data_style_name(id)))
            .collect()
    }

    /// Serialized style nodes, ready to be placed under `<office:styles>`.
    pub fn to_xml(&self) -> String {
        let mut xml = String::new();
        for element in self.to_elements() {
            element.write_xml(&mut xml);
        }
        xml
    }
}
