//! The `<numFmts>` part of a SpreadsheetML `styles.xml`.
//!
//! Built-in formats are known to every consumer by id and are never
//! declared. Anything else gets a custom id from [`FIRST_CUSTOM_NUM_FMT_ID`]
//! upward and one `<numFmt>` entry.

use super::numfmt::render_ooxml;
use crate::common::xml::escape_xml;
use crate::common::{FormatRegistry, Result};
use crate::numfmt::FormatModel;
use crate::numfmt::builtin::builtin_id_for;
use std::fmt::Write as FmtWrite;

/// Number format id of the default cell style ("General").
pub const GENERAL_NUM_FMT_ID: u32 = 0;

/// Custom number formats start at index 164.
pub const FIRST_CUSTOM_NUM_FMT_ID: u32 = 164;

/// Collects the number formats used by a workbook and assigns their ids.
#[derive(Debug, Clone, Default)]
pub struct NumFmtTable {
    /// Custom formats; registry index `i` has id `164 + i`
    custom: FormatRegistry,
}

impl NumFmtTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a number format and return its `numFmtId`.
    ///
    /// If the format equals a built-in one, the built-in id is returned and
    /// nothing is declared. Equal custom formats share an id.
    pub fn register(&mut self, model: &FormatModel) -> u32 {
        if let Some(id) = builtin_id_for(model) {
            return id;
        }
        if let Some(index) = self.custom.find(model) {
            return custom_id(index);
        }

        let id = custom_id(self.custom.register(model.clone()));
        log::debug!("Assigned numFmtId {} to {:?}", id, render_ooxml(model));
        id
    }

    /// Number of declared (custom) formats.
    #[inline]
    pub fn len(&self) -> usize {
        self.custom.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.custom.is_empty()
    }

    /// Declared formats as `(numFmtId, formatCode)` pairs.
    pub fn entries(&self) -> impl Iterator<Item = (u32, String)> + '_ {
        self.custom
            .iter()
            .map(|(index, model)| (custom_id(index), render_ooxml(model)))
    }

    /// Generate the `<numFmts>` element.
    ///
    /// Returns an empty string when no custom format has been registered,
    /// since the element is optional and must not be empty.
    pub fn to_xml(&self) -> Result<String> {
        let mut xml = String::new();
        if self.custom.is_empty() {
            return Ok(xml);
        }

        write!(xml, r#"<numFmts count="{}">"#, self.custom.len())?;
        for (id, code) in self.entries() {
            write!(
                xml,
                r#"<numFmt numFmtId="{}" formatCode="{}"/>"#,
                id,
                escape_xml(&code)
            )?;
        }
        xml.push_str("</numFmts>");

        Ok(xml)
    }
}

#[inline]
fn custom_id(index: usize) -> u32 {
    FIRST_CUSTOM_NUM_FMT_ID + index as u32
}
