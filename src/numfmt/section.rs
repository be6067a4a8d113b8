//! One `;`-delimited section of a number format.

use super::color::FormatColor;
use super::part::FormatPart;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Ordered parts (left to right) plus an optional colour.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FormatSection {
    parts: SmallVec<[FormatPart; 4]>,
    color: Option<FormatColor>,
}

impl FormatSection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a section from parts and a colour.
    pub fn with_parts(parts: impl IntoIterator<Item = FormatPart>, color: Option<FormatColor>) -> Self {
        Self {
            parts: parts.into_iter().collect(),
            color,
        }
    }

    /// Append a part.
    pub fn push(&mut self, part: impl Into<FormatPart>) -> &mut Self {
        self.parts.push(part.into());
        self
    }

    /// Append several parts, keeping their order.
    pub fn extend(&mut self, parts: impl IntoIterator<Item = FormatPart>) -> &mut Self {
        self.parts.extend(parts);
        self
    }

    #[inline]
    pub fn parts(&self) -> &[FormatPart] {
        &self.parts
    }

    #[inline]
    pub fn color(&self) -> Option<FormatColor> {
        self.color
    }

    pub fn set_color(&mut self, color: Option<FormatColor>) -> &mut Self {
        self.color = color;
        self
    }

    /// No parts and no colour.
    pub fn is_empty(&self) -> bool {
        self.parts.is_empty() && self.color.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numfmt::part::NumberPart;

    #[test]
    fn test_push_keeps_order() {
        let mut section = FormatSection::new();
        section
            .push(FormatPart::text("$"))
            .push(NumberPart::default())
            .push(FormatPart::text("_-"));

        let texts: Vec<_> = section.parts().iter().map(|p| p.as_text()).collect();
        assert_eq!(texts, vec![Some("$"), None, Some("_-")]);
    }

    #[test]
    fn test_is_empty_considers_color() {
        let mut section = FormatSection::new();
        assert!(section.is_empty());
        section.set_color(Some(FormatColor::Red));
        assert!(!section.is_empty());
    }
}
