//! The parsed form of a complete number format.

use super::condition::Condition;
use super::section::FormatSection;
use crate::common::{Error, Result};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Maximum number of sections (positive;negative;zero;text) in a format.
pub const MAX_SECTIONS: usize = 4;

/// A conditional section: applied when its condition matches.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Branch {
    pub condition: Condition,
    pub section: FormatSection,
}

/// Root of a parsed number format.
///
/// The primary section applies when no branch matches. Branches keep their
/// declaration order, which is also the order in which spreadsheet
/// applications evaluate them.
///
/// Two models compare equal when their whole trees are equal, which is what
/// style registries use to hand out a single id for identical formats.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FormatModel {
    primary: FormatSection,
    branches: SmallVec<[Branch; 3]>,
}

impl FormatModel {
    /// A model with only a primary section.
    pub fn new(primary: FormatSection) -> Self {
        Self {
            primary,
            branches: SmallVec::new(),
        }
    }

    /// Append a conditional branch.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidFormat`] if the model would hold more than
    /// [`MAX_SECTIONS`] sections.
    pub fn add_branch(&mut self, condition: Condition, section: FormatSection) -> Result<&mut Self> {
        if self.section_count() >= MAX_SECTIONS {
            return Err(Error::InvalidFormat(format!(
                "A number format holds at most {} sections",
                MAX_SECTIONS
            )));
        }
        self.branches.push(Branch { condition, section });
        Ok(self)
    }

    #[inline]
    pub fn primary(&self) -> &FormatSection {
        &self.primary
    }

    /// Replace the primary section.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidFormat`] if a non-empty primary would take the
    /// model past [`MAX_SECTIONS`] sections.
    pub fn set_primary(&mut self, primary: FormatSection) -> Result<&mut Self> {
        if !primary.is_empty() && self.branches.len() >= MAX_SECTIONS {
            return Err(Error::InvalidFormat(format!(
                "A number format holds at most {} sections",
                MAX_SECTIONS
            )));
        }
        self.primary = primary;
        Ok(self)
    }

    /// The parser only extends the primary of a model it is still building,
    /// which never holds more than [`MAX_SECTIONS`] sections in total.
    #[inline]
    pub(crate) fn primary_mut(&mut self) -> &mut FormatSection {
        &mut self.primary
    }

    #[inline]
    pub fn branches(&self) -> &[Branch] {
        &self.branches
    }

    /// Number of sections, counting the primary only when it carries anything
    /// or when there are no branches at all.
    pub fn section_count(&self) -> usize {
        let primary = usize::from(!self.primary.is_empty() || self.branches.is_empty());
        primary + self.branches.len()
    }

    /// Whether the branches are exactly the positional defaults of `table`.
    ///
    /// Such a model can be written back without condition tags, since
    /// re-parsing assigns the same conditions by position.
    pub fn uses_positional_conditions(&self, table: &[Condition]) -> bool {
        self.primary.is_empty()
            && self.branches.len() >= 2
            && self.branches.len() <= table.len()
            && self
                .branches
                .iter()
                .zip(table)
                .all(|(branch, default)| branch.condition == *default)
    }
}
