//! Colour tags (`[Red]`, `[Color10]`) of a format section.

use phf::{Map, phf_map};
use serde::{Deserialize, Serialize};

/// Highest `ColorNN` index understood by spreadsheet applications.
pub const MAX_INDEXED_COLOR: u8 = 56;

/// A section colour from the fixed format-code vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FormatColor {
    Black,
    White,
    Red,
    Green,
    Blue,
    Yellow,
    Magenta,
    Cyan,
    /// `ColorNN`, an index into the default 56-colour palette (1-based)
    Indexed(u8),
}

// Keys are lowercase; lookups lowercase the tag first
static NAMED_COLORS: Map<&'static str, FormatColor> = phf_map! {
    "black" => FormatColor::Black,
    "white" => FormatColor::White,
    "red" => FormatColor::Red,
    "green" => FormatColor::Green,
    "blue" => FormatColor::Blue,
    "yellow" => FormatColor::Yellow,
    "magenta" => FormatColor::Magenta,
    "cyan" => FormatColor::Cyan,
};

/// SpreadsheetML default palette as seen through `ColorNN` (entry `n - 1`).
static PALETTE: [&str; MAX_INDEXED_COLOR as usize] = [
    "000000", "FFFFFF", "FF0000", "00FF00", "0000FF", "FFFF00", "FF00FF", "00FFFF",
    "800000", "008000", "000080", "808000", "800080", "008080", "C0C0C0", "808080",
    "9999FF", "993366", "FFFFCC", "CCFFFF", "660066", "FF8080", "0066CC", "CCCCFF",
    "000080", "FF00FF", "FFFF00", "00FFFF", "800080", "800000", "008080", "0000FF",
    "00CCFF", "CCFFFF", "CCFFCC", "FFFF99", "99CCFF", "FF99CC", "CC99FF", "FFCC99",
    "3366FF", "33CCCC", "99CC00", "FFCC00", "FF9900", "FF6600", "666699", "969696",
    "003366", "339966", "003300", "333300", "993300", "993366", "333399", "333333",
];

impl FormatColor {
    /// Look up a colour tag (without brackets), ignoring case.
    ///
    /// # Examples
    ///
    /// ```
    /// use numstyle::numfmt::FormatColor;
    /// assert_eq!(FormatColor::from_name("RED"), Some(FormatColor::Red));
    /// assert_eq!(FormatColor::from_name("color10"), Some(FormatColor::Indexed(10)));
    /// assert_eq!(FormatColor::from_name("color99"), None);
    /// ```
    pub fn from_name(name: &str) -> Option<Self> {
        let lower = name.to_ascii_lowercase();
        if let Some(color) = NAMED_COLORS.get(lower.as_str()) {
            return Some(*color);
        }

        let index = lower.strip_prefix("color")?;
        if index.is_empty() || index.len() > 2 || !index.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        let index: u8 = index.parse().ok()?;
        (1..=MAX_INDEXED_COLOR)
            .contains(&index)
            .then_some(Self::Indexed(index))
    }

    /// The tag name as spreadsheet applications write it (`Red`, `Color10`).
    pub fn name(&self) -> String {
        match self {
            Self::Black => "Black".to_string(),
            Self::White => "White".to_string(),
            Self::Red => "Red".to_string(),
            Self::Green => "Green".to_string(),
            Self::Blue => "Blue".to_string(),
            Self::Yellow => "Yellow".to_string(),
            Self::Magenta => "Magenta".to_string(),
            Self::Cyan => "Cyan".to_string(),
            Self::Indexed(index) => format!("Color{}", index),
        }
    }

    /// Hex RGB value without the leading `#`.
    pub fn rgb(&self) -> &'static str {
        match self {
            Self::Black => "000000",
            Self::White => "FFFFFF",
            Self::Red => "FF0000",
            Self::Green => "00FF00",
            Self::Blue => "0000FF",
            Self::Yellow => "FFFF00",
            Self::Magenta => "FF00FF",
            Self::Cyan => "00FFFF",
            Self::Indexed(index) => {
                // Out-of-range indices cannot come from the parser
                let slot = usize::from((*index).clamp(1, MAX_INDEXED_COLOR) - 1);
                PALETTE[slot]
            },
        }
    }
}
