//! Parts of a format section: digit placeholder blocks and literal text.

use crate::common::{Error, Result};
use serde::{Deserialize, Serialize};

/// A digit placeholder block such as `#,##0.00`.
///
/// The block is described by digit counts rather than by its source text, so
/// `#,##0` and `#,#0` produce the same part.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawNumberPart")]
pub struct NumberPart {
    min_integer_digits: u32,
    max_integer_digits: Option<u32>,
    min_decimal_digits: u32,
    max_decimal_digits: Option<u32>,
    grouping: bool,
}

impl Default for NumberPart {
    /// The `0` placeholder: at least one integer digit and no decimals.
    fn default() -> Self {
        Self {
            min_integer_digits: 1,
            max_integer_digits: None,
            min_decimal_digits: 0,
            max_decimal_digits: Some(0),
            grouping: false,
        }
    }
}

impl NumberPart {
    /// Create a number part, validating the digit ranges.
    ///
    /// `None` maxima mean "unlimited".
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidAttribute`] if `min_integer_digits` is 0 or a
    /// maximum is lower than its minimum.
    pub fn new(
        min_integer_digits: u32,
        max_integer_digits: Option<u32>,
        min_decimal_digits: u32,
        max_decimal_digits: Option<u32>,
        grouping: bool,
    ) -> Result<Self> {
        let part = Self {
            min_integer_digits,
            max_integer_digits,
            min_decimal_digits,
            max_decimal_digits,
            grouping,
        };
        part.validate()?;
        Ok(part)
    }

    fn validate(&self) -> Result<()> {
        if self.min_integer_digits < 1 {
            return Err(Error::InvalidAttribute(
                "Minimum integer digits must be at least 1".to_string(),
            ));
        }
        if let Some(max) = self.max_integer_digits.filter(|&max| max < self.min_integer_digits) {
            return Err(Error::InvalidAttribute(format!(
                "Maximum integer digits ({}) lower than minimum ({})",
                max, self.min_integer_digits
            )));
        }
        if let Some(max) = self.max_decimal_digits.filter(|&max| max < self.min_decimal_digits) {
            return Err(Error::InvalidAttribute(format!(
                "Maximum decimal digits ({}) lower than minimum ({})",
                max, self.min_decimal_digits
            )));
        }
        Ok(())
    }

    /// Apply a change and roll it back if the result is invalid.
    fn update(&mut self, change: impl FnOnce(&mut Self)) -> Result<&mut Self> {
        let mut candidate = self.clone();
        change(&mut candidate);
        candidate.validate()?;
        *self = candidate;
        Ok(self)
    }

    /// Parse a placeholder block made of `#`, `0`, `.` and `,`.
    ///
    /// Grouping is enabled by any comma. Without a decimal point the part
    /// shows no decimals at all; with one it shows at least one. A block
    /// without any `0` before the point still shows one integer digit.
    ///
    /// # Examples
    ///
    /// ```
    /// use numstyle::numfmt::NumberPart;
    /// let part = NumberPart::parse("#,##0.00").unwrap();
    /// assert!(part.grouping());
    /// assert_eq!(part.min_integer_digits(), 1);
    /// assert_eq!(part.max_integer_digits(), None);
    /// assert_eq!(part.min_decimal_digits(), 2);
    /// assert_eq!(part.max_decimal_digits(), Some(2));
    /// ```
    pub fn parse(placeholder: &str) -> Result<Self> {
        let grouping = placeholder.contains(',');
        let stripped: String = placeholder.chars().filter(|&c| c != ',').collect();
        let unexpected =
            || Error::InvalidFormat(format!("Unexpected numeric format: {}", placeholder));

        let (integer, decimal) = match stripped.split_once('.') {
            Some((integer, decimal)) => (integer, Some(decimal)),
            None => (stripped.as_str(), None),
        };

        // Integer portion: (#*)(0*)
        let hashes = integer.bytes().take_while(|&b| b == b'#').count();
        let zeros = integer[hashes..].bytes().take_while(|&b| b == b'0').count();
        if hashes + zeros != integer.len() {
            return Err(unexpected());
        }

        let min_integer_digits = (zeros as u32).max(1);
        let max_integer_digits = if hashes > 0 && !grouping {
            Some((integer.len() as u32).max(min_integer_digits))
        } else {
            None
        };

        let (min_decimal_digits, max_decimal_digits) = match decimal {
            None => (0, Some(0)),
            Some(decimal) => {
                // Decimal portion: (0*)(#*)
                let zeros = decimal.bytes().take_while(|&b| b == b'0').count();
                let hashes = decimal[zeros..].bytes().take_while(|&b| b == b'#').count();
                if zeros + hashes != decimal.len() {
                    return Err(unexpected());
                }
                let min = (zeros as u32).max(1);
                (min, Some((decimal.len() as u32).max(min)))
            },
        };

        Self::new(
            min_integer_digits,
            max_integer_digits,
            min_decimal_digits,
            max_decimal_digits,
            grouping,
        )
    }

    /// Set the absolute number of digits after the decimal separator.
    pub fn set_decimal_places(&mut self, places: u32) -> &mut Self {
        self.min_decimal_digits = places;
        self.max_decimal_digits = Some(places);
        self
    }

    /// Set the minimum number of digits before the decimal separator.
    pub fn set_min_integer_digits(&mut self, digits: u32) -> Result<&mut Self> {
        self.update(|part| part.min_integer_digits = digits)
    }

    /// Set the maximum number of digits before the decimal separator.
    pub fn set_max_integer_digits(&mut self, digits: Option<u32>) -> Result<&mut Self> {
        self.update(|part| part.max_integer_digits = digits)
    }

    /// Set the minimum number of digits after the decimal separator.
    pub fn set_min_decimal_digits(&mut self, digits: u32) -> Result<&mut Self> {
        self.update(|part| part.min_decimal_digits = digits)
    }

    /// Set the maximum number of digits after the decimal separator.
    pub fn set_max_decimal_digits(&mut self, digits: Option<u32>) -> Result<&mut Self> {
        self.update(|part| part.max_decimal_digits = digits)
    }

    /// Enable or disable the thousands separator.
    pub fn set_grouping(&mut self, enabled: bool) -> &mut Self {
        self.grouping = enabled;
        self
    }

    #[inline]
    pub fn min_integer_digits(&self) -> u32 {
        self.min_integer_digits
    }

    #[inline]
    pub fn max_integer_digits(&self) -> Option<u32> {
        self.max_integer_digits
    }

    #[inline]
    pub fn min_decimal_digits(&self) -> u32 {
        self.min_decimal_digits
    }

    #[inline]
    pub fn max_decimal_digits(&self) -> Option<u32> {
        self.max_decimal_digits
    }

    /// Whether the thousands separator is enabled.
    #[inline]
    pub fn grouping(&self) -> bool {
        self.grouping
    }
}

#[derive(Deserialize)]
struct RawNumberPart {
    min_integer_digits: u32,
    max_integer_digits: Option<u32>,
    min_decimal_digits: u32,
    max_decimal_digits: Option<u32>,
    grouping: bool,
}

impl TryFrom<RawNumberPart> for NumberPart {
    type Error = Error;

    fn try_from(raw: RawNumberPart) -> Result<Self> {
        NumberPart::new(
            raw.min_integer_digits,
            raw.max_integer_digits,
            raw.min_decimal_digits,
            raw.max_decimal_digits,
            raw.grouping,
        )
    }
}

/// A literal text run, with any surrounding quotes already removed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TextPart {
    text: String,
}

impl TextPart {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Get the text value of the part.
    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }
}

/// One rendering unit of a format section.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FormatPart {
    Number(NumberPart),
    Text(TextPart),
}

impl FormatPart {
    /// Shorthand for a literal text part.
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(TextPart::new(text))
    }

    pub fn as_number(&self) -> Option<&NumberPart> {
        match self {
            Self::Number(part) => Some(part),
            Self::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(part) => Some(part.text()),
            Self::Number(_) => None,
        }
    }
}

impl From<NumberPart> for FormatPart {
    fn from(part: NumberPart) -> Self {
        Self::Number(part)
    }
}

impl From<TextPart> for FormatPart {
    fn from(part: TextPart) -> Self {
        Self::Text(part)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn digits(part: &NumberPart) -> (u32, Option<u32>, u32, Option<u32>, bool) {
        (
            part.min_integer_digits(),
            part.max_integer_digits(),
            part.min_decimal_digits(),
            part.max_decimal_digits(),
            part.grouping(),
        )
    }

    #[test]
    fn test_parse_plain_placeholders() {
        assert_eq!(digits(&NumberPart::parse("0").unwrap()), (1, None, 0, Some(0), false));
        assert_eq!(digits(&NumberPart::parse("000").unwrap()), (3, None, 0, Some(0), false));
        assert_eq!(digits(&NumberPart::parse("0.00").unwrap()), (1, None, 2, Some(2), false));
    }

    #[test]
    fn test_parse_hash_caps_integer_digits() {
        assert_eq!(digits(&NumberPart::parse("##0").unwrap()), (1, Some(3), 0, Some(0), false));
        assert_eq!(digits(&NumberPart::parse("#").unwrap()), (1, Some(1), 0, Some(0), false));
    }

    #[test]
    fn test_parse_grouping_lifts_cap() {
        assert_eq!(
            digits(&NumberPart::parse("#,##0.00").unwrap()),
            (1, None, 2, Some(2), true)
        );
        assert_eq!(digits(&NumberPart::parse("#,#00").unwrap()), (2, None, 0, Some(0), true));
    }

    #[test]
    fn test_parse_optional_decimals() {
        assert_eq!(digits(&NumberPart::parse("0.0##").unwrap()), (1, None, 1, Some(3), false));
        // A bare point still asks for one decimal
        assert_eq!(digits(&NumberPart::parse("0.").unwrap()), (1, None, 1, Some(1), false));
        assert_eq!(digits(&NumberPart::parse("0.##").unwrap()), (1, None, 1, Some(2), false));
    }

    #[test]
    fn test_parse_decimal_only_clamps_integer_digits() {
        assert_eq!(digits(&NumberPart::parse(".00").unwrap()), (1, None, 2, Some(2), false));
        assert_eq!(digits(&NumberPart::parse(",").unwrap()), (1, None, 0, Some(0), true));
    }

    #[test]
    fn test_parse_rejects_mixed_order() {
        for bad in ["0#", "0.#0", "0.0.0", "#0#"] {
            let err = NumberPart::parse(bad).unwrap_err();
            assert!(matches!(err, Error::InvalidFormat(_)), "placeholder {bad:?}");
        }
    }

    #[test]
    fn test_new_validates() {
        assert!(matches!(
            NumberPart::new(0, None, 0, None, false),
            Err(Error::InvalidAttribute(_))
        ));
        assert!(NumberPart::new(3, Some(2), 0, None, false).is_err());
        assert!(NumberPart::new(1, None, 3, Some(2), false).is_err());
        assert!(NumberPart::new(2, Some(2), 2, None, true).is_ok());
    }

    #[test]
    fn test_setters_roll_back_on_error() {
        let mut part = NumberPart::default();
        part.set_max_integer_digits(Some(4)).unwrap();
        assert!(part.set_min_integer_digits(5).is_err());
        assert_eq!(part.min_integer_digits(), 1);
        assert_eq!(part.max_integer_digits(), Some(4));

        part.set_decimal_places(2).set_grouping(true);
        assert!(part.set_max_decimal_digits(Some(1)).is_err());
        assert_eq!(digits(&part), (1, Some(4), 2, Some(2), true));
    }

    #[test]
    fn test_deserialize_rejects_invalid_digits() {
        let json = r#"{"min_integer_digits":0,"max_integer_digits":null,"min_decimal_digits":0,"max_decimal_digits":0,"grouping":false}"#;
        assert!(serde_json::from_str::<NumberPart>(json).is_err());
    }
}
