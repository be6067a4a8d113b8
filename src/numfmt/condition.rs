//! Section conditions (`[<0]`, `[>=100]`, ...) of a number format.

use crate::common::{Error, Result};
use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

/// Comparison applied by a section condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Comparator {
    /// Value must be lower than the threshold
    LessThan,
    /// Value must be lower than or equal to the threshold
    LessOrEqual,
    /// Value must be equal to the threshold
    Equal,
    /// Value must be greater than or equal to the threshold
    GreaterOrEqual,
    /// Value must be greater than the threshold
    GreaterThan,
    /// Value is text; the threshold is ignored
    IsText,
}

impl Comparator {
    /// Map a comparator token as written inside a condition tag.
    ///
    /// An empty (or all-whitespace) token means "no explicit comparator"
    /// and yields `Ok(None)`.
    ///
    /// # Examples
    ///
    /// ```
    /// use numstyle::numfmt::Comparator;
    /// assert_eq!(Comparator::from_token(">=").unwrap(), Some(Comparator::GreaterOrEqual));
    /// assert_eq!(Comparator::from_token("").unwrap(), None);
    /// assert!(Comparator::from_token("<>").is_err());
    /// ```
    pub fn from_token(token: &str) -> Result<Option<Self>> {
        match token.trim() {
            "<" => Ok(Some(Self::LessThan)),
            "<=" => Ok(Some(Self::LessOrEqual)),
            "=" => Ok(Some(Self::Equal)),
            ">=" => Ok(Some(Self::GreaterOrEqual)),
            ">" => Ok(Some(Self::GreaterThan)),
            "" => Ok(None),
            other => Err(Error::InvalidFormat(format!(
                "Unknown comparator string: \"{}\"",
                other
            ))),
        }
    }

    /// Symbol used when writing the comparator back out.
    ///
    /// `IsText` has no symbol in either target dialect.
    pub fn symbol(&self) -> Option<&'static str> {
        match self {
            Self::LessThan => Some("<"),
            Self::LessOrEqual => Some("<="),
            Self::Equal => Some("="),
            Self::GreaterOrEqual => Some(">="),
            Self::GreaterThan => Some(">"),
            Self::IsText => None,
        }
    }
}

/// A comparison of the cell value against a numeric threshold.
///
/// Conditions are immutable once built. Equality and hashing are by value so
/// that whole format models can be used as registry keys.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(try_from = "RawCondition")]
pub struct Condition {
    comparator: Comparator,
    threshold: f64,
}

impl Condition {
    /// Create a condition.
    ///
    /// Fails when the threshold is not a finite number, unless the
    /// comparator is [`Comparator::IsText`] (whose threshold is meaningless
    /// and stored as `0`).
    pub fn new(threshold: f64, comparator: Comparator) -> Result<Self> {
        if comparator == Comparator::IsText {
            return Ok(Self::is_text());
        }

        if !threshold.is_finite() {
            return Err(Error::InvalidFormat(format!(
                "Condition value must be numeric, got {}",
                threshold
            )));
        }

        Ok(Self {
            comparator,
            // Normalise -0.0 so equal conditions hash equally
            threshold: if threshold == 0.0 { 0.0 } else { threshold },
        })
    }

    /// The condition selecting text values.
    pub const fn is_text() -> Self {
        Self {
            comparator: Comparator::IsText,
            threshold: 0.0,
        }
    }

    /// Compare against zero. Used for the positional default tables.
    pub(crate) const fn against_zero(comparator: Comparator) -> Self {
        Self {
            comparator,
            threshold: 0.0,
        }
    }

    /// Get the comparator of the condition.
    #[inline]
    pub fn comparator(&self) -> Comparator {
        self.comparator
    }

    /// Get the value to compare against.
    #[inline]
    pub fn threshold(&self) -> f64 {
        self.threshold
    }
}

impl PartialEq for Condition {
    fn eq(&self, other: &Self) -> bool {
        self.comparator == other.comparator && self.threshold.to_bits() == other.threshold.to_bits()
    }
}

impl Eq for Condition {}

impl Hash for Condition {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.comparator.hash(state);
        self.threshold.to_bits().hash(state);
    }
}

/// Unvalidated wire form; deserialization goes through [`Condition::new`].
#[derive(Deserialize)]
struct RawCondition {
    comparator: Comparator,
    threshold: f64,
}

impl TryFrom<RawCondition> for Condition {
    type Error = Error;

    fn try_from(raw: RawCondition) -> Result<Self> {
        Condition::new(raw.threshold, raw.comparator)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_comparator_tokens() {
        let cases = [
            ("<", Comparator::LessThan),
            ("<=", Comparator::LessOrEqual),
            ("=", Comparator::Equal),
            (">=", Comparator::GreaterOrEqual),
            (">", Comparator::GreaterThan),
            (" > ", Comparator::GreaterThan),
        ];
        for (token, expected) in cases {
            assert_eq!(Comparator::from_token(token).unwrap(), Some(expected));
        }
        assert_eq!(Comparator::from_token("  ").unwrap(), None);
    }

    #[test]
    fn test_unknown_comparator_tokens() {
        for token in ["==", "=<", "<>", "!=", "=>", "<<", "x"] {
            let err = Comparator::from_token(token).unwrap_err();
            assert!(matches!(err, Error::InvalidFormat(_)), "token {token:?}");
        }
    }

    #[test]
    fn test_symbols_roundtrip_tokens() {
        for comparator in [
            Comparator::LessThan,
            Comparator::LessOrEqual,
            Comparator::Equal,
            Comparator::GreaterOrEqual,
            Comparator::GreaterThan,
        ] {
            let symbol = comparator.symbol().unwrap();
            assert_eq!(Comparator::from_token(symbol).unwrap(), Some(comparator));
        }
        assert_eq!(Comparator::IsText.symbol(), None);
    }

    #[test]
    fn test_condition_rejects_non_finite() {
        assert!(Condition::new(f64::NAN, Comparator::Equal).is_err());
        assert!(Condition::new(f64::INFINITY, Comparator::LessThan).is_err());
        // The text condition ignores its threshold entirely
        let text = Condition::new(f64::NAN, Comparator::IsText).unwrap();
        assert_eq!(text, Condition::is_text());
    }

    #[test]
    fn test_negative_zero_is_zero() {
        let a = Condition::new(-0.0, Comparator::LessThan).unwrap();
        let b = Condition::new(0.0, Comparator::LessThan).unwrap();
        assert_eq!(a, b);
        assert!(a.threshold().is_sign_positive());
    }

    #[test]
    fn test_deserialize_validates() {
        let ok: Condition =
            serde_json::from_str(r#"{"comparator":"GreaterThan","threshold":1.5}"#).unwrap();
        assert_eq!(ok, Condition::new(1.5, Comparator::GreaterThan).unwrap());

        let json = serde_json::to_string(&ok).unwrap();
        assert_eq!(serde_json::from_str::<Condition>(&json).unwrap(), ok);
    }
}
