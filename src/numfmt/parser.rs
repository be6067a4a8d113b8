//! Number format code parser.
//!
//! Turns a format code such as `#,##0.00;[Red]-#,##0.00` into a
//! [`FormatModel`]. Parsing is a single forward pass per section:
//!
//! 1. Split the code on `;` (outside quoted text) into at most four sections.
//! 2. Read the leading `[Colour]` and `[<op><number>]` tags of each section.
//! 3. Cut the remainder into parts, trying a digit placeholder block first,
//!    then a quoted string, then a run of plain literal characters.
//!
//! When no section carries an explicit condition tag, sections receive the
//! positional default conditions of the configured [`DefaultConditions`]
//! table. As soon as one explicit condition appears anywhere, no defaults
//! are injected and untagged sections fold into the primary section.

use super::color::FormatColor;
use super::condition::{Comparator, Condition};
use super::model::{FormatModel, MAX_SECTIONS};
use super::part::{FormatPart, NumberPart};
use super::section::FormatSection;
use crate::common::{Error, Result};
use smallvec::SmallVec;

/// `<0`, `>0`, `=0`, text.
static STANDARD_CONDITIONS: [Condition; 4] = [
    Condition::against_zero(Comparator::LessThan),
    Condition::against_zero(Comparator::GreaterThan),
    Condition::against_zero(Comparator::Equal),
    Condition::is_text(),
];

/// `<0`, `>=0`, `=0`; no text slot.
static LEGACY_CONDITIONS: [Condition; 3] = [
    Condition::against_zero(Comparator::LessThan),
    Condition::against_zero(Comparator::GreaterOrEqual),
    Condition::against_zero(Comparator::Equal),
];

/// Table of conditions assigned to untagged sections by position.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DefaultConditions {
    /// Four slots: `<0`, `>0`, `=0` and text
    #[default]
    Standard,
    /// Three slots: `<0`, `>=0` and `=0`, as written by older revisions
    Legacy,
}

impl DefaultConditions {
    /// The conditions of this table, indexed by section position.
    pub fn table(&self) -> &'static [Condition] {
        match self {
            Self::Standard => &STANDARD_CONDITIONS,
            Self::Legacy => &LEGACY_CONDITIONS,
        }
    }
}

/// Parser configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseOptions {
    /// Reject sections spanning a line feed and surplus sections instead of
    /// silently dropping them
    pub strict: bool,
    /// Conditions for untagged sections
    pub default_conditions: DefaultConditions,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            strict: true,
            default_conditions: DefaultConditions::Standard,
        }
    }
}

impl ParseOptions {
    /// Options that drop malformed sections like older writers did.
    pub fn lenient() -> Self {
        Self {
            strict: false,
            ..Self::default()
        }
    }
}

/// Number format code parser.
///
/// # Examples
///
/// ```
/// use numstyle::numfmt::{Parser, ParseOptions};
///
/// let parser = Parser::new(ParseOptions::default());
/// let model = parser.parse("[Red]0.00").unwrap();
/// assert_eq!(model.primary().parts().len(), 1);
/// assert!(model.branches().is_empty());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Parser {
    options: ParseOptions,
}

/// Leading tags of a section and the format text behind them.
#[derive(Debug)]
struct SectionHeader<'a> {
    color: Option<FormatColor>,
    condition: Option<Condition>,
    format: &'a str,
}

impl Parser {
    pub fn new(options: ParseOptions) -> Self {
        Self { options }
    }

    #[inline]
    pub fn options(&self) -> &ParseOptions {
        &self.options
    }

    /// Parse a format code.
    ///
    /// Parsing is all-or-nothing: the first error aborts and no partial
    /// model is returned.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidFormat`] for unknown comparators, non-numeric
    /// condition values, bad placeholder blocks and, in strict mode,
    /// sections spanning a line feed or more than four sections.
    pub fn parse(&self, code: &str) -> Result<FormatModel> {
        log::debug!("Parsing number format {:?}", code);

        let uses_custom_conditions = contains_condition_tag(code);
        let defaults = self.options.default_conditions.table();
        let sections = split_sections(code);
        let num_sections = sections.len();

        if num_sections > MAX_SECTIONS {
            if self.options.strict {
                return Err(Error::InvalidFormat(format!(
                    "Too many sections ({}), at most {} are allowed: \"{}\"",
                    num_sections, MAX_SECTIONS, code
                )));
            }
            log::warn!(
                "Ignoring {} surplus section(s) of number format {:?}",
                num_sections - MAX_SECTIONS,
                code
            );
        }

        let mut model = FormatModel::default();
        for (index, token) in sections.into_iter().take(MAX_SECTIONS).enumerate() {
            let Some(header) = parse_header(token)? else {
                if self.options.strict {
                    return Err(Error::InvalidFormat(format!(
                        "Malformed section header: \"{}\"",
                        token
                    )));
                }
                log::warn!("Skipping malformed section {} of number format {:?}", index, code);
                continue;
            };

            let condition = match header.condition {
                Some(condition) => Some(condition),
                None if !uses_custom_conditions => defaults.get(index).copied(),
                None => None,
            };
            let parts = parse_parts(header.format)?;

            match condition {
                Some(condition) if num_sections != 1 => {
                    let section = FormatSection::with_parts(parts, header.color);
                    model.add_branch(condition, section)?;
                },
                _ => {
                    let primary = model.primary_mut();
                    if header.color.is_some() {
                        primary.set_color(header.color);
                    }
                    primary.extend(parts);
                },
            }
        }

        log::debug!(
            "Parsed number format {:?} into {} branch(es)",
            code,
            model.branches().len()
        );
        Ok(model)
    }
}

/// Parse a format code with the default (strict, standard table) options.
///
/// # Examples
///
/// ```
/// let model = numstyle::parse("#,##0.00").unwrap();
/// let number = model.primary().parts()[0].as_number().unwrap();
/// assert!(number.grouping());
/// assert_eq!(number.min_decimal_digits(), 2);
/// ```
pub fn parse(code: &str) -> Result<FormatModel> {
    Parser::default().parse(code)
}

/// Whether the code holds a complete `[<op><number>]` tag outside quoted text.
fn contains_condition_tag(code: &str) -> bool {
    let mut quote: Option<char> = None;
    let mut escaped = false;

    for (i, c) in code.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        match (quote, c) {
            (Some(q), _) if c == q => quote = None,
            (Some(_), _) => {},
            (None, '"' | '\'') => quote = Some(c),
            (None, '\\') => escaped = true,
            (None, '[') => {
                let inner = &code[i + 1..];
                if inner
                    .find(']')
                    .is_some_and(|close| parse_condition(&inner[..close]).is_ok())
                {
                    return true;
                }
            },
            _ => {},
        }
    }
    false
}

/// Whether a header bracket group is meant as a condition.
#[inline]
fn starts_with_comparator(content: &str) -> bool {
    matches!(content.as_bytes().first(), Some(b'<' | b'>' | b'='))
}

/// Split on `;`, leaving quoted text and backslash escapes intact.
fn split_sections(code: &str) -> SmallVec<[&str; 4]> {
    let mut sections = SmallVec::new();
    let mut quote: Option<char> = None;
    let mut escaped = false;
    let mut start = 0;

    for (i, c) in code.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        match (quote, c) {
            (Some(q), _) if c == q => quote = None,
            (Some(_), _) => {},
            (None, '"' | '\'') => quote = Some(c),
            (None, '\\') => escaped = true,
            (None, ';') => {
                sections.push(&code[start..i]);
                start = i + 1;
            },
            _ => {},
        }
    }
    sections.push(&code[start..]);
    sections
}

/// Read the leading colour/condition tags of a section.
///
/// The header ends at the first bracket group that is unterminated, is not a
/// tag, or repeats a tag already seen; everything from there on is format
/// text. Returns `Ok(None)` only for a section spanning a line feed.
fn parse_header(token: &str) -> Result<Option<SectionHeader<'_>>> {
    if token.contains('\n') {
        return Ok(None);
    }

    let mut color = None;
    let mut condition = None;
    let mut rest = token;

    while let Some(inner) = rest.strip_prefix('[')
        && let Some(close) = inner.find(']')
    {
        let content = &inner[..close];

        if let Some(tag_color) = FormatColor::from_name(content)
            && color.is_none()
        {
            color = Some(tag_color);
        } else if starts_with_comparator(content) && condition.is_none() {
            condition = Some(parse_condition(content)?);
        } else {
            // Locale, currency or elapsed-time tags belong to the format text
            break;
        }
        rest = &inner[close + 1..];
    }

    Ok(Some(SectionHeader {
        color,
        condition,
        format: rest,
    }))
}

/// Parse the content of a condition tag such as `>=-1.5`.
fn parse_condition(content: &str) -> Result<Condition> {
    let op_len = content
        .bytes()
        .take_while(|&b| matches!(b, b'<' | b'>' | b'='))
        .count();
    let (op, value) = content.split_at(op_len);

    let comparator = Comparator::from_token(op)?.ok_or_else(|| {
        Error::InvalidFormat(format!("Missing comparator in condition \"[{}]\"", content))
    })?;

    let value = value.trim();
    let threshold: f64 = fast_float2::parse(value).map_err(|_| {
        Error::InvalidFormat(format!("Condition value must be numeric: \"{}\"", value))
    })?;

    Condition::new(threshold, comparator)
}

/// Cut the format text of a section into parts.
fn parse_parts(format: &str) -> Result<SmallVec<[FormatPart; 4]>> {
    let mut parts = SmallVec::new();
    let mut rest = format;

    while !rest.is_empty() {
        let (part, consumed) = if let Some(len) = digit_block_len(rest) {
            (FormatPart::Number(NumberPart::parse(&rest[..len])?), len)
        } else if let Some((text, len)) = quoted_text(rest) {
            (FormatPart::text(text), len)
        } else if let Some((text, len)) = escaped_char(rest) {
            (FormatPart::text(text), len)
        } else if let Some(len) = literal_run_len(rest) {
            (FormatPart::text(&rest[..len]), len)
        } else {
            return Err(Error::InvalidFormat(format!(
                "Unable to parse format string. No known token starting at first character: \"{}\"",
                prefix(rest, 5)
            )));
        };

        log::trace!("Matched {:?} from {:?}", part, &rest[..consumed]);
        parts.push(part);
        rest = &rest[consumed..];
    }

    Ok(parts)
}

#[inline]
fn is_digit_block_char(b: u8) -> bool {
    matches!(b, b'#' | b'0' | b'.' | b',')
}

/// Length of a leading `[#0.,]+` run.
fn digit_block_len(s: &str) -> Option<usize> {
    let len = s.bytes().take_while(|&b| is_digit_block_char(b)).count();
    (len > 0).then_some(len)
}

/// A leading `"..."` or `'...'` run: the unquoted text and the quoted length.
fn quoted_text(s: &str) -> Option<(&str, usize)> {
    let quote = s.chars().next().filter(|c| matches!(c, '"' | '\''))?;
    let body = &s[1..];
    let end = body.find(quote)?;
    Some((&body[..end], end + 2))
}

/// A leading `\x` escape: the escaped character and the escape length.
fn escaped_char(s: &str) -> Option<(&str, usize)> {
    let escaped = s.strip_prefix('\\')?;
    let c = escaped.chars().next()?;
    Some((&escaped[..c.len_utf8()], 1 + c.len_utf8()))
}

/// Length of a leading run of characters outside `[#0.,]`.
///
/// A backslash escape inside the run stays part of it, so `_\0` is one
/// literal and not a literal followed by a placeholder.
fn literal_run_len(s: &str) -> Option<usize> {
    let mut chars = s.char_indices();
    let mut len = 0;
    while let Some((i, c)) = chars.next() {
        if c.is_ascii() && is_digit_block_char(c as u8) {
            break;
        }
        len = i + c.len_utf8();
        if c == '\\'
            && let Some((j, escaped)) = chars.next()
        {
            len = j + escaped.len_utf8();
        }
    }
    (len > 0).then_some(len)
}

fn prefix(s: &str, chars: usize) -> &str {
    s.char_indices().nth(chars).map_or(s, |(i, _)| &s[..i])
}
