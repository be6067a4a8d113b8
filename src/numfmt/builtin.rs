//! Frequently used format codes and the SpreadsheetML built-in formats.
//!
//! Built-in formats have fixed ids that every consumer knows, so writers never
//! need to declare them. Only the numeric ones are listed here; date and time
//! built-ins are outside what the parser models.

use super::model::FormatModel;
use super::parser::parse;
use once_cell::sync::Lazy;

pub const FORMAT_GENERAL: &str = "General";
pub const FORMAT_NUMBER: &str = "0";
pub const FORMAT_NUMBER_00: &str = "0.00";
pub const FORMAT_NUMBER_COMMA_SEPARATED1: &str = "#,##0.00";
pub const FORMAT_NUMBER_COMMA_SEPARATED2: &str = "#,##0.00_-";
pub const FORMAT_CURRENCY_EUR: &str = "#,##0_-\"€\"";
pub const FORMAT_CURRENCY_EUR_SIMPLE: &str = "#,##0.00_-\"€\"";
pub const FORMAT_CURRENCY_USD: &str = "\"$\"#,##0_-";
pub const FORMAT_CURRENCY_USD_SIMPLE: &str = "\"$\"#,##0.00_-";
pub const FORMAT_PERCENTAGE: &str = "0%";
pub const FORMAT_PERCENTAGE_00: &str = "0.00%";
pub const FORMAT_TEXT: &str = "@";

/// Ids of the numeric built-in formats, in ascending order.
const BUILTIN_IDS: [u32; 12] = [0, 1, 2, 3, 4, 9, 10, 37, 38, 39, 40, 49];

/// Get the format code for a numeric built-in format id.
///
/// Returns `None` for date/time built-ins and for custom ids (164 and up).
pub fn builtin_format_code(id: u32) -> Option<&'static str> {
    match id {
        0 => Some(FORMAT_GENERAL),
        1 => Some(FORMAT_NUMBER),
        2 => Some(FORMAT_NUMBER_00),
        3 => Some("#,##0"),
        4 => Some(FORMAT_NUMBER_COMMA_SEPARATED1),
        9 => Some(FORMAT_PERCENTAGE),
        10 => Some(FORMAT_PERCENTAGE_00),
        37 => Some("#,##0 ;(#,##0)"),
        38 => Some("#,##0 ;[Red](#,##0)"),
        39 => Some("#,##0.00;(#,##0.00)"),
        40 => Some("#,##0.00;[Red](#,##0.00)"),
        49 => Some(FORMAT_TEXT),
        _ => None,
    }
}

/// Parsed built-ins, built on first use.
static BUILTIN_MODELS: Lazy<Vec<(u32, FormatModel)>> = Lazy::new(|| {
    BUILTIN_IDS
        .iter()
        .filter_map(|&id| {
            let code = builtin_format_code(id)?;
            match parse(code) {
                Ok(model) => Some((id, model)),
                Err(e) => {
                    log::warn!("Built-in format {} ({:?}) does not parse: {}", id, code, e);
                    None
                },
            }
        })
        .collect()
});

/// The parsed model of a numeric built-in format.
pub fn builtin_model(id: u32) -> Option<&'static FormatModel> {
    BUILTIN_MODELS
        .iter()
        .find(|(builtin, _)| *builtin == id)
        .map(|(_, model)| model)
}

/// The built-in id whose format is equal to `model`, if any.
///
/// # Examples
///
/// ```
/// use numstyle::numfmt::builtin::builtin_id_for;
/// let model = numstyle::parse("0.00%").unwrap();
/// assert_eq!(builtin_id_for(&model), Some(10));
/// ```
pub fn builtin_id_for(model: &FormatModel) -> Option<u32> {
    BUILTIN_MODELS
        .iter()
        .find(|(_, builtin)| builtin == model)
        .map(|(id, _)| *id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numfmt::color::FormatColor;

    #[test]
    fn test_builtin_format_code() {
        assert_eq!(builtin_format_code(0), Some("General"));
        assert_eq!(builtin_format_code(3), Some("#,##0"));
        assert_eq!(builtin_format_code(49), Some("@"));
        // Date formats are not modelled
        assert_eq!(builtin_format_code(14), None);
        assert_eq!(builtin_format_code(164), None);
    }

    #[test]
    fn test_every_builtin_parses() {
        for id in BUILTIN_IDS {
            assert!(builtin_model(id).is_some(), "built-in {id}");
        }
        assert_eq!(BUILTIN_MODELS.len(), BUILTIN_IDS.len());
    }

    #[test]
    fn test_accounting_builtins_have_two_sections() {
        let model = builtin_model(40).unwrap();
        assert_eq!(model.branches().len(), 2);
        assert_eq!(model.branches()[1].section.color(), Some(FormatColor::Red));
        assert!(model.primary().is_empty());
    }

    #[test]
    fn test_builtin_id_for() {
        assert_eq!(builtin_id_for(&parse("0").unwrap()), Some(1));
        assert_eq!(builtin_id_for(&parse("#,##0.00").unwrap()), Some(4));
        assert_eq!(builtin_id_for(&parse("@").unwrap()), Some(49));
        // Equal models, different spelling
        assert_eq!(builtin_id_for(&parse("#,#0").unwrap()), Some(3));
        assert_eq!(builtin_id_for(&parse(FORMAT_CURRENCY_EUR).unwrap()), None);
    }
}
