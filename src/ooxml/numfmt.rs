//! SpreadsheetML `formatCode` generation.

use crate::common::format_number;
use crate::numfmt::builtin::FORMAT_GENERAL;
use crate::numfmt::{Condition, DefaultConditions, FormatModel, FormatPart, FormatSection, NumberPart};

/// Characters the parser would read as placeholders or section separators.
const RESERVED_CHARS: [char; 5] = ['#', '0', '.', ',', ';'];

/// Markers of runs that already carry format codes or escapes of their own.
const CODE_CHARS: [char; 6] = ['_', '\\', '[', '@', '*', '"'];

/// Render a model as a SpreadsheetML format code.
///
/// Branches come first in declaration order, followed by the primary
/// section, all joined with `;`. When the branches carry exactly the
/// positional default conditions their tags are left out, so `0.00;-0.00`
/// renders as written instead of `[<0]0.00;[>0]-0.00`.
///
/// # Examples
///
/// ```
/// use numstyle::{parse, render_ooxml};
///
/// let model = parse("#,##0.00;[Red]-#,##0.00").unwrap();
/// assert_eq!(render_ooxml(&model), "#,##0.00;[Red]-#,##0.00");
///
/// let model = parse("[>=100][Blue]0;0.00").unwrap();
/// assert_eq!(render_ooxml(&model), "[Blue][>=100]0;0.00");
/// ```
pub fn render_ooxml(model: &FormatModel) -> String {
    let positional = model.uses_positional_conditions(DefaultConditions::Standard.table());
    let mut sections: Vec<String> = Vec::with_capacity(model.branches().len() + 1);

    for branch in model.branches() {
        let condition = (!positional).then_some(&branch.condition);
        sections.push(render_section(&branch.section, condition));
    }

    if !(model.primary().is_empty() && !model.branches().is_empty()) {
        sections.push(render_section(model.primary(), None));
    }

    sections.join(";")
}

fn render_section(section: &FormatSection, condition: Option<&Condition>) -> String {
    let mut out = String::new();

    if let Some(color) = section.color() {
        out.push('[');
        out.push_str(&color.name());
        out.push(']');
    }

    if let Some(condition) = condition
        && let Some(symbol) = condition.comparator().symbol()
    {
        out.push('[');
        out.push_str(symbol);
        out.push_str(&format_number(condition.threshold()));
        out.push(']');
    }

    for part in section.parts() {
        match part {
            FormatPart::Number(number) => render_number(&mut out, number),
            FormatPart::Text(text) => render_text(&mut out, text.text()),
        }
    }

    out
}

/// Write a digit placeholder block such as `#,##0.00#`.
fn render_number(out: &mut String, part: &NumberPart) {
    let min_integers = part.min_integer_digits() as usize;
    let mut width = part
        .max_integer_digits()
        .map_or(min_integers, |max| (max as usize).max(min_integers));
    if part.grouping() {
        // A separator needs at least one digit position on its left
        width = width.max(4);
    }

    // Positions count from the right: 0 is the units digit
    for position in (0..width).rev() {
        out.push(if position < min_integers { '0' } else { '#' });
        if part.grouping() && position > 0 && position % 3 == 0 {
            out.push(',');
        }
    }

    let min_decimals = part.min_decimal_digits() as usize;
    let max_decimals = part
        .max_decimal_digits()
        .map_or(min_decimals, |max| (max as usize).max(min_decimals));
    if max_decimals > 0 {
        out.push('.');
        out.extend(std::iter::repeat_n('0', min_decimals));
        out.extend(std::iter::repeat_n('#', max_decimals - min_decimals));
    }
}

/// Whether a literal must be quoted to read back as the same text.
fn needs_quotes(text: &str) -> bool {
    if text.contains(RESERVED_CHARS) || text.starts_with(['"', '\'']) {
        return true;
    }
    // Bare letters are date or exponent codes to spreadsheet applications
    text.chars().any(char::is_alphabetic)
        && !text.contains(CODE_CHARS)
        && !text.eq_ignore_ascii_case(FORMAT_GENERAL)
}

/// Write a literal, quoting it when its raw form would not read back as text.
///
/// A `"` cannot appear inside a quoted run, so it is written as `\"`
/// between runs.
fn render_text(out: &mut String, text: &str) {
    if !needs_quotes(text) {
        out.push_str(text);
        return;
    }

    for (i, run) in text.split('"').enumerate() {
        if i > 0 {
            out.push_str("\\\"");
        }
        if !run.is_empty() {
            out.push('"');
            out.push_str(run);
            out.push('"');
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numfmt::{Comparator, FormatColor, builtin, parse};

    fn roundtrip(code: &str) -> String {
        render_ooxml(&parse(code).unwrap())
    }

    #[test]
    fn test_builtin_codes_render_as_written() {
        for code in [
            builtin::FORMAT_NUMBER,
            builtin::FORMAT_NUMBER_00,
            builtin::FORMAT_NUMBER_COMMA_SEPARATED1,
            builtin::FORMAT_NUMBER_COMMA_SEPARATED2,
            builtin::FORMAT_CURRENCY_EUR,
            builtin::FORMAT_CURRENCY_EUR_SIMPLE,
            builtin::FORMAT_PERCENTAGE,
            builtin::FORMAT_PERCENTAGE_00,
            builtin::FORMAT_TEXT,
        ] {
            assert_eq!(roundtrip(code), code);
        }
    }

    #[test]
    fn test_quoted_literals_are_requoted_only_when_needed() {
        // "$" reads back fine without quotes
        assert_eq!(roundtrip(builtin::FORMAT_CURRENCY_USD), "$#,##0_-");
        assert_eq!(roundtrip("0\" pcs.\""), "0\" pcs.\"");
        assert_eq!(roundtrip("0\" a;b\""), "0\" a;b\"");
    }

    #[test]
    fn test_double_quotes_are_escaped() {
        assert_eq!(roundtrip("0'\"10.'"), "0\\\"\"10.\"");
        assert_eq!(roundtrip("0'\"a.b\"'"), "0\\\"\"a.b\"\\\"");
        assert_eq!(roundtrip("0\\\""), "0\\\"");

        // The escaped form reads back as the same display text
        let rendered = roundtrip("0'\"10.'");
        let model = parse(&rendered).unwrap();
        let text: String = model
            .primary()
            .parts()
            .iter()
            .filter_map(|part| match part {
                FormatPart::Text(text) => Some(text.text()),
                FormatPart::Number(_) => None,
            })
            .collect();
        assert_eq!(text, "\"10.");
    }

    #[test]
    fn test_letters_are_quoted() {
        assert_eq!(roundtrip("0.0 kg"), "0.0\" kg\"");
        assert_eq!(roundtrip("0.0\" kg\""), "0.0\" kg\"");
        // Code runs stay as written
        assert_eq!(roundtrip("[$-411]0"), "[$-411]0");
        assert_eq!(roundtrip("General"), "General");
        assert_eq!(roundtrip("0 €"), "0 €");
    }

    #[test]
    fn test_integer_grid() {
        assert_eq!(roundtrip("000"), "000");
        assert_eq!(roundtrip("##0"), "##0");
        assert_eq!(roundtrip("#,#00"), "#,#00");
        assert_eq!(roundtrip("0,000"), "0,000");
        // Decimal-only blocks gain their implicit integer digit
        assert_eq!(roundtrip(".00"), "0.00");
    }

    #[test]
    fn test_optional_decimals() {
        assert_eq!(roundtrip("0.0##"), "0.0##");
        assert_eq!(roundtrip("0.##"), "0.0#");
    }

    #[test]
    fn test_positional_sections_render_without_tags() {
        assert_eq!(roundtrip("0.00;0.00;0;@"), "0.00;0.00;0;@");
        assert_eq!(roundtrip("[<0]0;[>0]0"), "0;0");
    }

    #[test]
    fn test_custom_conditions_render_with_tags() {
        assert_eq!(roundtrip("[>100]0.00;0"), "[>100]0.00;0");
        assert_eq!(roundtrip("[<=-1.5]0;[Red]0"), "[<=-1.5]0;[Red]0");
        assert_eq!(roundtrip("[Color10][=0]0;0"), "[Color10][=0]0;0");
    }

    #[test]
    fn test_text_condition_has_no_tag() {
        let mut model = FormatModel::default();
        model
            .add_branch(
                Condition::new(5.0, Comparator::GreaterThan).unwrap(),
                FormatSection::with_parts([FormatPart::from(NumberPart::default())], None),
            )
            .unwrap()
            .add_branch(
                Condition::is_text(),
                FormatSection::with_parts([FormatPart::text("@")], Some(FormatColor::Blue)),
            )
            .unwrap();
        assert_eq!(render_ooxml(&model), "[>5]0;[Blue]@");
    }

    #[test]
    fn test_empty_model() {
        assert_eq!(render_ooxml(&FormatModel::default()), "");
    }

    #[test]
    fn test_programmatic_part() {
        let mut part = NumberPart::default();
        part.set_decimal_places(3).set_grouping(true);
        let model = FormatModel::new(FormatSection::with_parts([part.into()], None));
        assert_eq!(render_ooxml(&model), "#,##0.000");
    }

    #[test]
    fn test_rendered_code_reparses_equal() {
        for code in [
            "#,##0.00;[Red]-#,##0.00",
            "[>=1000]#,##0\" k\";[Red][<0]-0.0;0",
            "0.00_-\"€\";-0.00_-\"€\";\"-\";@",
            "[$-411]0.00",
            "0%",
        ] {
            let model = parse(code).unwrap();
            let rendered = render_ooxml(&model);
            assert_eq!(parse(&rendered).unwrap(), model, "{code} -> {rendered}");
        }
    }
}
