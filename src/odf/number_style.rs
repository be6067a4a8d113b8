//! `<number:number-style>` generation.
//!
//! A conditional format becomes several sibling styles: one hidden
//! (`style:volatile`) style per branch, named `<name>P<index>`, and the
//! visible style that points at them through `<style:map>` children.

use super::element::Element;
use crate::common::format_number;
use crate::common::number::format_count;
use crate::numfmt::{FormatModel, FormatPart, FormatSection, NumberPart};

/// Render a model as ODF number styles.
///
/// Branch styles come first, followed by the primary style named
/// `style_name`, which is the one cell styles reference. Branches that only
/// apply to text have no `value()` expression and are left out.
///
/// # Examples
///
/// ```
/// use numstyle::{parse, render_odf};
///
/// let nodes = render_odf(&parse("0.00;[Red]-0.00").unwrap(), "N1");
/// let names: Vec<_> = nodes
///     .iter()
///     .map(|node| node.get_attribute("style:name").unwrap())
///     .collect();
/// assert_eq!(names, ["N1P0", "N1P1", "N1"]);
/// ```
pub fn render_odf(model: &FormatModel, style_name: &str) -> Vec<Element> {
    let mut nodes = Vec::with_capacity(model.branches().len() + 1);
    let mut maps = Vec::with_capacity(model.branches().len());

    for (index, branch) in model.branches().iter().enumerate() {
        let Some(symbol) = branch.condition.comparator().symbol() else {
            log::debug!("No ODF condition for text branch {} of {}", index, style_name);
            continue;
        };

        let branch_name = format!("{}P{}", style_name, index);
        let mut node = number_style(&branch_name, &branch.section);
        node.set_attribute("style:volatile", "true");
        nodes.push(node);

        let condition = format!(
            "value(){}{}",
            symbol,
            format_number(branch.condition.threshold())
        );
        maps.push(
            Element::new("style:map")
                .with_attribute("style:condition", &condition)
                .with_attribute("style:apply-style-name", &branch_name),
        );
    }

    let mut primary = number_style(style_name, model.primary());
    for map in maps {
        primary.add_child(map);
    }
    nodes.push(primary);

    nodes
}

fn number_style(name: &str, section: &FormatSection) -> Element {
    let mut node = Element::new("number:number-style").with_attribute("style:name", name);

    if let Some(color) = section.color() {
        let rgb = format!("#{}", color.rgb());
        node.add_child(Element::new("style:text-properties").with_attribute("fo:color", &rgb));
    }

    for part in section.parts() {
        match part {
            FormatPart::Number(number) => {
                node.add_child(number_element(number));
            },
            FormatPart::Text(text) => {
                let mut element = Element::new("number:text");
                element.set_text(text.text());
                node.add_child(element);
            },
        }
    }

    node
}

fn number_element(part: &NumberPart) -> Element {
    let mut element = Element::new("number:number");
    let min_decimals = part.min_decimal_digits();

    if let Some(max_decimals) = part.max_decimal_digits() {
        element.set_attribute(
            "number:decimal-places",
            &format_count(max_decimals.max(min_decimals)),
        );
    }
    element.set_attribute("loext:min-decimal-places", &format_count(min_decimals));
    element.set_attribute(
        "number:min-integer-digits",
        &format_count(part.min_integer_digits()),
    );
    if part.grouping() {
        element.set_attribute("number:grouping", "true");
    }

    element
}
