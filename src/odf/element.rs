//! Minimal XML element tree for ODF style output.
//!
//! Attribute order is preserved so that generated styles serialize exactly
//! as they were built.

use crate::common::xml::{escape_xml, escape_xml_text, unescape_xml};
use crate::common::{Error, Result};
use quick_xml::events::{BytesStart, Event};

/// An XML element with ordered attributes, text content and children.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Element {
    tag_name: String,
    attributes: Vec<(String, String)>,
    text_content: String,
    children: Vec<Element>,
}

impl Element {
    /// Create a new element
    pub fn new(tag_name: &str) -> Self {
        Self {
            tag_name: tag_name.to_string(),
            ..Self::default()
        }
    }

    /// Builder form of [`Element::set_attribute`].
    pub fn with_attribute(mut self, name: &str, value: &str) -> Self {
        self.set_attribute(name, value);
        self
    }

    #[inline]
    pub fn tag_name(&self) -> &str {
        &self.tag_name
    }

    /// Get attribute value by name
    pub fn get_attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Set an attribute, keeping its position if it already exists.
    pub fn set_attribute(&mut self, name: &str, value: &str) -> &mut Self {
        match self.attributes.iter_mut().find(|(key, _)| key == name) {
            Some((_, existing)) => *existing = value.to_string(),
            None => self.attributes.push((name.to_string(), value.to_string())),
        }
        self
    }

    /// Attributes in insertion order.
    pub fn attributes(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attributes.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    #[inline]
    pub fn text(&self) -> &str {
        &self.text_content
    }

    pub fn set_text(&mut self, text: &str) -> &mut Self {
        self.text_content = text.to_string();
        self
    }

    pub fn add_child(&mut self, child: Element) -> &mut Self {
        self.children.push(child);
        self
    }

    #[inline]
    pub fn children(&self) -> &[Element] {
        &self.children
    }

    /// Children with the given tag name, in document order.
    pub fn children_named<'a>(&'a self, tag_name: &'a str) -> impl Iterator<Item = &'a Element> + 'a {
        self.children.iter().filter(move |child| child.tag_name == tag_name)
    }

    /// Create element from XML bytes
    ///
    /// Returns the first root element found. Namespace prefixes are kept as
    /// part of the tag and attribute names.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let mut reader = quick_xml::Reader::from_reader(bytes);
        let mut buf = Vec::new();
        let mut stack: Vec<Element> = Vec::new();

        loop {
            match reader.read_event_into(&mut buf)? {
                Event::Start(ref e) => stack.push(Self::from_start(e)?),
                Event::Empty(ref e) => {
                    let element = Self::from_start(e)?;
                    match stack.last_mut() {
                        Some(parent) => parent.children.push(element),
                        None => return Ok(element),
                    }
                },
                Event::Text(ref t) => {
                    if let Some(current) = stack.last_mut() {
                        let text = std::str::from_utf8(&**t).map_err(|_| {
                            Error::XmlError("Invalid UTF-8 in text content".to_string())
                        })?;
                        current.text_content.push_str(&unescape_xml(text));
                    }
                },
                Event::GeneralRef(ref r) => {
                    if let Some(current) = stack.last_mut() {
                        let name = std::str::from_utf8(&**r).map_err(|_| {
                            Error::XmlError("Invalid UTF-8 in entity reference".to_string())
                        })?;
                        current.text_content.push_str(&unescape_xml(&format!("&{};", name)));
                    }
                },
                Event::End(_) => {
                    if let Some(element) = stack.pop() {
                        match stack.last_mut() {
                            Some(parent) => parent.children.push(element),
                            // This is the root element
                            None => return Ok(element),
                        }
                    }
                },
                Event::Eof => break,
                _ => {},
            }
            buf.clear();
        }

        Err(Error::XmlError("No root element found".to_string()))
    }

    fn from_start(e: &BytesStart<'_>) -> Result<Self> {
        let tag_name = std::str::from_utf8(e.name().as_ref())
            .map_err(|_| Error::XmlError("Invalid UTF-8 in tag name".to_string()))?
            .to_string();
        let mut element = Element {
            tag_name,
            ..Self::default()
        };

        for attr_result in e.attributes() {
            let attr = attr_result
                .map_err(|err| Error::InvalidAttribute(format!("Malformed attribute: {}", err)))?;
            let key = std::str::from_utf8(attr.key.as_ref())
                .map_err(|_| Error::XmlError("Invalid UTF-8 in attribute key".to_string()))?;
            let value = std::str::from_utf8(&attr.value)
                .map_err(|_| Error::XmlError("Invalid UTF-8 in attribute value".to_string()))?;
            element.set_attribute(key, &unescape_xml(value));
        }

        Ok(element)
    }

    /// Serialize element to XML string
    pub fn to_xml_string(&self) -> String {
        let mut xml = String::with_capacity(self.estimated_xml_len());
        self.write_xml(&mut xml);
        xml
    }

    fn estimated_xml_len(&self) -> usize {
        let attrs: usize = self
            .attributes
            .iter()
            .map(|(key, value)| key.len() + value.len() + 4)
            .sum();
        let children: usize = self.children.iter().map(Self::estimated_xml_len).sum();
        2 * self.tag_name.len() + attrs + self.text_content.len() + children + 6
    }

    pub(crate) fn write_xml(&self, output: &mut String) {
        output.push('<');
        output.push_str(&self.tag_name);

        for (key, value) in &self.attributes {
            output.push(' ');
            output.push_str(key);
            output.push_str("=\"");
            output.push_str(&escape_xml(value));
            output.push('"');
        }

        if self.children.is_empty() && self.text_content.is_empty() {
            output.push_str("/>");
            return;
        }

        output.push('>');
        output.push_str(&escape_xml_text(&self.text_content));
        for child in &self.children {
            child.write_xml(output);
        }
        output.push_str("</");
        output.push_str(&self.tag_name);
        output.push('>');
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attribute_order_is_kept() {
        let element = Element::new("number:number")
            .with_attribute("number:decimal-places", "2")
            .with_attribute("loext:min-decimal-places", "2")
            .with_attribute("number:min-integer-digits", "1");

        assert_eq!(
            element.to_xml_string(),
            r#"<number:number number:decimal-places="2" loext:min-decimal-places="2" number:min-integer-digits="1"/>"#
        );
    }

    #[test]
    fn test_set_attribute_replaces_in_place() {
        let mut element = Element::new("a").with_attribute("x", "1").with_attribute("y", "2");
        element.set_attribute("x", "3");
        let attrs: Vec<_> = element.attributes().collect();
        assert_eq!(attrs, vec![("x", "3"), ("y", "2")]);
    }

    #[test]
    fn test_escaping() {
        let mut element = Element::new("number:text");
        element.set_text("\"€\" < 5 & more");
        assert_eq!(
            element.to_xml_string(),
            "<number:text>\"€\" &lt; 5 &amp; more</number:text>"
        );

        let element = Element::new("style:map").with_attribute("style:condition", "value()<=-1");
        assert_eq!(
            element.to_xml_string(),
            r#"<style:map style:condition="value()&lt;=-1"/>"#
        );
    }

    #[test]
    fn test_from_bytes_reads_back_output() {
        let mut root = Element::new("number:number-style").with_attribute("style:name", "N1");
        let mut text = Element::new("number:text");
        text.set_text("a < b & \"c\"");
        root.add_child(Element::new("number:number").with_attribute("number:grouping", "true"))
            .add_child(text)
            .add_child(Element::new("style:map").with_attribute("style:condition", "value()>=0"));

        let parsed = Element::from_bytes(root.to_xml_string().as_bytes()).unwrap();
        assert_eq!(parsed, root);
        assert_eq!(parsed.children_named("number:text").count(), 1);
    }

    #[test]
    fn test_from_bytes_without_root() {
        assert!(matches!(Element::from_bytes(b""), Err(Error::XmlError(_))));
    }
}
