use aho_corasick::{AhoCorasick, MatchKind};
use once_cell::sync::Lazy;

// Static initialization: automaton is built only once, thread-safe
static XML_ESCAPER: Lazy<AhoCorasick> = Lazy::new(|| {
    AhoCorasick::builder()
        .build(["&", "<", ">", "\"", "'"])
        .expect("Failed to build XML escaper")
});

// Text nodes only need the markup characters escaped
static XML_TEXT_ESCAPER: Lazy<AhoCorasick> = Lazy::new(|| {
    AhoCorasick::builder()
        .build(["&", "<", ">"])
        .expect("Failed to build XML text escaper")
});

// Use LeftmostLongest to ensure longer entities are matched first (e.g., &amp; instead of &lt;)
static XML_UNESCAPER: Lazy<AhoCorasick> = Lazy::new(|| {
    AhoCorasick::builder()
        .match_kind(MatchKind::LeftmostLongest)
        .build(["&amp;", "&lt;", "&gt;", "&quot;", "&apos;"])
        .expect("Failed to build XML unescaper")
});

/// Escape XML special characters for use inside an attribute value.
///
/// # Examples
///
/// ```
/// use numstyle::common::xml::escape_xml;
/// assert_eq!(escape_xml("#,##0;[Red]\"-\"0"), "#,##0;[Red]&quot;-&quot;0");
/// assert_eq!(escape_xml("a & b"), "a &amp; b");
/// ```
#[inline]
pub fn escape_xml(s: &str) -> String {
    XML_ESCAPER.replace_all(s, &["&amp;", "&lt;", "&gt;", "&quot;", "&apos;"])
}

/// Escape XML special characters for use as element text.
///
/// Quotes are left alone since they carry no meaning in text content.
///
/// # Examples
///
/// ```
/// use numstyle::common::xml::escape_xml_text;
/// assert_eq!(escape_xml_text("\"€\" <net>"), "\"€\" &lt;net&gt;");
/// ```
#[inline]
pub fn escape_xml_text(s: &str) -> String {
    XML_TEXT_ESCAPER.replace_all(s, &["&amp;", "&lt;", "&gt;"])
}

/// Unescape XML special characters.
///
/// Replaces the five standard XML entities with their corresponding characters.
/// Unknown or malformed entities are left unchanged.
///
/// # Examples
///
/// ```
/// use numstyle::common::xml::unescape_xml;
/// assert_eq!(unescape_xml("value()&lt;0"), "value()<0");
/// assert_eq!(unescape_xml("&amp;lt;"), "&lt;"); // &amp; is matched first
/// assert_eq!(unescape_xml("&invalid;"), "&invalid;"); // unknown entity
/// ```
#[inline]
pub fn unescape_xml(s: &str) -> String {
    XML_UNESCAPER.replace_all(s, &["&", "<", ">", "\"", "'"])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_format_code() {
        assert_eq!(
            escape_xml("[<0]\"$\"#,##0"),
            "[&lt;0]&quot;$&quot;#,##0"
        );
    }

    #[test]
    fn test_escape_roundtrip() {
        let raw = "[>=100]'a' & \"b\"";
        assert_eq!(unescape_xml(&escape_xml(raw)), raw);
    }

    #[test]
    fn test_text_escape_keeps_quotes() {
        assert_eq!(escape_xml_text("_-\"€\""), "_-\"€\"");
        assert_eq!(escape_xml_text("a&b"), "a&amp;b");
    }
}
