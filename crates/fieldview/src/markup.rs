//! Minimal HTML builders for the field markup.
//!
//! Children are passed as already-rendered HTML; use [`text`] to escape
//! plain strings before nesting them.

use std::fmt::Write as FmtWrite;

/// Escapes plain text for use as element content.
///
/// # Examples
///
/// ```
/// use mdfield_fieldview::markup::text;
///
/// assert_eq!(text("a < b & c"), "a &lt; b &amp; c");
/// ```
pub fn text(value: &str) -> String {
    html_escape::encode_text(value).into_owned()
}

/// Renders `<tag attr="value"...>children</tag>` with escaped attribute values.
pub fn element(tag: &str, attrs: &[(&str, &str)], children: &str) -> String {
    let mut out = String::with_capacity(tag.len() * 2 + children.len() + 32);
    out.push('<');
    out.push_str(tag);
    for (name, value) in attrs {
        let _ = write!(
            out,
            " {}=\"{}\"",
            name,
            html_escape::encode_double_quoted_attribute(value)
        );
    }
    out.push('>');
    out.push_str(children);
    let _ = write!(out, "</{}>", tag);
    out
}

/// `<div>` shorthand.
pub fn div(attrs: &[(&str, &str)], children: &str) -> String {
    element("div", attrs, children)
}

/// `<textarea>` holding `value` verbatim.
///
/// HTML parsers drop a single newline directly after the start tag, so one is
/// always emitted to keep values that begin with a blank line intact.
pub fn textarea(attrs: &[(&str, &str)], value: &str) -> String {
    element("textarea", attrs, &format!("\n{}", text(value)))
}

/// `<script>` with an inline body. The body must not contain `</script`.
pub fn script(body: &str) -> String {
    element("script", &[], body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_attribute_values() {
        assert_eq!(
            div(&[("class", "a\"b&c")], ""),
            "<div class=\"a&quot;b&amp;c\"></div>"
        );
    }

    #[test]
    fn textarea_keeps_leading_blank_line() {
        assert_eq!(
            textarea(&[("name", "body")], "\nsecond"),
            "<textarea name=\"body\">\n\nsecond</textarea>"
        );
    }

    #[test]
    fn nests_children_verbatim() {
        let inner = element("span", &[], &text("<b>"));
        assert_eq!(div(&[], &inner), "<div><span>&lt;b&gt;</span></div>");
    }
}
