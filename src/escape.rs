//! Escaping of text and attribute values, and attribute list serialization.
//!
//! Text is protected by wrapping it in a CDATA section, attribute values by entity substitution.
use crate::{Attribute, Scalar};

const CDATA_OPEN: &str = "<![CDATA[";
const CDATA_CLOSE: &str = "]]>";

/// A `]]>` inside a CDATA section, split across two adjacent sections.
const CDATA_SPLIT_TERMINATOR: &str = "]]]]><![CDATA[>";

/// Escapes a value for use as XML character data.
///
/// - Absent values (see [`Scalar::is_something`]) become an empty string.
/// - Values containing any of `& < > ' "` are wrapped in a CDATA section.
///   Every `]]>` inside such a value is split across two sections so it cannot close the first one early.
/// - Anything else is returned as-is.
///
/// # Example
/// ```rust
/// use xmlprint::{Scalar, escape_text};
///
/// assert_eq!(escape_text(Some(&Scalar::from("<a>"))), "<![CDATA[<a>]]>");
/// assert_eq!(escape_text(Some(&Scalar::from(0))), "0");
/// assert_eq!(escape_text(None), "");
/// ```
#[must_use]
pub fn escape_text(value: Option<&Scalar>) -> String {
    let mut out = String::new();
    write_text(&mut out, value);
    out
}

pub(crate) fn write_text(out: &mut String, value: Option<&Scalar>) {
    let Some(value) = value.filter(|v| v.is_something()) else {
        return;
    };

    let text = value.to_string();
    if text.contains(['&', '<', '>', '\'', '"']) {
        out.push_str(CDATA_OPEN);
        out.push_str(&text.replace(CDATA_CLOSE, CDATA_SPLIT_TERMINATOR));
        out.push_str(CDATA_CLOSE);
    } else {
        out.push_str(&text);
    }
}

/// Escapes a value for use inside a quoted attribute.
///
/// Substitutes `&amp;`, `&apos;`, `&quot;`, `&lt;` and `&gt;`.
/// Substitution happens in a single pass, so entity text is never escaped a second time.
///
/// # Example
/// ```rust
/// use xmlprint::{Scalar, escape_attribute};
///
/// let value = Scalar::from("a&b'c\"d<e>f");
/// assert_eq!(escape_attribute(&value), "a&amp;b&apos;c&quot;d&lt;e&gt;f");
/// ```
#[must_use]
pub fn escape_attribute(value: &Scalar) -> String {
    let mut out = String::new();
    write_escaped_attribute(&mut out, &value.to_string());
    out
}

fn write_escaped_attribute(out: &mut String, value: &str) {
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '\'' => out.push_str("&apos;"),
            '"' => out.push_str("&quot;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
}

/// Serializes a list of attributes as ` name="value"` pairs, in order.
///
/// Absent values are rendered as empty strings. When `escape_values` is false, values are written verbatim.
///
/// # Example
/// ```rust
/// use xmlprint::{Attribute, serialize_attributes};
///
/// let attributes = [
///     Attribute::new("id", Some(1.into())),
///     Attribute::new("hidden", None),
/// ];
/// assert_eq!(serialize_attributes(&attributes, true, '"'), r#" id="1" hidden="""#);
/// ```
#[must_use]
pub fn serialize_attributes(attributes: &[Attribute], escape_values: bool, quote: char) -> String {
    let mut out = String::new();
    write_attributes(&mut out, attributes, escape_values, quote);
    out
}

pub(crate) fn write_attributes(
    out: &mut String,
    attributes: &[Attribute],
    escape_values: bool,
    quote: char,
) {
    for attribute in attributes {
        out.push(' ');
        out.push_str(&attribute.name);
        out.push('=');
        out.push(quote);

        if let Some(value) = attribute.value.as_ref().filter(|v| v.is_something()) {
            if escape_values {
                write_escaped_attribute(out, &value.to_string());
            } else {
                out.push_str(&value.to_string());
            }
        }

        out.push(quote);
    }
}
