//! Options controlling how a node tree is printed.
use crate::error::{PrintErrorKind, PrintResult};

/// Options controlling how a node tree is printed.
///
/// The defaults print compact XML with escaped text and attributes, self-closing empty elements,
/// and double-quoted attribute values.
///
/// # Example
/// ```rust
/// use xmlprint::PrintConfig;
///
/// let config = PrintConfig::default().indent(2).quote('\'');
/// assert_eq!(config.indent, 2);
/// assert!(config.self_close);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrintConfig {
    /// Escape attribute values with entity substitution. Defaults to `true`.
    pub escape_attributes: bool,

    /// Escape text node values with CDATA sections. Defaults to `true`.
    pub escape_text: bool,

    /// Print elements with no children as `<name/>` instead of `<name></name>`. Defaults to `true`.
    pub self_close: bool,

    /// Spaces added per nesting level. `0` disables indentation, which is the default.
    ///
    /// Only sequences made up entirely of elements are indented; mixed content is left untouched.
    pub indent: usize,

    /// Character delimiting attribute values. Must be `"` (the default) or `'`.
    pub quote: char,

    /// Maximum element nesting depth, or `None` for no limit (the default).
    pub max_depth: Option<usize>,
}
impl Default for PrintConfig {
    fn default() -> Self {
        Self {
            escape_attributes: true,
            escape_text: true,
            self_close: true,
            indent: 0,
            quote: '"',
            max_depth: None,
        }
    }
}
impl PrintConfig {
    /// Enables or disables attribute value escaping.
    #[must_use]
    pub fn escape_attributes(mut self, escape: bool) -> Self {
        self.escape_attributes = escape;
        self
    }

    /// Enables or disables text escaping.
    #[must_use]
    pub fn escape_text(mut self, escape: bool) -> Self {
        self.escape_text = escape;
        self
    }

    /// Enables or disables self-closing empty elements.
    #[must_use]
    pub fn self_close(mut self, self_close: bool) -> Self {
        self.self_close = self_close;
        self
    }

    /// Sets the number of spaces per nesting level.
    #[must_use]
    pub fn indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    /// Sets the attribute quote character.
    #[must_use]
    pub fn quote(mut self, quote: char) -> Self {
        self.quote = quote;
        self
    }

    /// Sets the maximum element nesting depth.
    #[must_use]
    pub fn max_depth(mut self, max_depth: Option<usize>) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Checks the options can produce well-formed output.
    ///
    /// # Errors
    /// Returns an error if the quote character is neither `"` nor `'`
    pub fn validate(&self) -> PrintResult<()> {
        match self.quote {
            '"' | '\'' => Ok(()),
            other => Err(PrintErrorKind::InvalidQuote(other).into()),
        }
    }
}
