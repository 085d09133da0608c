//! Error handling for XML printing
use std::fmt;

/// A result type for XML printing, which can be either a successful value or an error.
pub type PrintResult<T> = std::result::Result<T, PrintError>;

/// An error that occurred while printing a node tree.
///
/// No partial output is returned alongside an error.
#[derive(Debug)]
pub struct PrintError {
    /// Where in the tree the error was found
    pub context: ErrorContext,

    /// The kind of error that occurred
    pub kind: PrintErrorKind,
}
impl PrintError {
    /// Creates a new `PrintError`
    #[must_use]
    pub fn new(kind: PrintErrorKind, context: ErrorContext) -> Self {
        Self { context, kind }
    }
}
impl fmt::Display for PrintError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.context)?;

        for line in self.kind.to_string().lines() {
            writeln!(f, "= {line}")?;
        }
        Ok(())
    }
}
impl std::error::Error for PrintError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.kind)
    }
}
impl From<PrintErrorKind> for PrintError {
    fn from(kind: PrintErrorKind) -> Self {
        Self::new(kind, ErrorContext::default())
    }
}

/// The kind of error that occurred while printing a node tree.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PrintErrorKind {
    /// An element has an empty name
    #[error("Element name must not be empty")]
    InvalidElementName,

    /// An attribute has an empty name
    #[error("Attribute name must not be empty (on element <{element}>)")]
    InvalidAttributeKey {
        /// Name of the element carrying the attribute
        element: String,
    },

    /// The configured quote character cannot delimit an attribute value
    #[error("Invalid attribute quote character {0:?}, use a single or double quote")]
    InvalidQuote(char),

    /// The tree is nested deeper than the configured limit
    #[error("Tree exceeds the maximum depth of {limit}")]
    DepthLimitExceeded {
        /// The configured limit
        limit: usize,
    },
}

/// Location of an error in the node tree, as the chain of element names leading to it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorContext {
    /// Element names from the outermost element inwards.
    pub path: Vec<String>,
}
impl ErrorContext {
    /// Creates a new `ErrorContext` with the given element path.
    #[must_use]
    pub fn new(path: Vec<String>) -> Self {
        Self { path }
    }
}
impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_empty() {
            return Ok(());
        }

        writeln!(f, "= At /{}", self.path.join("/"))
    }
}
