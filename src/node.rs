//! The types of nodes and values that make up a printable tree.
mod scalar;
pub use scalar::*;

mod text;
pub use text::*;

mod element;
pub use element::*;

/// A node in the tree. Can be either of:
/// - `Element` - a named element with attributes and children
/// - `Text` - a run of character data
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// An element node.
    Element(ElementNode),

    /// A text node.
    Text(TextNode),
}
impl Node {
    /// Create a new element node with no attributes or children.
    #[must_use]
    pub fn element(name: impl Into<String>) -> Self {
        Self::Element(ElementNode::new(name))
    }

    /// Create a new text node.
    pub fn text(value: impl Into<Scalar>) -> Self {
        Self::Text(TextNode::new(value))
    }

    /// Returns true if this is an element node.
    #[must_use]
    pub fn is_element(&self) -> bool {
        matches!(self, Self::Element(_))
    }
}

impl From<ElementNode> for Node {
    fn from(value: ElementNode) -> Self {
        Self::Element(value)
    }
}
impl From<TextNode> for Node {
    fn from(value: TextNode) -> Self {
        Self::Text(value)
    }
}
impl From<&str> for Node {
    fn from(value: &str) -> Self {
        Self::text(value)
    }
}
impl From<String> for Node {
    fn from(value: String) -> Self {
        Self::text(value)
    }
}
