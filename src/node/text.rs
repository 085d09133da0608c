use super::Scalar;

/// A run of character data inside the node tree.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TextNode {
    /// The value of the node. `None` prints as nothing.
    pub value: Option<Scalar>,
}
impl TextNode {
    /// Create a new text node.
    pub fn new(value: impl Into<Scalar>) -> Self {
        Self {
            value: Some(value.into()),
        }
    }

    /// Create a text node with no value.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }
}
