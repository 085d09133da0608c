use super::{Node, Scalar};

/// An element in the node tree, with a name, attributes, and children:
/// `<name attr="value">...</name>`
///
/// Attributes keep their insertion order, which is also the order they are printed in.
#[derive(Debug, Clone, PartialEq)]
pub struct ElementNode {
    /// The name of the element. Names are printed as-is, without escaping.
    pub name: String,

    /// The attributes of the element, in insertion order.
    pub attributes: Vec<Attribute>,

    /// The children of the element.
    pub children: Vec<Node>,
}
impl ElementNode {
    /// Create a new element with no attributes or children.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: vec![],
            children: vec![],
        }
    }

    /// Adds an attribute, replacing the value of an existing attribute with the same name.
    #[must_use]
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<Scalar>) -> Self {
        self.set_attribute(name, Some(value.into()));
        self
    }

    /// Adds a child node.
    #[must_use]
    pub fn with_child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    /// Adds a sequence of child nodes.
    #[must_use]
    pub fn with_children<I, N>(mut self, children: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<Node>,
    {
        self.children.extend(children.into_iter().map(Into::into));
        self
    }

    /// Set an attribute by name.
    ///
    /// An existing attribute keeps its position and has its value replaced.
    /// A new attribute is appended.
    pub fn set_attribute(&mut self, name: impl Into<String>, value: Option<Scalar>) {
        let name = name.into();
        match self.attributes.iter_mut().find(|a| a.name == name) {
            Some(attribute) => attribute.value = value,
            None => self.attributes.push(Attribute { name, value }),
        }
    }

    /// Get an attribute by name.
    #[must_use]
    pub fn get_attribute(&self, name: &str) -> Option<&Attribute> {
        self.attributes.iter().find(|a| a.name == name)
    }

    /// Returns true if the element has no children.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

/// An attribute set on an element, with a name and an optional value:
/// `name="value"`
///
/// An absent value prints the same as an empty one: `name=""`.
#[derive(Debug, Clone, PartialEq)]
pub struct Attribute {
    /// The name of the attribute.
    pub name: String,

    /// The value of the attribute.
    pub value: Option<Scalar>,
}
impl Attribute {
    /// Create a new attribute.
    pub fn new(name: impl Into<String>, value: Option<Scalar>) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_attribute_keeps_position() {
        let mut element = ElementNode::new("a")
            .with_attribute("x", 1)
            .with_attribute("y", 2);
        element.set_attribute("x", Some("z".into()));

        let names: Vec<_> = element.attributes.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, ["x", "y"]);
        assert_eq!(
            element.get_attribute("x").and_then(|a| a.value.clone()),
            Some(Scalar::from("z"))
        );
    }

    #[test]
    fn test_with_children() {
        let element = ElementNode::new("a").with_children(["one", "two"]);
        assert_eq!(element.children.len(), 2);
        assert!(!element.is_empty());
        assert!(ElementNode::new("b").is_empty());
    }
}
