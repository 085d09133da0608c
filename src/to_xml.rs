//! XML printing module
//!
//! Use [`crate::print`] or [`Node::to_xml`] unless you need to print something other than a node or a slice of nodes.
use crate::{
    ElementNode, Node, PrintConfig,
    error::{ErrorContext, PrintError, PrintErrorKind, PrintResult},
    escape::{write_attributes, write_text},
    tracing_macros::{debug, trace},
};

/// Something the printer accepts as its root: a single node, or an ordered sequence of nodes.
pub trait Printable {
    /// Returns the root shape of the value.
    fn printable(&self) -> PrintRoot<'_>;
}

/// The root of a printing call.
///
/// A forest is laid out like the children of an element: it is indented when indentation is
/// enabled and every node in it is an element. A single node is printed without surrounding whitespace.
#[derive(Debug, Clone, Copy)]
pub enum PrintRoot<'a> {
    /// A single node.
    Node(&'a Node),

    /// An ordered sequence of nodes.
    Forest(&'a [Node]),
}

impl Printable for Node {
    fn printable(&self) -> PrintRoot<'_> {
        PrintRoot::Node(self)
    }
}
impl Printable for [Node] {
    fn printable(&self) -> PrintRoot<'_> {
        PrintRoot::Forest(self)
    }
}
impl Printable for Vec<Node> {
    fn printable(&self) -> PrintRoot<'_> {
        PrintRoot::Forest(self)
    }
}
impl<const N: usize> Printable for [Node; N] {
    fn printable(&self) -> PrintRoot<'_> {
        PrintRoot::Forest(self)
    }
}

/// Print a node or a sequence of nodes as an XML string.
///
/// The tree is walked with an explicit task stack, so deep trees do not grow the call stack.
/// On error, no partial output is returned.
///
/// # Errors
/// Returns an error if:
/// - The configuration is invalid (see [`PrintConfig::validate`])
/// - An element or attribute has an empty name
/// - The tree is deeper than [`PrintConfig::max_depth`]
pub fn print_xml<P: Printable + ?Sized>(root: &P, config: &PrintConfig) -> PrintResult<String> {
    config.validate()?;
    debug!(?config, "printing node tree");

    let mut out = String::new();
    let mut path: Vec<&str> = vec![];

    let mut stack = vec![match root.printable() {
        PrintRoot::Node(node) => PrintTask::Node(node, config.indent),
        PrintRoot::Forest(nodes) => PrintTask::Nodes(nodes, config.indent),
    }];

    while let Some(task) = stack.pop() {
        match task {
            PrintTask::Nodes(nodes, current_indent) => {
                if config.indent > 0 && nodes.iter().all(Node::is_element) {
                    stack.push(PrintTask::Newline);
                    for node in nodes.iter().rev() {
                        stack.push(PrintTask::Node(node, current_indent + config.indent));
                        stack.push(PrintTask::LineBreak(current_indent));
                    }
                } else {
                    // Mixed content is left as-is, whitespace would change its meaning
                    for node in nodes.iter().rev() {
                        stack.push(PrintTask::Node(node, current_indent));
                    }
                }
            }

            PrintTask::Node(Node::Text(text), _) => {
                if config.escape_text {
                    write_text(&mut out, text.value.as_ref());
                } else if let Some(value) = &text.value {
                    out.push_str(&value.to_string());
                }
            }

            PrintTask::Node(Node::Element(element), current_indent) => {
                validate_element(element, &path, config)?;
                trace!(name = %element.name, depth = path.len() + 1, "opening element");

                out.push('<');
                out.push_str(&element.name);
                write_attributes(
                    &mut out,
                    &element.attributes,
                    config.escape_attributes,
                    config.quote,
                );

                if element.is_empty() && config.self_close {
                    out.push_str("/>");
                    continue;
                }

                out.push('>');
                path.push(&element.name);
                stack.push(PrintTask::Close(element));
                stack.push(PrintTask::Nodes(&element.children, current_indent));
            }

            PrintTask::LineBreak(width) => {
                out.push('\n');
                out.extend(std::iter::repeat_n(' ', width));
            }

            PrintTask::Newline => out.push('\n'),

            PrintTask::Close(element) => {
                out.push_str("</");
                out.push_str(&element.name);
                out.push('>');
                path.pop();
            }
        }
    }

    Ok(out)
}

fn validate_element(element: &ElementNode, path: &[&str], config: &PrintConfig) -> PrintResult<()> {
    let error = |kind| {
        let mut path: Vec<String> = path.iter().map(ToString::to_string).collect();
        path.push(element.name.clone());
        Err(PrintError::new(kind, ErrorContext::new(path)))
    };

    if element.name.is_empty() {
        return error(PrintErrorKind::InvalidElementName);
    }

    if let Some(limit) = config.max_depth.filter(|&limit| path.len() >= limit) {
        return error(PrintErrorKind::DepthLimitExceeded { limit });
    }

    if element.attributes.iter().any(|a| a.name.is_empty()) {
        return error(PrintErrorKind::InvalidAttributeKey {
            element: element.name.clone(),
        });
    }

    Ok(())
}

enum PrintTask<'a> {
    Nodes(&'a [Node], usize),
    Node(&'a Node, usize),
    LineBreak(usize),
    Newline,
    Close(&'a ElementNode),
}

impl Node {
    /// Print this node as an XML string.
    ///
    /// # Errors
    /// See [`print_xml`]
    pub fn to_xml(&self, config: &PrintConfig) -> PrintResult<String> {
        print_xml(self, config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TextNode;

    fn element(name: &str) -> ElementNode {
        ElementNode::new(name)
    }

    #[test]
    fn test_print_self_closing() {
        let node = Node::element("a");
        assert_eq!(print_xml(&node, &PrintConfig::default()).unwrap(), "<a/>");

        let config = PrintConfig::default().self_close(false);
        assert_eq!(print_xml(&node, &config).unwrap(), "<a></a>");
    }

    #[test]
    fn test_print_attributes_and_text() {
        let node: Node = element("a")
            .with_attribute("id", 1)
            .with_child("<hi>")
            .into();

        assert_eq!(
            print_xml(&node, &PrintConfig::default()).unwrap(),
            r#"<a id="1"><![CDATA[<hi>]]></a>"#
        );
    }

    #[test]
    fn test_print_unescaped() {
        let node: Node = element("a")
            .with_attribute("q", "x\"y")
            .with_child("<b>")
            .into();
        let config = PrintConfig::default()
            .escape_text(false)
            .escape_attributes(false)
            .quote('\'');

        assert_eq!(print_xml(&node, &config).unwrap(), r#"<a q='x"y'><b></a>"#);
    }

    #[test]
    fn test_print_unescaped_absent_text() {
        let node: Node = element("a").with_child(TextNode::empty()).into();
        let config = PrintConfig::default().escape_text(false);
        assert_eq!(print_xml(&node, &config).unwrap(), "<a></a>");
    }

    #[test]
    fn test_print_forest_indented() {
        let nodes = [Node::element("a"), Node::element("b")];
        let config = PrintConfig::default().indent(2);
        assert_eq!(print_xml(&nodes, &config).unwrap(), "\n  <a/>\n  <b/>\n");
    }

    #[test]
    fn test_print_nested_indent_compounds() {
        let node: Node = element("root")
            .with_child(element("a").with_child(element("c")))
            .with_child(element("b"))
            .into();
        let config = PrintConfig::default().indent(2);

        assert_eq!(
            print_xml(&node, &config).unwrap(),
            "<root>\n  <a>\n    <c/>\n</a>\n  <b/>\n</root>"
        );
    }

    #[test]
    fn test_print_mixed_content_not_indented() {
        let nodes = vec![Node::element("a"), Node::text("hello")];
        let config = PrintConfig::default().indent(2);
        assert_eq!(print_xml(&nodes, &config).unwrap(), "<a/>hello");

        let node: Node = element("p")
            .with_child("x")
            .with_child(element("b").with_child(element("i")))
            .into();
        assert_eq!(
            print_xml(&node, &config).unwrap(),
            "<p>x<b>\n  <i/>\n</b></p>"
        );
    }

    #[test]
    fn test_print_open_empty_element_indented() {
        let config = PrintConfig::default().indent(2).self_close(false);
        assert_eq!(
            print_xml(&Node::element("a"), &config).unwrap(),
            "<a>\n</a>"
        );
    }

    #[test]
    fn test_print_empty_forest_indented() {
        let nodes: Vec<Node> = vec![];
        let config = PrintConfig::default().indent(2);
        assert_eq!(print_xml(&nodes, &config).unwrap(), "\n");
    }

    #[test]
    fn test_print_large_numbers() {
        let node: Node = element("n")
            .with_attribute("v", 1e21)
            .with_child(Node::text(1e-7))
            .into();
        assert_eq!(
            print_xml(&node, &PrintConfig::default()).unwrap(),
            r#"<n v="1e+21">1e-7</n>"#
        );
    }

    #[test]
    fn test_print_empty_forest() {
        let nodes: Vec<Node> = vec![];
        assert_eq!(print_xml(&nodes, &PrintConfig::default()).unwrap(), "");
    }

    #[test]
    fn test_print_empty_element_name() {
        let node: Node = element("a").with_child(element("")).into();
        let err = print_xml(&node, &PrintConfig::default()).unwrap_err();
        assert_eq!(err.kind, PrintErrorKind::InvalidElementName);
        assert_eq!(err.context.path, ["a", ""]);
    }

    #[test]
    fn test_print_empty_attribute_key() {
        let node: Node = element("a").with_attribute("", "x").into();
        let err = print_xml(&node, &PrintConfig::default()).unwrap_err();
        assert_eq!(
            err.kind,
            PrintErrorKind::InvalidAttributeKey {
                element: "a".to_string()
            }
        );
    }

    #[test]
    fn test_print_max_depth() {
        let node: Node = element("a")
            .with_child(element("b").with_child(element("c")))
            .into();

        let config = PrintConfig::default().max_depth(Some(3));
        assert_eq!(print_xml(&node, &config).unwrap(), "<a><b><c/></b></a>");

        let config = PrintConfig::default().max_depth(Some(2));
        let err = print_xml(&node, &config).unwrap_err();
        assert_eq!(err.kind, PrintErrorKind::DepthLimitExceeded { limit: 2 });
        assert_eq!(err.context.path, ["a", "b", "c"]);
    }

    #[test]
    fn test_print_invalid_quote() {
        let config = PrintConfig::default().quote('x');
        let err = print_xml(&Node::element("a"), &config).unwrap_err();
        assert_eq!(err.kind, PrintErrorKind::InvalidQuote('x'));
    }
}
