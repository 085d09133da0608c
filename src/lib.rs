//! # xmlprint
//!
//! Prints a tree of XML nodes as XML text, with escaping and optional indentation.
//!
//! The tree is built by the caller out of [`Node`]s: elements with ordered attributes and children,
//! and text nodes holding a [`Scalar`] value. Printing never modifies the tree.
//!
//! - Text containing `& < > ' "` is wrapped in a CDATA section
//! - Attribute values are entity-escaped
//! - Empty elements are self-closing by default
//! - Indentation only applies to runs of elements, so text content is never altered
//!
//! No `<?xml ?>` declaration is emitted; prepend one if you need it.
//!
//! # Example
//! ```rust
//! use xmlprint::{ElementNode, Node, PrintConfig, print};
//!
//! let tree: Node = ElementNode::new("list")
//!     .with_attribute("kind", "fruit")
//!     .with_child(ElementNode::new("item").with_child("apples & pears"))
//!     .with_child(ElementNode::new("item"))
//!     .into();
//!
//! let xml = print(&tree, None).unwrap();
//! assert_eq!(
//!     xml,
//!     r#"<list kind="fruit"><item><![CDATA[apples & pears]]></item><item/></list>"#
//! );
//!
//! let xml = print(&tree, PrintConfig::default().indent(2)).unwrap();
//! assert_eq!(
//!     xml,
//!     "<list kind=\"fruit\">\n  <item><![CDATA[apples & pears]]></item>\n  <item/>\n</list>"
//! );
//! ```
#![warn(missing_docs)]

mod tracing_macros;

mod node;
pub use node::*;

pub mod error;
pub use error::{PrintError, PrintErrorKind, PrintResult};

mod config;
pub use config::PrintConfig;

mod escape;
pub use escape::{escape_attribute, escape_text, serialize_attributes};

pub mod to_xml;
pub use to_xml::{PrintRoot, Printable};

/// Print a node, or an ordered sequence of nodes, as an XML string.
///
/// Pass `None` for the default configuration.
///
/// # Errors
/// Returns an error if the configuration is invalid, an element or attribute name is empty,
/// or the tree is deeper than the configured limit. See [`to_xml::print_xml`].
pub fn print<P: Printable + ?Sized>(
    root: &P,
    config: impl Into<Option<PrintConfig>>,
) -> PrintResult<String> {
    let config = config.into().unwrap_or_default();
    to_xml::print_xml(root, &config)
}
