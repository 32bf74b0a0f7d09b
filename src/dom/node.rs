//! XML Node representation
//!
//! A parsed node is an element, a text unit, or an opaque node of any other
//! kind the parser emitted (comment, CDATA, processing instruction, ...).
//! Nodes own their children; there is no parent back-reference.

use std::collections::BTreeMap;

/// Attribute name to value mapping
pub type Attributes = BTreeMap<String, String>;

/// Shared empty mapping for nodes that carry no attributes
pub(crate) static NO_ATTRIBUTES: Attributes = BTreeMap::new();

/// Type of XML node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// Element node
    Element,
    /// Text content
    Text,
    /// Any other kind produced by the parser
    Other,
}

/// Element node
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Element {
    /// Tag name
    pub name: String,
    /// Attributes, keys unique
    pub attributes: Attributes,
    /// Child nodes in document order
    pub children: Vec<XmlNode>,
}

/// Text node
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Text {
    /// Literal text content
    pub value: String,
}

/// Node of a kind this crate does not interpret.
///
/// `kind` is never `"element"` or `"text"`; [`XmlNode::other`] and
/// [`XmlNode::from_parts`] route those to their own variants. Kept so that
/// whatever sits beneath it (a parser may nest content under such nodes) is
/// still reachable by traversal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Other {
    /// Kind name as reported by the parser, e.g. `"comment"`
    pub kind: String,
    pub name: String,
    pub value: String,
    pub attributes: Attributes,
    pub children: Vec<XmlNode>,
}

/// A node of a parsed XML tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum XmlNode {
    Element(Element),
    Text(Text),
    Other(Other),
}

impl XmlNode {
    /// Create an element with no attributes and no children
    pub fn element(name: impl Into<String>) -> Self {
        XmlNode::Element(Element {
            name: name.into(),
            ..Element::default()
        })
    }

    /// Create a text node
    pub fn text(value: impl Into<String>) -> Self {
        XmlNode::Text(Text {
            value: value.into(),
        })
    }

    /// Create an empty node of the given kind. `"element"` and `"text"`
    /// produce those variants; any other kind is opaque.
    pub fn other(kind: impl Into<String>) -> Self {
        XmlNode::from_parts(kind.into(), String::new(), String::new(), Attributes::new(), Vec::new())
    }

    /// Build a node from its interchange fields, picking the variant by `kind`.
    /// Fields the chosen variant does not carry are dropped.
    pub fn from_parts(
        kind: String,
        name: String,
        value: String,
        attributes: Attributes,
        children: Vec<XmlNode>,
    ) -> Self {
        match kind.as_str() {
            "element" => XmlNode::Element(Element {
                name,
                attributes,
                children,
            }),
            "text" => XmlNode::Text(Text { value }),
            _ => XmlNode::Other(Other {
                kind,
                name,
                value,
                attributes,
                children,
            }),
        }
    }

    /// Add an attribute. Text nodes have no attributes and are returned unchanged.
    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        if let Some(attributes) = self.attributes_mut() {
            attributes.insert(name.into(), value.into());
        }
        self
    }

    /// Append a child. Text nodes cannot hold children and are returned unchanged.
    pub fn with_child(mut self, child: XmlNode) -> Self {
        if let Some(children) = self.children_mut() {
            children.push(child);
        }
        self
    }

    /// Append several children in order
    pub fn with_children<I>(mut self, nodes: I) -> Self
    where
        I: IntoIterator<Item = XmlNode>,
    {
        if let Some(children) = self.children_mut() {
            children.extend(nodes);
        }
        self
    }

    #[inline]
    pub fn kind(&self) -> NodeKind {
        match self {
            XmlNode::Element(_) => NodeKind::Element,
            XmlNode::Text(_) => NodeKind::Text,
            XmlNode::Other(_) => NodeKind::Other,
        }
    }

    /// Kind name in the AST interchange format: `"element"`, `"text"`, or
    /// whatever the parser called an opaque node.
    pub fn kind_name(&self) -> &str {
        match self {
            XmlNode::Element(_) => "element",
            XmlNode::Text(_) => "text",
            XmlNode::Other(other) => &other.kind,
        }
    }

    /// Tag name. Text nodes have none.
    pub fn name(&self) -> Option<&str> {
        match self {
            XmlNode::Element(element) => Some(&element.name),
            XmlNode::Text(_) => None,
            XmlNode::Other(other) => Some(&other.name),
        }
    }

    /// Literal value. Elements have none.
    pub fn value(&self) -> Option<&str> {
        match self {
            XmlNode::Element(_) => None,
            XmlNode::Text(text) => Some(&text.value),
            XmlNode::Other(other) => Some(&other.value),
        }
    }

    /// Attribute mapping. Text nodes have none.
    pub fn attributes(&self) -> Option<&Attributes> {
        match self {
            XmlNode::Element(element) => Some(&element.attributes),
            XmlNode::Text(_) => None,
            XmlNode::Other(other) => Some(&other.attributes),
        }
    }

    /// Get attribute value by name
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes()?.get(name).map(String::as_str)
    }

    /// Direct children; empty for text nodes
    pub fn children(&self) -> &[XmlNode] {
        match self {
            XmlNode::Element(element) => &element.children,
            XmlNode::Text(_) => &[],
            XmlNode::Other(other) => &other.children,
        }
    }

    /// Check if this is an element node
    #[inline]
    pub fn is_element(&self) -> bool {
        matches!(self, XmlNode::Element(_))
    }

    /// Check if this is a text node
    #[inline]
    pub fn is_text(&self) -> bool {
        matches!(self, XmlNode::Text(_))
    }

    /// Check if this node has children
    #[inline]
    pub fn has_children(&self) -> bool {
        !self.children().is_empty()
    }

    /// Check if this node has attributes
    #[inline]
    pub fn has_attributes(&self) -> bool {
        self.attributes().is_some_and(|attributes| !attributes.is_empty())
    }

    fn attributes_mut(&mut self) -> Option<&mut Attributes> {
        match self {
            XmlNode::Element(element) => Some(&mut element.attributes),
            XmlNode::Text(_) => None,
            XmlNode::Other(other) => Some(&mut other.attributes),
        }
    }

    fn children_mut(&mut self) -> Option<&mut Vec<XmlNode>> {
        match self {
            XmlNode::Element(element) => Some(&mut element.children),
            XmlNode::Text(_) => None,
            XmlNode::Other(other) => Some(&mut other.children),
        }
    }
}
