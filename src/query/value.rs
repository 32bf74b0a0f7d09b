//! Property Values
//!
//! `prop(name)` reads a field off a node by name. A field holds one of
//! three shapes: a string, an attribute mapping, or a child list.

use crate::dom::{Attributes, XmlNode};

/// Value of a node field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropValue<'a> {
    /// `name`, `type`, `value`
    Str(&'a str),
    /// `attributes`
    Attributes(&'a Attributes),
    /// `children`
    Children(&'a [XmlNode]),
}

impl<'a> PropValue<'a> {
    /// Read field `name` of `node`.
    ///
    /// `kind` is accepted as an alias of `type`. Fields the node's variant
    /// does not carry (a text node's `name`, an element's `value`) are `None`,
    /// as is any unknown field.
    pub fn read(node: &'a XmlNode, name: &str) -> Option<Self> {
        match name {
            "name" => node.name().map(PropValue::Str),
            "type" | "kind" => Some(PropValue::Str(node.kind_name())),
            "value" => node.value().map(PropValue::Str),
            "attributes" => node.attributes().map(PropValue::Attributes),
            "children" => Some(PropValue::Children(node.children())),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&'a str> {
        match *self {
            PropValue::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_attributes(&self) -> Option<&'a Attributes> {
        match *self {
            PropValue::Attributes(attributes) => Some(attributes),
            _ => None,
        }
    }

    pub fn as_children(&self) -> Option<&'a [XmlNode]> {
        match *self {
            PropValue::Children(children) => Some(children),
            _ => None,
        }
    }
}

impl PartialEq<str> for PropValue<'_> {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == Some(other)
    }
}

impl PartialEq<&str> for PropValue<'_> {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == Some(*other)
    }
}
