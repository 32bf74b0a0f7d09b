//! Node selection by tag name
//!
//! A selector is a single tag name, optionally narrowed by exact attribute
//! equality. There is no combinator syntax.

use crate::dom::{Attributes, XmlNode};

/// Tag name plus required attribute values
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selector<'s> {
    name: &'s str,
    attributes: Vec<(&'s str, &'s str)>,
}

impl<'s> Selector<'s> {
    /// Match every node named `name`
    pub fn tag(name: &'s str) -> Self {
        Selector {
            name,
            attributes: Vec::new(),
        }
    }

    /// Match nodes named `name` whose attributes include every entry of `filter`
    pub fn with_attributes(name: &'s str, filter: &'s Attributes) -> Self {
        Selector {
            name,
            attributes: filter
                .iter()
                .map(|(key, value)| (key.as_str(), value.as_str()))
                .collect(),
        }
    }

    /// Additionally require attribute `name` to equal `value`
    pub fn with_attr(mut self, name: &'s str, value: &'s str) -> Self {
        self.attributes.push((name, value));
        self
    }

    pub fn name(&self) -> &'s str {
        self.name
    }

    /// Check a single node, ignoring its descendants
    pub fn matches(&self, node: &XmlNode) -> bool {
        node.name() == Some(self.name)
            && self
                .attributes
                .iter()
                .all(|&(key, value)| node.attribute(key) == Some(value))
    }
}

impl<'s> From<&'s str> for Selector<'s> {
    fn from(name: &'s str) -> Self {
        Selector::tag(name)
    }
}

impl<'s> From<&'s String> for Selector<'s> {
    fn from(name: &'s String) -> Self {
        Selector::tag(name)
    }
}

impl<'s> From<&Selector<'s>> for Selector<'s> {
    fn from(selector: &Selector<'s>) -> Self {
        selector.clone()
    }
}
