//! Query Facade
//!
//! A [`Query`] wraps an ordered set of node references (the context) and
//! answers read-only questions about it. Operations that produce a set
//! return a fresh `Query`, so lookups chain:
//!
//! ```
//! use xmlquery::{Query, XmlNode};
//!
//! let root = XmlNode::element("message")
//!     .with_attr("id", "1001")
//!     .with_child(XmlNode::element("to").with_child(XmlNode::text("Alice")))
//!     .with_child(XmlNode::element("body").with_child(XmlNode::text("Hi!")));
//!
//! let query = Query::from_node(&root);
//! assert_eq!(query.find("to").text(), "Alice");
//! assert_eq!(query.children().last().prop("name").unwrap(), "body");
//! assert_eq!(query.attr("id"), Some("1001"));
//! assert!(!query.has("attachment"));
//! ```
//!
//! Nothing here fails. Out-of-range indices, unknown names and empty
//! contexts all produce an empty `Query`, `None`, `false` or `""`.

pub mod selector;
pub mod value;

use log::trace;

use crate::dom::{Attributes, XmlNode};
pub use selector::Selector;
pub use value::PropValue;

/// Immutable, ordered set of nodes. Duplicates are kept.
#[derive(Debug, Clone, Default)]
pub struct Query<'a> {
    nodes: Vec<&'a XmlNode>,
}

impl<'a> Query<'a> {
    /// Wrap a sequence of nodes as-is
    pub fn new<I>(nodes: I) -> Self
    where
        I: IntoIterator<Item = &'a XmlNode>,
    {
        Query {
            nodes: nodes.into_iter().collect(),
        }
    }

    pub fn empty() -> Self {
        Query { nodes: Vec::new() }
    }

    pub fn from_node(node: &'a XmlNode) -> Self {
        Query { nodes: vec![node] }
    }

    /// The wrapped context
    pub fn nodes(&self) -> &[&'a XmlNode] {
        &self.nodes
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn iter(&self) -> std::iter::Copied<std::slice::Iter<'_, &'a XmlNode>> {
        self.nodes.iter().copied()
    }

    /// Node at `index`. Negative indices are out of range, not counted from the end.
    pub fn get(&self, index: isize) -> Option<&'a XmlNode> {
        let index = usize::try_from(index).ok()?;
        self.nodes.get(index).copied()
    }

    /// Set holding only the node at `index`, or an empty set when out of range
    #[allow(clippy::should_implement_trait)]
    pub fn eq(&self, index: isize) -> Query<'a> {
        Query::from(self.get(index))
    }

    pub fn first(&self) -> Query<'a> {
        self.eq(0)
    }

    /// On an empty set this is `eq(-1)`, which is empty.
    pub fn last(&self) -> Query<'a> {
        self.eq(self.nodes.len() as isize - 1)
    }

    /// Direct children of every node, flattened one level in context order
    pub fn children(&self) -> Query<'a> {
        let nodes: Vec<&'a XmlNode> = self
            .nodes
            .iter()
            .flat_map(|&node| node.children())
            .collect();
        trace!("children: {} -> {} nodes", self.nodes.len(), nodes.len());
        Query { nodes }
    }

    /// Pre-order search of every context node and its descendants.
    ///
    /// Context nodes themselves are candidates. Results keep context order,
    /// then document order within each subtree. Overlapping subtrees yield
    /// duplicates.
    pub fn find<'s>(&self, selector: impl Into<Selector<'s>>) -> Query<'a> {
        let selector = selector.into();
        let mut matches = Vec::new();
        for &root in &self.nodes {
            collect_matches(root, &selector, &mut matches);
        }
        trace!(
            "find <{}>: {} roots -> {} matches",
            selector.name(),
            self.nodes.len(),
            matches.len()
        );
        Query { nodes: matches }
    }

    /// [`find`](Self::find) restricted to nodes carrying every entry of `filter`
    pub fn find_with(&self, name: &str, filter: &Attributes) -> Query<'a> {
        self.find(Selector::with_attributes(name, filter))
    }

    /// Same answer as `find(selector).size() > 0`, but walks one tree level
    /// at a time and stops at the first level holding a match.
    pub fn has<'s>(&self, selector: impl Into<Selector<'s>>) -> bool {
        let selector = selector.into();
        let mut level: Vec<&'a XmlNode> = self.nodes.clone();
        let mut depth = 0usize;

        while !level.is_empty() {
            if level.iter().any(|node| selector.matches(node)) {
                trace!("has <{}>: found at depth {}", selector.name(), depth);
                return true;
            }
            level = level.iter().flat_map(|&node| node.children()).collect();
            depth += 1;
        }

        trace!("has <{}>: not found", selector.name());
        false
    }

    /// Attribute mapping of the first node.
    ///
    /// This is a shared borrow of the tree's own mapping; it cannot be
    /// modified through the query. Text nodes carry no mapping, so a
    /// text-first context gives `None` here and from [`attr`](Self::attr).
    pub fn attributes(&self) -> Option<&'a Attributes> {
        self.nodes.first()?.attributes()
    }

    /// Value of attribute `name` on the first node
    pub fn attr(&self, name: &str) -> Option<&'a str> {
        self.nodes.first()?.attribute(name)
    }

    /// Field `name` of the first node. See [`PropValue::read`].
    pub fn prop(&self, name: &str) -> Option<PropValue<'a>> {
        PropValue::read(self.nodes.first()?, name)
    }

    /// Concatenated text of every node and its descendants, no separators
    pub fn text(&self) -> String {
        let mut result = String::new();
        for &node in &self.nodes {
            collect_text(node, &mut result);
        }
        result
    }

    /// Apply `f(node, index, nodes)` to each node in order and collect the results
    pub fn map<T, F>(&self, mut f: F) -> Vec<T>
    where
        F: FnMut(&'a XmlNode, usize, &[&'a XmlNode]) -> T,
    {
        self.nodes
            .iter()
            .enumerate()
            .map(|(index, &node)| f(node, index, self.nodes.as_slice()))
            .collect()
    }

    /// Call `f(node, index, nodes)` for each node in order
    pub fn each<F>(&self, mut f: F)
    where
        F: FnMut(&'a XmlNode, usize, &[&'a XmlNode]),
    {
        for (index, &node) in self.nodes.iter().enumerate() {
            f(node, index, self.nodes.as_slice());
        }
    }
}

/// Push `root` and its descendants matching `selector`, in pre-order
fn collect_matches<'a>(root: &'a XmlNode, selector: &Selector<'_>, out: &mut Vec<&'a XmlNode>) {
    let mut stack = vec![root];
    while let Some(node) = stack.pop() {
        if selector.matches(node) {
            out.push(node);
        }
        stack.extend(node.children().iter().rev());
    }
}

/// Append the values of text nodes under `root` (itself included), in pre-order
fn collect_text(root: &XmlNode, result: &mut String) {
    let mut stack = vec![root];
    while let Some(node) = stack.pop() {
        match node {
            XmlNode::Text(text) => result.push_str(&text.value),
            _ => stack.extend(node.children().iter().rev()),
        }
    }
}

impl<'a> From<&'a XmlNode> for Query<'a> {
    fn from(node: &'a XmlNode) -> Self {
        Query::from_node(node)
    }
}

impl<'a> From<Option<&'a XmlNode>> for Query<'a> {
    fn from(node: Option<&'a XmlNode>) -> Self {
        node.map_or_else(Query::empty, Query::from_node)
    }
}

impl<'a> From<&'a [XmlNode]> for Query<'a> {
    fn from(nodes: &'a [XmlNode]) -> Self {
        Query::new(nodes)
    }
}

impl<'a> From<&'a Vec<XmlNode>> for Query<'a> {
    fn from(nodes: &'a Vec<XmlNode>) -> Self {
        Query::new(nodes)
    }
}

impl<'a> From<Vec<&'a XmlNode>> for Query<'a> {
    fn from(nodes: Vec<&'a XmlNode>) -> Self {
        Query { nodes }
    }
}

impl<'a> FromIterator<&'a XmlNode> for Query<'a> {
    fn from_iter<I: IntoIterator<Item = &'a XmlNode>>(iter: I) -> Self {
        Query::new(iter)
    }
}

impl<'q, 'a> IntoIterator for &'q Query<'a> {
    type Item = &'a XmlNode;
    type IntoIter = std::iter::Copied<std::slice::Iter<'q, &'a XmlNode>>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.iter().copied()
    }
}

impl<'a> IntoIterator for Query<'a> {
    type Item = &'a XmlNode;
    type IntoIter = std::vec::IntoIter<&'a XmlNode>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.into_iter()
    }
}
