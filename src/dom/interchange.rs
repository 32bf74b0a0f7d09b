//! AST Interchange Format
//!
//! Nodes (de)serialize as the JSON objects emitted by `xml-reader` style
//! parsers:
//!
//! ```json
//! { "name": "to", "type": "element", "value": "",
//!   "attributes": {}, "children": [ { "type": "text", "value": "Alice" } ] }
//! ```
//!
//! Missing fields default to empty and unknown fields (such as a serialized
//! `parent`) are ignored. A missing `type` means `"element"`.

use log::debug;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use super::node::{Attributes, XmlNode, NO_ATTRIBUTES};
use crate::error::{Error, Result};

/// Owned wire shape used while deserializing
#[derive(Deserialize)]
#[serde(default)]
struct RawNode {
    name: String,
    #[serde(rename = "type")]
    kind: String,
    value: String,
    attributes: Attributes,
    children: Vec<XmlNode>,
}

impl Default for RawNode {
    fn default() -> Self {
        RawNode {
            name: String::new(),
            kind: "element".to_string(),
            value: String::new(),
            attributes: Attributes::new(),
            children: Vec::new(),
        }
    }
}

impl From<RawNode> for XmlNode {
    fn from(raw: RawNode) -> Self {
        XmlNode::from_parts(raw.kind, raw.name, raw.value, raw.attributes, raw.children)
    }
}

/// Borrowed wire shape used while serializing, so no subtree is cloned
#[derive(Serialize)]
struct RawNodeRef<'a> {
    name: &'a str,
    #[serde(rename = "type")]
    kind: &'a str,
    value: &'a str,
    attributes: &'a Attributes,
    children: &'a [XmlNode],
}

impl<'a> From<&'a XmlNode> for RawNodeRef<'a> {
    fn from(node: &'a XmlNode) -> Self {
        RawNodeRef {
            name: node.name().unwrap_or(""),
            kind: node.kind_name(),
            value: node.value().unwrap_or(""),
            attributes: node.attributes().unwrap_or(&NO_ATTRIBUTES),
            children: node.children(),
        }
    }
}

impl Serialize for XmlNode {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        RawNodeRef::from(self).serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for XmlNode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        RawNode::deserialize(deserializer).map(XmlNode::from)
    }
}

/// Load one tree from its JSON text
pub fn from_json_str(json: &str) -> Result<XmlNode> {
    let node: XmlNode = serde_json::from_str(json)?;
    debug!("loaded AST rooted at <{}>", node.name().unwrap_or(""));
    Ok(node)
}

/// Load one tree from an already-decoded JSON value
pub fn from_json_value(value: Value) -> Result<XmlNode> {
    let node = XmlNode::deserialize(value)?;
    debug!("loaded AST rooted at <{}>", node.name().unwrap_or(""));
    Ok(node)
}

/// Load a JSON array of trees, keeping their order
pub fn from_json_str_many(json: &str) -> Result<Vec<XmlNode>> {
    match serde_json::from_str::<Value>(json)? {
        Value::Array(items) => {
            let nodes = items
                .into_iter()
                .map(XmlNode::deserialize)
                .collect::<std::result::Result<Vec<_>, _>>()?;
            debug!("loaded {} ASTs", nodes.len());
            Ok(nodes)
        }
        other => Err(Error::NotAnArray(json_type_name(&other))),
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
