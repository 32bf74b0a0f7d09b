//! DOM Module - Parsed XML tree
//!
//! The node model handed to a [`Query`](crate::Query):
//! - Tagged node variants (element, text, opaque)
//! - Owned children in document order
//! - JSON interchange matching the `xml-reader` AST shape

pub mod interchange;
pub mod node;

pub use interchange::{from_json_str, from_json_str_many, from_json_value};
pub use node::{Attributes, Element, NodeKind, Other, Text, XmlNode};
