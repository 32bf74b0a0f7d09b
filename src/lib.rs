//! xmlquery - jQuery-style queries over a parsed XML tree
//!
//! Layers:
//! - `dom`: the node model an external parser produces, plus its JSON interchange
//! - `query`: the chainable, read-only [`Query`] facade
//! - `parallel`: several queries over one context at once (feature `parallel`)
//!
//! Parsing, serialization and mutation are out of scope; a `Query` only
//! reads and repackages references into a tree it borrows.

pub mod dom;
pub mod error;
#[cfg(feature = "parallel")]
pub mod parallel;
pub mod query;

pub use dom::{Attributes, NodeKind, XmlNode};
pub use error::{Error, Result};
pub use query::{PropValue, Query, Selector};
