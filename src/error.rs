//! Error types for loading trees.
//!
//! Queries never fail; absence is an empty result. Only turning external
//! AST data into [`XmlNode`](crate::dom::XmlNode)s can go wrong.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid AST JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Expected a JSON array of nodes, found {0}")]
    NotAnArray(&'static str),
}

pub type Result<T> = std::result::Result<T, Error>;
