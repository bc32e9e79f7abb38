//! Error types for the topic model.
//!
//! Lookups fail with [`NotFoundError`]. Everything else the model can
//! reject (bad scores, edges that break the relation table) is a
//! [`ModelError`].

use crate::node::NodeType;
use crate::relation::RelationName;
use thiserror::Error;

/// Which collection a failed lookup searched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Nodes,
    Edges,
    GraphParts,
}

impl std::fmt::Display for Collection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Nodes => "node",
            Self::Edges => "edge",
            Self::GraphParts => "graph part",
        };
        write!(f, "{}", s)
    }
}

/// A required id was absent from the collection it was looked up in.
///
/// Carries the ids that were searched so a dangling reference can be
/// diagnosed without re-running the lookup.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{collection} not found: {id} (searched {} entries)", .searched.len())]
pub struct NotFoundError {
    pub id: String,
    pub collection: Collection,
    pub searched: Vec<String>,
}

impl NotFoundError {
    pub fn new<'a>(
        id: impl Into<String>,
        collection: Collection,
        searched: impl IntoIterator<Item = &'a str>,
    ) -> Self {
        Self {
            id: id.into(),
            collection,
            searched: searched.into_iter().map(str::to_owned).collect(),
        }
    }
}

/// Errors raised while building or checking topic model values.
#[derive(Error, Debug)]
pub enum ModelError {
    #[error(transparent)]
    NotFound(#[from] NotFoundError),

    #[error("Invalid score: {0:?} (expected \"-\" or \"1\"..\"9\")")]
    InvalidScore(String),

    #[error("Edge {edge} references missing node {endpoint}")]
    DanglingEdge { edge: String, endpoint: String },

    #[error("Edge {edge} is not a legal relation: {source_type} {relation} {target_type}")]
    InvalidRelation {
        edge: String,
        source_type: NodeType,
        relation: RelationName,
        target_type: NodeType,
    },

    #[error("Unknown relation: {0}")]
    UnknownRelation(String),

    #[error("Duplicate graph part id: {0}")]
    DuplicateId(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
