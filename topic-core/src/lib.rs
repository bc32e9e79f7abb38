//! Topic Core - the typed diagram model
//!
//! A topic is a multigraph of typed nodes (problems, solutions, criteria,
//! research, claims) joined by typed relations. This crate defines those
//! types, the table of legal relations, lookup helpers, and the score
//! aggregation used when several people's scores are viewed at once.
//!
//! Everything here works on immutable [`Graph`] snapshots.
//!
//! # Example
//!
//! ```
//! use topic_core::{Edge, Graph, Node, NodeType, RelationName};
//!
//! let graph = Graph::new(
//!     vec![
//!         Node::new("p", NodeType::Problem),
//!         Node::new("s", NodeType::Solution),
//!     ],
//!     vec![Edge::new("e", "s", RelationName::Addresses, "p")],
//! );
//!
//! assert!(graph.validate().is_ok());
//! ```

pub mod edge;
pub mod error;
pub mod graph;
pub mod node;
pub mod relation;
pub mod score;

pub use edge::{Edge, EdgeData};
pub use error::{Collection, ModelError, NotFoundError, Result};
pub use graph::{
    find_graph_part_or_throw, find_node_or_throw, get_relevant_edges, Graph, GraphPart,
    GraphSummary,
};
pub use node::{InfoCategory, Node, NodeData, NodeType};
pub use relation::{is_valid_relation, relation_names_between, relations, Relation, RelationName};
pub use score::{
    aggregate, displayed_score, displayed_scores, user_can_edit_scores, AggregationMode, Score,
    UserScores,
};
