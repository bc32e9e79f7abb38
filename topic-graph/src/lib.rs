//! Topic Graph - traversal and views over topic diagrams
//!
//! This crate answers two kinds of question about a [`topic_core::Graph`]:
//! - what is reachable from a node along some relations ([`traversal`]),
//! - what subgraph a given view should display ([`filter`]).
//!
//! All operations are pure. They take a snapshot and return a new one, so
//! the same snapshot can be filtered from several threads at once.
//!
//! # Example
//!
//! ```
//! use topic_core::{Edge, Graph, Node, NodeType, RelationName, UserScores};
//! use topic_graph::{apply_view, ProblemOptions, StandardFilter, ViewFilter};
//!
//! let graph = Graph::new(
//!     vec![
//!         Node::new("p", NodeType::Problem),
//!         Node::new("c", NodeType::Cause),
//!         Node::new("other", NodeType::Problem),
//!     ],
//!     vec![Edge::new("e", "c", RelationName::Causes, "p")],
//! );
//!
//! let view = ViewFilter {
//!     breakdown_filter: StandardFilter::Problem(ProblemOptions::new("p")),
//!     ..ViewFilter::default()
//! };
//! let shown = apply_view(&graph, &view, &UserScores::new());
//! assert_eq!(shown.nodes.len(), 2);
//! ```

pub mod filter;
pub mod traversal;

pub use filter::*;
pub use traversal::{
    ancestors, descendants, downstream_nodes, neighbors, source_nodes, target_nodes,
    upstream_nodes, TopicGraph,
};
