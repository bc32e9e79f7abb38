//! Graph snapshots and lookup helpers.
//!
//! A [`Graph`] is an immutable snapshot handed in by whoever owns the
//! mutable diagram. Every transformation builds a new `Graph`; nothing
//! here mutates its input.

use crate::edge::Edge;
use crate::error::{Collection, ModelError, NotFoundError, Result};
use crate::node::{InfoCategory, Node};
use crate::relation::is_valid_relation;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use tracing::debug;

/// A node or an edge, when an operation applies to both.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphPart<'a> {
    Node(&'a Node),
    Edge(&'a Edge),
}

impl<'a> GraphPart<'a> {
    pub fn id(&self) -> &'a str {
        match self {
            GraphPart::Node(node) => &node.id,
            GraphPart::Edge(edge) => &edge.id,
        }
    }

    pub fn argued_diagram_part_id(&self) -> Option<&'a str> {
        match self {
            GraphPart::Node(node) => node.data.argued_diagram_part_id.as_deref(),
            GraphPart::Edge(edge) => edge.data.argued_diagram_part_id.as_deref(),
        }
    }
}

/// Looks up a node by id.
pub fn find_node_or_throw<'a>(
    id: &str,
    nodes: &'a [Node],
) -> std::result::Result<&'a Node, NotFoundError> {
    nodes.iter().find(|node| node.id == id).ok_or_else(|| {
        NotFoundError::new(id, Collection::Nodes, nodes.iter().map(|n| n.id.as_str()))
    })
}

/// Looks up a node or an edge by id. Nodes are searched first.
pub fn find_graph_part_or_throw<'a>(
    id: &str,
    nodes: &'a [Node],
    edges: &'a [Edge],
) -> std::result::Result<GraphPart<'a>, NotFoundError> {
    if let Some(node) = nodes.iter().find(|node| node.id == id) {
        return Ok(GraphPart::Node(node));
    }
    if let Some(edge) = edges.iter().find(|edge| edge.id == id) {
        return Ok(GraphPart::Edge(edge));
    }

    let searched = nodes
        .iter()
        .map(|n| n.id.as_str())
        .chain(edges.iter().map(|e| e.id.as_str()));
    Err(NotFoundError::new(id, Collection::GraphParts, searched))
}

/// Returns every edge of `graph` whose source and target are both in `nodes`.
pub fn get_relevant_edges(nodes: &[Node], graph: &Graph) -> Vec<Edge> {
    let ids: HashSet<&str> = nodes.iter().map(|node| node.id.as_str()).collect();
    graph
        .edges
        .iter()
        .filter(|edge| ids.contains(edge.source.as_str()) && ids.contains(edge.target.as_str()))
        .cloned()
        .collect()
}

/// A topic diagram snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Graph {
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge>,
}

impl Graph {
    pub fn new(nodes: Vec<Node>, edges: Vec<Edge>) -> Self {
        Self { nodes, edges }
    }

    /// Builds a graph from a node subset, keeping only the edges between them.
    pub fn from_nodes(nodes: Vec<Node>, source: &Graph) -> Self {
        let edges = get_relevant_edges(&nodes, source);
        Self { nodes, edges }
    }

    /// Induced subgraph over the given ids, preserving this graph's node order.
    pub fn subgraph(&self, ids: &HashSet<&str>) -> Graph {
        let nodes = self
            .nodes
            .iter()
            .filter(|node| ids.contains(node.id.as_str()))
            .cloned()
            .collect();
        Graph::from_nodes(nodes, self)
    }

    pub fn find_node_or_throw(&self, id: &str) -> std::result::Result<&Node, NotFoundError> {
        find_node_or_throw(id, &self.nodes)
    }

    pub fn find_graph_part_or_throw(
        &self,
        id: &str,
    ) -> std::result::Result<GraphPart<'_>, NotFoundError> {
        find_graph_part_or_throw(id, &self.nodes, &self.edges)
    }

    pub fn contains_node(&self, id: &str) -> bool {
        self.nodes.iter().any(|node| node.id == id)
    }

    /// Nodes belonging to one information category.
    pub fn category_nodes(&self, category: InfoCategory) -> Vec<Node> {
        self.nodes
            .iter()
            .filter(|node| node.category() == category)
            .cloned()
            .collect()
    }

    /// Justification nodes arguing about `part_id`, with the edges between them.
    pub fn claim_tree(&self, part_id: &str) -> Graph {
        let nodes = self
            .nodes
            .iter()
            .filter(|node| {
                node.category() == InfoCategory::Justification
                    && node.data.argued_diagram_part_id.as_deref() == Some(part_id)
            })
            .cloned()
            .collect();
        Graph::from_nodes(nodes, self)
    }

    /// Checks id uniqueness, edge endpoints, and every edge against the relation table.
    pub fn validate(&self) -> Result<()> {
        let mut ids = HashSet::new();
        for id in self
            .nodes
            .iter()
            .map(|n| n.id.as_str())
            .chain(self.edges.iter().map(|e| e.id.as_str()))
        {
            if !ids.insert(id) {
                return Err(ModelError::DuplicateId(id.to_string()));
            }
        }

        let types: HashMap<&str, _> = self
            .nodes
            .iter()
            .map(|node| (node.id.as_str(), node.node_type))
            .collect();

        for edge in &self.edges {
            let endpoint_type = |endpoint: &str| {
                types
                    .get(endpoint)
                    .copied()
                    .ok_or_else(|| ModelError::DanglingEdge {
                        edge: edge.id.clone(),
                        endpoint: endpoint.to_string(),
                    })
            };
            let source_type = endpoint_type(&edge.source)?;
            let target_type = endpoint_type(&edge.target)?;

            if !is_valid_relation(source_type, edge.label, target_type) {
                return Err(ModelError::InvalidRelation {
                    edge: edge.id.clone(),
                    source_type,
                    relation: edge.label,
                    target_type,
                });
            }
        }

        debug!(
            "Validated {} nodes and {} edges",
            self.nodes.len(),
            self.edges.len()
        );
        Ok(())
    }

    /// Node and edge counts per category.
    pub fn summary(&self) -> GraphSummary {
        let mut nodes_by_category = HashMap::new();
        for node in &self.nodes {
            *nodes_by_category.entry(node.category()).or_insert(0) += 1;
        }
        GraphSummary {
            node_count: self.nodes.len(),
            edge_count: self.edges.len(),
            nodes_by_category,
        }
    }
}

/// Graph statistics for CLI output.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphSummary {
    pub node_count: usize,
    pub edge_count: usize,
    pub nodes_by_category: HashMap<InfoCategory, usize>,
}

impl GraphSummary {
    pub fn category_count(&self, category: InfoCategory) -> usize {
        self.nodes_by_category.get(&category).copied().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::NodeType;
    use crate::relation::RelationName;

    fn sample() -> Graph {
        Graph::new(
            vec![
                Node::new("p", NodeType::Problem),
                Node::new("c", NodeType::Cause),
                Node::new("s", NodeType::Solution),
                Node::new("claim", NodeType::RootClaim).arguing("e2"),
                Node::new("sup", NodeType::Support).arguing("e2"),
            ],
            vec![
                Edge::new("e1", "c", RelationName::Causes, "p"),
                Edge::new("e2", "s", RelationName::Addresses, "p"),
                Edge::new("e3", "sup", RelationName::Supports, "claim"),
            ],
        )
    }

    #[test]
    fn test_find_node_or_throw() {
        let graph = sample();
        let cause = graph.find_node_or_throw("c").unwrap();
        assert_eq!(cause.node_type, NodeType::Cause);

        let err = find_node_or_throw("missing", &graph.nodes).unwrap_err();
        assert_eq!(err.id, "missing");
        assert_eq!(err.collection, Collection::Nodes);
        assert_eq!(err.searched.len(), 5);
    }

    #[test]
    fn test_find_graph_part_or_throw() {
        let graph = sample();
        assert!(matches!(
            graph.find_graph_part_or_throw("e2"),
            Ok(GraphPart::Edge(edge)) if edge.label == RelationName::Addresses
        ));
        assert!(matches!(
            graph.find_graph_part_or_throw("s"),
            Ok(GraphPart::Node(_))
        ));

        let err = graph.find_graph_part_or_throw("nope").unwrap_err();
        assert_eq!(err.collection, Collection::GraphParts);
        assert_eq!(err.searched.len(), 8);
    }

    #[test]
    fn test_graph_part_accessors() {
        let graph = sample();

        let edge = graph.find_graph_part_or_throw("e2").unwrap();
        assert_eq!(edge.id(), "e2");
        assert_eq!(edge.argued_diagram_part_id(), None);

        let claim = graph.find_graph_part_or_throw("claim").unwrap();
        assert_eq!(claim.id(), "claim");
        assert_eq!(claim.argued_diagram_part_id(), Some("e2"));
    }

    #[test]
    fn test_contains_node() {
        let graph = sample();
        assert!(graph.contains_node("p"));
        assert!(!graph.contains_node("e1"));
        assert!(!graph.contains_node("missing"));
    }

    #[test]
    fn test_relevant_edges_never_dangle() {
        let graph = sample();
        let subset = vec![graph.nodes[0].clone(), graph.nodes[1].clone()];
        let edges = get_relevant_edges(&subset, &graph);

        assert_eq!(edges.len(), 1);
        assert_eq!(edges[0].id, "e1");
        for edge in &edges {
            assert!(subset.iter().any(|n| n.id == edge.source));
            assert!(subset.iter().any(|n| n.id == edge.target));
        }
    }

    #[test]
    fn test_subgraph_keeps_order() {
        let graph = sample();
        let ids: HashSet<&str> = ["s", "p"].into_iter().collect();
        let sub = graph.subgraph(&ids);

        let node_ids: Vec<&str> = sub.nodes.iter().map(|n| n.id.as_str()).collect();
        assert_eq!(node_ids, vec!["p", "s"]);
        assert_eq!(sub.edges.len(), 1);
    }

    #[test]
    fn test_claim_tree() {
        let graph = sample();
        let tree = graph.claim_tree("e2");
        assert_eq!(tree.nodes.len(), 2);
        assert_eq!(tree.edges.len(), 1);
        assert!(graph.claim_tree("p").nodes.is_empty());
    }

    #[test]
    fn test_validate() {
        assert!(sample().validate().is_ok());

        let mut dangling = sample();
        let ghost = Edge::new("e4", "ghost", RelationName::Causes, "p");
        dangling.edges.push(ghost);
        assert!(matches!(
            dangling.validate(),
            Err(ModelError::DanglingEdge { .. })
        ));

        let mut illegal = sample();
        let backwards = Edge::new("e5", "p", RelationName::CriterionFor, "s");
        illegal.edges.push(backwards);
        assert!(matches!(
            illegal.validate(),
            Err(ModelError::InvalidRelation { .. })
        ));

        let mut duplicate = sample();
        duplicate.nodes.push(Node::new("e1", NodeType::Fact));
        assert!(matches!(
            duplicate.validate(),
            Err(ModelError::DuplicateId(id)) if id == "e1"
        ));
    }

    #[test]
    fn test_summary() {
        let summary = sample().summary();
        assert_eq!(summary.node_count, 5);
        assert_eq!(summary.category_count(InfoCategory::Breakdown), 3);
        assert_eq!(summary.category_count(InfoCategory::Justification), 2);
        assert_eq!(summary.category_count(InfoCategory::Research), 0);
    }
}
