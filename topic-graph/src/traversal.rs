//! Relation-aware traversal over a topic graph.
//!
//! [`TopicGraph`] indexes a [`Graph`] snapshot into a petgraph `DiGraph`
//! once, so a filter can run many searches without rescanning the edge
//! list. Every search keeps a visited set, so cycles (mutually reinforcing
//! problems, say) terminate and each node is reported at most once. The
//! start node is never part of its own result.

use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;
use petgraph::Direction;
use std::collections::{HashMap, HashSet, VecDeque};
use topic_core::{Collection, Edge, Graph, Node, NotFoundError, RelationName};
use tracing::trace;

/// An indexed, read-only view of a [`Graph`].
#[derive(Debug)]
pub struct TopicGraph<'a> {
    source: &'a Graph,
    graph: DiGraph<&'a Node, &'a Edge>,
    id_index: HashMap<&'a str, NodeIndex>,
}

impl<'a> TopicGraph<'a> {
    /// Indexes a graph snapshot. Edges whose endpoints are missing are skipped.
    pub fn new(source: &'a Graph) -> Self {
        let mut graph = DiGraph::with_capacity(source.nodes.len(), source.edges.len());
        let mut id_index = HashMap::with_capacity(source.nodes.len());

        for node in &source.nodes {
            let index = graph.add_node(node);
            id_index.insert(node.id.as_str(), index);
        }

        for edge in &source.edges {
            match (
                id_index.get(edge.source.as_str()),
                id_index.get(edge.target.as_str()),
            ) {
                (Some(&from), Some(&to)) => {
                    graph.add_edge(from, to, edge);
                }
                _ => trace!("Skipping dangling edge {}", edge.id),
            }
        }

        Self {
            source,
            graph,
            id_index,
        }
    }

    /// The snapshot this index was built from.
    pub fn source(&self) -> &'a Graph {
        self.source
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Gets the index for a node id, if present.
    pub fn index(&self, id: &str) -> Option<NodeIndex> {
        self.id_index.get(id).copied()
    }

    /// Gets the index for a node id, failing with [`NotFoundError`].
    pub fn index_or_throw(&self, id: &str) -> Result<NodeIndex, NotFoundError> {
        self.index(id).ok_or_else(|| {
            NotFoundError::new(
                id,
                Collection::Nodes,
                self.source.nodes.iter().map(|n| n.id.as_str()),
            )
        })
    }

    /// The node stored at an index.
    pub fn node(&self, index: NodeIndex) -> &'a Node {
        self.graph[index]
    }

    /// Indexes of every node matching a predicate, in snapshot order.
    pub fn indexes_where(&self, predicate: impl Fn(&Node) -> bool) -> Vec<NodeIndex> {
        self.graph
            .node_indices()
            .filter(|&index| predicate(self.graph[index]))
            .collect()
    }

    /// Nodes reachable against edge direction (sources, transitively).
    pub fn upstream(&self, start: NodeIndex, relations: Option<&[RelationName]>) -> Vec<NodeIndex> {
        self.reach(start, &[Direction::Incoming], relations, None)
    }

    /// Nodes reachable along edge direction (targets, transitively).
    pub fn downstream(
        &self,
        start: NodeIndex,
        relations: Option<&[RelationName]>,
    ) -> Vec<NodeIndex> {
        self.reach(start, &[Direction::Outgoing], relations, None)
    }

    /// Nodes within `depth` edges of `start`, in either direction.
    pub fn neighborhood(&self, start: NodeIndex, depth: usize) -> Vec<NodeIndex> {
        if depth == 0 {
            return Vec::new();
        }
        self.reach(
            start,
            &[Direction::Incoming, Direction::Outgoing],
            None,
            Some(depth),
        )
    }

    /// One-hop sources of `start`.
    pub fn sources(&self, start: NodeIndex) -> Vec<NodeIndex> {
        self.reach(start, &[Direction::Incoming], None, Some(1))
    }

    /// One-hop targets of `start`, or every descendant when `recursive`.
    pub fn targets(&self, start: NodeIndex, recursive: bool) -> Vec<NodeIndex> {
        let depth = if recursive { None } else { Some(1) };
        self.reach(start, &[Direction::Outgoing], None, depth)
    }

    /// BFS from `start`, following only edges labelled with one of `relations`
    /// (all edges when `None`), up to `max_depth` hops (unbounded when `None`).
    fn reach(
        &self,
        start: NodeIndex,
        directions: &[Direction],
        relations: Option<&[RelationName]>,
        max_depth: Option<usize>,
    ) -> Vec<NodeIndex> {
        let mut result = Vec::new();
        let mut visited: HashSet<NodeIndex> = HashSet::new();
        let mut queue: VecDeque<(NodeIndex, usize)> = VecDeque::new();

        visited.insert(start);
        queue.push_back((start, 0));

        while let Some((current, depth)) = queue.pop_front() {
            if max_depth.is_some_and(|max| depth >= max) {
                continue;
            }

            for &direction in directions {
                for edge_ref in self.graph.edges_directed(current, direction) {
                    if let Some(allowed) = relations {
                        if !allowed.contains(&edge_ref.weight().label) {
                            continue;
                        }
                    }

                    let neighbor = match direction {
                        Direction::Incoming => edge_ref.source(),
                        Direction::Outgoing => edge_ref.target(),
                    };

                    // Marking on enqueue keeps each node to a single visit
                    if visited.insert(neighbor) {
                        result.push(neighbor);
                        queue.push_back((neighbor, depth + 1));
                    }
                }
            }
        }

        result
    }

    fn nodes(&self, indexes: Vec<NodeIndex>) -> Vec<&'a Node> {
        indexes.into_iter().map(|index| self.node(index)).collect()
    }

    /// Transitive sources of a node, optionally restricted to some relations.
    pub fn ancestors(
        &self,
        id: &str,
        relations: Option<&[RelationName]>,
    ) -> Result<Vec<&'a Node>, NotFoundError> {
        let start = self.index_or_throw(id)?;
        Ok(self.nodes(self.upstream(start, relations)))
    }

    /// Transitive targets of a node, optionally restricted to some relations.
    pub fn descendants(
        &self,
        id: &str,
        relations: Option<&[RelationName]>,
    ) -> Result<Vec<&'a Node>, NotFoundError> {
        let start = self.index_or_throw(id)?;
        Ok(self.nodes(self.downstream(start, relations)))
    }

    pub fn neighbors(&self, id: &str, depth: usize) -> Result<Vec<&'a Node>, NotFoundError> {
        let start = self.index_or_throw(id)?;
        Ok(self.nodes(self.neighborhood(start, depth)))
    }

    pub fn source_nodes(&self, id: &str) -> Result<Vec<&'a Node>, NotFoundError> {
        let start = self.index_or_throw(id)?;
        Ok(self.nodes(self.sources(start)))
    }

    pub fn target_nodes(&self, id: &str, recursive: bool) -> Result<Vec<&'a Node>, NotFoundError> {
        let start = self.index_or_throw(id)?;
        Ok(self.nodes(self.targets(start, recursive)))
    }
}

/// Every node that reaches `node`, found by following edges backward (transitive sources).
pub fn ancestors<'a>(
    node: &Node,
    graph: &'a Graph,
    relations: Option<&[RelationName]>,
) -> Result<Vec<&'a Node>, NotFoundError> {
    TopicGraph::new(graph).ancestors(&node.id, relations)
}

/// Every node reachable from `node` along edge direction (transitive targets).
pub fn descendants<'a>(
    node: &Node,
    graph: &'a Graph,
    relations: Option<&[RelationName]>,
) -> Result<Vec<&'a Node>, NotFoundError> {
    TopicGraph::new(graph).descendants(&node.id, relations)
}

/// Alias of [`ancestors`] named for the direction filters think in.
pub fn upstream_nodes<'a>(
    node: &Node,
    graph: &'a Graph,
    relations: Option<&[RelationName]>,
) -> Result<Vec<&'a Node>, NotFoundError> {
    ancestors(node, graph, relations)
}

/// Alias of [`descendants`] named for the direction filters think in.
pub fn downstream_nodes<'a>(
    node: &Node,
    graph: &'a Graph,
    relations: Option<&[RelationName]>,
) -> Result<Vec<&'a Node>, NotFoundError> {
    descendants(node, graph, relations)
}

/// Nodes within `depth` edges of `node` in either direction.
pub fn neighbors<'a>(
    node: &Node,
    graph: &'a Graph,
    depth: usize,
) -> Result<Vec<&'a Node>, NotFoundError> {
    TopicGraph::new(graph).neighbors(&node.id, depth)
}

/// Direct sources of `node`.
pub fn source_nodes<'a>(node: &Node, graph: &'a Graph) -> Result<Vec<&'a Node>, NotFoundError> {
    TopicGraph::new(graph).source_nodes(&node.id)
}

/// Targets of `node`; all descendants when `recursive`.
pub fn target_nodes<'a>(
    node: &Node,
    graph: &'a Graph,
    recursive: bool,
) -> Result<Vec<&'a Node>, NotFoundError> {
    TopicGraph::new(graph).target_nodes(&node.id, recursive)
}
