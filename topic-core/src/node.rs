//! Node types and information categories.
//!
//! Every node type belongs to exactly one [`InfoCategory`]; views switch
//! whole categories on and off before narrowing them further.

use serde::{Deserialize, Serialize};

/// The three partitions of [`NodeType`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum InfoCategory {
    /// Problems, their causes and effects, solutions and criteria.
    Breakdown,
    /// Questions, answers, facts and sources.
    Research,
    /// Claims argued about a specific graph part.
    Justification,
}

impl InfoCategory {
    pub const ALL: [InfoCategory; 3] = [Self::Breakdown, Self::Research, Self::Justification];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Breakdown => "breakdown",
            Self::Research => "research",
            Self::Justification => "justification",
        }
    }

    /// Node types in this category, in declaration order.
    pub fn node_types(self) -> impl Iterator<Item = NodeType> {
        NodeType::ALL
            .into_iter()
            .filter(move |node_type| node_type.category() == self)
    }
}

impl std::fmt::Display for InfoCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The closed set of node types a topic diagram can contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum NodeType {
    // breakdown
    Problem,
    Cause,
    Effect,
    Benefit,
    Detriment,
    Solution,
    SolutionComponent,
    Obstacle,
    Criterion,
    Subproblem,
    Mitigation,
    MitigationComponent,
    Custom,

    // research
    Question,
    Answer,
    Fact,
    Source,

    // justification
    RootClaim,
    Support,
    Critique,
}

impl NodeType {
    pub const ALL: [NodeType; 20] = [
        Self::Problem,
        Self::Cause,
        Self::Effect,
        Self::Benefit,
        Self::Detriment,
        Self::Solution,
        Self::SolutionComponent,
        Self::Obstacle,
        Self::Criterion,
        Self::Subproblem,
        Self::Mitigation,
        Self::MitigationComponent,
        Self::Custom,
        Self::Question,
        Self::Answer,
        Self::Fact,
        Self::Source,
        Self::RootClaim,
        Self::Support,
        Self::Critique,
    ];

    /// The information category this type belongs to.
    pub fn category(&self) -> InfoCategory {
        match self {
            Self::Question | Self::Answer | Self::Fact | Self::Source => InfoCategory::Research,
            Self::RootClaim | Self::Support | Self::Critique => InfoCategory::Justification,
            _ => InfoCategory::Breakdown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Problem => "problem",
            Self::Cause => "cause",
            Self::Effect => "effect",
            Self::Benefit => "benefit",
            Self::Detriment => "detriment",
            Self::Solution => "solution",
            Self::SolutionComponent => "solutionComponent",
            Self::Obstacle => "obstacle",
            Self::Criterion => "criterion",
            Self::Subproblem => "subproblem",
            Self::Mitigation => "mitigation",
            Self::MitigationComponent => "mitigationComponent",
            Self::Custom => "custom",
            Self::Question => "question",
            Self::Answer => "answer",
            Self::Fact => "fact",
            Self::Source => "source",
            Self::RootClaim => "rootClaim",
            Self::Support => "support",
            Self::Critique => "critique",
        }
    }
}

impl std::fmt::Display for NodeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Free-form payload carried by a node.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeData {
    #[serde(default)]
    pub notes: String,

    /// User-facing type label overriding the built-in one.
    #[serde(default)]
    pub custom_type: Option<String>,

    /// For justification nodes, the graph part being argued about.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub argued_diagram_part_id: Option<String>,
}

/// A node in a topic diagram.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    pub id: String,

    #[serde(rename = "type")]
    pub node_type: NodeType,

    #[serde(default)]
    pub data: NodeData,
}

impl Node {
    /// Creates a node with empty notes and no custom type.
    pub fn new(id: impl Into<String>, node_type: NodeType) -> Self {
        Self {
            id: id.into(),
            node_type,
            data: NodeData::default(),
        }
    }

    /// Builder: attach notes.
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.data.notes = notes.into();
        self
    }

    /// Builder: mark this node as arguing about another graph part.
    pub fn arguing(mut self, part_id: impl Into<String>) -> Self {
        self.data.argued_diagram_part_id = Some(part_id.into());
        self
    }

    pub fn category(&self) -> InfoCategory {
        self.node_type.category()
    }
}
