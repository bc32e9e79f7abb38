//! The general filter: type and score restrictions plus explicit per-node
//! overrides, applied after the category filters.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use topic_core::{displayed_score, AggregationMode, Graph, NodeType, Score, UserScores};

/// How a displayed score is compared against a threshold.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ScoreComparer {
    #[default]
    Ge,
    Gt,
    Le,
    Lt,
    Eq,
}

impl ScoreComparer {
    /// Unscored only ever equals unscored.
    pub fn accepts(&self, shown: Score, threshold: Score) -> bool {
        match (shown.value(), threshold.value()) {
            (Some(shown), Some(threshold)) => match self {
                ScoreComparer::Ge => shown >= threshold,
                ScoreComparer::Gt => shown > threshold,
                ScoreComparer::Le => shown <= threshold,
                ScoreComparer::Lt => shown < threshold,
                ScoreComparer::Eq => shown == threshold,
            },
            (None, None) => *self == ScoreComparer::Eq,
            _ => false,
        }
    }
}

/// Keep only nodes whose displayed score passes a comparison.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredFilter {
    pub scored_by: Vec<String>,
    #[serde(default)]
    pub comparer: ScoreComparer,
    pub score: Score,
    #[serde(default)]
    pub mode: AggregationMode,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneralFilter {
    /// When non-empty, only these node types stay visible.
    #[serde(default)]
    pub node_types: Vec<NodeType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scored: Option<ScoredFilter>,
    /// Shown even when every other filter would hide them.
    #[serde(default)]
    pub nodes_to_show: Vec<String>,
    /// Hidden no matter what. Wins over `nodes_to_show`.
    #[serde(default)]
    pub nodes_to_hide: Vec<String>,
}

/// Adjusts an already-filtered node selection and rebuilds the visible graph
/// from the full `graph`, so edges across categories reappear.
pub fn apply_general_filter(
    graph: &Graph,
    filtered: &Graph,
    filter: &GeneralFilter,
    scores: &UserScores,
) -> Graph {
    let mut visible: HashSet<&str> = filtered
        .nodes
        .iter()
        .filter(|node| filter.node_types.is_empty() || filter.node_types.contains(&node.node_type))
        .filter(|node| match &filter.scored {
            Some(scored) => {
                let shown = displayed_score(&node.id, &scored.scored_by, scores, scored.mode);
                scored.comparer.accepts(shown, scored.score)
            }
            None => true,
        })
        .map(|node| node.id.as_str())
        .collect();

    visible.extend(
        filter
            .nodes_to_show
            .iter()
            .filter(|id| graph.contains_node(id))
            .map(String::as_str),
    );
    for hide in &filter.nodes_to_hide {
        visible.remove(hide.as_str());
    }

    graph.subgraph(&visible)
}
