//! View composition: information categories, their standard filters, and
//! the general filter on top.

use super::general::{apply_general_filter, GeneralFilter};
use super::standard::{apply_standard_filter, StandardFilter};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use topic_core::{get_relevant_edges, Graph, InfoCategory, UserScores};
use tracing::debug;

fn default_categories() -> Vec<InfoCategory> {
    vec![InfoCategory::Breakdown]
}

/// Everything a view needs to derive its graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewFilter {
    #[serde(default = "default_categories")]
    pub categories_to_show: Vec<InfoCategory>,
    #[serde(default)]
    pub breakdown_filter: StandardFilter,
    #[serde(default)]
    pub research_filter: StandardFilter,
    #[serde(default)]
    pub justification_filter: StandardFilter,
    #[serde(default)]
    pub general_filter: GeneralFilter,
}

impl Default for ViewFilter {
    fn default() -> Self {
        Self {
            categories_to_show: default_categories(),
            breakdown_filter: StandardFilter::None,
            research_filter: StandardFilter::None,
            justification_filter: StandardFilter::None,
            general_filter: GeneralFilter::default(),
        }
    }
}

impl ViewFilter {
    /// A view showing every category unfiltered.
    pub fn everything() -> Self {
        Self {
            categories_to_show: InfoCategory::ALL.to_vec(),
            ..Self::default()
        }
    }

    pub fn filter_for(&self, category: InfoCategory) -> &StandardFilter {
        match category {
            InfoCategory::Breakdown => &self.breakdown_filter,
            InfoCategory::Research => &self.research_filter,
            InfoCategory::Justification => &self.justification_filter,
        }
    }

    pub fn shows(&self, category: InfoCategory) -> bool {
        self.categories_to_show.contains(&category)
    }
}

/// Runs each shown category's standard filter on that category alone and
/// unions the results. Edges between categories are kept when both ends
/// survive.
pub fn apply_info_filter(graph: &Graph, view: &ViewFilter) -> Graph {
    let mut visible: HashSet<String> = HashSet::new();

    for category in InfoCategory::ALL {
        if !view.shows(category) {
            continue;
        }

        let scoped = Graph::from_nodes(graph.category_nodes(category), graph);
        let filtered = apply_standard_filter(&scoped, view.filter_for(category));
        let kept = filtered.nodes.len();
        debug!("Category {} contributes {} nodes", category, kept);

        visible.extend(filtered.nodes.into_iter().map(|node| node.id));
    }

    let nodes: Vec<_> = graph
        .nodes
        .iter()
        .filter(|node| visible.contains(&node.id))
        .cloned()
        .collect();
    let edges = get_relevant_edges(&nodes, graph);
    Graph::new(nodes, edges)
}

/// Derives the graph a view displays.
pub fn apply_view(graph: &Graph, view: &ViewFilter, scores: &UserScores) -> Graph {
    let filtered = apply_info_filter(graph, view);
    let visible = apply_general_filter(graph, &filtered, &view.general_filter, scores);
    debug!(
        "View shows {}/{} nodes, {}/{} edges",
        visible.nodes.len(),
        graph.nodes.len(),
        visible.edges.len(),
        graph.edges.len()
    );
    visible
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::standard::{HighLevelOptions, QuestionOptions, RootClaimOptions};
    use topic_core::{Edge, Node, NodeType, RelationName};

    fn topic() -> Graph {
        Graph::new(
            vec![
                Node::new("prob", NodeType::Problem),
                Node::new("crit", NodeType::Criterion),
                Node::new("sol", NodeType::Solution),
                Node::new("q", NodeType::Question),
                Node::new("ans", NodeType::Answer),
                Node::new("lone_q", NodeType::Question),
                Node::new("claim", NodeType::RootClaim).arguing("sol"),
                Node::new("pro", NodeType::Support).arguing("sol"),
            ],
            vec![
                Edge::new("e1", "crit", RelationName::CriterionFor, "prob"),
                Edge::new("e2", "sol", RelationName::Addresses, "prob"),
                Edge::new("e3", "q", RelationName::AsksAbout, "sol"),
                Edge::new("e4", "ans", RelationName::PotentialAnswerTo, "q"),
                Edge::new("e5", "pro", RelationName::Supports, "claim"),
            ],
        )
    }

    fn ids(graph: &Graph) -> HashSet<&str> {
        graph.nodes.iter().map(|n| n.id.as_str()).collect()
    }

    #[test]
    fn test_default_view_is_breakdown_only() {
        let graph = topic();
        let result = apply_info_filter(&graph, &ViewFilter::default());
        assert_eq!(ids(&result), ["prob", "crit", "sol"].into_iter().collect());
        assert_eq!(result.edges.len(), 2);
    }

    #[test]
    fn test_everything() {
        let graph = topic();
        let result = apply_view(&graph, &ViewFilter::everything(), &UserScores::new());
        assert_eq!(result, graph);
    }

    #[test]
    fn test_no_categories() {
        let graph = topic();
        let view = ViewFilter {
            categories_to_show: vec![],
            ..ViewFilter::default()
        };
        assert!(apply_info_filter(&graph, &view).nodes.is_empty());
    }

    #[test]
    fn test_per_category_filters_compose() {
        let graph = topic();
        let view = ViewFilter {
            categories_to_show: InfoCategory::ALL.to_vec(),
            breakdown_filter: StandardFilter::HighLevel(HighLevelOptions { layers_deep: 1 }),
            research_filter: StandardFilter::Question(QuestionOptions {
                central_question_id: "q".to_string(),
            }),
            justification_filter: StandardFilter::RootClaim(RootClaimOptions {
                central_root_claim_id: "claim".to_string(),
            }),
            general_filter: GeneralFilter::default(),
        };
        let result = apply_view(&graph, &view, &UserScores::new());

        let expected: HashSet<&str> = ["prob", "sol", "q", "ans", "claim", "pro"].into();
        assert_eq!(ids(&result), expected);
        // the question -> solution edge crosses categories and survives
        assert!(result.edges.iter().any(|e| e.id == "e3"));
    }

    #[test]
    fn test_general_filter_overrides_categories() {
        let graph = topic();
        let view = ViewFilter {
            general_filter: GeneralFilter {
                nodes_to_show: vec!["q".to_string()],
                nodes_to_hide: vec!["crit".to_string()],
                ..Default::default()
            },
            ..ViewFilter::default()
        };
        let result = apply_view(&graph, &view, &UserScores::new());
        assert_eq!(ids(&result), ["prob", "sol", "q"].into_iter().collect());
    }

    #[test]
    fn test_view_json_defaults() {
        let json = r#"{
            "categoriesToShow": ["breakdown", "research"],
            "researchFilter": {"type": "source", "centralSourceId": "s"}
        }"#;
        let view: ViewFilter = serde_json::from_str(json).unwrap();
        assert!(view.shows(InfoCategory::Research));
        assert!(!view.shows(InfoCategory::Justification));
        assert_eq!(view.breakdown_filter, StandardFilter::None);
        assert_eq!(view.research_filter.name(), "source");

        let empty: ViewFilter = serde_json::from_str("{}").unwrap();
        assert_eq!(empty, ViewFilter::default());
    }

    #[test]
    fn test_shared_snapshot_across_threads() {
        let graph = topic();
        let view = ViewFilter::everything();
        let scores = UserScores::new();

        let results: Vec<Graph> = std::thread::scope(|scope| {
            let handles: Vec<_> = (0..4)
                .map(|_| scope.spawn(|| apply_view(&graph, &view, &scores)))
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });

        assert!(results.iter().all(|result| *result == graph));
    }
}
