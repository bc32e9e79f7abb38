//! Standard filters.
//!
//! Each filter narrows one information category's graph to the part a
//! particular view cares about. They are pure `(Graph, options) -> Graph`
//! functions: nodes are picked by traversal, and edges are always the
//! induced edges between the picked nodes.
//!
//! A filter whose central node no longer exists returns its input
//! unchanged, since view state can outlive the node it points at.

use super::detail::{solution_details, SolutionDetail};
use crate::traversal::TopicGraph;
use petgraph::graph::NodeIndex;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use topic_core::{Graph, Node, NodeType, RelationName};
use tracing::{debug, warn};

const QUESTION_RELATIONS: [RelationName; 5] = [
    RelationName::AsksAbout,
    RelationName::PotentialAnswerTo,
    RelationName::RelevantFor,
    RelationName::SourceOf,
    RelationName::Mentions,
];

const SOURCE_RELATIONS: [RelationName; 4] = [
    RelationName::SourceOf,
    RelationName::RelevantFor,
    RelationName::Mentions,
    RelationName::RelatesTo,
];

const HIGH_LEVEL_TYPES: [NodeType; 2] = [NodeType::Problem, NodeType::Solution];

const ROOT_CLAIM_RELATIONS: [RelationName; 2] = [RelationName::Supports, RelationName::Critiques];

/// One filter per view type, each with only the options it needs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum StandardFilter {
    #[default]
    None,
    HighLevel(HighLevelOptions),
    Problem(ProblemOptions),
    Tradeoffs(TradeoffsOptions),
    Solution(SolutionOptions),
    Question(QuestionOptions),
    Source(SourceOptions),
    RootClaim(RootClaimOptions),
}

impl StandardFilter {
    pub fn name(&self) -> &'static str {
        match self {
            StandardFilter::None => "none",
            StandardFilter::HighLevel(_) => "highLevel",
            StandardFilter::Problem(_) => "problem",
            StandardFilter::Tradeoffs(_) => "tradeoffs",
            StandardFilter::Solution(_) => "solution",
            StandardFilter::Question(_) => "question",
            StandardFilter::Source(_) => "source",
            StandardFilter::RootClaim(_) => "rootClaim",
        }
    }
}

fn default_layers_deep() -> usize {
    1
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HighLevelOptions {
    /// How many hops around problems and solutions to include.
    #[serde(default = "default_layers_deep")]
    pub layers_deep: usize,
}

impl Default for HighLevelOptions {
    fn default() -> Self {
        Self {
            layers_deep: default_layers_deep(),
        }
    }
}

/// Kinds of problem detail the problem filter can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ProblemDetail {
    Causes,
    Effects,
    Subproblems,
    Criteria,
    Solutions,
}

impl ProblemDetail {
    pub const ALL: [ProblemDetail; 5] = [
        Self::Causes,
        Self::Effects,
        Self::Subproblems,
        Self::Criteria,
        Self::Solutions,
    ];
}

fn all_problem_details() -> Vec<ProblemDetail> {
    ProblemDetail::ALL.to_vec()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProblemOptions {
    pub central_problem_id: String,
    #[serde(default = "all_problem_details")]
    pub problem_details: Vec<ProblemDetail>,
    #[serde(default)]
    pub solution_detail: SolutionDetail,
}

impl ProblemOptions {
    pub fn new(central_problem_id: impl Into<String>) -> Self {
        Self {
            central_problem_id: central_problem_id.into(),
            problem_details: all_problem_details(),
            solution_detail: SolutionDetail::default(),
        }
    }
}

/// Which of a problem's solutions and criteria to compare.
///
/// Empty lists, or lists selecting nothing that exists, mean "all".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TradeoffSelection {
    #[serde(default)]
    pub solutions: Vec<String>,
    #[serde(default)]
    pub criteria: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TradeoffsOptions {
    pub central_problem_id: String,
    #[serde(flatten)]
    pub selection: TradeoffSelection,
    #[serde(default)]
    pub solution_detail: SolutionDetail,
}

impl TradeoffsOptions {
    pub fn new(central_problem_id: impl Into<String>) -> Self {
        Self {
            central_problem_id: central_problem_id.into(),
            selection: TradeoffSelection::default(),
            solution_detail: SolutionDetail::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SolutionOptions {
    pub central_solution_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionOptions {
    pub central_question_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceOptions {
    pub central_source_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RootClaimOptions {
    pub central_root_claim_id: String,
}

/// Runs whichever filter `filter` names.
pub fn apply_standard_filter(graph: &Graph, filter: &StandardFilter) -> Graph {
    let filtered = match filter {
        StandardFilter::None => graph.clone(),
        StandardFilter::HighLevel(options) => apply_high_level_filter(graph, options),
        StandardFilter::Problem(options) => apply_problem_filter(graph, options),
        StandardFilter::Tradeoffs(options) => apply_tradeoffs_filter(graph, options),
        StandardFilter::Solution(options) => apply_solution_filter(graph, options),
        StandardFilter::Question(options) => apply_question_filter(graph, options),
        StandardFilter::Source(options) => apply_source_filter(graph, options),
        StandardFilter::RootClaim(options) => apply_root_claim_filter(graph, options),
    };

    debug!(
        "Filter {} kept {}/{} nodes",
        filter.name(),
        filtered.nodes.len(),
        graph.nodes.len()
    );
    filtered
}

/// Resolves a central node id, logging when the filter has to degrade.
fn central(topic: &TopicGraph<'_>, id: &str, filter: &str) -> Option<NodeIndex> {
    let index = topic.index(id);
    if index.is_none() {
        warn!("{} filter: node {} not found, showing all", filter, id);
    }
    index
}

/// Builds the output graph from picked indexes.
fn pick(topic: &TopicGraph<'_>, picked: impl IntoIterator<Item = NodeIndex>) -> Graph {
    let ids: HashSet<&str> = picked
        .into_iter()
        .map(|index| topic.node(index).id.as_str())
        .collect();
    topic.source().subgraph(&ids)
}

fn of_type(topic: &TopicGraph<'_>, indexes: &[NodeIndex], node_type: NodeType) -> Vec<NodeIndex> {
    indexes
        .iter()
        .copied()
        .filter(|&index| topic.node(index).node_type == node_type)
        .collect()
}

/// Problems and solutions plus their surroundings, without criteria.
pub fn apply_high_level_filter(graph: &Graph, options: &HighLevelOptions) -> Graph {
    let topic = TopicGraph::new(graph);
    let core = topic.indexes_where(|node| HIGH_LEVEL_TYPES.contains(&node.node_type));

    let mut picked: Vec<NodeIndex> = core.clone();
    for &index in &core {
        picked.extend(topic.neighborhood(index, options.layers_deep));
    }

    // criteria are too detailed for an overview
    let picked = picked
        .into_iter()
        .filter(|&index| topic.node(index).node_type != NodeType::Criterion);
    pick(&topic, picked)
}

/// A problem with whichever kinds of detail were requested.
pub fn apply_problem_filter(graph: &Graph, options: &ProblemOptions) -> Graph {
    let topic = TopicGraph::new(graph);
    let Some(problem) = central(&topic, &options.central_problem_id, "problem") else {
        return graph.clone();
    };

    let mut upstream_relations = Vec::new();
    let mut downstream_relations = Vec::new();
    for detail in &options.problem_details {
        match detail {
            ProblemDetail::Causes => upstream_relations.push(RelationName::Causes),
            ProblemDetail::Effects => downstream_relations.push(RelationName::Causes),
            ProblemDetail::Subproblems => downstream_relations.push(RelationName::Has),
            ProblemDetail::Criteria => upstream_relations.push(RelationName::CriterionFor),
            ProblemDetail::Solutions => {
                upstream_relations.extend([RelationName::Addresses, RelationName::Accomplishes])
            }
        }
    }
    upstream_relations.sort();
    upstream_relations.dedup();
    downstream_relations.sort();
    downstream_relations.dedup();

    let mut picked = vec![problem];
    let upstream = if upstream_relations.is_empty() {
        Vec::new()
    } else {
        topic.upstream(problem, Some(upstream_relations.as_slice()))
    };
    if !downstream_relations.is_empty() {
        picked.extend(topic.downstream(problem, Some(downstream_relations.as_slice())));
    }

    if options.problem_details.contains(&ProblemDetail::Solutions) {
        let solutions = of_type(&topic, &upstream, NodeType::Solution);
        let criteria: HashSet<NodeIndex> =
            of_type(&topic, &topic.sources(problem), NodeType::Criterion)
                .into_iter()
                .collect();
        picked.extend(solution_details(
            &topic,
            &solutions,
            options.solution_detail,
            &criteria,
        ));
    }
    picked.extend(upstream);

    pick(&topic, picked)
}

/// The solutions and criteria selected from all those of a problem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedTradeoffNodes<'a> {
    pub selected_solutions: Vec<&'a Node>,
    pub selected_criteria: Vec<&'a Node>,
}

/// Narrows a problem's solutions and criteria to a selection.
///
/// Selection only ever narrows: when it is empty or names nothing that
/// exists, every solution (or criterion) is kept.
pub fn get_selected_tradeoff_nodes<'a>(
    solutions: &[&'a Node],
    criteria: &[&'a Node],
    selection: &TradeoffSelection,
) -> SelectedTradeoffNodes<'a> {
    fn narrow<'a>(all: &[&'a Node], selected_ids: &[String]) -> Vec<&'a Node> {
        let selected: Vec<&'a Node> = all
            .iter()
            .copied()
            .filter(|node| selected_ids.contains(&node.id))
            .collect();
        if selected.is_empty() {
            all.to_vec()
        } else {
            selected
        }
    }

    SelectedTradeoffNodes {
        selected_solutions: narrow(solutions, &selection.solutions),
        selected_criteria: narrow(criteria, &selection.criteria),
    }
}

/// A problem's selected solutions and criteria, for comparing tradeoffs.
pub fn apply_tradeoffs_filter(graph: &Graph, options: &TradeoffsOptions) -> Graph {
    let topic = TopicGraph::new(graph);
    let Some(problem) = central(&topic, &options.central_problem_id, "tradeoffs") else {
        return graph.clone();
    };

    let sources = topic.sources(problem);
    let to_nodes = |indexes: Vec<NodeIndex>| {
        indexes
            .into_iter()
            .map(|index| topic.node(index))
            .collect::<Vec<_>>()
    };
    let all_solutions = to_nodes(of_type(&topic, &sources, NodeType::Solution));
    let all_criteria = to_nodes(of_type(&topic, &sources, NodeType::Criterion));

    let selected = get_selected_tradeoff_nodes(&all_solutions, &all_criteria, &options.selection);
    let solutions: Vec<NodeIndex> = selected
        .selected_solutions
        .iter()
        .filter_map(|node| topic.index(&node.id))
        .collect();
    let criteria: Vec<NodeIndex> = selected
        .selected_criteria
        .iter()
        .filter_map(|node| topic.index(&node.id))
        .collect();

    let mut picked = vec![problem];
    picked.extend(solutions.iter().copied());
    picked.extend(criteria.iter().copied());
    for &criterion in &criteria {
        picked.extend(
            topic
                .targets(criterion, false)
                .into_iter()
                .filter(|&target| target != problem),
        );
    }

    let criteria_set: HashSet<NodeIndex> = criteria.into_iter().collect();
    picked.extend(solution_details(
        &topic,
        &solutions,
        options.solution_detail,
        &criteria_set,
    ));

    pick(&topic, picked)
}

/// A solution with all of its detail.
pub fn apply_solution_filter(graph: &Graph, options: &SolutionOptions) -> Graph {
    let topic = TopicGraph::new(graph);
    let Some(solution) = central(&topic, &options.central_solution_id, "solution") else {
        return graph.clone();
    };

    let mut picked = vec![solution];
    picked.extend(solution_details(
        &topic,
        &[solution],
        SolutionDetail::All,
        &HashSet::new(),
    ));
    pick(&topic, picked)
}

/// A question, what it asks about, and the research feeding into it.
pub fn apply_question_filter(graph: &Graph, options: &QuestionOptions) -> Graph {
    let topic = TopicGraph::new(graph);
    let Some(question) = central(&topic, &options.central_question_id, "question") else {
        return graph.clone();
    };

    let mut picked = vec![question];
    picked.extend(topic.targets(question, false));
    picked.extend(topic.upstream(question, Some(&QUESTION_RELATIONS[..])));
    pick(&topic, picked)
}

/// A source and everything it informs.
pub fn apply_source_filter(graph: &Graph, options: &SourceOptions) -> Graph {
    let topic = TopicGraph::new(graph);
    let Some(source) = central(&topic, &options.central_source_id, "source") else {
        return graph.clone();
    };

    let mut picked = vec![source];
    picked.extend(topic.downstream(source, Some(&SOURCE_RELATIONS[..])));
    pick(&topic, picked)
}

/// A root claim and the supports and critiques argued under it.
pub fn apply_root_claim_filter(graph: &Graph, options: &RootClaimOptions) -> Graph {
    let topic = TopicGraph::new(graph);
    let Some(claim) = central(&topic, &options.central_root_claim_id, "rootClaim") else {
        return graph.clone();
    };

    let mut picked = vec![claim];
    picked.extend(topic.upstream(claim, Some(&ROOT_CLAIM_RELATIONS[..])));
    pick(&topic, picked)
}

#[cfg(test)]
mod tests {
    use super::*;
    use topic_core::{get_relevant_edges, Edge};

    fn node_ids(graph: &Graph) -> HashSet<String> {
        graph.nodes.iter().map(|n| n.id.clone()).collect()
    }

    fn set(ids: &str) -> HashSet<String> {
        ids.split_whitespace().map(String::from).collect()
    }

    /// A problem with causes, effects, a subproblem, criteria and two solutions.
    fn breakdown() -> Graph {
        Graph::new(
            vec![
                Node::new("prob", NodeType::Problem),
                Node::new("root", NodeType::Cause),
                Node::new("cause", NodeType::Cause),
                Node::new("effect", NodeType::Effect),
                Node::new("sub", NodeType::Subproblem),
                Node::new("cost", NodeType::Criterion),
                Node::new("speed", NodeType::Criterion),
                Node::new("bus", NodeType::Solution),
                Node::new("bike", NodeType::Solution),
                Node::new("lane", NodeType::SolutionComponent),
                Node::new("fast", NodeType::Benefit),
                Node::new("wet", NodeType::Detriment),
                Node::new("hill", NodeType::Obstacle),
                Node::new("unrelated", NodeType::Problem),
            ],
            vec![
                Edge::new("e1", "root", RelationName::Causes, "cause"),
                Edge::new("e2", "cause", RelationName::Causes, "prob"),
                Edge::new("e3", "prob", RelationName::Causes, "effect"),
                Edge::new("e4", "prob", RelationName::Has, "sub"),
                Edge::new("e5", "cost", RelationName::CriterionFor, "prob"),
                Edge::new("e6", "speed", RelationName::CriterionFor, "prob"),
                Edge::new("e7", "bus", RelationName::Addresses, "prob"),
                Edge::new("e8", "bike", RelationName::Addresses, "prob"),
                Edge::new("e9", "bike", RelationName::Has, "lane"),
                Edge::new("e10", "lane", RelationName::Causes, "fast"),
                Edge::new("e11", "fast", RelationName::Fulfills, "speed"),
                Edge::new("e12", "bike", RelationName::Causes, "wet"),
                Edge::new("e13", "hill", RelationName::Impedes, "bike"),
            ],
        )
    }

    fn assert_edges_induced(filtered: &Graph, source: &Graph) {
        assert_eq!(filtered.edges, get_relevant_edges(&filtered.nodes, source));
    }

    #[test]
    fn test_none_is_identity() {
        let graph = breakdown();
        assert_eq!(apply_standard_filter(&graph, &StandardFilter::None), graph);
    }

    #[test]
    fn test_high_level_depth_zero() {
        let graph = breakdown();
        let filtered = apply_high_level_filter(&graph, &HighLevelOptions { layers_deep: 0 });
        assert_eq!(node_ids(&filtered), set("prob bus bike unrelated"));
        assert_edges_induced(&filtered, &graph);
    }

    #[test]
    fn test_high_level_excludes_criteria() {
        let graph = breakdown();
        for layers_deep in 0..4 {
            let filtered = apply_high_level_filter(&graph, &HighLevelOptions { layers_deep });
            assert!(filtered
                .nodes
                .iter()
                .all(|n| n.node_type != NodeType::Criterion));
        }

        let filtered = apply_high_level_filter(&graph, &HighLevelOptions { layers_deep: 1 });
        assert_eq!(
            node_ids(&filtered),
            set("prob cause effect sub bus bike lane wet hill unrelated")
        );
    }

    #[test]
    fn test_problem_filter_all_details() {
        let graph = breakdown();
        let filtered = apply_problem_filter(&graph, &ProblemOptions::new("prob"));
        assert_eq!(
            node_ids(&filtered),
            set("prob root cause effect sub cost speed bus bike")
        );
        assert_edges_induced(&filtered, &graph);
    }

    #[test]
    fn test_problem_filter_selected_details() {
        let graph = breakdown();
        let options = ProblemOptions {
            central_problem_id: "prob".to_string(),
            problem_details: vec![ProblemDetail::Effects, ProblemDetail::Criteria],
            solution_detail: SolutionDetail::All,
        };
        let filtered = apply_problem_filter(&graph, &options);
        assert_eq!(node_ids(&filtered), set("prob effect cost speed"));
    }

    #[test]
    fn test_problem_filter_solution_detail() {
        let graph = breakdown();
        let options = ProblemOptions {
            central_problem_id: "prob".to_string(),
            problem_details: vec![ProblemDetail::Solutions],
            solution_detail: SolutionDetail::ConnectedToCriteria,
        };
        let filtered = apply_problem_filter(&graph, &options);
        assert_eq!(node_ids(&filtered), set("prob bus bike lane fast"));
    }

    #[test]
    fn test_missing_central_node_is_noop() {
        let graph = breakdown();
        let filters = [
            StandardFilter::Problem(ProblemOptions::new("ghost")),
            StandardFilter::Tradeoffs(TradeoffsOptions::new("ghost")),
            StandardFilter::Solution(SolutionOptions {
                central_solution_id: "ghost".to_string(),
            }),
            StandardFilter::Question(QuestionOptions {
                central_question_id: "ghost".to_string(),
            }),
            StandardFilter::Source(SourceOptions {
                central_source_id: "ghost".to_string(),
            }),
            StandardFilter::RootClaim(RootClaimOptions {
                central_root_claim_id: "ghost".to_string(),
            }),
        ];
        for filter in &filters {
            let filtered = apply_standard_filter(&graph, filter);
            assert_eq!(filtered, graph, "{}", filter.name());
        }
    }

    #[test]
    fn test_selected_tradeoff_nodes_fallback() {
        let a = Node::new("A", NodeType::Solution);
        let b = Node::new("B", NodeType::Solution);
        let x = Node::new("X", NodeType::Criterion);
        let y = Node::new("Y", NodeType::Criterion);
        let solutions = [&a, &b];
        let criteria = [&x, &y];

        let empty = TradeoffSelection::default();
        let selected = get_selected_tradeoff_nodes(&solutions, &criteria, &empty);
        assert_eq!(selected.selected_solutions, vec![&a, &b]);
        assert_eq!(selected.selected_criteria, vec![&x, &y]);

        let only_a = TradeoffSelection {
            solutions: vec!["A".to_string()],
            criteria: vec![],
        };
        let selected = get_selected_tradeoff_nodes(&solutions, &criteria, &only_a);
        assert_eq!(selected.selected_solutions, vec![&a]);
        assert_eq!(selected.selected_criteria, vec![&x, &y]);

        let stale = TradeoffSelection {
            solutions: vec!["deleted".to_string()],
            criteria: vec!["Y".to_string()],
        };
        let selected = get_selected_tradeoff_nodes(&solutions, &criteria, &stale);
        assert_eq!(selected.selected_solutions, vec![&a, &b]);
        assert_eq!(selected.selected_criteria, vec![&y]);
    }

    #[test]
    fn test_tradeoffs_filter() {
        let graph = breakdown();
        let mut options = TradeoffsOptions::new("prob");
        options.selection.solutions = vec!["bike".to_string()];
        options.selection.criteria = vec!["speed".to_string()];
        options.solution_detail = SolutionDetail::ConnectedToCriteria;

        let filtered = apply_tradeoffs_filter(&graph, &options);
        assert_eq!(node_ids(&filtered), set("prob bike speed lane fast"));
        assert_edges_induced(&filtered, &graph);
    }

    #[test]
    fn test_tradeoffs_filter_empty_selection_shows_all() {
        let graph = breakdown();
        let filtered = apply_tradeoffs_filter(&graph, &TradeoffsOptions::new("prob"));
        assert_eq!(node_ids(&filtered), set("prob bus bike cost speed"));
    }

    #[test]
    fn test_solution_filter() {
        let graph = breakdown();
        let filtered = apply_solution_filter(
            &graph,
            &SolutionOptions {
                central_solution_id: "bike".to_string(),
            },
        );
        assert_eq!(node_ids(&filtered), set("bike lane fast wet hill"));
    }

    fn research() -> Graph {
        Graph::new(
            vec![
                Node::new("prob", NodeType::Problem),
                Node::new("q", NodeType::Question),
                Node::new("subq", NodeType::Question),
                Node::new("ans", NodeType::Answer),
                Node::new("fact", NodeType::Fact),
                Node::new("src", NodeType::Source),
                Node::new("other", NodeType::Fact),
            ],
            vec![
                Edge::new("e1", "q", RelationName::AsksAbout, "prob"),
                Edge::new("e2", "subq", RelationName::AsksAbout, "q"),
                Edge::new("e3", "ans", RelationName::PotentialAnswerTo, "q"),
                Edge::new("e4", "fact", RelationName::RelevantFor, "ans"),
                Edge::new("e5", "src", RelationName::SourceOf, "fact"),
                Edge::new("e6", "other", RelationName::RelatesTo, "q"),
            ],
        )
    }

    #[test]
    fn test_question_filter() {
        let graph = research();
        let filtered = apply_question_filter(
            &graph,
            &QuestionOptions {
                central_question_id: "q".to_string(),
            },
        );
        assert_eq!(node_ids(&filtered), set("q prob subq ans fact src"));
    }

    #[test]
    fn test_source_filter() {
        let graph = research();
        let filtered = apply_source_filter(
            &graph,
            &SourceOptions {
                central_source_id: "src".to_string(),
            },
        );
        assert_eq!(node_ids(&filtered), set("src fact ans"));
    }

    #[test]
    fn test_root_claim_filter() {
        let graph = Graph::new(
            vec![
                Node::new("claim", NodeType::RootClaim),
                Node::new("pro", NodeType::Support),
                Node::new("con", NodeType::Critique),
                Node::new("rebut", NodeType::Critique),
                Node::new("elsewhere", NodeType::RootClaim),
            ],
            vec![
                Edge::new("e1", "pro", RelationName::Supports, "claim"),
                Edge::new("e2", "con", RelationName::Critiques, "claim"),
                Edge::new("e3", "rebut", RelationName::Critiques, "con"),
            ],
        );
        let filtered = apply_root_claim_filter(
            &graph,
            &RootClaimOptions {
                central_root_claim_id: "claim".to_string(),
            },
        );
        assert_eq!(node_ids(&filtered), set("claim pro con rebut"));
        assert_eq!(filtered.edges.len(), 3);
    }

    #[test]
    fn test_filter_json_shape() {
        let json = r#"{
            "type": "tradeoffs",
            "centralProblemId": "prob",
            "solutions": ["bike"],
            "criteria": [],
            "solutionDetail": "connectedToCriteria"
        }"#;
        let filter: StandardFilter = serde_json::from_str(json).unwrap();
        let StandardFilter::Tradeoffs(options) = &filter else {
            panic!("expected tradeoffs, got {}", filter.name());
        };
        assert_eq!(options.selection.solutions, vec!["bike".to_string()]);
        assert_eq!(options.solution_detail, SolutionDetail::ConnectedToCriteria);

        let high_level: StandardFilter = serde_json::from_str(r#"{"type":"highLevel"}"#).unwrap();
        let expected = StandardFilter::HighLevel(HighLevelOptions { layers_deep: 1 });
        assert_eq!(high_level, expected);

        let none: StandardFilter = serde_json::from_str(r#"{"type":"none"}"#).unwrap();
        assert_eq!(none, StandardFilter::None);
    }
}
