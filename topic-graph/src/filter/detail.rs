//! Solution detail expansion shared by the problem, tradeoffs and
//! solution filters.

use crate::traversal::TopicGraph;
use petgraph::graph::NodeIndex;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use topic_core::RelationName;

/// Details hang below a solution: its components and what it causes.
pub(crate) const DETAIL_DOWNSTREAM: [RelationName; 2] = [RelationName::Has, RelationName::Causes];

/// Details pointing into a solution: obstacles, sub-solutions, contingencies.
pub(crate) const DETAIL_UPSTREAM: [RelationName; 3] = [
    RelationName::Impedes,
    RelationName::Accomplishes,
    RelationName::ContingencyFor,
];

/// How much of each solution's surroundings to show.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SolutionDetail {
    All,
    /// Only details that lead (directly or transitively) to a given criterion.
    ConnectedToCriteria,
    #[default]
    None,
}

/// Detail nodes for the given solutions, excluding the solutions themselves
/// unless one is a detail of another.
pub fn solution_details(
    topic: &TopicGraph<'_>,
    solutions: &[NodeIndex],
    detail: SolutionDetail,
    criteria: &HashSet<NodeIndex>,
) -> Vec<NodeIndex> {
    let mut details = Vec::new();
    let mut seen = HashSet::new();

    for &solution in solutions {
        let found = match detail {
            SolutionDetail::None => Vec::new(),
            SolutionDetail::All => {
                let mut found = topic.downstream(solution, Some(&DETAIL_DOWNSTREAM[..]));
                found.extend(topic.upstream(solution, Some(&DETAIL_UPSTREAM[..])));
                found
            }
            SolutionDetail::ConnectedToCriteria => topic
                .downstream(solution, Some(&DETAIL_DOWNSTREAM[..]))
                .into_iter()
                .filter(|&candidate| {
                    topic
                        .downstream(candidate, None)
                        .iter()
                        .any(|reached| criteria.contains(reached))
                })
                .collect(),
        };

        details.extend(found.into_iter().filter(|index| seen.insert(*index)));
    }

    details
}
