//! Relation names and the table of legal relations.
//!
//! An edge `source --label--> target` is legal only when
//! `(source.type, label, target.type)` appears in [`relations`]. The same
//! relation name can be legal for several type pairs, so callers that
//! traverse by relation must name the relations they mean.

use crate::error::ModelError;
use crate::node::{InfoCategory, NodeType};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::sync::OnceLock;

use InfoCategory as C;
use NodeType as N;
use RelationName as R;

/// The label carried by an edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RelationName {
    Causes,
    Creates,
    Has,
    Addresses,
    Accomplishes,
    ContingencyFor,
    CriterionFor,
    Fulfills,
    Impedes,
    Mitigates,
    RelatesTo,

    AsksAbout,
    PotentialAnswerTo,
    RelevantFor,
    SourceOf,
    Mentions,

    Supports,
    Critiques,
}

impl RelationName {
    pub const ALL: [RelationName; 18] = [
        Self::Causes,
        Self::Creates,
        Self::Has,
        Self::Addresses,
        Self::Accomplishes,
        Self::ContingencyFor,
        Self::CriterionFor,
        Self::Fulfills,
        Self::Impedes,
        Self::Mitigates,
        Self::RelatesTo,
        Self::AsksAbout,
        Self::PotentialAnswerTo,
        Self::RelevantFor,
        Self::SourceOf,
        Self::Mentions,
        Self::Supports,
        Self::Critiques,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Causes => "causes",
            Self::Creates => "creates",
            Self::Has => "has",
            Self::Addresses => "addresses",
            Self::Accomplishes => "accomplishes",
            Self::ContingencyFor => "contingencyFor",
            Self::CriterionFor => "criterionFor",
            Self::Fulfills => "fulfills",
            Self::Impedes => "impedes",
            Self::Mitigates => "mitigates",
            Self::RelatesTo => "relatesTo",
            Self::AsksAbout => "asksAbout",
            Self::PotentialAnswerTo => "potentialAnswerTo",
            Self::RelevantFor => "relevantFor",
            Self::SourceOf => "sourceOf",
            Self::Mentions => "mentions",
            Self::Supports => "supports",
            Self::Critiques => "critiques",
        }
    }
}

impl std::fmt::Display for RelationName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for RelationName {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|name| name.as_str() == s)
            .ok_or_else(|| ModelError::UnknownRelation(s.to_string()))
    }
}

/// One legal `(parent, name, child)` triple. The parent is the edge source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Relation {
    pub parent: NodeType,
    pub name: RelationName,
    pub child: NodeType,
}

/// Relations between two concrete node types.
const TYPE_RULES: &[(NodeType, RelationName, NodeType)] = &[
    // problem structure
    (N::Problem, R::Causes, N::Problem),
    (N::Cause, R::Causes, N::Cause),
    (N::Cause, R::Causes, N::Problem),
    (N::Cause, R::Causes, N::Subproblem),
    (N::Problem, R::Causes, N::Effect),
    (N::Subproblem, R::Causes, N::Effect),
    (N::Effect, R::Causes, N::Effect),
    (N::Problem, R::Has, N::Problem),
    (N::Problem, R::Has, N::Subproblem),
    (N::Subproblem, R::Has, N::Subproblem),
    (N::Criterion, R::CriterionFor, N::Problem),
    (N::Criterion, R::CriterionFor, N::Subproblem),
    // solutions
    (N::Solution, R::Addresses, N::Problem),
    (N::Solution, R::Addresses, N::Subproblem),
    (N::Solution, R::Addresses, N::Cause),
    (N::Solution, R::Addresses, N::Detriment),
    (N::Solution, R::Addresses, N::Obstacle),
    (N::Solution, R::Accomplishes, N::Solution),
    (N::SolutionComponent, R::Accomplishes, N::Solution),
    (N::Solution, R::ContingencyFor, N::Solution),
    (N::Solution, R::Has, N::SolutionComponent),
    (N::SolutionComponent, R::Has, N::SolutionComponent),
    (N::Solution, R::Causes, N::Effect),
    (N::Solution, R::Causes, N::Benefit),
    (N::Solution, R::Causes, N::Detriment),
    (N::SolutionComponent, R::Causes, N::Effect),
    (N::SolutionComponent, R::Causes, N::Benefit),
    (N::SolutionComponent, R::Causes, N::Detriment),
    (N::Benefit, R::Causes, N::Benefit),
    (N::Detriment, R::Causes, N::Detriment),
    (N::Solution, R::Creates, N::Problem),
    (N::SolutionComponent, R::Creates, N::Problem),
    (N::Obstacle, R::Impedes, N::Solution),
    (N::Obstacle, R::Impedes, N::SolutionComponent),
    (N::Mitigation, R::Mitigates, N::Detriment),
    (N::Mitigation, R::Mitigates, N::Obstacle),
    (N::Mitigation, R::Has, N::MitigationComponent),
    // criteria
    (N::Solution, R::Fulfills, N::Criterion),
    (N::SolutionComponent, R::Fulfills, N::Criterion),
    (N::Benefit, R::Fulfills, N::Criterion),
    (N::Effect, R::Fulfills, N::Criterion),
    // research
    (N::Question, R::AsksAbout, N::Question),
    (N::Question, R::AsksAbout, N::Answer),
    (N::Question, R::AsksAbout, N::Fact),
    (N::Answer, R::PotentialAnswerTo, N::Question),
    (N::Fact, R::RelevantFor, N::Question),
    (N::Fact, R::RelevantFor, N::Answer),
    (N::Source, R::RelevantFor, N::Question),
    (N::Source, R::RelevantFor, N::Answer),
    (N::Source, R::SourceOf, N::Fact),
];

/// Relations from a concrete type to every type of a category.
const CATEGORY_RULES: &[(NodeType, RelationName, InfoCategory)] = &[
    (N::Question, R::AsksAbout, C::Breakdown),
    (N::Fact, R::RelevantFor, C::Breakdown),
    (N::Source, R::RelevantFor, C::Breakdown),
    (N::Source, R::Mentions, C::Breakdown),
    (N::Source, R::Mentions, C::Research),
    (N::Support, R::Supports, C::Justification),
    (N::Critique, R::Critiques, C::Justification),
];

struct RelationTable {
    relations: Vec<Relation>,
    lookup: HashSet<(NodeType, RelationName, NodeType)>,
}

impl RelationTable {
    fn insert(&mut self, parent: NodeType, name: RelationName, child: NodeType) {
        if self.lookup.insert((parent, name, child)) {
            self.relations.push(Relation {
                parent,
                name,
                child,
            });
        }
    }
}

fn table() -> &'static RelationTable {
    static TABLE: OnceLock<RelationTable> = OnceLock::new();
    TABLE.get_or_init(|| {
        let mut table = RelationTable {
            relations: Vec::new(),
            lookup: HashSet::new(),
        };

        for &(parent, name, child) in TYPE_RULES {
            table.insert(parent, name, child);
        }
        for &(parent, name, category) in CATEGORY_RULES {
            for child in category.node_types() {
                table.insert(parent, name, child);
            }
        }
        // any two parts may be associated
        for parent in NodeType::ALL {
            for child in NodeType::ALL {
                table.insert(parent, R::RelatesTo, child);
            }
        }

        table
    })
}

/// Every legal relation triple.
pub fn relations() -> &'static [Relation] {
    &table().relations
}

/// Whether `parent --name--> child` is a legal edge.
pub fn is_valid_relation(parent: NodeType, name: RelationName, child: NodeType) -> bool {
    table().lookup.contains(&(parent, name, child))
}

/// Relation names that may connect `parent` to `child`.
pub fn relation_names_between(parent: NodeType, child: NodeType) -> Vec<RelationName> {
    relations()
        .iter()
        .filter(|relation| relation.parent == parent && relation.child == child)
        .map(|relation| relation.name)
        .collect()
}
