//! Edges between topic nodes.

use crate::relation::RelationName;
use serde::{Deserialize, Serialize};

/// Free-form payload carried by an edge.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EdgeData {
    /// User-facing label overriding the relation name.
    #[serde(default)]
    pub custom_label: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub argued_diagram_part_id: Option<String>,
}

/// A directed, labelled edge `source --label--> target`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    pub id: String,
    pub source: String,
    pub target: String,
    pub label: RelationName,

    #[serde(default)]
    pub data: EdgeData,
}

impl Edge {
    /// Creates an edge with no custom label.
    pub fn new(
        id: impl Into<String>,
        source: impl Into<String>,
        label: RelationName,
        target: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            source: source.into(),
            target: target.into(),
            label,
            data: EdgeData::default(),
        }
    }

    /// Builder: override the displayed label.
    pub fn with_custom_label(mut self, label: impl Into<String>) -> Self {
        self.data.custom_label = Some(label.into());
        self
    }
}
