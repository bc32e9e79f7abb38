//! Score aggregation.
//!
//! Each user may score any graph part from 1 to 9, or leave it unscored
//! (`-`). When more than one perspective is viewed at once, the scores are
//! combined into a single displayed [`Score`] by an [`AggregationMode`].

use crate::error::ModelError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Value an unscored entry takes when measuring disagreement.
const NEUTRAL_SCORE: f64 = 5.0;

/// Largest possible population standard deviation of scores in 1..=9.
const MAX_DEVIATION: f64 = 4.0;

/// A score in `{"-", "1", ..., "9"}`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Score(Option<u8>);

impl Score {
    pub const UNSCORED: Score = Score(None);

    /// Creates a numeric score. Fails outside 1..=9.
    pub fn new(value: u8) -> Result<Self, ModelError> {
        if (1..=9).contains(&value) {
            Ok(Score(Some(value)))
        } else {
            Err(ModelError::InvalidScore(value.to_string()))
        }
    }

    /// Nearest score to a real value, clamped to 1..=9.
    fn from_rounded(value: f64) -> Self {
        Score(Some(value.round().clamp(1.0, 9.0) as u8))
    }

    pub fn value(&self) -> Option<u8> {
        self.0
    }
}

impl std::fmt::Display for Score {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.0 {
            Some(value) => write!(f, "{}", value),
            None => write!(f, "-"),
        }
    }
}

impl std::str::FromStr for Score {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "-" {
            return Ok(Score::UNSCORED);
        }
        match s.parse::<u8>() {
            Ok(value) if s.len() == 1 => Score::new(value),
            _ => Err(ModelError::InvalidScore(s.to_string())),
        }
    }
}

impl TryFrom<String> for Score {
    type Error = ModelError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Score> for String {
    fn from(score: Score) -> Self {
        score.to_string()
    }
}

/// How several perspectives' scores are combined.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AggregationMode {
    /// Rounded mean of the scored entries.
    #[default]
    Average,
    /// Spread of opinion, rescaled onto 1..=9.
    Disagreement,
}

impl std::fmt::Display for AggregationMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AggregationMode::Average => write!(f, "average"),
            AggregationMode::Disagreement => write!(f, "disagreement"),
        }
    }
}

/// `username -> graph part id -> score`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserScores(HashMap<String, HashMap<String, Score>>);

impl UserScores {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a score, replacing any earlier one by the same user.
    pub fn set(&mut self, username: impl Into<String>, part_id: impl Into<String>, score: Score) {
        self.0
            .entry(username.into())
            .or_default()
            .insert(part_id.into(), score);
    }

    /// The user's score for a part; unscored when absent.
    pub fn get(&self, username: &str, part_id: &str) -> Score {
        self.0
            .get(username)
            .and_then(|scores| scores.get(part_id))
            .copied()
            .unwrap_or(Score::UNSCORED)
    }
}

/// Combines several scores into one.
pub fn aggregate(scores: &[Score], mode: AggregationMode) -> Score {
    match mode {
        AggregationMode::Average => average(scores),
        AggregationMode::Disagreement => disagreement(scores),
    }
}

fn average(scores: &[Score]) -> Score {
    let values: Vec<f64> = scores
        .iter()
        .filter_map(|score| score.value())
        .map(f64::from)
        .collect();

    if values.is_empty() {
        return Score::UNSCORED;
    }

    let mean = values.iter().sum::<f64>() / values.len() as f64;
    Score::from_rounded(mean)
}

fn disagreement(scores: &[Score]) -> Score {
    if scores.is_empty() {
        return Score::UNSCORED;
    }

    let values: Vec<f64> = scores
        .iter()
        .map(|score| score.value().map(f64::from).unwrap_or(NEUTRAL_SCORE))
        .collect();

    let count = values.len() as f64;
    let mean = values.iter().sum::<f64>() / count;
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / count;
    let deviation = variance.sqrt();

    if deviation == 0.0 {
        return Score::UNSCORED;
    }

    // 0..=4 onto 1..=9
    Score::from_rounded(deviation * 8.0 / MAX_DEVIATION + 1.0)
}

/// The score shown for one graph part under the given perspectives.
///
/// A single perspective shows that user's raw score; several are
/// aggregated, with missing scores counted as unscored.
pub fn displayed_score(
    part_id: &str,
    perspectives: &[String],
    scores: &UserScores,
    mode: AggregationMode,
) -> Score {
    match perspectives {
        [] => Score::UNSCORED,
        [only] => scores.get(only, part_id),
        many => {
            let part_scores: Vec<Score> = many
                .iter()
                .map(|username| scores.get(username, part_id))
                .collect();
            aggregate(&part_scores, mode)
        }
    }
}

/// Displayed scores for many graph parts at once.
pub fn displayed_scores<'a>(
    part_ids: impl IntoIterator<Item = &'a str>,
    perspectives: &[String],
    scores: &UserScores,
    mode: AggregationMode,
) -> HashMap<String, Score> {
    part_ids
        .into_iter()
        .map(|id| {
            let score = displayed_score(id, perspectives, scores, mode);
            (id.to_string(), score)
        })
        .collect()
}

/// Whether `username` may set scores in the current view.
///
/// Only when the view is not read-only and the sole active perspective is
/// the user's own.
pub fn user_can_edit_scores(
    username: Option<&str>,
    perspectives: &[String],
    read_only: bool,
) -> bool {
    match (username, perspectives) {
        (Some(user), [only]) => !read_only && only == user,
        _ => false,
    }
}
