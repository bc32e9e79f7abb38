//! View filters.
//!
//! A view is derived along three axes:
//! - which information categories are shown at all,
//! - a [`StandardFilter`] narrowing each shown category,
//! - a [`GeneralFilter`] of explicit overrides applied last.

mod detail;
mod general;
mod standard;
mod view;

pub use detail::{solution_details, SolutionDetail};
pub use general::{apply_general_filter, GeneralFilter, ScoreComparer, ScoredFilter};
pub use standard::{
    apply_high_level_filter, apply_problem_filter, apply_question_filter, apply_root_claim_filter,
    apply_solution_filter, apply_source_filter, apply_standard_filter, apply_tradeoffs_filter,
    get_selected_tradeoff_nodes, HighLevelOptions, ProblemDetail, ProblemOptions, QuestionOptions,
    RootClaimOptions, SelectedTradeoffNodes, SolutionOptions, SourceOptions, StandardFilter,
    TradeoffSelection, TradeoffsOptions,
};
pub use view::{apply_info_filter, apply_view, ViewFilter};
