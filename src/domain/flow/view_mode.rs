//! View mode for a decision flow session.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::StateMachine;

/// The screen a flow session is currently presenting.
///
/// `Deciding` asks for a decision on the current scenario,
/// `IntermediateSummary` shows the impact of the latest decision, and
/// `FinalSummary` shows the full wrap-up after the last scenario.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewMode {
    Deciding,
    IntermediateSummary,
    FinalSummary,
}

impl StateMachine for ViewMode {
    fn can_transition_to(&self, target: &Self) -> bool {
        use ViewMode::*;
        matches!(
            (self, target),
            (Deciding, IntermediateSummary)
                | (IntermediateSummary, Deciding)
                | (IntermediateSummary, FinalSummary)
                | (FinalSummary, IntermediateSummary)
        )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use ViewMode::*;
        match self {
            Deciding => vec![IntermediateSummary],
            IntermediateSummary => vec![Deciding, FinalSummary],
            FinalSummary => vec![IntermediateSummary],
        }
    }
}
