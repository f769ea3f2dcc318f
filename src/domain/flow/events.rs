//! Domain events emitted by the decision flow aggregate.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{FlowId, Timestamp};

use super::ViewMode;

/// Events recorded by [`super::DecisionFlow`] transitions.
///
/// Handlers drain these after a successful command and hand them to the
/// event publisher port.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FlowEvent {
    Created {
        flow_id: FlowId,
        created_at: Timestamp,
    },
    DecisionRecorded {
        flow_id: FlowId,
        step: usize,
        purchase_name: String,
        bought: bool,
        used_bnpl: bool,
    },
    Advanced {
        flow_id: FlowId,
        step: usize,
        view_mode: ViewMode,
    },
    SteppedBack {
        flow_id: FlowId,
        step: usize,
        view_mode: ViewMode,
    },
    Reset {
        flow_id: FlowId,
    },
}

impl FlowEvent {
    /// Short event type tag, used for logging.
    pub fn event_type(&self) -> &'static str {
        match self {
            FlowEvent::Created { .. } => "flow.created",
            FlowEvent::DecisionRecorded { .. } => "flow.decision_recorded",
            FlowEvent::Advanced { .. } => "flow.advanced",
            FlowEvent::SteppedBack { .. } => "flow.stepped_back",
            FlowEvent::Reset { .. } => "flow.reset",
        }
    }

    /// The flow this event belongs to.
    pub fn flow_id(&self) -> FlowId {
        match self {
            FlowEvent::Created { flow_id, .. }
            | FlowEvent::DecisionRecorded { flow_id, .. }
            | FlowEvent::Advanced { flow_id, .. }
            | FlowEvent::SteppedBack { flow_id, .. }
            | FlowEvent::Reset { flow_id } => *flow_id,
        }
    }
}
