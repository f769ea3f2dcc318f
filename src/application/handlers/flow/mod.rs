//! Handlers for the decision flow: one file per command or query.

mod advance_flow;
mod get_flow;
mod get_flow_summary;
mod record_decision;
mod reset_flow;
mod start_flow;
mod step_back;

pub use advance_flow::{AdvanceFlowCommand, AdvanceFlowError, AdvanceFlowHandler, AdvanceFlowResult};
pub use get_flow::{GetFlowError, GetFlowHandler, GetFlowQuery, GetFlowResult};
pub use get_flow_summary::{
    GetFlowSummaryError, GetFlowSummaryHandler, GetFlowSummaryQuery, GetFlowSummaryResult,
};
pub use record_decision::{
    RecordDecisionCommand, RecordDecisionError, RecordDecisionHandler, RecordDecisionResult,
};
pub use reset_flow::{ResetFlowCommand, ResetFlowError, ResetFlowHandler, ResetFlowResult};
pub use start_flow::{StartFlowCommand, StartFlowError, StartFlowHandler, StartFlowResult};
pub use step_back::{StepBackCommand, StepBackError, StepBackHandler, StepBackResult};

#[cfg(test)]
pub(crate) mod test_support;
