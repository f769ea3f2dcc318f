//! GetFlowSummaryHandler - Query handler for the derived financial metrics.

use std::sync::Arc;

use crate::config::SimulationConfig;
use crate::domain::flow::{DecisionFlow, FlowSummary};
use crate::domain::foundation::{DomainError, FlowId};
use crate::ports::FlowRepository;

/// Query for the summary of one flow session.
#[derive(Debug, Clone)]
pub struct GetFlowSummaryQuery {
    pub flow_id: FlowId,
}

/// Result of the summary query.
#[derive(Debug)]
pub struct GetFlowSummaryResult {
    /// The flow the summary was derived from.
    pub flow: DecisionFlow,
    /// Every derived metric.
    pub summary: FlowSummary,
}

/// Error type for the summary query.
#[derive(Debug, Clone)]
pub enum GetFlowSummaryError {
    /// Flow not found.
    FlowNotFound(FlowId),
    /// Domain error (storage).
    Domain(DomainError),
}

impl std::fmt::Display for GetFlowSummaryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GetFlowSummaryError::FlowNotFound(id) => write!(f, "Flow not found: {}", id),
            GetFlowSummaryError::Domain(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for GetFlowSummaryError {}

impl From<DomainError> for GetFlowSummaryError {
    fn from(err: DomainError) -> Self {
        GetFlowSummaryError::Domain(err)
    }
}

/// Handler for deriving flow summaries.
///
/// Carries the simulation constants so callers never supply the initial
/// balance or plan length themselves.
pub struct GetFlowSummaryHandler {
    flow_repository: Arc<dyn FlowRepository>,
    simulation: SimulationConfig,
}

impl GetFlowSummaryHandler {
    pub fn new(flow_repository: Arc<dyn FlowRepository>, simulation: SimulationConfig) -> Self {
        Self {
            flow_repository,
            simulation,
        }
    }

    pub async fn handle(
        &self,
        query: GetFlowSummaryQuery,
    ) -> Result<GetFlowSummaryResult, GetFlowSummaryError> {
        let flow = self
            .flow_repository
            .find_by_id(query.flow_id)
            .await?
            .ok_or(GetFlowSummaryError::FlowNotFound(query.flow_id))?;

        let summary = FlowSummary::derive(
            &flow,
            self.simulation.initial_balance,
            self.simulation.week_count,
        );

        Ok(GetFlowSummaryResult { flow, summary })
    }
}
