//! ResetFlowHandler - Command handler for restarting the exercise.

use std::sync::Arc;

use tracing::debug;

use crate::domain::flow::DecisionFlow;
use crate::domain::foundation::{DomainError, FlowId};
use crate::ports::{FlowEventPublisher, FlowRepository};

/// Command to reset a flow to its initial state.
#[derive(Debug, Clone)]
pub struct ResetFlowCommand {
    pub flow_id: FlowId,
}

/// Result of a reset.
#[derive(Debug)]
pub struct ResetFlowResult {
    /// The flow after the reset.
    pub flow: DecisionFlow,
}

/// Error type for resetting a flow.
#[derive(Debug, Clone)]
pub enum ResetFlowError {
    /// Flow not found.
    FlowNotFound(FlowId),
    /// Domain error (storage only; reset itself always succeeds).
    Domain(DomainError),
}

impl std::fmt::Display for ResetFlowError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResetFlowError::FlowNotFound(id) => write!(f, "Flow not found: {}", id),
            ResetFlowError::Domain(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for ResetFlowError {}

impl From<DomainError> for ResetFlowError {
    fn from(err: DomainError) -> Self {
        ResetFlowError::Domain(err)
    }
}

/// Handler for resetting flows.
pub struct ResetFlowHandler {
    flow_repository: Arc<dyn FlowRepository>,
    event_publisher: Arc<dyn FlowEventPublisher>,
}

impl ResetFlowHandler {
    pub fn new(
        flow_repository: Arc<dyn FlowRepository>,
        event_publisher: Arc<dyn FlowEventPublisher>,
    ) -> Self {
        Self {
            flow_repository,
            event_publisher,
        }
    }

    pub async fn handle(&self, cmd: ResetFlowCommand) -> Result<ResetFlowResult, ResetFlowError> {
        let mut flow = self
            .flow_repository
            .find_by_id(cmd.flow_id)
            .await?
            .ok_or(ResetFlowError::FlowNotFound(cmd.flow_id))?;

        flow.reset();
        debug!(flow_id = %flow.id(), "flow reset");

        self.flow_repository.update(&flow).await?;

        let events = flow.take_events();
        self.event_publisher.publish_all(events).await?;

        Ok(ResetFlowResult { flow })
    }
}
