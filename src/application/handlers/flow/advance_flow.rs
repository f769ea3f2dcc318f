//! AdvanceFlowHandler - Command handler for leaving the intermediate summary.

use std::sync::Arc;

use tracing::debug;

use crate::domain::flow::DecisionFlow;
use crate::domain::foundation::{DomainError, FlowId};
use crate::ports::{FlowEventPublisher, FlowRepository};

/// Command to advance past the intermediate summary.
#[derive(Debug, Clone)]
pub struct AdvanceFlowCommand {
    pub flow_id: FlowId,
}

/// Result of a successful advance.
#[derive(Debug)]
pub struct AdvanceFlowResult {
    /// The flow after the transition.
    pub flow: DecisionFlow,
}

/// Error type for advancing a flow.
#[derive(Debug, Clone)]
pub enum AdvanceFlowError {
    /// Flow not found.
    FlowNotFound(FlowId),
    /// Domain error (e.g., not in the intermediate summary).
    Domain(DomainError),
}

impl std::fmt::Display for AdvanceFlowError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AdvanceFlowError::FlowNotFound(id) => write!(f, "Flow not found: {}", id),
            AdvanceFlowError::Domain(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for AdvanceFlowError {}

impl From<DomainError> for AdvanceFlowError {
    fn from(err: DomainError) -> Self {
        AdvanceFlowError::Domain(err)
    }
}

/// Handler for advancing flows.
pub struct AdvanceFlowHandler {
    flow_repository: Arc<dyn FlowRepository>,
    event_publisher: Arc<dyn FlowEventPublisher>,
}

impl AdvanceFlowHandler {
    pub fn new(
        flow_repository: Arc<dyn FlowRepository>,
        event_publisher: Arc<dyn FlowEventPublisher>,
    ) -> Self {
        Self {
            flow_repository,
            event_publisher,
        }
    }

    pub async fn handle(
        &self,
        cmd: AdvanceFlowCommand,
    ) -> Result<AdvanceFlowResult, AdvanceFlowError> {
        let mut flow = self
            .flow_repository
            .find_by_id(cmd.flow_id)
            .await?
            .ok_or(AdvanceFlowError::FlowNotFound(cmd.flow_id))?;

        flow.advance()?;
        debug!(
            flow_id = %flow.id(),
            step = flow.current_step(),
            view_mode = ?flow.view_mode(),
            "flow advanced"
        );

        self.flow_repository.update(&flow).await?;

        let events = flow.take_events();
        self.event_publisher.publish_all(events).await?;

        Ok(AdvanceFlowResult { flow })
    }
}
