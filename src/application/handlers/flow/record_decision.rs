//! RecordDecisionHandler - Command handler for resolving the current scenario.

use std::sync::Arc;

use tracing::debug;

use crate::domain::flow::DecisionFlow;
use crate::domain::foundation::{DomainError, FlowId};
use crate::ports::{FlowEventPublisher, FlowRepository};

/// Command to record a decision on the current scenario.
#[derive(Debug, Clone)]
pub struct RecordDecisionCommand {
    pub flow_id: FlowId,
    pub bought: bool,
    pub used_bnpl: bool,
}

/// Result of a successfully recorded decision.
#[derive(Debug)]
pub struct RecordDecisionResult {
    /// The flow after the transition.
    pub flow: DecisionFlow,
}

/// Error type for recording a decision.
#[derive(Debug, Clone)]
pub enum RecordDecisionError {
    /// Flow not found.
    FlowNotFound(FlowId),
    /// Domain error (e.g., not in deciding mode).
    Domain(DomainError),
}

impl std::fmt::Display for RecordDecisionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RecordDecisionError::FlowNotFound(id) => write!(f, "Flow not found: {}", id),
            RecordDecisionError::Domain(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for RecordDecisionError {}

impl From<DomainError> for RecordDecisionError {
    fn from(err: DomainError) -> Self {
        RecordDecisionError::Domain(err)
    }
}

/// Handler for recording decisions.
pub struct RecordDecisionHandler {
    flow_repository: Arc<dyn FlowRepository>,
    event_publisher: Arc<dyn FlowEventPublisher>,
}

impl RecordDecisionHandler {
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
        cmd: RecordDecisionCommand,
    ) -> Result<RecordDecisionResult, RecordDecisionError> {
        let mut flow = self
            .flow_repository
            .find_by_id(cmd.flow_id)
            .await?
            .ok_or(RecordDecisionError::FlowNotFound(cmd.flow_id))?;

        flow.record_decision(cmd.bought, cmd.used_bnpl)?;
        debug!(
            flow_id = %flow.id(),
            step = flow.current_step(),
            bought = cmd.bought,
            used_bnpl = cmd.used_bnpl,
            "decision recorded"
        );

        self.flow_repository.update(&flow).await?;

        let events = flow.take_events();
        self.event_publisher.publish_all(events).await?;

        Ok(RecordDecisionResult { flow })
    }
}
