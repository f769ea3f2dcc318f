//! StartFlowHandler - Command handler for creating a new flow session.

use std::sync::Arc;

use tracing::debug;

use crate::domain::flow::DecisionFlow;
use crate::domain::foundation::DomainError;
use crate::ports::{FlowEventPublisher, FlowRepository};

/// Command to start a new decision flow session.
#[derive(Debug, Clone, Default)]
pub struct StartFlowCommand;

/// Result of a successful start.
#[derive(Debug)]
pub struct StartFlowResult {
    /// The freshly created flow.
    pub flow: DecisionFlow,
}

/// Error type for starting a flow.
#[derive(Debug, Clone)]
pub enum StartFlowError {
    /// Domain error (e.g., storage failure).
    Domain(DomainError),
}

impl std::fmt::Display for StartFlowError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StartFlowError::Domain(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for StartFlowError {}

impl From<DomainError> for StartFlowError {
    fn from(err: DomainError) -> Self {
        StartFlowError::Domain(err)
    }
}

/// Handler for starting flow sessions.
pub struct StartFlowHandler {
    flow_repository: Arc<dyn FlowRepository>,
    event_publisher: Arc<dyn FlowEventPublisher>,
}

impl StartFlowHandler {
    pub fn new(
        flow_repository: Arc<dyn FlowRepository>,
        event_publisher: Arc<dyn FlowEventPublisher>,
    ) -> Self {
        Self {
            flow_repository,
            event_publisher,
        }
    }

    pub async fn handle(&self, _cmd: StartFlowCommand) -> Result<StartFlowResult, StartFlowError> {
        let mut flow = DecisionFlow::new();
        debug!(flow_id = %flow.id(), "starting flow session");

        self.flow_repository.save(&flow).await?;

        let events = flow.take_events();
        self.event_publisher.publish_all(events).await?;

        Ok(StartFlowResult { flow })
    }
}
