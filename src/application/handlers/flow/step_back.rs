//! StepBackHandler - Command handler for reversing the last forward transition.

use std::sync::Arc;

use tracing::debug;

use crate::domain::flow::DecisionFlow;
use crate::domain::foundation::{DomainError, FlowId};
use crate::ports::{FlowEventPublisher, FlowRepository};

/// Command to step back in a flow.
#[derive(Debug, Clone)]
pub struct StepBackCommand {
    pub flow_id: FlowId,
}

/// Result of a step back.
#[derive(Debug)]
pub struct StepBackResult {
    /// The flow after the transition (unchanged when the step back was a
    /// no-op on the first deciding screen).
    pub flow: DecisionFlow,
}

/// Error type for stepping back.
#[derive(Debug, Clone)]
pub enum StepBackError {
    /// Flow not found.
    FlowNotFound(FlowId),
    /// Domain error (storage only; the transition itself is total).
    Domain(DomainError),
}

impl std::fmt::Display for StepBackError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StepBackError::FlowNotFound(id) => write!(f, "Flow not found: {}", id),
            StepBackError::Domain(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for StepBackError {}

impl From<DomainError> for StepBackError {
    fn from(err: DomainError) -> Self {
        StepBackError::Domain(err)
    }
}

/// Handler for stepping back.
pub struct StepBackHandler {
    flow_repository: Arc<dyn FlowRepository>,
    event_publisher: Arc<dyn FlowEventPublisher>,
}

impl StepBackHandler {
    pub fn new(
        flow_repository: Arc<dyn FlowRepository>,
        event_publisher: Arc<dyn FlowEventPublisher>,
    ) -> Self {
        Self {
            flow_repository,
            event_publisher,
        }
    }

    pub async fn handle(&self, cmd: StepBackCommand) -> Result<StepBackResult, StepBackError> {
        let mut flow = self
            .flow_repository
            .find_by_id(cmd.flow_id)
            .await?
            .ok_or(StepBackError::FlowNotFound(cmd.flow_id))?;

        flow.step_back();
        debug!(
            flow_id = %flow.id(),
            step = flow.current_step(),
            view_mode = ?flow.view_mode(),
            "stepped back"
        );

        self.flow_repository.update(&flow).await?;

        let events = flow.take_events();
        self.event_publisher.publish_all(events).await?;

        Ok(StepBackResult { flow })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::flow::test_support::{
        MockFlowEventPublisher, MockFlowRepository,
    };
    use crate::domain::flow::ViewMode;

    #[tokio::test]
    async fn undoes_the_latest_decision() {
        let mut flow = DecisionFlow::new();
        flow.record_decision(true, true).unwrap();
        flow.take_events();
        let flow_id = flow.id();

        let repo = Arc::new(MockFlowRepository::with_flow(flow));
        let publisher = Arc::new(MockFlowEventPublisher::new());
        let handler = StepBackHandler::new(repo.clone(), publisher.clone());

        let result = handler.handle(StepBackCommand { flow_id }).await.unwrap();

        assert_eq!(result.flow.view_mode(), ViewMode::Deciding);
        assert!(result.flow.decisions().is_empty());
        assert_eq!(result.flow.happiness_score(), 0);
        assert_eq!(publisher.published().len(), 1);
    }

    #[tokio::test]
    async fn first_step_no_op_publishes_nothing() {
        let mut flow = DecisionFlow::new();
        flow.take_events();
        let flow_id = flow.id();

        let repo = Arc::new(MockFlowRepository::with_flow(flow));
        let publisher = Arc::new(MockFlowEventPublisher::new());
        let handler = StepBackHandler::new(repo, publisher.clone());

        let result = handler.handle(StepBackCommand { flow_id }).await.unwrap();

        assert_eq!(result.flow.view_mode(), ViewMode::Deciding);
        assert_eq!(result.flow.current_step(), 0);
        assert!(publisher.published().is_empty());
    }

    #[tokio::test]
    async fn fails_when_flow_not_found() {
        let repo = Arc::new(MockFlowRepository::new());
        let publisher = Arc::new(MockFlowEventPublisher::new());
        let handler = StepBackHandler::new(repo, publisher);

        let result = handler
            .handle(StepBackCommand {
                flow_id: FlowId::new(),
            })
            .await;

        assert!(matches!(result, Err(StepBackError::FlowNotFound(_))));
    }
}
