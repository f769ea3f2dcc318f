//! GetFlowHandler - Query handler for the current state of a flow session.

use std::sync::Arc;

use crate::domain::flow::DecisionFlow;
use crate::domain::foundation::{DomainError, FlowId};
use crate::ports::FlowRepository;

/// Query for one flow session.
#[derive(Debug, Clone)]
pub struct GetFlowQuery {
    pub flow_id: FlowId,
}

/// Result of the query.
#[derive(Debug)]
pub struct GetFlowResult {
    pub flow: DecisionFlow,
}

/// Error type for the flow query.
#[derive(Debug, Clone)]
pub enum GetFlowError {
    /// Flow not found.
    FlowNotFound(FlowId),
    /// Domain error (storage).
    Domain(DomainError),
}

impl std::fmt::Display for GetFlowError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GetFlowError::FlowNotFound(id) => write!(f, "Flow not found: {}", id),
            GetFlowError::Domain(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for GetFlowError {}

impl From<DomainError> for GetFlowError {
    fn from(err: DomainError) -> Self {
        GetFlowError::Domain(err)
    }
}

/// Handler for reading flow state.
pub struct GetFlowHandler {
    flow_repository: Arc<dyn FlowRepository>,
}

impl GetFlowHandler {
    pub fn new(flow_repository: Arc<dyn FlowRepository>) -> Self {
        Self { flow_repository }
    }

    pub async fn handle(&self, query: GetFlowQuery) -> Result<GetFlowResult, GetFlowError> {
        let flow = self
            .flow_repository
            .find_by_id(query.flow_id)
            .await?
            .ok_or(GetFlowError::FlowNotFound(query.flow_id))?;

        Ok(GetFlowResult { flow })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::flow::test_support::MockFlowRepository;

    #[tokio::test]
    async fn returns_the_stored_flow() {
        let flow = DecisionFlow::new();
        let flow_id = flow.id();
        let repo = Arc::new(MockFlowRepository::with_flow(flow));
        let handler = GetFlowHandler::new(repo);

        let result = handler.handle(GetFlowQuery { flow_id }).await.unwrap();

        assert_eq!(result.flow.id(), flow_id);
    }

    #[tokio::test]
    async fn fails_when_flow_not_found() {
        let repo = Arc::new(MockFlowRepository::new());
        let handler = GetFlowHandler::new(repo);

        let result = handler
            .handle(GetFlowQuery {
                flow_id: FlowId::new(),
            })
            .await;

        assert!(matches!(result, Err(GetFlowError::FlowNotFound(_))));
    }
}
