//! Shared mocks for handler unit tests.

use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::flow::{DecisionFlow, FlowEvent};
use crate::domain::foundation::{DomainError, ErrorCode, FlowId};
use crate::ports::{FlowEventPublisher, FlowRepository};

/// In-memory repository mock with an optional simulated failure mode.
pub(crate) struct MockFlowRepository {
    flows: Mutex<Vec<DecisionFlow>>,
    fail: bool,
}

impl MockFlowRepository {
    pub(crate) fn new() -> Self {
        Self {
            flows: Mutex::new(Vec::new()),
            fail: false,
        }
    }

    pub(crate) fn with_flow(flow: DecisionFlow) -> Self {
        Self {
            flows: Mutex::new(vec![flow]),
            fail: false,
        }
    }

    pub(crate) fn failing() -> Self {
        Self {
            flows: Mutex::new(Vec::new()),
            fail: true,
        }
    }

    pub(crate) fn get(&self, id: FlowId) -> Option<DecisionFlow> {
        self.flows
            .lock()
            .unwrap()
            .iter()
            .find(|f| f.id() == id)
            .cloned()
    }

    fn check_failure(&self) -> Result<(), DomainError> {
        if self.fail {
            Err(DomainError::new(
                ErrorCode::StorageError,
                "Simulated storage failure",
            ))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl FlowRepository for MockFlowRepository {
    async fn save(&self, flow: &DecisionFlow) -> Result<(), DomainError> {
        self.check_failure()?;
        self.flows.lock().unwrap().push(flow.clone());
        Ok(())
    }

    async fn update(&self, flow: &DecisionFlow) -> Result<(), DomainError> {
        self.check_failure()?;
        let mut flows = self.flows.lock().unwrap();
        if let Some(pos) = flows.iter().position(|f| f.id() == flow.id()) {
            flows[pos] = flow.clone();
        }
        Ok(())
    }

    async fn find_by_id(&self, id: FlowId) -> Result<Option<DecisionFlow>, DomainError> {
        self.check_failure()?;
        Ok(self.get(id))
    }

    async fn delete(&self, id: FlowId) -> Result<(), DomainError> {
        self.check_failure()?;
        self.flows.lock().unwrap().retain(|f| f.id() != id);
        Ok(())
    }
}

/// Event publisher mock that records published events.
pub(crate) struct MockFlowEventPublisher {
    events: Mutex<Vec<FlowEvent>>,
}

impl MockFlowEventPublisher {
    pub(crate) fn new() -> Self {
        Self {
            events: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn published(&self) -> Vec<FlowEvent> {
        self.events.lock().unwrap().clone()
    }
}

#[async_trait]
impl FlowEventPublisher for MockFlowEventPublisher {
    async fn publish(&self, event: FlowEvent) -> Result<(), DomainError> {
        self.events.lock().unwrap().push(event);
        Ok(())
    }
}
