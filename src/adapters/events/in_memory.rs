//! In-memory event publisher.
//!
//! Logs every event and keeps it in a buffer so tests and the
//! running process can inspect what happened.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::info;

use crate::domain::flow::FlowEvent;
use crate::domain::foundation::DomainError;
use crate::ports::FlowEventPublisher;

/// In-memory publisher for flow events.
#[derive(Debug, Clone)]
pub struct InMemoryFlowEventPublisher {
    events: Arc<RwLock<Vec<FlowEvent>>>,
}

impl InMemoryFlowEventPublisher {
    /// Create a new publisher with an empty buffer.
    pub fn new() -> Self {
        Self {
            events: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// All published events in publish order.
    pub async fn events(&self) -> Vec<FlowEvent> {
        self.events.read().await.clone()
    }

    /// Drop all buffered events.
    pub async fn clear(&self) {
        self.events.write().await.clear();
    }
}

impl Default for InMemoryFlowEventPublisher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl FlowEventPublisher for InMemoryFlowEventPublisher {
    async fn publish(&self, event: FlowEvent) -> Result<(), DomainError> {
        info!(
            event_type = event.event_type(),
            flow_id = %event.flow_id(),
            "flow event"
        );
        self.events.write().await.push(event);
        Ok(())
    }
}
