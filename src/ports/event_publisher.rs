//! Event publisher port for flow domain events.

use async_trait::async_trait;

use crate::domain::flow::FlowEvent;
use crate::domain::foundation::DomainError;

/// Publishes domain events drained from the aggregate after a command.
#[async_trait]
pub trait FlowEventPublisher: Send + Sync {
    /// Publishes a single event.
    async fn publish(&self, event: FlowEvent) -> Result<(), DomainError>;

    /// Publishes a batch of events in order.
    async fn publish_all(&self, events: Vec<FlowEvent>) -> Result<(), DomainError> {
        for event in events {
            self.publish(event).await?;
        }
        Ok(())
    }
}
