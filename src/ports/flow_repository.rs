//! Repository port for decision flow sessions.

use async_trait::async_trait;

use crate::domain::flow::DecisionFlow;
use crate::domain::foundation::{DomainError, FlowId};

/// Storage for flow sessions.
///
/// One aggregate per session; commands load, mutate, and store exactly one.
#[async_trait]
pub trait FlowRepository: Send + Sync {
    /// Persists a new flow.
    async fn save(&self, flow: &DecisionFlow) -> Result<(), DomainError>;

    /// Persists changes to an existing flow.
    async fn update(&self, flow: &DecisionFlow) -> Result<(), DomainError>;

    /// Loads a flow by id.
    async fn find_by_id(&self, id: FlowId) -> Result<Option<DecisionFlow>, DomainError>;

    /// Removes a flow.
    async fn delete(&self, id: FlowId) -> Result<(), DomainError>;
}
